mod fixture;
mod properties;

use anyhow::Result;
use restsign_core::time::parse_date;
use restsign_game_rest::Signer;

/// Scope date every fixture in this suite is pinned to.
pub const SCOPE_DATE: &str = "20160619";

/// Build a signer with the fixture credential and a pinned scope date.
pub fn init_signer() -> Result<Signer> {
    let _ = env_logger::builder().is_test(true).try_init();

    let signer = Signer::new(
        "<CLIENTID>",
        "<APPID>",
        "<APIKEY>",
        "<APISECRET>",
        parse_date(SCOPE_DATE)?,
    )?;
    Ok(signer)
}
