use anyhow::Result;
use restsign_core::time::{now, parse_date};
use restsign_core::OsEnv;
use restsign_game_rest::{Config, RequestSigner};

fn main() -> Result<()> {
    // Initialize logging for debugging
    let _ = env_logger::builder().is_test(true).try_init();

    // Load credentials from RESTSIGN_* env, falling back to demo values.
    let config = Config::new().from_env(&OsEnv);
    let config = if config.credential().is_err() {
        println!("No RESTSIGN credentials found, using demo credentials for example");
        Config::new()
            .with_client_id("demo-client")
            .with_app_id("demo-app")
            .with_api_key("demo-key")
            .with_api_secret("demo-secret")
    } else {
        config
    };
    let cred = config.credential()?;

    // The scope date must be agreed with the backend, today is only a demo value.
    let time = match config.scope_date.as_deref() {
        Some(date) => parse_date(date)?,
        None => now(),
    };
    let service = config.service_name.as_deref().unwrap_or("scoreboard");
    let signer = RequestSigner::new(service, time);

    let req = http::Request::get("https://localhost:8080/v1/scoreboard/top?limit=10").body(())?;
    let (mut parts, _) = req.into_parts();
    signer.sign_request(&mut parts, b"", &cred)?;

    for (name, value) in parts.headers.iter() {
        println!("{name}: {value:?}");
    }

    Ok(())
}
