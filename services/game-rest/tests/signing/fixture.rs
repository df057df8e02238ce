use super::init_signer;
use anyhow::Result;
use pretty_assertions::assert_eq;
use restsign_core::hash::hex_sha256;

const CANONICAL_REQUEST: &str = "GET
/v1/servicename/action/parameter
arg1=1&arg2=2&arg3=3
host:https://localhost
range:
x-date:20160501


host;range;x-date
e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

const HASHED_CANONICAL_REQUEST: &str =
    "1a64e2178c77dc7c94d2786462fe276d60a527edc1a751654ca6577ba885152e";

const SIGNATURE: &str = "UVv7IXUJW9JXucGkO1SNCSpHzIRxvljisAFLGLIa6Rg=";

fn scoreboard_signer() -> Result<restsign_game_rest::Signer> {
    let mut signer = init_signer()?;
    signer.add_header("host", "https://localhost")?;
    signer.add_header("range", "")?;
    signer.add_header("x-date", "20160501")?;
    signer.set_service_name("scoreboard")?;
    signer.set_url("GET", "/v1/serviceName/action/parameter?arg1=1&arg3=3&arg2=2")?;
    signer.set_body(None);

    Ok(signer)
}

#[test]
fn test_scoreboard_canonical_parts() -> Result<()> {
    let signer = scoreboard_signer()?;

    assert_eq!(signer.canonical_path(), "/v1/servicename/action/parameter");
    assert_eq!(signer.canonical_query(), "arg1=1&arg2=2&arg3=3");
    assert_eq!(
        signer.canonical_headers(),
        "host:https://localhost\nrange:\nx-date:20160501\n\n"
    );
    assert_eq!(signer.signed_header_names(), "host;range;x-date");
    assert_eq!(signer.payload_hash(), hex_sha256(b""));
    Ok(())
}

#[test]
fn test_scoreboard_canonical_request() -> Result<()> {
    let signer = scoreboard_signer()?;

    assert_eq!(signer.canonical_request(), CANONICAL_REQUEST);
    assert_eq!(signer.hashed_canonical_request(), HASHED_CANONICAL_REQUEST);
    assert_eq!(
        signer.string_to_sign(),
        format!("AWS4-HMAC-SHA256\n\n20160619/scoreboard\n{HASHED_CANONICAL_REQUEST}")
    );
    Ok(())
}

#[test]
fn test_scoreboard_signature() -> Result<()> {
    let signer = scoreboard_signer()?;

    assert_eq!(signer.signature(), SIGNATURE);
    assert_eq!(
        signer.create_signature_header(),
        format!(
            "AWS4-HMAC-SHA256 Credentials=<APIKEY>/20160619/scoreboard SignedHeaders=host;range;x-date Signature={SIGNATURE}"
        )
    );
    Ok(())
}

#[test]
fn test_reads_are_idempotent() -> Result<()> {
    let signer = scoreboard_signer()?;

    assert_eq!(signer.canonical_request(), signer.canonical_request());
    assert_eq!(
        signer.hashed_canonical_request(),
        signer.hashed_canonical_request()
    );
    assert_eq!(signer.signature(), signer.signature());
    assert_eq!(
        signer.create_signature_header(),
        signer.create_signature_header()
    );
    Ok(())
}
