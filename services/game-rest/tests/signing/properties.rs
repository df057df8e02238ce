use super::{init_signer, SCOPE_DATE};
use anyhow::Result;
use pretty_assertions::assert_eq;
use restsign_core::hash::hex_sha256;
use restsign_core::time::parse_date;
use restsign_core::ErrorKind;
use restsign_game_rest::Signer;

#[test]
fn test_construction_requires_every_credential() -> Result<()> {
    let valid = ["client", "app", "key", "secret"];
    let time = parse_date(SCOPE_DATE)?;

    for missing in 0..valid.len() {
        for replacement in [None, Some("")] {
            let mut args = valid.map(Some);
            args[missing] = replacement;

            let err = Signer::new(args[0], args[1], args[2], args[3], time)
                .expect_err("missing credential must be rejected");
            assert_eq!(err.kind(), ErrorKind::MissingCredential);
            assert_eq!(
                err.field(),
                Some(["client_id", "app_id", "api_key", "api_secret"][missing])
            );
        }
    }

    assert!(Signer::new(valid[0], valid[1], valid[2], valid[3], time).is_ok());
    Ok(())
}

#[test]
fn test_header_block_keeps_insertion_order() -> Result<()> {
    let mut signer = init_signer()?;
    signer.add_header("HOST", "1")?;
    signer.add_header("range", "2")?;
    signer.add_header("X-Date", "3")?;

    assert_eq!(signer.canonical_headers(), "HOST:1\nrange:2\nX-Date:3\n\n");
    assert_eq!(signer.signed_header_names(), "HOST;range;X-Date");
    Ok(())
}

#[test]
fn test_reordering_headers_changes_signature() -> Result<()> {
    let mut first = init_signer()?;
    first.add_header("host", "localhost")?;
    first.add_header("x-date", "20160501")?;

    let mut second = init_signer()?;
    second.add_header("x-date", "20160501")?;
    second.add_header("host", "localhost")?;

    assert_eq!(second.canonical_headers(), "x-date:20160501\nhost:localhost\n\n");
    assert_eq!(second.signed_header_names(), "x-date;host");
    assert_ne!(first.canonical_headers(), second.canonical_headers());
    assert_ne!(first.signature(), second.signature());
    Ok(())
}

#[test]
fn test_duplicate_header_names_are_not_deduplicated() -> Result<()> {
    let mut signer = init_signer()?;
    signer.add_header("host", "a")?;
    signer.add_header("host", "b")?;

    assert_eq!(signer.signed_header_names(), "host;host");
    assert_eq!(signer.canonical_headers(), "host:b\n\n");
    Ok(())
}

#[test]
fn test_header_values_are_normalized() -> Result<()> {
    let mut signer = init_signer()?;
    signer.add_header("Content-Type", "  Application/JSON;   Charset=UTF-8 ")?;

    assert_eq!(
        signer.canonical_headers(),
        "Content-Type:application/json; charset=utf-8\n\n"
    );
    Ok(())
}

#[test]
fn test_query_sort_is_whole_token() -> Result<()> {
    let mut signer = init_signer()?;
    signer.set_url("GET", "/v1/a?b=val&a=val2")?;

    assert_eq!(signer.canonical_query(), "a=val2&b=val");
    Ok(())
}

#[test]
fn test_url_validation() -> Result<()> {
    let mut signer = init_signer()?;

    for url in ["http://x", "x.com", "/v1/a?x?y"] {
        let err = signer
            .set_url("GET", url)
            .expect_err("url must be rejected");
        assert_eq!(err.kind(), ErrorKind::MalformedUrl, "url: {url}");
    }

    signer.set_url("GET", " /V1/Path  ?query=val&param2=val2")?;
    assert_eq!(signer.canonical_path(), "/v1/path");
    Ok(())
}

#[test]
fn test_rejected_url_keeps_previous_state() -> Result<()> {
    let mut signer = init_signer()?;
    signer.set_url("POST", "/v1/scoreboard/scores")?;
    let before = signer.canonical_request();

    assert!(signer.set_url("GET", "/v1/a?x?y").is_err());
    assert_eq!(signer.canonical_request(), before);
    Ok(())
}

#[test]
fn test_hashed_canonical_request_is_case_folded() -> Result<()> {
    let mut upper = init_signer()?;
    upper.set_url("GET", "/v1/a")?;
    upper.add_header("X-Debug", "true")?;

    let mut lower = init_signer()?;
    lower.set_url("get", "/v1/a")?;
    lower.add_header("x-debug", "true")?;

    assert_ne!(upper.canonical_request(), lower.canonical_request());
    assert!(upper.canonical_request().starts_with("GET\n"));
    assert!(lower.canonical_request().starts_with("GET\n"));
    assert_eq!(
        upper.hashed_canonical_request(),
        lower.hashed_canonical_request()
    );
    assert_eq!(
        upper.hashed_canonical_request(),
        hex_sha256(upper.canonical_request().to_lowercase().as_bytes())
    );
    assert_ne!(
        upper.hashed_canonical_request(),
        hex_sha256(upper.canonical_request().as_bytes())
    );
    Ok(())
}

#[test]
fn test_signature_is_url_safe() -> Result<()> {
    for body in ["", "{}", "{\"score\":42}", "payload", "another payload"] {
        let mut signer = init_signer()?;
        signer.set_body(body);

        let signature = signer.signature();
        assert_eq!(signature.len(), 44);
        assert!(!signature.contains('+') && !signature.contains('/'));
        assert!(signature.ends_with('='));
    }
    Ok(())
}
