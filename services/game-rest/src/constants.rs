// Signing algorithm tag, shared with the scoreboard backend.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

// Env values used in game rest services.
/// Env name of the client id.
pub const RESTSIGN_CLIENT_ID: &str = "RESTSIGN_CLIENT_ID";
/// Env name of the app id.
pub const RESTSIGN_APP_ID: &str = "RESTSIGN_APP_ID";
/// Env name of the api key.
pub const RESTSIGN_API_KEY: &str = "RESTSIGN_API_KEY";
/// Env name of the api secret.
pub const RESTSIGN_API_SECRET: &str = "RESTSIGN_API_SECRET";
/// Env name of the target service.
pub const RESTSIGN_SERVICE_NAME: &str = "RESTSIGN_SERVICE_NAME";
/// Env name of the credential scope date, `YYYYMMDD`.
pub const RESTSIGN_SCOPE_DATE: &str = "RESTSIGN_SCOPE_DATE";

// Url fragments that must never reach the signed path.
pub const SCHEME_SEPARATOR: &str = "://";
pub const HOST_SEPARATOR: char = '.';
pub const QUERY_SEPARATOR: char = '?';
