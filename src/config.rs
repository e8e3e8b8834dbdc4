use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Base URL the derived expert link is concatenated onto.
    pub base_url: String,
    pub spreadsheet_id: String,
    pub sheets_api_base: String,
    pub sheets_access_token: String,
    /// Path of the bundled stylesheet inlined into the form page.
    pub styles_path: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let spreadsheet_id = env_required("SHEETS_SPREADSHEET_ID")?;
        let sheets_access_token = env_required("SHEETS_ACCESS_TOKEN")?;

        let host: IpAddr = env_or("EXPERTLINK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid EXPERTLINK_HOST: {e}"))?;

        let port: u16 = env_or("EXPERTLINK_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid EXPERTLINK_PORT: {e}"))?;

        let base_url = env_or("EXPERTLINK_BASE_URL", "https://www.iecs.fcu.edu.tw/");

        let sheets_api_base = env_or("SHEETS_API_BASE", "https://sheets.googleapis.com");

        let styles_path = env_or("EXPERTLINK_STYLES_PATH", "styles.html");

        let log_level = env_or("EXPERTLINK_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            base_url,
            spreadsheet_id,
            sheets_api_base,
            sheets_access_token,
            styles_path,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
