use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub repo: String,
    pub branch: String,
    pub db_path: String,
    pub github_token: Option<String>,
    pub static_dir: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let repo = env_required("FOLIO_REPO")?;
        if repo.split('/').filter(|s| !s.is_empty()).count() != 2 {
            return Err(format!("Invalid FOLIO_REPO '{repo}': expected owner/name"));
        }

        let host: IpAddr = env_or("FOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_HOST: {e}"))?;

        let port: u16 = env_or("FOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_PORT: {e}"))?;

        let branch = env_or("FOLIO_BRANCH", "main");
        let db_path = env_or("FOLIO_DB_PATH", "database/projects.json");
        let static_dir = env_or("FOLIO_STATIC_DIR", "static");

        // Absent token disables writes; reads stay available.
        let github_token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let log_level = env_or("FOLIO_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            repo,
            branch,
            db_path,
            github_token,
            static_dir,
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
