use anyhow::Context;

const API_KEY_ENV_VAR: &str = "GRAPHHOPPER_API_KEY";
const PORT_ENV_VAR: &str = "FARLED_PORT";
const PUBLIC_DIR_ENV_VAR: &str = "FARLED_PUBLIC_DIR";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "./public";

/// Process configuration, read once at startup and carried in [`AppState`]
/// from there on.
///
/// [`AppState`]: crate::state::AppState
pub struct Config {
    pub graphhopper_api_key: String,
    pub port: u16,
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let graphhopper_api_key = std::env::var(API_KEY_ENV_VAR)
            .with_context(|| format!("{API_KEY_ENV_VAR} must be set"))?;

        let port = match std::env::var(PORT_ENV_VAR) {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("{PORT_ENV_VAR} must be a port number, got \"{raw}\""))?,
            Err(_) => DEFAULT_PORT,
        };

        let public_dir =
            std::env::var(PUBLIC_DIR_ENV_VAR).unwrap_or_else(|_| DEFAULT_PUBLIC_DIR.to_string());

        Ok(Config {
            graphhopper_api_key,
            port,
            public_dir,
        })
    }
}
