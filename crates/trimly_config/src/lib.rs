use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use tracing::debug;

pub mod models;
pub use models::*;

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Loads `.env` once per process so repeated config loads stay cheap.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        let _ = dotenv::dotenv();
    });
}

/// Loads the tenant configuration.
///
/// Sources are layered in the usual order: `config/default.*`, then an
/// optional `config/{RUN_ENV}.*` override file, then environment
/// variables prefixed with `TRIMLY_` (double underscore as the section
/// separator, e.g. `TRIMLY_SCHEDULE__OPEN_TIME=08:00`). Dependent
/// crates call this so they do not need to know where the raw tenant
/// blob comes from.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "default".into());
    debug!("Loading tenant configuration (RUN_ENV={})", run_env);

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("TRIMLY").separator("__"))
        .build()?;

    config.try_deserialize()
}
