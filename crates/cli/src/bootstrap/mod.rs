mod database;

pub use database::init_database;

use opentld_domain::config::{CliOverrides, Config};
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.json_output() {
        builder.json().init();
    } else {
        builder.init();
    }
}
