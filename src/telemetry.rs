//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global tracing subscriber.
///
/// Events go to stderr so stdout only carries command output. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init(config: &Config) {
    let (filter, rejected) = match EnvFilter::try_new(&config.log_level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.is_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }

    if let Some(e) = rejected {
        tracing::warn!(
            "Invalid log filter '{}', falling back to 'info': {}",
            config.log_level,
            e
        );
    }
}
