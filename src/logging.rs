use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger, writing to stderr.
///
/// Only warnings and errors are shown unless `verbose` is `true`. `RUST_LOG` takes precedence
/// over both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // Fails only if a logger is already installed
    let _ = builder.try_init();
}
