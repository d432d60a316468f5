use std::env;

/// Crates whose per-connection logs are muted unless RUST_LOG names them
const NOISY_MODULES: [&str; 2] = ["hyper", "reqwest"];

/// Initialize env_logger on stderr, defaulting to `info`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let log_level = env::var("RUST_LOG").unwrap_or_default();
    for module in NOISY_MODULES {
        if !log_level.contains(module) {
            builder.filter_module(module, log::LevelFilter::Warn);
        }
    }

    let _ = builder.target(env_logger::Target::Stderr).try_init();
}
