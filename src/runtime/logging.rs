use crate::config::LogSettings;

/// Install `env_logger`, using `settings.level` unless `RUST_LOG` is set.
pub fn init(settings: &LogSettings) {
    let env = env_logger::Env::default().default_filter_or(settings.level.as_str());
    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
    {
        eprintln!("tracklist: logger already initialised: {e}");
    }
}
