use crate::config::{Settings, SettingsError};

/// Settings to run with, and the reason they are the defaults, if they are.
///
/// The failure is handed back instead of printed: this runs before the
/// logger exists, and the logger's own level comes from the result.
pub fn load_settings() -> (Settings, Option<SettingsError>) {
    or_defaults(Settings::load_checked())
}

pub(super) fn or_defaults(
    loaded: Result<Settings, SettingsError>,
) -> (Settings, Option<SettingsError>) {
    match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    }
}
