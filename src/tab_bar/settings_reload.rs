//! Settings hot reload for a live tab bar.

use crate::config::{Settings, SettingsWatcher};
use crate::tab_bar::TabBar;

impl TabBar {
    /// Apply a pending change of the watched settings file.
    ///
    /// Returns whether new settings were applied. A file that fails to load
    /// leaves the current settings in place.
    pub fn check_settings_reload(&mut self, watcher: &SettingsWatcher) -> bool {
        let Some(event) = watcher.try_recv() else {
            return false;
        };
        match Settings::load_from(&event.path) {
            Ok(settings) => {
                log::info!("Settings reloaded from {}", event.path.display());
                self.apply_settings(settings);
                true
            }
            Err(e) => {
                log::warn!(
                    "Settings reload from {} failed: {:#}",
                    event.path.display(),
                    e
                );
                false
            }
        }
    }
}
