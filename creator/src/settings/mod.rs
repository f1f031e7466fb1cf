mod errors;
mod model;
mod storage;

use std::path::Path;

pub(crate) use errors::SettingsError;
pub(crate) use model::SettingsData;
use storage::{SettingsLoadStatus, load_settings_from_path};
pub(crate) use storage::{save_settings_to_path, settings_path};

/// Load settings from `path`, degrading to defaults when the file is missing
/// or malformed.
pub(crate) fn load_settings(
    path: &Path,
) -> Result<SettingsData, SettingsError> {
    let (settings, status) = load_settings_from_path(path)?.into_parts();
    match status {
        SettingsLoadStatus::Loaded => {
            log::info!("layout settings loaded from {}", path.display());
        },
        SettingsLoadStatus::Repaired(sections) => {
            log::warn!(
                "layout settings at {} repaired: {} reset to defaults",
                path.display(),
                sections.join(", ")
            );
        },
        SettingsLoadStatus::Missing => {
            log::info!(
                "no layout settings at {}, using defaults",
                path.display()
            );
        },
        SettingsLoadStatus::Invalid(message) => {
            log::warn!("settings file invalid: {message}");
        },
    }

    Ok(settings)
}
