use thiserror::Error;

use crate::locale::LocaleError;
use crate::settings::SettingsError;
use crate::script::ScriptError;

/// Top-level failure of the replay binary.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load layout settings")]
    Settings(#[from] SettingsError),
    #[error("failed to load locale strings")]
    Locale(#[from] LocaleError),
    #[error("failed to load event script")]
    Script(#[from] ScriptError),
    #[error("failed to write report")]
    Output(#[from] std::io::Error),
    #[error("failed to encode report")]
    Encode(#[from] serde_json::Error),
}
