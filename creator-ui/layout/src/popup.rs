use serde::{Deserialize, Serialize};

use crate::viewport::LayoutMode;

/// Popup flavor requested by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupKind {
    /// List anchored to its trigger: overflow menus, question type picker.
    Dropdown,
    /// Dialog with apply/cancel buttons, such as property value editors.
    Modal,
}

/// How a popup is presented in the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupPresentation {
    Dropdown,
    Modal,
    /// Full-viewport sheet.
    Overlay,
}

/// Decide how a popup of `kind` renders in `mode`.
///
/// Mobile has no room for anchored lists or centered dialogs, so every popup
/// becomes a full-viewport overlay there.
pub fn popup_presentation(
    mode: LayoutMode,
    kind: PopupKind,
) -> PopupPresentation {
    match (mode, kind) {
        (LayoutMode::Mobile, _) => PopupPresentation::Overlay,
        (_, PopupKind::Dropdown) => PopupPresentation::Dropdown,
        (_, PopupKind::Modal) => PopupPresentation::Modal,
    }
}

/// Presentation of each popup kind for one layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopupPresentations {
    pub dropdown: PopupPresentation,
    pub modal: PopupPresentation,
}

impl PopupPresentations {
    pub fn for_mode(mode: LayoutMode) -> Self {
        Self {
            dropdown: popup_presentation(mode, PopupKind::Dropdown),
            modal: popup_presentation(mode, PopupKind::Modal),
        }
    }

    pub fn get(&self, kind: PopupKind) -> PopupPresentation {
        match kind {
            PopupKind::Dropdown => self.dropdown,
            PopupKind::Modal => self.modal,
        }
    }
}
