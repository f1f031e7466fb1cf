use serde::{Deserialize, Serialize};

use crate::docking::{DockingDecision, SideBarLocation};
use crate::overflow::{OverflowLayout, ToolbarAction};
use crate::popup::{PopupPresentation, PopupPresentations};
use crate::toolbar::CreatorTab;
use crate::viewport::{LayoutMode, ViewportSize};
use crate::visibility::PanelVisibility;

/// Toolbars whose overflow is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarRegion {
    TabbedMenu,
    TopToolbar,
    FooterToolbar,
    PageBar,
    Toolbox,
}

/// Layout of one rendered toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarLayout {
    pub region: ToolbarRegion,
    pub layout: OverflowLayout,
}

/// Entries shown by the open overflow popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverflowPopup {
    pub region: ToolbarRegion,
    pub presentation: PopupPresentation,
    pub entries: Vec<ToolbarAction>,
}

/// Read-only state the rendering layer draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSnapshot {
    pub viewport: ViewportSize,
    pub mode: LayoutMode,
    pub active_tab: CreatorTab,
    pub side_bar_location: SideBarLocation,
    pub visibility: PanelVisibility,
    pub docking: Option<DockingDecision>,
    /// Rendered toolbars, absent regions omitted.
    pub toolbars: Vec<ToolbarLayout>,
    pub popup: Option<OverflowPopup>,
    /// How host popups (pickers, value editors) render in this layout.
    pub popup_presentation: PopupPresentations,
}

impl LayoutSnapshot {
    pub fn toolbar(&self, region: ToolbarRegion) -> Option<&OverflowLayout> {
        self.toolbars
            .iter()
            .find(|toolbar| toolbar.region == region)
            .map(|toolbar| &toolbar.layout)
    }

    pub fn has_toolbar(&self, region: ToolbarRegion) -> bool {
        self.toolbar(region).is_some()
    }
}
