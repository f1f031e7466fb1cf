use serde::{Deserialize, Serialize};

use crate::viewport::LayoutMode;

/// Explicit user toggles that feed the visibility policy.
///
/// The host's "show property grid" switch maps onto `property_grid_expanded`;
/// there is no ambient global flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelToggles {
    pub property_grid_expanded: bool,
}

impl Default for PanelToggles {
    fn default() -> Self {
        Self {
            property_grid_expanded: true,
        }
    }
}

/// Per-region presence decided for one layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelVisibility {
    pub toolbox_visible: bool,
    pub toolbox_compact: bool,
    pub page_navigator_visible: bool,
    pub property_grid_visible: bool,
    pub top_toolbar_visible: bool,
    pub footer_toolbar_visible: bool,
    pub tab_overflow_active: bool,
}

/// Decide which editor regions render for `mode`.
///
/// Narrow and mobile layouts drop the toolbox and page navigator from the
/// tree entirely. The footer toolbar replaces the top toolbar on mobile.
pub fn decide_visibility(
    mode: LayoutMode,
    toggles: &PanelToggles,
) -> PanelVisibility {
    let side_regions = mode.has_side_regions();

    PanelVisibility {
        toolbox_visible: side_regions,
        toolbox_compact: mode == LayoutMode::Medium,
        page_navigator_visible: side_regions,
        property_grid_visible: toggles.property_grid_expanded,
        top_toolbar_visible: mode != LayoutMode::Mobile,
        footer_toolbar_visible: mode == LayoutMode::Mobile,
        tab_overflow_active: mode != LayoutMode::Wide,
    }
}
