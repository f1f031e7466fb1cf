use serde::{Deserialize, Serialize};

use crate::docking::{DockingMode, SideBarLocation, WidthBounds};
use crate::toolbar::ToolbarMetrics;
use crate::viewport::Breakpoints;

/// Tunable constants of the layout policy, agreed with the editor shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub breakpoints: Breakpoints,
    pub property_grid: WidthBounds,
    pub metrics: ToolbarMetrics,
}

impl LayoutConfig {
    pub fn normalized(&self) -> Self {
        Self {
            breakpoints: self.breakpoints.normalized(),
            property_grid: self.property_grid.normalized(),
            metrics: self.metrics.normalized(),
        }
    }
}

/// Session-scoped user preferences applied when an editor starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub side_bar_location: SideBarLocation,
    pub show_property_grid: bool,
    pub docking: DockingMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            side_bar_location: SideBarLocation::Right,
            show_property_grid: true,
            docking: DockingMode::Inline,
        }
    }
}
