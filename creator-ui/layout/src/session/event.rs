use serde::{Deserialize, Serialize};

use super::model::ToolbarRegion;
use crate::docking::{DockingDecision, DockingMode, SideBarLocation};
use crate::toolbar::CreatorTab;
use crate::viewport::{LayoutMode, ViewportSize};

/// Host input events reduced by the layout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEvent {
    /// Window resized.
    Resized(ViewportSize),
    /// Pointer pressed on the property grid resize handle.
    DragStarted,
    /// Pointer moved horizontally while dragging.
    DragMoved { dx: i32 },
    DragEnded,
    /// Collapse button.
    CollapsePropertyGrid,
    /// Expand button.
    ExpandPropertyGrid,
    /// Close button of the mobile flyout.
    ClosePropertyGrid,
    /// Settings action on a toolbar.
    OpenSettings,
    /// Programmatic "show property grid" switch.
    SetShowPropertyGrid(bool),
    /// Programmatic side bar location change.
    SetSideBarLocation(SideBarLocation),
    RequestDocking(DockingMode),
    SelectTab(CreatorTab),
    SetPageCount(usize),
    NextPage,
    PrevPage,
    /// Click on a toolbar action by id.
    InvokeAction { id: String },
    /// Click on the "more" trigger of a toolbar.
    OpenOverflow(ToolbarRegion),
    /// Escape or a click outside the popup.
    CloseOverflow,
    /// Pick an entry from the open overflow popup.
    ChooseOverflowItem { id: String },
}

/// Notifications produced while reducing an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEffect {
    LayoutModeChanged { from: LayoutMode, to: LayoutMode },
    DockingChanged(Option<DockingDecision>),
    TabSelected(CreatorTab),
    PageChanged { index: usize },
    OverflowOpened(ToolbarRegion),
    OverflowClosed(ToolbarRegion),
    /// An action the layout policy does not own, for the host to run.
    ActionInvoked { id: String },
}
