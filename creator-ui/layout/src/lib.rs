//! Responsive layout policy for the survey creator shell.
//!
//! The crate decides, for every viewport size and user toggle, which editor
//! regions render and how:
//! - [`classify`] maps a viewport width to a [`LayoutMode`];
//! - [`decide_visibility`] turns a mode and toggles into [`PanelVisibility`];
//! - [`select_docking`] picks inline or overlay presentation for the property
//!   grid, with [`DragGesture`] resizing it;
//! - [`compute_overflow`] splits toolbar actions into an inline prefix and a
//!   "more" popup.
//!
//! [`LayoutSession`] ties them together for one editor: feed it
//! [`LayoutEvent`]s from the host and draw from [`LayoutSession::snapshot`].
//! Nothing here renders; labels are locale keys the host resolves.
//!
//! # Quick Example
//!
//! ```
//! use creator_ui_layout::{
//!     DockingMode, LayoutEvent, LayoutMode, LayoutSession, ViewportSize,
//! };
//!
//! let mut session = LayoutSession::default();
//! session.reduce(LayoutEvent::Resized(ViewportSize::new(370, 400)));
//!
//! assert_eq!(session.mode(), LayoutMode::Mobile);
//! let docking = session.docking().expect("property grid is shown");
//! assert_eq!(docking.mode, DockingMode::Overlay);
//! ```

mod config;
mod docking;
mod overflow;
mod popup;
mod session;
mod toolbar;
mod viewport;
mod visibility;

pub use config::{LayoutConfig, Preferences};
pub use docking::{
    DockingDecision, DockingMode, DragGesture, PROPERTY_GRID_CLOSE_KEY,
    PROPERTY_GRID_DEFAULT_WIDTH, PROPERTY_GRID_MAX_WIDTH,
    PROPERTY_GRID_MIN_WIDTH, PROPERTY_GRID_TITLE_KEY, ResizeHandle,
    SideBarLocation, SidePanel, WidthBounds, resize_width, select_docking,
};
pub use overflow::{
    InlineItem, OverflowLayout, ToolbarAction, compute_overflow,
};
pub use popup::{
    PopupKind, PopupPresentation, PopupPresentations, popup_presentation,
};
pub use session::{
    LayoutEffect, LayoutEvent, LayoutSession, LayoutSnapshot, OverflowPopup,
    ToolbarLayout, ToolbarRegion,
};
pub use toolbar::{
    ACTION_DESIGNER, ACTION_NEXT_PAGE, ACTION_PAGE_SELECTOR, ACTION_PREV_PAGE,
    ACTION_PREVIEW, ACTION_REDO, ACTION_SETTINGS, ACTION_SHOW_INVISIBLE,
    ACTION_UNDO, CreatorTab, MAX_TOOLBAR_EXTENT, PageCursor, TOOLBOX_ITEMS,
    ToolbarMetrics, designer_actions, page_bar_actions, preview_footer_actions,
    tab_actions, toolbox_actions,
};
pub use viewport::{
    Breakpoints, LayoutMode, MEDIUM_MIN_WIDTH, NARROW_MIN_WIDTH, ViewportSize,
    WIDE_MIN_WIDTH, classify,
};
pub use visibility::{PanelToggles, PanelVisibility, decide_visibility};
