use serde::{Deserialize, Serialize};

use crate::viewport::LayoutMode;

/// Default bounds and initial width of the property grid, in pixels.
pub const PROPERTY_GRID_MIN_WIDTH: u32 = 370;
pub const PROPERTY_GRID_MAX_WIDTH: u32 = 600;
pub const PROPERTY_GRID_DEFAULT_WIDTH: u32 = 450;

/// Locale key of the property grid header title.
pub const PROPERTY_GRID_TITLE_KEY: &str = "ed.survey";
/// Locale key of the close button on the full-screen flyout.
pub const PROPERTY_GRID_CLOSE_KEY: &str = "ed.close";

/// Screen edge owning the side bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideBarLocation {
    Left,
    #[default]
    Right,
}

/// Resize handle on the side of the panel facing the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    West,
    East,
}

impl ResizeHandle {
    /// The handle sits on the edge opposite the side bar location.
    pub fn for_location(location: SideBarLocation) -> Self {
        match location {
            SideBarLocation::Right => ResizeHandle::West,
            SideBarLocation::Left => ResizeHandle::East,
        }
    }

    /// Signed width change produced by a horizontal pointer delta.
    fn width_delta(self, dx: i64) -> i64 {
        match self {
            ResizeHandle::West => -dx,
            ResizeHandle::East => dx,
        }
    }
}

/// How the property grid is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DockingMode {
    /// Resizable side panel occupying layout space.
    #[default]
    Inline,
    /// Flyout covering the content.
    Overlay,
}

/// Inclusive width range for the inline panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidthBounds {
    pub min_width: u32,
    pub max_width: u32,
    pub default_width: u32,
}

impl Default for WidthBounds {
    fn default() -> Self {
        Self {
            min_width: PROPERTY_GRID_MIN_WIDTH,
            max_width: PROPERTY_GRID_MAX_WIDTH,
            default_width: PROPERTY_GRID_DEFAULT_WIDTH,
        }
    }
}

impl WidthBounds {
    /// Clamp `width` into range. Inverted bounds collapse to `min_width`.
    pub fn clamp(&self, width: i64) -> u32 {
        let min = i64::from(self.min_width);
        let max = i64::from(self.max_width).max(min);
        let clamped = width.clamp(min, max);
        // In range of u32 after the clamp above.
        clamped as u32
    }

    pub fn is_valid(&self) -> bool {
        self.min_width > 0
            && self.min_width <= self.max_width
            && (self.min_width..=self.max_width).contains(&self.default_width)
    }

    /// Repair inverted bounds and pull the default width into range.
    pub fn normalized(&self) -> Self {
        if self.is_valid() {
            return *self;
        }
        log::warn!(
            "property grid bounds {}..={} (default {}) are invalid, repairing",
            self.min_width,
            self.max_width,
            self.default_width
        );
        if self.min_width == 0 || self.min_width > self.max_width {
            return Self::default();
        }

        Self {
            default_width: self.clamp(i64::from(self.default_width)),
            ..*self
        }
    }
}

/// Property grid panel state owned by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePanel {
    expanded: bool,
    width: u32,
    bounds: WidthBounds,
}

impl SidePanel {
    pub fn new(bounds: WidthBounds) -> Self {
        let bounds = bounds.normalized();
        Self {
            expanded: true,
            width: bounds.default_width,
            bounds,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn bounds(&self) -> WidthBounds {
        self.bounds
    }

    /// Return whether the state changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        let changed = self.expanded != expanded;
        self.expanded = expanded;
        changed
    }

    pub fn set_width(&mut self, width: i64) {
        self.width = self.bounds.clamp(width);
    }
}

impl Default for SidePanel {
    fn default() -> Self {
        Self::new(WidthBounds::default())
    }
}

/// Presentation chosen for the property grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DockingDecision {
    pub mode: DockingMode,
    pub anchor_edge: SideBarLocation,
    pub width: u32,
    /// `None` when the panel cannot be resized in the current layout.
    pub handle: Option<ResizeHandle>,
    pub title_key: &'static str,
    /// Close button, only on the full-screen mobile flyout.
    pub close_key: Option<&'static str>,
}

/// Select how the property grid docks.
///
/// Returns `None` when the panel is collapsed: no inline panel and no flyout
/// container exist. Inline requests outside the wide layout are coerced to
/// overlay.
pub fn select_docking(
    mode: LayoutMode,
    viewport_width: u32,
    panel: &SidePanel,
    location: SideBarLocation,
    requested: DockingMode,
) -> Option<DockingDecision> {
    if !panel.is_expanded() {
        return None;
    }

    let handle = ResizeHandle::for_location(location);
    let decision = match mode {
        LayoutMode::Wide => DockingDecision {
            mode: requested,
            anchor_edge: location,
            width: panel.width(),
            handle: Some(handle),
            title_key: PROPERTY_GRID_TITLE_KEY,
            close_key: None,
        },
        LayoutMode::Medium | LayoutMode::Narrow => {
            if requested == DockingMode::Inline {
                log::debug!("inline docking coerced to overlay in {mode:?}");
            }
            DockingDecision {
                mode: DockingMode::Overlay,
                anchor_edge: location,
                width: panel.width().min(viewport_width),
                handle: Some(handle),
                title_key: PROPERTY_GRID_TITLE_KEY,
                close_key: None,
            }
        },
        LayoutMode::Mobile => DockingDecision {
            mode: DockingMode::Overlay,
            anchor_edge: location,
            width: viewport_width,
            handle: None,
            title_key: PROPERTY_GRID_TITLE_KEY,
            close_key: Some(PROPERTY_GRID_CLOSE_KEY),
        },
    };

    Some(decision)
}

/// An in-flight resize drag on the panel handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    handle: ResizeHandle,
    origin_width: u32,
    total_dx: i64,
}

impl DragGesture {
    pub fn start(handle: ResizeHandle, origin_width: u32) -> Self {
        Self {
            handle,
            origin_width,
            total_dx: 0,
        }
    }

    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    /// Accumulate a pointer delta and return the resulting width.
    ///
    /// The width is always derived from the origin, so applying several small
    /// moves or one coalesced move settles on the same value.
    pub fn move_by(&mut self, dx: i32, bounds: &WidthBounds) -> u32 {
        self.total_dx += i64::from(dx);
        resize_width(self.origin_width, self.handle, self.total_dx, bounds)
    }
}

/// Pure width reducer for a handle dragged by `dx` pixels.
pub fn resize_width(
    origin_width: u32,
    handle: ResizeHandle,
    dx: i64,
    bounds: &WidthBounds,
) -> u32 {
    bounds.clamp(i64::from(origin_width) + handle.width_delta(dx))
}
