use serde::{Deserialize, Serialize};

/// Default minimum inner width of the wide layout.
pub const WIDE_MIN_WIDTH: u32 = 1280;
/// Default minimum inner width of the medium layout.
pub const MEDIUM_MIN_WIDTH: u32 = 750;
/// Default minimum inner width of the narrow layout. Anything below is mobile.
pub const NARROW_MIN_WIDTH: u32 = 400;

/// Inner viewport size reported by the host window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1920, 900)
    }
}

/// Discrete responsive class derived from the viewport width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Mobile,
    Narrow,
    Medium,
    Wide,
}

impl LayoutMode {
    /// Only the wide layout leaves room for an inline side panel.
    pub fn allows_inline_docking(self) -> bool {
        self == LayoutMode::Wide
    }

    /// Whether the designer side regions (toolbox, page navigator) render.
    pub fn has_side_regions(self) -> bool {
        self >= LayoutMode::Medium
    }
}

/// Width thresholds separating the layout modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub wide: u32,
    pub medium: u32,
    pub narrow: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            wide: WIDE_MIN_WIDTH,
            medium: MEDIUM_MIN_WIDTH,
            narrow: NARROW_MIN_WIDTH,
        }
    }
}

impl Breakpoints {
    /// Map a width onto a layout mode. Total over every width.
    pub fn classify(&self, width: u32) -> LayoutMode {
        if width >= self.wide {
            LayoutMode::Wide
        } else if width >= self.medium {
            LayoutMode::Medium
        } else if width >= self.narrow {
            LayoutMode::Narrow
        } else {
            LayoutMode::Mobile
        }
    }

    /// Thresholds must be strictly descending and non-zero.
    pub fn is_valid(&self) -> bool {
        self.wide > self.medium && self.medium > self.narrow && self.narrow > 0
    }

    /// Return self when valid, defaults otherwise.
    pub fn normalized(&self) -> Self {
        if self.is_valid() {
            *self
        } else {
            log::warn!(
                "breakpoints {}/{}/{} are not descending, using defaults",
                self.wide,
                self.medium,
                self.narrow
            );
            Self::default()
        }
    }
}

/// Classify a width with the default breakpoints.
pub fn classify(width: u32) -> LayoutMode {
    Breakpoints::default().classify(width)
}
