use serde::{Deserialize, Serialize};

use crate::overflow::ToolbarAction;

/// Pixel extents used when budgeting toolbar room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarMetrics {
    /// Width of a top or footer toolbar button.
    pub action_extent: u32,
    /// Width of a tabbed menu item.
    pub tab_extent: u32,
    /// Height of one toolbox tool.
    pub toolbox_item_extent: u32,
    /// Size of the "more" overflow trigger.
    pub trigger_extent: u32,
    /// Height taken by the top bar and tab strip above the toolbox.
    pub header_extent: u32,
}

impl Default for ToolbarMetrics {
    fn default() -> Self {
        Self {
            action_extent: 48,
            tab_extent: 120,
            toolbox_item_extent: 40,
            trigger_extent: 48,
            header_extent: 96,
        }
    }
}

/// Largest extent accepted for any toolbar element.
pub const MAX_TOOLBAR_EXTENT: u32 = 4096;

impl ToolbarMetrics {
    /// Return a copy with every out-of-range extent reset to its default.
    ///
    /// Item extents must be in `1..=MAX_TOOLBAR_EXTENT`; the header may be 0.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        Self {
            action_extent: bounded(
                "action_extent",
                self.action_extent,
                1,
                defaults.action_extent,
            ),
            tab_extent: bounded(
                "tab_extent",
                self.tab_extent,
                1,
                defaults.tab_extent,
            ),
            toolbox_item_extent: bounded(
                "toolbox_item_extent",
                self.toolbox_item_extent,
                1,
                defaults.toolbox_item_extent,
            ),
            trigger_extent: bounded(
                "trigger_extent",
                self.trigger_extent,
                1,
                defaults.trigger_extent,
            ),
            header_extent: bounded(
                "header_extent",
                self.header_extent,
                0,
                defaults.header_extent,
            ),
        }
    }
}

fn bounded(name: &str, value: u32, min: u32, default: u32) -> u32 {
    if (min..=MAX_TOOLBAR_EXTENT).contains(&value) {
        return value;
    }
    log::warn!(
        "toolbar metric {name} = {value} is out of range, using {default}"
    );
    default
}

/// Top-level editor tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatorTab {
    #[default]
    Designer,
    Preview,
    Logic,
    Json,
    Embed,
    Translation,
}

impl CreatorTab {
    pub const ALL: [CreatorTab; 6] = [
        CreatorTab::Designer,
        CreatorTab::Preview,
        CreatorTab::Logic,
        CreatorTab::Json,
        CreatorTab::Embed,
        CreatorTab::Translation,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CreatorTab::Designer => "designer",
            CreatorTab::Preview => "test",
            CreatorTab::Logic => "logic",
            CreatorTab::Json => "editor",
            CreatorTab::Embed => "embed",
            CreatorTab::Translation => "translation",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            CreatorTab::Designer => "ed.designer",
            CreatorTab::Preview => "ed.testSurvey",
            CreatorTab::Logic => "ed.logic",
            CreatorTab::Json => "ed.jsonEditor",
            CreatorTab::Embed => "ed.embedSurvey",
            CreatorTab::Translation => "ed.translation",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

/// Current page of the survey preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    index: usize,
    count: usize,
}

impl PageCursor {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.count
    }

    pub fn is_multi_page(&self) -> bool {
        self.count > 1
    }

    /// Return whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Return whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Change the page count, keeping the cursor on a valid page.
    pub fn set_count(&mut self, count: usize) {
        self.count = count.max(1);
        self.index = self.index.min(self.count - 1);
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(1)
    }
}

pub const ACTION_UNDO: &str = "undo";
pub const ACTION_REDO: &str = "redo";
pub const ACTION_SETTINGS: &str = "svd-settings";
pub const ACTION_PREVIEW: &str = "svd-preview";
pub const ACTION_DESIGNER: &str = "svd-designer";
pub const ACTION_SHOW_INVISIBLE: &str = "showInvisible";
pub const ACTION_PREV_PAGE: &str = "prevPage";
pub const ACTION_NEXT_PAGE: &str = "nextPage";
pub const ACTION_PAGE_SELECTOR: &str = "pageSelector";

/// Tabbed menu entries in display order.
pub fn tab_actions(metrics: &ToolbarMetrics) -> Vec<ToolbarAction> {
    CreatorTab::ALL
        .into_iter()
        .zip(0..)
        .map(|(tab, order)| {
            ToolbarAction::new(
                tab.id(),
                tab.label_key(),
                order,
                metrics.tab_extent,
            )
        })
        .collect()
}

/// Designer actions. The same set backs the top toolbar and, on mobile, the
/// footer toolbar.
pub fn designer_actions(metrics: &ToolbarMetrics) -> Vec<ToolbarAction> {
    [
        (ACTION_UNDO, "ed.undo"),
        (ACTION_REDO, "ed.redo"),
        (ACTION_SETTINGS, "ed.settings"),
        (ACTION_PREVIEW, "ed.testSurvey"),
    ]
    .into_iter()
    .zip(0..)
    .map(|((id, label), order)| {
        ToolbarAction::new(id, label, order, metrics.action_extent)
    })
    .collect()
}

/// Mobile footer actions while previewing the survey.
///
/// Page navigation only appears for multi-page surveys. The enabled
/// direction is emphasised as secondary, so moving a page flips both.
pub fn preview_footer_actions(
    pages: &PageCursor,
    metrics: &ToolbarMetrics,
) -> Vec<ToolbarAction> {
    let extent = metrics.action_extent;
    let mut actions = vec![ToolbarAction::new(
        ACTION_SHOW_INVISIBLE,
        "ts.showInvisibleElements",
        0,
        extent,
    )];

    if pages.is_multi_page() {
        actions.extend(page_navigation(pages, extent, 1));
    }

    actions.push(ToolbarAction::new(
        ACTION_DESIGNER,
        "ed.designer",
        10,
        extent,
    ));
    actions
}

/// Page bar shown above the preview on non-mobile layouts. Empty for a
/// single-page survey, in which case the bar is not rendered.
pub fn page_bar_actions(
    pages: &PageCursor,
    metrics: &ToolbarMetrics,
) -> Vec<ToolbarAction> {
    if !pages.is_multi_page() {
        return Vec::new();
    }

    let extent = metrics.action_extent;
    let mut actions: Vec<ToolbarAction> =
        page_navigation(pages, extent, 0).into_iter().collect();
    actions.push(ToolbarAction::new(
        ACTION_PAGE_SELECTOR,
        "ed.selectPage",
        2,
        extent.saturating_mul(3),
    ));
    actions
}

fn page_navigation(
    pages: &PageCursor,
    extent: u32,
    first_order: i32,
) -> [ToolbarAction; 2] {
    let prev_disabled = pages.is_first();
    let next_disabled = pages.is_last();

    [
        ToolbarAction::new(ACTION_PREV_PAGE, "ed.prevPage", first_order, extent)
            .disabled(prev_disabled)
            .secondary(!prev_disabled),
        ToolbarAction::new(
            ACTION_NEXT_PAGE,
            "ed.nextPage",
            first_order + 1,
            extent,
        )
        .disabled(next_disabled)
        .secondary(!next_disabled),
    ]
}

/// Default question types in toolbox order.
pub const TOOLBOX_ITEMS: [&str; 20] = [
    "radiogroup",
    "rating",
    "checkbox",
    "dropdown",
    "boolean",
    "file",
    "imagepicker",
    "ranking",
    "comment",
    "text",
    "multipletext",
    "panel",
    "paneldynamic",
    "matrix",
    "matrixdropdown",
    "matrixdynamic",
    "html",
    "expression",
    "image",
    "signaturepad",
];

pub fn toolbox_actions(metrics: &ToolbarMetrics) -> Vec<ToolbarAction> {
    TOOLBOX_ITEMS
        .into_iter()
        .zip(0..)
        .map(|(name, order)| {
            ToolbarAction::new(
                name,
                format!("qt.{name}"),
                order,
                metrics.toolbox_item_extent,
            )
        })
        .collect()
}
