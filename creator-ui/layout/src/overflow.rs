use serde::{Deserialize, Serialize};

/// One command in a toolbar, tabbed menu or toolbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarAction {
    pub id: String,
    /// Locale key of the title. Never inspected by the layout policy.
    pub label: String,
    pub visible: bool,
    pub disabled: bool,
    pub secondary: bool,
    pub order: i32,
    /// Minimum size along the toolbar axis.
    pub extent: u32,
}

impl ToolbarAction {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        order: i32,
        extent: u32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            visible: true,
            disabled: false,
            secondary: false,
            order,
            extent,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn secondary(mut self, secondary: bool) -> Self {
        self.secondary = secondary;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    fn budget_extent(&self) -> u32 {
        if self.visible { self.extent } else { 0 }
    }
}

/// Element rendered inline in a toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineItem {
    Action(ToolbarAction),
    /// The "more" control that opens the overflow popup.
    MoreTrigger,
}

impl InlineItem {
    pub fn action(&self) -> Option<&ToolbarAction> {
        match self {
            InlineItem::Action(action) => Some(action),
            InlineItem::MoreTrigger => None,
        }
    }
}

/// Split of a toolbar into its inline prefix and overflow popup entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverflowLayout {
    pub inline: Vec<InlineItem>,
    pub overflow: Vec<ToolbarAction>,
}

impl OverflowLayout {
    /// Lay every action out inline with no trigger.
    pub fn all_inline(actions: &[ToolbarAction]) -> Self {
        Self {
            inline: sorted(actions)
                .into_iter()
                .map(InlineItem::Action)
                .collect(),
            overflow: Vec::new(),
        }
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// Inline actions, excluding the trigger.
    pub fn inline_actions(&self) -> impl Iterator<Item = &ToolbarAction> {
        self.inline.iter().filter_map(InlineItem::action)
    }

    /// Visible inline actions, the ones a user can see and click.
    pub fn shown_actions(&self) -> impl Iterator<Item = &ToolbarAction> {
        self.inline_actions().filter(|action| action.visible)
    }

    pub fn find(&self, id: &str) -> Option<&ToolbarAction> {
        self.inline_actions()
            .chain(self.overflow.iter())
            .find(|action| action.id == id)
    }
}

/// Partition `actions` into an inline prefix and an overflow list.
///
/// Actions are taken in declared order. When everything fits, no trigger is
/// added. Otherwise the trigger's extent is reserved up front, actions are
/// admitted while they fit, and the first misfit plus everything after it
/// moves to the overflow list.
pub fn compute_overflow(
    actions: &[ToolbarAction],
    available: u32,
    trigger_extent: u32,
) -> OverflowLayout {
    let ordered = sorted(actions);
    let total: u64 = ordered
        .iter()
        .map(|action| u64::from(action.budget_extent()))
        .sum();
    if total <= u64::from(available) {
        return OverflowLayout {
            inline: ordered.into_iter().map(InlineItem::Action).collect(),
            overflow: Vec::new(),
        };
    }

    let budget = u64::from(available.saturating_sub(trigger_extent));
    let mut used = 0u64;
    let mut split = ordered.len();
    for (index, action) in ordered.iter().enumerate() {
        let next = used + u64::from(action.budget_extent());
        if next > budget {
            split = index;
            break;
        }
        used = next;
    }

    let mut inline: Vec<InlineItem> = Vec::with_capacity(split + 1);
    let mut rest = ordered;
    let overflow = rest.split_off(split);
    inline.extend(rest.into_iter().map(InlineItem::Action));
    inline.push(InlineItem::MoreTrigger);

    OverflowLayout { inline, overflow }
}

fn sorted(actions: &[ToolbarAction]) -> Vec<ToolbarAction> {
    let mut ordered = actions.to_vec();
    ordered.sort_by_key(|action| action.order);
    ordered
}
