use super::event::{LayoutEffect, LayoutEvent};
use super::model::ToolbarRegion;
use super::state::SessionState;
use crate::toolbar::{
    ACTION_DESIGNER, ACTION_NEXT_PAGE, ACTION_PREV_PAGE, ACTION_PREVIEW,
    ACTION_SETTINGS, CreatorTab,
};

/// Reduce one host event into state updates and effects.
///
/// Every event is a full synchronous recomputation; derived effects (mode,
/// docking and popup changes) are appended after the event's own effects.
pub(super) fn reduce(
    state: &mut SessionState,
    event: LayoutEvent,
) -> Vec<LayoutEffect> {
    let docking_before = state.docking();
    let mut effects = Vec::new();

    match event {
        LayoutEvent::Resized(viewport) => {
            if let Some(from) = state.resize(viewport) {
                log::debug!("layout mode {from:?} -> {:?}", state.mode());
                effects.push(LayoutEffect::LayoutModeChanged {
                    from,
                    to: state.mode(),
                });
            }
        },
        LayoutEvent::DragStarted => {
            state.start_drag();
        },
        LayoutEvent::DragMoved { dx } => {
            if !state.move_drag(dx) {
                log::debug!("drag move without an active drag ignored");
            }
        },
        LayoutEvent::DragEnded => state.end_drag(),
        LayoutEvent::CollapsePropertyGrid | LayoutEvent::ClosePropertyGrid => {
            state.set_property_grid_expanded(false);
        },
        LayoutEvent::ExpandPropertyGrid => {
            state.set_property_grid_expanded(true);
        },
        LayoutEvent::OpenSettings => open_settings(state, &mut effects),
        LayoutEvent::SetShowPropertyGrid(show) => {
            state.set_property_grid_expanded(show);
        },
        LayoutEvent::SetSideBarLocation(location) => {
            state.set_location(location);
        },
        LayoutEvent::RequestDocking(mode) => state.request_docking(mode),
        LayoutEvent::SelectTab(tab) => select_tab(state, tab, &mut effects),
        LayoutEvent::SetPageCount(count) => {
            let before = state.pages().index();
            state.pages_mut().set_count(count);
            push_page_change(state, before, &mut effects);
        },
        LayoutEvent::NextPage => move_page(state, true, &mut effects),
        LayoutEvent::PrevPage => move_page(state, false, &mut effects),
        LayoutEvent::InvokeAction { id } => {
            invoke_action(state, &id, &mut effects);
        },
        LayoutEvent::OpenOverflow(region) => {
            open_overflow(state, region, &mut effects);
        },
        LayoutEvent::CloseOverflow => {
            if let Some(region) = state.close_popup() {
                effects.push(LayoutEffect::OverflowClosed(region));
            }
        },
        LayoutEvent::ChooseOverflowItem { id } => {
            choose_overflow_item(state, &id, &mut effects);
        },
    }

    state.settle_drag();
    close_stale_popup(state, &mut effects);

    let docking_after = state.docking();
    if docking_after != docking_before {
        effects.push(LayoutEffect::DockingChanged(docking_after));
    }

    effects
}

fn open_settings(state: &mut SessionState, effects: &mut Vec<LayoutEffect>) {
    select_tab(state, CreatorTab::Designer, effects);
    state.set_property_grid_expanded(true);
}

fn select_tab(
    state: &mut SessionState,
    tab: CreatorTab,
    effects: &mut Vec<LayoutEffect>,
) {
    if state.select_tab(tab) {
        effects.push(LayoutEffect::TabSelected(tab));
    }
}

fn move_page(
    state: &mut SessionState,
    forward: bool,
    effects: &mut Vec<LayoutEffect>,
) {
    let before = state.pages().index();
    let pages = state.pages_mut();
    let moved = if forward { pages.next() } else { pages.prev() };
    if !moved {
        log::debug!("page navigation past the survey bounds ignored");
    }
    push_page_change(state, before, effects);
}

fn push_page_change(
    state: &SessionState,
    before: usize,
    effects: &mut Vec<LayoutEffect>,
) {
    let index = state.pages().index();
    if index != before {
        effects.push(LayoutEffect::PageChanged { index });
    }
}

fn invoke_action(
    state: &mut SessionState,
    id: &str,
    effects: &mut Vec<LayoutEffect>,
) {
    if let Some(tab) = CreatorTab::from_id(id) {
        select_tab(state, tab, effects);
        return;
    }

    match id {
        ACTION_SETTINGS => open_settings(state, effects),
        ACTION_PREVIEW => select_tab(state, CreatorTab::Preview, effects),
        ACTION_DESIGNER => select_tab(state, CreatorTab::Designer, effects),
        ACTION_NEXT_PAGE => move_page(state, true, effects),
        ACTION_PREV_PAGE => move_page(state, false, effects),
        other => effects.push(LayoutEffect::ActionInvoked {
            id: other.to_string(),
        }),
    }
}

fn open_overflow(
    state: &mut SessionState,
    region: ToolbarRegion,
    effects: &mut Vec<LayoutEffect>,
) {
    let has_overflow = state.toolbars().iter().any(|toolbar| {
        toolbar.region == region && toolbar.layout.has_overflow()
    });
    if !has_overflow {
        log::debug!("no overflow to open for {region:?}");
        return;
    }

    if let Some(previous) = state.close_popup() {
        effects.push(LayoutEffect::OverflowClosed(previous));
    }
    state.open_popup(region);
    effects.push(LayoutEffect::OverflowOpened(region));
}

fn choose_overflow_item(
    state: &mut SessionState,
    id: &str,
    effects: &mut Vec<LayoutEffect>,
) {
    let Some(popup) = state.snapshot().popup else {
        log::debug!("overflow item {id} chosen with no popup open");
        return;
    };
    let Some(entry) = popup.entries.iter().find(|entry| entry.id == id) else {
        log::debug!(
            "overflow item {id} is not in the {:?} popup",
            popup.region
        );
        return;
    };
    if entry.disabled {
        return;
    }

    state.close_popup();
    effects.push(LayoutEffect::OverflowClosed(popup.region));
    invoke_action(state, id, effects);
}

/// Close the popup once its toolbar is gone or fits again.
fn close_stale_popup(
    state: &mut SessionState,
    effects: &mut Vec<LayoutEffect>,
) {
    let Some(region) = state.popup() else {
        return;
    };
    if state.snapshot().popup.is_none() {
        state.close_popup();
        effects.push(LayoutEffect::OverflowClosed(region));
    }
}
