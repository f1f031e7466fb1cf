use std::fmt::Write as _;

use creator_ui_layout::{
    DockingDecision, InlineItem, LayoutEffect, LayoutEvent, LayoutSession,
    LayoutSnapshot, OverflowLayout, ToolbarRegion,
};
use serde::Serialize;

use crate::locale::Localizer;

/// Outcome of feeding one scripted event to the session.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StepReport {
    pub(crate) step: usize,
    pub(crate) event: LayoutEvent,
    pub(crate) effects: Vec<LayoutEffect>,
    pub(crate) snapshot: LayoutSnapshot,
}

/// Feed `events` through `session`, one report per event.
pub(crate) fn replay(
    session: &mut LayoutSession,
    events: Vec<LayoutEvent>,
) -> Vec<StepReport> {
    events
        .into_iter()
        .enumerate()
        .map(|(index, event)| {
            let effects = session.reduce(event.clone());
            log::debug!("step {}: {event:?} -> {effects:?}", index + 1);
            StepReport {
                step: index + 1,
                event,
                effects,
                snapshot: session.snapshot(),
            }
        })
        .collect()
}

/// Human readable rendering of a report, labels resolved via `localizer`.
pub(crate) fn describe(report: &StepReport, localizer: &Localizer) -> String {
    let snapshot = &report.snapshot;
    let mut out = String::new();

    let _ = writeln!(out, "#{} {:?}", report.step, report.event);
    let _ = writeln!(
        out,
        "  {:?} {}x{}, tab {}",
        snapshot.mode,
        snapshot.viewport.width,
        snapshot.viewport.height,
        localizer.text(snapshot.active_tab.label_key()),
    );
    let _ = writeln!(
        out,
        "  property grid: {}",
        docking(snapshot.docking, localizer)
    );
    let _ = writeln!(
        out,
        "  popups: dropdown as {:?}, modal as {:?}",
        snapshot.popup_presentation.dropdown, snapshot.popup_presentation.modal
    );

    let toolbox = if !snapshot.visibility.toolbox_visible {
        "hidden"
    } else if snapshot.visibility.toolbox_compact {
        "compact"
    } else {
        "full"
    };
    let _ = writeln!(out, "  toolbox: {toolbox}");

    for toolbar in &snapshot.toolbars {
        if toolbar.region == ToolbarRegion::Toolbox {
            continue;
        }
        let _ = writeln!(
            out,
            "  {}: {}",
            region_name(toolbar.region),
            toolbar_line(&toolbar.layout, localizer),
        );
    }

    if let Some(popup) = &snapshot.popup {
        let entries: Vec<&str> = popup
            .entries
            .iter()
            .map(|entry| localizer.text(&entry.label))
            .collect();
        let _ = writeln!(
            out,
            "  popup ({}, {:?}): {}",
            region_name(popup.region),
            popup.presentation,
            entries.join(", ")
        );
    }

    for effect in &report.effects {
        let _ = writeln!(out, "  -> {effect:?}");
    }

    out
}

fn docking(decision: Option<DockingDecision>, localizer: &Localizer) -> String {
    let Some(decision) = decision else {
        return String::from("collapsed");
    };

    let handle = decision
        .handle
        .map(|handle| format!(", handle {handle:?}"))
        .unwrap_or_default();
    let close = decision
        .close_key
        .map(|key| format!(" [{}]", localizer.text(key)))
        .unwrap_or_default();
    format!(
        "{:?} at {:?}, {}px{handle}, \"{}\"{close}",
        decision.mode,
        decision.anchor_edge,
        decision.width,
        localizer.text(decision.title_key)
    )
}

fn toolbar_line(layout: &OverflowLayout, localizer: &Localizer) -> String {
    let items: Vec<String> = layout
        .inline
        .iter()
        .filter_map(|item| match item {
            InlineItem::Action(action) if !action.visible => None,
            InlineItem::Action(action) if action.disabled => {
                Some(format!("({})", localizer.text(&action.label)))
            },
            InlineItem::Action(action) => {
                Some(localizer.text(&action.label).to_string())
            },
            InlineItem::MoreTrigger => Some(format!(
                "{} [{}]",
                localizer.text("ed.more"),
                layout.overflow.len()
            )),
        })
        .collect();

    items.join(", ")
}

fn region_name(region: ToolbarRegion) -> &'static str {
    match region {
        ToolbarRegion::TabbedMenu => "tabs",
        ToolbarRegion::TopToolbar => "top toolbar",
        ToolbarRegion::FooterToolbar => "footer toolbar",
        ToolbarRegion::PageBar => "page bar",
        ToolbarRegion::Toolbox => "toolbox",
    }
}
