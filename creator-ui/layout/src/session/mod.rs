mod event;
mod model;
mod reducer;
mod state;

pub use event::{LayoutEffect, LayoutEvent};
pub use model::{LayoutSnapshot, OverflowPopup, ToolbarLayout, ToolbarRegion};
use state::SessionState;

use crate::config::{LayoutConfig, Preferences};
use crate::docking::DockingDecision;
use crate::toolbar::{CreatorTab, PageCursor};
use crate::viewport::{LayoutMode, ViewportSize};

/// Layout state of a single editor, driven by host events.
///
/// Sessions share nothing; each editor instance owns one.
#[derive(Debug, Clone)]
pub struct LayoutSession {
    state: SessionState,
}

impl LayoutSession {
    /// Start a session with normalized configuration and user preferences.
    pub fn new(
        config: LayoutConfig,
        preferences: Preferences,
        viewport: ViewportSize,
    ) -> Self {
        Self {
            state: SessionState::new(config, preferences, viewport),
        }
    }

    /// Reduce a host event into state updates and effects.
    pub fn reduce(&mut self, event: LayoutEvent) -> Vec<LayoutEffect> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build the read-only snapshot for the rendering layer.
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.state.snapshot()
    }

    pub fn mode(&self) -> LayoutMode {
        self.state.mode()
    }

    pub fn active_tab(&self) -> CreatorTab {
        self.state.tab()
    }

    pub fn pages(&self) -> &PageCursor {
        self.state.pages()
    }

    pub fn docking(&self) -> Option<DockingDecision> {
        self.state.docking()
    }

    /// Stored property grid width, kept while collapsed or in a flyout.
    pub fn property_grid_width(&self) -> u32 {
        self.state.panel().width()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}

impl Default for LayoutSession {
    fn default() -> Self {
        Self::new(
            LayoutConfig::default(),
            Preferences::default(),
            ViewportSize::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docking::{
        DockingMode, ResizeHandle, SideBarLocation, WidthBounds,
    };
    use crate::overflow::InlineItem;
    use crate::popup::{PopupPresentation, PopupPresentations};
    use crate::toolbar::ToolbarMetrics;
    use crate::viewport::Breakpoints;
    use crate::toolbar::{
        ACTION_DESIGNER, ACTION_NEXT_PAGE, ACTION_PREV_PAGE, ACTION_SETTINGS,
        ACTION_SHOW_INVISIBLE,
    };

    fn resize(session: &mut LayoutSession, width: u32, height: u32) {
        let _ = session
            .reduce(LayoutEvent::Resized(ViewportSize::new(width, height)));
    }

    fn drag(session: &mut LayoutSession, dx: i32) {
        let _ = session.reduce(LayoutEvent::DragStarted);
        let _ = session.reduce(LayoutEvent::DragMoved { dx });
        let _ = session.reduce(LayoutEvent::DragEnded);
    }

    fn open_tab_overflow(session: &mut LayoutSession) -> Vec<LayoutEffect> {
        session.reduce(LayoutEvent::OpenOverflow(ToolbarRegion::TabbedMenu))
    }

    fn shown_ids(
        snapshot: &LayoutSnapshot,
        region: ToolbarRegion,
    ) -> Vec<String> {
        snapshot
            .toolbar(region)
            .map(|layout| {
                layout.shown_actions().map(|action| action.id.clone()).collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn given_property_grid_flow_when_resized_and_dragged_then_width_follows() {
        let mut session = LayoutSession::default();

        let docking = session.docking().expect("grid docked");
        assert_eq!(docking.mode, DockingMode::Inline);
        assert_eq!(docking.width, 450);
        assert_eq!(docking.handle, Some(ResizeHandle::West));

        drag(&mut session, 100);
        assert_eq!(session.property_grid_width(), 370);

        resize(&mut session, 740, 700);
        let docking = session.docking().expect("grid docked");
        assert_eq!(docking.mode, DockingMode::Overlay);
        assert_eq!(docking.width, 370);

        drag(&mut session, -200);
        assert_eq!(session.docking().map(|d| d.width), Some(570));

        let _ = session.reduce(LayoutEvent::CollapsePropertyGrid);
        assert_eq!(session.docking(), None);
        assert!(!session.snapshot().visibility.property_grid_visible);

        let _ = session.reduce(LayoutEvent::InvokeAction {
            id: ACTION_SETTINGS.to_string(),
        });
        assert_eq!(
            session.docking().map(|d| d.mode),
            Some(DockingMode::Overlay)
        );

        let _ = session.reduce(LayoutEvent::CollapsePropertyGrid);
        let _ = session.reduce(LayoutEvent::ExpandPropertyGrid);
        let _ = session
            .reduce(LayoutEvent::SetSideBarLocation(SideBarLocation::Left));
        let docking = session.docking().expect("grid docked");
        assert_eq!(docking.handle, Some(ResizeHandle::East));
        assert_eq!(docking.width, 570);

        drag(&mut session, -170);
        assert_eq!(session.property_grid_width(), 400);

        resize(&mut session, 1920, 900);
        drag(&mut session, 200);
        let docking = session.docking().expect("grid docked");
        assert_eq!(docking.mode, DockingMode::Inline);
        assert_eq!(docking.width, 600);
    }

    #[test]
    fn given_toolbox_flow_when_resized_then_labels_and_regions_follow_width() {
        let mut session = LayoutSession::default();
        let snapshot = session.snapshot();
        assert!(snapshot.visibility.toolbox_visible);
        assert!(!snapshot.visibility.toolbox_compact);
        assert_eq!(shown_ids(&snapshot, ToolbarRegion::Toolbox).len(), 20);

        resize(&mut session, 1000, 900);
        let snapshot = session.snapshot();
        assert!(snapshot.visibility.toolbox_compact);
        assert!(snapshot.visibility.page_navigator_visible);
        assert_eq!(shown_ids(&snapshot, ToolbarRegion::Toolbox).len(), 20);

        resize(&mut session, 740, 500);
        let snapshot = session.snapshot();
        assert!(!snapshot.visibility.toolbox_visible);
        assert!(!snapshot.visibility.page_navigator_visible);
        assert!(!snapshot.has_toolbar(ToolbarRegion::Toolbox));

        let _ = session.reduce(LayoutEvent::SelectTab(CreatorTab::Preview));
        let _ = session.reduce(LayoutEvent::SelectTab(CreatorTab::Designer));
        assert!(!session.snapshot().has_toolbar(ToolbarRegion::Toolbox));
    }

    #[test]
    fn given_short_viewport_when_snapshot_then_toolbox_overflows_vertically() {
        let mut session = LayoutSession::default();
        resize(&mut session, 1280, 632);

        let snapshot = session.snapshot();
        let toolbox =
            snapshot.toolbar(ToolbarRegion::Toolbox).expect("toolbox shown");
        assert!(toolbox.has_overflow());
        assert!(toolbox.overflow.iter().any(|a| a.id == "paneldynamic"));
        assert!(toolbox.overflow.iter().any(|a| a.id == "signaturepad"));

        let _ =
            session.reduce(LayoutEvent::OpenOverflow(ToolbarRegion::Toolbox));
        assert!(session.snapshot().popup.is_some());

        let effects = session.reduce(LayoutEvent::CloseOverflow);
        assert_eq!(
            effects,
            vec![LayoutEffect::OverflowClosed(ToolbarRegion::Toolbox)]
        );

        resize(&mut session, 1920, 900);
        let toolbox = session.snapshot();
        assert!(
            !toolbox
                .toolbar(ToolbarRegion::Toolbox)
                .expect("toolbox shown")
                .has_overflow()
        );
    }

    #[test]
    fn given_narrow_tab_bar_when_overflow_opened_then_popup_lists_hidden_tabs()
    {
        let mut session = LayoutSession::default();
        let _ = session.reduce(LayoutEvent::SetShowPropertyGrid(false));
        let wide = session.snapshot();
        let tabs = wide.toolbar(ToolbarRegion::TabbedMenu).expect("tabs");
        assert!(!tabs.has_overflow());

        resize(&mut session, 700, 969);
        let snapshot = session.snapshot();
        let tabs = snapshot.toolbar(ToolbarRegion::TabbedMenu).expect("tabs");
        let hidden: Vec<&str> =
            tabs.overflow.iter().map(|a| a.id.as_str()).collect();
        assert!(hidden.contains(&"embed"));
        assert!(hidden.contains(&"translation"));
        assert_eq!(tabs.inline.last(), Some(&InlineItem::MoreTrigger));

        let effects = open_tab_overflow(&mut session);
        assert_eq!(
            effects,
            vec![LayoutEffect::OverflowOpened(ToolbarRegion::TabbedMenu)]
        );
        let popup = session.snapshot().popup.expect("popup open");
        assert!(popup.entries.iter().any(|a| a.label == "ed.translation"));

        let _ = session.reduce(LayoutEvent::CloseOverflow);
        let after = session.snapshot();
        assert!(after.popup.is_none());
        assert_eq!(after.toolbars, snapshot.toolbars);

        let effects = session.reduce(LayoutEvent::Resized(ViewportSize::new(
            1920, 900,
        )));
        assert!(effects.contains(&LayoutEffect::LayoutModeChanged {
            from: LayoutMode::Narrow,
            to: LayoutMode::Wide,
        }));
    }

    #[test]
    fn given_popup_tab_entry_when_chosen_then_tab_selected_and_popup_closed() {
        let mut session = LayoutSession::default();
        resize(&mut session, 700, 969);
        let _ = open_tab_overflow(&mut session);

        let effects = session.reduce(LayoutEvent::ChooseOverflowItem {
            id: "translation".to_string(),
        });

        assert_eq!(
            effects[0],
            LayoutEffect::OverflowClosed(ToolbarRegion::TabbedMenu)
        );
        assert!(effects.contains(&LayoutEffect::TabSelected(
            CreatorTab::Translation
        )));
        assert_eq!(session.active_tab(), CreatorTab::Translation);
        assert!(session.snapshot().popup.is_none());
    }

    #[test]
    fn given_open_popup_when_viewport_widens_then_popup_closes() {
        let mut session = LayoutSession::default();
        resize(&mut session, 700, 969);
        let _ = open_tab_overflow(&mut session);

        let effects = session.reduce(LayoutEvent::Resized(ViewportSize::new(
            1920, 900,
        )));

        assert!(effects.contains(&LayoutEffect::OverflowClosed(
            ToolbarRegion::TabbedMenu
        )));
        assert!(session.snapshot().popup.is_none());
    }

    #[test]
    fn given_designer_tab_when_mobile_then_footer_mirrors_top_toolbar() {
        let mut session = LayoutSession::default();
        resize(&mut session, 740, 500);
        let _ = session.reduce(LayoutEvent::CollapsePropertyGrid);
        let snapshot = session.snapshot();
        assert!(snapshot.visibility.top_toolbar_visible);
        assert!(!snapshot.visibility.footer_toolbar_visible);
        let top = shown_ids(&snapshot, ToolbarRegion::TopToolbar);
        assert_eq!(top.len(), 4);

        resize(&mut session, 370, 400);
        let snapshot = session.snapshot();
        assert!(!snapshot.has_toolbar(ToolbarRegion::TopToolbar));
        assert_eq!(shown_ids(&snapshot, ToolbarRegion::FooterToolbar), top);

        resize(&mut session, 1920, 900);
        let snapshot = session.snapshot();
        assert!(!snapshot.has_toolbar(ToolbarRegion::FooterToolbar));
        assert_eq!(shown_ids(&snapshot, ToolbarRegion::TopToolbar), top);
    }

    #[test]
    fn given_mobile_layout_when_grid_closed_and_reopened_then_overlay_only() {
        let mut session = LayoutSession::default();
        resize(&mut session, 740, 500);
        assert_eq!(
            session.docking().map(|d| d.mode),
            Some(DockingMode::Overlay)
        );

        resize(&mut session, 370, 400);
        let docking = session.docking().expect("grid shown on mobile");
        assert_eq!(docking.mode, DockingMode::Overlay);
        assert_eq!(docking.handle, None);

        let _ = session.reduce(LayoutEvent::ClosePropertyGrid);
        assert_eq!(session.docking(), None);

        let _ = session.reduce(LayoutEvent::InvokeAction {
            id: ACTION_SETTINGS.to_string(),
        });
        assert_eq!(
            session.docking().map(|d| d.mode),
            Some(DockingMode::Overlay)
        );

        let _ =
            session.reduce(LayoutEvent::RequestDocking(DockingMode::Inline));
        assert_eq!(
            session.docking().map(|d| d.mode),
            Some(DockingMode::Overlay)
        );

        let _ = session.reduce(LayoutEvent::DragStarted);
        assert!(!session.is_dragging());

        resize(&mut session, 1920, 900);
        assert_eq!(
            session.docking().map(|d| d.mode),
            Some(DockingMode::Inline)
        );
    }

    #[test]
    fn given_preview_tab_when_mobile_then_footer_tracks_pages() {
        let mut session = LayoutSession::default();
        let _ = session.reduce(LayoutEvent::SelectTab(CreatorTab::Preview));
        let snapshot = session.snapshot();
        assert!(!snapshot.has_toolbar(ToolbarRegion::PageBar));
        assert!(!snapshot.has_toolbar(ToolbarRegion::FooterToolbar));
        assert_eq!(snapshot.docking, None);

        resize(&mut session, 370, 400);
        assert_eq!(
            shown_ids(&session.snapshot(), ToolbarRegion::FooterToolbar),
            vec![ACTION_SHOW_INVISIBLE, ACTION_DESIGNER]
        );

        resize(&mut session, 1920, 900);
        let _ = session.reduce(LayoutEvent::SetPageCount(2));
        let snapshot = session.snapshot();
        assert_eq!(shown_ids(&snapshot, ToolbarRegion::PageBar).len(), 3);
        assert!(!snapshot.has_toolbar(ToolbarRegion::FooterToolbar));

        resize(&mut session, 370, 400);
        let snapshot = session.snapshot();
        assert!(!snapshot.has_toolbar(ToolbarRegion::PageBar));
        assert_eq!(
            shown_ids(&snapshot, ToolbarRegion::FooterToolbar),
            vec![
                ACTION_SHOW_INVISIBLE,
                ACTION_PREV_PAGE,
                ACTION_NEXT_PAGE,
                ACTION_DESIGNER
            ]
        );
        let footer = snapshot
            .toolbar(ToolbarRegion::FooterToolbar)
            .expect("footer shown");
        let prev = footer.find(ACTION_PREV_PAGE).expect("prev");
        let next = footer.find(ACTION_NEXT_PAGE).expect("next");
        assert!(prev.disabled && !prev.secondary);
        assert!(!next.disabled && next.secondary);

        let effects = session.reduce(LayoutEvent::InvokeAction {
            id: ACTION_NEXT_PAGE.to_string(),
        });
        assert_eq!(effects, vec![LayoutEffect::PageChanged { index: 1 }]);
        let snapshot = session.snapshot();
        let footer = snapshot
            .toolbar(ToolbarRegion::FooterToolbar)
            .expect("footer shown");
        let prev = footer.find(ACTION_PREV_PAGE).expect("prev");
        let next = footer.find(ACTION_NEXT_PAGE).expect("next");
        assert!(!prev.disabled && prev.secondary);
        assert!(next.disabled && !next.secondary);

        resize(&mut session, 1920, 900);
        let snapshot = session.snapshot();
        assert!(snapshot.has_toolbar(ToolbarRegion::PageBar));
        assert!(!snapshot.has_toolbar(ToolbarRegion::FooterToolbar));
    }

    #[test]
    fn given_unknown_action_when_invoked_then_host_is_notified() {
        let mut session = LayoutSession::default();

        let effects = session.reduce(LayoutEvent::InvokeAction {
            id: "undo".to_string(),
        });

        assert_eq!(
            effects,
            vec![LayoutEffect::ActionInvoked {
                id: "undo".to_string()
            }]
        );
    }

    #[test]
    fn given_identical_inputs_when_snapshot_twice_then_snapshots_match() {
        let mut session = LayoutSession::default();
        resize(&mut session, 1000, 700);

        assert_eq!(session.snapshot(), session.snapshot());

        let mut replay = LayoutSession::default();
        resize(&mut replay, 1000, 700);
        assert_eq!(session.snapshot(), replay.snapshot());
    }

    #[test]
    fn given_custom_config_and_preferences_when_new_then_initial_state_follows()
    {
        let config = LayoutConfig {
            breakpoints: Breakpoints {
                wide: 1440,
                medium: 800,
                narrow: 420,
            },
            property_grid: WidthBounds {
                min_width: 600,
                max_width: 370,
                default_width: 450,
            },
            metrics: ToolbarMetrics::default(),
        };
        let preferences = Preferences {
            side_bar_location: SideBarLocation::Left,
            show_property_grid: true,
            docking: DockingMode::Overlay,
        };

        let viewport = ViewportSize::new(1300, 900);
        let mut session = LayoutSession::new(config, preferences, viewport);

        assert_eq!(session.mode(), LayoutMode::Medium);
        assert_eq!(session.property_grid_width(), 450);
        let docking = session.docking().expect("grid shown at start");
        assert_eq!(docking.mode, DockingMode::Overlay);
        assert_eq!(docking.anchor_edge, SideBarLocation::Left);
        assert_eq!(docking.handle, Some(ResizeHandle::East));

        resize(&mut session, 1500, 900);
        let docking = session.docking().expect("grid still shown");
        assert_eq!(session.mode(), LayoutMode::Wide);
        assert_eq!(docking.mode, DockingMode::Overlay);

        drag(&mut session, 1000);
        assert_eq!(session.property_grid_width(), 600);
    }

    #[test]
    fn given_hidden_grid_preference_when_new_then_no_docking() {
        let preferences = Preferences {
            show_property_grid: false,
            ..Preferences::default()
        };

        let session = LayoutSession::new(
            LayoutConfig::default(),
            preferences,
            ViewportSize::default(),
        );

        assert_eq!(session.docking(), None);
        assert!(!session.snapshot().visibility.property_grid_visible);
    }

    #[test]
    fn given_oversized_metrics_when_snapshot_then_defaults_are_used() {
        let config: LayoutConfig = serde_json::from_str(
            r#"{ "metrics": { "action_extent": 2000000000 } }"#,
        )
        .expect("config parses");

        let mut session = LayoutSession::new(
            config,
            Preferences::default(),
            ViewportSize::new(700, 900),
        );
        let _ = session.reduce(LayoutEvent::SelectTab(CreatorTab::Preview));
        let _ = session.reduce(LayoutEvent::SetPageCount(3));

        let snapshot = session.snapshot();
        let page_bar = snapshot
            .toolbar(ToolbarRegion::PageBar)
            .expect("multi-page preview has a page bar");
        assert!(page_bar.inline_actions().all(|action| action.extent <= 144));
        assert!(snapshot.has_toolbar(ToolbarRegion::TopToolbar));
    }

    #[test]
    fn given_viewport_width_when_snapshot_then_popups_follow_layout() {
        let mut session = LayoutSession::default();
        assert_eq!(
            session.snapshot().popup_presentation,
            PopupPresentations {
                dropdown: PopupPresentation::Dropdown,
                modal: PopupPresentation::Modal,
            }
        );

        resize(&mut session, 380, 600);
        let _ = open_tab_overflow(&mut session);

        let snapshot = session.snapshot();
        assert_eq!(
            snapshot.popup_presentation.modal,
            PopupPresentation::Overlay
        );
        let popup = snapshot.popup.expect("tab popup open on mobile");
        assert_eq!(popup.presentation, PopupPresentation::Overlay);
    }
}
