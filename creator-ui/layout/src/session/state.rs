use super::model::{
    LayoutSnapshot, OverflowPopup, ToolbarLayout, ToolbarRegion,
};
use crate::config::{LayoutConfig, Preferences};
use crate::docking::{
    DockingDecision, DockingMode, DragGesture, SideBarLocation, SidePanel,
    select_docking,
};
use crate::overflow::{OverflowLayout, ToolbarAction, compute_overflow};
use crate::popup::{PopupKind, PopupPresentations, popup_presentation};
use crate::toolbar::{
    CreatorTab, PageCursor, designer_actions, page_bar_actions,
    preview_footer_actions, tab_actions, toolbox_actions,
};
use crate::viewport::{LayoutMode, ViewportSize};
use crate::visibility::{PanelToggles, PanelVisibility, decide_visibility};

/// Internal state of one editor's layout.
#[derive(Debug, Clone)]
pub(super) struct SessionState {
    config: LayoutConfig,
    viewport: ViewportSize,
    mode: LayoutMode,
    location: SideBarLocation,
    requested_docking: DockingMode,
    panel: SidePanel,
    tab: CreatorTab,
    pages: PageCursor,
    drag: Option<DragGesture>,
    popup: Option<ToolbarRegion>,
}

impl SessionState {
    pub(super) fn new(
        config: LayoutConfig,
        preferences: Preferences,
        viewport: ViewportSize,
    ) -> Self {
        let config = config.normalized();
        let mut panel = SidePanel::new(config.property_grid);
        panel.set_expanded(preferences.show_property_grid);

        Self {
            mode: config.breakpoints.classify(viewport.width),
            config,
            viewport,
            location: preferences.side_bar_location,
            requested_docking: preferences.docking,
            panel,
            tab: CreatorTab::default(),
            pages: PageCursor::default(),
            drag: None,
            popup: None,
        }
    }

    pub(super) fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub(super) fn tab(&self) -> CreatorTab {
        self.tab
    }

    pub(super) fn pages(&self) -> &PageCursor {
        &self.pages
    }

    pub(super) fn panel(&self) -> &SidePanel {
        &self.panel
    }

    pub(super) fn popup(&self) -> Option<ToolbarRegion> {
        self.popup
    }

    pub(super) fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Apply a new viewport and return the previous mode when it changed.
    pub(super) fn resize(
        &mut self,
        viewport: ViewportSize,
    ) -> Option<LayoutMode> {
        self.viewport = viewport;
        let mode = self.config.breakpoints.classify(viewport.width);
        if mode == self.mode {
            return None;
        }

        let previous = self.mode;
        self.mode = mode;
        Some(previous)
    }

    pub(super) fn set_property_grid_expanded(&mut self, expanded: bool) {
        if !expanded {
            self.drag = None;
        }
        self.panel.set_expanded(expanded);
    }

    pub(super) fn set_location(&mut self, location: SideBarLocation) {
        if self.location != location {
            self.drag = None;
        }
        self.location = location;
    }

    pub(super) fn request_docking(&mut self, mode: DockingMode) {
        self.requested_docking = mode;
    }

    /// Return whether the active tab changed.
    pub(super) fn select_tab(&mut self, tab: CreatorTab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        self.drag = None;
        true
    }

    pub(super) fn pages_mut(&mut self) -> &mut PageCursor {
        &mut self.pages
    }

    /// Begin a resize drag when the docked panel exposes a handle.
    pub(super) fn start_drag(&mut self) -> bool {
        let handle = self.docking().and_then(|docking| docking.handle);
        match handle {
            Some(handle) => {
                self.drag =
                    Some(DragGesture::start(handle, self.panel.width()));
                true
            },
            None => {
                log::debug!(
                    "resize drag ignored: no handle in {:?}",
                    self.mode
                );
                false
            },
        }
    }

    pub(super) fn move_drag(&mut self, dx: i32) -> bool {
        let bounds = self.panel.bounds();
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let width = drag.move_by(dx, &bounds);
        self.panel.set_width(i64::from(width));
        true
    }

    pub(super) fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Drop a drag whose handle no longer exists.
    pub(super) fn settle_drag(&mut self) {
        let Some(drag) = self.drag else {
            return;
        };
        let handle = self.docking().and_then(|docking| docking.handle);
        if handle != Some(drag.handle()) {
            self.drag = None;
        }
    }

    pub(super) fn open_popup(&mut self, region: ToolbarRegion) {
        self.popup = Some(region);
    }

    pub(super) fn close_popup(&mut self) -> Option<ToolbarRegion> {
        self.popup.take()
    }

    pub(super) fn docking(&self) -> Option<DockingDecision> {
        if self.tab != CreatorTab::Designer {
            return None;
        }
        select_docking(
            self.mode,
            self.viewport.width,
            &self.panel,
            self.location,
            self.requested_docking,
        )
    }

    /// Region flags after composing the mode policy with the active tab.
    pub(super) fn visibility(&self) -> PanelVisibility {
        let toggles = PanelToggles {
            property_grid_expanded: self.panel.is_expanded(),
        };
        let mut visibility = decide_visibility(self.mode, &toggles);

        if self.tab != CreatorTab::Designer {
            visibility.toolbox_visible = false;
            visibility.toolbox_compact = false;
            visibility.page_navigator_visible = false;
            visibility.property_grid_visible = false;
        }
        visibility
    }

    pub(super) fn toolbars(&self) -> Vec<ToolbarLayout> {
        let visibility = self.visibility();
        let metrics = &self.config.metrics;
        let width = self.viewport.width;
        let mut toolbars = Vec::new();

        let top_actions = designer_actions(metrics);
        let top_extent: u32 = if visibility.top_toolbar_visible {
            top_actions
                .iter()
                .fold(0, |sum, action| sum.saturating_add(action.extent))
        } else {
            0
        };

        let tabs = tab_actions(metrics);
        let tab_layout = if visibility.tab_overflow_active {
            self.overflow(&tabs, width.saturating_sub(top_extent))
        } else {
            OverflowLayout::all_inline(&tabs)
        };
        toolbars.push(toolbar(ToolbarRegion::TabbedMenu, tab_layout));

        if visibility.top_toolbar_visible {
            toolbars.push(toolbar(
                ToolbarRegion::TopToolbar,
                self.overflow(&top_actions, width),
            ));
        }

        if visibility.footer_toolbar_visible {
            let footer = if self.tab == CreatorTab::Preview {
                preview_footer_actions(&self.pages, metrics)
            } else {
                top_actions
            };
            toolbars.push(toolbar(
                ToolbarRegion::FooterToolbar,
                self.overflow(&footer, width),
            ));
        } else if self.tab == CreatorTab::Preview {
            let page_bar = page_bar_actions(&self.pages, metrics);
            if !page_bar.is_empty() {
                toolbars.push(toolbar(
                    ToolbarRegion::PageBar,
                    self.overflow(&page_bar, width),
                ));
            }
        }

        if visibility.toolbox_visible {
            let height =
                self.viewport.height.saturating_sub(metrics.header_extent);
            toolbars.push(toolbar(
                ToolbarRegion::Toolbox,
                self.overflow(&toolbox_actions(metrics), height),
            ));
        }

        toolbars
    }

    pub(super) fn snapshot(&self) -> LayoutSnapshot {
        let toolbars = self.toolbars();
        let popup = self.popup.and_then(|region| {
            toolbars
                .iter()
                .find(|toolbar| toolbar.region == region)
                .filter(|toolbar| toolbar.layout.has_overflow())
                .map(|toolbar| OverflowPopup {
                    region,
                    presentation: popup_presentation(
                        self.mode,
                        PopupKind::Dropdown,
                    ),
                    entries: toolbar.layout.overflow.clone(),
                })
        });

        LayoutSnapshot {
            viewport: self.viewport,
            mode: self.mode,
            active_tab: self.tab,
            side_bar_location: self.location,
            visibility: self.visibility(),
            docking: self.docking(),
            toolbars,
            popup,
            popup_presentation: PopupPresentations::for_mode(self.mode),
        }
    }

    fn overflow(
        &self,
        actions: &[ToolbarAction],
        available: u32,
    ) -> OverflowLayout {
        compute_overflow(actions, available, self.config.metrics.trigger_extent)
    }
}

fn toolbar(region: ToolbarRegion, layout: OverflowLayout) -> ToolbarLayout {
    ToolbarLayout { region, layout }
}
