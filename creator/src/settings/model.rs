use creator_ui_layout::{
    Breakpoints, LayoutConfig, Preferences, ToolbarMetrics, WidthBounds,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed settings payload used for persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub(crate) struct SettingsData {
    layout: LayoutConfig,
    preferences: Preferences,
}

impl SettingsData {
    pub(crate) fn layout(&self) -> LayoutConfig {
        self.layout
    }

    pub(crate) fn preferences(&self) -> Preferences {
        self.preferences
    }

    #[cfg(test)]
    pub(crate) fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.layout.breakpoints = breakpoints;
    }

    #[cfg(test)]
    pub(crate) fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Build settings from a JSON document, keeping every section that
    /// parses and falling back to defaults for the rest.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(layout) = value.get("layout") {
            if let Some(breakpoints) =
                read_section::<Breakpoints>(layout, "breakpoints")
            {
                settings.layout.breakpoints = breakpoints;
            }
            if let Some(bounds) =
                read_section::<WidthBounds>(layout, "property_grid")
            {
                settings.layout.property_grid = bounds;
            }
            if let Some(metrics) =
                read_section::<ToolbarMetrics>(layout, "metrics")
            {
                settings.layout.metrics = metrics;
            }
        }

        if let Some(preferences) =
            read_section::<Preferences>(value, "preferences")
        {
            settings.preferences = preferences;
        }

        settings
    }

    /// Layout sections whose values are out of range and get repaired by
    /// [`SettingsData::normalized`].
    pub(crate) fn repaired_sections(&self) -> Vec<&'static str> {
        let layout = &self.layout;
        let mut sections = Vec::new();
        if !layout.breakpoints.is_valid() {
            sections.push("breakpoints");
        }
        if !layout.property_grid.is_valid() {
            sections.push("property_grid");
        }
        if layout.metrics.normalized() != layout.metrics {
            sections.push("metrics");
        }
        sections
    }

    /// Return a copy with invalid layout values replaced by defaults.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            layout: self.layout.normalized(),
            preferences: self.preferences,
        }
    }
}

fn read_section<T: DeserializeOwned>(
    value: &serde_json::Value,
    key: &str,
) -> Option<T> {
    let section = value.get(key)?;
    match serde_json::from_value(section.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::warn!("settings section `{key}` ignored: {err}");
            None
        },
    }
}
