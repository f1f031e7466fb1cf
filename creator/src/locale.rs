use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors emitted while loading a locale override file.
#[derive(Debug, Error)]
pub(crate) enum LocaleError {
    #[error("locale IO failed")]
    Io(#[from] std::io::Error),
    #[error("locale JSON failed")]
    Json(#[from] serde_json::Error),
    #[error("locale root must be a JSON object")]
    NotAnObject,
}

/// English titles for every key the editor chrome uses.
const ENGLISH: &[(&str, &str)] = &[
    ("ed.survey", "Survey"),
    ("ed.designer", "Survey Designer"),
    ("ed.testSurvey", "Test Survey"),
    ("ed.logic", "Survey Logic"),
    ("ed.jsonEditor", "JSON Editor"),
    ("ed.embedSurvey", "Embed Survey"),
    ("ed.translation", "Translation"),
    ("ed.undo", "Undo"),
    ("ed.redo", "Redo"),
    ("ed.settings", "Survey Settings"),
    ("ed.selectPage", "Select page..."),
    ("ed.prevPage", "Previous Page"),
    ("ed.nextPage", "Next Page"),
    ("ed.more", "More"),
    ("ed.close", "Close"),
    ("ts.showInvisibleElements", "Show invisible elements"),
    ("qt.radiogroup", "Radiogroup"),
    ("qt.rating", "Rating"),
    ("qt.checkbox", "Checkbox"),
    ("qt.dropdown", "Dropdown"),
    ("qt.boolean", "Boolean"),
    ("qt.file", "File"),
    ("qt.imagepicker", "Image picker"),
    ("qt.ranking", "Ranking"),
    ("qt.comment", "Comment"),
    ("qt.text", "Single Input"),
    ("qt.multipletext", "Multiple Text"),
    ("qt.panel", "Panel"),
    ("qt.paneldynamic", "Panel (dynamic panels)"),
    ("qt.matrix", "Matrix (single choice)"),
    ("qt.matrixdropdown", "Matrix (multiple choice)"),
    ("qt.matrixdynamic", "Matrix (dynamic rows)"),
    ("qt.html", "Html"),
    ("qt.expression", "Expression (read-only)"),
    ("qt.image", "Image"),
    ("qt.signaturepad", "Signature pad"),
];

/// Key to text lookup with English fallback.
#[derive(Debug, Clone, Default)]
pub(crate) struct Localizer {
    overrides: HashMap<String, String>,
}

impl Localizer {
    pub(crate) fn load(path: &Path) -> Result<Self, LocaleError> {
        let data = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&data)?;
        let localizer = Self::from_json(&value)?;
        log::info!(
            "loaded {} locale strings from {}",
            localizer.overrides.len(),
            path.display()
        );
        Ok(localizer)
    }

    /// Accept flat `{"ed.designer": "..."}` or nested `{"ed": {...}}` maps.
    pub(crate) fn from_json(
        value: &serde_json::Value,
    ) -> Result<Self, LocaleError> {
        let serde_json::Value::Object(map) = value else {
            return Err(LocaleError::NotAnObject);
        };

        let mut overrides = HashMap::new();
        flatten(map, "", &mut overrides);
        Ok(Self { overrides })
    }

    /// Resolve `key`, falling back to English and then the key itself.
    pub(crate) fn text<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.overrides.get(key) {
            return text;
        }

        ENGLISH
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, text)| *text)
            .unwrap_or(key)
    }
}

fn flatten(
    map: &serde_json::Map<String, serde_json::Value>,
    prefix: &str,
    out: &mut HashMap<String, String>,
) {
    for (name, value) in map {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            serde_json::Value::String(text) => {
                out.insert(key, text.clone());
            },
            serde_json::Value::Object(nested) => flatten(nested, &key, out),
            _ => log::debug!("locale entry `{key}` is not a string, skipped"),
        }
    }
}
