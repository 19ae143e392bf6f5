//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("SCREEN_WIDTH", "1072", "Output canvas width in pixels"),
    ("SCREEN_HEIGHT", "1448", "Output canvas height in pixels"),
    (
        "PAGE_LIGHT_THRESHOLD",
        "240",
        "Rows brighter than this everywhere are split points",
    ),
    (
        "PAGE_DARK_THRESHOLD",
        "15",
        "Rows darker than this everywhere are split points",
    ),
    (
        "SEGMENT_LIGHT_THRESHOLD",
        "240",
        "Pixels brighter than this are trimmed from segments",
    ),
    (
        "SEGMENT_DARK_THRESHOLD",
        "30",
        "Pixels darker than this are trimmed from segments",
    ),
    ("MIN_GAP", "20", "Minimum distance between split points, in rows"),
    (
        "MIN_SEGMENT_HEIGHT",
        "75",
        "Segments shorter than this are dropped",
    ),
    (
        "STRIP_ASPECT_RATIO",
        "1.5",
        "Colored pages wider than this width/height ratio are split",
    ),
    ("JPEG_QUALITY", "75", "JPEG quality of written images (1-100)"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// Every setting key, in definition order.
pub fn setting_keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, _, _)| key)
}

/// Help text listing every environment setting with its default.
pub fn settings_help() -> String {
    let width = setting_keys().map(str::len).max().unwrap_or(0);
    let mut out = String::from("Environment settings (also read from .env):\n");
    for key in setting_keys() {
        if let Some(def) = DEFAULT_SETTINGS.get(key) {
            out.push_str(&format!(
                "  {key:<width$}  {} [default: {}]\n",
                def.description, def.default
            ));
        }
    }
    out
}
