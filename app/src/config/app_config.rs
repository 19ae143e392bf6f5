//! Runtime application configuration loaded from environment variables.

use std::str::FromStr;

use panel_splitter::{SplitOptions, Thresholds};
use tracing::warn;

use super::defaults::get_default;
use super::validation::validate_setting;

/// Runtime configuration for a splitting run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub page_light_threshold: u8,
    pub page_dark_threshold: u8,
    pub segment_light_threshold: u8,
    pub segment_dark_threshold: u8,
    pub min_gap: u32,
    pub min_segment_height: u32,
    pub strip_aspect_ratio: f64,
    pub jpeg_quality: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing, empty, or invalid values fall back to the setting's default.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String {
            let default = get_default(key).unwrap_or_default();
            match get(key) {
                Some(v) if !v.is_empty() => match validate_setting(key, &v) {
                    Ok(()) => v,
                    Err(msg) => {
                        warn!(key, value = %v, "Invalid setting ({msg}), using default {default}");
                        default.to_string()
                    }
                },
                _ => default.to_string(),
            }
        };

        Self {
            screen_width: parse_or(&g("SCREEN_WIDTH"), 1072),
            screen_height: parse_or(&g("SCREEN_HEIGHT"), 1448),
            page_light_threshold: parse_or(&g("PAGE_LIGHT_THRESHOLD"), 240),
            page_dark_threshold: parse_or(&g("PAGE_DARK_THRESHOLD"), 15),
            segment_light_threshold: parse_or(&g("SEGMENT_LIGHT_THRESHOLD"), 240),
            segment_dark_threshold: parse_or(&g("SEGMENT_DARK_THRESHOLD"), 30),
            min_gap: parse_or(&g("MIN_GAP"), 20),
            min_segment_height: parse_or(&g("MIN_SEGMENT_HEIGHT"), 75),
            strip_aspect_ratio: parse_or(&g("STRIP_ASPECT_RATIO"), 1.5),
            jpeg_quality: parse_or(&g("JPEG_QUALITY"), 75),
        }
    }

    /// Splitting options for the core.
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions::new()
            .with_canvas(self.screen_width, self.screen_height)
            .with_page_thresholds(Thresholds::new(
                self.page_light_threshold,
                self.page_dark_threshold,
            ))
            .with_segment_thresholds(Thresholds::new(
                self.segment_light_threshold,
                self.segment_dark_threshold,
            ))
            .with_min_gap(self.min_gap)
            .with_min_segment_height(self.min_segment_height)
            .with_strip_aspect_ratio(self.strip_aspect_ratio)
    }
}

fn parse_or<T: FromStr>(s: &str, default: T) -> T {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_core_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.split_options(), SplitOptions::default());
        assert_eq!(config.jpeg_quality, 75);
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SCREEN_WIDTH", "758"),
            ("SCREEN_HEIGHT", "1024"),
            ("SEGMENT_DARK_THRESHOLD", "20"),
            ("MIN_SEGMENT_HEIGHT", "100"),
            ("STRIP_ASPECT_RATIO", "2.0"),
        ]));
        let opts = config.split_options();
        assert_eq!((opts.canvas.width, opts.canvas.height), (758, 1024));
        assert_eq!(opts.segment_thresholds, Thresholds::new(240, 20));
        assert_eq!(opts.min_segment_height, 100);
        assert!((opts.strip_aspect_ratio - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SCREEN_WIDTH", "0"),
            ("PAGE_LIGHT_THRESHOLD", "300"),
            ("JPEG_QUALITY", "high"),
            ("MIN_GAP", ""),
        ]));
        assert_eq!(config.screen_width, 1072);
        assert_eq!(config.page_light_threshold, 240);
        assert_eq!(config.jpeg_quality, 75);
        assert_eq!(config.min_gap, 20);
    }
}
