//! Condition code to icon key table.
//!
//! Codes follow the OpenWeather grouping (2xx thunderstorm, 3xx drizzle,
//! 5xx rain, 6xx snow, 7xx atmosphere, 800 clear, 80x clouds). Icon keys are
//! SF Symbols style names understood by the presentation layer.

/// Ranges are inclusive and checked in order; the first match wins.
const ICONS: &[(i64, i64, &str)] = &[
    (200, 232, "cloud.bolt"),
    (300, 321, "cloud.drizzle"),
    (500, 531, "cloud.rain"),
    (600, 622, "cloud.snow"),
    (701, 781, "cloud.fog"),
    (800, 800, "sun.max"),
    // 801-804 share the thunderstorm icon.
    (801, 804, "cloud.bolt"),
];

/// Fallback for codes outside every range.
pub const DEFAULT_ICON: &str = "cloud";

/// Icon key for a provider condition code.
pub fn condition_name(condition_id: i64) -> &'static str {
    ICONS
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&condition_id))
        .map(|(_, _, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
