use serde::Serialize;
use std::fmt;

/// Four-bucket categorical partition of the calendar year.
///
/// Variants are declared in the lexicographic order of their labels, so the
/// derived `Ord` coincides with the ordering the labels carry in the source
/// data. Every sorted report relies on that coincidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    Fall,
    Spring,
    Summer,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Fall, Season::Spring, Season::Summer, Season::Winter];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }

    /// Parse a season label as found in the dataset (case-insensitive,
    /// "Autumn" accepted as a synonym of "Fall").
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fall" | "autumn" => Some(Season::Fall),
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
