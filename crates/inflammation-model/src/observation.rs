use std::fmt;

/// A single inflammation reading taken on a given day.
///
/// Observations are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Observation {
    day: u32,
    value: f64,
}

impl Observation {
    #[must_use]
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
