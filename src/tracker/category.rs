//! Closed set of object categories the tracker counts.

use std::fmt;
use std::str::FromStr;

use crate::tracker::error::TrackerError;

/// Object category, fixed when a tracked object is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Cars, trucks and buses
    Vehicle,
    /// Motorcycles and bicycles
    Motorcycle,
    /// People on foot
    Pedestrian,
    /// Ambulances, police cars and fire engines
    Emergency,
}

impl Category {
    /// Every category, in counter display order.
    pub const ALL: [Category; 4] = [
        Category::Vehicle,
        Category::Motorcycle,
        Category::Pedestrian,
        Category::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vehicle => "vehicle",
            Category::Motorcycle => "motorcycle",
            Category::Pedestrian => "pedestrian",
            Category::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vehicle" => Ok(Category::Vehicle),
            "motorcycle" => Ok(Category::Motorcycle),
            "pedestrian" => Ok(Category::Pedestrian),
            "emergency" | "emergency-vehicle" => Ok(Category::Emergency),
            _ => Err(TrackerError::UnknownCategory(s.to_string())),
        }
    }
}
