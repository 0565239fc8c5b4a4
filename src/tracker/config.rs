//! Tracker configuration.

use crate::tracker::error::TrackerError;

/// How detections are paired with live objects each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchPolicy {
    /// Each detection, in input order, claims the first unclaimed live object
    /// (ascending ID) whose center is within the distance threshold.
    ///
    /// Order dependent: two detections near the same object resolve in favour of
    /// whichever arrives first, and neighbouring objects can swap identities.
    #[default]
    FirstFit,
    /// Minimum total center distance over all pairs under the threshold (LAPJV).
    Optimal,
}

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Center distance, in pixels, a detection must be strictly below to match
    pub distance_threshold: f32,
    /// Consecutive unmatched frames after which an object is evicted
    pub max_frames_without_detection: u32,
    pub match_policy: MatchPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 25.0,
            max_frames_without_detection: 15,
            match_policy: MatchPolicy::FirstFit,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !self.distance_threshold.is_finite() || self.distance_threshold <= 0.0 {
            return Err(TrackerError::InvalidConfig(format!(
                "distance_threshold must be a positive finite number, got {}",
                self.distance_threshold
            )));
        }
        if self.max_frames_without_detection == 0 {
            return Err(TrackerError::InvalidConfig(
                "max_frames_without_detection must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TrackerConfig::default();
        assert_eq!(config.distance_threshold, 25.0);
        assert_eq!(config.max_frames_without_detection, 15);
        assert_eq!(config.match_policy, MatchPolicy::FirstFit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for distance_threshold in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = TrackerConfig {
                distance_threshold,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(TrackerError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_eviction() {
        let config = TrackerConfig {
            max_frames_without_detection: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
