//! Centroid-distance multi-object tracking with stable IDs and per-category counts.
//!
//! The [`CentroidTracker`] consumes one batch of detections per frame, binds each
//! detection to the first live object whose center lies within the distance
//! threshold, registers new objects otherwise, and evicts objects that go unseen
//! for too many consecutive frames. Cumulative creation counts per [`Category`]
//! are available at any time through [`CentroidTracker::counters`].
//!
//! ```
//! use centroid_track_rs::{Category, CentroidTracker, Detection, TrackerConfig};
//!
//! let mut tracker = CentroidTracker::new(TrackerConfig::default());
//! let visible = tracker
//!     .update(&[Detection::new(100, 100, 20, 20, Category::Vehicle)])
//!     .unwrap();
//! assert_eq!(visible[0].id, 1);
//! assert_eq!(tracker.counters().get(Category::Vehicle), 1);
//! ```

pub mod integration;
pub mod tracker;

pub use integration::{
    CategoryMap, DetectionBuilder, DetectionSource, IntoDetections, PipelineError, TrackerPipeline,
};
pub use tracker::{
    Category, CategoryCounters, CentroidTracker, Detection, MatchPolicy, Rect, TrackState,
    TrackedObject, TrackerConfig, TrackerError,
};
