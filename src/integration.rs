//! Integration module for connecting detection collaborators with the tracker.
//!
//! This module provides the traits and helpers that sit on the boundary between
//! an object detector (neural network, background subtraction, ...) and the
//! [`CentroidTracker`](crate::tracker::CentroidTracker): detector output
//! conversion, label normalization and a frame-by-frame pipeline.

mod builder;
mod detector;
mod labels;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use labels::CategoryMap;
pub use pipeline::{PipelineError, TrackerPipeline};
