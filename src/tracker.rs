mod category;
mod centroid_tracker;
mod config;
mod counters;
mod error;
mod matching;
mod rect;
mod track_state;
mod tracked_object;

pub use category::Category;
pub use centroid_tracker::CentroidTracker;
pub use config::{MatchPolicy, TrackerConfig};
pub use counters::CategoryCounters;
pub use error::TrackerError;
pub use matching::{
    AssignmentResult, Detection, center_distance, first_fit_assignment, linear_assignment,
};
pub use rect::Rect;
pub use track_state::TrackState;
pub use tracked_object::TrackedObject;
