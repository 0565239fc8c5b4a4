//! Single tracked object owned by the CentroidTracker.

use nalgebra::Point2;

use crate::tracker::category::Category;
use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;

/// One physical object believed to persist across frames.
///
/// Instances handed out by the tracker are copies; changing them has no effect
/// on the tracker's registry.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedObject {
    /// Unique, monotonically assigned identifier (starts at 1, never reused)
    pub id: u64,
    /// Center of the last matched box
    pub center: Point2<f64>,
    /// Last matched box (TLWH)
    pub bbox: Rect,
    /// Category taken from the detection that created the object
    pub category: Category,
    /// Consecutive frames without a matched detection
    pub frames_since_seen: u32,
}

impl TrackedObject {
    pub(crate) fn new(id: u64, bbox: Rect, category: Category) -> Self {
        Self {
            id,
            center: bbox.center(),
            bbox,
            category,
            frames_since_seen: 0,
        }
    }

    pub fn state(&self) -> TrackState {
        if self.frames_since_seen == 0 {
            TrackState::Tracked
        } else {
            TrackState::Lost
        }
    }

    /// Replace position with the matched box. The category is left untouched.
    pub(crate) fn refresh(&mut self, bbox: Rect) {
        self.bbox = bbox;
        self.center = bbox.center();
        self.frames_since_seen = 0;
    }

    pub(crate) fn mark_missed(&mut self) {
        self.frames_since_seen += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_and_miss() {
        let mut object = TrackedObject::new(7, Rect::new(100, 100, 20, 20), Category::Vehicle);
        assert_eq!(object.center, Point2::new(110.0, 110.0));
        assert_eq!(object.state(), TrackState::Tracked);

        object.mark_missed();
        object.mark_missed();
        assert_eq!(object.frames_since_seen, 2);
        assert_eq!(object.state(), TrackState::Lost);

        object.refresh(Rect::new(105, 103, 20, 20));
        assert_eq!(object.frames_since_seen, 0);
        assert_eq!(object.center, Point2::new(115.0, 113.0));
        assert_eq!(object.category, Category::Vehicle);
        assert_eq!(object.id, 7);
    }
}
