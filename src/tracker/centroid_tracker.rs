//! Main CentroidTracker algorithm implementation.

use std::collections::BTreeMap;

use log::{debug, trace};
use nalgebra::Point2;

use crate::tracker::category::Category;
use crate::tracker::config::{MatchPolicy, TrackerConfig};
use crate::tracker::counters::CategoryCounters;
use crate::tracker::error::TrackerError;
use crate::tracker::matching::{self, AssignmentResult, Detection};
use crate::tracker::rect::Rect;
use crate::tracker::tracked_object::TrackedObject;

/// Identity tracker keyed on bounding-box centers.
///
/// Call [`update`](Self::update) once per frame, in frame order. The tracker is
/// not internally synchronized; `update` takes `&mut self`, so sharing one
/// instance between threads requires an external lock or a dedicated worker.
#[derive(Debug, Clone)]
pub struct CentroidTracker {
    /// Live objects, iterated in ascending ID order
    objects: BTreeMap<u64, TrackedObject>,
    /// IDs evicted so far, in eviction order
    disappeared: Vec<u64>,
    counters: CategoryCounters,
    next_id: u64,
    frame_id: u64,
    config: TrackerConfig,
}

impl Default for CentroidTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl CentroidTracker {
    /// Create a tracker without validating `config`.
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            objects: BTreeMap::new(),
            disappeared: Vec::new(),
            counters: CategoryCounters::new(),
            next_id: 1,
            frame_id: 0,
            config,
        }
    }

    pub fn try_new(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Process one frame of detections.
    ///
    /// Returns a copy of every object matched or created by this frame, in
    /// detection order. Objects that are live but unseen this frame are not
    /// returned. On error nothing is modified.
    pub fn update(
        &mut self,
        detections: &[Detection],
    ) -> Result<Vec<TrackedObject>, TrackerError> {
        if let Some((index, det)) = detections
            .iter()
            .enumerate()
            .find(|(_, d)| !d.bbox.is_valid())
        {
            return Err(TrackerError::InvalidBox {
                index,
                width: det.bbox.width,
                height: det.bbox.height,
            });
        }

        self.frame_id += 1;

        // Snapshot taken before any creation: objects registered this frame are
        // already claimed and never offered to later detections.
        let ids: Vec<u64> = self.objects.keys().copied().collect();
        let track_centers: Vec<Point2<f64>> = self.objects.values().map(|o| o.center).collect();
        let det_centers: Vec<Point2<f64>> = detections.iter().map(|d| d.bbox.center()).collect();
        let dists = matching::center_distance(&track_centers, &det_centers);
        let thresh = f64::from(self.config.distance_threshold);

        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = match self.config.match_policy {
            MatchPolicy::FirstFit => matching::first_fit_assignment(&dists, thresh),
            MatchPolicy::Optimal => matching::linear_assignment(&dists, thresh),
        };

        let mut assigned: Vec<Option<u64>> = vec![None; detections.len()];

        for &(itracked, idet) in &matches {
            let id = ids[itracked];
            if let Some(object) = self.objects.get_mut(&id) {
                object.refresh(detections[idet].bbox);
                assigned[idet] = Some(id);
            }
        }

        for &idet in &unmatched_detections {
            let det = &detections[idet];
            assigned[idet] = Some(self.register(det.bbox, det.category));
        }

        let visible: Vec<TrackedObject> = assigned
            .iter()
            .flatten()
            .filter_map(|id| self.objects.get(id))
            .cloned()
            .collect();

        let mut expired = Vec::new();
        for &itracked in &unmatched_tracks {
            let id = ids[itracked];
            if let Some(object) = self.objects.get_mut(&id) {
                object.mark_missed();
                if object.frames_since_seen >= self.config.max_frames_without_detection {
                    expired.push(id);
                }
            }
        }

        for id in expired {
            if let Some(object) = self.objects.remove(&id) {
                debug!(
                    "frame {}: evicted object {} ({}) after {} missed frames",
                    self.frame_id, id, object.category, object.frames_since_seen
                );
                self.disappeared.push(id);
            }
        }

        trace!(
            "frame {}: {} detections, {} matched, {} created, {} live",
            self.frame_id,
            detections.len(),
            matches.len(),
            unmatched_detections.len(),
            self.objects.len()
        );

        Ok(visible)
    }

    /// Process one frame given as parallel box and category sequences.
    pub fn update_with_labels(
        &mut self,
        boxes: &[Rect],
        categories: &[Category],
    ) -> Result<Vec<TrackedObject>, TrackerError> {
        if boxes.len() != categories.len() {
            return Err(TrackerError::LengthMismatch {
                boxes: boxes.len(),
                categories: categories.len(),
            });
        }

        let detections: Vec<Detection> = boxes
            .iter()
            .zip(categories)
            .map(|(&bbox, &category)| Detection::from_rect(bbox, category))
            .collect();
        self.update(&detections)
    }

    /// Cumulative number of objects created per category.
    pub fn counters(&self) -> &CategoryCounters {
        &self.counters
    }

    /// All live objects, including those currently unseen, in ascending ID order.
    pub fn live_objects(&self) -> impl Iterator<Item = &TrackedObject> + '_ {
        self.objects.values()
    }

    pub fn get(&self, id: u64) -> Option<&TrackedObject> {
        self.objects.get(&id)
    }

    pub fn live_count(&self) -> usize {
        self.objects.len()
    }

    /// IDs removed after going unseen too long, oldest eviction first.
    pub fn disappeared_ids(&self) -> &[u64] {
        &self.disappeared
    }

    /// Number of frames processed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_id
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    fn register(&mut self, bbox: Rect, category: Category) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.objects.insert(id, TrackedObject::new(id, bbox, category));
        self.counters.increment(category);
        debug!(
            "frame {}: new object {} ({}) at {:?}",
            self.frame_id, id, category, bbox
        );
        id
    }
}
