//! TrackerPipeline for combining detection with tracking.

use log::warn;
use thiserror::Error;

use crate::tracker::{
    CategoryCounters, CentroidTracker, Rect, TrackedObject, TrackerConfig, TrackerError,
};

use super::DetectionSource;

/// Failure of a single pipeline frame.
#[derive(Debug, Error)]
pub enum PipelineError<E: std::error::Error + 'static> {
    /// The detector failed; the tracker was not invoked.
    #[error("detection failed: {0}")]
    Detection(#[source] E),
    /// The detector produced input the tracker rejected; tracker state is unchanged.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    /// Shifting a detection by the region-of-interest origin overflowed.
    #[error("detection {index} leaves the coordinate range after the ROI offset")]
    RoiOffset { index: usize },
}

/// Bundles a `DetectionSource` with the `CentroidTracker`.
///
/// When a region of interest is set, the detector is expected to work on the
/// cropped region and its boxes are shifted back into full-frame coordinates
/// before tracking.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
    roi: Option<Rect>,
}

impl<D: DetectionSource> TrackerPipeline<D>
where
    D::Error: std::error::Error + 'static,
{
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: CentroidTracker::new(config),
            roi: None,
        }
    }

    /// Create a new tracking pipeline, rejecting an invalid tracker config.
    pub fn try_new(detector: D, config: TrackerConfig) -> Result<Self, TrackerError> {
        Ok(Self {
            detector,
            tracker: CentroidTracker::try_new(config)?,
            roi: None,
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Offset detections by the origin of `roi`.
    pub fn with_roi(mut self, roi: Rect) -> Self {
        self.roi = Some(roi);
        self
    }

    pub fn roi(&self) -> Option<Rect> {
        self.roi
    }

    /// Process a single frame and return the objects visible in it.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<TrackedObject>, PipelineError<D::Error>> {
        let mut detections = self
            .detector
            .detect(input, width, height)
            .map_err(PipelineError::Detection)?;

        if let Some(roi) = self.roi {
            for (index, det) in detections.iter_mut().enumerate() {
                det.bbox = det
                    .bbox
                    .offset(roi.x, roi.y)
                    .ok_or(PipelineError::RoiOffset { index })?;
            }
        }

        self.tracker.update(&detections).map_err(|err| {
            warn!(
                "frame {} rejected by tracker: {}",
                self.tracker.frame_count() + 1,
                err
            );
            PipelineError::Tracker(err)
        })
    }

    /// Cumulative per-category counts from the underlying tracker.
    pub fn counters(&self) -> &CategoryCounters {
        self.tracker.counters()
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{Category, Detection};

    struct MockDetector {
        frames: Vec<Vec<Detection>>,
    }

    impl DetectionSource for MockDetector {
        type Error = std::io::Error;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<Detection>, Self::Error> {
            if self.frames.is_empty() {
                return Err(std::io::Error::other("end of stream"));
            }
            Ok(self.frames.remove(0))
        }
    }

    #[test]
    fn test_tracker_pipeline() {
        let detector = MockDetector {
            frames: vec![
                vec![Detection::new(10, 20, 40, 60, Category::Vehicle)],
                vec![Detection::new(14, 22, 40, 60, Category::Vehicle)],
            ],
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector);
        let first = pipeline.process_frame(&[], 640, 480).unwrap();
        let second = pipeline.process_frame(&[], 640, 480).unwrap();

        assert_eq!(first[0].id, 1);
        assert_eq!(second[0].id, 1);
        assert_eq!(pipeline.counters().get(Category::Vehicle), 1);

        let err = pipeline.process_frame(&[], 640, 480).unwrap_err();
        assert!(matches!(err, PipelineError::Detection(_)));
        assert_eq!(pipeline.tracker().frame_count(), 2);
    }

    #[test]
    fn test_roi_offsets_detections() {
        let detector = MockDetector {
            frames: vec![vec![Detection::new(5, 5, 20, 20, Category::Pedestrian)]],
        };

        let mut pipeline =
            TrackerPipeline::with_default_config(detector).with_roi(Rect::new(100, 200, 300, 100));
        let visible = pipeline.process_frame(&[], 640, 480).unwrap();

        assert_eq!(visible[0].bbox, Rect::new(105, 205, 20, 20));
    }

    #[test]
    fn test_roi_offset_overflow_is_reported() {
        let detector = MockDetector {
            frames: vec![vec![Detection::new(i32::MAX - 50, 0, 20, 20, Category::Vehicle)]],
        };

        let mut pipeline =
            TrackerPipeline::with_default_config(detector).with_roi(Rect::new(100, 0, 300, 100));
        let err = pipeline.process_frame(&[], 640, 480).unwrap_err();

        assert!(matches!(err, PipelineError::RoiOffset { index: 0 }));
        assert_eq!(pipeline.tracker().frame_count(), 0);
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        let config = TrackerConfig {
            max_frames_without_detection: 0,
            ..Default::default()
        };
        let detector = MockDetector { frames: vec![] };
        assert!(matches!(
            TrackerPipeline::try_new(detector, config),
            Err(TrackerError::InvalidConfig(_))
        ));

        let detector = MockDetector { frames: vec![] };
        let pipeline = TrackerPipeline::try_new(detector, TrackerConfig::default()).unwrap();
        assert_eq!(pipeline.tracker().config(), &TrackerConfig::default());
    }

    #[test]
    fn test_rejected_frame_leaves_tracker_untouched() {
        let detector = MockDetector {
            frames: vec![vec![Detection::new(0, 0, -4, 10, Category::Vehicle)]],
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector);
        let err = pipeline.process_frame(&[], 640, 480).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Tracker(TrackerError::InvalidBox { index: 0, .. })
        ));
        assert_eq!(pipeline.tracker().frame_count(), 0);
        assert_eq!(pipeline.counters().total(), 0);
    }
}
