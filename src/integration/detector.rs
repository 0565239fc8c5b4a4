//! Trait for the collaborators that produce per-frame detections.

use crate::tracker::{Category, Detection, Rect};

/// Trait for object detection backends feeding the tracker.
///
/// Implement this trait to connect any detector (a neural network, a
/// background subtractor, a replayed annotation file) to the tracker.
/// Categories must already be normalized, e.g. through a
/// [`CategoryMap`](crate::integration::CategoryMap).
///
/// # Example
///
/// ```ignore
/// use centroid_track_rs::{Category, Detection, DetectionSource};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Detection>, Self::Error> {
///         // Run inference and return detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run detection on raw image data.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting detector-specific outputs to `Detection`.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

impl IntoDetections for Vec<(Rect, Category)> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter()
            .map(|(bbox, category)| Detection::from_rect(bbox, category))
            .collect()
    }
}
