//! Builder for creating Detection objects from various input formats.

use crate::tracker::{Category, Detection, Rect};

/// Builder for creating `Detection` objects from various box formats.
///
/// The category defaults to [`Category::Vehicle`], the fallback used when a
/// detector cannot classify a blob (e.g. foreground segmentation).
#[derive(Debug, Clone)]
pub struct DetectionBuilder {
    bbox: Rect,
    category: Category,
}

impl Default for DetectionBuilder {
    fn default() -> Self {
        Self {
            bbox: Rect::default(),
            category: Category::Vehicle,
        }
    }
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        self.bbox = Rect::from_tlbr(x1, y1, x2, y2);
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: i32, cy: i32, w: i32, h: i32) -> Self {
        self.bbox = Rect::from_xywh(cx, cy, w, h);
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.bbox = Rect::new(x, y, w, h);
        self
    }

    /// Set bounding box from normalized YOLO-style center coordinates
    /// scaled to a `frame_width` x `frame_height` frame.
    pub fn normalized_xywh(
        mut self,
        cx: f32,
        cy: f32,
        w: f32,
        h: f32,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        let cx = (cx * frame_width as f32) as i32;
        let cy = (cy * frame_height as f32) as i32;
        let w = (w * frame_width as f32) as i32;
        let h = (h * frame_height as f32) as i32;
        self.bbox = Rect::new(
            (cx as f32 - w as f32 / 2.0) as i32,
            (cy as f32 - h as f32 / 2.0) as i32,
            w,
            h,
        );
        self
    }

    /// Set the category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        Detection::from_rect(self.bbox, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_builder() {
        let det = DetectionBuilder::new()
            .tlbr(10, 20, 50, 80)
            .category(Category::Motorcycle)
            .build();

        assert_eq!(det.bbox, Rect::new(10, 20, 40, 60));
        assert_eq!(det.category, Category::Motorcycle);
    }

    #[test]
    fn test_builder_defaults_to_vehicle() {
        let det = DetectionBuilder::new().xywh(50, 50, 20, 10).build();
        assert_eq!(det.bbox, Rect::new(40, 45, 20, 10));
        assert_eq!(det.category, Category::Vehicle);
    }

    #[test]
    fn test_normalized_xywh() {
        let det = DetectionBuilder::new()
            .normalized_xywh(0.5, 0.5, 0.25, 0.5, 640, 360)
            .build();
        // cx = 320, cy = 180, w = 160, h = 180
        assert_eq!(det.bbox, Rect::new(240, 90, 160, 180));
    }
}
