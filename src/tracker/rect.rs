use nalgebra::Point2;

/// Axis-aligned bounding box in frame pixel coordinates.
///
/// Supports the box formats detectors commonly emit:
/// - TLWH: Top-Left X, Top-Left Y, Width, Height (the native layout)
/// - TLBR: Top-Left X, Top-Left Y, Bottom-Right X, Bottom-Right Y
/// - XYWH: Center X, Center Y, Width, Height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Top-left x coordinate
    pub x: i32,
    /// Top-left y coordinate
    pub y: i32,
    /// Width of the bounding box
    pub width: i32,
    /// Height of the bounding box
    pub height: i32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Create a Rect from XYWH format (center x, center y, width, height).
    ///
    /// Odd sizes put the extra pixel on the bottom-right side.
    #[inline]
    pub fn from_xywh(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Self {
            x: cx - width / 2,
            y: cy - height / 2,
            width,
            height,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [i32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    /// Convert to TLWH format: (x, y, width, height).
    #[inline]
    pub fn to_tlwh(&self) -> [i32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Get the center point of the bounding box.
    ///
    /// Each coordinate is `(2 * origin + extent) / 2` in integer arithmetic, so
    /// half-pixel centers are truncated before any distance is measured. The sum
    /// is taken in `i64` and cannot overflow for any `i32` box.
    #[inline]
    pub fn center(&self) -> Point2<f64> {
        let cx = (2 * self.x as i64 + self.width as i64) / 2;
        let cy = (2 * self.y as i64 + self.height as i64) / 2;
        Point2::new(cx as f64, cy as f64)
    }

    /// Get the area of the bounding box.
    #[inline]
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Whether both dimensions are strictly positive and the bottom-right
    /// corner is representable.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.x.checked_add(self.width).is_some()
            && self.y.checked_add(self.height).is_some()
    }

    /// Translate the box by `(dx, dy)`, e.g. from region-of-interest space back to frame space.
    ///
    /// Returns `None` if the translated origin leaves the `i32` range.
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_conversions() {
        let rect = Rect::new(10, 20, 30, 40);

        // TLWH
        assert_eq!(rect.to_tlwh(), [10, 20, 30, 40]);

        // TLBR
        assert_eq!(rect.to_tlbr(), [10, 20, 40, 60]);
    }

    #[test]
    fn test_from_tlbr() {
        let rect = Rect::from_tlbr(10, 20, 40, 60);
        assert_eq!(rect.to_tlwh(), [10, 20, 30, 40]);
    }

    #[test]
    fn test_from_xywh() {
        let rect = Rect::from_xywh(25, 40, 30, 40);
        assert_eq!(rect.to_tlwh(), [10, 20, 30, 40]);
    }

    #[test]
    fn test_center_truncates() {
        let even = Rect::new(100, 100, 20, 20);
        assert_eq!(even.center(), Point2::new(110.0, 110.0));

        // 2 * 10 + 5 = 25 -> 12, 2 * 7 + 3 = 17 -> 8
        let odd = Rect::new(10, 7, 5, 3);
        assert_eq!(odd.center(), Point2::new(12.0, 8.0));
    }

    #[test]
    fn test_validity() {
        assert!(Rect::new(0, 0, 1, 1).is_valid());
        assert!(!Rect::new(0, 0, 0, 10).is_valid());
        assert!(!Rect::new(0, 0, 10, -3).is_valid());
        assert!(!Rect::new(i32::MAX - 5, 0, 20, 20).is_valid());
        assert!(!Rect::new(0, i32::MAX, 20, 1).is_valid());
    }

    #[test]
    fn test_center_at_extreme_coordinates() {
        let far = Rect::new(1_100_000_000, 0, 20, 20);
        assert_eq!(far.center(), Point2::new(1_100_000_010.0, 10.0));

        let edge = Rect::new(i32::MAX - 20, i32::MIN, 20, 20);
        assert_eq!(
            edge.center(),
            Point2::new((i32::MAX - 10) as f64, (i32::MIN + 10) as f64)
        );
    }

    #[test]
    fn test_offset() {
        let rect = Rect::new(5, 6, 7, 8).offset(100, 50).unwrap();
        assert_eq!(rect, Rect::new(105, 56, 7, 8));
        assert_eq!(rect.area(), 56);
    }

    #[test]
    fn test_offset_overflow() {
        assert_eq!(Rect::new(i32::MAX - 1, 0, 1, 1).offset(2, 0), None);
        assert_eq!(Rect::new(0, i32::MIN, 1, 1).offset(0, -1), None);
    }
}
