//! Normalization of detector class names into tracker categories.

use std::collections::HashMap;

use crate::tracker::{Category, TrackerError};

/// Maps detector class names onto the tracker's closed category set.
///
/// Unmapped labels fall back to the default category when one is set, and are
/// rejected with [`TrackerError::UnknownCategory`] otherwise. Lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    labels: HashMap<String, Category>,
    default: Option<Category>,
}

impl CategoryMap {
    /// An empty map that rejects every label.
    pub fn new() -> Self {
        Self::default()
    }

    /// COCO class names relevant to traffic counting, defaulting to
    /// [`Category::Vehicle`] for anything else.
    pub fn coco() -> Self {
        Self::new()
            .with("car", Category::Vehicle)
            .with("truck", Category::Vehicle)
            .with("bus", Category::Vehicle)
            .with("motorcycle", Category::Motorcycle)
            .with("bicycle", Category::Motorcycle)
            .with("person", Category::Pedestrian)
            .with("ambulance", Category::Emergency)
            .with("police car", Category::Emergency)
            .with("fire engine", Category::Emergency)
            .with_default(Category::Vehicle)
    }

    pub fn with(mut self, label: &str, category: Category) -> Self {
        self.insert(label, category);
        self
    }

    pub fn with_default(mut self, category: Category) -> Self {
        self.default = Some(category);
        self
    }

    /// Drop the fallback so unmapped labels become errors.
    pub fn without_default(mut self) -> Self {
        self.default = None;
        self
    }

    pub fn insert(&mut self, label: &str, category: Category) {
        self.labels.insert(label.trim().to_ascii_lowercase(), category);
    }

    /// Resolve a label, applying the default for unmapped names.
    pub fn resolve(&self, label: &str) -> Result<Category, TrackerError> {
        self.labels
            .get(&label.trim().to_ascii_lowercase())
            .copied()
            .or(self.default)
            .ok_or_else(|| TrackerError::UnknownCategory(label.to_string()))
    }

    /// Resolve a whole frame of labels, failing on the first unknown one.
    pub fn resolve_all<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<Category>, TrackerError> {
        labels.iter().map(|l| self.resolve(l.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coco_mapping() {
        let map = CategoryMap::coco();
        assert_eq!(map.resolve("truck").unwrap(), Category::Vehicle);
        assert_eq!(map.resolve("Bicycle").unwrap(), Category::Motorcycle);
        assert_eq!(map.resolve("person").unwrap(), Category::Pedestrian);
        assert_eq!(map.resolve("police car").unwrap(), Category::Emergency);
    }

    #[test]
    fn test_unmapped_label_uses_default() {
        let map = CategoryMap::coco();
        assert_eq!(map.resolve("train").unwrap(), Category::Vehicle);
    }

    #[test]
    fn test_unmapped_label_rejected_without_default() {
        let map = CategoryMap::coco().without_default();
        assert_eq!(
            map.resolve("train"),
            Err(TrackerError::UnknownCategory("train".to_string()))
        );
    }

    #[test]
    fn test_resolve_all() {
        let map = CategoryMap::new()
            .with("car", Category::Vehicle)
            .with("person", Category::Pedestrian);
        assert_eq!(
            map.resolve_all(&["car", "person"][..]).unwrap(),
            vec![Category::Vehicle, Category::Pedestrian]
        );
        assert!(map.resolve_all(&["car", "dog"][..]).is_err());
    }
}
