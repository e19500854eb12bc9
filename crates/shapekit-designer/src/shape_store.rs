//! Ordered shape collection with stable ids.

use tracing::info;

use crate::shape::{DesignerShape, Shape};

/// A shape registered in the editor together with its id and display name.
#[derive(Debug, Clone)]
pub struct ShapeEntry {
    pub id: u64,
    pub name: String,
    pub shape: Shape,
}

impl ShapeEntry {
    pub fn new(id: u64, name: impl Into<String>, shape: Shape) -> Self {
        Self {
            id,
            name: name.into(),
            shape,
        }
    }
}

/// Shapes in draw order. Ids are handed out monotonically and never reused,
/// and display names count per shape kind (`"Square 1"`, `"Square 2"`, ...).
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    entries: Vec<ShapeEntry>,
    next_id: u64,
    created: [u64; 4],
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn kind_slot(shape: &Shape) -> usize {
        match shape {
            Shape::Line(_) => 0,
            Shape::Square(_) => 1,
            Shape::Rectangle(_) => 2,
            Shape::Polygon(_) => 3,
        }
    }

    fn allocate(&mut self, shape: &Shape) -> (u64, String) {
        self.next_id += 1;
        let slot = Self::kind_slot(shape);
        self.created[slot] += 1;
        let name = format!("{} {}", shape.shape_type(), self.created[slot]);
        (self.next_id, name)
    }

    /// Appends a shape on top of the draw order and returns its id.
    pub fn insert(&mut self, shape: Shape) -> u64 {
        let index = self.entries.len();
        self.insert_at(index, shape)
    }

    /// Inserts a shape at `index` in draw order (clamped to the end).
    pub fn insert_at(&mut self, index: usize, shape: Shape) -> u64 {
        let (id, name) = self.allocate(&shape);
        info!(id, name = %name, "Created shape");
        let index = index.min(self.entries.len());
        self.entries.insert(index, ShapeEntry::new(id, name, shape));
        id
    }

    pub fn remove(&mut self, id: u64) -> Option<ShapeEntry> {
        let index = self.position(id)?;
        let entry = self.entries.remove(index);
        info!(id, name = %entry.name, "Removed shape");
        Some(entry)
    }

    pub fn get(&self, id: u64) -> Option<&ShapeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut ShapeEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Index of `id` in draw order.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ShapeEntry> {
        self.entries.iter_mut()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Line, Square};
    use shapekit_core::Transform;

    fn square() -> Shape {
        Square::new(Transform::origin(), 0.25).into()
    }

    #[test]
    fn test_ids_and_names() {
        let mut store = ShapeStore::new();
        let a = store.insert(square());
        let b = store.insert(Line::new(Transform::origin(), 0.4).into());
        let c = store.insert(square());
        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(store.get(a).unwrap().name, "Square 1");
        assert_eq!(store.get(b).unwrap().name, "Line 1");
        assert_eq!(store.get(c).unwrap().name, "Square 2");
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = ShapeStore::new();
        let a = store.insert(square());
        assert!(store.remove(a).is_some());
        assert!(store.remove(a).is_none());
        let b = store.insert(square());
        assert_ne!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_at_keeps_draw_order() {
        let mut store = ShapeStore::new();
        let a = store.insert(square());
        let b = store.insert(square());
        let c = store.insert_at(1, square());
        assert_eq!(store.ids(), vec![a, c, b]);
        assert_eq!(store.position(b), Some(2));
        let d = store.insert_at(99, square());
        assert_eq!(store.position(d), Some(3));
    }
}
