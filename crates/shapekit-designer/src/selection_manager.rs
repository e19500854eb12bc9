use shapekit_core::Vector2;
use tracing::debug;

use crate::shape::DesignerShape;
use crate::shape_store::ShapeStore;

/// Manages shape and vertex selection state and hit-testing.
///
/// `SelectionManager` is responsible for:
/// - Tracking which shape is selected (at most one)
/// - Tracking which vertex of that shape is selected in edit mode
/// - Keeping every shape's highlight flag in sync with the selection
/// - Picking the shape or vertex nearest to a pointer position
///
/// # Selection Model
///
/// - **Shape Selection**: a shape is picked by its transform position, not by
///   its outline, so small or thin shapes stay easy to grab
/// - **Vertex Selection**: only vertices of the selected shape can be picked,
///   and changing the shape selection always clears the vertex selection
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected shape, if any
    selected_id: Option<u64>,
    /// Index of the selected vertex within the selected shape
    selected_vertex: Option<usize>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapekit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID of the selected shape.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Returns the index of the selected vertex.
    pub fn selected_vertex(&self) -> Option<usize> {
        self.selected_vertex
    }

    /// Selects a shape, or clears the selection with `None`.
    ///
    /// Clears the vertex selection and sets the highlight flag on the newly
    /// selected shape only. An id that is not in the store behaves like
    /// `None`.
    ///
    /// # Arguments
    ///
    /// * `store` - The shape store whose highlight flags are updated
    /// * `id` - The shape to select
    pub fn select(&mut self, store: &mut ShapeStore, id: Option<u64>) {
        let id = id.filter(|id| store.get(*id).is_some());
        self.selected_vertex = None;
        for entry in store.iter_mut() {
            entry.shape.set_highlighted(Some(entry.id) == id);
        }
        self.selected_id = id;
        debug!(?id, "Selection changed");
    }

    /// Selects a vertex of the selected shape, or clears it with `None`.
    pub fn select_vertex(&mut self, index: Option<usize>) {
        self.selected_vertex = index;
    }

    /// Clears the selection if it refers to `id`.
    pub fn forget(&mut self, id: u64) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
            self.selected_vertex = None;
        }
    }

    /// Finds the shape whose transform position is nearest to `point`.
    ///
    /// Returns `None` when the nearest shape is farther than `threshold`.
    /// Hidden shapes are still pickable. On ties the earlier shape in draw
    /// order wins.
    pub fn pick_shape(store: &ShapeStore, point: Vector2, threshold: f64) -> Option<u64> {
        let mut best: Option<(u64, f64)> = None;
        for entry in store.iter() {
            let distance = Vector2::distance(point, entry.shape.transform().position);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((entry.id, distance));
            }
        }
        best.filter(|(_, d)| *d <= threshold).map(|(id, _)| id)
    }

    /// Finds the vertex of `shape` whose world coordinate is nearest to
    /// `point`, within `threshold`.
    pub fn pick_vertex<S: DesignerShape + ?Sized>(
        shape: &S,
        point: Vector2,
        threshold: f64,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, coord) in shape.global_coords().into_iter().enumerate() {
            let distance = Vector2::distance(point, coord);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.filter(|(_, d)| *d <= threshold).map(|(i, _)| i)
    }

    /// Selects the shape nearest to `point`, or clears the selection.
    pub fn select_at(
        &mut self,
        store: &mut ShapeStore,
        point: Vector2,
        threshold: f64,
    ) -> Option<u64> {
        let id = Self::pick_shape(store, point, threshold);
        self.select(store, id);
        id
    }

    /// Selects the vertex of the selected shape nearest to `point`.
    pub fn select_vertex_at(
        &mut self,
        store: &ShapeStore,
        point: Vector2,
        threshold: f64,
    ) -> Option<usize> {
        let index = self
            .selected_id
            .and_then(|id| store.get(id))
            .and_then(|entry| Self::pick_vertex(&entry.shape, point, threshold));
        self.selected_vertex = index;
        index
    }
}
