//! Vertex arena with value lookup and optional structured faces.

use std::fmt;

use cutcell_geom::{Vertex, VertexKey};
use hashbrown::HashMap;

use crate::error::{MeshError, MeshResult};

/// Slot in the vertex arena. Ids follow insertion order and are never reused,
/// so on a freshly built grid the id equals the row-major grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Segment between two vertices of the structured grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub from: VertexId,
    pub to: VertexId,
}

impl Face {
    #[inline]
    pub const fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    slots: Vec<Option<Vertex>>,
    // live ids per coordinate, ascending
    lookup: HashMap<VertexKey, Vec<VertexId>>,
    live: usize,
    faces: Vec<Face>,
    removed: usize,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            slots: Vec::with_capacity(vertices),
            lookup: HashMap::with_capacity(vertices),
            ..Self::default()
        }
    }

    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        let iter = vertices.into_iter();
        let mut mesh = Mesh::with_capacity(iter.size_hint().0);
        for v in iter {
            mesh.add_vertex(v);
        }
        mesh
    }

    /// Appends `v`. Duplicates are allowed and each one is matched separately
    /// by later value lookups.
    pub fn add_vertex(&mut self, v: Vertex) -> VertexId {
        let id = VertexId(self.slots.len());
        self.slots.push(Some(v));
        if comparable(v) {
            self.lookup.entry(v.key()).or_default().push(id);
        }
        self.live += 1;
        id
    }

    /// Current vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }

    /// Current vertices with their ids, in insertion order.
    pub fn vertices_with_ids(&self) -> impl Iterator<Item = (VertexId, Vertex)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|v| (VertexId(i), v)))
    }

    pub fn to_vec(&self) -> Vec<Vertex> {
        self.vertices().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn get(&self, id: VertexId) -> Option<Vertex> {
        self.slots.get(id.0).copied().flatten()
    }

    /// Number of live vertices equal to `v`.
    pub fn count_of(&self, v: Vertex) -> usize {
        if !comparable(v) {
            return 0;
        }
        self.lookup.get(&v.key()).map_or(0, Vec::len)
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        self.count_of(v) > 0
    }

    /// Id of the first live vertex equal to `v`.
    pub fn vertex_index(&self, v: Vertex) -> MeshResult<VertexId> {
        if !comparable(v) {
            return Err(MeshError::not_found(v.x, v.z));
        }
        self.lookup
            .get(&v.key())
            .and_then(|ids| ids.first().copied())
            .ok_or_else(|| MeshError::not_found(v.x, v.z))
    }

    /// Removes, for each value in `removals`, the first live vertex equal to it.
    ///
    /// Stops at the first value with no live match; removals already applied
    /// are kept.
    pub fn remove_vertices<I>(&mut self, removals: I) -> MeshResult<usize>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut n = 0;
        for v in removals {
            self.remove_first(v)?;
            n += 1;
        }
        Ok(n)
    }

    fn remove_first(&mut self, v: Vertex) -> MeshResult<VertexId> {
        if !comparable(v) {
            return Err(MeshError::not_found(v.x, v.z));
        }
        let key = v.key();
        let ids = self
            .lookup
            .get_mut(&key)
            .ok_or_else(|| MeshError::not_found(v.x, v.z))?;
        let id = ids.remove(0);
        if ids.is_empty() {
            self.lookup.remove(&key);
        }
        self.slots[id.0] = None;
        self.live -= 1;
        self.removed += 1;
        Ok(id)
    }

    /// Records a face between two live vertices. Refused once any vertex has
    /// been removed, since grid positions no longer line up with ids.
    pub fn add_face(&mut self, from: VertexId, to: VertexId) -> MeshResult<()> {
        if self.removed > 0 {
            return Err(MeshError::StaleFaces {
                removed: self.removed,
            });
        }
        for id in [from, to] {
            if self.get(id).is_none() {
                return Err(MeshError::UnknownVertex(id));
            }
        }
        self.faces.push(Face::new(from, to));
        Ok(())
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True once a vertex has been removed while faces exist.
    #[inline]
    pub fn faces_are_stale(&self) -> bool {
        self.removed > 0 && !self.faces.is_empty()
    }

    /// Endpoint coordinates of every face, in face order.
    pub fn face_endpoints(&self) -> MeshResult<Vec<(Vertex, Vertex)>> {
        if self.faces.is_empty() {
            return Ok(Vec::new());
        }
        if self.faces_are_stale() {
            return Err(MeshError::StaleFaces {
                removed: self.removed,
            });
        }
        self.faces
            .iter()
            .map(|f| -> MeshResult<(Vertex, Vertex)> {
                let a = self.get(f.from).ok_or(MeshError::UnknownVertex(f.from))?;
                let b = self.get(f.to).ok_or(MeshError::UnknownVertex(f.to))?;
                Ok((a, b))
            })
            .collect()
    }
}

// NaN never compares equal, so such vertices are never found by value.
#[inline]
fn comparable(v: Vertex) -> bool {
    !v.x.is_nan() && !v.z.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, z: f64) -> Vertex {
        Vertex::new(x, z)
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut m = Mesh::new();
        assert_eq!(m.add_vertex(v(0.0, 0.0)), VertexId::new(0));
        assert_eq!(m.add_vertex(v(1.0, 0.0)), VertexId::new(1));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn duplicate_removed_one_at_a_time() {
        let mut m = Mesh::from_vertices([v(1.0, 1.0), v(2.0, 2.0), v(1.0, 1.0)]);
        assert_eq!(m.count_of(v(1.0, 1.0)), 2);
        m.remove_vertices([v(1.0, 1.0)]).unwrap();
        assert_eq!(m.to_vec(), vec![v(2.0, 2.0), v(1.0, 1.0)]);
        assert_eq!(m.vertex_index(v(1.0, 1.0)).unwrap(), VertexId::new(2));
    }

    #[test]
    fn nan_is_never_found() {
        let mut m = Mesh::new();
        m.add_vertex(v(f64::NAN, 0.0));
        assert_eq!(m.len(), 1);
        assert!(!m.contains(v(f64::NAN, 0.0)));
        assert!(matches!(
            m.remove_vertices([v(f64::NAN, 0.0)]),
            Err(MeshError::NotFound { .. })
        ));
    }

    #[test]
    fn removal_marks_faces_stale() {
        let mut m = Mesh::from_vertices([v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)]);
        m.add_face(VertexId::new(0), VertexId::new(1)).unwrap();
        assert!(!m.faces_are_stale());
        m.remove_vertices([v(2.0, 0.0)]).unwrap();
        assert!(m.faces_are_stale());
        assert_eq!(m.face_endpoints(), Err(MeshError::StaleFaces { removed: 1 }));
        assert!(m.add_face(VertexId::new(0), VertexId::new(1)).is_err());
        // raw ids stay readable
        assert_eq!(m.face_count(), 1);
    }
}
