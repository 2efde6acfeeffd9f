//! Vertices and edges of a geometric graph.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use nalgebra::Point2;

use crate::error::GraphError;
use crate::geometry::segments_cross;

/// Bound for vertex identity keys.
///
/// Ordered keys make every set/map iteration, and therefore every search result, deterministic.
pub trait VertexId: Ord + Clone + Debug + Send + Sync {}
impl<T: Ord + Clone + Debug + Send + Sync> VertexId for T {}

/// A vertex: identity key plus planar position. Equality, order and hash use the id only.
#[derive(Clone)]
pub struct Vertex<V> {
    id: V,
    pos: Point2<f64>,
}

impl<V> Vertex<V> {
    pub fn new(id: V, x: f64, y: f64) -> Self {
        Self {
            id,
            pos: Point2::new(x, y),
        }
    }

    pub fn at(id: V, pos: Point2<f64>) -> Self {
        Self { id, pos }
    }

    #[inline]
    pub fn id(&self) -> &V {
        &self.id
    }

    #[inline]
    pub fn pos(&self) -> &Point2<f64> {
        &self.pos
    }
}

impl<V: Debug> Debug for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}, {})", self.id, self.pos.x, self.pos.y)
    }
}

impl<V: PartialEq> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl<V: Eq> Eq for Vertex<V> {}

impl<V: PartialOrd> PartialOrd for Vertex<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.id.partial_cmp(&other.id)
    }
}
impl<V: Ord> Ord for Vertex<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<V: Hash> Hash for Vertex<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl<V> Borrow<V> for Vertex<V> {
    fn borrow(&self) -> &V {
        &self.id
    }
}

/// Undirected straight-line edge. Endpoints are stored in ascending id order, so
/// `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    a: Vertex<V>,
    b: Vertex<V>,
}

impl<V: VertexId> Edge<V> {
    /// Build an edge; fails for a self-loop.
    pub fn new(a: Vertex<V>, b: Vertex<V>) -> Result<Self, GraphError> {
        match a.id.cmp(&b.id) {
            Ordering::Less => Ok(Self { a, b }),
            Ordering::Greater => Ok(Self { a: b, b: a }),
            Ordering::Equal => Err(GraphError::Loop {
                id: format!("{:?}", a.id),
            }),
        }
    }

    /// Endpoint with the smaller id.
    #[inline]
    pub fn a(&self) -> &Vertex<V> {
        &self.a
    }

    /// Endpoint with the larger id.
    #[inline]
    pub fn b(&self) -> &Vertex<V> {
        &self.b
    }

    pub fn ids(&self) -> (&V, &V) {
        (&self.a.id, &self.b.id)
    }

    pub fn has_endpoint(&self, id: &V) -> bool {
        self.a.id == *id || self.b.id == *id
    }

    pub fn shares_endpoint(&self, other: &Self) -> bool {
        self.has_endpoint(&other.a.id) || self.has_endpoint(&other.b.id)
    }

    /// Proper geometric crossing; edges sharing an endpoint never cross.
    pub fn crosses(&self, other: &Self) -> bool {
        !self.shares_endpoint(other)
            && segments_cross(&self.a.pos, &self.b.pos, &other.a.pos, &other.b.pos)
    }

    pub fn length(&self) -> f64 {
        (self.b.pos - self.a.pos).norm()
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.a.id, self.b.id)
    }
}
