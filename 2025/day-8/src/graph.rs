use glam::I64Vec3;
use itertools::Itertools;

/// A junction box position. Identity is the index in the input, not the coordinates.
pub type Point = I64Vec3;

/// An unordered pair of point indices with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

/// Euclidean distance in `f64`. Both points are widened before subtracting,
/// so coordinates far apart in `i64` cannot overflow.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.as_dvec3().distance(b.as_dvec3())
}

/// Builds every pair of points once and sorts the pairs by distance.
///
/// The sort is stable, so equal distances keep the generation order
/// (`i` ascending, then `j` ascending).
#[tracing::instrument(skip_all, fields(n_points = points.len()))]
pub fn build_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = (0..points.len())
        .tuple_combinations()
        .map(|(i, j)| Edge {
            i,
            j,
            distance: distance(points[i], points[j]),
        })
        .collect::<Vec<_>>();

    // Stable: equal distances stay in (i, j) order.
    edges.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    tracing::debug!(edges = edges.len(), "built sorted edge list");
    edges
}
