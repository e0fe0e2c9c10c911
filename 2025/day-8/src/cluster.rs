use crate::dsu::Dsu;
use crate::error::ClusterError;
use crate::graph::{build_edges, Edge, Point};

/// Merges edges in the order given and answers questions about the components.
///
/// Each query runs on its own engine; state is never carried between them.
#[derive(Debug, Clone)]
pub struct ClusterEngine {
    dsu: Dsu,
}

impl ClusterEngine {
    pub fn new(n: usize) -> Self {
        Self { dsu: Dsu::new(n) }
    }

    /// Attempts the first `k` edges and multiplies the three largest component sizes.
    ///
    /// `k` counts attempts, not merges: an edge inside an existing component
    /// still uses up one of the `k`. With fewer than three components only the
    /// available sizes are multiplied.
    pub fn top_three(mut self, edges: &[Edge], k: usize) -> u64 {
        if self.dsu.is_empty() {
            return 0;
        }

        let merges = edges
            .iter()
            .take(k)
            .filter(|edge| self.dsu.union(edge.i, edge.j))
            .count();
        tracing::debug!(attempted = k.min(edges.len()), merges, "connected shortest edges");

        let mut sizes = self.dsu.component_sizes();
        sizes.sort_by(|a, b| b.cmp(a));

        sizes.iter().take(3).map(|&size| size as u64).product()
    }

    /// Merges edges until one component is left and returns the edge that closed it.
    ///
    /// Returns `Ok(None)` when there are fewer than two points, since no edge
    /// ever merges anything.
    pub fn until_single(mut self, edges: &[Edge]) -> Result<Option<Edge>, ClusterError> {
        if self.dsu.component_count() <= 1 {
            return Ok(None);
        }

        for edge in edges {
            // If this merge reduced the component count to 1,
            // the graph is now fully connected.
            if self.dsu.union(edge.i, edge.j) && self.dsu.component_count() == 1 {
                tracing::debug!(?edge, "final merge");
                return Ok(Some(*edge));
            }
        }

        Err(ClusterError::UnreachableGraph {
            remaining: self.dsu.component_count(),
        })
    }
}

/// Product of the three largest circuits after the `k` shortest connections.
#[tracing::instrument(skip(points), fields(n_points = points.len()))]
pub fn cluster_top_three(points: &[Point], k: usize) -> u64 {
    let edges = build_edges(points);
    ClusterEngine::new(points.len()).top_three(&edges, k)
}

/// Product of the x coordinates of the two points joined by the last
/// connection needed to put every point in a single circuit.
#[tracing::instrument(skip_all, fields(n_points = points.len()))]
pub fn cluster_until_single(points: &[Point]) -> Result<i128, ClusterError> {
    let edges = build_edges(points);
    let last = ClusterEngine::new(points.len()).until_single(&edges)?;

    Ok(last.map_or(0, |edge| {
        i128::from(points[edge.i].x) * i128::from(points[edge.j].x)
    }))
}
