pub mod cluster;
pub mod dsu;
pub mod error;
pub mod graph;
pub mod part1;
pub mod part2;
pub mod point;

pub use cluster::{cluster_top_three, cluster_until_single, ClusterEngine};
pub use error::ClusterError;
pub use graph::{build_edges, Edge, Point};
pub use point::parse_points;
