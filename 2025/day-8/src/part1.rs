use miette::*;

use crate::cluster::cluster_top_three;
use crate::point::parse_points;

/// Number of shortest connections made before measuring the circuits.
pub const CONNECTIONS: usize = 1000;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    process_with(input, CONNECTIONS)
}

#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, connections: usize) -> Result<String> {
    let points = parse_points(input);
    let result = cluster_top_three(&points, connections);
    Ok(result.to_string())
}
