use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ClusterError {
    /// The edges ran out before every point joined one component.
    #[error("edge sequence exhausted with {remaining} components still disjoint")]
    #[diagnostic(
        code(day8::unreachable_graph),
        help("pass the complete edge set produced by `build_edges`")
    )]
    UnreachableGraph { remaining: usize },
}
