//! Mode dispatch and sampling fallback.

use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{NodeSource, OptimizerConfig};
use crate::error::SamplingError;
use crate::graph::{build_graph, WeightedGraph};
use crate::models::{Algorithm, GeoNode, NodeId, Path, RouteResult};
use crate::sampling::{enumerate_simple_paths, sample_path, CostModel};
use crate::shortest_path::dijkstra;
use crate::Error;

/// Routes between two nodes using a selectable algorithm.
///
/// An optimizer owns its configuration and random source; create one per
/// call or per thread. Nothing is shared between instances.
///
/// In `qaoa` mode every internal failure (oversized graph, too many
/// candidate paths, no candidates, a degenerate distribution) is logged and
/// answered with the Dijkstra result for the same pair. Callers only ever see
/// [`Error::InvalidMode`], [`Error::NodeNotFound`] or [`Error::NoPathFound`].
///
/// # Examples
///
/// ```
/// use geo_routing::models::GeoNode;
/// use geo_routing::optimizer::{OptimizerConfig, RouteOptimizer};
///
/// let nodes = vec![
///     GeoNode::new("a", "A", 0.0, 0.0).unwrap(),
///     GeoNode::new("b", "B", 0.0, 1.0).unwrap(),
///     GeoNode::new("c", "C", 1.0, 0.0).unwrap(),
/// ];
/// let mut optimizer = RouteOptimizer::with_seed(OptimizerConfig::default(), 42);
///
/// let result = optimizer
///     .optimize_snapshot(&nodes, nodes[0].id(), nodes[2].id(), "dijkstra")
///     .unwrap();
/// assert_eq!(result.path().len(), 2);
///
/// let sampled = optimizer
///     .optimize_snapshot(&nodes, nodes[0].id(), nodes[2].id(), "QAOA")
///     .unwrap();
/// assert!(sampled.distance() >= result.distance());
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<R = StdRng> {
    config: OptimizerConfig,
    rng: R,
}

impl RouteOptimizer<StdRng> {
    /// Creates an optimizer seeded from `config.seed`, or from OS entropy if unset.
    pub fn new(config: OptimizerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// Creates an optimizer with a fixed seed, overriding `config.seed`.
    pub fn with_seed(config: OptimizerConfig, seed: u64) -> Self {
        Self::new(config.with_seed(seed))
    }
}

impl Default for RouteOptimizer<StdRng> {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

impl<R: Rng> RouteOptimizer<R> {
    /// Creates an optimizer drawing from the given random source.
    pub fn with_rng(config: OptimizerConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Routes from `start` to `end` over `graph`.
    ///
    /// `mode` is `"dijkstra"` or `"qaoa"`, ignoring case.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either node is absent (checked first)
    /// - [`Error::InvalidMode`] for any other mode string
    /// - [`Error::NoPathFound`] if no route connects the nodes
    pub fn optimize(
        &mut self,
        graph: &WeightedGraph,
        start: &NodeId,
        end: &NodeId,
        mode: &str,
    ) -> Result<Path, Error> {
        ensure_nodes(graph, start, end)?;
        let algorithm = mode.parse()?;
        self.run(graph, start, end, algorithm)
    }

    /// Same as [`optimize`](Self::optimize) with an already-parsed algorithm.
    pub fn solve(
        &mut self,
        graph: &WeightedGraph,
        start: &NodeId,
        end: &NodeId,
        algorithm: Algorithm,
    ) -> Result<Path, Error> {
        ensure_nodes(graph, start, end)?;
        self.run(graph, start, end, algorithm)
    }

    /// Builds a fresh graph over `nodes` and routes over it.
    ///
    /// The reported execution time covers graph construction and solving.
    pub fn optimize_snapshot(
        &mut self,
        nodes: &[GeoNode],
        start: &NodeId,
        end: &NodeId,
        mode: &str,
    ) -> Result<RouteResult, Error> {
        self.route_snapshot(Instant::now(), nodes, start, end, mode)
    }

    /// Reads the current snapshot from `source` and routes over it.
    ///
    /// The reported execution time includes the read.
    pub fn optimize_from<S: NodeSource + ?Sized>(
        &mut self,
        source: &S,
        start: &NodeId,
        end: &NodeId,
        mode: &str,
    ) -> Result<RouteResult, Error> {
        let started = Instant::now();
        let nodes = source.current_nodes();
        self.route_snapshot(started, &nodes, start, end, mode)
    }

    fn route_snapshot(
        &mut self,
        started: Instant,
        nodes: &[GeoNode],
        start: &NodeId,
        end: &NodeId,
        mode: &str,
    ) -> Result<RouteResult, Error> {
        let graph = build_graph(nodes);
        ensure_nodes(&graph, start, end)?;
        let algorithm = mode.parse()?;
        let path = self.run(&graph, start, end, algorithm)?;
        let elapsed = started.elapsed();

        info!(
            "Route {start} -> {end} via {algorithm}: {} stops, {:.3} km in {elapsed:?}",
            path.len(),
            path.distance()
        );
        Ok(RouteResult::new(
            algorithm,
            start.clone(),
            end.clone(),
            path,
            elapsed,
        ))
    }

    fn run(
        &mut self,
        graph: &WeightedGraph,
        start: &NodeId,
        end: &NodeId,
        algorithm: Algorithm,
    ) -> Result<Path, Error> {
        debug!(
            "Routing {start} -> {end} with {algorithm} over {} nodes",
            graph.node_count()
        );

        let path = match algorithm {
            Algorithm::Dijkstra => dijkstra(graph, start, end)?,
            Algorithm::Qaoa => match self.sample(graph, start, end) {
                Ok(path) => path,
                Err(err) => {
                    warn!("Sampling failed for {start} -> {end}: {err}. Falling back to dijkstra");
                    dijkstra(graph, start, end)?
                }
            },
        };

        if !path.is_reachable() {
            return Err(Error::NoPathFound {
                start: start.clone(),
                end: end.clone(),
            });
        }
        Ok(path)
    }

    fn sample(
        &mut self,
        graph: &WeightedGraph,
        start: &NodeId,
        end: &NodeId,
    ) -> Result<Path, SamplingError> {
        let limits = self.config.sampling;
        let model = CostModel::from_graph(graph, limits.max_nodes)?;
        if model.is_degenerate() {
            return Ok(degenerate_path(start, end));
        }

        let candidates = enumerate_simple_paths(graph, start, end, limits.max_paths)?;
        let chosen = sample_path(&candidates, &mut self.rng)?;
        debug!(
            "Sampled a {}-stop path from {} candidates",
            chosen.len(),
            candidates.len()
        );
        Ok(chosen.clone())
    }
}

/// Result of the sampling branch when the graph has no weighted edges.
///
/// The distance is reported as 0 regardless of the true geographic distance
/// between the nodes. This mirrors the established wire behaviour and is kept
/// as an explicit special case until its intended semantics are settled.
/// `start == end` yields the one-node path.
fn degenerate_path(start: &NodeId, end: &NodeId) -> Path {
    if start == end {
        Path::single(start.clone())
    } else {
        Path::new(vec![start.clone(), end.clone()], 0.0)
    }
}

fn ensure_nodes(graph: &WeightedGraph, start: &NodeId, end: &NodeId) -> Result<(), Error> {
    for id in [start, end] {
        if !graph.contains(id) {
            return Err(Error::NodeNotFound(id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::SamplingConfig;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn triangle() -> Vec<GeoNode> {
        vec![
            GeoNode::new("a", "A", 0.0, 0.0).expect("valid"),
            GeoNode::new("b", "B", 0.0, 1.0).expect("valid"),
            GeoNode::new("c", "C", 1.0, 0.0).expect("valid"),
        ]
    }

    fn seeded(config: OptimizerConfig) -> RouteOptimizer {
        RouteOptimizer::with_seed(config, 42)
    }

    #[test]
    fn test_dijkstra_direct_edge() {
        let nodes = triangle();
        let g = build_graph(&nodes);
        let path = seeded(OptimizerConfig::default())
            .optimize(&g, &id("a"), &id("c"), "dijkstra")
            .expect("route exists");
        assert_eq!(path.nodes(), &[id("a"), id("c")]);
        assert_eq!(path.distance(), nodes[0].distance_to(&nodes[2]));
    }

    #[test]
    fn test_invalid_mode() {
        let g = build_graph(&triangle());
        let err = seeded(OptimizerConfig::default())
            .optimize(&g, &id("a"), &id("c"), "bellman-ford")
            .unwrap_err();
        assert_eq!(err, Error::InvalidMode("bellman-ford".to_string()));
    }

    #[test]
    fn test_missing_node_reported_before_mode() {
        let g = build_graph(&triangle());
        let mut opt = seeded(OptimizerConfig::default());
        for mode in ["dijkstra", "qaoa", "bogus"] {
            assert_eq!(
                opt.optimize(&g, &id("a"), &id("zz"), mode),
                Err(Error::NodeNotFound(id("zz")))
            );
        }
    }

    #[test]
    fn test_qaoa_returns_candidate_path() {
        let nodes = triangle();
        let g = build_graph(&nodes);
        let mut opt = seeded(OptimizerConfig::default());
        for _ in 0..50 {
            let path = opt
                .optimize(&g, &id("a"), &id("c"), "qaoa")
                .expect("route exists");
            let direct = vec![id("a"), id("c")];
            let via_b = vec![id("a"), id("b"), id("c")];
            assert!(path.nodes() == direct.as_slice() || path.nodes() == via_b.as_slice());
            let expected = g.path_distance(path.nodes()).expect("edges exist");
            assert!((path.distance() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_qaoa_seed_reproducible() {
        let nodes = vec![
            GeoNode::new("a", "A", 40.7128, -74.0060).expect("valid"),
            GeoNode::new("b", "B", 40.7589, -73.9851).expect("valid"),
            GeoNode::new("c", "C", 40.6892, -74.0445).expect("valid"),
            GeoNode::new("d", "D", 40.7505, -73.9934).expect("valid"),
            GeoNode::new("e", "E", 40.7282, -74.0776).expect("valid"),
        ];
        let g = build_graph(&nodes);
        let run = || {
            let mut opt = seeded(OptimizerConfig::default());
            (0..10)
                .map(|_| opt.optimize(&g, &id("a"), &id("e"), "qaoa").expect("route exists"))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test_log::test]
    fn test_fallback_on_graph_too_large() {
        let g = build_graph(&triangle());
        let config =
            OptimizerConfig::default().with_sampling(SamplingConfig::default().with_max_nodes(2));
        let sampled = seeded(config)
            .optimize(&g, &id("a"), &id("b"), "qaoa")
            .expect("fallback succeeds");
        let direct = dijkstra(&g, &id("a"), &id("b")).expect("nodes exist");
        assert_eq!(sampled, direct);
    }

    #[test_log::test]
    fn test_fallback_on_too_many_paths() {
        let g = build_graph(&triangle());
        let config =
            OptimizerConfig::default().with_sampling(SamplingConfig::default().with_max_paths(1));
        let sampled = seeded(config)
            .optimize(&g, &id("a"), &id("c"), "qaoa")
            .expect("fallback succeeds");
        let direct = dijkstra(&g, &id("a"), &id("c")).expect("nodes exist");
        assert_eq!(sampled, direct);
    }

    #[test_log::test]
    fn test_fallback_on_same_start_end() {
        let g = build_graph(&triangle());
        let path = seeded(OptimizerConfig::default())
            .optimize(&g, &id("b"), &id("b"), "qaoa")
            .expect("fallback succeeds");
        assert_eq!(path, Path::single(id("b")));
    }

    #[test]
    fn test_single_node_both_modes() {
        let nodes = vec![GeoNode::new("solo", "Solo", 51.5, -0.12).expect("valid")];
        let mut opt = seeded(OptimizerConfig::default());
        for mode in ["dijkstra", "qaoa"] {
            let result = opt
                .optimize_snapshot(&nodes, &id("solo"), &id("solo"), mode)
                .expect("route exists");
            assert_eq!(result.path(), &[id("solo")]);
            assert_eq!(result.distance(), 0.0);
        }
    }

    #[test]
    fn test_degenerate_graph_reports_zero_distance() {
        let mut g = WeightedGraph::new();
        g.add_node(id("a"));
        g.add_node(id("b"));
        let mut opt = seeded(OptimizerConfig::default());

        let path = opt
            .optimize(&g, &id("a"), &id("b"), "qaoa")
            .expect("degenerate path");
        assert_eq!(path.nodes(), &[id("a"), id("b")]);
        assert_eq!(path.distance(), 0.0);

        assert_eq!(
            opt.optimize(&g, &id("a"), &id("b"), "dijkstra"),
            Err(Error::NoPathFound {
                start: id("a"),
                end: id("b")
            })
        );
    }

    #[test]
    fn test_disconnected_nodes_no_path() {
        // Weighted edges exist, but not between the requested pair's components.
        let mut g = WeightedGraph::new();
        for n in ["a", "b", "c", "d"] {
            g.add_node(id(n));
        }
        g.add_edge(&id("a"), &id("b"), 1.0).expect("valid edge");
        g.add_edge(&id("c"), &id("d"), 1.0).expect("valid edge");
        let mut opt = seeded(OptimizerConfig::default());
        for mode in ["dijkstra", "qaoa"] {
            assert_eq!(
                opt.optimize(&g, &id("a"), &id("d"), mode),
                Err(Error::NoPathFound {
                    start: id("a"),
                    end: id("d")
                })
            );
        }
    }

    #[test]
    fn test_snapshot_result_fields() {
        let nodes = triangle();
        let result = seeded(OptimizerConfig::default())
            .optimize_snapshot(&nodes, &id("a"), &id("b"), "Dijkstra")
            .expect("route exists");
        assert_eq!(result.algorithm(), Algorithm::Dijkstra);
        assert_eq!(result.start_node_id(), &id("a"));
        assert_eq!(result.end_node_id(), &id("b"));
        assert_eq!(result.path(), &[id("a"), id("b")]);
        assert_eq!(result.distance(), nodes[0].distance_to(&nodes[1]));
    }

    #[test]
    fn test_optimize_from_source() {
        let nodes = triangle();
        let mut opt = seeded(OptimizerConfig::default());
        let from_vec = opt
            .optimize_from(&nodes, &id("b"), &id("c"), "dijkstra")
            .expect("route exists");
        let from_slice = opt
            .optimize_from(nodes.as_slice(), &id("b"), &id("c"), "dijkstra")
            .expect("route exists");
        assert_eq!(from_vec.path(), from_slice.path());
        assert_eq!(
            opt.optimize_from(&nodes, &id("b"), &id("x"), "dijkstra")
                .unwrap_err(),
            Error::NodeNotFound(id("x"))
        );
    }

    #[test]
    fn test_with_custom_rng() {
        let g = build_graph(&triangle());
        let rng = StdRng::seed_from_u64(9);
        let mut opt = RouteOptimizer::with_rng(OptimizerConfig::default(), rng);
        assert!(opt.optimize(&g, &id("a"), &id("c"), "qaoa").is_ok());
        assert_eq!(opt.config(), &OptimizerConfig::default());
    }
}
