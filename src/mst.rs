use serde::{Deserialize, Serialize};

use crate::binary_minheap::BinaryMinHeap;
use crate::error::MSTError;
use crate::graph::{CsrGraph, Vertex};
use crate::weight::Weight;

/// Settings for a minimum spanning tree computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MSTSettings {
    pub start_vertex: Vertex,
    pub full: bool,
}

impl Default for MSTSettings {
    fn default() -> Self {
        Self {
            start_vertex: 1,
            full: false,
        }
    }
}

/// Edges of a minimum spanning tree or forest as three parallel sequences.
/// `ti[k]` is the child endpoint, `tj[k]` its parent and `tv[k]` the edge weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningForest<W> {
    pub ti: Vec<Vertex>,
    pub tj: Vec<Vertex>,
    pub tv: Vec<W>,
}

impl<W: Weight> SpanningForest<W> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            ti: Vec::with_capacity(capacity),
            tj: Vec::with_capacity(capacity),
            tv: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, child: Vertex, parent: Vertex, weight: W) {
        self.ti.push(child);
        self.tj.push(parent);
        self.tv.push(weight);
    }

    /// Number of tree edges
    pub fn len(&self) -> usize {
        self.ti.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ti.is_empty()
    }

    /// Sum of all tree edge weights, accumulated as `f64` so integer weights cannot overflow
    pub fn total_weight(&self) -> f64 {
        self.tv.iter()
            .map(W::to_f64)
            .sum()
    }

    /// Iterate over `(child, parent, weight)` triples
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, W)> + '_ {
        self.ti.iter()
            .zip(self.tj.iter())
            .zip(self.tv.iter())
            .map(|((&i, &j), &v)| (i, j, v))
    }
}

/// State of one MST run. `dist` and `pred` live for the whole run,
/// the heap is reset before every root's traversal.
struct PrimState<W> {
    dist: Vec<W>,
    pred: Vec<Vertex>,
    heap: BinaryMinHeap,
}

impl<W: Weight> PrimState<W> {
    fn new(num_nodes: usize) -> Self {
        Self {
            dist: vec![W::infinity(); num_nodes + 1],
            pred: vec![0; num_nodes + 1],
            heap: BinaryMinHeap::with_capacity(num_nodes + 1),
        }
    }

    /// Has `v` been reached by any traversal of this run?
    fn is_visited(&self, v: Vertex) -> bool {
        self.dist[v] != W::infinity()
    }

    /// Grow a tree from `root` until the heap runs empty.
    /// Returns the number of finalized vertices.
    fn traverse(&mut self, graph: &CsrGraph<W>, root: Vertex) -> usize {
        self.heap.reset();
        self.dist[root] = W::zero();
        self.heap.push(root, &self.dist);

        let mut num_finalized = 0;
        while let Some(v) = self.heap.pop(&self.dist) {
            num_finalized += 1;
            for (w, weight) in graph.neighbors(v) {
                if self.heap.is_finalized(w) {
                    continue;
                }
                // Prim relaxation: the raw edge weight, not a path length
                if weight < self.dist[w] {
                    self.dist[w] = weight;
                    self.pred[w] = v;
                    self.heap.push_or_decrease(w, &self.dist);
                }
            }
        }

        num_finalized
    }

    /// Collect one edge per vertex with a predecessor, re-reading the weight from the graph
    fn assemble(&self, graph: &CsrGraph<W>) -> Result<SpanningForest<W>, MSTError> {
        let num_edges = self.pred.iter().filter(|&&p| p > 0).count();
        let mut forest = SpanningForest::with_capacity(num_edges);

        for v in 1..self.pred.len() {
            let parent = self.pred[v];
            if parent == 0 {
                continue;
            }
            let weight = graph.edge_weight(v, parent)
                .ok_or_else(|| MSTError::Internal {
                    message: format!("No edge between vertex {} and its predecessor {}", v, parent)
                })?;
            forest.push(v, parent, weight);
        }

        Ok(forest)
    }
}

/// Compute a minimum spanning tree with Prim's algorithm.
///
/// The first tree is grown from `start_vertex` (1-based). If `full` is `false`, only the
/// component of `start_vertex` is spanned. Otherwise the remaining unvisited vertices are
/// tried as roots in the order `start_vertex + 1, ..., n, 1, ..., start_vertex - 1`,
/// yielding a minimum spanning forest with one tree per component.
///
/// Ties between equal weights are broken by the order in which vertices entered the heap.
/// A graph without vertices yields an empty forest for any `start_vertex`.
pub fn mst<W: Weight>(graph: &CsrGraph<W>, full: bool, start_vertex: Vertex) -> Result<SpanningForest<W>, MSTError> {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return Ok(SpanningForest::with_capacity(0));
    }
    if start_vertex < 1 || start_vertex > num_nodes {
        let err = MSTError::InvalidRoot {
            message: format!("Start vertex {} is out of range 1..={}", start_vertex, num_nodes)
        };
        log::warn!("{}: {}", err.name(), &err);
        return Err(err);
    }

    let mut state = PrimState::new(num_nodes);

    log::debug!("Growing tree from root {}", start_vertex);
    let mut num_reached = state.traverse(graph, start_vertex);
    let mut num_roots = 1;

    if full {
        for offset in 1..num_nodes {
            if num_reached == num_nodes {
                break;
            }
            let root = (start_vertex - 1 + offset) % num_nodes + 1;
            if state.is_visited(root) {
                continue;
            }
            log::debug!("Growing tree from root {}", root);
            num_reached += state.traverse(graph, root);
            num_roots += 1;
        }
    }

    let forest = state.assemble(graph)?;
    log::info!("Computed spanning {} with {} edges from {} root(s), total weight {}",
               if full { "forest" } else { "tree" }, forest.len(), num_roots, forest.total_weight());

    Ok(forest)
}

/// Compute a minimum spanning tree or forest as configured by `settings`
pub fn mst_with_settings<W: Weight>(graph: &CsrGraph<W>, settings: &MSTSettings) -> Result<SpanningForest<W>, MSTError> {
    mst(graph, settings.full, settings.start_vertex)
}

/// Validate raw 1-based CSR arrays and compute a minimum spanning tree or forest.
/// Malformed or directed input is rejected before any traversal state is built.
pub fn mst_csr<W: Weight>(row_ptr: Vec<usize>, col_idx: Vec<Vertex>, weights: Vec<W>, full: bool,
                          start_vertex: Vertex) -> Result<SpanningForest<W>, MSTError> {
    let graph = CsrGraph::from_csr(row_ptr, col_idx, weights)?;
    mst(&graph, full, start_vertex)
}
