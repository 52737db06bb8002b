use std::{cmp::Ordering,
          collections::{BTreeMap, HashSet, VecDeque},
          fmt::Formatter,
          fs::File,
          io::{prelude::*, BufReader, LineWriter},
          num::ParseIntError,
          ops::Range};

use fixedbitset::FixedBitSet;
use rand::Rng;
use serde::Serialize;

use crate::error::MSTError;
use crate::weight::Weight;

/// 1-based vertex id. `0` is never a valid vertex.
pub type Vertex = usize;

/// Log and return an input validation error
fn reject<T>(err: MSTError) -> Result<T, MSTError> {
    log::warn!("{}: {}", err.name(), &err);
    Err(err)
}

/// Total order over adjacency entries for the symmetry check.
/// Weights are validated before, so `partial_cmp` never fails.
fn cmp_entries<W: Weight>(e1: &(Vertex, Vertex, W), e2: &(Vertex, Vertex, W)) -> Ordering {
    e1.0.cmp(&e2.0)
        .then(e1.1.cmp(&e2.1))
        .then_with(|| e1.2.partial_cmp(&e2.2).unwrap_or(Ordering::Equal))
}

/// An immutable undirected graph in compressed sparse row form.
///
/// Row pointers and column indices hold 1-based values: the entries of vertex `v` are
/// stored at `row_ptr[v-1]-1 .. row_ptr[v]-1` of `col_idx` and `weights`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsrGraph<W> {
    num_nodes: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<Vertex>,
    weights: Vec<W>,
}

impl<W: Weight> CsrGraph<W> {
    /// Create a graph with `num_nodes` vertices and no edges
    pub fn empty(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            row_ptr: vec![1; num_nodes + 1],
            col_idx: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Create a graph from CSR arrays with 1-based row pointers and column indices.
    /// Fails if the arrays are malformed, a weight is negative or not finite,
    /// or the adjacency is not symmetric.
    pub fn from_csr(row_ptr: Vec<usize>, col_idx: Vec<Vertex>, weights: Vec<W>) -> Result<Self, MSTError> {
        if row_ptr.is_empty() {
            return reject(MSTError::InvalidRowPointers {
                message: "Row pointers must contain at least one entry".to_string()
            });
        }
        let num_nodes = row_ptr.len() - 1;
        let num_edges = col_idx.len();

        if row_ptr[0] != 1 {
            return reject(MSTError::InvalidRowPointers {
                message: format!("First row pointer must be 1, found {}", row_ptr[0])
            });
        }
        if let Some(v) = row_ptr.windows(2).position(|w| w[0] > w[1]) {
            return reject(MSTError::InvalidRowPointers {
                message: format!("Row pointers decrease at vertex {}", v + 1)
            });
        }
        if row_ptr[num_nodes] != num_edges + 1 {
            return reject(MSTError::InvalidRowPointers {
                message: format!("Last row pointer must be {}, found {}",
                                 num_edges + 1, row_ptr[num_nodes])
            });
        }
        if weights.len() != num_edges {
            return reject(MSTError::InvalidWeight {
                message: format!("Expected {} edge weights, found {}", num_edges, weights.len())
            });
        }
        if let Some(&v) = col_idx.iter().find(|&&v| v < 1 || v > num_nodes) {
            return reject(MSTError::InvalidColumnIndex {
                message: format!("Column index {} is out of range 1..={}", v, num_nodes)
            });
        }
        if let Some(w) = weights.iter().find(|w| !w.is_valid()) {
            return reject(MSTError::InvalidWeight {
                message: format!("Edge weight {} is negative or not finite", w)
            });
        }

        let graph = Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
        };
        graph.check_symmetry()?;

        Ok(graph)
    }

    /// Create a graph from directed adjacency entries `(u, v, w)`.
    /// Entries are grouped by `u` and keep their input order within a row.
    /// The entries must already contain both directions of every edge.
    pub fn from_entries(num_nodes: usize, entries: &[(Vertex, Vertex, W)]) -> Result<Self, MSTError> {
        if let Some(&(u, _, _)) = entries.iter().find(|e| e.0 < 1 || e.0 > num_nodes) {
            return reject(MSTError::InvalidColumnIndex {
                message: format!("Vertex {} is out of range 1..={}", u, num_nodes)
            });
        }

        let mut row_ptr = vec![0; num_nodes + 1];
        for &(u, _, _) in entries {
            row_ptr[u] += 1;
        }
        row_ptr[0] = 1;
        for v in 1..=num_nodes {
            row_ptr[v] += row_ptr[v - 1];
        }

        let mut cursor: Vec<usize> = row_ptr[..num_nodes].iter().map(|&p| p - 1).collect();
        let mut col_idx = vec![0; entries.len()];
        let mut weights = vec![W::zero(); entries.len()];
        for &(u, v, w) in entries {
            let i = cursor[u - 1];
            col_idx[i] = v;
            weights[i] = w;
            cursor[u - 1] += 1;
        }

        Self::from_csr(row_ptr, col_idx, weights)
    }

    /// Create a graph from undirected edges `{u, v}` with weight `w`.
    /// Every edge is stored in both directions, self-loops once.
    pub fn from_edges(num_nodes: usize, edges: &[(Vertex, Vertex, W)]) -> Result<Self, MSTError> {
        let mut entries = Vec::with_capacity(2 * edges.len());
        for &(u, v, w) in edges {
            entries.push((u, v, w));
            if u != v {
                entries.push((v, u, w));
            }
        }
        Self::from_entries(num_nodes, &entries)
    }

    /// Create a random graph with `num_edges` distinct undirected edges (no self-loops)
    /// and integral weights in `0..=max_weight`.
    /// `num_edges` is capped at the number of vertex pairs. Weights above the largest valid
    /// weight of `W` are clamped to it, see `Weight::from_u32`.
    pub fn random<R: Rng>(num_nodes: usize, num_edges: usize, max_weight: u32, rng: &mut R) -> Result<Self, MSTError> {
        let max_edges = num_nodes * num_nodes.saturating_sub(1) / 2;
        let num_edges = num_edges.min(max_edges);

        let mut pairs = HashSet::with_capacity(num_edges);
        let mut edges = Vec::with_capacity(num_edges);
        while edges.len() < num_edges {
            let u = rng.gen_range(1..=num_nodes);
            let v = rng.gen_range(1..=num_nodes);
            if u == v || !pairs.insert((u.min(v), u.max(v))) {
                continue;
            }
            edges.push((u, v, W::from_u32(rng.gen_range(0..=max_weight))));
        }

        Self::from_edges(num_nodes, &edges)
    }

    /// Parse an edge list file into a validated graph
    pub fn parse_from_file(file_path: &str) -> Result<Self, ParseError> {
        let edge_list = EdgeList::parse_from_file(file_path)?;
        let graph = edge_list.to_graph()?;
        log::info!("Parsed graph {} with {} nodes and {} entries",
                   file_path, graph.num_nodes, graph.num_edges());
        Ok(graph)
    }

    /// Check that the multiset of entries `(u, v, w)` equals the multiset of `(v, u, w)`
    fn check_symmetry(&self) -> Result<(), MSTError> {
        let mut fwd = Vec::with_capacity(self.num_edges());
        for u in 1..=self.num_nodes {
            for (v, w) in self.neighbors(u) {
                fwd.push((u, v, w));
            }
        }
        let mut bwd: Vec<_> = fwd.iter()
            .map(|&(u, v, w)| (v, u, w))
            .collect();

        fwd.sort_unstable_by(cmp_entries);
        bwd.sort_unstable_by(cmp_entries);

        match fwd.iter().zip(bwd.iter()).find(|(e1, e2)| e1 != e2) {
            Some(((u, v, w), _)) => reject(MSTError::NotSymmetric {
                message: format!("Graph is not undirected: entry ({}, {}, {}) has no matching reverse entry",
                                 u, v, w)
            }),
            None => Ok(())
        }
    }

    /// Get the number of vertices
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Get the number of adjacency entries, i.e. twice the number of non-loop edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_idx(&self) -> &[Vertex] {
        &self.col_idx
    }

    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Get the 0-based range of `col_idx` and `weights` holding the entries of vertex `v`
    pub fn row_range(&self, v: Vertex) -> Range<usize> {
        self.row_ptr[v - 1] - 1..self.row_ptr[v] - 1
    }

    /// Iterate over `(neighbor, weight)` pairs of vertex `v` in storage order
    pub fn neighbors(&self, v: Vertex) -> impl Iterator<Item = (Vertex, W)> + '_ {
        let range = self.row_range(v);
        self.col_idx[range.clone()].iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    /// Get the number of entries of vertex `v`
    pub fn degree(&self, v: Vertex) -> usize {
        self.row_ptr[v] - self.row_ptr[v - 1]
    }

    /// Get the weight of the first entry `(u, v)` in the row of `u`
    pub fn edge_weight(&self, u: Vertex, v: Vertex) -> Option<W> {
        self.neighbors(u)
            .find(|&(tgt, _)| tgt == v)
            .map(|(_, w)| w)
    }

    /// Label every vertex with its connected component.
    /// Returns a vector of length `num_nodes + 1` where index 0 is unused and
    /// labels run from 1 to the number of components in order of their smallest vertex.
    pub fn connected_components(&self) -> Vec<usize> {
        let mut labels = vec![0; self.num_nodes + 1];
        let mut visited = FixedBitSet::with_capacity(self.num_nodes + 1);
        let mut queue = VecDeque::new();
        let mut label = 0;

        for root in 1..=self.num_nodes {
            if visited[root] {
                continue;
            }
            label += 1;
            visited.insert(root);
            queue.push_back(root);
            while let Some(u) = queue.pop_front() {
                labels[u] = label;
                for (v, _) in self.neighbors(u) {
                    if !visited[v] {
                        visited.insert(v);
                        queue.push_back(v);
                    }
                }
            }
        }

        labels
    }

    /// Get the number of connected components
    pub fn num_components(&self) -> usize {
        self.connected_components().into_iter()
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` if all vertices are in one component (vacuously for `n <= 1`)
    pub fn is_connected(&self) -> bool {
        self.num_components() <= 1
    }
}

/// An unvalidated list of directed adjacency entries, as read from an edge list file
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList<W> {
    pub meta: String,
    pub num_nodes: usize,
    pub entries: Vec<(Vertex, Vertex, W)>,
}

impl<W: Weight> EdgeList<W> {
    /// Parse an edge list file
    pub fn parse_from_file(file_path: &str) -> Result<Self, ParseError> {
        let file = File::open(file_path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parse an edge list: `#` header lines, the number of nodes, the number of entries,
    /// then one `u v w` line per entry
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut lines = reader.lines();
        let mut line_no = 0;
        let mut meta = String::new();

        let num_nodes = loop {
            let line = lines.next().ok_or(ParseError::UnexpectedEof(line_no))??;
            line_no += 1;

            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                meta.push_str(line);
                meta.push('\n');
            } else {
                break line.parse::<usize>()?;
            }
        };

        let num_entries: usize = lines.next()
            .ok_or(ParseError::UnexpectedEof(line_no))??
            .trim()
            .parse()?;
        line_no += 1;

        let mut entries = Vec::with_capacity(num_entries);
        for _ in 0..num_entries {
            let line = lines.next().ok_or(ParseError::UnexpectedEof(line_no))??;
            line_no += 1;
            let mut split = line.split_whitespace();

            let src: Vertex = split.next()
                .ok_or(ParseError::UnexpectedEol(line_no))?
                .parse()?;
            let tgt: Vertex = split.next()
                .ok_or(ParseError::UnexpectedEol(line_no))?
                .parse()?;
            let value = split.next()
                .ok_or(ParseError::UnexpectedEol(line_no))?;
            let weight = value.parse::<W>()
                .map_err(|_| ParseError::InvalidWeight(line_no, value.to_string()))?;

            entries.push((src, tgt, weight));
        }

        Ok(Self {
            meta,
            num_nodes,
            entries,
        })
    }

    /// Turn possibly directed or duplicated entries into an undirected edge list.
    /// Every vertex pair keeps its minimum weight and is emitted in both directions,
    /// sorted by source and target. Self-loops are dropped.
    pub fn symmetrize(&self) -> Self {
        let mut pairs: BTreeMap<(Vertex, Vertex), W> = BTreeMap::new();
        for &(u, v, w) in &self.entries {
            if u == v {
                continue;
            }
            pairs.entry((u.min(v), u.max(v)))
                .and_modify(|cur| if w < *cur { *cur = w })
                .or_insert(w);
        }

        let mut entries = Vec::with_capacity(2 * pairs.len());
        for (&(a, b), &w) in pairs.iter() {
            entries.push((a, b, w));
            entries.push((b, a, w));
        }
        entries.sort_unstable_by(|e1, e2| e1.0.cmp(&e2.0).then_with(|| e1.1.cmp(&e2.1)));

        Self {
            meta: self.meta.clone(),
            num_nodes: self.num_nodes,
            entries,
        }
    }

    /// Validate the entries and build a CSR graph
    pub fn to_graph(&self) -> Result<CsrGraph<W>, MSTError> {
        if let Some(&(_, v, _)) = self.entries.iter().find(|e| e.1 < 1 || e.1 > self.num_nodes) {
            return reject(MSTError::InvalidColumnIndex {
                message: format!("Vertex {} is out of range 1..={}", v, self.num_nodes)
            });
        }
        CsrGraph::from_entries(self.num_nodes, &self.entries)
    }

    /// Write the edge list in the format read by `parse`
    pub fn write<T: Write>(&self, out: &mut T) -> std::io::Result<()> {
        out.write_all(self.meta.as_bytes())?;
        writeln!(out, "{}", self.num_nodes)?;
        writeln!(out, "{}", self.entries.len())?;
        for (u, v, w) in &self.entries {
            writeln!(out, "{} {} {}", u, v, w)?;
        }
        Ok(())
    }

    /// Write the edge list to a file
    pub fn write_to_file(&self, file_path: &str) -> std::io::Result<()> {
        let file = File::create(file_path)?;
        let mut file = LineWriter::new(file);
        self.write(&mut file)?;
        file.flush()
    }
}

#[derive(Debug)]
pub enum ParseError {
    IO(std::io::Error),
    ParseInt(ParseIntError),
    UnexpectedEof(usize),
    UnexpectedEol(usize),
    InvalidWeight(usize, String),
    Graph(MSTError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(err) => write!(f, "{}", err),
            Self::ParseInt(err) => write!(f, "{}", err),
            Self::UnexpectedEof(line_no) => write!(f, "Unexpected EOF after line {}", line_no),
            Self::UnexpectedEol(line_no) => write!(f, "Unexpected EOL in line {}", line_no),
            Self::InvalidWeight(line_no, value) =>
                write!(f, "Invalid edge weight '{}' in line {}", value, line_no),
            Self::Graph(err) => write!(f, "{}", err)
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::IO(ref err) => Some(err),
            Self::ParseInt(ref err) => Some(err),
            Self::Graph(ref err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IO(err)
    }
}

impl From<ParseIntError> for ParseError {
    fn from(err: ParseIntError) -> Self {
        Self::ParseInt(err)
    }
}

impl From<MSTError> for ParseError {
    fn from(err: MSTError) -> Self {
        Self::Graph(err)
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use rand::prelude::*;

    use crate::error::MSTError;
    use crate::graph::{CsrGraph, EdgeList, ParseError};

    const TRIANGLE: &str = "# a triangle with a pendant vertex\n\
                            4\n\
                            8\n\
                            1 2 1.5\n\
                            2 1 1.5\n\
                            2 3 2\n\
                            3 2 2\n\
                            3 1 4\n\
                            1 3 4\n\
                            3 4 0\n\
                            4 3 0\n";

    #[test]
    fn test_from_csr() {
        // 1 - 2 (w 3), 2 - 3 (w 5)
        let graph = CsrGraph::from_csr(vec![1, 2, 4, 5], vec![2, 1, 3, 2], vec![3, 3, 5, 5])
            .unwrap();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.row_range(2), 1..3);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![(1, 3), (3, 5)]);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.edge_weight(3, 2), Some(5));
        assert_eq!(graph.edge_weight(1, 3), None);
    }

    #[test]
    fn test_invalid_csr() {
        let err = CsrGraph::<f64>::from_csr(vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidRowPointers { .. }));

        let err = CsrGraph::from_csr(vec![0, 1, 2], vec![2, 1], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidRowPointers { .. }));

        let err = CsrGraph::from_csr(vec![1, 3, 2, 3], vec![2, 1], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidRowPointers { .. }));

        let err = CsrGraph::from_csr(vec![1, 2, 4], vec![2, 1], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidRowPointers { .. }));

        let err = CsrGraph::from_csr(vec![1, 2, 3], vec![3, 1], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidColumnIndex { .. }));

        let err = CsrGraph::from_csr(vec![1, 2, 3], vec![2, 1], vec![-1.0, -1.0]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidWeight { .. }));

        let err = CsrGraph::from_csr(vec![1, 2, 3], vec![2, 1], vec![f64::NAN, f64::NAN]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidWeight { .. }));

        let err = CsrGraph::from_csr(vec![1, 2, 3], vec![2, 1], vec![1.0]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidWeight { .. }));
    }

    #[test]
    fn test_not_symmetric() {
        // Directed triangle 1 -> 2 -> 3 -> 1
        let err = CsrGraph::from_csr(vec![1, 2, 3, 4], vec![2, 3, 1], vec![1, 1, 1]).unwrap_err();
        assert!(matches!(err, MSTError::NotSymmetric { .. }), "{:?}", err);

        // Both directions present, but with different weights
        let err = CsrGraph::from_csr(vec![1, 2, 3], vec![2, 1], vec![1, 2]).unwrap_err();
        assert!(matches!(err, MSTError::NotSymmetric { .. }), "{:?}", err);
    }

    #[test]
    fn test_from_edges() {
        let graph = CsrGraph::from_edges(4, &[(1, 2, 1.0), (3, 1, 2.0), (2, 2, 0.5)]).unwrap();

        assert_eq!(graph.row_ptr(), &[1, 3, 5, 6, 6]);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(2, 1.0), (3, 2.0)]);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![(1, 1.0), (2, 0.5)]);
        assert_eq!(graph.neighbors(3).collect::<Vec<_>>(), vec![(1, 2.0)]);
        assert_eq!(graph.degree(4), 0);

        let err = CsrGraph::from_edges(2, &[(1, 3, 1.0)]).unwrap_err();
        assert!(matches!(err, MSTError::InvalidColumnIndex { .. }));
    }

    #[test]
    fn test_empty() {
        let graph = CsrGraph::<f32>::empty(3);
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.num_components(), 3);
        assert!(!graph.is_connected());

        let graph = CsrGraph::<f32>::empty(0);
        assert_eq!(graph.num_components(), 0);
        assert!(graph.is_connected());
        assert_eq!(graph, CsrGraph::from_csr(vec![1], vec![], vec![]).unwrap());
    }

    #[test]
    fn test_components() {
        let graph = CsrGraph::from_edges(6, &[(1, 4, 1), (4, 6, 1), (2, 5, 1)]).unwrap();

        assert_eq!(graph.connected_components(), vec![0, 1, 2, 3, 1, 2, 1]);
        assert_eq!(graph.num_components(), 3);
        assert!(!graph.is_connected());
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = CsrGraph::<u64>::random(50, 120, 100, &mut rng).unwrap();

        assert_eq!(graph.num_nodes(), 50);
        assert_eq!(graph.num_edges(), 240);
        assert!(graph.weights().iter().all(|&w| w <= 100));
        for v in 1..=50 {
            assert!(graph.neighbors(v).all(|(u, _)| u != v));
        }

        let complete = CsrGraph::<u64>::random(5, 1000, 10, &mut rng).unwrap();
        assert_eq!(complete.num_edges(), 20);
        assert!(complete.is_connected());
    }

    #[test]
    fn test_random_weight_bounds() {
        let mut rng = StdRng::seed_from_u64(5);

        let graph = CsrGraph::<u32>::random(30, 200, u32::MAX, &mut rng).unwrap();
        assert!(graph.weights().iter().all(|&w| w < u32::MAX));

        let graph = CsrGraph::<i32>::random(30, 200, u32::MAX, &mut rng).unwrap();
        assert!(graph.weights().iter().all(|&w| (0..i32::MAX).contains(&w)));

        let graph = CsrGraph::<u8>::random(30, 200, 1000, &mut rng).unwrap();
        assert!(graph.weights().iter().any(|&w| w == u8::MAX - 1));
        assert!(graph.weights().iter().all(|&w| w < u8::MAX));
    }

    #[test]
    fn test_parse() {
        let edge_list = EdgeList::<f64>::parse(Cursor::new(TRIANGLE)).unwrap();
        assert_eq!(edge_list.num_nodes, 4);
        assert_eq!(edge_list.entries.len(), 8);
        assert_eq!(edge_list.entries[0], (1, 2, 1.5));

        let graph = edge_list.to_graph().unwrap();
        assert_eq!(graph.neighbors(3).collect::<Vec<_>>(), vec![(2, 2.0), (1, 4.0), (4, 0.0)]);
        assert!(graph.is_connected());
    }

    #[test]
    fn test_parse_errors() {
        let err = EdgeList::<f64>::parse(Cursor::new("# header\n3\n2\n1 2 1\n")).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof(_)), "{}", err);

        let err = EdgeList::<f64>::parse(Cursor::new("3\n1\n1 2\n")).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEol(3)), "{}", err);

        let err = EdgeList::<f64>::parse(Cursor::new("3\n1\n1 2 heavy\n")).unwrap_err();
        assert!(matches!(err, ParseError::InvalidWeight(3, _)), "{}", err);

        let err = EdgeList::<f64>::parse(Cursor::new("three\n")).unwrap_err();
        assert!(matches!(err, ParseError::ParseInt(_)), "{}", err);

        let edge_list = EdgeList::<f64>::parse(Cursor::new("2\n1\n1 2 1\n")).unwrap();
        let err = edge_list.to_graph().unwrap_err();
        assert!(matches!(err, MSTError::NotSymmetric { .. }));
    }

    #[test]
    fn test_symmetrize() {
        let directed = EdgeList {
            meta: "# directed\n".to_string(),
            num_nodes: 3,
            entries: vec![(1, 2, 4), (2, 1, 3), (3, 3, 1), (3, 2, 7), (1, 2, 5)],
        };
        let undirected = directed.symmetrize();

        assert_eq!(undirected.entries, vec![(1, 2, 3), (2, 1, 3), (2, 3, 7), (3, 2, 7)]);
        assert!(undirected.to_graph().is_ok());
    }

    #[test]
    fn test_write_and_parse() {
        let edge_list = EdgeList::<f64>::parse(Cursor::new(TRIANGLE)).unwrap();
        let mut out = Vec::new();
        edge_list.write(&mut out).unwrap();

        let reparsed = EdgeList::<f64>::parse(Cursor::new(out)).unwrap();
        assert_eq!(reparsed, edge_list);
    }
}
