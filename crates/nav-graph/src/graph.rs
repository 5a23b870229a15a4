//! Navigation graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Edge arrays (`edge_to`, `edge_cost`) are sorted by source node and indexed
//! by `EdgeId`.  Iteration over a node's outgoing edges is a contiguous
//! memory scan — ideal for the A* inner loop.
//!
//! # Invalid nodes
//!
//! Grid sampling produces one node per sample whether or not the sample is
//! navigable.  Invalid nodes keep their slot (so grid adjacency stays index
//! arithmetic) but carry no edges, belong to no region bucket, and are
//! absent from the spatial index — the search can never reach them.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the valid nodes maps a query position to
//! nearby `NodeId`s.  Used to snap path-request endpoints onto the graph.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use nav_core::{EdgeId, NodeId, RegionId, Vec2};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D point with the associated
/// `NodeId`.  Only valid nodes are entered.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NavGraph ──────────────────────────────────────────────────────────────────

/// Planar navigation graph in CSR format, with per-region node buckets and a
/// spatial index for endpoint snapping.
///
/// Node fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`NavGraphBuilder`] (or the grid/landmark
/// builders, which drive it).  Built once; read-only thereafter — per-search
/// mutable state lives in [`SearchScratch`][crate::SearchScratch], not here.
pub struct NavGraph {
    // ── Node data (SoA, indexed by NodeId) ────────────────────────────────
    /// Position of each node on the plane.
    pub node_pos: Vec<Vec2>,

    /// Whether each node is navigable.  Invalid nodes are never searched.
    pub node_valid: Vec<bool>,

    /// Region id of each node, fixed at creation.  `RegionId::NONE` for
    /// samples outside every region (always invalid).
    pub node_region: Vec<RegionId>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Destination node of each directed edge.
    pub edge_to: Vec<NodeId>,

    /// Euclidean-distance cost of each directed edge.
    pub edge_cost: Vec<f32>,

    // ── Region buckets ────────────────────────────────────────────────────
    /// Valid nodes grouped by region id (order irrelevant).  Drives both
    /// endpoint snapping and the lookup-table precompute.
    pub regions: Vec<Vec<NodeId>>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl NavGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of valid (navigable) nodes.
    pub fn valid_count(&self) -> usize {
        self.node_valid.iter().filter(|&&v| v).count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The nearest valid node to `pos`, regardless of region.
    ///
    /// Returns `None` only if the graph has no valid nodes.
    pub fn nearest_node(&self, pos: Vec2) -> Option<NodeId> {
        self.spatial_idx.nearest_neighbor(&[pos.x, pos.y]).map(|e| e.id)
    }

    /// The nearest valid node to `pos` that belongs to `region`.
    ///
    /// Walks the R-tree's nearest-neighbour iterator, so the cost is
    /// proportional to how many closer foreign-region nodes surround `pos`,
    /// not to the region's size.
    pub fn nearest_node_in_region(&self, pos: Vec2, region: RegionId) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .find(|e| self.node_region[e.id.index()] == region)
            .map(|e| e.id)
    }
}

// ── NavGraphBuilder ───────────────────────────────────────────────────────────

/// Construct a [`NavGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// sorts edges by source node, constructs the CSR arrays, fills the region
/// buckets, and bulk-loads the R-tree over the valid nodes.
///
/// # Example
///
/// ```
/// use nav_core::{RegionId, Vec2};
/// use nav_graph::NavGraphBuilder;
///
/// let mut b = NavGraphBuilder::with_region_count(2);
/// let a = b.add_node(Vec2::new(0.0, 0.0), true, RegionId(0));
/// let c = b.add_node(Vec2::new(1.0, 0.0), true, RegionId(1));
/// b.add_edge_pair(a, c);
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // reciprocal directed records
/// ```
pub struct NavGraphBuilder {
    region_count: usize,
    positions: Vec<Vec2>,
    valid: Vec<bool>,
    regions: Vec<RegionId>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    cost: f32,
}

impl NavGraphBuilder {
    /// A builder whose graph will carry `region_count` region buckets.
    pub fn with_region_count(region_count: usize) -> Self {
        Self {
            region_count,
            positions: Vec::new(),
            valid: Vec::new(),
            regions: Vec::new(),
            raw_edges: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading a dense grid.
    pub fn with_capacity(region_count: usize, nodes: usize, edges: usize) -> Self {
        Self {
            region_count,
            positions: Vec::with_capacity(nodes),
            valid: Vec::with_capacity(nodes),
            regions: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    ///
    /// Invalid nodes are accepted — they occupy a slot but take no part in
    /// search or snapping.
    pub fn add_node(&mut self, pos: Vec2, valid: bool, region: RegionId) -> NodeId {
        let id = NodeId(self.positions.len() as u32);
        self.positions.push(pos);
        self.valid.push(valid);
        self.regions.push(region);
        id
    }

    /// Add a **directed** edge weighted by the Euclidean distance between
    /// the two node positions.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId) {
        let cost = self.positions[from.index()].distance(self.positions[to.index()]);
        self.raw_edges.push(RawEdge { from, to, cost });
    }

    /// Convenience: add the reciprocal directed pair for a symmetric link.
    pub fn add_edge_pair(&mut self, a: NodeId, b: NodeId) {
        self.add_directed_edge(a, b);
        self.add_directed_edge(b, a);
    }

    /// Position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> Vec2 {
        self.positions[id.index()]
    }

    /// Whether a node added earlier is valid.
    pub fn is_valid(&self, id: NodeId) -> bool {
        self.valid[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Consume the builder and produce a [`NavGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(V log V) for the
    /// R-tree bulk load.
    pub fn build(self) -> NavGraph {
        let node_count = self.positions.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.from.0);

        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_cost: Vec<f32> = raw.iter().map(|e| e.cost).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Region buckets hold valid nodes only.
        let mut regions: Vec<Vec<NodeId>> = vec![Vec::new(); self.region_count];
        for (i, &region) in self.regions.iter().enumerate() {
            if self.valid[i] && region != RegionId::NONE {
                regions[region.index()].push(NodeId(i as u32));
            }
        }

        // Bulk-load the R-tree over valid nodes (faster than V inserts).
        let entries: Vec<NodeEntry> = self
            .positions
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.valid[i])
            .map(|(i, &pos)| NodeEntry { point: [pos.x, pos.y], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        NavGraph {
            node_pos: self.positions,
            node_valid: self.valid,
            node_region: self.regions,
            node_out_start,
            edge_to,
            edge_cost,
            regions,
            spatial_idx,
        }
    }
}
