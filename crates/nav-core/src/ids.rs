//! Id newtypes for the graph's SoA storage.
//!
//! A node, edge, or region is identified by its slot in the owning array, so
//! an id is just an integer — but a bare integer invites mixing a node index
//! into an edge array.  Each newtype here exists to make that a type error
//! while costing nothing at runtime.  The wrapped integer stays `pub` (the
//! hot loops index arrays with it); `.index()` is the polite spelling.

use std::fmt;

/// Defines one array-index newtype with its sentinel and trait plumbing.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The all-ones bit pattern, reserved to mean "points at
            /// nothing".  Real ids never reach it (no graph has that many
            /// slots).
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// The array slot this id names.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Defaults to [`INVALID`](Self::INVALID): a forgotten
            /// initialisation shows up as an obviously-broken id, not as
            /// slot 0.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a navigation-graph node.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a directed navigation-graph edge.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Index of a region (cluster) — a coarse zone grouping nodes for the
    /// hierarchical heuristic.  `u16` keeps per-node storage compact; the
    /// reference configuration uses 6 regions.
    pub struct RegionId(u16);
}

impl RegionId {
    /// Region of a sample that lies outside every region.  Nodes carrying
    /// this id are always invalid.
    pub const NONE: RegionId = RegionId::INVALID;
}
