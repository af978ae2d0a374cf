//! Overflow edges between arena slots.
//!
//! [`OverflowGraph`] stores, for every glass slot, the slots it spills into
//! (`children`, the cone) and the slots that spill into it (`parents`, the
//! support). Both directions are kept in sync by [`OverflowGraph::add_arrow`]
//! and are filled once, when a glass joins the tower.

/// Adjacency lists indexed by arena slot.
#[derive(Clone, Debug, Default)]
pub struct OverflowGraph {
    /// Outgoing adjacency: slot -> slots receiving its overflow, left to right.
    children: Vec<Vec<usize>>,
    /// Incoming adjacency: slot -> slots overflowing into it, left to right.
    parents: Vec<Vec<usize>>,
}

impl OverflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            children: Vec::with_capacity(nodes),
            parents: Vec::with_capacity(nodes),
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a node with no edges; returns its slot.
    pub fn add_node(&mut self) -> usize {
        self.children.push(Vec::new());
        self.parents.push(Vec::new());
        self.children.len() - 1
    }

    /// Add the overflow edge `src -> dst`.
    ///
    /// # Panics
    /// Panics if either slot is not a node.
    pub fn add_arrow(&mut self, src: usize, dst: usize) {
        debug_assert!(
            !self.has_arrow(src, dst),
            "duplicate overflow edge {src} -> {dst}"
        );
        self.children[src].push(dst);
        self.parents[dst].push(src);
    }

    #[inline]
    pub fn has_arrow(&self, src: usize, dst: usize) -> bool {
        self.children.get(src).is_some_and(|v| v.contains(&dst))
    }

    /// Slots receiving the overflow of `slot`; empty for unknown slots.
    #[inline]
    pub fn children(&self, slot: usize) -> &[usize] {
        self.children.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Slots overflowing into `slot`; empty for unknown slots.
    #[inline]
    pub fn parents(&self, slot: usize) -> &[usize] {
        self.parents.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every `(src, dst)` edge, in source order.
    pub fn arrows(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.children
            .iter()
            .enumerate()
            .flat_map(|(src, outs)| outs.iter().map(move |&dst| (src, dst)))
    }

    /// True when every child edge has its parent mirror and vice versa.
    pub fn is_consistent(&self) -> bool {
        let out_mirrored = self
            .arrows()
            .all(|(src, dst)| self.parents(dst).contains(&src));
        let in_mirrored = self.parents.iter().enumerate().all(|(dst, ins)| {
            ins.iter().all(|&src| self.children(src).contains(&dst))
        });
        out_mirrored && in_mirrored
    }
}
