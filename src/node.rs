use std::boxed::Box;
use std::vec;

/// Index of a node inside its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
  #[inline]
  pub(crate) const fn new(idx: usize) -> Self {
    Self(idx)
  }

  #[inline]
  pub(crate) const fn index(self) -> usize {
    self.0
  }
}

/// A forward link at one level, `None` marks the end of that level.
pub(crate) type Link = Option<NodeId>;

/// Returns `len` empty links.
#[inline]
pub(crate) fn empty_links(len: usize) -> Box<[Link]> {
  vec![None; len].into_boxed_slice()
}

#[derive(Debug)]
pub(crate) struct Node<K> {
  pub(crate) key: K,
  /// One link per level the node occupies, `forward.len() == level + 1`.
  pub(crate) forward: Box<[Link]>,
}

impl<K> Node<K> {
  #[inline]
  pub(crate) fn new(key: K, forward: Box<[Link]>) -> Self {
    Self { key, forward }
  }

  /// The highest level this node occupies.
  #[cfg(test)]
  #[inline]
  pub(crate) fn level(&self) -> usize {
    self.forward.len() - 1
  }
}

/// Where a drill-down stands: on the head, or on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
  Head,
  Node(NodeId),
}
