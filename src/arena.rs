use std::vec::Vec;

use super::node::{Node, NodeId};

/// Owns every node of one skiplist.
///
/// Released slots are kept on a free list and handed out again by the next
/// allocation, so a set that churns keys does not keep growing.
#[derive(Debug)]
pub(crate) struct Arena<K> {
  slots: Vec<Option<Node<K>>>,
  free: Vec<NodeId>,
}

impl<K> Arena<K> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self {
      slots: Vec::new(),
      free: Vec::new(),
    }
  }

  pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
    match self.free.pop() {
      Some(id) => {
        self.slots[id.index()] = Some(node);
        id
      }
      None => {
        let id = NodeId::new(self.slots.len());
        self.slots.push(Some(node));
        id
      }
    }
  }

  /// Takes the node out of its slot and puts the slot on the free list.
  ///
  /// Returns `None` if the slot is already vacant.
  pub(crate) fn dealloc(&mut self, id: NodeId) -> Option<Node<K>> {
    let node = self.slots.get_mut(id.index())?.take()?;
    self.free.push(id);
    Some(node)
  }

  #[inline]
  pub(crate) fn get(&self, id: NodeId) -> &Node<K> {
    match self.slots.get(id.index()) {
      Some(Some(node)) => node,
      _ => unreachable!("link to a released node {id:?}"),
    }
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K> {
    match self.slots.get_mut(id.index()) {
      Some(Some(node)) => node,
      _ => unreachable!("link to a released node {id:?}"),
    }
  }

  /// Number of live nodes.
  #[cfg(test)]
  #[inline]
  pub(crate) fn allocated(&self) -> usize {
    self.slots.len() - self.free.len()
  }

  /// Number of slots, live or free.
  #[cfg(test)]
  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.len()
  }

  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.free.clear();
  }
}
