use core::iter::FusedIterator;

use crate::{arena::Arena, node::Link, Level};

/// An iterator over the keys linked on one level, in ascending order.
///
/// A clone continues from the current position.
pub struct LevelIter<'a, K> {
  arena: &'a Arena<K>,
  next: Link,
  level: usize,
}

impl<K> Clone for LevelIter<'_, K> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      next: self.next,
      level: self.level,
    }
  }
}

impl<'a, K> LevelIter<'a, K> {
  #[inline]
  pub(super) const fn new(arena: &'a Arena<K>, first: Link, level: usize) -> Self {
    Self {
      arena,
      next: first,
      level,
    }
  }

  /// Returns the level this iterator walks.
  #[inline]
  pub const fn level(&self) -> Level {
    Level::from_index(self.level)
  }
}

impl<'a, K> Iterator for LevelIter<'a, K> {
  type Item = &'a K;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let node = self.arena.get(self.next?);
    self.next = node.forward[self.level];
    Some(&node.key)
  }
}

impl<K> FusedIterator for LevelIter<'_, K> {}

/// An iterator over every key of a [`SkipSet`](super::SkipSet), in ascending order.
pub struct Iter<'a, K> {
  inner: LevelIter<'a, K>,
  remaining: usize,
}

impl<K> Clone for Iter<'_, K> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
      remaining: self.remaining,
    }
  }
}

impl<'a, K> Iter<'a, K> {
  #[inline]
  pub(super) const fn new(inner: LevelIter<'a, K>, len: usize) -> Self {
    Self {
      inner,
      remaining: len,
    }
  }
}

impl<'a, K> Iterator for Iter<'a, K> {
  type Item = &'a K;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let key = self.inner.next()?;
    self.remaining -= 1;
    Some(key)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// An iterator over the occupied levels of a [`SkipSet`](super::SkipSet),
/// from the highest level down to level `0`.
///
/// Each item pairs the level with a [`LevelIter`] over its keys.
pub struct Levels<'a, K> {
  arena: &'a Arena<K>,
  head: &'a [Link],
  next: Option<usize>,
}

impl<K> Clone for Levels<'_, K> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      head: self.head,
      next: self.next,
    }
  }
}

impl<'a, K> Levels<'a, K> {
  #[inline]
  pub(super) const fn new(arena: &'a Arena<K>, head: &'a [Link], height: usize) -> Self {
    Self {
      arena,
      head,
      next: Some(height),
    }
  }
}

impl<'a, K> Iterator for Levels<'a, K> {
  type Item = (Level, LevelIter<'a, K>);

  fn next(&mut self) -> Option<Self::Item> {
    let level = self.next?;
    self.next = level.checked_sub(1);
    Some((
      Level::from_index(level),
      LevelIter::new(self.arena, self.head[level], level),
    ))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.next.map_or(0, |level| level + 1);
    (n, Some(n))
  }
}

impl<K> ExactSizeIterator for Levels<'_, K> {}

impl<K> FusedIterator for Levels<'_, K> {}

/// An owning iterator over the keys of a [`SkipSet`](super::SkipSet), in ascending order.
pub struct IntoIter<K> {
  arena: Arena<K>,
  next: Link,
  remaining: usize,
}

impl<K> IntoIter<K> {
  #[inline]
  pub(super) const fn new(arena: Arena<K>, first: Link, len: usize) -> Self {
    Self {
      arena,
      next: first,
      remaining: len,
    }
  }
}

impl<K> Iterator for IntoIter<K> {
  type Item = K;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.arena.dealloc(self.next?)?;
    self.next = node.forward[0];
    self.remaining -= 1;
    Some(node.key)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
