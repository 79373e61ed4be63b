use core::{borrow::Borrow, cmp::Ordering, fmt};

use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::boxed::Box;

use super::{
  arena::Arena,
  node::{empty_links, Cursor, Link, Node},
  Error, Level, LevelGenerator, Options, MAX_LEVELS,
};

mod iterator;
pub use iterator::{IntoIter, Iter, LevelIter, Levels};


/// An ordered set of unique keys backed by a skiplist.
///
/// Every key lives on level `0`; a key inserted at level `n` is also linked on
/// every level below `n`. Lookups drill down from the highest occupied level,
/// skipping along each level while the next key is smaller than the target,
/// which gives expected `O(log n)` insert, remove and search.
///
/// The set is single threaded. Mutation needs `&mut self`, so hosts that share
/// one set between threads wrap it in a lock.
///
/// ## Example
///
/// ```rust
/// use skipset::SkipSet;
///
/// let mut set = SkipSet::new();
/// assert!(set.insert(3));
/// assert!(set.insert(1));
/// assert!(!set.insert(3));
///
/// assert!(set.contains(&1));
/// assert!(set.remove(&1));
/// assert!(!set.remove(&1));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3]);
/// ```
pub struct SkipSet<K, R = StdRng> {
  arena: Arena<K>,
  /// Head links, one per configured level. The head never holds a key.
  head: Box<[Link]>,
  /// Highest level with at least one node, `0` when empty.
  height: usize,
  len: usize,
  levels: LevelGenerator<R>,
}

impl<K> SkipSet<K> {
  /// Creates an empty set with the default [`Options`] and an OS seeded [`StdRng`].
  pub fn new() -> Self {
    Self::with_level_generator(LevelGenerator::new_unchecked(
      Options::new(),
      StdRng::from_os_rng(),
    ))
  }

  /// Creates an empty set with the given options and an OS seeded [`StdRng`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::{Error, Options, SkipSet};
  ///
  /// let set = SkipSet::<u64>::with_options(Options::new().with_max_levels(8)).unwrap();
  /// assert_eq!(set.max_levels(), 8);
  ///
  /// let err = SkipSet::<u64>::with_options(Options::new().with_promotion_probability(1.5));
  /// assert_eq!(err.unwrap_err(), Error::InvalidPromotionProbability(1.5));
  /// ```
  pub fn with_options(opts: Options) -> Result<Self, Error> {
    opts.validate()?;
    Self::with_options_and_rng(opts, StdRng::from_os_rng())
  }
}

impl<K> Default for SkipSet<K> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K, R> SkipSet<K, R> {
  /// Creates an empty set with the given options, drawing levels from `rng`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::{rand::{rngs::StdRng, SeedableRng}, Options, SkipSet};
  ///
  /// let mut set = SkipSet::with_options_and_rng(Options::new(), StdRng::seed_from_u64(42)).unwrap();
  /// set.insert("a");
  /// assert!(set.contains("a"));
  /// ```
  pub fn with_options_and_rng(opts: Options, rng: R) -> Result<Self, Error> {
    LevelGenerator::new(opts, rng).map(Self::with_level_generator)
  }

  /// Creates an empty set which draws node levels from `levels`.
  pub fn with_level_generator(levels: LevelGenerator<R>) -> Self {
    #[cfg(feature = "tracing")]
    tracing::debug!(
      max_levels = levels.max_levels(),
      promotion_probability = levels.promotion_probability(),
      "created skipset"
    );

    Self {
      arena: Arena::new(),
      head: empty_links(levels.max_levels()),
      height: 0,
      len: 0,
      levels,
    }
  }

  /// Returns the number of keys in the set.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the set holds no keys.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the highest level in use, [`Level::ZERO`] when the set is empty.
  #[inline]
  pub const fn height(&self) -> Level {
    Level::from_index(self.height)
  }

  /// Returns the configured number of levels.
  #[inline]
  pub const fn max_levels(&self) -> usize {
    self.levels.max_levels()
  }

  /// Returns the configured promotion probability.
  #[inline]
  pub const fn promotion_probability(&self) -> f64 {
    self.levels.promotion_probability()
  }

  /// Returns the options the set was built with.
  #[inline]
  pub const fn options(&self) -> Options {
    self.levels.options()
  }

  /// Returns the smallest key.
  #[inline]
  pub fn first(&self) -> Option<&K> {
    self.key_of(self.head[0])
  }

  /// Returns the largest key.
  pub fn last(&self) -> Option<&K> {
    self.key_at(self.seek(|_| true, |_, _| {}))
  }

  /// Returns an iterator over the keys in ascending order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, K> {
    Iter::new(LevelIter::new(&self.arena, self.head[0], 0), self.len)
  }

  /// Returns an iterator over the keys linked on `level`, in ascending order.
  ///
  /// Returns `None` if `level` is above [`height`](Self::height).
  pub fn level(&self, level: usize) -> Option<LevelIter<'_, K>> {
    (level <= self.height).then(|| LevelIter::new(&self.arena, self.head[level], level))
  }

  /// Returns every occupied level, from [`height`](Self::height) down to `0`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::SkipSet;
  ///
  /// let set: SkipSet<_> = [5, 1, 3].into_iter().collect();
  /// let (level, keys) = set.levels().last().unwrap();
  /// assert_eq!(level, 0usize);
  /// assert_eq!(keys.copied().collect::<Vec<_>>(), [1, 3, 5]);
  /// ```
  #[inline]
  pub fn levels(&self) -> Levels<'_, K> {
    Levels::new(&self.arena, &self.head, self.height)
  }

  /// Removes every key. The configuration and random source are kept.
  pub fn clear(&mut self) {
    self.arena.clear();
    self.head.fill(None);
    self.height = 0;
    self.len = 0;
  }

  #[inline]
  fn next(&self, at: Cursor, level: usize) -> Link {
    match at {
      Cursor::Head => self.head[level],
      Cursor::Node(id) => self.arena.get(id).forward[level],
    }
  }

  #[inline]
  fn set_next(&mut self, at: Cursor, level: usize, link: Link) {
    match at {
      Cursor::Head => self.head[level] = link,
      Cursor::Node(id) => self.arena.get_mut(id).forward[level] = link,
    }
  }

  #[inline]
  fn key_at(&self, at: Cursor) -> Option<&K> {
    match at {
      Cursor::Head => None,
      Cursor::Node(id) => Some(&self.arena.get(id).key),
    }
  }

  #[inline]
  fn key_of(&self, link: Link) -> Option<&K> {
    link.map(|id| &self.arena.get(id).key)
  }

  /// Drills down from the highest level to `0`, moving right on each level
  /// while `advance` holds for the next key. `visit` sees the last cursor of
  /// every level. Returns the cursor reached on level `0`.
  fn seek(
    &self,
    mut advance: impl FnMut(&K) -> bool,
    mut visit: impl FnMut(usize, Cursor),
  ) -> Cursor {
    let mut at = Cursor::Head;
    for level in (0..=self.height).rev() {
      while let Some(next) = self.next(at, level) {
        if !advance(&self.arena.get(next).key) {
          break;
        }
        at = Cursor::Node(next);
      }
      visit(level, at);
    }
    at
  }
}

#[inline]
fn cmp_key<K, Q>(k: &K, key: &Q) -> Ordering
where
  K: Borrow<Q>,
  Q: Ord + ?Sized,
{
  k.borrow().cmp(key)
}

impl<K: Ord, R> SkipSet<K, R> {
  /// Returns `true` if the set contains `key`.
  #[doc(alias = "search")]
  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.get(key).is_some()
  }

  /// Returns the stored key equal to `key`.
  pub fn get<Q>(&self, key: &Q) -> Option<&K>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self
      .ge(key)
      .filter(|k| cmp_key(*k, key) == Ordering::Equal)
  }

  /// Returns the largest key strictly less than `key`.
  pub fn lt<Q>(&self, key: &Q) -> Option<&K>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.key_at(self.seek(|k| cmp_key(k, key).is_lt(), |_, _| {}))
  }

  /// Returns the largest key less than or equal to `key`.
  pub fn le<Q>(&self, key: &Q) -> Option<&K>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.key_at(self.seek(|k| cmp_key(k, key).is_le(), |_, _| {}))
  }

  /// Returns the smallest key strictly greater than `key`.
  pub fn gt<Q>(&self, key: &Q) -> Option<&K>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let at = self.seek(|k| cmp_key(k, key).is_le(), |_, _| {});
    self.key_of(self.next(at, 0))
  }

  /// Returns the smallest key greater than or equal to `key`.
  pub fn ge<Q>(&self, key: &Q) -> Option<&K>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let at = self.seek(|k| cmp_key(k, key).is_lt(), |_, _| {});
    self.key_of(self.next(at, 0))
  }

  /// Removes `key`, returns `true` if it was present.
  ///
  /// Removing an absent key leaves the set untouched.
  #[doc(alias = "delete")]
  #[inline]
  pub fn remove<Q>(&mut self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.take(key).is_some()
  }

  /// Removes `key` and returns the stored key, if it was present.
  pub fn take<Q>(&mut self, key: &Q) -> Option<K>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let mut update = [Cursor::Head; MAX_LEVELS];
    let prev = self.seek(
      |k| cmp_key(k, key).is_lt(),
      |level, at| update[level] = at,
    );

    let id = self.next(prev, 0)?;
    if cmp_key(&self.arena.get(id).key, key).is_ne() {
      return None;
    }

    // The node is linked on a prefix of the levels, stop at the first level
    // where it is not the successor.
    for (level, &at) in update.iter().enumerate().take(self.height + 1) {
      if self.next(at, level) != Some(id) {
        break;
      }
      let succ = self.arena.get(id).forward[level];
      self.set_next(at, level, succ);
    }

    #[cfg(feature = "tracing")]
    let old_height = self.height;

    while self.height > 0 && self.head[self.height].is_none() {
      self.height -= 1;
    }

    #[cfg(feature = "tracing")]
    if old_height != self.height {
      tracing::trace!(from = old_height, to = self.height, "skipset height shrank");
    }

    self.len -= 1;
    self.arena.dealloc(id).map(|node| node.key)
  }
}

impl<K: Ord, R: RngCore> SkipSet<K, R> {
  /// Adds `key` to the set, returns `true` if it was not already present.
  ///
  /// Inserting a present key leaves the set untouched and keeps the stored key.
  pub fn insert(&mut self, key: K) -> bool {
    let mut update = [Cursor::Head; MAX_LEVELS];
    let prev = self.seek(|k| k < &key, |level, at| update[level] = at);

    if let Some(next) = self.next(prev, 0) {
      if self.arena.get(next).key == key {
        return false;
      }
    }

    let level = self.levels.random_level().to_usize();
    if level > self.height {
      // update[height + 1..=level] is still the head, which is the predecessor
      // on levels nothing occupied before.
      #[cfg(feature = "tracing")]
      tracing::trace!(from = self.height, to = level, "skipset height raised");

      self.height = level;
    }

    let mut forward = empty_links(level + 1);
    for (i, link) in forward.iter_mut().enumerate() {
      *link = self.next(update[i], i);
    }

    let id = self.arena.alloc(Node::new(key, forward));
    for (i, &at) in update.iter().enumerate().take(level + 1) {
      self.set_next(at, i, Some(id));
    }

    self.len += 1;
    true
  }
}

impl<K: fmt::Debug, R> fmt::Debug for SkipSet<K, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

/// Dumps every level, top level first:
///
/// ```text
/// Level 1: 7 -> 42 -> None
/// Level 0: 3 -> 7 -> 9 -> 42 -> None
/// ```
impl<K: fmt::Display, R> fmt::Display for SkipSet<K, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (level, keys) in self.levels() {
      write!(f, "Level {level}: ")?;
      for k in keys {
        write!(f, "{k} -> ")?;
      }
      writeln!(f, "None")?;
    }
    Ok(())
  }
}

impl<K: Ord> FromIterator<K> for SkipSet<K> {
  fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
    let mut set = Self::new();
    set.extend(iter);
    set
  }
}

impl<K: Ord, R: RngCore> Extend<K> for SkipSet<K, R> {
  fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
    for key in iter {
      self.insert(key);
    }
  }
}

impl<'a, K, R> IntoIterator for &'a SkipSet<K, R> {
  type Item = &'a K;
  type IntoIter = Iter<'a, K>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<K, R> IntoIterator for SkipSet<K, R> {
  type Item = K;
  type IntoIter = IntoIter<K>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self.arena, self.head[0], self.len)
  }
}
