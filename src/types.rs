use arbitrary_int::u5;

/// Index of a level in a [`SkipSet`](crate::SkipSet), it is a 5-bit unsigned integer.
///
/// Level `0` holds every key. A set configured with `max_levels` levels only
/// ever produces levels in `0..max_levels`, and `max_levels` itself is capped
/// at [`MAX_LEVELS`](crate::MAX_LEVELS), so a `Level` always fits in 5 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Level(u5);

impl Level {
  /// The bottom level.
  pub const ZERO: Self = Self(u5::new(0));

  /// The highest representable level.
  pub const MAX: Self = Self(u5::new(31));

  /// Creates a new `Level`, returns `None` if `level` does not fit in 5 bits.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::Level;
  ///
  /// assert_eq!(Level::new(3).unwrap(), 3usize);
  /// assert!(Level::new(32).is_none());
  /// ```
  #[inline]
  pub const fn new(level: u8) -> Option<Self> {
    match u5::try_new(level) {
      Ok(level) => Some(Self(level)),
      Err(_) => None,
    }
  }

  /// Creates a `Level` from an index the caller already bounded by the cap.
  ///
  /// ## Panics
  /// - If `level` does not fit in 5 bits.
  #[inline]
  pub(crate) const fn from_index(level: usize) -> Self {
    assert!(level < crate::MAX_LEVELS, "level index out of range");
    Self(u5::new(level as u8))
  }

  /// Returns the level as a `u8`.
  #[inline]
  pub const fn to_u8(self) -> u8 {
    self.0.value()
  }

  /// Returns the level as a `usize`.
  #[inline]
  pub const fn to_usize(self) -> usize {
    self.0.value() as usize
  }
}

impl Default for Level {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl core::fmt::Display for Level {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.to_u8())
  }
}

impl From<Level> for u8 {
  #[inline]
  fn from(level: Level) -> Self {
    level.to_u8()
  }
}

impl From<Level> for usize {
  #[inline]
  fn from(level: Level) -> Self {
    level.to_usize()
  }
}

impl PartialEq<usize> for Level {
  #[inline]
  fn eq(&self, other: &usize) -> bool {
    self.to_usize().eq(other)
  }
}

impl PartialOrd<usize> for Level {
  #[inline]
  fn partial_cmp(&self, other: &usize) -> Option<core::cmp::Ordering> {
    self.to_usize().partial_cmp(other)
  }
}
