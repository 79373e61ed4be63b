use super::{Error, DEFAULT_MAX_LEVELS, DEFAULT_PROMOTION_PROBABILITY, MAX_LEVELS};

/// Options for [`SkipSet`](crate::SkipSet).
#[viewit::viewit(vis_all = "pub(super)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
  max_levels: usize,
  promotion_probability: f64,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_levels: DEFAULT_MAX_LEVELS,
      promotion_probability: DEFAULT_PROMOTION_PROBABILITY,
    }
  }

  /// Sets the number of levels of the skiplist.
  ///
  /// This caps the height of every node and the number of head links.
  /// It must be in `1..=`[`MAX_LEVELS`](crate::MAX_LEVELS).
  ///
  /// Default is `4`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::Options;
  ///
  /// let opts = Options::new().with_max_levels(12);
  /// assert_eq!(opts.max_levels(), 12);
  /// ```
  #[inline]
  pub const fn with_max_levels(mut self, max_levels: usize) -> Self {
    self.max_levels = max_levels;
    self
  }

  /// Sets the probability that a new node is promoted one more level.
  ///
  /// It must be in `[0, 1)`. `0` degenerates the skiplist into a sorted
  /// linked list.
  ///
  /// Default is `0.5`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::Options;
  ///
  /// let opts = Options::new().with_promotion_probability(0.25);
  /// assert_eq!(opts.promotion_probability(), 0.25);
  /// ```
  #[inline]
  pub const fn with_promotion_probability(mut self, p: f64) -> Self {
    self.promotion_probability = p;
    self
  }

  /// Returns the number of levels.
  #[inline]
  pub const fn max_levels(&self) -> usize {
    self.max_levels
  }

  /// Returns the promotion probability.
  #[inline]
  pub const fn promotion_probability(&self) -> f64 {
    self.promotion_probability
  }

  /// Checks the options, a [`SkipSet`](crate::SkipSet) can only be built
  /// from options which pass this check.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::{Error, Options};
  ///
  /// assert!(Options::new().validate().is_ok());
  /// assert_eq!(
  ///   Options::new().with_max_levels(0).validate(),
  ///   Err(Error::InvalidMaxLevels(0)),
  /// );
  /// ```
  pub fn validate(&self) -> Result<(), Error> {
    if self.max_levels == 0 || self.max_levels > MAX_LEVELS {
      return Err(Error::InvalidMaxLevels(self.max_levels));
    }

    // written so that NaN is rejected as well
    if !(self.promotion_probability >= 0.0 && self.promotion_probability < 1.0) {
      return Err(Error::InvalidPromotionProbability(
        self.promotion_probability,
      ));
    }

    Ok(())
  }
}
