//! Level generation for new nodes.
//!
//! Level `0` holds every key and each level above holds a random subset of
//! the level below: a new node climbs one more level with probability `p`,
//! up to the configured cap. The chance of landing on level `k` is therefore
//! proportional to `p^k`.

use rand::{Rng, RngCore};

use super::{Error, Level, Options};

/// A geometric level sampler that owns its random source.
///
/// The source is injected, so a set can be made deterministic by handing it a
/// seeded generator (or, in tests, a scripted one).
///
/// ## Example
///
/// ```rust
/// use skipset::{rand::{rngs::StdRng, SeedableRng}, LevelGenerator, Options};
///
/// let mut levels = LevelGenerator::new(Options::new(), StdRng::seed_from_u64(7)).unwrap();
/// for _ in 0..100 {
///   assert!(levels.random_level() < 4usize);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LevelGenerator<R> {
  top: Level,
  p: f64,
  rng: R,
}

impl<R> LevelGenerator<R> {
  /// Creates a new generator from validated options.
  pub fn new(opts: Options, rng: R) -> Result<Self, Error> {
    opts.validate()?;
    Ok(Self::new_unchecked(opts, rng))
  }

  /// The caller guarantees `opts` passes [`Options::validate`].
  #[inline]
  pub(crate) const fn new_unchecked(opts: Options, rng: R) -> Self {
    Self {
      top: Level::from_index(opts.max_levels - 1),
      p: opts.promotion_probability,
      rng,
    }
  }

  /// Returns the number of levels this generator draws from.
  #[inline]
  pub const fn max_levels(&self) -> usize {
    self.top.to_usize() + 1
  }

  /// Returns the highest level this generator can produce.
  #[inline]
  pub const fn top(&self) -> Level {
    self.top
  }

  /// Returns the promotion probability.
  #[inline]
  pub const fn promotion_probability(&self) -> f64 {
    self.p
  }

  /// Returns the options this generator was built from.
  #[inline]
  pub const fn options(&self) -> Options {
    Options::new()
      .with_max_levels(self.max_levels())
      .with_promotion_probability(self.p)
  }
}

impl<R: RngCore> LevelGenerator<R> {
  /// Draws a level in `[0, max_levels - 1]`.
  ///
  /// One uniform draw in `[0, 1)` is consumed per step, including the step
  /// that hits the cap.
  pub fn random_level(&mut self) -> Level {
    let top = self.top.to_usize();
    let mut level = 0;
    while self.rng.random::<f64>() < self.p && level < top {
      level += 1;
    }
    Level::from_index(level)
  }
}
