/// Error type for the skipset crate.
///
/// Every variant is a configuration error reported at construction time.
/// Operations on a built [`SkipSet`](crate::SkipSet) never fail: inserting a
/// present key or removing an absent one is a no-op.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// Indicates that `max_levels` is zero or larger than
  /// [`MAX_LEVELS`](crate::MAX_LEVELS).
  #[error("max levels must be in 1..={max}, got {0}", max = crate::MAX_LEVELS)]
  InvalidMaxLevels(usize),

  /// Indicates that the promotion probability is not in `[0, 1)`.
  #[error("promotion probability must be in [0, 1), got {0}")]
  InvalidPromotionProbability(f64),
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::string::ToString;

  #[test]
  fn test_display() {
    assert_eq!(
      Error::InvalidMaxLevels(0).to_string(),
      "max levels must be in 1..=32, got 0"
    );
    assert_eq!(
      Error::InvalidPromotionProbability(1.5).to_string(),
      "promotion probability must be in [0, 1), got 1.5"
    );
  }
}
