#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

mod arena;
mod node;

mod error;
pub use error::Error;

mod level;
pub use level::LevelGenerator;

mod options;
pub use options::Options;

/// The ordered set and its iterators.
pub mod set;
pub use set::SkipSet;

mod types;
pub use types::Level;

pub use rand;

/// The number of levels a [`SkipSet`] uses when none is configured.
pub const DEFAULT_MAX_LEVELS: usize = 4;

/// The largest accepted `max_levels`, one more than [`Level::MAX`].
pub const MAX_LEVELS: usize = Level::MAX.to_usize() + 1;

/// The probability of promoting a node one more level when none is configured.
pub const DEFAULT_PROMOTION_PROBABILITY: f64 = 0.5;
