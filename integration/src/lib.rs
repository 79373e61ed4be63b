/// The keys inserted by the walkthrough, in insertion order.
pub const KEYS: [u32; 13] = [3, 60, 7, 42, 91, 34, 124, 38, 72, 82, 44, 18, 9];

/// The keys left on level `0` once `60` is removed.
pub const AFTER_REMOVAL: [u32; 12] = [3, 7, 9, 18, 34, 38, 42, 44, 72, 82, 91, 124];
