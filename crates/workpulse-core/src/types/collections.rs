//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for a company feature vector (10 categories + size).
pub type SmallVec16<T> = SmallVec<[T; 16]>;
