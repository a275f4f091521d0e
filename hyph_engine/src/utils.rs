/*! Utility methods and data structures.*/

pub mod errors;

/// The shared pointer type for immutable tables, e.g. the [`SuffixTable`](crate::hyphen::suffixes::SuffixTable)
/// of a [`HyphenationConfig`](crate::config::HyphenationConfig). Atomic, so configurations can be
/// handed to other threads.
pub type Ptr<A> = std::sync::Arc<A>;
