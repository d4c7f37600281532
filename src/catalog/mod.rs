//! Catalog query engine.
//!
//! Pure transformation from (vehicle collection, filter spec, sort key) to an
//! ordered display list. No hidden state: the result is re-derivable on
//! every call, which is what keeps the catalog view consistent without any
//! manual synchronization.
//!
//! # Modules
//!
//! - `filter`: [`FilterSpec`] and the quick-search [`PriceRange`] bucket
//! - `sort`: [`SortKey`] names and comparison rules
//! - `query`: the [`query`] function itself

pub mod filter;
pub mod query;
pub mod sort;

pub use filter::{FilterSpec, PriceRange};
pub use query::query;
pub use sort::SortKey;
