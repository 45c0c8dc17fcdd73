//! Profile storage for rosters.
//!
//! Profiles are addressed by `(group, member)`. The matching engine never
//! talks to storage directly: callers fetch a profile, edit or filter it, and
//! write it back. Writes are last-writer-wins; callers serialize concurrent
//! edits of the same profile.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod error;
pub mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryProfileStore;
pub use traits::ProfileStore;
