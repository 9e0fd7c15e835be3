//! Pack list management
//!
//! Holds the priority-ordered collection of loaded resource packs. List
//! order is the sole source of truth for merge precedence: index 0 is the
//! highest priority and overrides everything below it.

mod list;
mod types;

pub use list::{ListChange, PackList};
pub use types::{Pack, PackId, is_resource_pack_name};
