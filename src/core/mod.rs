//! Core types - pure abstractions shared across the codebase.

mod host;
mod link;
mod mode;

pub use host::{Host, MemoryHost};
pub use link::{LinkKind, is_external_link};
pub use mode::RoutingMode;
