//! Configuration section definitions.
//!
//! Each module corresponds to a section in `nsroute.toml`:
//!
//! | Module      | TOML Section      | Purpose                         |
//! |-------------|-------------------|---------------------------------|
//! | `namespace` | `[[namespaces]]`  | Namespace slots, in URL order   |
//! | `router`    | `[router]`        | Host routing mode               |

mod namespace;
mod router;

pub use namespace::NamespaceConfig;
pub use router::RouterConfig;
