//! `tabex-core` — foundational types for the tabex delimited-export workspace.
//!
//! This crate holds the value types that shape a serialized row and performs
//! no I/O itself.  `tabex-writer` composes them into the actual document
//! writer.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`dialect`]     | `Dialect` — delimiter/quote/escape triple             |
//! | [`encoding`]    | target-encoding resolution and field conversion       |
//! | [`registry`]    | `KeyRegistry` — fixed, ordered row-key set            |
//! | [`substitute`]  | `SubstitutionTable` — literal search/replace pairs    |
//! | [`error`]       | `TabexError`, `TabexResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public config types. |

pub mod dialect;
pub mod encoding;
pub mod error;
pub mod registry;
pub mod substitute;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dialect::Dialect;
pub use error::{TabexError, TabexResult};
pub use registry::KeyRegistry;
pub use substitute::SubstitutionTable;
