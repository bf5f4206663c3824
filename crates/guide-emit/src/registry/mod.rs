//! Fixed editor catalog
//!
//! The registry maps editor slugs to their adapters and catalog metadata.
//! [`builtins::builtin_registrations`] is the single source of truth for
//! the supported editor set; listing, lookup, and dispatch all derive from
//! it.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_registrations};
pub use store::EditorRegistry;
pub use types::{EditorCategory, EditorRegistration};
