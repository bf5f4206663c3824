//! Filesystem primitives for Guidebook.
//!
//! Provides normalized path handling and atomic write operations used by
//! the generator's write step. Everything above this crate treats paths as
//! forward-slash strings; conversion to platform-native form happens only
//! at I/O boundaries.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
