//! Filesystem utilities for metagen.
//!
//! Output files are written through a temporary sibling and only replace
//! the target once the whole content has been written and synced.

pub mod atomic;

pub use atomic::atomic_write_file;
