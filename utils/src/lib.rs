//! Shared infrastructure utilities for Folio.
//!
//! - **`atomic_write`**: Crash-safe file persistence (temp + rename)
//! - **`sanitize`**: Stripping terminal control sequences from pasted text

pub mod atomic_write;
pub mod sanitize;

pub use atomic_write::{
    AtomicWriteOptions, FileSyncPolicy, PersistMode, atomic_write, atomic_write_with_options,
    ensure_private_dir, recover_bak_file,
};
pub use sanitize::sanitize_pasted_text;
