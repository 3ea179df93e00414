//! VibeWave Library Server
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod library;
pub mod server;

// Re-export commonly used types for convenience
pub use library::{DocumentStore, LibraryError, LibrarySummary};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
