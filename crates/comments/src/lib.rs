//! # Comments Crate
//!
//! Record types and loading for social comment datasets.
//!
//! ## Main Components
//!
//! - **types**: The `Comment` record and the metrics stages attach to it
//! - **parser**: Decode a JSON array of comments from a string, reader or file
//! - **error**: Error types for document-level load failures
//!
//! ## Example Usage
//!
//! ```ignore
//! use comments::load_from_file;
//! use std::path::Path;
//!
//! let loaded = load_from_file(Path::new("data/comments_dataset.json"))?;
//! println!("{} comments ({} skipped)", loaded.comments.len(), loaded.skipped);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use parser::{LoadedComments, load_from_file, parse_comments, read_comments};
pub use types::{Comment, Sentiment, SpamReason, SpamVerdict, TextMetrics};
