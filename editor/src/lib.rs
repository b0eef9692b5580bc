//! Local editor backend for a card-collection dataset.
//!
//! Serves the static editor UI and its JSON dataset from a project directory,
//! and card images from an independently configured directory that may lie
//! outside the project tree, screening every requested path against
//! traversal. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure path classification and filename screening.
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (filesystem resolution, dataset
//!   persistence).
//!
//! The HTTP surface lives in the `editor-ui` binary crate, which maps the
//! typed failures in [`error`] onto response statuses.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
