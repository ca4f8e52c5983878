//! DocuHub Core Library
//!
//! Platform-independent pieces of the DocuHub Markdown editor: the document
//! model, editor configuration, HTTP endpoint layout, Markdown rendering and
//! the [`EditorController`] that ties them together.
//!
//! The controller talks to the outside world only through the capability
//! traits in [`surface`], [`session`], [`status`] and [`api`], so the browser
//! adapters live in the `docuhub-app` crate and the whole control flow can be
//! exercised natively.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod markdown;
pub mod model;
pub mod session;
pub mod status;
pub mod surface;
pub mod tree;

pub use api::{DocumentApi, Endpoints};
pub use config::{EditorConfig, EndpointStyle, TreeFilter};
pub use controller::{EditorController, EditorState};
pub use error::{ApiError, Result};
pub use history::UndoHistory;
pub use markdown::MarkdownRenderer;
pub use model::{DocumentContent, NodeKind, SaveReceipt, Theme, TreeNode};
pub use session::{MemoryStore, Session, SessionStore};
pub use status::{StatusKind, StatusMessage, StatusTimer};
pub use surface::{EditorMode, EditorView, EditorWidget, Navigator, PreviewPane, TreePane};
pub use tree::{FileFilter, TreeItem};
