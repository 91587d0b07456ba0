//! Project management: the in-memory workspace and module-path resolution.

mod workspace;

pub use workspace::{
    Document, ScriptDocument, StylesheetDocument, Workspace, WorkspaceError,
};
