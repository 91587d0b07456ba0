//! Analysis facade.
//!
//! `AnalysisHost` owns the workspace and takes edits; `Analysis` is a
//! cheap read-only view over it that answers IDE queries. Holding an
//! `Analysis` blocks edits through the borrow checker, which is the whole
//! concurrency story: queries are synchronous and run against a stable
//! snapshot.

use crate::base::{FileId, LineIndex, TextSize};
use crate::ide::completion::{self, CompletionItem};
use crate::ide::diagnostics::{self, Diagnostic};
use crate::ide::quick_fix::{self, ClassFix};
use crate::project::{Workspace, WorkspaceError};
use crate::resolve::refs::{self, ClassRef};

/// Owns the workspace and applies edits.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    workspace: Workspace,
}

impl AnalysisHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn set_file_content(&mut self, path: &str, text: &str) -> Result<FileId, WorkspaceError> {
        self.workspace.set_file_content(path, text)
    }

    pub fn remove_file(&mut self, path: &str) -> bool {
        self.workspace.remove_file(path)
    }

    /// Commit a quick fix computed by a previous analysis.
    pub fn apply_fix(&mut self, fix: &ClassFix) -> bool {
        quick_fix::apply_class_fix(&mut self.workspace, fix)
    }

    /// A read-only view for running queries.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            ws: &self.workspace,
        }
    }
}

/// Read-only query interface over the current workspace state.
#[derive(Debug, Clone, Copy)]
pub struct Analysis<'a> {
    ws: &'a Workspace,
}

impl Analysis<'_> {
    pub fn file_id(&self, path: &str) -> Option<FileId> {
        self.ws.file_id(path)
    }

    pub fn file_text(&self, file: FileId) -> Option<&str> {
        self.ws.document(file).map(|doc| doc.text())
    }

    pub fn line_index(&self, file: FileId) -> Option<LineIndex> {
        self.file_text(file).map(LineIndex::new)
    }

    /// Unknown-class diagnostics for a script file.
    pub fn diagnostics(&self, file: FileId) -> Vec<Diagnostic> {
        diagnostics::annotate(self.ws, file)
    }

    /// Class-name completions at an offset.
    pub fn completions(&self, file: FileId, offset: TextSize) -> Vec<CompletionItem> {
        completion::completions(self.ws, file, offset)
    }

    /// Whether the host's default auto-popup should be held back here.
    pub fn suppress_auto_trigger(&self, file: FileId, offset: TextSize) -> bool {
        completion::suppress_auto_trigger(self.ws, file, offset)
    }

    /// The create-class fix for the token at an offset, if available.
    pub fn class_fix(&self, file: FileId, offset: TextSize) -> Option<ClassFix> {
        quick_fix::create_class_fix(self.ws, file, offset)
    }

    /// All resolved and unresolved class references in a script file.
    pub fn class_refs(&self, file: FileId) -> Vec<ClassRef> {
        refs::collect(self.ws, file)
    }

    pub fn workspace(&self) -> &Workspace {
        self.ws
    }
}
