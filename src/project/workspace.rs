//! In-memory file model.
//!
//! The `Workspace` owns every parsed document and hands out `FileId`
//! handles. It supplies the two host capabilities the resolution engine
//! depends on: mapping a module-path string literal to a stylesheet file,
//! and committing the quick-fix text insertion (with a re-parse, so the
//! next query always sees a fresh tree).

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::base::{FileId, TextSize};
use crate::parser::SyntaxError;
use crate::parser::{css, script};

/// Error raised by workspace write operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("unsupported file extension: {path}")]
    UnsupportedExtension { path: String },
}

/// A parsed script (JS/TS/JSX/TSX) file.
#[derive(Debug, Clone)]
pub struct ScriptDocument {
    pub file: FileId,
    pub path: String,
    pub text: String,
    parse: script::Parse,
}

impl ScriptDocument {
    pub fn syntax(&self) -> script::SyntaxNode {
        self.parse.syntax()
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }
}

/// A parsed stylesheet file. Owned by the workspace; the engine only
/// borrows it for the duration of a resolution call.
#[derive(Debug, Clone)]
pub struct StylesheetDocument {
    pub file: FileId,
    pub path: String,
    pub text: String,
    parse: css::Parse,
}

impl StylesheetDocument {
    pub fn syntax(&self) -> css::SyntaxNode {
        self.parse.syntax()
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// The file name without directories, used as a completion label.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// One workspace file.
#[derive(Debug, Clone)]
pub enum Document {
    Script(ScriptDocument),
    Stylesheet(StylesheetDocument),
}

impl Document {
    pub fn path(&self) -> &str {
        match self {
            Document::Script(doc) => &doc.path,
            Document::Stylesheet(doc) => &doc.path,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Document::Script(doc) => &doc.text,
            Document::Stylesheet(doc) => &doc.text,
        }
    }

    pub fn errors(&self) -> &[SyntaxError] {
        match self {
            Document::Script(doc) => doc.errors(),
            Document::Stylesheet(doc) => doc.errors(),
        }
    }
}

fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext)
}

fn is_stylesheet_path(path: &str) -> bool {
    matches!(extension(path), Some("css"))
}

fn is_script_path(path: &str) -> bool {
    matches!(
        extension(path),
        Some("js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs")
    )
}

/// Normalize a path to forward-slash segments without `.`/`..` components.
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Resolve `spec` against the directory of `from_path`.
fn join_module_path(from_path: &str, spec: &str) -> String {
    let dir = match from_path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };
    if dir.is_empty() {
        normalize_path(spec)
    } else {
        normalize_path(&format!("{dir}/{spec}"))
    }
}

/// Owns all files. Read queries take `&self`; edits take `&mut self`, so
/// the borrow checker serializes writes against in-flight queries.
#[derive(Debug, Default)]
pub struct Workspace {
    docs: Vec<Option<Document>>,
    path_to_id: FxHashMap<String, FileId>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file or replace its content, parsing it by extension.
    pub fn set_file_content(&mut self, path: &str, text: &str) -> Result<FileId, WorkspaceError> {
        let normalized = normalize_path(path);
        let file = match self.path_to_id.get(&normalized) {
            Some(&existing) => existing,
            None => {
                let file = FileId::new(self.docs.len() as u32);
                self.docs.push(None);
                self.path_to_id.insert(normalized.clone(), file);
                file
            }
        };

        let doc = if is_stylesheet_path(&normalized) {
            Document::Stylesheet(StylesheetDocument {
                file,
                path: normalized,
                text: text.to_string(),
                parse: css::parse(text),
            })
        } else if is_script_path(&normalized) {
            Document::Script(ScriptDocument {
                file,
                path: normalized.clone(),
                text: text.to_string(),
                parse: script::parse(text),
            })
        } else {
            self.path_to_id.remove(&normalized);
            return Err(WorkspaceError::UnsupportedExtension { path: normalized });
        };

        self.docs[file.index() as usize] = Some(doc);
        Ok(file)
    }

    /// Remove a file. Returns whether it existed.
    pub fn remove_file(&mut self, path: &str) -> bool {
        let normalized = normalize_path(path);
        match self.path_to_id.remove(&normalized) {
            Some(file) => {
                self.docs[file.index() as usize] = None;
                true
            }
            None => false,
        }
    }

    pub fn file_id(&self, path: &str) -> Option<FileId> {
        self.path_to_id.get(&normalize_path(path)).copied()
    }

    pub fn document(&self, file: FileId) -> Option<&Document> {
        self.docs.get(file.index() as usize)?.as_ref()
    }

    pub fn script(&self, file: FileId) -> Option<&ScriptDocument> {
        match self.document(file)? {
            Document::Script(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn stylesheet(&self, file: FileId) -> Option<&StylesheetDocument> {
        match self.document(file)? {
            Document::Stylesheet(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn path(&self, file: FileId) -> Option<&str> {
        self.document(file).map(Document::path)
    }

    /// Resolve a module-path string (e.g. `'./Component.css'`) from the
    /// importing file to a stylesheet in this workspace. Non-stylesheet
    /// specs never resolve — that is what keeps ordinary string literals
    /// out of the engine.
    pub fn resolve_module_path(&self, from: FileId, spec: &str) -> Option<FileId> {
        if !is_stylesheet_path(spec) {
            return None;
        }
        let from_path = self.path(from)?;
        let target = join_module_path(from_path, spec);
        let file = self.path_to_id.get(&target).copied()?;
        match self.document(file)? {
            Document::Stylesheet(_) => Some(file),
            _ => None,
        }
    }

    /// Splice `text` into a document at `offset` and re-parse. Returns
    /// false when the file is unknown or the offset is out of bounds.
    pub fn insert_text(&mut self, file: FileId, offset: TextSize, text: &str) -> bool {
        let Some(doc) = self.document(file) else {
            return false;
        };
        let at = u32::from(offset) as usize;
        let old = doc.text();
        if at > old.len() || !old.is_char_boundary(at) {
            return false;
        }
        let mut new_text = String::with_capacity(old.len() + text.len());
        new_text.push_str(&old[..at]);
        new_text.push_str(text);
        new_text.push_str(&old[at..]);
        let path = doc.path().to_string();
        // set_file_content cannot fail here: the path already parsed once
        self.set_file_content(&path, &new_text).is_ok()
    }
}
