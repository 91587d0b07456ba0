//! Unknown-class diagnostics for script files.

use std::sync::Arc;

use crate::base::{FileId, TextRange};
use crate::project::Workspace;
use crate::resolve::refs::{self, Reference, Severity};

/// A diagnostic message attached to a source range.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub range: TextRange,
    pub severity: Severity,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn new(range: TextRange, severity: Severity, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity,
            message: message.into(),
        }
    }
}

/// One diagnostic per unresolved class-name token with a non-empty range,
/// at absolute file offsets. Resolved tokens and zero-width tokens are
/// silent.
pub fn annotate(ws: &Workspace, file: FileId) -> Vec<Diagnostic> {
    refs::collect(ws, file)
        .into_iter()
        .filter_map(|class_ref| match class_ref.reference {
            Reference::Unresolved { severity, .. } if !class_ref.token.range.is_empty() => {
                Some(Diagnostic::new(
                    class_ref.token.absolute_range(),
                    severity,
                    format!("Unknown class name \"{}\"", class_ref.token.text),
                ))
            }
            _ => None,
        })
        .collect()
}
