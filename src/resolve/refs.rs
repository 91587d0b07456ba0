//! Class-name reference resolution.
//!
//! A reference-bearing element is either a `styleName` JSX attribute or a
//! string literal bracket-indexed off a stylesheet binding. The classifier
//! decides which, once, and everything downstream branches on the result.

use smol_str::SmolStr;
use tracing::debug;

use crate::base::{FileId, TextRange, TextSize};
use crate::parser::script::{AstNode, JsxAttribute, StringLiteral, SyntaxKind, SyntaxNode};
use crate::project::{StylesheetDocument, Workspace};
use crate::resolve::imports;
use crate::resolve::selectors::{self, Selector};

/// Diagnostic severity, LSP-compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// LSP DiagnosticSeverity numbering.
    pub fn to_lsp(self) -> i32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// Where a class-name token was found.
#[derive(Debug, Clone)]
pub enum SourceContext {
    /// A `styleName="..."` JSX attribute.
    StyleNameAttribute(JsxAttribute),
    /// A string literal indexed off a variable, `styles['...']`.
    IndexedLiteral(StringLiteral),
    /// Anything else; produces no references.
    OutOfScope,
}

/// One class-name occurrence in a script file. The range is relative to
/// the owning string literal; `absolute_range` adds the literal's offset
/// back in.
#[derive(Debug, Clone)]
pub struct ClassNameToken {
    pub text: SmolStr,
    pub range: TextRange,
    pub element_offset: TextSize,
    pub owner: FileId,
}

impl ClassNameToken {
    pub fn absolute_range(&self) -> TextRange {
        self.range + self.element_offset
    }
}

/// Resolution result for one token. `Unresolved` is only produced when the
/// owning stylesheet itself resolved; a missing stylesheet yields no
/// reference at all.
#[derive(Debug, Clone)]
pub enum Reference {
    Resolved {
        stylesheet: FileId,
        selector: Selector,
    },
    Unresolved {
        stylesheet: FileId,
        severity: Severity,
    },
}

/// A token together with its resolution.
#[derive(Debug, Clone)]
pub struct ClassRef {
    pub token: ClassNameToken,
    pub reference: Reference,
}

/// Classify a node as a reference-bearing element.
pub fn classify(node: &SyntaxNode) -> SourceContext {
    if let Some(attr) = JsxAttribute::cast(node.clone()) {
        if attr
            .name()
            .is_some_and(|token| token.text() == "styleName")
        {
            return SourceContext::StyleNameAttribute(attr);
        }
    }
    if let Some(literal) = StringLiteral::cast(node.clone()) {
        if node
            .parent()
            .is_some_and(|parent| parent.kind() == SyntaxKind::INDEX_EXPR)
        {
            return SourceContext::IndexedLiteral(literal);
        }
    }
    SourceContext::OutOfScope
}

/// The stylesheet a context resolves against, if any.
pub fn stylesheet_for(ws: &Workspace, file: FileId, context: &SourceContext) -> Option<FileId> {
    match context {
        SourceContext::StyleNameAttribute(_) => imports::find_stylesheet_import(ws, file),
        SourceContext::IndexedLiteral(literal) => {
            let binding = imports::find_variable_binding(literal)?;
            imports::resolve_via_variable(ws, file, &binding)
        }
        SourceContext::OutOfScope => None,
    }
}

/// The innermost reference-bearing context covering `offset`.
pub fn classify_at(ws: &Workspace, file: FileId, offset: TextSize) -> Option<SourceContext> {
    let doc = ws.script(file)?;
    let root = doc.syntax();
    if offset > root.text_range().end() {
        return None;
    }
    root.token_at_offset(offset)
        .filter(|token| token.kind() == SyntaxKind::STRING)
        .find_map(|token| {
            token.parent_ancestors().find_map(|node| match classify(&node) {
                SourceContext::OutOfScope => None,
                context => Some(context),
            })
        })
}

/// The context covering `offset` together with its stylesheet.
pub fn context_at(
    ws: &Workspace,
    file: FileId,
    offset: TextSize,
) -> Option<(SourceContext, FileId)> {
    let context = classify_at(ws, file, offset)?;
    let stylesheet = stylesheet_for(ws, file, &context)?;
    Some((context, stylesheet))
}

/// All class-name references in a script file, in document order.
pub fn collect(ws: &Workspace, file: FileId) -> Vec<ClassRef> {
    let Some(doc) = ws.script(file) else {
        return Vec::new();
    };
    let mut refs = Vec::new();
    for node in doc.syntax().descendants() {
        match classify(&node) {
            SourceContext::StyleNameAttribute(attr) => {
                collect_style_name(ws, file, &attr, &mut refs)
            }
            SourceContext::IndexedLiteral(literal) => {
                collect_indexed(ws, file, &literal, &mut refs)
            }
            SourceContext::OutOfScope => {}
        }
    }
    debug!(%file, count = refs.len(), "collected class references");
    refs
}

fn resolve_name(doc: &StylesheetDocument, stylesheet: FileId, name: &str) -> Reference {
    match selectors::find_by_name(doc, &format!(".{name}")) {
        Some(selector) => Reference::Resolved {
            stylesheet,
            selector,
        },
        None => Reference::Unresolved {
            stylesheet,
            severity: Severity::Error,
        },
    }
}

/// Split a `styleName` value on single spaces, tracking offsets relative
/// to the attribute value literal (position 0 is the opening quote). Empty
/// segments produce no token but still advance the offset.
fn collect_style_name(ws: &Workspace, file: FileId, attr: &JsxAttribute, out: &mut Vec<ClassRef>) {
    // a braced expression value is dynamic; nothing to resolve
    let Some(literal) = attr.value_literal() else {
        return;
    };
    let Some(value) = literal.value() else {
        return;
    };
    if value.trim_start().starts_with('{') {
        return;
    }
    let Some(stylesheet) = imports::find_stylesheet_import(ws, file) else {
        return;
    };
    let Some(doc) = ws.stylesheet(stylesheet) else {
        return;
    };
    let element_offset = literal.syntax().text_range().start();
    let mut offset: u32 = 1;
    for segment in value.split(' ') {
        let len = segment.len() as u32;
        if !segment.is_empty() {
            out.push(ClassRef {
                token: ClassNameToken {
                    text: SmolStr::new(segment),
                    range: TextRange::at(offset.into(), len.into()),
                    element_offset,
                    owner: file,
                },
                reference: resolve_name(doc, stylesheet, segment),
            });
        }
        offset += len + 1;
    }
}

/// One token per indexed literal, covering the text between the quotes.
fn collect_indexed(ws: &Workspace, file: FileId, literal: &StringLiteral, out: &mut Vec<ClassRef>) {
    let Some(value) = literal.value() else {
        return;
    };
    let Some(binding) = imports::find_variable_binding(literal) else {
        return;
    };
    let Some(stylesheet) = imports::resolve_via_variable(ws, file, &binding) else {
        return;
    };
    let Some(doc) = ws.stylesheet(stylesheet) else {
        return;
    };
    out.push(ClassRef {
        token: ClassNameToken {
            text: SmolStr::new(&value),
            range: TextRange::at(1.into(), TextSize::of(value.as_str())),
            element_offset: literal.syntax().text_range().start(),
            owner: file,
        },
        reference: resolve_name(doc, stylesheet, &value),
    });
}
