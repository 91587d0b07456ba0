//! Class-selector enumeration over a parsed stylesheet.
//!
//! Enumeration is idempotent and uncached: every call walks the current
//! tree in document order. Selectors under a `:global(...)` scope are
//! enumerated but marked as not module classes, so they never match and
//! never complete.

use smol_str::SmolStr;
use tracing::trace;

use crate::base::TextRange;
use crate::parser::css::{AstNode, AtRule, ClassSelector, PseudoFn, SyntaxNode};
use crate::project::StylesheetDocument;

/// One class selector found in a stylesheet. For a compound like `.a.b`
/// the name is the full run without the leading dot (`a.b`) — matching
/// operates on literal selector text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub name: SmolStr,
    pub range: TextRange,
    pub is_module_class: bool,
}

/// Whether a selector node is a CSS Modules class, i.e. not inside any
/// `global` scope.
fn is_module_class(node: &SyntaxNode) -> bool {
    !node.ancestors().any(|ancestor| {
        let name = PseudoFn::cast(ancestor.clone())
            .and_then(|pseudo| pseudo.name())
            .or_else(|| AtRule::cast(ancestor).and_then(|at| at.name()));
        name.as_deref() == Some("global")
    })
}

/// All class selectors in document order.
pub fn enumerate(doc: &StylesheetDocument) -> Vec<Selector> {
    doc.syntax()
        .descendants()
        .filter_map(ClassSelector::cast)
        .map(|selector| Selector {
            name: SmolStr::new(selector.name()),
            range: selector.syntax().text_range(),
            is_module_class: is_module_class(selector.syntax()),
        })
        .collect()
}

/// First module-class selector whose literal text (including the leading
/// `.`) equals `name_with_dot`.
pub fn find_by_name(doc: &StylesheetDocument, name_with_dot: &str) -> Option<Selector> {
    let name = name_with_dot.strip_prefix('.')?;
    let found = enumerate(doc)
        .into_iter()
        .find(|selector| selector.is_module_class && selector.name == name);
    trace!(file = %doc.file, name, resolved = found.is_some(), "selector lookup");
    found
}
