//! Class-name completion inside reference-bearing string literals.

use smol_str::SmolStr;

use crate::base::{FileId, TextSize};
use crate::project::Workspace;
use crate::resolve::refs::SourceContext;
use crate::resolve::{imports, refs, selectors};

/// One completion entry: the class name plus the declaring file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: SmolStr,
    pub detail: SmolStr,
}

/// Module classes of the stylesheet governing the literal at `offset`,
/// deduped and sorted by label. Empty when the offset is not inside a
/// reference-bearing literal or no stylesheet resolves. An indexed literal
/// whose binding chain fails falls back to the file's first stylesheet
/// import.
pub fn completions(ws: &Workspace, file: FileId, offset: TextSize) -> Vec<CompletionItem> {
    let Some(context) = refs::classify_at(ws, file, offset) else {
        return Vec::new();
    };
    let stylesheet = refs::stylesheet_for(ws, file, &context).or_else(|| match context {
        SourceContext::IndexedLiteral(_) => imports::find_stylesheet_import(ws, file),
        _ => None,
    });
    let Some(stylesheet) = stylesheet else {
        return Vec::new();
    };
    let Some(doc) = ws.stylesheet(stylesheet) else {
        return Vec::new();
    };
    let detail = SmolStr::new(doc.file_name());
    let mut items: Vec<CompletionItem> = selectors::enumerate(doc)
        .into_iter()
        .filter(|selector| selector.is_module_class)
        .map(|selector| CompletionItem {
            label: selector.name,
            detail: detail.clone(),
        })
        .collect();
    items.sort_by(|a, b| a.label.cmp(&b.label));
    items.dedup_by(|a, b| a.label == b.label);
    items
}

/// Whether the host should hold back its default auto-popup at `offset`:
/// true iff the literal there is indexed off a resolved stylesheet binding,
/// so class-name completion owns the spot.
pub fn suppress_auto_trigger(ws: &Workspace, file: FileId, offset: TextSize) -> bool {
    matches!(
        refs::context_at(ws, file, offset),
        Some((SourceContext::IndexedLiteral(_), _))
    )
}
