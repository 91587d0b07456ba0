//! Stylesheet import discovery inside script files.
//!
//! Two lookups feed the reference resolver: the file-level scan that finds
//! the first imported stylesheet (`import './x.css'`, `require('./x.css')`),
//! and the binding chain that connects `styles['name']` back to the
//! declaration that imported the stylesheet.

use tracing::trace;

use crate::base::FileId;
use crate::parser::script::{
    AstNode, ImportDecl, StringLiteral, SyntaxKind, SyntaxNode, VarDecl,
};
use crate::project::Workspace;

/// The declaration a bracket-index qualifier resolves to.
#[derive(Debug, Clone)]
pub enum VariableBinding {
    /// `const styles = require('./x.css');`
    Var(VarDecl),
    /// `import styles from './x.css';`
    Import(ImportDecl),
}

impl VariableBinding {
    fn syntax(&self) -> &SyntaxNode {
        match self {
            VariableBinding::Var(decl) => decl.syntax(),
            VariableBinding::Import(decl) => decl.syntax(),
        }
    }
}

/// First string literal under `root` (pre-order) whose value resolves to a
/// stylesheet in the workspace. First match wins; later imports are never
/// consulted.
fn first_stylesheet_literal(ws: &Workspace, file: FileId, root: &SyntaxNode) -> Option<FileId> {
    root.descendants()
        .filter_map(StringLiteral::cast)
        .find_map(|literal| {
            let value = literal.value()?;
            ws.resolve_module_path(file, &value)
        })
}

/// The stylesheet the file imports, if any. Scans the whole file; used for
/// `styleName` resolution, which is not tied to a variable.
pub fn find_stylesheet_import(ws: &Workspace, file: FileId) -> Option<FileId> {
    let doc = ws.script(file)?;
    let found = first_stylesheet_literal(ws, file, &doc.syntax());
    trace!(%file, found = ?found, "stylesheet import scan");
    found
}

/// Resolve the qualifier of a bracket-indexed literal to its declaration.
///
/// The literal's immediate parent must be an index expression; its
/// qualifier identifier is looked up among the file's variable declarations
/// and import bindings, in document order. Dot access (`styles.normal`) is
/// not a recognized shape.
pub fn find_variable_binding(literal: &StringLiteral) -> Option<VariableBinding> {
    let parent = literal.syntax().parent()?;
    if parent.kind() != SyntaxKind::INDEX_EXPR {
        return None;
    }
    let qualifier = parent
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| token.kind() == SyntaxKind::IDENT)?;
    let name = qualifier.text();

    let root = literal.syntax().ancestors().last()?;
    root.descendants().find_map(|node| {
        if let Some(decl) = VarDecl::cast(node.clone()) {
            if decl.name().is_some_and(|token| token.text() == name) {
                return Some(VariableBinding::Var(decl));
            }
        }
        if let Some(import) = ImportDecl::cast(node) {
            if import.binds(name) {
                return Some(VariableBinding::Import(import));
            }
        }
        None
    })
}

/// The stylesheet a binding's declaration imports, if any. Re-applies the
/// stylesheet-literal scan rooted at the declaration subtree.
pub fn resolve_via_variable(
    ws: &Workspace,
    file: FileId,
    binding: &VariableBinding,
) -> Option<FileId> {
    first_stylesheet_literal(ws, file, binding.syntax())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace(script: &str) -> (Workspace, FileId) {
        let mut ws = Workspace::new();
        ws.set_file_content("Component.css", ".normal {}").unwrap();
        ws.set_file_content("other.css", ".other {}").unwrap();
        let file = ws.set_file_content("Component.jsx", script).unwrap();
        (ws, file)
    }

    fn indexed_literal(ws: &Workspace, file: FileId) -> StringLiteral {
        ws.script(file)
            .unwrap()
            .syntax()
            .descendants()
            .filter_map(StringLiteral::cast)
            .find(|lit| {
                lit.syntax()
                    .parent()
                    .is_some_and(|p| p.kind() == SyntaxKind::INDEX_EXPR)
            })
            .unwrap()
    }

    #[test]
    fn test_first_import_wins() {
        let (ws, file) = workspace(
            "const a = require('./Component.css');\nconst b = require('./other.css');",
        );
        let css = ws.file_id("Component.css").unwrap();
        assert_eq!(find_stylesheet_import(&ws, file), Some(css));
    }

    #[test]
    fn test_es6_import_is_found() {
        let (ws, file) = workspace("import './Component.css';");
        let css = ws.file_id("Component.css").unwrap();
        assert_eq!(find_stylesheet_import(&ws, file), Some(css));
    }

    #[test]
    fn test_non_stylesheet_strings_are_skipped() {
        let (ws, file) = workspace("const x = 'hello';\nimport './Component.css';");
        let css = ws.file_id("Component.css").unwrap();
        assert_eq!(find_stylesheet_import(&ws, file), Some(css));
    }

    #[test]
    fn test_no_import_resolves_to_nothing() {
        let (ws, file) = workspace("const x = 'hello';");
        assert_eq!(find_stylesheet_import(&ws, file), None);
    }

    #[test]
    fn test_binding_via_require() {
        let (ws, file) =
            workspace("const styles = require('./Component.css');\nstyles['normal'];");
        let literal = indexed_literal(&ws, file);
        let binding = find_variable_binding(&literal).unwrap();
        assert!(matches!(binding, VariableBinding::Var(_)));
        let css = ws.file_id("Component.css").unwrap();
        assert_eq!(resolve_via_variable(&ws, file, &binding), Some(css));
    }

    #[test]
    fn test_binding_via_es6_default_import() {
        let (ws, file) =
            workspace("import styles from './Component.css';\nstyles['normal'];");
        let literal = indexed_literal(&ws, file);
        let binding = find_variable_binding(&literal).unwrap();
        assert!(matches!(binding, VariableBinding::Import(_)));
        let css = ws.file_id("Component.css").unwrap();
        assert_eq!(resolve_via_variable(&ws, file, &binding), Some(css));
    }

    #[test]
    fn test_unbound_qualifier_has_no_binding() {
        let (ws, file) = workspace("import styles from './Component.css';\nmystery['normal'];");
        let literal = indexed_literal(&ws, file);
        assert!(find_variable_binding(&literal).is_none());
    }

    #[test]
    fn test_binding_to_non_stylesheet_resolves_to_nothing() {
        let (ws, file) = workspace("const config = require('./config');\nconfig['normal'];");
        let literal = indexed_literal(&ws, file);
        let binding = find_variable_binding(&literal).unwrap();
        assert_eq!(resolve_via_variable(&ws, file, &binding), None);
    }
}
