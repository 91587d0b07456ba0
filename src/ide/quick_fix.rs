//! Create-missing-class quick fix.
//!
//! Offered on an unresolved class-name token; appends an empty rule for
//! the name to the stylesheet the reference resolved against. The fix is
//! computed here and committed through the workspace, which re-parses the
//! stylesheet so the reference resolves on the next query.

use crate::base::{FileId, TextSize};
use crate::project::Workspace;
use crate::resolve::refs::{self, Reference};

/// A computed stylesheet edit. `caret` is the offset (after the edit) of
/// the blank line inside the new rule body, for hosts that move the cursor.
#[derive(Debug, Clone)]
pub struct ClassFix {
    pub stylesheet: FileId,
    pub insert_at: TextSize,
    pub insert_text: String,
    pub caret: TextSize,
}

/// The fix for the unresolved token covering `offset`, if one is there.
pub fn create_class_fix(ws: &Workspace, file: FileId, offset: TextSize) -> Option<ClassFix> {
    let class_ref = refs::collect(ws, file).into_iter().find(|class_ref| {
        class_ref.token.absolute_range().contains_inclusive(offset)
    })?;
    let Reference::Unresolved { stylesheet, .. } = class_ref.reference else {
        return None;
    };
    if class_ref.token.text.is_empty() {
        return None;
    }

    let doc = ws.stylesheet(stylesheet)?;
    let insert_at = TextSize::of(doc.text.as_str());
    let separator = if doc.text.is_empty() || doc.text.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    let insert_text = format!("{separator}.{} {{\n\n}}\n", class_ref.token.text);
    // the blank body line sits two characters past the brace
    let brace = insert_text.find('{')? as u32;
    Some(ClassFix {
        stylesheet,
        insert_at,
        insert_text,
        caret: insert_at + TextSize::from(brace + 2),
    })
}

/// Commit a fix. Returns false if the stylesheet vanished in the meantime.
pub fn apply_class_fix(ws: &mut Workspace, fix: &ClassFix) -> bool {
    ws.insert_text(fix.stylesheet, fix.insert_at, &fix.insert_text)
}
