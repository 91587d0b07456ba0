//! Create-class quick fix, computed and committed through the host.

use crate::helpers::{host_with, offset_after};

const SCRIPT: &str = "const styles = require('./Component.css');\nstyles['brandNew'];";

#[test]
fn test_fix_appends_rule_to_stylesheet() {
    let mut host = host_with(&[("Component.css", ".normal {}"), ("Component.jsx", SCRIPT)]);
    let file = host.analysis().file_id("Component.jsx").unwrap();
    let offset = offset_after(SCRIPT, "brandNew");

    let fix = host.analysis().class_fix(file, offset).unwrap();
    assert!(host.apply_fix(&fix));

    let analysis = host.analysis();
    let css = analysis.file_id("Component.css").unwrap();
    assert_eq!(
        analysis.file_text(css).unwrap(),
        ".normal {}\n.brandNew {\n\n}\n"
    );
}

#[test]
fn test_fix_resolves_the_reference() {
    let mut host = host_with(&[("Component.css", ".normal {}"), ("Component.jsx", SCRIPT)]);
    let file = host.analysis().file_id("Component.jsx").unwrap();
    let offset = offset_after(SCRIPT, "brandNew");

    assert_eq!(host.analysis().diagnostics(file).len(), 1);
    let fix = host.analysis().class_fix(file, offset).unwrap();
    assert!(host.apply_fix(&fix));

    let analysis = host.analysis();
    assert!(analysis.diagnostics(file).is_empty());
    // single-shot: the token is resolved now, so no second fix is offered
    assert!(analysis.class_fix(file, offset).is_none());
}

#[test]
fn test_caret_sits_on_the_blank_body_line() {
    let mut host = host_with(&[("Component.css", ".normal {}"), ("Component.jsx", SCRIPT)]);
    let file = host.analysis().file_id("Component.jsx").unwrap();
    let fix = host
        .analysis()
        .class_fix(file, offset_after(SCRIPT, "brandNew"))
        .unwrap();
    assert!(host.apply_fix(&fix));

    let analysis = host.analysis();
    let css = analysis.file_id("Component.css").unwrap();
    let text = analysis.file_text(css).unwrap();
    let caret = u32::from(fix.caret) as usize;
    assert_eq!(&text[caret - 2..caret + 2], "{\n\n}");
}

#[test]
fn test_fix_into_empty_stylesheet() {
    let mut host = host_with(&[("Component.css", ""), ("Component.jsx", SCRIPT)]);
    let file = host.analysis().file_id("Component.jsx").unwrap();
    let fix = host
        .analysis()
        .class_fix(file, offset_after(SCRIPT, "brandNew"))
        .unwrap();
    assert!(host.apply_fix(&fix));

    let analysis = host.analysis();
    let css = analysis.file_id("Component.css").unwrap();
    assert_eq!(analysis.file_text(css).unwrap(), ".brandNew {\n\n}\n");
    assert!(analysis.diagnostics(file).is_empty());
}

#[test]
fn test_no_fix_without_stylesheet_binding() {
    let script = "const config = require('./config');\nconfig['brandNew'];";
    let host = host_with(&[("Component.css", ".normal {}"), ("Component.jsx", script)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();
    assert!(
        analysis
            .class_fix(file, offset_after(script, "brandNew"))
            .is_none()
    );
}

#[test]
fn test_fix_on_style_name_segment() {
    let script = "import './Component.css';\nconst C = () => <div styleName=\"normal fresh\"/>;";
    let mut host = host_with(&[("Component.css", ".normal {}"), ("Component.jsx", script)]);
    let file = host.analysis().file_id("Component.jsx").unwrap();
    let offset = offset_after(script, "fresh");

    let fix = host.analysis().class_fix(file, offset).unwrap();
    assert_eq!(fix.insert_text, "\n.fresh {\n\n}\n");
    assert!(host.apply_fix(&fix));
    assert!(host.analysis().diagnostics(file).is_empty());
}
