//! End-to-end diagnostics over a component file and its stylesheet.

use rstest::rstest;

use crate::helpers::host_with;
use cssmod::resolve::Reference;

const STYLES: &str = "\
.normal { color: #333; }
.error { color: red; }
:global(.skip) { display: none; }
.north { top: 0; }
";

const COMPONENT: &str = "\
const styles = require('./Component.css');

const Alert = () => (
  <div className={styles['nope']}>
    <span className={styles['north']}>{styles['error']}</span>
  </div>
);
";

#[test]
fn test_unknown_class_flagged_known_silent() {
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", COMPONENT)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();

    let diagnostics = analysis.diagnostics(file);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(&*diagnostics[0].message, "Unknown class name \"nope\"");

    let range = diagnostics[0].range;
    let flagged = &COMPONENT[u32::from(range.start()) as usize..u32::from(range.end()) as usize];
    assert_eq!(flagged, "nope");
}

#[test]
fn test_references_resolve_per_token() {
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", COMPONENT)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();

    let refs = analysis.class_refs(file);
    let by_name: Vec<(&str, bool)> = refs
        .iter()
        .map(|r| {
            (
                r.token.text.as_str(),
                matches!(r.reference, Reference::Resolved { .. }),
            )
        })
        .collect();
    assert_eq!(
        by_name,
        vec![("nope", false), ("north", true), ("error", true)]
    );
}

#[test]
fn test_dynamic_style_name_is_silent() {
    let script = "\
import './Component.css';
const Alert = ({ cls }) => <div styleName={cls}/>;
";
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", script)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();
    assert!(analysis.diagnostics(file).is_empty());
    assert!(analysis.class_refs(file).is_empty());
}

#[test]
fn test_global_descendant_combinator() {
    let css = ".outer :global(.inner) { color: blue; }";
    let script = "\
const styles = require('./Component.css');
styles['outer'];
styles['inner'];
";
    let host = host_with(&[("Component.css", css), ("Component.jsx", script)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();

    let diagnostics = analysis.diagnostics(file);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(&*diagnostics[0].message, "Unknown class name \"inner\"");
}

#[rstest]
#[case("import styles from './Component.css';\nstyles['nope'];")]
#[case("import styles from './Component.css';\nconst C = () => <div className={styles['nope']}/>;")]
#[case("const styles = require('./Component.css');\nstyles['nope'];")]
fn test_import_forms_flag_unknown_class(#[case] script: &str) {
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", script)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();
    assert_eq!(analysis.diagnostics(file).len(), 1);
}

#[test]
fn test_tsx_file_is_analyzed() {
    let script = "\
import styles from './Component.css';
const Alert = (): JSX.Element => <div className={styles['nope']}/>;
";
    let host = host_with(&[("Component.css", STYLES), ("Component.tsx", script)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.tsx").unwrap();
    assert_eq!(analysis.diagnostics(file).len(), 1);
}

#[test]
fn test_style_name_multi_class_ranges() {
    let script = "\
import './Component.css';
const Alert = () => <div styleName=\"north missing error\"/>;
";
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", script)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();

    let diagnostics = analysis.diagnostics(file);
    assert_eq!(diagnostics.len(), 1);
    let range = diagnostics[0].range;
    let flagged = &script[u32::from(range.start()) as usize..u32::from(range.end()) as usize];
    assert_eq!(flagged, "missing");
}

#[test]
fn test_each_binding_resolves_its_own_stylesheet() {
    let other = ".other {}";
    let script = "\
const a = require('./First.css');
const b = require('./Second.css');
a['other'];
b['first'];
";
    let host = host_with(&[
        ("First.css", ".first {}"),
        ("Second.css", other),
        ("Component.jsx", script),
    ]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();

    // each binding resolves through its own declaration
    let messages: Vec<_> = analysis
        .diagnostics(file)
        .iter()
        .map(|d| d.message.to_string())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Unknown class name \"other\"".to_string(),
            "Unknown class name \"first\"".to_string(),
        ]
    );
}

#[test]
fn test_queries_are_idempotent() {
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", COMPONENT)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();

    let first = analysis.diagnostics(file);
    let second = analysis.diagnostics(file);
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].range, second[0].range);
}
