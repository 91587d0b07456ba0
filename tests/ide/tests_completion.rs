//! Completion and auto-trigger suppression, end to end.

use rstest::rstest;

use crate::helpers::{host_with, offset_after};

const STYLES: &str = "\
.normal { color: #333; }
.error { color: red; }
:global(.skip) { display: none; }
.north { top: 0; }
";

fn labels(host: &cssmod::ide::AnalysisHost, path: &str, script: &str, needle: &str) -> Vec<String> {
    let analysis = host.analysis();
    let file = analysis.file_id(path).unwrap();
    analysis
        .completions(file, offset_after(script, needle))
        .into_iter()
        .map(|item| item.label.to_string())
        .collect()
}

#[test]
fn test_indexed_literal_lists_module_classes() {
    let script = "const styles = require('./Component.css');\nstyles[''];";
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", script)]);
    assert_eq!(
        labels(&host, "Component.jsx", script, "''"),
        vec!["error", "normal", "north"]
    );
}

#[test]
fn test_style_name_value_lists_module_classes() {
    let script = "import './Component.css';\nconst C = () => <div styleName=\"no\"/>;";
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", script)]);
    assert_eq!(
        labels(&host, "Component.jsx", script, "no\""),
        vec!["error", "normal", "north"]
    );
}

#[test]
fn test_completion_detail_names_the_stylesheet() {
    let script = "const styles = require('./ui/Buttons.css');\nstyles[''];";
    let host = host_with(&[("ui/Buttons.css", ".primary {}"), ("Component.jsx", script)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();
    let items = analysis.completions(file, offset_after(script, "''"));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "primary");
    assert_eq!(items[0].detail, "Buttons.css");
}

#[rstest]
#[case("const greeting = 'hel';", "hel")]
#[case("const config = require('./settings');\nconfig['key'];", "key")]
fn test_no_completions_outside_stylesheet_contexts(#[case] script: &str, #[case] needle: &str) {
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", script)]);
    assert!(labels(&host, "Component.jsx", script, needle).is_empty());
}

#[test]
fn test_suppression_tracks_binding_resolution() {
    let script = "\
const styles = require('./Component.css');
const other = require('./nope.css');
styles['a'];
other['b'];
'plain';
";
    let host = host_with(&[("Component.css", STYLES), ("Component.jsx", script)]);
    let analysis = host.analysis();
    let file = analysis.file_id("Component.jsx").unwrap();

    assert!(analysis.suppress_auto_trigger(file, offset_after(script, "a']")));
    // binding exists but its stylesheet does not
    assert!(!analysis.suppress_auto_trigger(file, offset_after(script, "b']")));
    assert!(!analysis.suppress_auto_trigger(file, offset_after(script, "plain")));
}

#[test]
fn test_completions_refresh_after_stylesheet_edit() {
    let script = "const styles = require('./Component.css');\nstyles[''];";
    let mut host = host_with(&[("Component.css", ".one {}"), ("Component.jsx", script)]);
    assert_eq!(labels(&host, "Component.jsx", script, "''"), vec!["one"]);

    host.set_file_content("Component.css", ".one {}\n.two {}")
        .unwrap();
    assert_eq!(
        labels(&host, "Component.jsx", script, "''"),
        vec!["one", "two"]
    );
}
