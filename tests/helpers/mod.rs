//! Shared fixtures for the integration tests.

use cssmod::TextSize;
use cssmod::ide::AnalysisHost;

/// Build a host from `(path, text)` pairs.
pub fn host_with(files: &[(&str, &str)]) -> AnalysisHost {
    let mut host = AnalysisHost::new();
    for (path, text) in files {
        host.set_file_content(path, text)
            .unwrap_or_else(|err| panic!("fixture {path}: {err}"));
    }
    host
}

/// Offset one character past the first occurrence of `needle`, i.e. just
/// inside it.
pub fn offset_after(text: &str, needle: &str) -> TextSize {
    let at = text
        .find(needle)
        .unwrap_or_else(|| panic!("needle {needle:?} not found"));
    TextSize::from(at as u32 + 1)
}
