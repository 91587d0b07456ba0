//! IDE features built on the resolution engine: diagnostics, completion,
//! the create-class quick fix, and the `AnalysisHost`/`Analysis` facade
//! hosts drive them through.

mod analysis;
pub mod completion;
pub mod diagnostics;
pub mod quick_fix;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::CompletionItem;
pub use diagnostics::Diagnostic;
pub use quick_fix::ClassFix;
