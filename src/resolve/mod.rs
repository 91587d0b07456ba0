//! The resolution engine: selector enumeration, import discovery, and
//! class-name reference resolution.

pub mod imports;
pub mod refs;
pub mod selectors;

pub use imports::VariableBinding;
pub use refs::{ClassNameToken, ClassRef, Reference, Severity, SourceContext};
pub use selectors::Selector;
