//! # cssmod-base
//!
//! Core library for CSS Modules class-name resolution in JSX/TSX source.
//!
//! Given a script position that references a class name — an indexed access
//! like `styles['normal']` or a React `styleName="a b"` attribute — the
//! engine locates the stylesheet import it belongs to, scans that stylesheet
//! for class selectors (respecting `:global(...)` exclusion), and produces
//! resolved or unresolved references with exact source ranges. Three
//! consumers share the engine: diagnostics, completion, and the
//! create-missing-class quick fix.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (diagnostics, completion, quick fix)
//!   ↓
//! resolve   → reference engine (imports, selectors, tokens)
//!   ↓
//! project   → Workspace: file store, module-path resolution
//!   ↓
//! parser    → Logos lexers, rowan CSTs for script and CSS
//!   ↓
//! base      → Primitives (FileId, TextRange)
//! ```

/// Foundation types: FileId, TextRange, line/column conversion
pub mod base;

/// Parsers: logos lexers and rowan CSTs for the script and CSS subsets
pub mod parser;

/// Project management: in-memory workspace and module-path resolution
pub mod project;

/// Reference engine: import resolution, selector indexing, token resolution
pub mod resolve;

/// IDE features: diagnostics, completion, quick fix
pub mod ide;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};
