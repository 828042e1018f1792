// Submodules for separation of concerns
mod eval;
mod exec;
mod ops;
mod parse;
mod types;

// Public API re-exports (flat paths)
pub use eval::compare_bson;
pub use exec::query;
pub use ops::{and, filter_in, format, limit, or, select, sort_by};
pub use parse::{OpSerde, parse_pipeline_json};
pub use types::{Formatter, Op, Order};
