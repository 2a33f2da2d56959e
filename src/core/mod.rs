//! Core processing building blocks: the Roman numeral converter, the
//! integer-to-words renderer, and the expression evaluator. These are
//! internal primitives consumed by the high-level `api` module.
pub mod eval;
pub mod params;
pub mod roman;
pub mod words;
