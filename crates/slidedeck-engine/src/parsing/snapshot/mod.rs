//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`describe`**: Renders a parsed `Document` as a stable, line-oriented outline
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for segmenter correctness (spans in bounds,
//!   blocks contained in their slide, slides separated by exactly one delimiter line)

pub mod describe;
pub mod invariants;

pub use describe::describe;
pub use invariants::check as invariants;
