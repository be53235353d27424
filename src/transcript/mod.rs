//! Transcript parsing and canonicalization.
//!
//! The solver reports its answer-set enumeration as plain text. This module
//! extracts the enumeration from a raw transcript, turns it into a
//! [ValidationResult], and normalizes that result into the order-independent
//! canonical form the oracle compares.

mod canonicalizer;
pub use canonicalizer::canonicalize_model;
pub use canonicalizer::canonicalize_result;

mod parser;
pub use parser::TranscriptParser;
pub use parser::AUTHORED_LINE_SEPARATOR;
pub use parser::SOLVER_LINE_SEPARATOR;

mod validation_result;
pub use validation_result::AnswerSetModel;
pub use validation_result::ValidationResult;
