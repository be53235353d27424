//! Asporacle is a validation oracle for answer-set solver transcripts.
//!
//! The oracle drives an external clingo-style solver over warehouse
//! simulation scenarios, extracts the answer-set enumeration from the raw
//! transcript, normalizes it into an order-independent canonical form, and
//! compares it against a hand-authored expected outcome.

#![warn(missing_docs)]

pub mod errors;

pub mod oracle;

pub mod solver;

pub mod transcript;
