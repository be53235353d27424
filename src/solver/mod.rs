//! External solver invocation.
//!
//! The answer-set solver is an external system command; this module owns its
//! configuration and the bounded, stream-capturing invocation that produces
//! the raw transcript handed to the [transcript](crate::transcript) parser.

mod clingo_invoker;
pub use clingo_invoker::ClingoInvoker;

mod config;
pub use config::SolverConfig;
pub use config::StderrPolicy;
pub use config::DEFAULT_SOLVER_TIMEOUT;
