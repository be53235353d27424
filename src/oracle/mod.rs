//! Validation of actual solver outcomes against expected ones.

mod harness;
pub use harness::ScenarioHarness;

mod validation_oracle;
pub use validation_oracle::ValidationOracle;
