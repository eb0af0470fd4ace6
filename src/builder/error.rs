//! Build errors for the machine builder.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Invalid rule: {0}")]
    InvalidRule(#[from] MachineError),
}
