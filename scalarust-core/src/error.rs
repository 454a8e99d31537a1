use thiserror::Error;

/// Custom error type for the Scalarust engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarustError {
    #[error("Division by zero during operation {operation}")]
    DivideByZero { operation: String },

    #[error("Domain error: {operation} is undefined at {value}")]
    DomainError { operation: String, value: f64 },

    #[error("Incompatible shapes for operation {operation}: expected {expected:?}, got {actual:?}")]
    IncompatibleShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Parameter and optimizer state structures do not match: {0}")]
    StructureMismatch(String),

    #[error("Arity mismatch in {operation}: expected {expected} operand(s), got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot build {operation} from an empty list of nodes")]
    EmptyNodeList { operation: String },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
