use thiserror::Error;

/// Errors that can occur while evaluating or inverting a polynomial sequence
///
/// Every variant is a hard failure: no engine returns a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolyError {
    // Input validation errors
    #[error("{operation} requires a non-empty input sequence")]
    EmptySequence { operation: &'static str },

    #[error("Order {order} exceeds the number of variables ({len})")]
    OrderExceedsLength { order: usize, len: usize },

    #[error("Partial order k={k} exceeds order n={n}")]
    PartialOrderExceedsOrder { n: usize, k: usize },

    #[error("B({n},{k}) needs at least {needed} variables, got {len}")]
    InsufficientVariables {
        n: usize,
        k: usize,
        needed: usize,
        len: usize,
    },

    #[error("Variable sequence must start with x[0] = 0, got {value}")]
    NonZeroLeadingVariable { value: f64 },

    #[error("Bell sequence must start with b[0] = 1, got {value}")]
    InvalidLeadingValue { value: f64 },

    // Numeric degeneracy
    #[error("Partial Bell inversion is undefined for partial order k = 0")]
    ZeroPartialOrder,

    #[error("Partial Bell inversion is degenerate at order {order}: divisor {divisor}")]
    DegenerateInversion { order: usize, divisor: f64 },

    #[error("Numeric overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl PolyError {
    /// Create EmptySequence for the named operation
    pub fn empty(operation: &'static str) -> Self {
        PolyError::EmptySequence { operation }
    }

    /// Create Overflow for the named operation
    pub fn overflow(operation: &'static str) -> Self {
        PolyError::Overflow { operation }
    }

    /// True for errors caused by the numeric values rather than the shape
    /// of the input
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PolyError::ZeroPartialOrder
                | PolyError::DegenerateInversion { .. }
                | PolyError::Overflow { .. }
        )
    }
}

/// Result alias used by every engine
pub type Result<T> = std::result::Result<T, PolyError>;
