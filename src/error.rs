//! Error types.
//!
//! - `FitError`: failures of the numerical core (basis construction, fitting)
//! - `AppError`: failures of the binary, carrying the process exit code

/// Errors raised while building a basis or fitting a spline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// The coefficient vector does not have one entry per basis function.
    #[error("invalid sizes between basis and coefficients: basis has {expected} functions, got {got} coefficients")]
    SizeMismatch { expected: usize, got: usize },

    /// `XᵗX` is not invertible (collinear columns or too few effective samples).
    #[error("design matrix is rank deficient (X^T X singular); samples are insufficient or basis columns are collinear. [n: {n}, k: {k}]")]
    SingularMatrix { n: usize, k: usize },

    /// A basis must contain at least one function.
    #[error("basis must contain at least one function")]
    EmptyBasis,

    /// Hat breakpoints must be strictly ascending.
    #[error("hat breakpoints must be strictly ascending (violation at index {index})")]
    UnsortedBreakpoints { index: usize },

    #[error("sample arrays differ in length: x has {x}, y has {y}")]
    SampleLengthMismatch { x: usize, y: usize },

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}

/// Result alias for the numerical core.
pub type Result<T> = std::result::Result<T, FitError>;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(4, format!("Fit failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
