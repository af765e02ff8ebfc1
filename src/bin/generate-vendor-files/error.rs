use std::process::ExitCode;

/// Categories of application errors that can be matched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Argument validation errors
    ArgValidation,
    /// General IO errors
    IO,
    /// Vendor processing errors
    Process,
}

/// Internal error type that contains all application error variants.
#[derive(Debug, thiserror::Error)]
pub enum AppErrorInner {
    #[error("Argument error: {0}")]
    ArgValidation(String),
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Process(#[from] vendor_files::Error),
}

/// The main application-level error type: everything we'd want to report to
/// the user at the top level. The concrete kind matters for the exit code, so
/// the variants are kept rather than erased behind a trait object.
///
/// This type uses the newtype pattern to wrap a boxed inner error, reducing
/// stack size.
#[derive(Debug)]
pub struct AppError(Box<AppErrorInner>, AppErrorKind);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl AppError {
    /// Create a new AppError with the given inner error and kind
    pub fn new(inner: AppErrorInner, kind: AppErrorKind) -> Self {
        Self(Box::new(inner), kind)
    }

    /// Get the error kind for pattern matching
    pub fn error_kind(&self) -> &AppErrorKind {
        &self.1
    }

    /// Create an argument validation error
    pub fn arg_validation(msg: String) -> Self {
        Self::new(
            AppErrorInner::ArgValidation(msg),
            AppErrorKind::ArgValidation,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::new(AppErrorInner::IO(err), AppErrorKind::IO)
    }
}

impl From<vendor_files::Error> for AppError {
    fn from(err: vendor_files::Error) -> Self {
        Self::new(AppErrorInner::Process(err), AppErrorKind::Process)
    }
}

impl From<AppError> for ExitCode {
    fn from(error: AppError) -> Self {
        ExitCode::from(match error.error_kind() {
            AppErrorKind::ArgValidation => 2,
            AppErrorKind::IO | AppErrorKind::Process => 1,
        })
    }
}
