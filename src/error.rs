/// Exit code for configuration / output I/O problems.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for feed values that do not parse, or an undefined percentage.
pub const EXIT_DATA: u8 = 3;
/// Exit code for chart rendering failures.
pub const EXIT_CHART: u8 = 4;
/// Exit code when no figure exists for the latest reportable date (`-1` as a process status).
pub const EXIT_NO_DATA: u8 = 255;

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

    pub fn message(&self) -> &str {
        &self.message
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
