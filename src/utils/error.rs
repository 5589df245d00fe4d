use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerError {
    #[error("Result overflows i64: {base}^{exponent}")]
    Overflow { base: i64, exponent: u32 },

    #[error("Modulus must be non-zero: {field}")]
    ZeroModulus { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者輸入或配置錯誤
    High,
    /// 運算本身失敗
    Critical,
}

impl PowerError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PowerError::Overflow { .. } | PowerError::ZeroModulus { .. } => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PowerError::Overflow { base, exponent } => {
                format!("{}^{} does not fit in a 64-bit signed integer", base, exponent)
            }
            PowerError::ZeroModulus { field } => format!("Cannot reduce modulo zero ({})", field),
            PowerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            PowerError::ConfigParseError { message } => {
                format!("Could not read configuration: {}", message)
            }
            PowerError::IoError(e) => format!("File access failed: {}", e),
            PowerError::SerializationError(e) => format!("Could not format output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PowerError::Overflow { .. } => {
                "Drop --checked to get the wrapped result, or pass --modulus"
            }
            PowerError::ZeroModulus { .. } => "Pass a modulus of at least 1",
            PowerError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the [job] table of the config file"
            }
            PowerError::ConfigParseError { .. } => "Make sure the file is valid TOML",
            PowerError::IoError(_) => "Check that the path exists and is readable",
            PowerError::SerializationError(_) => "Retry with --format plain",
        }
    }
}

pub type Result<T> = std::result::Result<T, PowerError>;
