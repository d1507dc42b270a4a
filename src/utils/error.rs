use thiserror::Error;

pub const FORMAT_NOT_CORRECT: &str =
    "The quantity is not in the correct format, please adjust the instruction";
pub const NOT_A_SINGLE_SYMBOL: &str = "Please specify a single Roman numeral";
pub const NOT_UNDERSTOOD: &str = "I have no idea what you are talking about";

/// 數字字串不合法的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralFault {
    Empty,
    UnknownSymbol(char),
    ExcessiveRepeat(char),
    IllegalSubtraction { from: char, by: char },
}

impl std::fmt::Display for NumeralFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralFault::Empty => write!(f, "empty numeral"),
            NumeralFault::UnknownSymbol(c) => write!(f, "'{}' is not a numeral symbol", c),
            NumeralFault::ExcessiveRepeat(c) => {
                write!(f, "'{}' repeats more than three times in a row", c)
            }
            NumeralFault::IllegalSubtraction { from, by } => {
                write!(f, "'{}' cannot be subtracted from '{}'", by, from)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Malformed numeral '{numeral}': {fault}")]
    MalformedNumeral { numeral: String, fault: NumeralFault },

    #[error("Unknown alias: {alias}")]
    UnknownAlias { alias: String },

    #[error("Unknown item: {item}")]
    UnknownItem { item: String },

    #[error("'{token}' is not a single numeral symbol")]
    NotASingleSymbol { token: String },

    #[error("Unrecognized command: {line}")]
    UnrecognizedCommand { line: String },

    #[error("Internal fault: {message}")]
    InternalFault { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Grammar,
    Internal,
    Configuration,
    Io,
}

impl GuideError {
    pub fn internal(message: impl Into<String>) -> Self {
        GuideError::InternalFault {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GuideError::MalformedNumeral { .. } | GuideError::NotASingleSymbol { .. } => {
                ErrorCategory::Input
            }
            GuideError::UnknownAlias { .. } | GuideError::UnknownItem { .. } => {
                ErrorCategory::Lookup
            }
            GuideError::UnrecognizedCommand { .. } => ErrorCategory::Grammar,
            GuideError::InternalFault { .. } => ErrorCategory::Internal,
            GuideError::ConfigValidationError { .. }
            | GuideError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GuideError::IoError(_)
            | GuideError::SerializationError(_)
            | GuideError::CsvError(_) => ErrorCategory::Io,
        }
    }

    /// A recognized command that was answered with an error message rather
    /// than being reported as not understood.
    pub fn is_user_facing(&self) -> bool {
        matches!(self.category(), ErrorCategory::Input | ErrorCategory::Lookup)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GuideError::MalformedNumeral { .. } | GuideError::UnknownAlias { .. } => {
                FORMAT_NOT_CORRECT.to_string()
            }
            GuideError::NotASingleSymbol { .. } => NOT_A_SINGLE_SYMBOL.to_string(),
            GuideError::UnknownItem { item } => format!("I don't know the price of {}", item),
            GuideError::UnrecognizedCommand { .. } | GuideError::InternalFault { .. } => {
                NOT_UNDERSTOOD.to_string()
            }
            GuideError::ConfigValidationError { field, message } => {
                format!("配置錯誤 ({}): {}", field, message)
            }
            GuideError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("配置值無效 {} = '{}': {}", field, value, reason),
            GuideError::IoError(e) => format!("無法讀寫檔案: {}", e),
            GuideError::SerializationError(e) => format!("無法輸出 JSON: {}", e),
            GuideError::CsvError(e) => format!("無法輸出 CSV: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that every alias stands for a well-formed numeral",
            ErrorCategory::Lookup => "Define the alias or item price on an earlier line",
            ErrorCategory::Grammar => "Use one of the four supported sentence forms",
            ErrorCategory::Internal => "Re-run with --verbose and inspect the log",
            ErrorCategory::Configuration => "Fix the configuration file and try again",
            ErrorCategory::Io => "Check the input path and file permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
