use thiserror::Error;

#[derive(Error, Debug)]
pub enum DogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected response payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Media API returned an unusable URL '{url}': {reason}")]
    InvalidMediaUrl { url: String, reason: String },

    #[error("No data for year {year}")]
    NoData { year: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Incomplete write to {path}: expected {expected} bytes, found {written}")]
    IncompleteWrite {
        path: String,
        expected: u64,
        written: u64,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Parse,
    EmptyResult,
    Validation,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DogError::Http(_) | DogError::HttpStatus { .. } => ErrorCategory::Transport,
            DogError::Csv(_) | DogError::Payload(_) | DogError::InvalidMediaUrl { .. } => {
                ErrorCategory::Parse
            }
            DogError::NoData { .. } => ErrorCategory::EmptyResult,
            DogError::Io(_) | DogError::IncompleteWrite { .. } => ErrorCategory::Io,
            DogError::Config { .. } | DogError::InvalidConfigValue { .. } => {
                ErrorCategory::Validation
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // worth retrying later
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::EmptyResult | ErrorCategory::Io => {
                ErrorSeverity::High
            }
            ErrorCategory::Validation => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// One line, prefixed with the category so failures are easy to tell apart.
    pub fn user_friendly_message(&self) -> String {
        let prefix = match self.category() {
            ErrorCategory::Transport => "Network error",
            ErrorCategory::Parse => "Parse error",
            ErrorCategory::EmptyResult => "No data",
            ErrorCategory::Validation => "Configuration error",
            ErrorCategory::Io => "File error",
        };

        let detail = match self {
            DogError::Http(e) if e.is_timeout() => "request timed out".to_string(),
            DogError::Http(e) if e.is_connect() => "could not connect to server".to_string(),
            DogError::NoData { year } => format!("the dataset has no records for year {}", year),
            other => other.to_string(),
        };

        format!("{}: {}", prefix, detail).replace('\n', " ")
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DogError::Http(_) => "Check your network connection or raise --timeout",
            DogError::HttpStatus { .. } => "The remote service may be down; try again later",
            DogError::Csv(_) => "The dataset layout may have changed; check --dataset-url",
            DogError::Payload(_) | DogError::InvalidMediaUrl { .. } => {
                "The media API returned something unexpected; try again or check --media-url"
            }
            DogError::NoData { .. } => "Pick a year covered by the dataset with --year",
            DogError::Io(_) | DogError::IncompleteWrite { .. } => {
                "Check that the output directory exists and is writable"
            }
            DogError::Config { .. } | DogError::InvalidConfigValue { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_map_to_exit_codes() {
        let status = DogError::HttpStatus {
            url: "http://example.com".to_string(),
            status: 503,
        };
        assert_eq!(status.category(), ErrorCategory::Transport);
        assert_eq!(status.exit_code(), 2);

        let empty = DogError::NoData { year: 1999 };
        assert_eq!(empty.category(), ErrorCategory::EmptyResult);
        assert_eq!(empty.exit_code(), 1);

        let config = DogError::Config {
            message: "source.dataset_url is empty".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::Critical);
        assert_eq!(config.exit_code(), 3);
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            DogError::HttpStatus {
                url: "http://example.com".to_string(),
                status: 404,
            },
            DogError::InvalidMediaUrl {
                url: "x.jpg".to_string(),
                reason: "relative URL without a base".to_string(),
            },
            DogError::NoData { year: 2015 },
            DogError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
            DogError::IncompleteWrite {
                path: "Rex_2015.jpg".to_string(),
                expected: 4,
                written: 2,
            },
            DogError::InvalidConfigValue {
                field: "http.timeout_seconds".to_string(),
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            },
        ];

        for err in &errors {
            assert!(err.severity() >= ErrorSeverity::Medium);
            assert_ne!(err.exit_code(), 0, "{:?}", err);
        }
    }

    #[test]
    fn test_user_friendly_message_is_single_line() {
        let empty = DogError::NoData { year: 2015 };
        assert_eq!(
            empty.user_friendly_message(),
            "No data: the dataset has no records for year 2015"
        );

        let io = DogError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied\nreally",
        ));
        let message = io.user_friendly_message();
        assert!(message.starts_with("File error: "));
        assert!(!message.contains('\n'));
    }
}
