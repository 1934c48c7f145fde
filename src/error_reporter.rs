use crate::cli::VerbosityLevel;
use crate::config::ConfigError;
use crate::error::RssError;
use crate::schema::REQUIRED_CHANNEL_FIELDS;

/// Error reporter with configurable verbosity
pub struct ErrorReporter {
    verbosity: VerbosityLevel,
    show_timestamps: bool,
}

impl ErrorReporter {
    /// Create a new error reporter with specified verbosity
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            show_timestamps: false,
        }
    }

    /// Create a new error reporter with additional options
    pub fn with_options(verbosity: VerbosityLevel, show_timestamps: bool) -> Self {
        Self {
            verbosity,
            show_timestamps,
        }
    }

    /// Report an error on stderr with appropriate verbosity
    pub fn report_error(&self, error: &RssError) {
        eprintln!("{}", self.format_error(error));
    }

    /// Report a configuration error
    pub fn report_config_error(&self, error: &ConfigError) {
        let formatted = match self.verbosity {
            VerbosityLevel::Quiet => format!("Config error: {}", error),
            VerbosityLevel::Normal | VerbosityLevel::Verbose => format!(
                "Configuration Error: {}\n{}",
                error,
                self.get_config_help(error)
            ),
        };
        eprintln!("{}", formatted);
    }

    pub fn format_error(&self, error: &RssError) -> String {
        match self.verbosity {
            VerbosityLevel::Quiet => self.format_error_brief(error),
            VerbosityLevel::Normal => self.format_error_normal(error),
            VerbosityLevel::Verbose => self.format_error_verbose(error),
        }
    }

    /// Format error for brief output (quiet mode)
    fn format_error_brief(&self, error: &RssError) -> String {
        if error.is_validation_error() {
            format!("INVALID: {}", error)
        } else {
            format!("ERROR: {}", error)
        }
    }

    /// Format error for normal output
    fn format_error_normal(&self, error: &RssError) -> String {
        let timestamp = if self.show_timestamps {
            format!("[{}] ", chrono::Utc::now().format("%H:%M:%S"))
        } else {
            String::new()
        };

        format!("{}{}", timestamp, error)
    }

    /// Format error for verbose output, with a suggestion and the source chain
    fn format_error_verbose(&self, error: &RssError) -> String {
        let mut output = self.format_error_normal(error);

        if let Some(suggestion) = self.suggestion(error) {
            output.push_str("\nSuggestion: ");
            output.push_str(&suggestion);
        }

        let mut current_error: &dyn std::error::Error = error;
        let mut level = 0;
        while let Some(source) = current_error.source() {
            if level == 0 {
                output.push_str("\nError Chain:");
            }
            output.push_str(&format!("\n  {}: {}", level + 1, source));
            current_error = source;
            level += 1;
        }

        output
    }

    fn suggestion(&self, error: &RssError) -> Option<String> {
        match error {
            RssError::MissingRequiredField { field } => Some(format!(
                "Add `{}` to the channel; every channel needs {}",
                field,
                REQUIRED_CHANNEL_FIELDS.join(", ")
            )),
            RssError::UnrecognizedField { scope, .. } => Some(format!(
                "Allowed {} fields: {} (or pass --no-validate)",
                scope,
                scope.allowed_fields().join(", ")
            )),
            RssError::MissingRequiredContent => {
                Some("Give every item a title or a description".to_string())
            }
            RssError::InvalidDate { .. } => {
                Some("Use RFC 3339 (2008-06-03T11:05:30Z) or RFC 2822 dates".to_string())
            }
            RssError::UnsupportedFormat(_) => {
                Some("Feed descriptions must be .toml or .json files".to_string())
            }
            _ => None,
        }
    }

    /// Get helpful suggestions for configuration errors
    fn get_config_help(&self, error: &ConfigError) -> String {
        match error {
            ConfigError::Io(_) => "Check that the configuration file exists and is readable".to_string(),
            ConfigError::TomlParsing(_) | ConfigError::JsonParsing(_) => {
                "Check the configuration file syntax (TOML/JSON format expected)".to_string()
            }
            ConfigError::Validation(_) => "Fix the conflicting configuration values".to_string(),
            ConfigError::Environment(_) => {
                "RSS_GEN_* boolean variables accept true/false, yes/no, on/off or 1/0".to_string()
            }
            ConfigError::UnsupportedFormat(_) => {
                "Use a .toml or .json configuration file".to_string()
            }
        }
    }
}
