/// Error type representing invalid formatter configuration.
///
/// Raised whenever options are built from string keys and values, whether that
/// happens at construction, through [`crate::Formatter::set_options_from_pairs`],
/// or inside a nested `numberFormat.*` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The key is not one of the recognised formatter options.
    ///
    /// Contains the offending key exactly as it was supplied.
    UnknownOption(String),

    /// The key is known but its value could not be interpreted.
    ///
    /// For example a non-numeric `maxDecimals` or an unregistered `standard` name.
    InvalidValue { key: String, value: String },
}

impl std::fmt::Display for OptionError {
    /// Formats the error for display purposes.
    ///
    /// # Examples
    /// ```
    /// use memsize::errors::OptionError;
    /// let err = OptionError::UnknownOption("unknownOption".to_string());
    /// assert_eq!(
    ///     format!("{}", err),
    ///     "Unknown memory-size formatter option \"unknownOption\""
    /// );
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionError::UnknownOption(key) => {
                write!(f, "Unknown memory-size formatter option \"{}\"", key)
            }
            OptionError::InvalidValue { key, value } => {
                write!(f, "Invalid value \"{}\" for memory-size formatter option \"{}\"", value, key)
            }
        }
    }
}

impl std::error::Error for OptionError {}
