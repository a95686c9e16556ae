use crate::args::Args;
use crate::errors::OptionError;
use crate::formatter::Formatter;
use std::error::Error;
use std::io::{self, BufRead};

/// Configuration structure containing runtime settings for the command line tool.
///
/// # Fields
///
/// * `formatter` - Formatter built from the command line options
/// * `values` - Byte counts or file paths to format, in input order
/// * `files` - Bool to determine if `values` are file paths rather than byte counts
///
#[derive(Clone, Debug)]
pub struct Config {
    pub formatter: Formatter,
    pub values: Vec<String>,
    pub files: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Details
    ///
    /// 1. Translates the dedicated flags into formatter option pairs
    /// 2. Appends every raw `-o KEY=VALUE` pair after them, so raw pairs win
    /// 3. Builds the formatter, rejecting unknown keys and unparsable values
    /// 4. Reads values from stdin, one per line, when none were given
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * A raw option is not of the form `KEY=VALUE`
    /// * An option key is unknown or its value is invalid
    /// * Stdin cannot be read
    ///
    pub fn build(args: &Args) -> Result<Config, Box<dyn Error>> {
        let pairs = option_pairs(args)?;
        let formatter = Formatter::from_pairs(pairs)?;

        let values = if args.values.is_empty() {
            read_values(io::stdin().lock())?
        } else {
            args.values.clone()
        };

        Ok(Config {
            formatter,
            values,
            files: args.files,
        })
    }
}

/// Collects formatter option pairs from the typed flags followed by the raw `-o` options.
pub fn option_pairs(args: &Args) -> Result<Vec<(String, String)>, OptionError> {
    let mut pairs = Vec::new();

    let flags = [
        ("standard", args.standard.clone()),
        ("minDecimals", args.min_decimals.map(|n| n.to_string())),
        ("maxDecimals", args.max_decimals.map(|n| n.to_string())),
        ("fixedDecimals", args.fixed_decimals.map(|n| n.to_string())),
        ("numberFormat.decimalPoint", args.decimal_point.clone()),
        ("numberFormat.thousandsSeparator", args.thousands_separator.clone()),
        ("unitSeparator", args.unit_separator.clone()),
    ];
    for (key, value) in flags {
        if let Some(value) = value {
            pairs.push((key.to_string(), value));
        }
    }

    for raw in &args.options {
        let (key, value) = raw.split_once('=').ok_or_else(|| OptionError::InvalidValue {
            key: "option".to_string(),
            value: raw.clone(),
        })?;
        pairs.push((key.to_string(), value.to_string()));
    }

    Ok(pairs)
}

/// Reads one value per non-empty line.
pub fn read_values<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            values.push(trimmed.to_string());
        }
    }
    Ok(values)
}
