use rayon::prelude::*;

use crate::errors::OptionError;
use crate::number_format::round_to_digits;
use crate::options::{FormatterOptions, Overrides};

/// Turns byte counts into strings such as `"1.21 KiB"` or `"4.38 GB"`.
///
/// A `Formatter` owns a base [`FormatterOptions`]. Per-call [`Overrides`] are
/// merged into a temporary copy and never change the base options; only
/// [`Formatter::set_options`] and [`Formatter::options_mut`] do.
///
/// # Examples
///
/// ```
/// use memsize::{Formatter, Overrides};
///
/// let formatter = Formatter::new();
/// assert_eq!(formatter.format(1234), "1.21 KiB");
/// assert_eq!(formatter.format(1048576), "1 MiB");
/// assert_eq!(formatter.format_with(1048576, &Overrides::new().min_decimals(1)), "1.0 MiB");
/// assert_eq!(formatter.format(-1234), "-1.21 KiB");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatterOptions,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn from_overrides(overrides: &Overrides) -> Self {
        Self::with_options(FormatterOptions::default().merge(overrides))
    }

    /// Builds a formatter from string-keyed option pairs.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownOption`] naming the first key outside the
    /// allow-list, or [`OptionError::InvalidValue`] for a value that does not parse.
    ///
    /// ```
    /// use memsize::Formatter;
    ///
    /// let formatter = Formatter::from_pairs([("numberFormat.decimalPoint", ",")]).unwrap();
    /// assert_eq!(formatter.format(1234), "1,21 KiB");
    /// assert!(Formatter::from_pairs([("unknownOption", "value")]).is_err());
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        FormatterOptions::from_pairs(pairs).map(Self::with_options)
    }

    /// Live base options.
    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Mutable access to the base options; changes affect every later call.
    pub fn options_mut(&mut self) -> &mut FormatterOptions {
        &mut self.options
    }

    /// Applies `overrides` to the base options permanently.
    pub fn set_options(&mut self, overrides: &Overrides) -> &mut Self {
        self.options.apply(overrides);
        self
    }

    /// String-keyed variant of [`Formatter::set_options`]. Nothing is applied
    /// if any pair is rejected.
    pub fn set_options_from_pairs<I, K, V>(&mut self, pairs: I) -> Result<&mut Self, OptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let overrides = Overrides::from_pairs(pairs)?;
        Ok(self.set_options(&overrides))
    }

    /// Formats `bytes` with the base options.
    pub fn format(&self, bytes: i64) -> String {
        render(bytes < 0, bytes.unsigned_abs(), &self.options)
    }

    /// Formats `bytes` with `overrides` layered on a copy of the base options.
    pub fn format_with(&self, bytes: i64, overrides: &Overrides) -> String {
        let options = self.options.merge(overrides);
        render(bytes < 0, bytes.unsigned_abs(), &options)
    }

    /// Formats an unsigned count, covering the whole `u64` range.
    pub fn format_unsigned(&self, bytes: u64) -> String {
        render(false, bytes, &self.options)
    }

    /// Formats every value with the base options, in parallel.
    ///
    /// The output keeps the order of `values`.
    ///
    /// ```
    /// use memsize::Formatter;
    ///
    /// let formatted = Formatter::new().format_batch(&[512, 1536, 65536]);
    /// assert_eq!(formatted, vec!["512 B", "1.5 KiB", "64 KiB"]);
    /// ```
    pub fn format_batch(&self, values: &[i64]) -> Vec<String> {
        values.par_iter().map(|&bytes| self.format(bytes)).collect()
    }
}

fn render(negative: bool, magnitude: u64, options: &FormatterOptions) -> String {
    let unit = options.standard().select_unit(magnitude);
    log::debug!(
        "{} bytes -> {} ({} standard)",
        magnitude,
        unit.label,
        options.standard().name()
    );

    let scaled = magnitude as f64 / unit.divisor.max(1) as f64;
    let decimals = decimal_places(scaled, options.min_decimals(), options.max_decimals());
    let number = options.number_format().render(scaled, decimals);

    let sign = if negative { "-" } else { "" };
    format!("{}{}{}{}", sign, number, options.unit_separator(), unit.label)
}

/// Number of fractional digits to show: `max` digits with trailing zeros
/// dropped, but never fewer than `min`. When `min > max`, `min` wins.
fn decimal_places(scaled: f64, min: usize, max: usize) -> usize {
    if min >= max {
        return min;
    }
    let (_, fraction) = round_to_digits(scaled, max);
    let significant = fraction.trim_end_matches('0').len();
    significant.max(min)
}
