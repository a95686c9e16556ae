use std::fmt;
use std::sync::Arc;

use crate::errors::OptionError;
use crate::number_format::{NumberFormat, NumberFormatOverrides, MAX_DECIMALS};
use crate::standards::{standard_by_name, Iec, Standard};

/// Complete set of settings a [`crate::Formatter`] renders with.
///
/// # Fields
///
/// * `standard` - Unit table used to pick the magnitude (default IEC)
/// * `min_decimals` - Fractional digits always shown (default 0)
/// * `max_decimals` - Fractional digits shown at most (default 2)
/// * `number_format` - Decimal point and thousands separator
/// * `unit_separator` - Text between the number and the unit label (default `" "`)
///
/// Cloning is shallow with respect to the standard: clones share the same
/// `Arc<dyn Standard>`.
#[derive(Clone)]
pub struct FormatterOptions {
    standard: Arc<dyn Standard>,
    min_decimals: usize,
    max_decimals: usize,
    number_format: NumberFormat,
    unit_separator: String,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            standard: Arc::new(Iec),
            min_decimals: 0,
            max_decimals: 2,
            number_format: NumberFormat::default(),
            unit_separator: " ".to_string(),
        }
    }
}

impl fmt::Debug for FormatterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterOptions")
            .field("standard", &self.standard.name())
            .field("min_decimals", &self.min_decimals)
            .field("max_decimals", &self.max_decimals)
            .field("number_format", &self.number_format)
            .field("unit_separator", &self.unit_separator)
            .finish()
    }
}

impl FormatterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from the defaults plus string-keyed pairs.
    ///
    /// See [`Overrides::from_pairs`] for the recognised keys.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::new();
        options.set_from_pairs(pairs)?;
        Ok(options)
    }

    pub fn standard(&self) -> &dyn Standard {
        self.standard.as_ref()
    }

    pub fn min_decimals(&self) -> usize {
        self.min_decimals
    }

    pub fn max_decimals(&self) -> usize {
        self.max_decimals
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    pub fn number_format_mut(&mut self) -> &mut NumberFormat {
        &mut self.number_format
    }

    pub fn unit_separator(&self) -> &str {
        &self.unit_separator
    }

    pub fn set_standard<S: Standard + 'static>(&mut self, standard: S) -> &mut Self {
        self.standard = Arc::new(standard);
        self
    }

    pub fn set_shared_standard(&mut self, standard: Arc<dyn Standard>) -> &mut Self {
        self.standard = standard;
        self
    }

    pub fn set_min_decimals(&mut self, min_decimals: usize) -> &mut Self {
        self.min_decimals = min_decimals;
        self
    }

    pub fn set_max_decimals(&mut self, max_decimals: usize) -> &mut Self {
        self.max_decimals = max_decimals;
        self
    }

    /// Pins both `min_decimals` and `max_decimals` to `decimals`.
    pub fn set_fixed_decimals(&mut self, decimals: usize) -> &mut Self {
        self.min_decimals = decimals;
        self.max_decimals = decimals;
        self
    }

    pub fn set_number_format(&mut self, number_format: NumberFormat) -> &mut Self {
        self.number_format = number_format;
        self
    }

    pub fn set_unit_separator(&mut self, unit_separator: impl Into<String>) -> &mut Self {
        self.unit_separator = unit_separator.into();
        self
    }

    /// Applies every field present in `overrides` to these options in place.
    ///
    /// `fixed_decimals` is applied after `min_decimals`/`max_decimals`, so it
    /// wins when several are given.
    pub fn apply(&mut self, overrides: &Overrides) -> &mut Self {
        log::trace!("applying formatter overrides: {:?}", overrides);

        if let Some(standard) = &overrides.standard {
            self.set_shared_standard(Arc::clone(standard));
        }
        if let Some(min_decimals) = overrides.min_decimals {
            self.set_min_decimals(min_decimals);
        }
        if let Some(max_decimals) = overrides.max_decimals {
            self.set_max_decimals(max_decimals);
        }
        if let Some(fixed_decimals) = overrides.fixed_decimals {
            self.set_fixed_decimals(fixed_decimals);
        }
        if let Some(number_format) = &overrides.number_format {
            self.number_format.apply(number_format);
        }
        if let Some(unit_separator) = &overrides.unit_separator {
            self.set_unit_separator(unit_separator.as_str());
        }
        self
    }

    /// Returns a new snapshot with `overrides` applied. `self` is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use memsize::{FormatterOptions, Overrides};
    ///
    /// let base = FormatterOptions::new();
    /// let merged = base.merge(&Overrides::new().max_decimals(1));
    /// assert_eq!(merged.max_decimals(), 1);
    /// assert_eq!(base.max_decimals(), 2);
    /// ```
    pub fn merge(&self, overrides: &Overrides) -> FormatterOptions {
        let mut merged = self.clone();
        merged.apply(overrides);
        merged
    }

    /// Parses string-keyed pairs and applies them.
    ///
    /// All pairs are validated before any of them is applied, so on error the
    /// options are left exactly as they were.
    pub fn set_from_pairs<I, K, V>(&mut self, pairs: I) -> Result<&mut Self, OptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let overrides = Overrides::from_pairs(pairs)?;
        Ok(self.apply(&overrides))
    }
}

/// A partial configuration layered on top of [`FormatterOptions`].
///
/// Every field is optional; only the fields that are set take effect. Used both
/// for persistent reconfiguration ([`crate::Formatter::set_options`]) and for
/// one-off per-call settings ([`crate::Formatter::format_with`]).
///
/// # Examples
///
/// ```
/// use memsize::{Jedec, NumberFormatOverrides, Overrides};
///
/// let overrides = Overrides::new()
///     .standard(Jedec)
///     .max_decimals(3)
///     .number_format(NumberFormatOverrides::new().thousands_separator(","));
/// assert_eq!(overrides.max_decimals, Some(3));
/// ```
#[derive(Clone, Default)]
pub struct Overrides {
    pub standard: Option<Arc<dyn Standard>>,
    pub min_decimals: Option<usize>,
    pub max_decimals: Option<usize>,
    pub fixed_decimals: Option<usize>,
    pub number_format: Option<NumberFormatOverrides>,
    pub unit_separator: Option<String>,
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("standard", &self.standard.as_ref().map(|s| s.name()))
            .field("min_decimals", &self.min_decimals)
            .field("max_decimals", &self.max_decimals)
            .field("fixed_decimals", &self.fixed_decimals)
            .field("number_format", &self.number_format)
            .field("unit_separator", &self.unit_separator)
            .finish()
    }
}

const NUMBER_FORMAT_PREFIX: &str = "numberFormat.";

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard<S: Standard + 'static>(mut self, standard: S) -> Self {
        self.standard = Some(Arc::new(standard));
        self
    }

    pub fn min_decimals(mut self, min_decimals: usize) -> Self {
        self.min_decimals = Some(min_decimals);
        self
    }

    pub fn max_decimals(mut self, max_decimals: usize) -> Self {
        self.max_decimals = Some(max_decimals);
        self
    }

    /// Pins min and max decimals to `fixed_decimals`. It takes precedence over
    /// `min_decimals`/`max_decimals` set on the same overrides, whatever the order.
    pub fn fixed_decimals(mut self, fixed_decimals: usize) -> Self {
        self.fixed_decimals = Some(fixed_decimals);
        self
    }

    pub fn number_format(mut self, number_format: NumberFormatOverrides) -> Self {
        self.number_format = Some(number_format);
        self
    }

    pub fn unit_separator(mut self, unit_separator: impl Into<String>) -> Self {
        self.unit_separator = Some(unit_separator.into());
        self
    }

    /// Builds overrides from `(key, value)` string pairs.
    ///
    /// Recognised keys are `standard`, `minDecimals`, `maxDecimals`,
    /// `fixedDecimals`, `unitSeparator`, `numberFormat.decimalPoint` and
    /// `numberFormat.thousandsSeparator`. The first unrecognised key aborts
    /// with [`OptionError::UnknownOption`]; nested keys are reported without
    /// the `numberFormat.` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use memsize::Overrides;
    /// use memsize::errors::OptionError;
    ///
    /// let overrides = Overrides::from_pairs([
    ///     ("standard", "JEDEC"),
    ///     ("numberFormat.thousandsSeparator", ","),
    /// ])
    /// .unwrap();
    /// assert_eq!(overrides.standard.unwrap().name(), "JEDEC");
    ///
    /// let err = Overrides::from_pairs([("unknownOption", "value")]).unwrap_err();
    /// assert_eq!(err, OptionError::UnknownOption("unknownOption".to_string()));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut overrides = Self::new();
        for (key, value) in pairs {
            overrides.set_pair(key.as_ref(), value.as_ref())?;
        }
        Ok(overrides)
    }

    fn set_pair(&mut self, key: &str, value: &str) -> Result<(), OptionError> {
        match key {
            "standard" => {
                let standard = standard_by_name(value).ok_or_else(|| invalid(key, value))?;
                self.standard = Some(standard);
            }
            "minDecimals" => self.min_decimals = Some(parse_decimals(key, value)?),
            "maxDecimals" => self.max_decimals = Some(parse_decimals(key, value)?),
            "fixedDecimals" => self.fixed_decimals = Some(parse_decimals(key, value)?),
            "unitSeparator" => self.unit_separator = Some(value.to_string()),
            _ => match key.strip_prefix(NUMBER_FORMAT_PREFIX) {
                Some(nested) => self
                    .number_format
                    .get_or_insert_with(NumberFormatOverrides::default)
                    .set_pair(nested, value)?,
                None => return Err(OptionError::UnknownOption(key.to_string())),
            },
        }
        Ok(())
    }
}

fn parse_decimals(key: &str, value: &str) -> Result<usize, OptionError> {
    match value.trim().parse() {
        Ok(decimals) if decimals <= MAX_DECIMALS => Ok(decimals),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> OptionError {
    OptionError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
