use crate::errors::OptionError;

/// Punctuation used when rendering the numeric part of a memory size.
///
/// `NumberFormat` only knows about digits: it never sees units or signs. The
/// decimal point replaces `.` and the thousands separator is inserted every
/// three digits of the integer part. An empty thousands separator disables
/// grouping.
///
/// # Examples
///
/// ```
/// use memsize::NumberFormat;
///
/// let mut nf = NumberFormat::new();
/// nf.set_decimal_point(",").set_thousands_separator(" ");
/// assert_eq!(nf.render(4384.0319, 2), "4 384,03");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_point: String,
    thousands_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_point: ".".to_string(),
            thousands_separator: String::new(),
        }
    }
}

impl NumberFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decimal_point(&self) -> &str {
        &self.decimal_point
    }

    pub fn thousands_separator(&self) -> &str {
        &self.thousands_separator
    }

    pub fn set_decimal_point(&mut self, decimal_point: impl Into<String>) -> &mut Self {
        self.decimal_point = decimal_point.into();
        self
    }

    pub fn set_thousands_separator(&mut self, thousands_separator: impl Into<String>) -> &mut Self {
        self.thousands_separator = thousands_separator.into();
        self
    }

    /// Applies the fields present in `overrides`, leaving the others untouched.
    pub fn apply(&mut self, overrides: &NumberFormatOverrides) -> &mut Self {
        if let Some(decimal_point) = &overrides.decimal_point {
            self.set_decimal_point(decimal_point.as_str());
        }
        if let Some(thousands_separator) = &overrides.thousands_separator {
            self.set_thousands_separator(thousands_separator.as_str());
        }
        self
    }

    /// Renders `value` with exactly `decimals` fractional digits.
    ///
    /// Rounding is half away from zero. The sign of `value` is ignored; callers
    /// prepend it themselves. `decimals` is capped at [`MAX_DECIMALS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use memsize::NumberFormat;
    ///
    /// let mut nf = NumberFormat::new();
    /// nf.set_thousands_separator(",");
    /// assert_eq!(nf.render(1234567.891, 2), "1,234,567.89");
    /// assert_eq!(nf.render(1.5, 0), "2");
    /// assert_eq!(nf.render(64.0, 3), "64.000");
    /// ```
    pub fn render(&self, value: f64, decimals: usize) -> String {
        let (integer, fraction) = round_to_digits(value, decimals);
        let mut out = group_thousands(&integer, &self.thousands_separator);
        if !fraction.is_empty() {
            out.push_str(&self.decimal_point);
            out.push_str(&fraction);
        }
        out
    }
}

/// Partial update for a [`NumberFormat`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormatOverrides {
    pub decimal_point: Option<String>,
    pub thousands_separator: Option<String>,
}

impl NumberFormatOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decimal_point(mut self, decimal_point: impl Into<String>) -> Self {
        self.decimal_point = Some(decimal_point.into());
        self
    }

    pub fn thousands_separator(mut self, thousands_separator: impl Into<String>) -> Self {
        self.thousands_separator = Some(thousands_separator.into());
        self
    }

    /// Builds overrides from `(key, value)` pairs using the option names
    /// `decimalPoint` and `thousandsSeparator`.
    ///
    /// Fails on the first key that is not one of those two.
    ///
    /// # Examples
    ///
    /// ```
    /// use memsize::NumberFormatOverrides;
    ///
    /// let ok = NumberFormatOverrides::from_pairs([("decimalPoint", ",")]).unwrap();
    /// assert_eq!(ok.decimal_point.as_deref(), Some(","));
    ///
    /// let err = NumberFormatOverrides::from_pairs([("unknownOption", "x")]).unwrap_err();
    /// assert!(err.to_string().contains("\"unknownOption\""));
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

    pub(crate) fn set_pair(&mut self, key: &str, value: &str) -> Result<(), OptionError> {
        match key {
            "decimalPoint" => self.decimal_point = Some(value.to_string()),
            "thousandsSeparator" => self.thousands_separator = Some(value.to_string()),
            _ => return Err(OptionError::UnknownOption(key.to_string())),
        }
        Ok(())
    }
}

/// Most fractional digits ever rendered. Every finite `f64` is exact within
/// this many decimals, so further digits would all be zero.
pub const MAX_DECIMALS: usize = 1074;

/// Rounds `|value|` half away from zero and splits it into integer and
/// fractional digit strings. The fraction has exactly `decimals` digits,
/// capped at [`MAX_DECIMALS`].
pub(crate) fn round_to_digits(value: f64, decimals: usize) -> (String, String) {
    let decimals = decimals.min(MAX_DECIMALS);
    let magnitude = value.abs();
    if !magnitude.is_finite() {
        return (magnitude.to_string(), "0".repeat(decimals));
    }

    let factor = 10f64.powi(decimals as i32);
    let scaled = (magnitude * factor).round();

    let digits = if scaled.is_finite() && factor.is_finite() {
        let digits = format!("{:.0}", scaled);
        if decimals == 0 {
            return (digits, String::new());
        }
        // leading zeros so that at least one integer digit remains
        format!("{:0>width$}", digits, width = decimals + 1)
    } else {
        // precision beyond what the scaling trick can hold
        format!("{:.*}", decimals, magnitude).replace('.', "")
    };

    let split = digits.len() - decimals;
    (digits[..split].to_string(), digits[split..].to_string())
}

fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
