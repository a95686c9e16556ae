use crate::formatter::Formatter;

/// Provides functionality to format byte counts into human-readable strings with appropriate units.
///
/// This trait is a shortcut over [`Formatter`] for the common case: `format_size` uses the
/// default options (IEC units, up to two decimals, trailing zeros dropped), while
/// `format_size_with` lets a preconfigured formatter do the work.
///
/// # Examples
///
/// ```
/// use memsize::traits::ByteSize;
/// let size: u64 = 1024;
/// assert_eq!(size.format_size(), "1 KiB");
///
/// let dvd: i64 = 4_707_319_808;
/// assert_eq!(dvd.format_size(), "4.38 GiB");
/// ```
pub trait ByteSize {
    /// Formats the number with the default formatter options.
    ///
    /// # Examples
    ///
    /// ```
    /// use memsize::traits::ByteSize;
    ///
    /// assert_eq!(512_u64.format_size(), "512 B");
    /// assert_eq!(1536_usize.format_size(), "1.5 KiB");
    /// assert_eq!((-1234_i64).format_size(), "-1.21 KiB");
    /// ```
    fn format_size(&self) -> String {
        self.format_size_with(&Formatter::default())
    }

    /// Formats the number with the given formatter's base options.
    ///
    /// # Examples
    ///
    /// ```
    /// use memsize::traits::ByteSize;
    /// use memsize::{Formatter, Jedec, Overrides};
    ///
    /// let jedec = Formatter::from_overrides(&Overrides::new().standard(Jedec));
    /// assert_eq!(1_048_576_u64.format_size_with(&jedec), "1 MB");
    /// ```
    fn format_size_with(&self, formatter: &Formatter) -> String;
}

impl ByteSize for u64 {
    fn format_size_with(&self, formatter: &Formatter) -> String {
        formatter.format_unsigned(*self)
    }
}

impl ByteSize for usize {
    fn format_size_with(&self, formatter: &Formatter) -> String {
        formatter.format_unsigned(*self as u64)
    }
}

impl ByteSize for i64 {
    fn format_size_with(&self, formatter: &Formatter) -> String {
        formatter.format(*self)
    }
}
