use std::fmt;
use std::sync::Arc;

/// A single magnitude tier of a [`Standard`].
///
/// A byte count uses this unit once it reaches `threshold`; the displayed
/// number is the byte count divided by `divisor`.
/// A `divisor` of 0 is treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub threshold: u64,
    pub divisor: u64,
    pub label: &'static str,
}

impl Unit {
    pub const fn new(threshold: u64, divisor: u64, label: &'static str) -> Self {
        Self {
            threshold,
            divisor,
            label,
        }
    }

    /// Unit whose threshold and divisor are both `base^power`.
    const fn power_of(base: u64, power: u32, label: &'static str) -> Self {
        let value = base.pow(power);
        Self::new(if power == 0 { 0 } else { value }, value, label)
    }
}

/// A named table of magnitude units.
///
/// Implementors return their units ordered by strictly increasing threshold,
/// starting with a base unit whose threshold is `0` and divisor is `1`.
/// Selection only looks at thresholds, so a new standard is nothing more than
/// a new table.
///
/// # Examples
///
/// ```
/// use memsize::{Formatter, FormatterOptions, Standard, Unit};
///
/// #[derive(Debug)]
/// struct Sectors;
///
/// impl Standard for Sectors {
///     fn name(&self) -> &str {
///         "sectors"
///     }
///
///     fn units(&self) -> &[Unit] {
///         const UNITS: [Unit; 2] = [Unit::new(0, 1, "B"), Unit::new(512, 512, "sectors")];
///         &UNITS
///     }
/// }
///
/// let mut options = FormatterOptions::new();
/// options.set_standard(Sectors);
/// let formatter = Formatter::with_options(options);
/// assert_eq!(formatter.format(1536), "3 sectors");
/// ```
pub trait Standard: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn units(&self) -> &[Unit];

    /// Returns the largest unit whose threshold does not exceed `magnitude`.
    ///
    /// Values beyond the last threshold stay in the last unit.
    fn select_unit(&self, magnitude: u64) -> Unit {
        let units = self.units();
        let idx = units.partition_point(|unit| unit.threshold <= magnitude);
        units
            .get(idx.saturating_sub(1))
            .copied()
            .unwrap_or(BASE_UNIT)
    }
}

const BASE_UNIT: Unit = Unit::new(0, 1, "B");

/// Binary prefixes as defined by IEC 80000-13 (KiB, MiB, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iec;

impl Standard for Iec {
    fn name(&self) -> &str {
        "IEC"
    }

    fn units(&self) -> &[Unit] {
        const UNITS: [Unit; 7] = [
            Unit::power_of(1024, 0, "B"),
            Unit::power_of(1024, 1, "KiB"),
            Unit::power_of(1024, 2, "MiB"),
            Unit::power_of(1024, 3, "GiB"),
            Unit::power_of(1024, 4, "TiB"),
            Unit::power_of(1024, 5, "PiB"),
            Unit::power_of(1024, 6, "EiB"),
        ];
        &UNITS
    }
}

/// JEDEC memory units: binary multipliers with KB/MB/GB labels.
///
/// JEDEC stops at GB, so anything larger is still expressed in GB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jedec;

impl Standard for Jedec {
    fn name(&self) -> &str {
        "JEDEC"
    }

    fn units(&self) -> &[Unit] {
        const UNITS: [Unit; 4] = [
            Unit::power_of(1024, 0, "B"),
            Unit::power_of(1024, 1, "KB"),
            Unit::power_of(1024, 2, "MB"),
            Unit::power_of(1024, 3, "GB"),
        ];
        &UNITS
    }
}

/// Looks up a built-in standard by name, ignoring ASCII case.
///
/// ```
/// use memsize::standard_by_name;
///
/// assert_eq!(standard_by_name("jedec").unwrap().name(), "JEDEC");
/// assert!(standard_by_name("SI").is_none());
/// ```
pub fn standard_by_name(name: &str) -> Option<Arc<dyn Standard>> {
    if name.eq_ignore_ascii_case("IEC") {
        Some(Arc::new(Iec))
    } else if name.eq_ignore_ascii_case("JEDEC") {
        Some(Arc::new(Jedec))
    } else {
        None
    }
}
