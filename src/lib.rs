//! Human-readable memory sizes.
//!
//! ```
//! use memsize::{Formatter, Jedec, Overrides};
//!
//! let formatter = Formatter::new();
//! assert_eq!(formatter.format(4_707_319_808), "4.38 GiB");
//! assert_eq!(formatter.format_with(4_707_319_808, &Overrides::new().standard(Jedec)), "4.38 GB");
//! ```
use std::error::Error;
use std::path::Path;
use filesize::PathExt;

pub mod args;
pub mod config;
pub mod errors;
pub mod formatter;
pub mod number_format;
pub mod options;
pub mod standards;
pub mod traits;

pub use errors::OptionError;
pub use formatter::Formatter;
pub use number_format::{NumberFormat, NumberFormatOverrides, MAX_DECIMALS};
pub use options::{FormatterOptions, Overrides};
pub use standards::{standard_by_name, Iec, Jedec, Standard, Unit};
pub use traits::ByteSize;

use config::Config;

/*
Formats every input value and prints one line per value. Inputs that cannot be
read or parsed are skipped with a warning; they never abort the run.
 */
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    if config.files {
        for value in &config.values {
            match size_on_disk(Path::new(value)) {
                Ok(size) => println!("{}\t{}", config.formatter.format_unsigned(size), value),
                Err(e) => log::warn!("Skipping {:?}: {}", value, e),
            }
        }
        return Ok(());
    }

    let mut counts = Vec::with_capacity(config.values.len());
    for value in &config.values {
        match value.parse::<i64>() {
            Ok(count) => counts.push(count),
            Err(e) => log::warn!("Skipping {:?}: {}", value, e),
        }
    }

    for line in config.formatter.format_batch(&counts) {
        println!("{}", line);
    }

    Ok(())
}

/*
Size of a file as allocated on disk, without following symlinks.
 */
pub fn size_on_disk(path: &Path) -> std::io::Result<u64> {
    let metadata = path.symlink_metadata()?;
    path.size_on_disk_fast(&metadata)
}
