use clap::Parser;
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Byte counts to format (paths with --files); read from stdin when omitted
    pub values: Vec<String>,

    /// (optional) Unit standard: IEC (KiB, MiB, ...) or JEDEC (KB, MB, GB)
    #[arg(short = 's', long = "standard")]
    pub standard: Option<String>,

    /// (optional) Minimum number of decimals to show
    #[arg(long = "min-decimals")]
    pub min_decimals: Option<usize>,

    /// (optional) Maximum number of decimals to show
    #[arg(long = "max-decimals")]
    pub max_decimals: Option<usize>,

    /// (optional) Show exactly this many decimals
    #[arg(long = "fixed-decimals")]
    pub fixed_decimals: Option<usize>,

    /// (optional) Decimal point character
    #[arg(long = "decimal-point")]
    pub decimal_point: Option<String>,

    /// (optional) Thousands separator, empty by default
    #[arg(long = "thousands-separator")]
    pub thousands_separator: Option<String>,

    /// (optional) Text placed between number and unit
    #[arg(long = "unit-separator")]
    pub unit_separator: Option<String>,

    /// (optional) Raw formatter option, e.g. -o numberFormat.decimalPoint=,
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Treat values as file paths and format their size on disk
    #[arg(short = 'f', long = "files")]
    pub files: bool,

    /// Print debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
