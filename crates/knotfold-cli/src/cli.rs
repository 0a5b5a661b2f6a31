use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "knotfold developers",
    version,
    about = "knotfold - RNA secondary structure prediction with H-type pseudoknots.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// The RNA sequence to fold (A, C, G, U; case-insensitive).
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path to a TOML grammar definition overriding the built-in pairing
    /// grammar.
    #[arg(long, value_name = "PATH")]
    pub grammar: Option<PathBuf>,

    /// Path to a TOML file overriding the built-in energy coefficients.
    #[arg(long, value_name = "PATH")]
    pub energy_params: Option<PathBuf>,

    /// Admit G-U wobble pairs as pseudoknot core anchors.
    #[arg(long)]
    pub allow_ug: bool,

    /// Maximum window span inspected for a single pseudoknot.
    #[arg(long, value_name = "INT", default_value_t = 100)]
    pub max_loop_size: usize,

    /// Keep candidates whose stem count is within this distance of the
    /// smallest stem count found.
    #[arg(long, value_name = "INT", default_value_t = 2)]
    pub max_stem_allow_smaller: usize,

    /// Apply the stem-count bound before energy evaluation. The ranking is
    /// unchanged; only work is saved.
    #[arg(long)]
    pub prune_early: bool,

    /// Write every enumerated candidate to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write the ranked candidates, with energies, to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub results_csv: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for the parallel window search.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}
