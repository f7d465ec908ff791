use crate::gc::ratio::RatioFunc;
use crate::gc::source::DEFAULT_EMAIL;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Nucleotide accession id, e.g. "NC_000913.3" [string]
    ///
    /// Also used as the stem of the cached `<seq_id>.fasta` file.
    #[clap(value_parser, help_heading = "Core")]
    pub seq_id: String,

    /// Directory holding cached FASTA files [path]
    #[clap(long, value_parser, default_value = ".", help_heading = "Core")]
    pub cache_dir: PathBuf,

    /// Contact email sent with NCBI requests [string]
    #[clap(long, default_value = DEFAULT_EMAIL, help_heading = "Core")]
    pub email: String,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Window size [integer]
    #[clap(short = 'w', long, default_value = "1000", help_heading = "Scan")]
    pub window: usize,

    /// Step between successive windows; must not exceed the window size [integer]
    #[clap(short = 's', long, default_value = "10", help_heading = "Scan")]
    pub step: usize,

    /// Ratio function applied to every window
    #[clap(
        short = 'f',
        long,
        value_enum,
        default_value_t = RatioFunc::GcRatio,
        help_heading = "Scan"
    )]
    pub func: RatioFunc,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// SVG chart output (default: "<seq_id>_<func>.svg") [path]
    #[clap(short = 'p', long, value_parser, help_heading = "Output")]
    pub plot: Option<PathBuf>,

    /// Also write the series as TSV [path]
    #[clap(short = 'o', long, value_parser, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Resolve the chart path for a given accession and function
    pub fn plot_path(&self, seq_id: &str, func: RatioFunc) -> PathBuf {
        match &self.plot {
            Some(p) => p.clone(),
            None => PathBuf::from(format!("{}_{}.svg", seq_id, func)),
        }
    }
}
