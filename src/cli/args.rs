use clap::Parser;
use std::path::PathBuf;

use romancalc::MalformedPolicy;

#[derive(Parser)]
#[command(name = "romancalc", version, about = "ROMANCALC CLI")]
pub struct CliArgs {
    /// Input expression file, one `ROMAN OP ROMAN` line per expression
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Output report file
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Policy for lines that do not parse cleanly (warn or silent)
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Warn)]
    pub on_malformed: MalformedPolicy,

    /// Load report options from a JSON preset file (overrides option flags)
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Write a JSON summary sidecar next to the report
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
