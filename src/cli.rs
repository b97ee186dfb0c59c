use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input template file, or a .json manifest listing several
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
    /// Class name for the generated type (single-template mode only;
    /// defaults to the capitalized file stem)
    #[arg(long)]
    pub class: Option<String>,
}
