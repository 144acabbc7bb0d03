//! Command-line arguments for the `survey` binary.

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Debug, Parser)]
#[command(
    name = "survey",
    version,
    about = "Fill in the survey form from the terminal"
)]
pub struct Cli {
    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Use a plain prompt theme without colors.
    #[arg(long)]
    pub plain: bool,
}
