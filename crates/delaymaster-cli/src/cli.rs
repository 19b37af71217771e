use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use delaymaster_kernel::Engine;

#[derive(Parser)]
#[command(
    name = "delaymaster",
    about = "Delaymaster: check strings for back-to-back w^n o^n l^n f^n wolf blocks",
    version
)]
pub struct Cli {
    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print VALID or INVALID for each candidate string
    Check {
        /// Candidate strings (one verdict line per input)
        inputs: Vec<String>,

        /// Also read newline-separated candidates from stdin
        #[arg(long)]
        stdin: bool,

        /// Scanner implementation
        #[arg(long, value_enum, default_value = "streaming")]
        engine: EngineArg,

        /// Exit with status 1 if any candidate is INVALID
        #[arg(long)]
        strict_exit: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the block decomposition of one candidate and why it fails
    Explain {
        /// Candidate string
        input: String,

        /// Scanner implementation
        #[arg(long, value_enum, default_value = "streaming")]
        engine: EngineArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EngineArg {
    #[value(name = "streaming")]
    Streaming,
    #[value(name = "regex")]
    Regex,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Streaming => Engine::Streaming,
            EngineArg::Regex => Engine::Regex,
        }
    }
}
