use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lint-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run the backend lint suite inside its virtual environment")]
#[command(
    long_about = "Locates the backend project directory, activates its Python virtual environment, runs the configured lint tool over the whole tree, and exits with a status reflecting the result: 0 when the tool reports no issues, 1 on any lint failure, 2 when the directory or environment is unusable."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the backend directory to lint
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and the lint tool's own
    #[arg(short, long)]
    pub quiet: bool,

    /// Output the lint outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
