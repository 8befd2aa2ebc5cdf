use backend_lint::{cli::Cli, config, runner};
use clap::Parser;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let code = match run(&cli) {
        Ok(outcome) => {
            if outcome.passed {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    process::exit(code);
}

fn run(cli: &Cli) -> backend_lint::Result<runner::LintOutcome> {
    let mut config = config::load_config(cli.config.as_deref())?;

    if let Some(dir) = &cli.project_dir {
        config.project.backend_dir = dir.clone();
    }

    let outcome = runner::run_lint(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if !cli.quiet {
        let version = outcome.version.as_deref().unwrap_or("unknown version");
        if outcome.passed {
            println!(
                "{} {} ({}) reported no issues in {}",
                "✓".green(),
                outcome.tool,
                version,
                outcome.project_dir.display()
            );
        } else {
            println!(
                "{} {} ({}) exited with status {}",
                "✗".red(),
                outcome.tool,
                version,
                outcome.status
            );
        }
    }

    Ok(outcome)
}
