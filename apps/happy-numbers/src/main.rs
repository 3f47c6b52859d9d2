use anyhow::Result;
use clap::Parser;
use happy_numbers::{Command, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "happy-numbers")]
#[command(about = "Check happy numbers")]
struct Cli {
    /// Check whether a single number is happy
    #[arg(short, long, allow_negative_numbers = true)]
    number: Option<i64>,

    /// List all happy numbers below this limit
    #[arg(short, long)]
    below: Option<u64>,

    /// Check candidates in parallel when listing
    #[arg(long)]
    parallel: bool,

    /// Print the chain and debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn command(&self) -> Option<Command> {
        if let Some(number) = self.number {
            Some(Command::Check {
                number,
                verbose: self.verbose,
            })
        } else {
            self.below.map(|limit| Command::List {
                limit,
                parallel: self.parallel,
            })
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command() {
        Some(command) => run(&command, &mut std::io::stdout().lock()),
        None => {
            eprintln!("Usage: happy-numbers --number <N> or --below <LIMIT>");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Option<Command> {
        Cli::try_parse_from(args).unwrap().command()
    }

    #[test]
    fn test_number_flag() {
        assert_eq!(
            command(&["happy-numbers", "--number", "19", "-v"]),
            Some(Command::Check {
                number: 19,
                verbose: true,
            })
        );
    }

    #[test]
    fn test_negative_number_parses() {
        // Rejected later by the library, not by the argument parser
        assert_eq!(
            command(&["happy-numbers", "-n", "-5"]),
            Some(Command::Check {
                number: -5,
                verbose: false,
            })
        );
    }

    #[test]
    fn test_number_wins_over_below() {
        assert_eq!(
            command(&["happy-numbers", "-b", "100", "-n", "7", "--parallel"]),
            Some(Command::Check {
                number: 7,
                verbose: false,
            })
        );
    }

    #[test]
    fn test_below_flag() {
        assert_eq!(
            command(&["happy-numbers", "-b", "100", "--parallel"]),
            Some(Command::List {
                limit: 100,
                parallel: true,
            })
        );
    }

    #[test]
    fn test_no_flags_is_usage() {
        assert_eq!(command(&["happy-numbers"]), None);
    }

    #[test]
    fn test_negative_limit_rejected() {
        assert!(Cli::try_parse_from(["happy-numbers", "--below", "-1"]).is_err());
    }
}
