use std::io::Write;

use anyhow::Result;
use math::{checked_is_happy, happy_chain, happy_numbers_below, happy_numbers_below_parallel};
use tracing::{debug, info};

/// What a single invocation of the tool should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check one value.
    Check { number: i64, verbose: bool },
    /// List every happy number below `limit`.
    List { limit: u64, parallel: bool },
}

/// Run a command, writing its report to `out`.
pub fn run(command: &Command, out: &mut impl Write) -> Result<()> {
    match *command {
        Command::Check { number, verbose } => {
            let happy = checked_is_happy(number)?;
            debug!(number, happy, "checked");
            if verbose {
                let chain = happy_chain(number as u64);
                let path: Vec<String> = chain.values.iter().map(u64::to_string).collect();
                writeln!(out, "Chain: {}", path.join(" -> "))?;
                debug!(steps = chain.steps(), outcome = ?chain.outcome, "chain complete");
            }
            if happy {
                writeln!(out, "{} is happy", number)?;
            } else {
                writeln!(out, "{} is not happy", number)?;
            }
        }
        Command::List { limit, parallel } => {
            let found = if parallel {
                happy_numbers_below_parallel(limit)
            } else {
                happy_numbers_below(limit)
            };
            info!(limit, parallel, count = found.len(), "listed happy numbers");
            for n in &found {
                writeln!(out, "{}", n)?;
            }
        }
    }
    Ok(())
}
