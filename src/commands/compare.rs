//! Compare command implementation.

use super::models::CompareArgs;
use crate::compare::compare_traces;
use crate::output::{print_json, render_comparison};
use anyhow::{Context, Result};

/// Execute the compare command
pub fn execute_compare(args: CompareArgs) -> Result<()> {
    let comparison =
        compare_traces(&args.baseline, &args.current).context("Failed to compare traces")?;

    if args.json {
        print_json(&comparison)?;
    } else {
        print!("{}", render_comparison(&comparison));
    }

    Ok(())
}
