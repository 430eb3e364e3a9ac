//! Helpers shared by the demo programs in `src/bin/`.
//!
//! Output goes to stdout; diagnostics go through `tracing` to stderr so the
//! two never interleave.

use crate::bits::{BitFlipMutation, BitVectorInitializer};
use crate::error::{EvoError, Result};
use tracing_subscriber::EnvFilter;

/// Copyright and license notice printed at the start of every demo.
pub fn banner() -> String {
    format!(
        "Example program for the {name} library.\n\
         Copyright (C) {authors}\n\
         This program comes with ABSOLUTELY NO WARRANTY. It is free\n\
         software, distributed under the {license} license.\n",
        name = env!("CARGO_PKG_NAME"),
        authors = env!("CARGO_PKG_AUTHORS").replace(':', ", "),
        license = env!("CARGO_PKG_LICENSE"),
    )
}

/// Prints [`banner`] followed by a blank line.
pub fn print_copyright_and_license() {
    println!("{}", banner());
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// One column of the GA comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSummary {
    pub name: String,
    pub cost: i64,
    pub value: i64,
    pub fitness: f64,
}

/// Renders a right-aligned metrics table with one column per variant.
///
/// ```
/// use u_evo::demo::{comparison_table, VariantSummary};
///
/// let table = comparison_table(&[VariantSummary {
///     name: "GA".into(),
///     cost: 1,
///     value: 99,
///     fitness: 0.5,
/// }]);
/// assert_eq!(table.lines().nth(1), Some("    Cost            1"));
/// ```
pub fn comparison_table(variants: &[VariantSummary]) -> String {
    let mut lines = [
        format!("{:>8}", "Metric"),
        format!("{:>8}", "Cost"),
        format!("{:>8}", "Value"),
        format!("{:>8}", "Fitness"),
    ];
    for v in variants {
        lines[0].push_str(&format!(" {:>12}", v.name));
        lines[1].push_str(&format!(" {:>12}", v.cost));
        lines[2].push_str(&format!(" {:>12}", v.value));
        lines[3].push_str(&format!(" {:>12.8}", v.fitness));
    }
    let mut table = lines.join("\n");
    table.push('\n');
    table
}

/// One line of the replay comparison: both values and a verdict.
pub fn replay_row(first: u32, second: u32) -> String {
    let verdict = if first == second {
        "same as expected"
    } else {
        "different (uh oh, please report bug)"
    };
    format!("{first}\t{second}\t{verdict}")
}

/// Builds a fresh initializer and mutation operator from the process-wide
/// [`Configurator`](crate::random::Configurator), then records the first 32
/// bits of one random vector initially and after each of `steps - 1`
/// mutations.
///
/// Two calls made right after configuring the same seed return equal
/// sequences.
pub fn replay_sequence(bit_length: usize, mutation_rate: f64, steps: usize) -> Result<Vec<u32>> {
    if bit_length == 0 {
        return Err(EvoError::InvalidLength(bit_length));
    }
    let mut initializer = BitVectorInitializer::new(bit_length);
    let mut mutation = BitFlipMutation::new(mutation_rate)?;

    let mut x = initializer.create_candidate_solution();
    let mut values = Vec::with_capacity(steps);
    if steps > 0 {
        values.push(x.get32(0));
    }
    for _ in 1..steps {
        mutation.mutate(&mut x);
        values.push(x.get32(0));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_mentions_package_and_warranty() {
        let text = banner();
        assert!(text.starts_with("Example program for the u-evo library."));
        assert!(text.contains("ABSOLUTELY NO WARRANTY"));
        assert!(text.contains("MIT"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_comparison_table_layout() {
        let table = comparison_table(&[
            VariantSummary {
                name: "SimpleGA".into(),
                cost: 3,
                value: 97,
                fitness: 0.25,
            },
            VariantSummary {
                name: "MutationOnly".into(),
                cost: 0,
                value: 100,
                fitness: 1.0,
            },
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  Metric     SimpleGA MutationOnly");
        assert_eq!(lines[1], "    Cost            3            0");
        assert_eq!(lines[2], "   Value           97          100");
        assert_eq!(lines[3], " Fitness   0.25000000   1.00000000");
    }

    #[test]
    fn test_replay_row() {
        assert_eq!(replay_row(7, 7), "7\t7\tsame as expected");
        assert_eq!(
            replay_row(7, 8),
            "7\t8\tdifferent (uh oh, please report bug)"
        );
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
