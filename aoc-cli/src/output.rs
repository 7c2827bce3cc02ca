//! Output formatting for solver results

use crate::runner::PartOutcome;
use chrono::TimeDelta;

/// Output formatter for part outcomes
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a single outcome. Returns false when the part
    /// failed.
    pub fn print_outcome(&self, outcome: &PartOutcome) -> bool {
        if self.quiet {
            self.print_quiet(outcome)
        } else {
            self.print_full(outcome)
        }
    }

    /// Quiet mode: just the answer, one per line
    fn print_quiet(&self, outcome: &PartOutcome) -> bool {
        match &outcome.answer {
            Ok(result) => {
                println!("{}", result.answer);
                true
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                false
            }
        }
    }

    /// Full output with parse and solve timing
    fn print_full(&self, outcome: &PartOutcome) -> bool {
        let prefix = format!(
            "{} day {} part {}",
            outcome.year, outcome.day, outcome.part
        );
        match &outcome.answer {
            Ok(result) => {
                println!(
                    "{}: {} (parse: {}, solve: {})",
                    prefix,
                    result.answer,
                    format_duration(outcome.parse_duration),
                    format_duration(result.duration())
                );
                true
            }
            Err(e) => {
                eprintln!("{}: Error - {}", prefix, e);
                false
            }
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_picks_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
    }

    #[test]
    fn format_duration_handles_negatives() {
        assert_eq!(format_duration(TimeDelta::microseconds(-42)), "-42µs");
    }
}
