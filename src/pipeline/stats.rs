//! Batch summary statistics.
//!
//! `BatchStats` summarizes the outcomes of one batch run: how many pages
//! succeeded, how many had no content, how many failed, and throughput.

use std::fmt;
use std::time::Duration;

use super::jobs::JobOutcome;

/// Counts and timing for one batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    /// The number of jobs run.
    pub total_processed: usize,
    /// Jobs that completed.
    pub successful: usize,
    /// Jobs whose page had no content on the single-region path.
    pub no_content: usize,
    /// Jobs that failed for any other reason.
    pub failed: usize,
    /// Files written across all jobs.
    pub outputs_written: usize,
    /// Wall-clock time of the batch in milliseconds.
    pub elapsed_ms: f64,
}

impl BatchStats {
    /// Tallies a set of outcomes.
    pub fn from_outcomes(outcomes: &[JobOutcome], elapsed: Duration) -> Self {
        let mut stats = Self {
            total_processed: outcomes.len(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            ..Self::default()
        };
        for outcome in outcomes {
            match &outcome.result {
                Ok(outputs) => {
                    stats.successful += 1;
                    stats.outputs_written += outputs.len();
                }
                Err(err) if err.is_no_content() => stats.no_content += 1,
                Err(_) => stats.failed += 1,
            }
        }
        stats
    }

    /// Returns the success rate as a percentage (0.0 to 100.0).
    pub fn success_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            (self.successful as f64 / self.total_processed as f64) * 100.0
        }
    }

    /// Returns the processing speed in images per second.
    pub fn images_per_second(&self) -> f64 {
        if self.elapsed_ms == 0.0 {
            0.0
        } else {
            self.total_processed as f64 * 1000.0 / self.elapsed_ms
        }
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch Statistics:")?;
        writeln!(f, "  Total processed: {}", self.total_processed)?;
        writeln!(
            f,
            "  Successful: {} ({:.1}%)",
            self.successful,
            self.success_rate()
        )?;
        writeln!(f, "  No content: {}", self.no_content)?;
        writeln!(f, "  Failed: {}", self.failed)?;
        writeln!(f, "  Files written: {}", self.outputs_written)?;
        writeln!(
            f,
            "  Processing speed: {:.2} images/sec",
            self.images_per_second()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SegmentError;
    use crate::pipeline::jobs::{JobKind, PageJob, WrittenOutput};
    use std::path::PathBuf;

    fn outcome(result: crate::core::SegResult<Vec<WrittenOutput>>) -> JobOutcome {
        JobOutcome {
            job: PageJob::new("p.png", JobKind::ExtractSingle),
            result,
        }
    }

    #[test]
    fn success_rate_handles_zero_processed() {
        let stats = BatchStats::default();
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.images_per_second(), 0.0);
    }

    #[test]
    fn outcomes_are_tallied_by_kind() {
        let written = WrittenOutput {
            label: "content".to_string(),
            path: PathBuf::from("p.jpg"),
            bbox: None,
        };
        let outcomes = vec![
            outcome(Ok(vec![written.clone(), written])),
            outcome(Err(SegmentError::no_content("blank"))),
            outcome(Err(SegmentError::invalid_input("empty"))),
            outcome(Ok(Vec::new())),
        ];
        let stats = BatchStats::from_outcomes(&outcomes, Duration::from_millis(500));
        assert_eq!(stats.total_processed, 4);
        assert_eq!(stats.successful, 2);
        assert_eq!(stats.no_content, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.outputs_written, 2);
        assert_eq!(stats.success_rate(), 50.0);
        assert_eq!(stats.images_per_second(), 8.0);
    }
}
