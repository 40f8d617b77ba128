//! Summary statistics over order durations.

use serde::Serialize;

/// Mean and sample standard deviation of a set of durations, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    /// Bessel-corrected (divides by `n - 1`). Zero for fewer than two samples.
    pub std_dev: f64,
}

impl Statistics {
    pub fn from_samples(samples: &[f64]) -> Self {
        let count = samples.len();
        if count == 0 {
            return Self::default();
        }
        let mean = samples.iter().sum::<f64>() / count as f64;
        let std_dev = if count < 2 {
            0.0
        } else {
            let squares: f64 = samples.iter().map(|s| (s - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        };
        Self {
            count,
            mean,
            std_dev,
        }
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "---Statistics---")?;
        writeln!(f, "Mean: {:.2} seconds", self.mean)?;
        write!(f, "Standard deviation: {:.2} seconds", self.std_dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_sample_deviation() {
        let stats = Statistics::from_samples(&[1.0, 2.0, 3.0]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.std_dev, 1.0);
    }

    #[test]
    fn single_sample_has_no_spread() {
        let stats = Statistics::from_samples(&[5.0]);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn empty_set_is_all_zero() {
        assert_eq!(Statistics::from_samples(&[]), Statistics::default());
    }

    #[test]
    fn report_prints_two_decimals() {
        let text = Statistics::from_samples(&[2.0, 4.0]).to_string();
        assert!(text.contains("Mean: 3.00 seconds"));
        assert!(text.contains("Standard deviation: 1.41 seconds"));
    }
}
