use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Result of comparing two timing samples
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub is_constant_time: bool,
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    /// Time `a` and `b` in interleaved batches; returns average ns per call
    pub fn measure_pair<A, B>(&self, mut a: A, mut b: B) -> (Vec<f64>, Vec<f64>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            times_a.push(self.batch(&mut a));
            times_b.push(self.batch(&mut b));
        }
        (times_a, times_b)
    }

    fn batch<F: FnMut()>(&self, f: &mut F) -> f64 {
        let start = Instant::now();
        for _ in 0..self.num_iterations {
            f();
        }
        start.elapsed().as_nanos() as f64 / self.num_iterations as f64
    }

    pub fn mean(times: &[f64]) -> f64 {
        times.iter().sum::<f64>() / times.len() as f64
    }

    pub fn variance(times: &[f64], mean: f64) -> f64 {
        let ss: f64 = times.iter().map(|t| (t - mean) * (t - mean)).sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[f64]) -> Vec<f64> {
        if times.len() < 4 {
            return times.to_vec();
        }
        let mut sorted = times.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = sorted[sorted.len() / 4];
        let q3 = sorted[sorted.len() * 3 / 4];
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times.iter().copied().filter(|t| *t >= lo && *t <= hi).collect()
    }

    /// Welch's t-test between two samples
    pub fn analyze(
        &self,
        times_a: &[f64],
        times_b: &[f64],
        mean_ratio_max: f64,
        t_stat_threshold: f64,
    ) -> Result<TimingAnalysis, String> {
        let a = Self::remove_outliers(times_a);
        let b = Self::remove_outliers(times_b);
        if a.len() < 2 || b.len() < 2 {
            return Err(format!(
                "not enough samples after outlier removal ({} and {})",
                a.len(),
                b.len()
            ));
        }

        let mean_a = Self::mean(&a);
        let mean_b = Self::mean(&b);
        let term_a = Self::variance(&a, mean_a) / a.len() as f64;
        let term_b = Self::variance(&b, mean_b) / b.len() as f64;

        let t_statistic = (mean_a - mean_b).abs() / (term_a + term_b).sqrt();
        let degrees_of_freedom = (term_a + term_b).powi(2)
            / (term_a.powi(2) / (a.len() as f64 - 1.0) + term_b.powi(2) / (b.len() as f64 - 1.0));

        let p_value = StudentsT::new(0.0, 1.0, degrees_of_freedom)
            .map(|dist| (2.0 * (1.0 - dist.cdf(t_statistic))).clamp(0.0, 1.0))
            .map_err(|e| format!("t-distribution: {}", e))?;

        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);
        // Fails only when both thresholds are exceeded; see `TestConfig`.
        let is_constant_time = mean_ratio <= mean_ratio_max || t_statistic <= t_stat_threshold;

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            is_constant_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let times = [1.0, 2.0, 3.0, 4.0];
        let mean = TimingTester::mean(&times);
        assert_eq!(mean, 2.5);
        assert!((TimingTester::variance(&times, mean) - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_remove_outliers() {
        let times = [10.0, 11.0, 10.5, 10.2, 10.8, 500.0];
        let kept = TimingTester::remove_outliers(&times);
        assert!(!kept.contains(&500.0));
        assert_eq!(kept.len(), 5);
    }

    #[test]
    fn test_analyze_flags_clear_difference() {
        let tester = TimingTester::new(8, 1);
        let a = [100.0, 101.0, 99.0, 100.5, 100.2, 99.8, 100.1, 99.9];
        let b = [200.0, 201.0, 199.0, 200.5, 200.2, 199.8, 200.1, 199.9];
        let analysis = tester.analyze(&a, &b, 1.25, 4.5).unwrap();
        assert!(!analysis.is_constant_time);
        assert!(analysis.p_value < 0.001);

        let same = tester.analyze(&a, &a, 1.25, 4.5).unwrap();
        assert!(same.is_constant_time);
    }

    #[test]
    fn test_analyze_passes_small_significant_difference() {
        let tester = TimingTester::new(8, 1);
        let a = [100.0, 101.0, 99.0, 100.5, 100.2, 99.8, 100.1, 99.9];
        let b = a.map(|t| t * 1.05);
        let analysis = tester.analyze(&a, &b, 1.25, 4.5).unwrap();
        assert!(analysis.t_statistic > 4.5);
        assert!(analysis.mean_ratio < 1.25);
        assert!(analysis.is_constant_time);
    }
}
