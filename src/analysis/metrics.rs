//! Comparison metrics between matched model and observation samples.

/// Statistical comparison between two matched sample sets.
///
/// The first series is always the model and the second the observation.
/// Pairs where either side is non-finite (a degenerate-spectrum
/// timestamp, a data gap) are excluded before anything is computed;
/// `n_points` counts the pairs that survived.
#[derive(Clone, Copy, Debug)]
pub struct ComparisonMetrics {
    /// Bias (mean error): mean(model - obs)
    pub bias: f64,
    /// Root mean square error: sqrt(mean((model - obs)²))
    pub rmse: f64,
    /// Mean absolute error: mean(|model - obs|)
    pub mae: f64,
    /// Pearson correlation coefficient [-1, 1]
    pub correlation: f64,
    /// Number of finite matched pairs
    pub n_points: usize,
}

impl ComparisonMetrics {
    /// Compute metrics over the finite matched pairs.
    ///
    /// With no finite pairs every metric is NaN and `n_points` is zero;
    /// callers must treat that as "no comparison possible".
    ///
    /// # Panics
    ///
    /// Panics if the series have different lengths.
    pub fn compute(model: &[f64], observation: &[f64]) -> Self {
        assert_eq!(
            model.len(),
            observation.len(),
            "model and observation must have same length"
        );

        let pairs: Vec<(f64, f64)> = model
            .iter()
            .zip(observation.iter())
            .filter(|(m, o)| m.is_finite() && o.is_finite())
            .map(|(&m, &o)| (m, o))
            .collect();

        if pairs.is_empty() {
            return Self {
                bias: f64::NAN,
                rmse: f64::NAN,
                mae: f64::NAN,
                correlation: f64::NAN,
                n_points: 0,
            };
        }

        let n = pairs.len() as f64;
        let errors: Vec<f64> = pairs.iter().map(|(m, o)| m - o).collect();

        let bias = errors.iter().sum::<f64>() / n;
        let rmse = (errors.iter().map(|e| e * e).sum::<f64>() / n).sqrt();
        let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;

        let model_mean = pairs.iter().map(|(m, _)| m).sum::<f64>() / n;
        let obs_mean = pairs.iter().map(|(_, o)| o).sum::<f64>() / n;
        let model_var = pairs
            .iter()
            .map(|(m, _)| (m - model_mean).powi(2))
            .sum::<f64>()
            / n;
        let obs_var = pairs
            .iter()
            .map(|(_, o)| (o - obs_mean).powi(2))
            .sum::<f64>()
            / n;
        let covariance = pairs
            .iter()
            .map(|(m, o)| (m - model_mean) * (o - obs_mean))
            .sum::<f64>()
            / n;

        let correlation = if model_var > 1e-10 && obs_var > 1e-10 {
            covariance / (model_var.sqrt() * obs_var.sqrt())
        } else if model_var < 1e-10 && obs_var < 1e-10 {
            1.0 // both constant, treat as perfectly correlated
        } else {
            0.0
        };

        Self {
            bias,
            rmse,
            mae,
            correlation,
            n_points: pairs.len(),
        }
    }
}
