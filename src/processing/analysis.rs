use crate::data::parser::ObservationPair;
use crate::processing::correlation::{CorrelationResult, Deviations};
use crate::processing::plot_spec::PlotSpec;
use crate::processing::regression::RegressionResult;
use crate::processing::statistics::DescriptiveStats;

/// Everything computed from one validated pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub desc_x: DescriptiveStats,
    pub desc_y: DescriptiveStats,
    pub correlation: CorrelationResult,
    pub regression: RegressionResult,
    pub plot: PlotSpec,
}

/// Run the statistics engine.
///
/// Total over every valid pair: constant columns and ties come back as result
/// variants, never as errors. Pure, so repeated calls give identical results.
pub fn analyze(pair: &ObservationPair, x_name: &str, y_name: &str) -> AnalysisResult {
    let (desc_x, desc_y) = DescriptiveStats::of_pair(pair);

    let deviations = Deviations::compute(pair);
    let correlation = CorrelationResult::compute(&deviations);
    let regression = RegressionResult::fit(&deviations);
    let plot = PlotSpec::build(pair, &regression, x_name, y_name);

    AnalysisResult {
        desc_x,
        desc_y,
        correlation,
        regression,
        plot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::correlation::{Strength, Trend};
    use crate::processing::plot_spec::PlotKind;
    use crate::processing::statistics::Mode;
    use proptest::prelude::*;

    fn pair(xs: &[f64], ys: &[f64]) -> ObservationPair {
        ObservationPair::new(xs.to_vec(), ys.to_vec()).unwrap()
    }

    #[test]
    fn linear_data_end_to_end() {
        let result = analyze(&pair(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), "X", "Y");
        assert_eq!(result.desc_x.mean, 2.0);
        assert_eq!(result.desc_y.median, 4.0);
        assert_eq!(result.desc_x.mode, Mode::NoMode);
        assert_eq!(result.correlation.strength(), Some(Strength::Strong));
        assert_eq!(result.correlation.trend(), Some(Trend::Positive));
        assert!(result.regression.is_line());
        assert_eq!(result.plot.kind, PlotKind::ScatterWithLine);
    }

    #[test]
    fn constant_x_end_to_end() {
        let result = analyze(&pair(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), "X", "Y");
        assert!(!result.correlation.available);
        assert_eq!(result.correlation.r, 0.0);
        assert_eq!(
            result.regression,
            RegressionResult::Degenerate {
                mean_x: 5.0,
                mean_y: 2.0
            }
        );
        assert_eq!(result.desc_x.std_dev, Some(0.0));
        assert_eq!(
            result.desc_x.mode,
            Mode::Single {
                value: 5.0,
                count: 3
            }
        );
        assert_eq!(result.plot.kind, PlotKind::ScatterFixedX);
    }

    #[test]
    fn both_columns_constant() {
        let result = analyze(&pair(&[1.0, 1.0], &[2.0, 2.0]), "X", "Y");
        assert!(!result.correlation.available);
        assert!(!result.regression.is_line());
    }

    #[test]
    fn every_variable_gets_a_std_dev() {
        let result = analyze(&pair(&[1.0, 4.0], &[0.0, -3.0]), "X", "Y");
        assert!(result.desc_x.std_dev.is_some());
        assert!(result.desc_y.std_dev.is_some());
    }

    #[test]
    fn huge_correlated_columns() {
        let values = [1e80, 2e80, 3e80];
        let result = analyze(&pair(&values, &values), "X", "Y");
        assert!(result.correlation.available);
        assert!((result.correlation.r - 1.0).abs() < 1e-12);
        assert_eq!(result.correlation.strength(), Some(Strength::Strong));
    }

    #[test]
    fn tiny_correlated_columns() {
        let values = [1e-100, 2e-100, 3e-100];
        let result = analyze(&pair(&values, &values), "X", "Y");
        assert!(result.correlation.available);
        assert!(result.regression.is_line());
    }

    #[test]
    fn x_near_the_float_limit_stays_finite() {
        let result = analyze(&pair(&[1e308, 1.5e308], &[1.0, 2.0]), "X", "Y");
        assert!(result.desc_x.mean.is_finite());
        assert!(result.desc_x.std_dev.is_some_and(f64::is_finite));
        assert!((result.correlation.r - 1.0).abs() < 1e-12);
        match result.regression {
            RegressionResult::Line { intercept, slope } => {
                assert!(intercept.is_finite() && slope.is_finite());
            }
            other => panic!("expected a line, got {other:?}"),
        }
        assert_eq!(result.plot.kind, PlotKind::ScatterWithLine);
    }

    fn magnitudes() -> impl Strategy<Value = f64> {
        (-300i32..300).prop_map(|e| 10f64.powi(e))
    }

    fn pairs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (2usize..40).prop_flat_map(|n| {
            (
                prop::collection::vec(-1.0e6..1.0e6f64, n),
                prop::collection::vec(-1.0e6..1.0e6f64, n),
            )
        })
    }

    proptest! {
        #[test]
        fn analyze_is_total_and_bounded((xs, ys) in pairs()) {
            let result = analyze(&pair(&xs, &ys), "X", "Y");
            prop_assert!(result.correlation.r >= -1.0 && result.correlation.r <= 1.0);
            prop_assert_eq!(result.desc_x.count, xs.len());
            prop_assert_eq!(result.plot.points.len(), xs.len());
            if !result.correlation.available {
                prop_assert_eq!(result.correlation.r, 0.0);
                prop_assert!(result.correlation.strength().is_none());
            }
        }

        #[test]
        fn analyze_is_idempotent((xs, ys) in pairs()) {
            let p = pair(&xs, &ys);
            let first = analyze(&p, "X", "Y");
            let second = analyze(&p, "X", "Y");
            prop_assert_eq!(first.correlation.r.to_bits(), second.correlation.r.to_bits());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn availability_tracks_constant_columns_at_any_magnitude(
            (xs, ys) in pairs(),
            x_scale in magnitudes(),
            y_scale in magnitudes(),
        ) {
            let xs: Vec<f64> = xs.iter().map(|x| x * x_scale).collect();
            let ys: Vec<f64> = ys.iter().map(|y| y * y_scale).collect();
            let result = analyze(&pair(&xs, &ys), "X", "Y");
            let x_constant = xs.iter().all(|&x| x == xs[0]);
            let y_constant = ys.iter().all(|&y| y == ys[0]);
            prop_assert!(result.correlation.r.is_finite());
            prop_assert!(result.correlation.r >= -1.0 && result.correlation.r <= 1.0);
            prop_assert_eq!(result.correlation.available, !x_constant && !y_constant);
            prop_assert_eq!(result.regression.is_line(), !x_constant);
        }

        #[test]
        fn small_integer_data_hits_ties_and_constants(
            xs in prop::collection::vec(0i32..3, 2..10),
            seed in 0i32..3,
        ) {
            let xs: Vec<f64> = xs.into_iter().map(f64::from).collect();
            let ys: Vec<f64> = xs.iter().map(|x| x * f64::from(seed)).collect();
            let result = analyze(&pair(&xs, &ys), "X", "Y");
            let x_constant = xs.iter().all(|&x| x == xs[0]);
            prop_assert_eq!(result.regression.is_line(), !x_constant);
        }
    }
}
