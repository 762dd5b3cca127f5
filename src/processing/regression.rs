use crate::processing::correlation::Deviations;

/// Least-squares fit of Y on X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegressionResult {
    /// Ŷ = intercept + slope · X
    Line { intercept: f64, slope: f64 },
    /// X has zero variance, so the relationship is a vertical line and the
    /// slope is undefined.
    Degenerate { mean_x: f64, mean_y: f64 },
}

impl RegressionResult {
    pub fn fit(dev: &Deviations) -> Self {
        match dev.least_squares() {
            Some((intercept, slope)) => RegressionResult::Line { intercept, slope },
            None => RegressionResult::Degenerate {
                mean_x: dev.mean_x,
                mean_y: dev.mean_y,
            },
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, RegressionResult::Line { .. })
    }
}
