use crate::data::parser::ObservationPair;
use crate::processing::regression::RegressionResult;

/// Fraction of the X span added on each side of the regression segment.
const RANGE_PADDING: f64 = 0.1;

/// Which chart the plotter should title and decorate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Scatter with the fitted regression line.
    ScatterWithLine,
    /// Scatter where every X is identical, with a vertical reference line.
    ScatterFixedX,
    /// Scatter only, used when the fitted line cannot be drawn.
    Scatter,
}

/// Extra geometry drawn over the points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// Segment of Ŷ = intercept + slope · X across the padded X range.
    RegressionLine {
        start: [f64; 2],
        end: [f64; 2],
        intercept: f64,
        slope: f64,
    },
    /// Vertical line at `x` from `y_min` to `y_max`.
    VerticalLine { x: f64, y_min: f64, y_max: f64 },
    None,
}

/// Everything the scatter plot needs. Pure data, no drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub points: Vec<[f64; 2]>,
    pub overlay: Overlay,
    pub kind: PlotKind,
    pub x_label: String,
    pub y_label: String,
}

impl PlotSpec {
    pub fn build(
        pair: &ObservationPair,
        regression: &RegressionResult,
        x_label: &str,
        y_label: &str,
    ) -> Self {
        let points: Vec<[f64; 2]> = pair.iter().map(|(x, y)| [x, y]).collect();
        let (x_min, x_max) = bounds(pair.xs());

        let (overlay, kind) = match *regression {
            RegressionResult::Line { intercept, slope } => {
                let (lo, hi) = padded_range(x_min, x_max);
                let start = [lo, intercept + slope * lo];
                let end = [hi, intercept + slope * hi];
                // A fit whose segment leaves the f64 range has nothing to draw.
                if start.iter().chain(&end).all(|v| v.is_finite()) {
                    let overlay = Overlay::RegressionLine {
                        start,
                        end,
                        intercept,
                        slope,
                    };
                    (overlay, PlotKind::ScatterWithLine)
                } else {
                    (Overlay::None, PlotKind::Scatter)
                }
            }
            RegressionResult::Degenerate { mean_x, .. } => {
                let (y_min, y_max) = bounds(pair.ys());
                let overlay = Overlay::VerticalLine {
                    x: mean_x,
                    y_min,
                    y_max,
                };
                (overlay, PlotKind::ScatterFixedX)
            }
        };

        PlotSpec {
            points,
            overlay,
            kind,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }

    pub fn title(&self) -> String {
        match self.kind {
            PlotKind::ScatterWithLine => format!(
                "Scatter plot and regression line of [{}] and [{}]",
                self.x_label, self.y_label
            ),
            PlotKind::ScatterFixedX => format!("Scatter plot with fixed [{}]", self.x_label),
            PlotKind::Scatter => format!(
                "Scatter plot of [{}] and [{}]",
                self.x_label, self.y_label
            ),
        }
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

/// X range for the regression segment, widened by 10% of the span on each
/// side. A zero span falls back to one unit either side.
pub fn padded_range(min: f64, max: f64) -> (f64, f64) {
    if max == min {
        return (min - 1.0, min + 1.0);
    }
    // Scale before subtracting so a span across the whole f64 range cannot
    // overflow.
    let pad = max * RANGE_PADDING - min * RANGE_PADDING;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::correlation::Deviations;

    fn spec(xs: &[f64], ys: &[f64]) -> PlotSpec {
        let pair = ObservationPair::new(xs.to_vec(), ys.to_vec()).unwrap();
        let reg = RegressionResult::fit(&Deviations::compute(&pair));
        PlotSpec::build(&pair, &reg, "Hours", "Score")
    }

    #[test]
    fn line_segment_spans_padded_range() {
        let plot = spec(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert_eq!(plot.kind, PlotKind::ScatterWithLine);
        match plot.overlay {
            Overlay::RegressionLine { start, end, .. } => {
                assert!((start[0] - 0.8).abs() < 1e-12);
                assert!((end[0] - 3.2).abs() < 1e-12);
                assert!((start[1] - 1.6).abs() < 1e-12);
                assert!((end[1] - 6.4).abs() < 1e-12);
            }
            other => panic!("expected a regression line, got {other:?}"),
        }
    }

    #[test]
    fn points_keep_input_order() {
        let plot = spec(&[3.0, 1.0, 2.0], &[9.0, 1.0, 4.0]);
        assert_eq!(plot.points, vec![[3.0, 9.0], [1.0, 1.0], [2.0, 4.0]]);
    }

    #[test]
    fn constant_x_draws_vertical_line() {
        let plot = spec(&[5.0, 5.0, 5.0], &[3.0, 1.0, 2.0]);
        assert_eq!(plot.kind, PlotKind::ScatterFixedX);
        assert_eq!(
            plot.overlay,
            Overlay::VerticalLine {
                x: 5.0,
                y_min: 1.0,
                y_max: 3.0
            }
        );
        assert_eq!(plot.title(), "Scatter plot with fixed [Hours]");
    }

    #[test]
    fn tiny_distinct_x_gets_a_regression_line() {
        let plot = spec(&[1e-170, 2e-170], &[1.0, 3.0]);
        assert_eq!(plot.kind, PlotKind::ScatterWithLine);
        assert!(matches!(plot.overlay, Overlay::RegressionLine { .. }));
    }

    #[test]
    fn unrepresentable_line_falls_back_to_plain_scatter() {
        let pair = ObservationPair::new(vec![0.0, 1.0], vec![1.0, 2.0]).unwrap();
        let reg = RegressionResult::Line {
            intercept: 0.0,
            slope: f64::INFINITY,
        };
        let plot = PlotSpec::build(&pair, &reg, "A", "B");
        assert_eq!(plot.kind, PlotKind::Scatter);
        assert_eq!(plot.overlay, Overlay::None);
        assert_eq!(plot.title(), "Scatter plot of [A] and [B]");
    }

    #[test]
    fn padding_a_full_range_span_stays_finite() {
        let (lo, hi) = padded_range(-1e308, 1e308);
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo < -1e308 && hi > 1e308);
    }

    #[test]
    fn zero_span_falls_back_to_unit_padding() {
        assert_eq!(padded_range(4.0, 4.0), (3.0, 5.0));
        assert_eq!(padded_range(0.0, 10.0), (-1.0, 11.0));
    }

    #[test]
    fn axis_labels_are_variable_names() {
        let plot = spec(&[1.0, 2.0], &[1.0, 3.0]);
        assert_eq!(plot.x_label, "Hours");
        assert_eq!(plot.y_label, "Score");
        assert_eq!(
            plot.title(),
            "Scatter plot and regression line of [Hours] and [Score]"
        );
    }
}
