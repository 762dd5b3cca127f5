use crate::data::parser::ObservationPair;

/// Most frequent value(s) of a series.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Every value occurs exactly once.
    NoMode,
    Single { value: f64, count: usize },
    /// Several values tie for the highest count. Values are ascending.
    Multi { values: Vec<f64>, count: usize },
}

impl Mode {
    /// Count occurrences and report every value attaining the maximum.
    pub fn compute(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        // Run-length groups over the sorted values. `==` keeps -0.0 and 0.0
        // in one group even though total_cmp orders them apart.
        let mut groups: Vec<(f64, usize)> = Vec::new();
        for v in sorted {
            match groups.last_mut() {
                Some((last, count)) if *last == v => *count += 1,
                _ => groups.push((v, 1)),
            }
        }

        let max_count = groups.iter().map(|&(_, c)| c).max().unwrap_or(0);
        if max_count <= 1 {
            return Mode::NoMode;
        }

        // Groups come from sorted input, so ties stay ascending.
        let tied: Vec<f64> = groups
            .into_iter()
            .filter(|&(_, c)| c == max_count)
            .map(|(v, _)| v)
            .collect();

        if tied.len() == 1 {
            Mode::Single {
                value: tied[0],
                count: max_count,
            }
        } else {
            Mode::Multi {
                values: tied,
                count: max_count,
            }
        }
    }
}

/// Descriptive statistics for one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Sample standard deviation (n - 1 denominator). `None` below two values.
    pub std_dev: Option<f64>,
}

impl DescriptiveStats {
    /// Statistics of both columns. A pair is never empty, so this cannot fail.
    pub fn of_pair(pair: &ObservationPair) -> (Self, Self) {
        (Self::summarize(pair.xs()), Self::summarize(pair.ys()))
    }

    /// Callers guarantee `values` is non-empty.
    fn summarize(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        DescriptiveStats {
            count: values.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean: scaled_mean(values),
            median: middle(&sorted),
            mode: Mode::compute(values),
            std_dev: sample_std_dev(values),
        }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Power of two that brings the largest magnitude in `values` into [1, 2).
///
/// Dividing by it is exact for normal numbers, so sums taken over the scaled
/// values round exactly as the unscaled sums would, yet stay far from
/// overflow and underflow.
pub fn magnitude_scale(values: &[f64]) -> f64 {
    let largest = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let exponent = ((largest.to_bits() >> 52) & 0x7ff) as i64 - 1023;
    let exponent = exponent.clamp(-1022, 1023);
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

fn scaled_mean(values: &[f64]) -> f64 {
    let scale = magnitude_scale(values);
    let sum = values.iter().map(|v| v / scale).sum::<f64>();
    sum / values.len() as f64 * scale
}

fn middle(sorted: &[f64]) -> f64 {
    let count = sorted.len();
    if count % 2 == 0 {
        // Halve before adding so two huge values cannot overflow.
        sorted[count / 2 - 1] / 2.0 + sorted[count / 2] / 2.0
    } else {
        sorted[count / 2]
    }
}

/// `sqrt(sum((v - mean)^2) / (n - 1))`. Undefined for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let scale = magnitude_scale(values);
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
    let mean = scaled.iter().sum::<f64>() / scaled.len() as f64;
    let sum_sq = scaled.iter().map(|u| (u - mean).powi(2)).sum::<f64>();
    Some((sum_sq / (values.len() - 1) as f64).sqrt() * scale)
}
