use crate::data::parser::ObservationPair;
use crate::processing::statistics::magnitude_scale;

/// Sums of deviation products around the two means.
///
/// Correlation and regression both start from these, so they are computed
/// once per analysis. Each column is first divided by its power-of-two
/// [`magnitude_scale`], which is exact, so the sums neither overflow for huge
/// inputs nor underflow for tiny ones. A scaled sum of squares is zero exactly
/// when its column is constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviations {
    pub mean_x: f64,
    pub mean_y: f64,
    scale_x: f64,
    scale_y: f64,
    /// Means of the scaled columns.
    unit_mean_x: f64,
    unit_mean_y: f64,
    /// Σ (u - ū)(v - v̄) over the scaled columns.
    unit_sxy: f64,
    unit_sxx: f64,
    unit_syy: f64,
}

impl Deviations {
    pub fn compute(pair: &ObservationPair) -> Self {
        let n = pair.len() as f64;
        let scale_x = magnitude_scale(pair.xs());
        let scale_y = magnitude_scale(pair.ys());
        let unit_mean_x = pair.xs().iter().map(|x| x / scale_x).sum::<f64>() / n;
        let unit_mean_y = pair.ys().iter().map(|y| y / scale_y).sum::<f64>() / n;

        let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
        for (x, y) in pair.iter() {
            let dx = x / scale_x - unit_mean_x;
            let dy = y / scale_y - unit_mean_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        Deviations {
            mean_x: unit_mean_x * scale_x,
            mean_y: unit_mean_y * scale_y,
            scale_x,
            scale_y,
            unit_mean_x,
            unit_mean_y,
            unit_sxy: sxy,
            unit_sxx: sxx,
            unit_syy: syy,
        }
    }

    pub fn x_is_constant(&self) -> bool {
        self.unit_sxx == 0.0
    }

    pub fn y_is_constant(&self) -> bool {
        self.unit_syy == 0.0
    }

    /// Pearson r, or `None` when either column is constant.
    pub fn pearson(&self) -> Option<f64> {
        if self.x_is_constant() || self.y_is_constant() {
            return None;
        }
        Some(self.unit_sxy / (self.unit_sxx.sqrt() * self.unit_syy.sqrt()))
    }

    /// Least-squares `(intercept, slope)`, or `None` when X is constant.
    ///
    /// Both are worked out on the scaled columns and only then brought back to
    /// input units, so they are finite whenever the true values fit in an f64.
    pub fn least_squares(&self) -> Option<(f64, f64)> {
        if self.x_is_constant() {
            return None;
        }
        let unit_slope = self.unit_sxy / self.unit_sxx;
        let intercept = (self.unit_mean_y - unit_slope * self.unit_mean_x) * self.scale_y;
        let slope = unit_slope * (self.scale_y / self.scale_x);
        Some((intercept, slope))
    }
}

/// Qualitative strength band of |r|.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl Strength {
    /// Bands are checked from the top down; the first match wins.
    pub fn classify(r: f64) -> Self {
        let magnitude = r.abs();
        if magnitude >= 0.7 {
            Strength::Strong
        } else if magnitude >= 0.3 {
            Strength::Moderate
        } else if magnitude >= 0.1 {
            Strength::Weak
        } else {
            Strength::Negligible
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Strong => "strong",
            Strength::Moderate => "moderate",
            Strength::Weak => "weak",
            Strength::Negligible => "negligible",
        }
    }
}

/// Direction of the relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    /// `None` when r is exactly zero.
    pub fn from_sign(r: f64) -> Option<Self> {
        if r > 0.0 {
            Some(Trend::Positive)
        } else if r < 0.0 {
            Some(Trend::Negative)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Positive => "positive trend",
            Trend::Negative => "negative trend",
        }
    }
}

/// Pearson correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationResult {
    /// In [-1, 1]. Reported as 0 when unavailable.
    pub r: f64,
    /// False when at least one series is constant.
    pub available: bool,
}

impl CorrelationResult {
    pub fn compute(dev: &Deviations) -> Self {
        match dev.pearson() {
            // Rounding can push |r| a hair past 1 on perfectly linear data.
            Some(r) => CorrelationResult {
                r: r.clamp(-1.0, 1.0),
                available: true,
            },
            None => CorrelationResult {
                r: 0.0,
                available: false,
            },
        }
    }

    pub fn strength(&self) -> Option<Strength> {
        self.available.then(|| Strength::classify(self.r))
    }

    pub fn trend(&self) -> Option<Trend> {
        if self.available {
            Trend::from_sign(self.r)
        } else {
            None
        }
    }
}
