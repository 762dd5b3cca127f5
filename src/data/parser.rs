use thiserror::Error;

/// How the raw observations were collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// One free-text block per variable, one value per line. Blank lines are skipped.
    Columns,
    /// One single-value field per observation. Blank fields are errors.
    Fields,
}

impl Default for InputMode {
    fn default() -> Self {
        InputMode::Columns
    }
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Columns => "Paired columns",
            InputMode::Fields => "Individual fields",
        }
    }
}

/// Unvalidated observations for one variable.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSeries<'a> {
    /// A whole text block as typed into a text area.
    Text(&'a str),
    /// Discrete fields, one per observation, in row order.
    Fields(&'a [String]),
}

impl RawSeries<'_> {
    pub fn mode(&self) -> InputMode {
        match self {
            RawSeries::Text(_) => InputMode::Columns,
            RawSeries::Fields(_) => InputMode::Fields,
        }
    }

    /// Split into candidate lines. Text blocks are trimmed first, so leading
    /// and trailing blank lines never count.
    fn lines(&self) -> Vec<&str> {
        match self {
            RawSeries::Text(text) => text.trim().lines().collect(),
            RawSeries::Fields(fields) => fields.iter().map(String::as_str).collect(),
        }
    }
}

/// Which length check produced a [`ParseIssue::LengthMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStage {
    /// Raw line counts, before blank lines are dropped.
    Lines,
    /// Numeric value counts, after blank lines are dropped.
    Values,
}

/// A single reason the input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseIssue {
    #[error("{x_name} has {x_count} {stage} but {y_name} has {y_count}; enter the values in pairs")]
    LengthMismatch {
        x_name: String,
        y_name: String,
        x_count: usize,
        y_count: usize,
        stage: CountStage,
    },

    #[error("{variable} value error (row {index}): the field is empty")]
    EmptyValue { variable: String, index: usize },

    #[error("{variable} value error (line {index}): '{text}' is not a valid number")]
    NotANumber {
        variable: String,
        index: usize,
        text: String,
    },

    #[error("at least 2 valid data pairs are required, found {count}")]
    TooFewPairs { count: usize },
}

impl std::fmt::Display for CountStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountStage::Lines => f.write_str("lines"),
            CountStage::Values => f.write_str("valid values"),
        }
    }
}

/// Discriminant of a [`ParseIssue`], handy for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    EmptyValue,
    NotANumber,
    LengthMismatch,
    TooFewPairs,
}

impl ParseIssue {
    pub fn kind(&self) -> IssueKind {
        match self {
            ParseIssue::LengthMismatch { .. } => IssueKind::LengthMismatch,
            ParseIssue::EmptyValue { .. } => IssueKind::EmptyValue,
            ParseIssue::NotANumber { .. } => IssueKind::NotANumber,
            ParseIssue::TooFewPairs { .. } => IssueKind::TooFewPairs,
        }
    }
}

/// Two validated, position-paired numeric series.
///
/// Always holds at least two pairs and only finite values. The only way to
/// build one is [`ObservationPair::new`], which checks all of that.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationPair {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl ObservationPair {
    pub const MIN_PAIRS: usize = 2;

    /// Returns `None` unless both series have the same length of at least
    /// [`Self::MIN_PAIRS`] and every value is finite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Option<Self> {
        let valid = xs.len() == ys.len()
            && xs.len() >= Self::MIN_PAIRS
            && xs.iter().chain(ys.iter()).all(|v| v.is_finite());
        valid.then_some(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Parse one trimmed token as a finite real number.
///
/// Accepts plain decimals and scientific notation. `inf` and `NaN` parse in
/// Rust but are rejected here.
pub fn parse_value(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate both raw series and pair them up.
///
/// Gates run in order and each one stops the pipeline on failure: raw line
/// counts (text mode only), per-value parsing (collects every bad value in
/// both series), numeric counts, then the two-pair minimum.
pub fn parse(
    x_raw: &RawSeries<'_>,
    y_raw: &RawSeries<'_>,
    x_name: &str,
    y_name: &str,
) -> Result<ObservationPair, Vec<ParseIssue>> {
    let x_lines = x_raw.lines();
    let y_lines = y_raw.lines();

    let mismatch = |x_count, y_count, stage| ParseIssue::LengthMismatch {
        x_name: x_name.to_string(),
        y_name: y_name.to_string(),
        x_count,
        y_count,
        stage,
    };

    // Field mode always yields matching counts from the form, so the raw line
    // check only applies to free text.
    let text_mode = x_raw.mode() == InputMode::Columns && y_raw.mode() == InputMode::Columns;
    if text_mode && x_lines.len() != y_lines.len() {
        tracing::debug!(x = x_lines.len(), y = y_lines.len(), "line count gate failed");
        return Err(vec![mismatch(x_lines.len(), y_lines.len(), CountStage::Lines)]);
    }

    let mut issues = Vec::new();
    let xs = parse_lines(&x_lines, x_raw.mode(), x_name, &mut issues);
    let ys = parse_lines(&y_lines, y_raw.mode(), y_name, &mut issues);
    if !issues.is_empty() {
        tracing::debug!(count = issues.len(), "value gate failed");
        return Err(issues);
    }

    if xs.len() != ys.len() {
        tracing::debug!(x = xs.len(), y = ys.len(), "value count gate failed");
        return Err(vec![mismatch(xs.len(), ys.len(), CountStage::Values)]);
    }

    // Values are finite and the counts agree, so only the size can fail here.
    let count = xs.len();
    ObservationPair::new(xs, ys).ok_or_else(|| vec![ParseIssue::TooFewPairs { count }])
}

fn parse_lines(
    lines: &[&str],
    mode: InputMode,
    variable: &str,
    issues: &mut Vec<ParseIssue>,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            if mode == InputMode::Fields {
                issues.push(ParseIssue::EmptyValue {
                    variable: variable.to_string(),
                    index: i + 1,
                });
            }
            continue;
        }
        match parse_value(token) {
            Some(v) => values.push(v),
            None => issues.push(ParseIssue::NotANumber {
                variable: variable.to_string(),
                index: i + 1,
                text: token.to_string(),
            }),
        }
    }
    values
}
