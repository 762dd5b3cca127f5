//! Turns an analysis outcome into sectioned, human-readable text.
//!
//! Formatting only: every number shown here was computed by the engine.
//! Rounding to the configured decimals happens here and nowhere else.

use crate::data::parser::{IssueKind, ParseIssue};
use crate::pipeline::Analysis;
use crate::processing::correlation::{CorrelationResult, Trend};
use crate::processing::regression::RegressionResult;
use crate::processing::statistics::{DescriptiveStats, Mode};

/// How a line should be emphasized by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// A computed value the student will compare against.
    Value,
    Info,
    Note,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub tone: Tone,
    pub text: String,
}

impl ReportLine {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<ReportLine>,
}

impl Section {
    fn new(heading: &str) -> Self {
        Self {
            heading: heading.to_string(),
            lines: Vec::new(),
        }
    }

    fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.lines.push(ReportLine::new(tone, text));
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// Plain-text rendering for the clipboard.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str("## ");
            out.push_str(&section.heading);
            out.push('\n');
            for line in &section.lines {
                out.push_str(&line.text);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

pub const INPUT_SECTION: &str = "Input data";
pub const MEAN_SECTION: &str = "Mean";
pub const MEDIAN_SECTION: &str = "Median";
pub const MODE_SECTION: &str = "Mode";
pub const STD_DEV_SECTION: &str = "Standard deviation";
pub const CORRELATION_SECTION: &str = "Correlation coefficient (r)";
pub const REGRESSION_SECTION: &str = "Regression equation";
pub const SCATTER_SECTION: &str = "Scatter plot";
pub const ERRORS_SECTION: &str = "Input errors";

/// Full report for a completed analysis.
pub fn build_report(analysis: &Analysis, decimals: usize) -> Report {
    let x = analysis.x_name.as_str();
    let y = analysis.y_name.as_str();
    let result = &analysis.result;

    let mut input = Section::new(INPUT_SECTION);
    input.push(
        Tone::Success,
        "Input validated. Running the analysis.",
    );
    input.push(
        Tone::Plain,
        format!("{x} ({} values): {}", analysis.pair.len(), echo(analysis.pair.xs())),
    );
    input.push(
        Tone::Plain,
        format!("{y} ({} values): {}", analysis.pair.len(), echo(analysis.pair.ys())),
    );

    let mut mean = Section::new(MEAN_SECTION);
    mean.push(Tone::Value, format!("Mean of {x} (X̄): {}", fmt(result.desc_x.mean, decimals)));
    mean.push(Tone::Value, format!("Mean of {y} (Ȳ): {}", fmt(result.desc_y.mean, decimals)));
    mean.push(
        Tone::Note,
        "The mean is the sum of all values divided by their count. It marks the center of the data.",
    );

    let mut median = Section::new(MEDIAN_SECTION);
    median.push(Tone::Value, format!("Median of {x}: {}", fmt(result.desc_x.median, decimals)));
    median.push(Tone::Value, format!("Median of {y}: {}", fmt(result.desc_y.median, decimals)));
    median.push(
        Tone::Note,
        "The median is the middle value once the data is sorted. Extreme values affect it less than the mean.",
    );

    let mut mode = Section::new(MODE_SECTION);
    push_mode(&mut mode, x, &result.desc_x);
    push_mode(&mut mode, y, &result.desc_y);
    mode.push(
        Tone::Note,
        "The mode is the most frequent value. There can be several modes, or none at all.",
    );

    let mut spread = Section::new(STD_DEV_SECTION);
    push_std_dev(&mut spread, x, "Sx", &result.desc_x, decimals);
    push_std_dev(&mut spread, y, "Sy", &result.desc_y, decimals);
    spread.push(
        Tone::Note,
        "The standard deviation measures how far the data spreads out from the mean.",
    );

    let mut correlation = Section::new(CORRELATION_SECTION);
    push_correlation(&mut correlation, x, y, &result.correlation, decimals);

    let mut regression = Section::new(REGRESSION_SECTION);
    push_regression(&mut regression, x, y, &result.regression, decimals);

    let mut scatter = Section::new(SCATTER_SECTION);
    scatter.push(
        Tone::Note,
        "A scatter plot draws each (X, Y) pair as one point, so you can see at a glance whether the points rise, fall, or scatter.",
    );
    scatter.push(
        Tone::Note,
        "Use \"Save plot as PNG\" below the chart to attach it to a report.",
    );
    scatter.push(Tone::Plain, analysis.result.plot.title());

    Report {
        sections: vec![
            input,
            mean,
            median,
            mode,
            spread,
            correlation,
            regression,
            scatter,
        ],
    }
}

/// Report for rejected input: every issue, then a stop notice.
pub fn rejection_report(issues: &[ParseIssue]) -> Report {
    let mut section = Section::new(ERRORS_SECTION);
    for issue in issues {
        section.push(Tone::Error, issue.to_string());
    }
    let stop = match issues.first().map(ParseIssue::kind) {
        Some(IssueKind::LengthMismatch) => "Data count mismatch. Analysis stopped.",
        Some(IssueKind::TooFewPairs) => "Not enough data. Analysis stopped.",
        _ => "The input data has errors. Analysis stopped.",
    };
    section.push(Tone::Warning, stop);
    Report {
        sections: vec![section],
    }
}

fn push_mode(section: &mut Section, name: &str, stats: &DescriptiveStats) {
    match &stats.mode {
        Mode::NoMode => section.push(
            Tone::Info,
            format!("{name}: every value appears only once, so there is no mode."),
        ),
        Mode::Single { value, count } => {
            section.push(Tone::Value, format!("Mode of {name}: {value} (count: {count})"))
        }
        Mode::Multi { values, count } => {
            section.push(
                Tone::Value,
                format!("Mode of {name}: {} (count: {count})", echo(values)),
            );
            section.push(Tone::Info, "There is more than one mode.");
        }
    }
}

fn push_std_dev(
    section: &mut Section,
    name: &str,
    symbol: &str,
    stats: &DescriptiveStats,
    decimals: usize,
) {
    match stats.std_dev {
        Some(sd) => section.push(
            Tone::Value,
            format!("Standard deviation of {name} ({symbol}): {}", fmt(sd, decimals)),
        ),
        None => section.push(
            Tone::Info,
            format!(
                "Standard deviation of {name}: not enough data ({} values) to compute",
                stats.count
            ),
        ),
    }
}

fn push_correlation(
    section: &mut Section,
    x: &str,
    y: &str,
    correlation: &CorrelationResult,
    decimals: usize,
) {
    section.push(
        Tone::Value,
        format!(
            "Correlation coefficient of {x} and {y}: r = {}",
            fmt(correlation.r, decimals)
        ),
    );

    let Some(strength) = correlation.strength() else {
        section.push(
            Tone::Info,
            "All values of at least one variable are identical, so the correlation coefficient cannot be computed.",
        );
        return;
    };

    section.push(
        Tone::Info,
        format!("{} correlation", capitalize(strength.label())),
    );
    match correlation.trend() {
        Some(Trend::Positive) => section.push(
            Tone::Info,
            format!(
                "{}: when one variable increases, the other tends to increase.",
                capitalize(Trend::Positive.label())
            ),
        ),
        Some(Trend::Negative) => section.push(
            Tone::Info,
            format!(
                "{}: when one variable increases, the other tends to decrease.",
                capitalize(Trend::Negative.label())
            ),
        ),
        None => {}
    }
}

fn push_regression(
    section: &mut Section,
    x: &str,
    y: &str,
    regression: &RegressionResult,
    decimals: usize,
) {
    section.push(
        Tone::Note,
        "The regression equation is the straight line that best fits the relationship between X and Y. Use it to predict Y from a known X.",
    );
    match *regression {
        RegressionResult::Line { intercept, slope }
            if !(intercept.is_finite() && slope.is_finite()) =>
        {
            section.push(
                Tone::Warning,
                "The fitted line is too steep or too far from the origin to write down with these values.",
            );
        }
        RegressionResult::Line { intercept, slope } => {
            section.push(
                Tone::Value,
                format!("Regression equation: {}", equation(intercept, slope, decimals)),
            );
            section.push(
                Tone::Note,
                format!("(X is '{x}' and Ŷ is the predicted value of '{y}')"),
            );
        }
        RegressionResult::Degenerate { mean_x, mean_y } => {
            section.push(
                Tone::Warning,
                format!("All {x} values are identical, so no regression line can be computed (vertical line)."),
            );
            section.push(
                Tone::Value,
                format!(
                    "'{x}' is fixed at {}, and the mean of '{y}' is {}",
                    fmt(mean_x, decimals),
                    fmt(mean_y, decimals)
                ),
            );
        }
    }
}

/// `Ŷ = a + bX`, written with a minus sign when the slope is negative.
pub fn equation(intercept: f64, slope: f64, decimals: usize) -> String {
    let sign = if slope < 0.0 { '-' } else { '+' };
    format!(
        "Ŷ = {} {sign} {}X",
        fmt(intercept, decimals),
        fmt(slope.abs(), decimals)
    )
}

/// Round for display. Negative zero prints as zero.
pub fn fmt(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Raw values in input order, unrounded.
pub fn echo(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::request::{AnalysisRequest, RawInput};
    use crate::pipeline::{run, Outcome};

    fn analysis(x: &str, y: &str) -> Analysis {
        let req = AnalysisRequest::new(
            "Hours",
            "Score",
            RawInput::Columns {
                x_text: x.into(),
                y_text: y.into(),
            },
        );
        match run(&req) {
            Outcome::Completed(a) => a,
            Outcome::Rejected(issues) => panic!("unexpected issues {issues:?}"),
        }
    }

    fn texts(report: &Report, heading: &str) -> Vec<String> {
        report
            .sections
            .iter()
            .find(|s| s.heading == heading)
            .map(|s| s.lines.iter().map(|l| l.text.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn rounds_to_configured_decimals() {
        let report = build_report(&analysis("1\n2\n3\n4\n5", "2\n4\n5\n4\n5"), 4);
        let spread = texts(&report, STD_DEV_SECTION);
        assert_eq!(spread[0], "Standard deviation of Hours (Sx): 1.5811");
        let regression = texts(&report, REGRESSION_SECTION);
        assert!(regression.contains(&"Regression equation: Ŷ = 2.2000 + 0.6000X".to_string()));
    }

    #[test]
    fn echoes_input_in_order() {
        let report = build_report(&analysis("3\n1", "2.5\n4"), 4);
        let input = texts(&report, INPUT_SECTION);
        assert_eq!(input[1], "Hours (2 values): [3, 1]");
        assert_eq!(input[2], "Score (2 values): [2.5, 4]");
    }

    #[test]
    fn perfect_correlation_commentary() {
        let report = build_report(&analysis("1\n2\n3", "2\n4\n6"), 4);
        let lines = texts(&report, CORRELATION_SECTION);
        assert_eq!(lines[0], "Correlation coefficient of Hours and Score: r = 1.0000");
        assert_eq!(lines[1], "Strong correlation");
        assert!(lines[2].starts_with("Positive trend"));
    }

    #[test]
    fn constant_x_suppresses_commentary() {
        let report = build_report(&analysis("5\n5\n5", "1\n2\n3"), 4);
        let lines = texts(&report, CORRELATION_SECTION);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("r = 0.0000"));
        assert!(lines[1].contains("cannot be computed"));

        let regression = texts(&report, REGRESSION_SECTION);
        assert!(regression
            .iter()
            .any(|l| l == "'Hours' is fixed at 5.0000, and the mean of 'Score' is 2.0000"));
    }

    #[test]
    fn multiple_modes_are_flagged() {
        let report = build_report(&analysis("1\n1\n2\n2\n3", "1\n2\n3\n4\n5"), 4);
        let lines = texts(&report, MODE_SECTION);
        assert_eq!(lines[0], "Mode of Hours: [1, 2] (count: 2)");
        assert_eq!(lines[1], "There is more than one mode.");
        assert!(lines[2].contains("no mode"));
    }

    #[test]
    fn tiny_distinct_x_gets_an_equation() {
        let report = build_report(&analysis("1e-170\n2e-170", "1\n3"), 4);
        let regression = texts(&report, REGRESSION_SECTION);
        assert!(regression.iter().any(|l| l.starts_with("Regression equation: ")));
        assert!(!regression.iter().any(|l| l.contains("identical")));
    }

    #[test]
    fn huge_values_never_print_nan() {
        let report = build_report(&analysis("1e308\n1.5e308", "1\n2"), 4);
        let text = report.to_plain_text();
        assert!(!text.contains("NaN"));
        assert!(text.contains("Strong correlation"));
    }

    #[test]
    fn unrepresentable_slope_is_explained() {
        let a = analysis("0\n1e-300", "0\n1e300");
        assert_eq!(a.result.plot.kind, crate::processing::plot_spec::PlotKind::Scatter);
        let report = build_report(&a, 4);
        let regression = texts(&report, REGRESSION_SECTION);
        assert!(regression.iter().any(|l| l.contains("too steep")));
        assert!(!regression.iter().any(|l| l.starts_with("Regression equation: ")));
    }

    #[test]
    fn negative_slope_equation() {
        assert_eq!(equation(10.0, -2.5, 2), "Ŷ = 10.00 - 2.50X");
        assert_eq!(equation(-0.00001, 1.0, 2), "Ŷ = 0.00 + 1.00X");
    }

    #[test]
    fn rejection_lists_every_issue() {
        let issues = vec![
            ParseIssue::NotANumber {
                variable: "X".into(),
                index: 1,
                text: "a".into(),
            },
            ParseIssue::NotANumber {
                variable: "Y".into(),
                index: 2,
                text: "b".into(),
            },
        ];
        let report = rejection_report(&issues);
        let lines = texts(&report, ERRORS_SECTION);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "The input data has errors. Analysis stopped.");
        assert_eq!(report.sections.len(), 1);
    }

    #[test]
    fn plain_text_has_headings() {
        let report = rejection_report(&[ParseIssue::TooFewPairs { count: 1 }]);
        let text = report.to_plain_text();
        assert!(text.starts_with("## Input errors\n"));
        assert!(text.contains("Not enough data. Analysis stopped."));
    }
}
