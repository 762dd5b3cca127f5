use crate::data::parser::{ObservationPair, ParseIssue};
use crate::data::request::AnalysisRequest;
use crate::processing::analysis::{analyze, AnalysisResult};

/// A successful run: the validated input plus everything computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub x_name: String,
    pub y_name: String,
    pub pair: ObservationPair,
    pub result: AnalysisResult,
}

/// Result of one "Analyze" click.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed(Analysis),
    /// Input was rejected; no partial analysis exists.
    Rejected(Vec<ParseIssue>),
}

/// Parse the request and, if it validates, analyze it.
pub fn run(request: &AnalysisRequest) -> Outcome {
    let pair = match request.parse() {
        Ok(pair) => pair,
        Err(issues) => {
            tracing::warn!(
                mode = ?request.input.mode(),
                issues = issues.len(),
                "input rejected"
            );
            return Outcome::Rejected(issues);
        }
    };

    let result = analyze(&pair, &request.x_name, &request.y_name);
    tracing::info!(
        pairs = pair.len(),
        correlation_available = result.correlation.available,
        regression = if result.regression.is_line() { "line" } else { "degenerate" },
        "analysis complete"
    );

    Outcome::Completed(Analysis {
        x_name: request.x_name.clone(),
        y_name: request.y_name.clone(),
        pair,
        result,
    })
}
