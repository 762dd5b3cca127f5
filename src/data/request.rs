use crate::data::parser::{self, InputMode, ObservationPair, ParseIssue, RawSeries};

pub const DEFAULT_X_NAME: &str = "X";
pub const DEFAULT_Y_NAME: &str = "Y";

/// Raw observations exactly as the form collected them.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Columns { x_text: String, y_text: String },
    Fields { x_fields: Vec<String>, y_fields: Vec<String> },
}

impl RawInput {
    pub fn mode(&self) -> InputMode {
        match self {
            RawInput::Columns { .. } => InputMode::Columns,
            RawInput::Fields { .. } => InputMode::Fields,
        }
    }
}

/// Everything one "Analyze" click needs, snapshotted from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub x_name: String,
    pub y_name: String,
    pub input: RawInput,
}

impl AnalysisRequest {
    /// Build a request, falling back to "X"/"Y" for blank variable names.
    pub fn new(x_name: &str, y_name: &str, input: RawInput) -> Self {
        Self {
            x_name: variable_name(x_name, DEFAULT_X_NAME),
            y_name: variable_name(y_name, DEFAULT_Y_NAME),
            input,
        }
    }

    pub fn parse(&self) -> Result<ObservationPair, Vec<ParseIssue>> {
        match &self.input {
            RawInput::Columns { x_text, y_text } => parser::parse(
                &RawSeries::Text(x_text),
                &RawSeries::Text(y_text),
                &self.x_name,
                &self.y_name,
            ),
            RawInput::Fields { x_fields, y_fields } => parser::parse(
                &RawSeries::Fields(x_fields),
                &RawSeries::Fields(y_fields),
                &self.x_name,
                &self.y_name,
            ),
        }
    }
}

/// Trimmed name, or `default` when blank.
pub fn variable_name(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_fall_back_to_defaults() {
        let req = AnalysisRequest::new(
            "  ",
            "",
            RawInput::Columns { x_text: String::new(), y_text: String::new() },
        );
        assert_eq!(req.x_name, "X");
        assert_eq!(req.y_name, "Y");
    }

    #[test]
    fn arbitrary_label_text_is_kept() {
        let req = AnalysisRequest::new(
            "키 (cm)",
            "몸무게",
            RawInput::Columns { x_text: String::new(), y_text: String::new() },
        );
        assert_eq!(req.x_name, "키 (cm)");
        assert_eq!(req.y_name, "몸무게");
    }

    #[test]
    fn issues_carry_the_request_names() {
        let req = AnalysisRequest::new(
            "Study hours",
            "Score",
            RawInput::Fields {
                x_fields: vec!["1".into(), "x".into()],
                y_fields: vec!["2".into(), "3".into()],
            },
        );
        let issues = req.parse().unwrap_err();
        assert_eq!(
            issues,
            vec![ParseIssue::NotANumber {
                variable: "Study hours".into(),
                index: 2,
                text: "x".into(),
            }]
        );
    }
}
