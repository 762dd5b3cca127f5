use crate::data::parser::InputMode;
use crate::data::request::{AnalysisRequest, RawInput, DEFAULT_X_NAME, DEFAULT_Y_NAME};

/// Widget-bound values of the input form.
///
/// The form owns no analysis state. Each click snapshots it into a fresh
/// [`AnalysisRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub x_name: String,
    pub y_name: String,
    pub mode: InputMode,
    pub x_text: String,
    pub y_text: String,
    /// Rows shown in field mode. The field vectors always have this length.
    field_count: usize,
    x_fields: Vec<String>,
    y_fields: Vec<String>,
}

impl FormState {
    pub fn new(field_count: usize) -> Self {
        Self {
            x_name: DEFAULT_X_NAME.to_string(),
            y_name: DEFAULT_Y_NAME.to_string(),
            mode: InputMode::default(),
            x_text: String::new(),
            y_text: String::new(),
            field_count,
            x_fields: vec![String::new(); field_count],
            y_fields: vec![String::new(); field_count],
        }
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Grow or shrink the field rows. Surviving rows keep their text.
    pub fn set_field_count(&mut self, count: usize) {
        self.field_count = count;
        self.x_fields.resize(count, String::new());
        self.y_fields.resize(count, String::new());
    }

    /// Mutable access to one row's X and Y fields, keyed by 0-based row.
    pub fn row_mut(&mut self, row: usize) -> Option<(&mut String, &mut String)> {
        let x = self.x_fields.get_mut(row)?;
        let y = self.y_fields.get_mut(row)?;
        Some((x, y))
    }

    /// Snapshot the current values for one analysis run.
    pub fn request(&self) -> AnalysisRequest {
        let input = match self.mode {
            InputMode::Columns => RawInput::Columns {
                x_text: self.x_text.clone(),
                y_text: self.y_text.clone(),
            },
            InputMode::Fields => RawInput::Fields {
                x_fields: self.x_fields.clone(),
                y_fields: self.y_fields.clone(),
            },
        };
        AnalysisRequest::new(&self.x_name, &self.y_name, input)
    }

    pub fn reset(&mut self, field_count: usize) {
        *self = Self::new(field_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_request_copies_text() {
        let mut form = FormState::new(3);
        form.x_text = "1\n2".into();
        form.y_text = "3\n4".into();
        let req = form.request();
        assert_eq!(
            req.input,
            RawInput::Columns {
                x_text: "1\n2".into(),
                y_text: "3\n4".into()
            }
        );
    }

    #[test]
    fn resizing_keeps_existing_rows() {
        let mut form = FormState::new(2);
        form.mode = InputMode::Fields;
        if let Some((x, y)) = form.row_mut(0) {
            *x = "1".into();
            *y = "2".into();
        }
        form.set_field_count(4);
        form.set_field_count(3);
        match form.request().input {
            RawInput::Fields { x_fields, y_fields } => {
                assert_eq!(x_fields, vec!["1", "", ""]);
                assert_eq!(y_fields, vec!["2", "", ""]);
            }
            other => panic!("expected fields, got {other:?}"),
        }
    }

    #[test]
    fn row_out_of_range() {
        let mut form = FormState::new(2);
        assert!(form.row_mut(2).is_none());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = FormState::new(5);
        form.x_name = "Age".into();
        form.x_text = "1".into();
        form.reset(4);
        assert_eq!(form, FormState::new(4));
    }
}
