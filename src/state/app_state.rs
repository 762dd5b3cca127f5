use crate::config::AppConfig;
use crate::pipeline::{self, Outcome};
use crate::render::report::{self, Report};
use crate::state::form::FormState;
use crate::state::theme::Theme;

pub const VERSION: &str = "0.1.0";

/// Everything the window shows. Nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub theme: Theme,
    pub form: FormState,
    /// Outcome and rendered report of the most recent click.
    pub last_run: Option<(Outcome, Report)>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            theme: config.theme,
            form: FormState::new(config.default_field_count),
            config,
            last_run: None,
        }
    }

    /// Run the whole pipeline on a fresh snapshot of the form. The previous
    /// result is replaced, never merged.
    pub fn analyze(&mut self) {
        let request = self.form.request();
        let outcome = pipeline::run(&request);
        let report = match &outcome {
            Outcome::Completed(analysis) => report::build_report(analysis, self.config.decimals),
            Outcome::Rejected(issues) => report::rejection_report(issues),
        };
        self.last_run = Some((outcome, report));
    }

    pub fn reset(&mut self) {
        self.form.reset(self.config.default_field_count);
        self.last_run = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
