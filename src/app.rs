use eframe::egui;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::pipeline::Outcome;
use crate::render::export;
use crate::state::app_state::{AppState, VERSION};
use crate::state::theme::Theme;
use crate::ui::input_panel::{self, FormAction};
use crate::ui::results_panel::{self, ResultsAction};

/// What to do when a screenshot arrives.
enum PendingScreenshot {
    SaveFile,
    Clipboard,
}

/// The main StatPair application.
pub struct StatPairApp {
    pub state: AppState,
    /// An error message shown in the footer until dismissed.
    pub error_message: Option<String>,
    /// Whether to show the About window (hidden menu).
    pub show_about: bool,
    /// Screen rect of the scatter plot in the last frame.
    plot_rect: Option<egui::Rect>,
    pending_screenshot: Option<PendingScreenshot>,
}

impl StatPairApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let state = AppState::new(config);

        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(22.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            egui::FontId::monospace(14.0),
        );

        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);

        ctx.set_style(style);
        ctx.set_visuals(themed_visuals(state.theme));

        Self {
            state,
            error_message: None,
            show_about: false,
            plot_rect: None,
            pending_screenshot: None,
        }
    }

    /// Crop the arrived screenshot to the plot and hand it to the pending
    /// export action.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let mut screenshot_image: Option<Arc<egui::ColorImage>> = None;
        ctx.input(|i| {
            for event in &i.raw.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    screenshot_image = Some(image.clone());
                }
            }
        });

        let Some(color_image) = screenshot_image else {
            return;
        };
        let Some(action) = self.pending_screenshot.take() else {
            return;
        };

        let capture = export::crop_screenshot(&color_image, self.plot_rect, ctx.pixels_per_point());
        let result = match action {
            PendingScreenshot::SaveFile => {
                match rfd::FileDialog::new()
                    .set_file_name("scatter_plot.png")
                    .add_filter("PNG Image", &["png"])
                    .save_file()
                {
                    Some(path) => export::save_png(capture, &path),
                    None => Ok(()),
                }
            }
            PendingScreenshot::Clipboard => export::copy_image(capture),
        };

        if let Err(e) = result {
            tracing::error!("Plot export failed: {e}");
            self.error_message = Some(e.to_string());
        }
    }

    fn copy_report(&mut self) {
        let Some((_, report)) = &self.state.last_run else {
            return;
        };
        if let Err(e) = export::copy_text(&report.to_plain_text()) {
            tracing::error!("Report copy failed: {e}");
            self.error_message = Some(e.to_string());
        }
    }
}

fn themed_visuals(theme: Theme) -> egui::Visuals {
    let mut vis = theme.visuals();
    vis.window_corner_radius = egui::CornerRadius::same(8);
    vis.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    vis.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    vis.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    vis.widgets.active.corner_radius = egui::CornerRadius::same(6);
    vis.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, egui::Color32::from_gray(160));
    vis
}

impl eframe::App for StatPairApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(themed_visuals(self.state.theme));

        // ------------------------------------------------------------------
        // 0. Handle screenshot events requested in a previous frame
        // ------------------------------------------------------------------
        if self.pending_screenshot.is_some() {
            self.handle_screenshot(ctx);
        }

        // --- Header panel ---
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let heading_response = ui.heading("StatPair");
                    heading_response.context_menu(|ui| {
                        if ui.button("About StatPair").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    ui.label(
                        egui::RichText::new(
                            "Descriptive statistics, correlation, regression and a scatter plot for two variables.",
                        )
                        .weak(),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_label = match self.state.theme {
                            Theme::Dark => "Light Mode",
                            Theme::Light => "Dark Mode",
                        };
                        if ui.button(theme_label).clicked() {
                            self.state.theme = self.state.theme.toggle();
                        }
                        ui.separator();
                        ui.small(format!("v{VERSION}"));
                    });
                });
            });

        // --- Footer panel ---
        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let status = match &self.state.last_run {
                        None => "Enter paired values and run the analysis.".to_string(),
                        Some((Outcome::Completed(a), _)) => format!("{} data pairs analyzed", a.pair.len()),
                        Some((Outcome::Rejected(issues), _)) => {
                            format!("{} input problem(s) found", issues.len())
                        }
                    };
                    ui.label(egui::RichText::new(status).weak());

                    if let Some(msg) = &self.error_message {
                        ui.separator();
                        ui.colored_label(self.state.theme.error_color(), msg);
                        if ui.small_button("dismiss").clicked() {
                            self.error_message = None;
                        }
                    }
                });
            });

        // --- Input form ---
        let mut form_action = FormAction::None;
        egui::SidePanel::left("input_panel")
            .resizable(true)
            .default_width(430.0)
            .min_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().id_salt("input_scroll").show(ui, |ui| {
                    form_action =
                        input_panel::show_input_panel(ui, &mut self.state.form, &self.state.config);
                });
            });

        match form_action {
            FormAction::Analyze => {
                self.error_message = None;
                self.state.analyze();
            }
            FormAction::Reset => {
                self.error_message = None;
                self.state.reset();
                tracing::debug!("Form reset");
            }
            FormAction::None => {}
        }

        // --- Results ---
        let mut results_action = ResultsAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().id_salt("results_scroll").show(ui, |ui| {
                match &self.state.last_run {
                    Some((outcome, report)) => {
                        results_action = results_panel::show_results(
                            ui,
                            outcome,
                            report,
                            &self.state.theme,
                            &self.state.config,
                            &mut self.plot_rect,
                        );
                    }
                    None => {
                        self.plot_rect = None;
                        ui.add_space(80.0);
                        ui.vertical_centered(|ui| {
                            ui.heading("Two-variable statistics");
                            ui.add_space(12.0);
                            ui.label(
                                egui::RichText::new(
                                    "Enter the X and Y values on the left, then click \"Run analysis\".",
                                )
                                .weak(),
                            );
                        });
                    }
                }
            });
        });

        match results_action {
            ResultsAction::SavePlot => {
                self.pending_screenshot = Some(PendingScreenshot::SaveFile);
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            }
            ResultsAction::CopyPlot => {
                self.pending_screenshot = Some(PendingScreenshot::Clipboard);
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            }
            ResultsAction::CopyReport => self.copy_report(),
            ResultsAction::None => {}
        }

        // ------------------------------------------------------------------
        // About window (hidden menu)
        // ------------------------------------------------------------------
        if self.show_about {
            egui::Window::new("About StatPair")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .default_width(340.0)
                .show(ctx, |ui| {
                    ui.heading("StatPair");
                    ui.label(format!("Version: {VERSION}"));
                    ui.add_space(4.0);
                    ui.label("A two-variable statistics calculator for the classroom.");
                    ui.add_space(10.0);
                    ui.label("Features:");
                    ui.label("  \u{2022} Mean, median, mode and sample standard deviation");
                    ui.label("  \u{2022} Pearson correlation with commentary");
                    ui.label("  \u{2022} Least-squares regression line");
                    ui.label("  \u{2022} Scatter plot with PNG export");
                    ui.add_space(10.0);
                    ui.label(format!(
                        "Results shown with {} decimals. Theme: {}.",
                        self.state.config.decimals,
                        self.state.theme.label()
                    ));
                    ui.label("Right-click the title for this menu.");
                });
        }
    }
}
