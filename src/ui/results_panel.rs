use egui_extras::{Column, TableBuilder};

use crate::config::AppConfig;
use crate::pipeline::{Analysis, Outcome};
use crate::render::report::{self, fmt, Report, ReportLine, Tone};
use crate::state::theme::Theme;
use crate::ui::scatter_plot::show_scatter_plot;

/// Export requests raised from the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    None,
    SavePlot,
    CopyPlot,
    CopyReport,
}

/// Render the last run. `plot_rect` receives the chart rect when a plot was
/// drawn this frame.
pub fn show_results(
    ui: &mut egui::Ui,
    outcome: &Outcome,
    report: &Report,
    theme: &Theme,
    config: &AppConfig,
    plot_rect: &mut Option<egui::Rect>,
) -> ResultsAction {
    let mut action = ResultsAction::None;
    *plot_rect = None;

    ui.horizontal(|ui| {
        ui.heading("Analysis results");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Copy report").clicked() {
                action = ResultsAction::CopyReport;
            }
        });
    });
    ui.separator();

    let analysis = match outcome {
        Outcome::Completed(analysis) => Some(analysis),
        Outcome::Rejected(_) => None,
    };

    for section in &report.sections {
        ui.add_space(6.0);
        ui.label(egui::RichText::new(&section.heading).strong().size(17.0));
        ui.add_space(2.0);
        for line in &section.lines {
            show_line(ui, line, theme);
        }

        if let Some(analysis) = analysis {
            match section.heading.as_str() {
                report::STD_DEV_SECTION => {
                    ui.add_space(6.0);
                    show_summary_table(ui, analysis, config.decimals);
                }
                report::SCATTER_SECTION => {
                    ui.add_space(6.0);
                    *plot_rect = Some(show_scatter_plot(ui, &analysis.result.plot, theme, config));
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        if ui.button("Save plot as PNG").clicked() {
                            action = ResultsAction::SavePlot;
                        }
                        if ui.button("Copy plot").clicked() {
                            action = ResultsAction::CopyPlot;
                        }
                    });
                }
                _ => {}
            }
        }
        ui.separator();
    }

    if analysis.is_some() {
        ui.add_space(6.0);
        ui.label(egui::RichText::new("--- Analysis complete ---").weak());
    }

    action
}

fn show_line(ui: &mut egui::Ui, line: &ReportLine, theme: &Theme) {
    let text = egui::RichText::new(&line.text);
    let text = match line.tone {
        Tone::Plain => text,
        Tone::Value => text.strong(),
        Tone::Info => text.color(theme.info_color()),
        Tone::Note => text.italics().weak(),
        Tone::Success => text.color(theme.success_color()),
        Tone::Warning => text.color(theme.warning_color()),
        Tone::Error => text.color(theme.error_color()),
    };
    ui.add(egui::Label::new(text).wrap());
}

/// Side-by-side table of both variables' descriptive statistics.
fn show_summary_table(ui: &mut egui::Ui, analysis: &Analysis, decimals: usize) {
    let x = &analysis.result.desc_x;
    let y = &analysis.result.desc_y;
    let opt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| fmt(v, decimals));

    let rows: [(&str, String, String); 7] = [
        ("Count", x.count.to_string(), y.count.to_string()),
        ("Mean", fmt(x.mean, decimals), fmt(y.mean, decimals)),
        ("Median", fmt(x.median, decimals), fmt(y.median, decimals)),
        ("Std. deviation", opt(x.std_dev), opt(y.std_dev)),
        ("Minimum", fmt(x.min, decimals), fmt(y.min, decimals)),
        ("Maximum", fmt(x.max, decimals), fmt(y.max, decimals)),
        ("Range", fmt(x.range(), decimals), fmt(y.range(), decimals)),
    ];

    ui.push_id("summary_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(130.0))
            .columns(Column::auto().at_least(110.0), 2)
            .vscroll(false)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Statistic");
                });
                header.col(|ui| {
                    ui.strong(analysis.x_name.as_str());
                });
                header.col(|ui| {
                    ui.strong(analysis.y_name.as_str());
                });
            })
            .body(|mut body| {
                for (label, xv, yv) in &rows {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(*label);
                        });
                        row.col(|ui| {
                            ui.monospace(xv.as_str());
                        });
                        row.col(|ui| {
                            ui.monospace(yv.as_str());
                        });
                    });
                }
            });
    });
}
