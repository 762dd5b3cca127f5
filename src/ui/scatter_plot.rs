use egui_plot::{Legend, Line, LineStyle, Plot, Points};

use crate::config::AppConfig;
use crate::processing::plot_spec::{Overlay, PlotSpec};
use crate::render::report::{equation, fmt};
use crate::state::theme::Theme;

/// Draw the scatter plot described by `spec`. Returns the screen rect of the
/// chart (title included) so it can be cropped from a screenshot.
pub fn show_scatter_plot(
    ui: &mut egui::Ui,
    spec: &PlotSpec,
    theme: &Theme,
    config: &AppConfig,
) -> egui::Rect {
    let frame = egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(spec.title()).strong().size(15.0));
            ui.add_space(4.0);

            Plot::new("scatter_plot")
                .width(config.plot_width)
                .height(config.plot_height)
                .x_axis_label(spec.x_label.clone())
                .y_axis_label(spec.y_label.clone())
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.points(
                        Points::new(spec.points.clone())
                            .radius(4.0)
                            .color(theme.point_color())
                            .name("Data points"),
                    );

                    match spec.overlay {
                        Overlay::RegressionLine {
                            start,
                            end,
                            intercept,
                            slope,
                        } => {
                            let label = format!(
                                "Regression line ({})",
                                equation(intercept, slope, config.legend_decimals)
                            );
                            plot_ui.line(
                                Line::new(vec![start, end])
                                    .color(theme.line_color())
                                    .width(2.0)
                                    .name(label),
                            );
                        }
                        Overlay::VerticalLine { x, y_min, y_max } => {
                            let label = format!(
                                "X = {} ({})",
                                fmt(x, config.legend_decimals),
                                spec.x_label
                            );
                            plot_ui.line(
                                Line::new(vec![[x, y_min], [x, y_max]])
                                    .color(theme.line_color())
                                    .width(2.0)
                                    .style(LineStyle::dashed_loose())
                                    .name(label),
                            );
                        }
                        Overlay::None => {}
                    }
                });
        });

    frame.response.rect
}
