use crate::config::AppConfig;
use crate::data::parser::InputMode;
use crate::data::request::{variable_name, DEFAULT_X_NAME, DEFAULT_Y_NAME};
use crate::state::form::FormState;

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Analyze,
    Reset,
}

/// Draw the data-entry form and report which button, if any, was clicked.
pub fn show_input_panel(ui: &mut egui::Ui, form: &mut FormState, config: &AppConfig) -> FormAction {
    let mut action = FormAction::None;

    ui.heading("Data input");
    ui.add_space(6.0);

    egui::Grid::new("variable_names")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("X variable name:");
            ui.add(
                egui::TextEdit::singleline(&mut form.x_name)
                    .hint_text(DEFAULT_X_NAME)
                    .desired_width(200.0),
            );
            ui.end_row();

            ui.label("Y variable name:");
            ui.add(
                egui::TextEdit::singleline(&mut form.y_name)
                    .hint_text(DEFAULT_Y_NAME)
                    .desired_width(200.0),
            );
            ui.end_row();
        });

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Input mode:");
        for mode in [InputMode::Columns, InputMode::Fields] {
            ui.selectable_value(&mut form.mode, mode, mode.label());
        }
    });
    ui.add_space(6.0);

    let x_label = variable_name(&form.x_name, DEFAULT_X_NAME);
    let y_label = variable_name(&form.y_name, DEFAULT_Y_NAME);

    match form.mode {
        InputMode::Columns => {
            ui.label(
                egui::RichText::new("Enter one value per line. Blank lines are ignored.").weak(),
            );
            ui.columns(2, |cols| {
                cols[0].label(format!("{x_label} values:"));
                cols[0].add(
                    egui::TextEdit::multiline(&mut form.x_text)
                        .id_salt("x_values")
                        .desired_rows(10)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
                cols[1].label(format!("{y_label} values:"));
                cols[1].add(
                    egui::TextEdit::multiline(&mut form.y_text)
                        .id_salt("y_values")
                        .desired_rows(10)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
            });
        }
        InputMode::Fields => {
            let mut count = form.field_count();
            ui.horizontal(|ui| {
                ui.label("Number of data pairs:");
                ui.add(
                    egui::DragValue::new(&mut count)
                        .range(config.min_field_count()..=config.max_field_count),
                );
            });
            if count != form.field_count() {
                form.set_field_count(count);
            }
            ui.label(egui::RichText::new("Every field must hold one number.").weak());
            ui.add_space(4.0);

            egui::ScrollArea::vertical()
                .id_salt("field_rows")
                .max_height(360.0)
                .show(ui, |ui| {
                    egui::Grid::new("field_grid")
                        .num_columns(3)
                        .striped(true)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            ui.strong("#");
                            ui.strong(x_label.as_str());
                            ui.strong(y_label.as_str());
                            ui.end_row();

                            for row in 0..form.field_count() {
                                ui.label(format!("{}", row + 1));
                                if let Some((x, y)) = form.row_mut(row) {
                                    ui.add(
                                        egui::TextEdit::singleline(x)
                                            .id_salt(("x_field", row))
                                            .desired_width(110.0),
                                    );
                                    ui.add(
                                        egui::TextEdit::singleline(y)
                                            .id_salt(("y_field", row))
                                            .desired_width(110.0),
                                    );
                                }
                                ui.end_row();
                            }
                        });
                });
        }
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        let run_btn = egui::Button::new(egui::RichText::new("Run analysis").strong())
            .min_size(egui::vec2(140.0, 30.0));
        if ui.add(run_btn).clicked() {
            action = FormAction::Analyze;
        }
        if ui
            .add(egui::Button::new("Reset").min_size(egui::vec2(80.0, 30.0)))
            .on_hover_text("Clear the form and the last result")
            .clicked()
        {
            action = FormAction::Reset;
        }
    });

    action
}
