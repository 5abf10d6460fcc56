//! Edit dialog rendering.
//!
//! Widgets edit copies of the session buffers; every change is reported
//! back as an `EditorCommand` so the session stays the single owner.

use eframe::egui;
use problem_bank_core::{EditSession, EditorCommand, OptionPk, Problem};

use crate::ui;

pub fn render_edit_dialog(ctx: &egui::Context, session: &EditSession) -> Vec<EditorCommand> {
    let mut commands = Vec::new();
    ui::paint_backdrop(ctx);

    egui::Window::new(window_title(session.title()))
        .id(egui::Id::new("edit_problem_bank_dialog"))
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(ctx.screen_rect().height() * 0.75)
                .show(ui, |ui| {
                    render_notice(ui, session, &mut commands);
                    render_bank_name(ui, session, &mut commands);

                    if session.is_loading() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading problems…");
                        });
                    }

                    if !session.problems().is_empty() {
                        ui::section_header(ui, "Problems");
                        for (index, problem) in session.problems().iter().enumerate() {
                            render_problem(ui, session, index, problem, &mut commands);
                            ui.separator();
                        }
                    }
                });

            ui.add_space(6.0);
            if ui.button("Close").clicked() {
                commands.push(EditorCommand::Close);
            }
        });

    commands
}

fn render_notice(ui: &mut egui::Ui, session: &EditSession, commands: &mut Vec<EditorCommand>) {
    if let Some(notice) = session.notice() {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::LIGHT_GREEN, notice);
            if ui.small_button("✕").clicked() {
                commands.push(EditorCommand::DismissNotice);
            }
        });
        ui.add_space(4.0);
    }
}

fn render_bank_name(ui: &mut egui::Ui, session: &EditSession, commands: &mut Vec<EditorCommand>) {
    ui.label(format!("Problem bank title: {}", session.bank_name()));
    let mut name = session.bank_name().to_owned();
    let response = ui.add(egui::TextEdit::singleline(&mut name).desired_width(f32::INFINITY));
    if response.changed() {
        commands.push(EditorCommand::EditBankName(name));
    }
    if ui::save_button(ui, session.is_saving_bank_name()) {
        commands.push(EditorCommand::SaveBankName);
    }
    ui.add_space(8.0);
}

fn render_problem(
    ui: &mut egui::Ui,
    session: &EditSession,
    index: usize,
    problem: &Problem,
    commands: &mut Vec<EditorCommand>,
) {
    ui.push_id(("problem", index), |ui| {
        ui.label(egui::RichText::new(format!("Q: {}", problem.problem_content)).strong());
        let mut content = problem.problem_content.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut content).desired_width(f32::INFINITY))
            .changed()
        {
            commands.push(EditorCommand::EditProblemContent {
                index,
                value: content,
            });
        }

        for (option, opt) in problem.options.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(option_row_label(option));
                let mut text = opt.content.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY))
                    .changed()
                {
                    commands.push(EditorCommand::EditOption {
                        problem: index,
                        option,
                        value: text,
                    });
                }
            });
        }

        ui.horizontal(|ui| {
            ui.label("Answer");
            let mut selected: Option<OptionPk> = problem.answer_pk;
            egui::ComboBox::from_id_salt(("answer", index))
                .selected_text(answer_label(problem))
                .show_ui(ui, |ui| {
                    for opt in &problem.options {
                        ui.selectable_value(
                            &mut selected,
                            Some(opt.problem_option_pk),
                            opt.num.to_string(),
                        );
                    }
                });
            if selected != problem.answer_pk {
                if let Some(option_pk) = selected {
                    commands.push(EditorCommand::SelectAnswer { index, option_pk });
                }
            }
        });

        ui.label("Explanation");
        let mut explanation = problem.problem_explanation.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut explanation).desired_width(f32::INFINITY))
            .changed()
        {
            commands.push(EditorCommand::EditProblemExplanation {
                index,
                value: explanation,
            });
        }

        if ui::save_button(ui, session.is_saving_problem(index)) {
            commands.push(EditorCommand::SaveProblem { index });
        }
    });
}

fn window_title(name: &str) -> String {
    if name.trim().is_empty() {
        "Untitled problem bank".to_owned()
    } else {
        name.to_owned()
    }
}

/// Option rows are labelled by position, starting at 1.
fn option_row_label(position: usize) -> String {
    (position + 1).to_string()
}

fn answer_label(problem: &Problem) -> String {
    problem
        .answer_num()
        .map(|num| num.to_string())
        .unwrap_or_else(|| "—".to_owned())
}

#[cfg(test)]
mod tests {
    use super::{answer_label, option_row_label, window_title};
    use problem_bank_core::{OptionPk, Problem, ProblemOption, ProblemPk};

    fn problem(answer: Option<OptionPk>) -> Problem {
        Problem {
            problem_pk: ProblemPk(1),
            problem_content: "2 + 2 = ?".to_owned(),
            problem_explanation: String::new(),
            answer_pk: answer,
            options: vec![
                ProblemOption {
                    problem_option_pk: OptionPk(5),
                    num: 1,
                    content: "3".to_owned(),
                },
                ProblemOption {
                    problem_option_pk: OptionPk(9),
                    num: 2,
                    content: "4".to_owned(),
                },
            ],
        }
    }

    #[test]
    fn answer_label_shows_option_number_not_id() {
        assert_eq!(answer_label(&problem(Some(OptionPk(9)))), "2");
        assert_eq!(answer_label(&problem(None)), "—");
        assert_eq!(answer_label(&problem(Some(OptionPk(77)))), "—");
    }

    #[test]
    fn option_rows_are_one_based() {
        assert_eq!(option_row_label(0), "1");
        assert_eq!(option_row_label(3), "4");
    }

    #[test]
    fn blank_title_falls_back() {
        assert_eq!(window_title("  "), "Untitled problem bank");
        assert_eq!(window_title("Algebra"), "Algebra");
    }
}
