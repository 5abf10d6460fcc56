//! Main application state and update loop

use eframe::egui;
use problem_bank_core::{EditorCommand, LaunchControl, ProblemBank};

use crate::bridge::EditorBridge;
use crate::dialog;
use crate::launch_button;
use crate::ui;

/// Host page: one problem bank row with its edit control
pub struct App {
    launch: LaunchControl,
    bridge: EditorBridge,
}

impl App {
    pub fn new(bank: ProblemBank, bridge: EditorBridge) -> Self {
        Self {
            launch: LaunchControl::new(bank),
            bridge,
        }
    }

    fn dispatch(&mut self, command: EditorCommand, ctx: &egui::Context) {
        match self.launch.handle(command) {
            Ok(Some(request)) => self.bridge.submit(request, ctx),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "editor command rejected"),
        }
    }

    fn drain_results(&mut self) {
        for event in self.bridge.drain() {
            self.launch.apply(event);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        // Check for async backend results
        self.drain_results();

        let mut commands = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui::styled_heading(ui, "📚 Problem Banks");
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new(format!("backend: {}", self.bridge.backend_label()))
                        .small()
                        .color(ui::MUTED),
                );
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!self.launch.is_open(), |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    let bank = self.launch.bank();
                    ui.label(egui::RichText::new(&bank.problem_bank_name).size(16.0));
                    ui.label(
                        egui::RichText::new(format!("study {} · bank {}", bank.study_pk, bank.pk))
                            .small()
                            .color(ui::MUTED),
                    );
                    if launch_button::render_launch_button(ui) {
                        commands.push(EditorCommand::Open);
                    }
                });
            });
        });

        if let Some(session) = self.launch.dialog() {
            commands.extend(dialog::render_edit_dialog(ctx, session));
        }

        for command in commands {
            self.dispatch(command, ctx);
        }
    }
}
