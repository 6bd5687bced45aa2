//! Toolbar rendering for `ExplorerApp`.
//!
//! Draws the back button, the current-role and skills inputs, and the
//! button that requests the role map.

use eframe::egui;

use super::{ExplorerApp, View};

impl ExplorerApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let can_back = self.view != View::Start;
            if ui
                .add_enabled(
                    can_back,
                    egui::Button::new("\u{25C0} Back").min_size(egui::vec2(64.0, 24.0)),
                )
                .clicked()
            {
                self.go_back();
            }

            ui.label("Current role");
            let response = ui.add_sized(
                [260.0, 24.0],
                egui::TextEdit::singleline(&mut self.current_role)
                    .hint_text("e.g. Software Engineer"),
            );

            ui.label("Skills");
            ui.add_sized(
                [260.0, 24.0],
                egui::TextEdit::singleline(&mut self.skills_input)
                    .hint_text("comma separated"),
            );

            let ready = !self.current_role.trim().is_empty();
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui
                .add_enabled(ready, egui::Button::new("Explore roles"))
                .clicked()
                || (ready && submitted)
            {
                self.request_map(ctx);
            }

            if self.role_map.is_loading() || self.detail.is_loading() {
                ui.spinner();
            }
        });
    }
}
