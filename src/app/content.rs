//! Content-area rendering for `ExplorerApp`.
//!
//! - `draw_content`  — top-level dispatcher (start, map, detail)
//! - `draw_start`    — welcome text and skill suggestions
//! - `draw_role_map` — the 2-D role canvas with click-to-select
//! - `draw_detail`   — the scrolling page stack and its navigation hint

use std::sync::Arc;

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use polaris_explorer::engine::pipeline::PageStack;
use polaris_explorer::render::layout::RoleMap;
use polaris_explorer::render::stack::paint_order;
use polaris_explorer::render::Point;

use crate::ui::{draw_page, role_color};

use super::{ExplorerApp, Load, View};

const CANVAS_BG: Color32 = Color32::from_rgb(248, 246, 240);
const GRID_MINOR: Color32 = Color32::from_rgba_premultiplied(60, 65, 72, 76);
const GRID_MAJOR: Color32 = Color32::from_rgba_premultiplied(89, 100, 113, 153);
const AXIS_TEXT: Color32 = Color32::from_rgb(100, 116, 139);
const LABEL_TEXT: Color32 = Color32::from_rgb(30, 41, 59);
const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38);
const CARD_BORDER: Color32 = Color32::from_rgb(226, 232, 240);

/// Dot radius and click radius, in screen pixels.
const DOT_RADIUS: f32 = 6.0;
const HIT_RADIUS: f32 = 14.0;

impl ExplorerApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        match self.view {
            View::Start => self.draw_start(ui, ctx),
            View::Map => self.draw_role_map(ui, ctx),
            View::Detail => self.draw_detail(ui),
        }
    }

    fn draw_start(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut toggled: Option<String> = None;
        let mut suggest = false;

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.heading(egui::RichText::new("Where could your career go next?").size(30.0));
            ui.add_space(8.0);
            ui.label("Enter your current role above and explore roles mapped by work style.");
            ui.add_space(16.0);

            let has_role = !self.current_role.trim().is_empty();
            suggest = ui
                .add_enabled(
                    has_role && !self.suggested_skills.is_loading(),
                    egui::Button::new("Suggest skills for my role"),
                )
                .clicked();

            match &self.suggested_skills {
                Load::Idle => {}
                Load::Loading(_) => {
                    ui.spinner();
                }
                Load::Failed(message) => {
                    ui.colored_label(ERROR_TEXT, message.as_str());
                }
                Load::Ready(skills) => {
                    ui.add_space(8.0);
                    let selected = self.user_skills();
                    ui.horizontal_wrapped(|ui| {
                        for skill in skills {
                            let on = selected.iter().any(|s| s.eq_ignore_ascii_case(skill));
                            if ui.selectable_label(on, skill.as_str()).clicked() {
                                toggled = Some(skill.clone());
                            }
                        }
                    });
                }
            }

            ui.add_space(16.0);
            ui.label(
                egui::RichText::new(format!("Backend: {}", self.config.api_url))
                    .small()
                    .weak(),
            );
        });

        if let Some(skill) = toggled {
            self.toggle_skill(&skill);
        }
        if suggest {
            self.request_skill_suggestions(ctx);
        }
    }

    // ── Role map ─────────────────────────────────────────────────────────────

    fn draw_role_map(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut clicked: Option<String> = None;
        let mut back = false;

        match &self.role_map {
            Load::Idle => {}
            Load::Loading(_) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.heading("Checking your role and loading personalized roles...");
                });
            }
            Load::Failed(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.heading("Error loading roles");
                    ui.colored_label(ERROR_TEXT, message.as_str());
                    ui.add_space(12.0);
                    back = ui.button("Back").clicked();
                });
            }
            Load::Ready(session) => {
                ui.vertical_centered(|ui| {
                    ui.heading("Select Your Target Role");
                    ui.label(session.map.subtitle(&session.profile.current_role));
                });
                ui.add_space(8.0);
                let (hovered, picked) = paint_role_map(ui, &session.map);
                if hovered.is_some() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                self.hovered_role = hovered;
                clicked = picked;
            }
        }

        if back {
            self.go_back();
        } else if let Some(name) = clicked {
            log::debug!("Role selected: {}", name);
            self.open_role(name, ctx);
        }
    }

    // ── Detail stack ─────────────────────────────────────────────────────────

    fn draw_detail(&mut self, ui: &mut egui::Ui) {
        let mut back = false;

        match &self.detail {
            Load::Idle => {}
            Load::Loading(_) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label("Loading role details...");
                });
            }
            Load::Failed(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.colored_label(ERROR_TEXT, format!("Error: {}", message));
                    ui.add_space(12.0);
                    back = ui.button("Back to Roles").clicked();
                });
            }
            Load::Ready(stack) if stack.is_empty() => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label("No pages available");
                });
            }
            Load::Ready(stack) => {
                let nav = self.scroll.navigator();
                paint_page_stack(ui, stack, nav.position());

                let area = ui.max_rect();
                let painter = ui.painter();
                let corner = area.right_bottom() - Vec2::new(24.0, 24.0);
                painter.text(
                    corner,
                    Align2::RIGHT_BOTTOM,
                    nav.page_label(),
                    FontId::proportional(16.0),
                    AXIS_TEXT,
                );
                let arrows = match (nav.can_scroll_up(), nav.can_scroll_down()) {
                    (true, true) => "\u{25B2} \u{25BC}",
                    (true, false) => "\u{25B2}",
                    (false, true) => "\u{25BC}",
                    (false, false) => "",
                };
                painter.text(
                    corner - Vec2::new(0.0, 22.0),
                    Align2::RIGHT_BOTTOM,
                    arrows,
                    FontId::proportional(16.0),
                    AXIS_TEXT,
                );
            }
        }

        if back {
            self.go_back();
        }
    }
}

/// Paint the role canvas scaled to fit. Returns (hovered role, clicked role).
fn paint_role_map(ui: &mut egui::Ui, map: &RoleMap) -> (Option<String>, Option<String>) {
    let g = map.geometry;
    let avail = ui.available_size();
    let scale = (avail.x / g.width).min(avail.y / g.height).max(0.1);
    let size = Vec2::new(g.width * scale, g.height * scale);

    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let painter = ui.painter_at(rect);
    let to_screen = |x: f32, y: f32| rect.min + Vec2::new(x * scale, y * scale);
    let to_canvas = |p: Pos2| Point::new((p.x - rect.min.x) / scale, (p.y - rect.min.y) / scale);

    painter.rect_filled(rect, Rounding::same(16.0), CANVAS_BG);

    // Quarter guides, then the two center axes
    let (w, h, pad) = (g.width, g.height, g.padding);
    for frac in [0.25, 0.75] {
        painter.line_segment(
            [to_screen(w * frac, pad), to_screen(w * frac, h - pad)],
            Stroke::new(1.0, GRID_MINOR),
        );
        painter.line_segment(
            [to_screen(pad, h * frac), to_screen(w - pad, h * frac)],
            Stroke::new(1.0, GRID_MINOR),
        );
    }
    painter.line_segment(
        [to_screen(w * 0.5, pad), to_screen(w * 0.5, h - pad)],
        Stroke::new(2.0, GRID_MAJOR),
    );
    painter.line_segment(
        [to_screen(pad, h * 0.5), to_screen(w - pad, h * 0.5)],
        Stroke::new(2.0, GRID_MAJOR),
    );

    let axis_font = FontId::proportional(14.0 * scale.max(0.7));
    painter.text(
        to_screen(w * 0.5, 30.0),
        Align2::CENTER_CENTER,
        "Strategic / Conceptual",
        axis_font.clone(),
        AXIS_TEXT,
    );
    painter.text(
        to_screen(w * 0.5, h - 15.0),
        Align2::CENTER_CENTER,
        "Tactical / Execution",
        axis_font.clone(),
        AXIS_TEXT,
    );
    paint_rotated_label(&painter, to_screen(25.0, h * 0.5), "People-Focused", &axis_font, false);
    paint_rotated_label(&painter, to_screen(w - 25.0, h * 0.5), "Systems-Focused", &axis_font, true);

    let hit_radius = HIT_RADIUS / scale;
    let hovered = response
        .hover_pos()
        .and_then(|p| map.role_at(to_canvas(p), hit_radius))
        .map(str::to_string);

    let label_font = FontId::proportional(13.0 * scale.max(0.7));
    for role in &map.roles {
        let center = to_screen(role.position.x, role.position.y);
        let is_hovered = hovered.as_deref() == Some(role.name.as_str());
        let radius = if is_hovered { DOT_RADIUS * 1.5 } else { DOT_RADIUS };
        painter.circle_filled(center, radius, role_color(&role.color));
        painter.text(
            center + Vec2::new(0.0, 18.0 * scale.max(0.7)),
            Align2::CENTER_CENTER,
            &role.name,
            label_font.clone(),
            LABEL_TEXT,
        );
    }

    let clicked = if response.clicked() {
        response
            .interact_pointer_pos()
            .and_then(|p| map.role_at(to_canvas(p), hit_radius))
            .map(str::to_string)
    } else {
        None
    };

    (hovered, clicked)
}

/// Side-axis label drawn vertically and centered on `at`.
fn paint_rotated_label(painter: &egui::Painter, at: Pos2, text: &str, font: &FontId, clockwise: bool) {
    let galley: Arc<egui::Galley> =
        painter.layout_no_wrap(text.to_string(), font.clone(), AXIS_TEXT);
    let size = galley.size();
    // Text rotates around its top-left corner
    let (pos, angle) = if clockwise {
        (
            Pos2::new(at.x + size.y * 0.5, at.y - size.x * 0.5),
            std::f32::consts::FRAC_PI_2,
        )
    } else {
        (
            Pos2::new(at.x - size.y * 0.5, at.y + size.x * 0.5),
            -std::f32::consts::FRAC_PI_2,
        )
    };
    painter.add(egui::epaint::TextShape::new(pos, galley, AXIS_TEXT).with_angle(angle));
}

/// Paint every visible page back to front at the given scroll position.
fn paint_page_stack(ui: &mut egui::Ui, stack: &PageStack, position: f32) {
    let area = ui.available_rect_before_wrap();
    let card_size = Vec2::new(
        (area.width() * 0.85).min(760.0),
        (area.height() * 0.85).min(560.0),
    );
    let base = Rect::from_center_size(area.center(), card_size);
    let visuals = stack.visuals(position);

    for index in paint_order(&visuals) {
        let v = visuals[index];
        if !v.visible {
            continue;
        }
        let shift = Vec2::new(0.0, card_size.y * v.translate_y / 100.0);
        let rect = Rect::from_center_size(base.center() + shift, card_size * v.scale);

        let mut card = ui.new_child(
            egui::UiBuilder::new()
                .id_salt(("page", index))
                .max_rect(rect)
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        card.set_clip_rect(rect.intersect(area));
        card.set_opacity(v.opacity);
        card.painter().rect(
            rect,
            Rounding::same(20.0),
            Color32::WHITE,
            Stroke::new(1.0, CARD_BORDER),
        );

        let mut body = card.new_child(
            egui::UiBuilder::new()
                .id_salt(("page-body", index))
                .max_rect(rect.shrink(28.0 * v.scale))
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        draw_page(&mut body, &stack.pages[index], &stack.role_name);
    }

    ui.allocate_rect(area, Sense::hover());
}
