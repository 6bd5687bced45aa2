//! Stateless egui helpers shared by the map and detail views.
//!
//! Renders the body of each detail page type, plus small color utilities
//! for the opaque role colors the backend sends.

use eframe::egui;
use egui::{Color32, RichText};

use polaris_explorer::model::{split_title, Page};

// ─── Colors ──────────────────────────────────────────────────────────────────

pub const ROLE_FALLBACK: Color32 = Color32::from_rgb(99, 102, 241);
const TITLE_PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
const TITLE_SECONDARY: Color32 = Color32::from_rgb(147, 51, 234);
const HIGHLIGHT: Color32 = Color32::from_rgb(219, 39, 119);
const TAG_BG: Color32 = Color32::from_rgb(224, 231, 255);
const TAG_GROWTH_BG: Color32 = Color32::from_rgb(219, 234, 254);
const BOX_GREEN: Color32 = Color32::from_rgb(220, 252, 231);
const BOX_BLUE: Color32 = Color32::from_rgb(219, 234, 254);

/// Parse `#rgb` / `#rrggbb` colors. Anything else yields `None`.
pub fn parse_hex_color(s: &str) -> Option<Color32> {
    let hex = s.trim().strip_prefix('#')?;
    let channel = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();
    match hex.len() {
        6 => Some(Color32::from_rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
        3 => {
            let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
            Some(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

pub fn role_color(s: &str) -> Color32 {
    parse_hex_color(s).unwrap_or(ROLE_FALLBACK)
}

// ─── Page bodies ─────────────────────────────────────────────────────────────

/// Draw the content of one detail page.
pub fn draw_page(ui: &mut egui::Ui, page: &Page, role_name: &str) {
    match page {
        Page::Overview {
            description,
            salary,
            degree,
            source,
        } => {
            ui.label(RichText::new("Imagine yourself as:").italics());
            let (first, rest) = split_title(role_name);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(first).size(34.0).strong().color(TITLE_PRIMARY));
                if !rest.is_empty() {
                    ui.label(RichText::new(rest).size(34.0).strong().color(TITLE_SECONDARY));
                }
            });
            ui.add_space(8.0);
            ui.label(description.as_str());
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                info_item(ui, "\u{1F4B0}", "Avg. Salary", salary);
                ui.add_space(24.0);
                info_item(ui, "\u{1F4DA}", "Typical Degree", degree);
            });
            if let Some(source) = source {
                ui.add_space(8.0);
                ui.label(RichText::new(format!("Source: {}", source)).small().weak());
            }
        }
        Page::DayInLife { tasks } => {
            section_title(ui, "\u{1F4CB}", "A day in the life");
            intro_with_role(
                ui,
                "Here's what a day in the life of a(n) ",
                role_name,
                " might look like.",
            );
            ui.add_space(8.0);
            for task in tasks {
                egui::Frame::group(ui.style())
                    .rounding(8.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(task.as_str());
                    });
                ui.add_space(4.0);
            }
        }
        Page::SweetSpots {
            skills,
            explanation,
        } => {
            section_title(ui, "\u{1F44D}", "Sweet spots");
            intro_with_role(
                ui,
                "Consider how the role of a(n) ",
                role_name,
                " may overlap with where you are now.",
            );
            skill_tags(ui, skills, TAG_BG);
            explanation_box(ui, explanation, BOX_GREEN);
        }
        Page::AreasForGrowth {
            skills,
            explanation,
        } => {
            section_title(ui, "\u{2139}", "Areas for growth");
            intro_with_role(
                ui,
                "Every career presents opportunities to learn and specialize in new areas. \
                 Here's what that could look like as a(n) ",
                role_name,
                ".",
            );
            skill_tags(ui, skills, TAG_GROWTH_BG);
            explanation_box(ui, explanation, BOX_BLUE);
        }
        // unrecognized page types keep an empty card
        Page::Unknown => {}
    }
}

fn section_title(ui: &mut egui::Ui, icon: &str, title: &str) {
    ui.heading(RichText::new(format!("{} {}", icon, title)).size(26.0).strong());
    ui.add_space(6.0);
}

fn intro_with_role(ui: &mut egui::Ui, before: &str, role_name: &str, after: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(before);
        ui.label(RichText::new(role_name).strong().color(HIGHLIGHT));
        ui.label(after);
    });
}

fn info_item(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(22.0));
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().weak());
            ui.label(RichText::new(value).strong());
        });
    });
}

fn skill_tags(ui: &mut egui::Ui, skills: &[String], fill: Color32) {
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for skill in skills {
            egui::Frame::none()
                .fill(fill)
                .rounding(12.0)
                .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(skill.as_str()).color(Color32::from_rgb(30, 41, 59)));
                });
        }
    });
}

fn explanation_box(ui: &mut egui::Ui, text: &str, fill: Color32) {
    ui.add_space(12.0);
    egui::Frame::none()
        .fill(fill)
        .rounding(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(Color32::from_rgb(30, 41, 59)));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3b82f6"), Some(Color32::from_rgb(59, 130, 246)));
        assert_eq!(parse_hex_color("#fff"), Some(Color32::from_rgb(255, 255, 255)));
        assert_eq!(parse_hex_color(" #000000 "), Some(Color32::from_rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("blue"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(role_color("nope"), ROLE_FALLBACK);
    }

    #[test]
    fn test_draw_every_page_kind() {
        let pages = vec![
            Page::Overview {
                description: String::from("Ships features"),
                salary: String::from("$120k"),
                degree: String::from("BS CS"),
                source: None,
            },
            Page::DayInLife {
                tasks: vec![String::from("Standup")],
            },
            Page::SweetSpots {
                skills: vec![String::from("SQL")],
                explanation: String::from("Data carries over"),
            },
            Page::AreasForGrowth {
                skills: vec![String::from("Rust")],
                explanation: String::from("Systems depth"),
            },
            Page::Unknown,
        ];
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                for page in &pages {
                    draw_page(ui, page, "Product Manager");
                }
            });
        });
    }
}
