//! `ExplorerApp` — the top-level egui application state.
//!
//! This module declares the `ExplorerApp` struct, its constructor, and the
//! `eframe::App` impl. Methods are split across the sibling sub-modules:
//!
//! - `navigation` — view switching and the background fetch lifecycle
//! - `toolbar`    — current-role input and controls
//! - `content`    — role map canvas and page stack rendering

pub mod content;
pub mod navigation;
pub mod toolbar;

use std::sync::mpsc;

use eframe::egui;

use polaris_explorer::config::AppConfig;
use polaris_explorer::engine::pipeline::{LoadError, PageStack, PersonalizedMap, UserProfile};
use polaris_explorer::nav::scroll::ScrollNavigator;
use polaris_explorer::nav::ticker::ScrollLoop;
use polaris_explorer::net::api::ApiClient;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Start,
    Map,
    Detail,
}

/// Data state of a view. `Failed` is terminal: only Back leaves it.
pub enum Load<T> {
    Idle,
    Loading(mpsc::Receiver<Result<T, LoadError>>),
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading(_))
    }

    /// Poll a pending fetch. Returns true when it just finished.
    pub fn poll(&mut self) -> bool {
        let result = match self {
            Load::Loading(rx) => match rx.try_recv() {
                Ok(result) => result,
                Err(mpsc::TryRecvError::Empty) => return false,
                Err(mpsc::TryRecvError::Disconnected) => Err(LoadError {
                    message: String::from("Loader stopped unexpectedly"),
                    phase: "fetch",
                }),
            },
            _ => return false,
        };
        *self = match result {
            Ok(value) => Load::Ready(value),
            Err(e) => Load::Failed(e.to_string()),
        };
        true
    }
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct ExplorerApp {
    pub config: AppConfig,
    /// `Err` carries the reason when the configured API URL is unusable
    pub client: Result<ApiClient, String>,
    pub current_role: String,
    /// Comma-separated skills sent with detail requests
    pub skills_input: String,
    pub suggested_skills: Load<Vec<String>>,
    pub view: View,
    /// Validated profile and the map laid out for it
    pub role_map: Load<PersonalizedMap>,
    pub detail: Load<PageStack>,
    pub selected_role: Option<String>,
    pub hovered_role: Option<String>,
    pub scroll: ScrollLoop,
}

impl ExplorerApp {
    pub fn new(config: AppConfig) -> Self {
        let client = ApiClient::new(&config.api_url, config.timeout).map_err(|e| {
            log::warn!("Backend client unavailable: {}", e);
            e.to_string()
        });
        Self {
            current_role: config.current_role.clone(),
            config,
            client,
            skills_input: String::new(),
            suggested_skills: Load::Idle,
            view: View::Start,
            role_map: Load::Idle,
            detail: Load::Idle,
            selected_role: None,
            hovered_role: None,
            scroll: ScrollLoop::new(ScrollNavigator::new(0)),
        }
    }

    /// Profile inferred for the current role, once the map has loaded.
    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.role_map {
            Load::Ready(session) => Some(&session.profile),
            _ => None,
        }
    }

    /// Add a skill to the skills input, or remove it when already listed.
    pub fn toggle_skill(&mut self, skill: &str) {
        let mut skills = self.user_skills();
        match skills.iter().position(|s| s.eq_ignore_ascii_case(skill)) {
            Some(i) => {
                skills.remove(i);
            }
            None => skills.push(skill.to_string()),
        }
        self.skills_input = skills.join(", ");
    }

    pub fn user_skills(&self) -> Vec<String> {
        self.skills_input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_fetch();
        self.drive_scroll(ctx);

        ctx.set_visuals(egui::Visuals::light());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, &ctx_clone);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.scroll.cancel();
    }
}
