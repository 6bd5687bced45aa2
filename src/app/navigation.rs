//! Navigation methods for `ExplorerApp`.
//!
//! Covers view switching (`request_map`, `open_role`, `go_back`), skill
//! suggestions (`request_skill_suggestions`), the background fetch lifecycle
//! (`check_fetch`), and the per-frame scroll driver for the detail stack
//! (`drive_scroll`).

use std::sync::mpsc;

use eframe::egui;

use polaris_explorer::engine::pipeline::ExplorerEngine;
use polaris_explorer::nav::scroll::{KeyPhase, NavKey};
use polaris_explorer::nav::ticker::KeyResponse;
use polaris_explorer::net::api::RolePagesRequest;

use super::{ExplorerApp, Load, View};

impl ExplorerApp {
    /// Validate the current role, infer its profile, then fetch and lay out
    /// the role map personalized to it. A rejected role fails the map view.
    pub fn request_map(&mut self, ctx: &egui::Context) {
        if self.role_map.is_loading() {
            return;
        }
        self.close_detail();
        self.view = View::Map;

        let client = match &self.client {
            Ok(client) => client.clone(),
            Err(reason) => {
                self.role_map = Load::Failed(reason.clone());
                return;
            }
        };

        let role = self.current_role.clone();
        let (tx, rx) = mpsc::channel();
        self.role_map = Load::Loading(rx);
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let engine = ExplorerEngine::new(client);
            let result = engine.load_personalized_map(&role);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Open the detail stack for a role picked on the map.
    pub fn open_role(&mut self, role_name: String, ctx: &egui::Context) {
        self.close_detail();
        self.view = View::Detail;

        let client = match &self.client {
            Ok(client) => client.clone(),
            Err(reason) => {
                self.detail = Load::Failed(reason.clone());
                return;
            }
        };

        let (current_role, metrics) = match self.profile() {
            Some(profile) => (profile.current_role.clone(), Some(profile.metrics)),
            None => (self.current_role.trim().to_string(), None),
        };
        let request = RolePagesRequest {
            role_name: role_name.clone(),
            current_role,
            metrics,
            user_skills: self.user_skills(),
        };
        self.selected_role = Some(role_name);

        let (tx, rx) = mpsc::channel();
        self.detail = Load::Loading(rx);
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let engine = ExplorerEngine::new(client);
            let result = engine.load_role_pages(&request);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Fetch skill suggestions for the current role.
    pub fn request_skill_suggestions(&mut self, ctx: &egui::Context) {
        if self.suggested_skills.is_loading() {
            return;
        }
        let client = match &self.client {
            Ok(client) => client.clone(),
            Err(reason) => {
                self.suggested_skills = Load::Failed(reason.clone());
                return;
            }
        };

        let role = self.current_role.clone();
        let (tx, rx) = mpsc::channel();
        self.suggested_skills = Load::Loading(rx);
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let skills = ExplorerEngine::new(client).suggest_skills(&role);
            let _ = tx.send(Ok(skills));
            ctx.request_repaint();
        });
    }

    /// Step back one view: detail → map → start.
    pub fn go_back(&mut self) {
        match self.view {
            View::Detail => {
                self.close_detail();
                self.view = View::Map;
            }
            View::Map => {
                self.role_map = Load::Idle;
                self.hovered_role = None;
                self.view = View::Start;
            }
            View::Start => {}
        }
    }

    /// Leave the detail view. Stops the scroll loop on every path out;
    /// dropping a pending receiver discards its result.
    fn close_detail(&mut self) {
        self.scroll.cancel();
        self.detail = Load::Idle;
        self.selected_role = None;
    }

    /// Poll both fetch channels and react to finished loads.
    pub fn check_fetch(&mut self) {
        self.role_map.poll();
        self.suggested_skills.poll();

        if self.detail.poll() {
            match &self.detail {
                Load::Ready(stack) => {
                    self.scroll.replace_pages(stack.len());
                    self.scroll.start();
                }
                _ => self.scroll.cancel(),
            }
        }
    }

    /// Route arrow keys to the scroll loop and tick it once for this frame.
    ///
    /// Claimed key events are removed from the input queue so no other widget
    /// scrolls on them.
    pub fn drive_scroll(&mut self, ctx: &egui::Context) {
        if !self.scroll.is_running() {
            return;
        }

        let scroll = &mut self.scroll;
        ctx.input_mut(|input| {
            input.events.retain(|event| {
                let egui::Event::Key { key, pressed, .. } = event else {
                    return true;
                };
                let nav = match key {
                    egui::Key::ArrowDown => NavKey::Down,
                    egui::Key::ArrowUp => NavKey::Up,
                    _ => return true,
                };
                let phase = if *pressed {
                    KeyPhase::Pressed
                } else {
                    KeyPhase::Released
                };
                scroll.handle_key(nav, phase) == KeyResponse::Ignored
            });
        });

        self.scroll.frame();
        if self.scroll.wants_frame() {
            ctx.request_repaint();
        }
    }
}
