//! Frame-driven scroll loop with an explicit start/cancel pair.
//!
//! The host calls [`ScrollLoop::frame`] once per display refresh and forwards
//! arrow-key events through [`ScrollLoop::handle_key`]. Nothing ticks and no
//! key is claimed until [`ScrollLoop::start`]; [`ScrollLoop::cancel`] stops
//! ticking, drops held keys, and stops claiming arrow keys. Cancelling freezes
//! the position where it is.
//!
//! Dropping a running loop cancels it, so teardown paths that never reach an
//! explicit `cancel` still release the keys.
//!
//! The loop either owns its navigator or drives one borrowed from the host.

use std::borrow::{Borrow, BorrowMut};

use super::scroll::{KeyPhase, NavKey, ScrollMotion, ScrollNavigator};

/// Whether the host should suppress its default handling of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// The loop took the key; default scrolling must not run.
    Consumed,
    /// The loop is not running; the host may handle the key.
    Ignored,
}

pub struct ScrollLoop<N: BorrowMut<ScrollNavigator> = ScrollNavigator> {
    navigator: N,
    running: bool,
    /// Frames ticked since the last start
    frames: u64,
}

impl<N: BorrowMut<ScrollNavigator>> ScrollLoop<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            running: false,
            frames: 0,
        }
    }

    /// Begin ticking and claiming arrow keys.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.frames = 0;
        let nav = self.navigator();
        log::debug!(
            "Scroll loop started ({} pages, position {:.3})",
            nav.page_count(),
            nav.position()
        );
    }

    /// Stop ticking and release every held key.
    pub fn cancel(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.nav_mut().release_all();
        log::debug!(
            "Scroll loop cancelled after {} frames at position {:.3}",
            self.frames,
            self.navigator().position()
        );
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn navigator(&self) -> &ScrollNavigator {
        self.navigator.borrow()
    }

    fn nav_mut(&mut self) -> &mut ScrollNavigator {
        self.navigator.borrow_mut()
    }

    /// Route a key event to the navigator while running.
    pub fn handle_key(&mut self, key: NavKey, phase: KeyPhase) -> KeyResponse {
        if !self.running {
            return KeyResponse::Ignored;
        }
        self.nav_mut().key(key, phase);
        KeyResponse::Consumed
    }

    /// Per-frame callback. Returns the new position, or `None` when stopped.
    pub fn frame(&mut self) -> Option<f32> {
        if !self.running {
            return None;
        }
        self.frames += 1;
        Some(self.nav_mut().tick())
    }

    /// A direction is held, so the host should schedule another frame.
    pub fn wants_frame(&self) -> bool {
        self.running && self.navigator().motion() != ScrollMotion::Idle
    }

    /// Install a new page set; the position restarts at 0.
    pub fn replace_pages(&mut self, page_count: usize) {
        self.nav_mut().reset(page_count);
    }
}

impl<N: BorrowMut<ScrollNavigator>> Drop for ScrollLoop<N> {
    fn drop(&mut self) {
        self.cancel();
    }
}
