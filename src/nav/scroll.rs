//! Continuous scroll state machine over an ordered page list.
//!
//! Holding Down or Up advances a continuous position by a fixed step per
//! tick; the integer part is the current page, the fraction drives the
//! transition between pages.
//!
//! The position is derived from a whole tick count rather than accumulated
//! in floating point, so holding Down for `ceil((N - 1) / SCROLL_STEP)` ticks
//! lands exactly on the last page and holding Up lands exactly on 0.
//!
//! ```text
//!            down held                up held (down released)
//!   Idle ─────────────▶ ScrollingDown      Idle ─────────▶ ScrollingUp
//!    ▲                      │              ▲                   │
//!    └──── all released ────┘              └── all released ───┘
//! ```
//!
//! Down is checked before Up, so holding both scrolls down.

/// Position change per tick while a direction is held.
pub const SCROLL_STEP: f32 = 0.015;

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Pressed,
    Released,
}

/// Motion applied on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    Idle,
    ScrollingDown,
    ScrollingUp,
}

pub struct ScrollNavigator {
    /// Net ticks scrolled down, in `[0, max_ticks()]`
    ticks: u32,
    page_count: usize,
    down_held: bool,
    up_held: bool,
}

impl ScrollNavigator {
    pub fn new(page_count: usize) -> Self {
        Self {
            ticks: 0,
            page_count,
            down_held: false,
            up_held: false,
        }
    }

    pub fn position(&self) -> f32 {
        (self.ticks as f32 * SCROLL_STEP).min(self.max_position())
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Largest reachable position. An empty stack pins the position at 0.
    pub fn max_position(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32
    }

    /// Fewest ticks whose position reaches `max_position()`.
    fn max_ticks(&self) -> u32 {
        let max = self.max_position();
        if max <= 0.0 {
            return 0;
        }
        // the quotient can round either way of an exact multiple
        let mut ticks = (max / SCROLL_STEP).ceil();
        while ticks * SCROLL_STEP < max {
            ticks += 1.0;
        }
        while ticks > 1.0 && (ticks - 1.0) * SCROLL_STEP >= max {
            ticks -= 1.0;
        }
        ticks as u32
    }

    /// Index of the page the position currently rests on.
    pub fn current_index(&self) -> usize {
        (self.position().floor() as usize).min(self.page_count.saturating_sub(1))
    }

    /// Apply a key event to the held-direction flags.
    pub fn key(&mut self, key: NavKey, phase: KeyPhase) {
        let held = phase == KeyPhase::Pressed;
        match key {
            NavKey::Down => self.down_held = held,
            NavKey::Up => self.up_held = held,
        }
    }

    /// Forget every held key.
    pub fn release_all(&mut self) {
        self.down_held = false;
        self.up_held = false;
    }

    pub fn motion(&self) -> ScrollMotion {
        if self.down_held {
            ScrollMotion::ScrollingDown
        } else if self.up_held {
            ScrollMotion::ScrollingUp
        } else {
            ScrollMotion::Idle
        }
    }

    /// Advance one tick and return the new position.
    pub fn tick(&mut self) -> f32 {
        match self.motion() {
            ScrollMotion::ScrollingDown => {
                self.ticks = (self.ticks + 1).min(self.max_ticks());
            }
            ScrollMotion::ScrollingUp => {
                self.ticks = self.ticks.saturating_sub(1);
            }
            ScrollMotion::Idle => {}
        }
        self.position()
    }

    /// Swap in a new page set. The position always restarts at 0.
    pub fn reset(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.ticks = 0;
    }

    /// Page counter text, e.g. `2 / 4`.
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.current_index() + 1, self.page_count)
    }

    /// Whether an "earlier pages" hint should show.
    pub fn can_scroll_up(&self) -> bool {
        self.position() > 0.1
    }

    /// Whether a "more pages" hint should show.
    pub fn can_scroll_down(&self) -> bool {
        self.position() < self.page_count as f32 - 1.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_to_end(page_count: usize) -> usize {
        ((page_count - 1) as f32 / SCROLL_STEP).ceil() as usize
    }

    #[test]
    fn test_idle_does_not_move() {
        let mut nav = ScrollNavigator::new(4);
        for _ in 0..100 {
            nav.tick();
        }
        assert!((nav.position() - 0.0).abs() < 1e-6);
        assert_eq!(nav.motion(), ScrollMotion::Idle);
    }

    #[test]
    fn test_single_step() {
        let mut nav = ScrollNavigator::new(4);
        nav.key(NavKey::Down, KeyPhase::Pressed);
        assert!((nav.tick() - 0.015).abs() < 1e-6);
        nav.key(NavKey::Down, KeyPhase::Released);
        assert!((nav.tick() - 0.015).abs() < 1e-6);
    }

    #[test]
    fn test_hold_down_reaches_last_page_exactly() {
        for n in 2..=12 {
            let mut nav = ScrollNavigator::new(n);
            nav.key(NavKey::Down, KeyPhase::Pressed);
            for _ in 0..ticks_to_end(n) {
                nav.tick();
            }
            let last = (n - 1) as f32;
            assert_eq!(nav.position(), last, "n={}", n);
            assert_eq!(nav.current_index(), n - 1, "n={}", n);
            assert_eq!(nav.page_label(), format!("{} / {}", n, n));
            for _ in 0..50 {
                nav.tick();
            }
            assert_eq!(nav.position(), last, "n={}", n);
        }
    }

    #[test]
    fn test_seven_pages_reach_end_in_four_hundred_ticks() {
        let mut nav = ScrollNavigator::new(7);
        nav.key(NavKey::Down, KeyPhase::Pressed);
        for _ in 0..399 {
            nav.tick();
        }
        assert!(nav.position() < 6.0);
        assert_eq!(nav.tick(), 6.0);
        assert_eq!(nav.page_label(), "7 / 7");
    }

    #[test]
    fn test_up_from_end_returns_exactly_to_zero() {
        let mut nav = ScrollNavigator::new(7);
        nav.key(NavKey::Down, KeyPhase::Pressed);
        for _ in 0..ticks_to_end(7) {
            nav.tick();
        }
        nav.key(NavKey::Down, KeyPhase::Released);
        nav.key(NavKey::Up, KeyPhase::Pressed);
        for _ in 0..ticks_to_end(7) {
            nav.tick();
        }
        assert_eq!(nav.position(), 0.0);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_hold_up_stops_at_zero() {
        let mut nav = ScrollNavigator::new(3);
        nav.key(NavKey::Down, KeyPhase::Pressed);
        for _ in 0..50 {
            nav.tick();
        }
        nav.key(NavKey::Down, KeyPhase::Released);
        nav.key(NavKey::Up, KeyPhase::Pressed);
        for _ in 0..500 {
            nav.tick();
        }
        assert_eq!(nav.position(), 0.0);
    }

    #[test]
    fn test_down_wins_when_both_held() {
        let mut nav = ScrollNavigator::new(4);
        nav.key(NavKey::Up, KeyPhase::Pressed);
        nav.key(NavKey::Down, KeyPhase::Pressed);
        assert_eq!(nav.motion(), ScrollMotion::ScrollingDown);
        nav.tick();
        assert!(nav.position() > 0.0);
    }

    #[test]
    fn test_position_stays_in_range_under_interleaving() {
        let mut nav = ScrollNavigator::new(3);
        // deterministic pseudo-random press/release pattern
        let mut state: u32 = 0x2545_f491;
        for _ in 0..5_000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let key = if state & 1 == 0 { NavKey::Down } else { NavKey::Up };
            let phase = if state & 2 == 0 { KeyPhase::Pressed } else { KeyPhase::Released };
            nav.key(key, phase);
            for _ in 0..(state >> 28) {
                let p = nav.tick();
                assert!((0.0..=2.0).contains(&p), "position {}", p);
            }
        }
    }

    #[test]
    fn test_empty_stack_pins_at_zero() {
        let mut nav = ScrollNavigator::new(0);
        nav.key(NavKey::Down, KeyPhase::Pressed);
        for _ in 0..10 {
            nav.tick();
        }
        assert_eq!(nav.position(), 0.0);
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.can_scroll_down());
    }

    #[test]
    fn test_reset_returns_to_zero() {
        let mut nav = ScrollNavigator::new(4);
        nav.key(NavKey::Down, KeyPhase::Pressed);
        for _ in 0..120 {
            nav.tick();
        }
        assert!(nav.position() > 1.0);
        nav.reset(2);
        assert_eq!(nav.position(), 0.0);
        assert_eq!(nav.page_count(), 2);
    }

    #[test]
    fn test_page_label_and_hints() {
        let mut nav = ScrollNavigator::new(4);
        assert_eq!(nav.page_label(), "1 / 4");
        assert!(!nav.can_scroll_up());
        assert!(nav.can_scroll_down());

        nav.key(NavKey::Down, KeyPhase::Pressed);
        for _ in 0..ticks_to_end(4) {
            nav.tick();
        }
        assert_eq!(nav.page_label(), "4 / 4");
        assert!(nav.can_scroll_up());
        assert!(!nav.can_scroll_down());
    }

    #[test]
    fn test_release_all() {
        let mut nav = ScrollNavigator::new(4);
        nav.key(NavKey::Down, KeyPhase::Pressed);
        nav.key(NavKey::Up, KeyPhase::Pressed);
        nav.release_all();
        assert_eq!(nav.motion(), ScrollMotion::Idle);
    }
}
