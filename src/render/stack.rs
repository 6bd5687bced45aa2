//! Page stack presentation: maps each page's offset from the scroll position
//! to its on-screen attributes.
//!
//! The stack reads like a deck of cards:
//! - the page at the scroll position sits on top at full size,
//! - the next page slides up from below, growing as it arrives,
//! - the previous page stays in place, shrinking and fading out,
//! - pages more than one step away are hidden.
//!
//! `visual_state` is a plain function of one number; call it for every page on
//! every frame.

/// Presentation attributes of one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageVisual {
    /// Vertical shift as a percentage of the page height.
    pub translate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub visible: bool,
}

/// Offsets in `[-CURRENT_BAND, 0]` count as the current page.
pub const CURRENT_BAND: f32 = 0.01;

const FAR_BELOW: PageVisual = PageVisual {
    translate_y: 100.0,
    scale: 0.85,
    opacity: 0.0,
    z_index: 5,
    visible: false,
};

const CURRENT: PageVisual = PageVisual {
    translate_y: 0.0,
    scale: 1.0,
    opacity: 1.0,
    z_index: 10,
    visible: true,
};

const FAR_ABOVE: PageVisual = PageVisual {
    translate_y: 0.0,
    scale: 0.75,
    opacity: 0.0,
    z_index: 1,
    visible: false,
};

/// Visual attributes for a page at `offset = page_index - scroll_position`.
///
/// Total over all inputs; NaN falls through to the hidden far-above state.
pub fn visual_state(offset: f32) -> PageVisual {
    if offset > 1.0 {
        FAR_BELOW
    } else if offset > 0.0 {
        // Next page sliding up
        PageVisual {
            translate_y: offset * 100.0,
            scale: 0.85 + (1.0 - offset) * 0.15,
            opacity: 1.0,
            z_index: 20,
            visible: true,
        }
    } else if offset >= -CURRENT_BAND {
        CURRENT
    } else if offset >= -1.0 {
        // Previous page sliding away
        PageVisual {
            translate_y: 0.0,
            scale: 1.0 + offset * 0.25,
            opacity: 1.0 + offset,
            z_index: 5,
            visible: true,
        }
    } else {
        FAR_ABOVE
    }
}

/// Visual attributes for every page of a stack of `page_count` pages.
pub fn stack_visuals(page_count: usize, position: f32) -> Vec<PageVisual> {
    (0..page_count)
        .map(|index| visual_state(index as f32 - position))
        .collect()
}

/// Page indices in back-to-front paint order (ascending z-index, stable).
pub fn paint_order(visuals: &[PageVisual]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..visuals.len()).collect();
    order.sort_by_key(|&i| visuals[i].z_index);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: PageVisual, b: PageVisual, eps: f32) -> bool {
        (a.translate_y - b.translate_y).abs() < eps
            && (a.scale - b.scale).abs() < eps
            && (a.opacity - b.opacity).abs() < eps
    }

    #[test]
    fn test_current_page_exact() {
        assert_eq!(
            visual_state(0.0),
            PageVisual {
                translate_y: 0.0,
                scale: 1.0,
                opacity: 1.0,
                z_index: 10,
                visible: true,
            }
        );
        assert_eq!(visual_state(-0.01), visual_state(0.0));
    }

    #[test]
    fn test_next_page_sliding_up() {
        let v = visual_state(0.5);
        assert!((v.translate_y - 50.0).abs() < 1e-4);
        assert!((v.scale - 0.925).abs() < 1e-6);
        assert!((v.opacity - 1.0).abs() < 1e-6);
        assert_eq!(v.z_index, 20);
        assert!(v.visible);
    }

    #[test]
    fn test_previous_page_fading() {
        let v = visual_state(-0.5);
        assert!((v.translate_y - 0.0).abs() < 1e-6);
        assert!((v.scale - 0.875).abs() < 1e-6);
        assert!((v.opacity - 0.5).abs() < 1e-6);
        assert_eq!(v.z_index, 5);
        assert!(v.visible);
    }

    #[test]
    fn test_far_pages_hidden() {
        let below = visual_state(2.0);
        assert!(!below.visible);
        assert_eq!(below.z_index, 5);
        assert!((below.translate_y - 100.0).abs() < 1e-6);

        let above = visual_state(-1.5);
        assert!(!above.visible);
        assert_eq!(above.z_index, 1);
        assert!((above.scale - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_boundary_at_one() {
        let inside = visual_state(1.0);
        let outside = visual_state(1.0 + 1e-4);
        assert!(inside.visible);
        assert!(!outside.visible);
        assert!((inside.translate_y - outside.translate_y).abs() < 0.1);
        assert!((inside.scale - outside.scale).abs() < 1e-4);
    }

    #[test]
    fn test_boundary_near_current() {
        let current = visual_state(-0.01);
        let previous = visual_state(-0.02);
        assert!(close(current, previous, 0.03));
        assert_eq!(previous.z_index, 5);
    }

    #[test]
    fn test_boundary_at_minus_one() {
        let edge = visual_state(-1.0);
        assert!(edge.visible);
        assert!((edge.opacity - 0.0).abs() < 1e-6);
        assert!((edge.scale - 0.75).abs() < 1e-6);
        assert!(!visual_state(-1.0 - 1e-4).visible);
    }

    #[test]
    fn test_nan_is_hidden() {
        assert!(!visual_state(f32::NAN).visible);
    }

    #[test]
    fn test_stack_visuals_mid_scroll() {
        let v = stack_visuals(4, 1.5);
        assert_eq!(v.len(), 4);
        assert!(!v[0].visible); // offset -1.5
        assert!(v[1].visible && v[1].z_index == 5); // offset -0.5
        assert!(v[2].visible && v[2].z_index == 20); // offset 0.5
        assert!(!v[3].visible); // offset 1.5
    }

    #[test]
    fn test_paint_order() {
        let v = stack_visuals(4, 1.0);
        let order = paint_order(&v);
        // page 1 is current (z 10), page 2 sits at offset 1 (z 20)
        assert_eq!(order, vec![0, 3, 1, 2]);
        let z: Vec<i32> = order.iter().map(|&i| v[i].z_index).collect();
        assert!(z.windows(2).all(|w| w[0] <= w[1]));
    }
}
