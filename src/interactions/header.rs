/// Vertical scroll, in CSS pixels, past which the sticky header gets its shadow.
pub const ELEVATION_THRESHOLD_PX: f64 = 4.0;

pub const SCROLL_EVENT: &str = "scroll";
/// The listener never calls `preventDefault`, so the browser may scroll
/// without waiting for it.
pub const SCROLL_LISTENER_PASSIVE: bool = true;

pub fn is_elevated(scroll_y: f64) -> bool {
    scroll_y > ELEVATION_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevates_just_past_the_threshold() {
        assert!(is_elevated(5.0));
        assert!(!is_elevated(4.0));
        assert!(!is_elevated(0.0));
    }

    #[test]
    fn scroll_listener_does_not_block_scrolling() {
        assert_eq!(SCROLL_EVENT, "scroll");
        assert!(SCROLL_LISTENER_PASSIVE);
    }

    #[test]
    fn page_loaded_already_scrolled_is_elevated() {
        assert!(is_elevated(10.0));
    }

    #[test]
    fn scrolling_back_to_the_top_drops_the_shadow() {
        let states: Vec<bool> = [0.0, 5.0, 120.0, 0.0].iter().map(|y| is_elevated(*y)).collect();
        assert_eq!(states, vec![false, true, true, false]);
    }
}
