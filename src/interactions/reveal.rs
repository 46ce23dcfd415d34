/// Attribute that marks an element for reveal-on-scroll.
pub const REVEAL_MARKER: &str = "data-reveal";
/// Attribute the controller stamps on each marked element to find it again.
pub const REVEAL_ID: &str = "data-reveal-id";
pub const VISIBLE_CLASS: &str = "is-visible";
/// Fraction of an element that must be on screen before the observer reports it.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Per-element reveal flags for one page load. Flags only ever go from
/// hidden to visible.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Records one intersection report. Returns true only the first time an
    /// element comes into view; scrolling it back out changes nothing.
    pub fn observe(&mut self, id: usize, is_intersecting: bool) -> bool {
        match self.revealed.get_mut(id) {
            Some(flag) if is_intersecting && !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Marks everything visible, for browsers without intersection support.
    /// Returns the ids that were still hidden.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let mut newly = Vec::new();
        for (id, flag) in self.revealed.iter_mut().enumerate() {
            if !*flag {
                *flag = true;
                newly.push(id);
            }
        }
        newly
    }
}

/// Splits marked elements, given whether each sits inside another marked
/// element, into the ones to watch and the nested ones. Nested markers are
/// dropped so an element fades in with its ancestor and not a second time.
pub fn split_nested(inside_marked: &[bool]) -> (Vec<usize>, Vec<usize>) {
    (0..inside_marked.len()).partition(|&i| !inside_marked[i])
}

pub fn parse_reveal_id(raw: Option<String>) -> Option<usize> {
    raw.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_start_hidden() {
        let tracker = RevealTracker::new(3);
        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.revealed_count(), 0);
    }

    #[test]
    fn first_intersection_reveals_once() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, true));
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
    }

    #[test]
    fn revealed_elements_never_hide_again() {
        let mut tracker = RevealTracker::new(4);
        let reports = [(1, true), (1, false), (2, false), (3, true), (1, false), (3, false)];
        let mut seen = vec![false; 4];
        for (id, hit) in reports {
            tracker.observe(id, hit);
            for (i, was) in seen.iter_mut().enumerate() {
                assert!(!*was || tracker.is_revealed(i), "element {} was hidden again", i);
                *was = tracker.is_revealed(i);
            }
        }
        assert_eq!(tracker.revealed_count(), 2);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(7, true));
        assert!(!tracker.is_revealed(7));
    }

    #[test]
    fn fallback_reveals_whatever_is_still_hidden() {
        let mut tracker = RevealTracker::new(3);
        tracker.observe(1, true);
        assert_eq!(tracker.reveal_all(), vec![0, 2]);
        assert_eq!(tracker.revealed_count(), 3);
        assert!(tracker.reveal_all().is_empty());
    }

    #[test]
    fn nested_markers_are_not_watched() {
        // section heading, a grid with two marked cards inside, a form
        let (watched, nested) = split_nested(&[false, false, true, true, false]);
        assert_eq!(watched, vec![0, 1, 4]);
        assert_eq!(nested, vec![2, 3]);
    }

    #[test]
    fn reveal_ids_parse_from_attributes() {
        assert_eq!(parse_reveal_id(Some("12".to_string())), Some(12));
        assert_eq!(parse_reveal_id(Some("x".to_string())), None);
        assert_eq!(parse_reveal_id(None), None);
    }
}
