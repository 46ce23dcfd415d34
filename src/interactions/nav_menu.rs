use std::rc::Rc;

use yew::Reducible;

pub enum MenuAction {
    Toggle,
    /// A navigation link was selected.
    Navigate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => Self { open: !self.open },
            MenuAction::Navigate => Self { open: false },
        }
    }
}

impl Reducible for NavMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!NavMenu::default().open);
    }

    #[test]
    fn toggle_flips() {
        let menu = NavMenu::default().apply(MenuAction::Toggle);
        assert!(menu.open);
        assert!(!menu.apply(MenuAction::Toggle).open);
    }

    #[test]
    fn navigating_closes_an_open_menu() {
        let menu = NavMenu::default().apply(MenuAction::Toggle);
        assert!(!menu.apply(MenuAction::Navigate).open);
    }

    #[test]
    fn navigating_keeps_a_closed_menu_closed() {
        assert!(!NavMenu::default().apply(MenuAction::Navigate).open);
    }
}
