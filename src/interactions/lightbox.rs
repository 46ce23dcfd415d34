use std::rc::Rc;

use yew::Reducible;

pub enum LightboxAction {
    ThumbnailClick,
    CloseButton,
    BackdropClick,
    /// Clicks on the enlarged image itself never close the lightbox.
    ImageClick,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    pub open: bool,
}

impl Lightbox {
    pub fn apply(self, action: LightboxAction) -> Self {
        match action {
            LightboxAction::ThumbnailClick => Self { open: true },
            LightboxAction::CloseButton | LightboxAction::BackdropClick => Self { open: false },
            LightboxAction::ImageClick => self,
        }
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> Lightbox {
        Lightbox::default().apply(LightboxAction::ThumbnailClick)
    }

    #[test]
    fn thumbnail_opens() {
        assert!(!Lightbox::default().open);
        assert!(opened().open);
    }

    #[test]
    fn clicking_the_image_keeps_it_open() {
        assert!(opened().apply(LightboxAction::ImageClick).open);
    }

    #[test]
    fn backdrop_and_close_button_close_it() {
        assert!(!opened().apply(LightboxAction::BackdropClick).open);
        assert!(!opened().apply(LightboxAction::CloseButton).open);
    }

    #[test]
    fn ignored_clicks_do_not_rerender() {
        let state = Rc::new(opened());
        let next = state.clone().reduce(LightboxAction::ImageClick);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
