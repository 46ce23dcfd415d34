use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MediaProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Block rendered in place of media that failed to load. It takes over the
/// element's click handler so a degraded image behaves like the real one.
struct Placeholder {
    class: Classes,
    label: AttrValue,
    onclick: Option<Callback<MouseEvent>>,
}

impl Placeholder {
    fn for_image(props: &MediaProps) -> Self {
        Self {
            class: props.class.clone(),
            label: props.alt.clone(),
            onclick: props.onclick.clone(),
        }
    }

    fn for_video(props: &VideoProps) -> Self {
        Self {
            class: props.class.clone(),
            label: AttrValue::from("Video"),
            onclick: None,
        }
    }

    fn view(self) -> Html {
        html! {
            <div
                class={classes!(self.class, "media-placeholder")}
                role="img"
                aria-label={self.label}
                onclick={self.onclick}
            >
                {"Media unavailable"}
            </div>
        }
    }
}

/// `<img>` that swaps itself for a placeholder block if it fails to load.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &MediaProps) -> Html {
    let failed = use_state(|| false);
    if *failed {
        return Placeholder::for_image(props).view();
    }
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };
    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading="lazy"
            {onerror}
            onclick={props.onclick.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Muted, looping, autoplaying background clip; otherwise a player with controls.
    #[prop_or_default]
    pub ambient: bool,
}

#[function_component(FallbackVideo)]
pub fn fallback_video(props: &VideoProps) -> Html {
    let failed = use_state(|| false);
    if *failed {
        return Placeholder::for_video(props).view();
    }
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };
    if props.ambient {
        html! {
            <video
                src={props.src.clone()}
                class={props.class.clone()}
                autoplay=true
                muted=true
                playsinline=true
                loop=true
                {onerror}
            />
        }
    } else {
        html! {
            <video
                src={props.src.clone()}
                class={props.class.clone()}
                controls=true
                playsinline=true
                preload="metadata"
                {onerror}
            />
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_image_keeps_its_click_handler() {
        let onclick = Callback::from(|_: MouseEvent| ());
        let props = MediaProps {
            src: AttrValue::from("/assets/systemdiagram.png"),
            alt: AttrValue::from("Diagram"),
            class: classes!("image-modal-content"),
            onclick: Some(onclick.clone()),
        };
        let placeholder = Placeholder::for_image(&props);
        assert!(placeholder.onclick == Some(onclick));
        assert_eq!(&*placeholder.label, "Diagram");
    }

    #[test]
    fn image_without_handler_degrades_to_an_inert_block() {
        let props = MediaProps {
            src: AttrValue::from("/assets/img/logo-white.jpg"),
            alt: AttrValue::default(),
            class: Classes::new(),
            onclick: None,
        };
        assert!(Placeholder::for_image(&props).onclick.is_none());
    }
}
