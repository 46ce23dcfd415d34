use yew::prelude::*;

use crate::components::media::FallbackImage;
use crate::config;
use crate::interactions::lightbox::{Lightbox, LightboxAction};

/// System diagram thumbnail that opens a full-screen view.
#[function_component(DiagramLightbox)]
pub fn diagram_lightbox() -> Html {
    let lightbox = use_reducer(Lightbox::default);
    let src = AttrValue::from(config::asset_url(config::DIAGRAM_PATH));

    let open = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::ThumbnailClick))
    };
    let on_backdrop = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::BackdropClick))
    };
    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            lightbox.dispatch(LightboxAction::CloseButton)
        })
    };
    // Keeps the click from reaching the backdrop.
    let on_image = {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            lightbox.dispatch(LightboxAction::ImageClick)
        })
    };

    html! {
        <>
            <div class="diagram-card" data-reveal="">
                <div class="diagram-thumb" onclick={open}>
                    <FallbackImage
                        src={src.clone()}
                        alt="Network of One System Architecture Diagram"
                        class="diagram-image"
                    />
                    <div class="diagram-hover">
                        <span class="diagram-hover-icon">
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M15 3h6v6M10 14 21 3M21 14v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h7" />
                            </svg>
                        </span>
                    </div>
                </div>
                <p class="diagram-caption">{"Click to view full system architecture diagram"}</p>
            </div>
            {
                if lightbox.open {
                    html! {
                        <div class="image-modal" onclick={on_backdrop}>
                            <div class="image-modal-frame">
                                <FallbackImage
                                    src={src}
                                    alt="Network of One System Architecture Diagram - Full View"
                                    class="image-modal-content"
                                    onclick={on_image}
                                />
                                <button class="image-modal-close" onclick={on_close} aria-label="Close modal">
                                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                        <path d="M18 6L6 18M6 6l12 12" />
                                    </svg>
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
