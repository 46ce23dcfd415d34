use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions};
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::interactions::header::{is_elevated, SCROLL_EVENT, SCROLL_LISTENER_PASSIVE};
use crate::interactions::nav_menu::{MenuAction, NavMenu};

pub const NAV_LINKS: [(&str, &str); 8] = [
    ("#about", "About"),
    ("#how", "How it works"),
    ("#tech", "Tech"),
    ("#roadmap", "Roadmap"),
    ("#market", "Market"),
    ("#demo", "POC Demo"),
    ("#contact", "Contact"),
    ("#press", "Press"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(NavMenu::default);
    let is_scrolled = use_state(|| is_elevated(browser::scroll_y()));

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        is_scrolled.set(is_elevated(browser::scroll_y()));
                    }) as Box<dyn FnMut()>);

                    // Initial check, the page may have loaded already scrolled
                    let _ = scroll_callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&wasm_bindgen::JsValue::NULL);

                    let options = AddEventListenerOptions::new();
                    options.set_passive(SCROLL_LISTENER_PASSIVE);
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        SCROLL_EVENT,
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            SCROLL_EVENT,
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    // Anchors keep their default behaviour so the browser still scrolls.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Navigate))
    };

    let logo_src = config::asset_url(config::LOGO_PATH);

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#home" class="nav-logo">
                    <img src={logo_src} alt="Networkof.One" />
                    <span>{"Networkof.One"}</span>
                </a>

                <nav class="nav-desktop">
                    {
                        NAV_LINKS.iter().map(|(href, label)| html! {
                            <a class="nav-link" href={*href}>{*label}</a>
                        }).collect::<Html>()
                    }
                    <a href="#join" class="btn btn-primary header-cta">
                        <span class="spark" aria-hidden="true"></span>
                        {"Join the network"}
                    </a>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5">
                        {
                            if menu.open {
                                html! { <path d="M18 6L6 18M6 6l12 12" /> }
                            } else {
                                html! { <path d="M4 6h16M4 12h16M4 18h16" /> }
                            }
                        }
                    </svg>
                </button>
            </div>

            {
                if menu.open {
                    html! {
                        <nav class="mobile-menu">
                            {
                                NAV_LINKS.iter().map(|(href, label)| html! {
                                    <a class="mobile-menu-item" href={*href} onclick={close_menu.clone()}>
                                        {*label}
                                    </a>
                                }).collect::<Html>()
                            }
                            <div class="mobile-menu-cta">
                                <a href="#join" class="btn btn-primary" onclick={close_menu.clone()}>
                                    {"Join the network"}
                                </a>
                            </div>
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
