use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::theme;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>{theme::TOKENS}</style>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1rem;
                    background: var(--bg-gradient);
                    text-align: center;
                }
                .not-found-inner { max-width: 28rem; }
                .not-found-code { font-size: 3.75rem; font-weight: 700; color: var(--primary); margin: 0 0 1rem; }
                .not-found-title { font-size: 1.5rem; font-weight: 600; margin: 0 0 .5rem; }
                .not-found-text { color: var(--text-secondary); margin-bottom: 2rem; }
                .not-found-sections { margin-top: 1rem; font-size: .875rem; color: var(--text-secondary); }
                .not-found-sections a { color: var(--secondary); margin: 0 .5rem; }
                .not-found-sections a:hover { text-decoration: underline; }
                "#}
            </style>
            <div class="not-found-inner">
                <h1 class="not-found-code">{"404"}</h1>
                <h2 class="not-found-title">{"Page Not Found"}</h2>
                <p class="not-found-text">{"Sorry, we couldn't find the page you're looking for."}</p>

                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Go Home"}
                </Link<Route>>

                <div class="not-found-sections">
                    <p>{"Or visit our main sections:"}</p>
                    <div>
                        <a href={config::home_anchor("about")}>{"About"}</a>
                        <a href={config::home_anchor("demo")}>{"Demo"}</a>
                        <a href={config::home_anchor("contact")}>{"Contact"}</a>
                    </div>
                </div>
            </div>
        </div>
    }
}
