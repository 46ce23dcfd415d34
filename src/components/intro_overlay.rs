use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::interactions::intro::{arm_timers, IntroAction, IntroConfig, IntroOverlay as Intro};
use crate::interactions::timers::{BrowserTimer, TimerKind};

/// Full-screen intro video shown once per page load.
#[function_component(IntroOverlay)]
pub fn intro_overlay() -> Html {
    let intro = use_reducer(|| Intro::new(IntroConfig::default(), browser::prefers_reduced_motion()));

    // Re-armed whenever `is_playing` flips; dismissal drops the old set,
    // which cancels both the interval and the timeout.
    {
        let handle = intro.clone();
        use_effect_with_deps(
            move |_| {
                let timers = arm_timers(&handle, |kind| match kind {
                    TimerKind::Every(ms) => {
                        let handle = handle.clone();
                        BrowserTimer::Interval {
                            _handle: Interval::new(ms, move || handle.dispatch(IntroAction::Tick)),
                        }
                    }
                    TimerKind::After(ms) => {
                        let handle = handle.clone();
                        BrowserTimer::Timeout {
                            _handle: Timeout::new(ms, move || handle.dispatch(IntroAction::Deadline)),
                        }
                    }
                });
                if timers.is_empty() {
                    log::debug!("intro overlay inactive: {:?}", handle.dismissed_by());
                } else {
                    log::debug!("intro overlay armed {} timers", timers.pending());
                }
                move || drop(timers)
            },
            intro.is_playing(),
        );
    }

    if !intro.is_playing() {
        return html! {};
    }

    let on_skip = {
        let intro = intro.clone();
        Callback::from(move |_: MouseEvent| intro.dispatch(IntroAction::Skip))
    };
    let on_ended = {
        let intro = intro.clone();
        Callback::from(move |_: Event| intro.dispatch(IntroAction::VideoEnded))
    };
    let on_error = {
        let intro = intro.clone();
        Callback::from(move |_: Event| intro.dispatch(IntroAction::VideoFailed))
    };

    html! {
        <div class="intro-overlay" role="dialog" aria-label="Introduction video">
            <video
                class="intro-video"
                src={config::asset_url(config::INTRO_VIDEO_PATH)}
                autoplay=true
                muted=true
                playsinline=true
                onended={on_ended}
                onerror={on_error}
            />
            <div class="intro-controls">
                <div class="intro-progress">
                    <div class="intro-progress-bar" style={format!("width: {:.2}%;", intro.progress())}></div>
                </div>
                <button class="btn btn-ghost intro-skip" onclick={on_skip}>
                    {intro.skip_label()}
                </button>
            </div>
        </div>
    }
}
