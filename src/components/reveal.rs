use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::browser;
use crate::interactions::reveal::{
    parse_reveal_id, split_nested, RevealTracker, REVEAL_ID, REVEAL_MARKER, VISIBILITY_THRESHOLD,
    VISIBLE_CLASS,
};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn inside_marked(element: &Element, selector: &str) -> bool {
    element
        .parent_element()
        .and_then(|parent| parent.closest(selector).ok().flatten())
        .is_some()
}

/// Outermost marked elements. Markers nested inside another marked element
/// are removed so those elements show along with their ancestor.
fn marked_elements() -> Vec<Element> {
    let Some(document) = browser::document() else {
        return Vec::new();
    };
    let selector = format!("[{}]", REVEAL_MARKER);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return Vec::new();
    };
    let elements: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    let inside: Vec<bool> = elements.iter().map(|e| inside_marked(e, &selector)).collect();
    let (watched, nested) = split_nested(&inside);
    if !nested.is_empty() {
        log::debug!("dropping {} nested reveal markers", nested.len());
    }
    for id in nested {
        let _ = elements[id].remove_attribute(REVEAL_MARKER);
    }
    watched.into_iter().map(|id| elements[id].clone()).collect()
}

fn show(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}

fn observe_all(
    elements: &[Element],
    tracker: Rc<RefCell<RevealTracker>>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(id) = parse_reveal_id(target.get_attribute(REVEAL_ID)) else {
                continue;
            };
            let mut flags = tracker.borrow_mut();
            if flags.observe(id, entry.is_intersecting()) {
                show(&target);
            }
            if flags.is_revealed(id) {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for element in elements {
        observer.observe(element);
    }
    Some((observer, callback))
}

/// Fades in every `[data-reveal]` element the first time it scrolls into
/// view. Without IntersectionObserver everything is shown straight away.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let elements = marked_elements();
            for (id, element) in elements.iter().enumerate() {
                let _ = element.set_attribute(REVEAL_ID, &id.to_string());
            }
            let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));

            let observer = if browser::supports_intersection_observer() {
                observe_all(&elements, tracker.clone())
            } else {
                None
            };
            if observer.is_none() {
                for id in tracker.borrow_mut().reveal_all() {
                    if let Some(element) = elements.get(id) {
                        show(element);
                    }
                }
            }
            log::debug!("watching {} reveal elements", tracker.borrow().len());

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
                log::debug!(
                    "reveal watcher released, {} of {} shown",
                    tracker.borrow().revealed_count(),
                    tracker.borrow().len()
                );
            }
        },
        (),
    );
}
