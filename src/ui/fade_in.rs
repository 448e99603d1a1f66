//! Scroll-triggered fade-in
//!
//! Elements with the `fade-in` class start transparent and receive `visible` the
//! first time at least a tenth of them scrolls into view. Only elements present
//! when the page hydrates are observed, and none is ever unobserved.

use leptos::prelude::*;

/// Starts observing fade-in targets once the page is interactive
#[component]
pub fn FadeInObserver() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if let Err(e) = observe_fade_in_targets() {
            leptos::logging::warn!("Fade-in disabled: {}", e);
        }
    });
}

#[cfg(not(feature = "ssr"))]
fn observe_fade_in_targets() -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::visibility::{FADE_IN_CLASS, REVEAL_THRESHOLD};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;

    let nodes = document
        .query_selector_all(&format!(".{}", FADE_IN_CLASS))
        .map_err(|e| format!("{:?}", e))?;
    let targets: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    if targets.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                reveal_on(&entry.target(), entry.is_intersecting(), entry.intersection_ratio());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&REVEAL_THRESHOLD.into());

    let observer = match IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            // Without an observer nothing would ever fade in, so show everything
            for target in &targets {
                reveal_on(target, true, 1.0);
            }
            return Err(format!("IntersectionObserver unavailable: {:?}", e));
        }
    };

    for target in &targets {
        observer.observe(target);
    }

    // Observation lasts for the whole page session
    on_intersect.forget();

    Ok(())
}

/// Apply one observation to an element, using its class list as the latch
#[cfg(not(feature = "ssr"))]
fn reveal_on(element: &web_sys::Element, is_intersecting: bool, ratio: f64) {
    use crate::core::visibility::{RevealLatch, VISIBLE_CLASS};

    let class_list = element.class_list();
    let mut latch = if class_list.contains(VISIBLE_CLASS) {
        RevealLatch::Visible
    } else {
        RevealLatch::Hidden
    };

    if !latch.observe(is_intersecting, ratio) {
        return;
    }

    if let Err(e) = class_list.add_1(VISIBLE_CLASS) {
        leptos::logging::warn!("Failed to reveal element: {:?}", e);
    }
}
