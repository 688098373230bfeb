// =============================================================================
// XYVOX Web - Reveal on View
// =============================================================================
// Table of Contents:
// 1. Observer Errors
// 2. ViewportObserver (RAII guard)
// 3. use_reveal Hook
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use xyvox_common::{RevealMargin, RevealState};

// -----------------------------------------------------------------------------
// 1. Observer Errors
// -----------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("IntersectionObserver rejected: {0}")]
    Rejected(String),
}

impl From<JsValue> for ObserverError {
    fn from(value: JsValue) -> Self {
        ObserverError::Rejected(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

// -----------------------------------------------------------------------------
// 2. ViewportObserver (RAII guard)
// -----------------------------------------------------------------------------

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches one element and calls `on_enter` the first time it intersects
/// the viewport. Dropping the guard disconnects the observer.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    pub fn observe_once(
        target: &Element,
        margin: RevealMargin,
        mut on_enter: impl FnMut() + 'static,
    ) -> Result<Self, ObserverError> {
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entered = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                if entered {
                    // One-shot: nothing left to watch after the first entry
                    observer.disconnect();
                    on_enter();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&margin.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!("viewport observer released");
    }
}

// -----------------------------------------------------------------------------
// 3. use_reveal Hook
// -----------------------------------------------------------------------------

/// Reveal signal for the element behind `node_ref`.
///
/// Turns `true` the first time the element enters the viewport (shifted by
/// `margin`) and stays `true` until unmount. The observer is released when
/// the owning component unmounts. If the browser refuses to create an
/// observer the element is revealed straight away.
pub fn use_reveal(node_ref: NodeRef<Div>, margin: RevealMargin) -> Signal<bool> {
    let state = RwSignal::new(RevealState::default());

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if !state.get_untracked().wants_observation() {
            return;
        }

        let on_enter = move || {
            state.update(|s| {
                if s.observe(true) {
                    log::debug!("revealed (margin {})", margin.root_margin());
                }
            });
        };

        match ViewportObserver::observe_once(&element, margin, on_enter) {
            Ok(observer) => {
                let guard = SendWrapper::new(observer);
                on_cleanup(move || drop(guard));
            }
            Err(err) => {
                log::warn!("{}, revealing immediately", err);
                state.update(|s| {
                    s.force();
                });
            }
        }
    });

    Signal::derive(move || state.get().is_revealed())
}
