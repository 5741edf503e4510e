//! One-shot viewport reveal tracking for entrance animations.
//!
//! DESIGN
//! ======
//! Every animated section hands its root element to [`use_reveal`] and gets a
//! boolean signal back. The signal flips to `true` the first time enough of
//! the element scrolls into view and then stays `true` for the rest of the
//! page's life: entrance transitions play once, and scrolling back out never
//! re-hides a section.
//!
//! Intersection reporting sits behind the [`IntersectionSource`] trait so the
//! latch and its subscription lifecycle can be exercised without a browser.
//! The browser-backed source wraps one `IntersectionObserver` per watched
//! element, mirroring how the page actually consumes it.

use leptos::html::Div;
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use std::collections::HashMap;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Directive a fraction callback returns to its source: keep reporting, or
/// tear the subscription down.
///
/// Returning [`Watch::Stop`] is the only way a callback may end its own
/// subscription; calling [`IntersectionSource::cancel`] from inside a
/// callback would re-enter the source mid-delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Keep,
    Stop,
}

/// Callback fed the watched element's latest visible fraction, in `[0, 1]`.
pub type FractionCallback = Box<dyn FnMut(f64) -> Watch>;

/// Handle identifying one active subscription on the source that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CancelToken(u64);

/// Something that can report how much of an element is visible.
///
/// `threshold` tunes how eagerly the source reports; the decision to reveal
/// stays with the subscriber's callback.
pub trait IntersectionSource {
    /// Element handle understood by this source.
    type Target;

    /// Starts watching `target`. The callback receives every reported
    /// fraction until it returns [`Watch::Stop`] or the token is cancelled.
    fn subscribe(&self, target: Self::Target, threshold: f64, callback: FractionCallback)
    -> CancelToken;

    /// Stops the subscription identified by `token`, dropping its callback.
    /// Unknown tokens are ignored.
    fn cancel(&self, token: CancelToken);
}

/// The one-shot latch at the heart of every entrance animation.
///
/// Feeds on visible fractions and flips to visible the first time a fraction
/// meets the threshold. Once visible it never goes back, and it asks the
/// source to stop reporting.
#[derive(Clone, Copy, Debug)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    /// Creates a latch for a visible-fraction threshold.
    ///
    /// Out-of-range thresholds are clamped into `[0, 1]` rather than
    /// rejected, and NaN counts as zero. A zero threshold still waits for the
    /// first actually-visible sliver: a fraction of exactly `0.0` never
    /// reveals, since an element with no visible area is not in view.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            visible: false,
        }
    }

    /// Feeds one reported fraction through the latch.
    ///
    /// Returns [`Watch::Stop`] once visible so the source can unsubscribe;
    /// the flip happens at most once per latch.
    pub fn observe(&mut self, fraction: f64) -> Watch {
        if self.visible {
            return Watch::Stop;
        }
        if fraction > 0.0 && fraction >= self.threshold {
            self.visible = true;
            return Watch::Stop;
        }
        Watch::Keep
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The clamped threshold this latch reveals at.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Subscribes `target` on `source` and runs `on_reveal` exactly once, the
/// first time the reported fraction satisfies `threshold`. The subscription
/// stops itself after revealing; cancel the returned token to stop it early,
/// e.g. when the owning component unmounts before the element is ever seen.
pub fn observe_once<S: IntersectionSource>(
    source: &S,
    target: S::Target,
    threshold: f64,
    on_reveal: impl FnOnce() + 'static,
) -> CancelToken {
    let mut latch = RevealLatch::new(threshold);
    let mut on_reveal = Some(on_reveal);
    source.subscribe(
        target,
        latch.threshold(),
        Box::new(move |fraction| {
            let watch = latch.observe(fraction);
            if latch.is_visible() {
                if let Some(reveal) = on_reveal.take() {
                    reveal();
                }
            }
            watch
        }),
    )
}

/// Browser-backed source: one `IntersectionObserver` per subscription.
#[cfg(target_arch = "wasm32")]
pub struct BrowserIntersections {
    watches: Rc<RefCell<HashMap<u64, WatchHandle>>>,
    next_token: Cell<u64>,
}

#[cfg(target_arch = "wasm32")]
type ObserverClosure =
    wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[cfg(target_arch = "wasm32")]
struct WatchHandle {
    observer: web_sys::IntersectionObserver,
    closure: Rc<RefCell<Option<ObserverClosure>>>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserIntersections {
    #[must_use]
    pub fn new() -> Self {
        Self {
            watches: Rc::new(RefCell::new(HashMap::new())),
            next_token: Cell::new(0),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for BrowserIntersections {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl IntersectionSource for BrowserIntersections {
    type Target = web_sys::Element;

    fn subscribe(
        &self,
        target: web_sys::Element,
        threshold: f64,
        mut callback: FractionCallback,
    ) -> CancelToken {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let token = self.next_token.get();
        self.next_token.set(token + 1);

        // The closure keeps itself alive through this holder and drops itself
        // once the callback asks to stop; wasm-bindgen defers the actual
        // free until the call returns.
        let holder: Rc<RefCell<Option<ObserverClosure>>> = Rc::new(RefCell::new(None));
        let holder_in_cb = Rc::clone(&holder);
        let watches_in_cb = Rc::clone(&self.watches);
        let cb = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let mut stop = false;
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if callback(entry.intersection_ratio()) == Watch::Stop {
                        stop = true;
                    }
                }
                if stop {
                    observer.disconnect();
                    watches_in_cb.borrow_mut().remove(&token);
                    holder_in_cb.borrow_mut().take();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        match web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
        {
            Ok(observer) => {
                observer.observe(&target);
                *holder.borrow_mut() = Some(cb);
                self.watches.borrow_mut().insert(
                    token,
                    WatchHandle {
                        observer,
                        closure: holder,
                    },
                );
            }
            Err(_) => {
                leptos::logging::warn!(
                    "intersection observer unavailable; entrance animations stay hidden"
                );
            }
        }
        CancelToken(token)
    }

    fn cancel(&self, token: CancelToken) {
        if let Some(handle) = self.watches.borrow_mut().remove(&token.0) {
            handle.observer.disconnect();
            handle.closure.borrow_mut().take();
        }
    }
}

/// Returns a node ref to attach to one element plus a signal that flips to
/// `true` once `threshold` of the element has been visible, and never flips
/// back. The underlying subscription is cancelled when the calling component
/// unmounts.
pub fn use_reveal(threshold: f64) -> (NodeRef<Div>, ReadSignal<bool>) {
    let node_ref = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);

    #[cfg(target_arch = "wasm32")]
    {
        let source = Rc::new(BrowserIntersections::new());
        let token: Rc<RefCell<Option<CancelToken>>> = Rc::new(RefCell::new(None));

        Effect::new({
            let source = Rc::clone(&source);
            let token = Rc::clone(&token);
            move |_| {
                let Some(div) = node_ref.get() else {
                    return;
                };
                // Subscribe once, the first time the ref is populated.
                if token.borrow().is_some() {
                    return;
                }
                let element: web_sys::Element = div.into();
                let issued = observe_once(&*source, element, threshold, move || {
                    set_visible.set(true);
                });
                *token.borrow_mut() = Some(issued);
            }
        });

        on_cleanup(move || {
            if let Some(issued) = token.borrow_mut().take() {
                source.cancel(issued);
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = threshold;
        let _ = set_visible;
    }

    (node_ref, visible)
}
