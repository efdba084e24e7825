//! Platform detection and viewport signal sources.
//!
//! - [`ScrollSignal`]: passive scroll-offset notifications.
//! - `IntersectionWatcher` (wasm only): [`VisibilityWatcher`] backed by the
//!   browser's `IntersectionObserver`.
//!
//! Non-browser builds (tests, native tooling) get [`ManualScroll`], which is
//! fed explicitly, and no intersection primitive, so reveals fail open.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use super::reveal::{RevealOptions, VisibilityCallback, VisibilitySample, VisibilityWatcher, WatchHandle};
use super::reveal::WatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Unknown,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux")) {
            Self::Desktop
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Desktop => "desktop",
            Platform::Unknown => "unknown",
        }
    }
}

pub type ScrollCallback = Box<dyn FnMut(f64)>;

/// Active scroll subscription; unsubscribes on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Source of vertical scroll offsets (px from document top).
pub trait ScrollSignal {
    fn subscribe(&self, on_sample: ScrollCallback) -> Result<Subscription, WatchError>;
}

/// In-process scroll source. Samples are delivered synchronously by [`ManualScroll::push`].
#[derive(Clone, Default)]
pub struct ManualScroll {
    inner: Rc<ManualInner>,
}

#[derive(Default)]
struct ManualInner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Rc<RefCell<ScrollCallback>>)>>,
}

impl ManualScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, y: f64) {
        let listeners: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for listener in listeners {
            (listener.borrow_mut())(y);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl ScrollSignal for ManualScroll {
    fn subscribe(&self, on_sample: ScrollCallback) -> Result<Subscription, WatchError> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(on_sample))));
        let inner = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        }))
    }
}

/// `window` scroll events, attached as passive listeners.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

#[cfg(target_arch = "wasm32")]
impl ScrollSignal for WindowScroll {
    fn subscribe(&self, mut on_sample: ScrollCallback) -> Result<Subscription, WatchError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(WatchError::Unsupported)?;
        let reader = window.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            on_sample(reader.scroll_y().unwrap_or(0.0));
        });

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                listener.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| WatchError::Attach(format!("{err:?}")))?;
        tracing::debug!("scroll listener attached");

        Ok(Subscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            tracing::debug!("scroll listener removed");
            drop(listener);
        }))
    }
}

/// [`VisibilityWatcher`] on top of the browser `IntersectionObserver`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionWatcher;

#[cfg(target_arch = "wasm32")]
impl VisibilityWatcher for IntersectionWatcher {
    type Target = web_sys::Element;

    fn watch(
        &self,
        target: &Self::Target,
        options: &RevealOptions,
        mut notify: VisibilityCallback,
    ) -> Result<WatchHandle, WatchError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        let threshold = options.effective_threshold();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample = VisibilitySample {
                        ratio: entry.intersection_ratio(),
                        intersecting: entry.is_intersecting(),
                    };
                    if sample.intersecting && sample.ratio >= threshold {
                        // Stop observing before handing off so no later entry is delivered.
                        observer.disconnect();
                        notify(sample);
                        return;
                    }
                    notify(sample);
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&options.root_margin.to_string());

        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| WatchError::Attach(format!("{err:?}")))?;
        observer.observe(target);

        Ok(WatchHandle::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_build_reports_desktop_or_unknown() {
        assert_ne!(Platform::current(), Platform::Web);
        assert_ne!(Platform::current().as_str(), "web");
    }

    #[test]
    fn manual_scroll_delivers_until_unsubscribed() {
        let source = ManualScroll::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = source
            .subscribe(Box::new(move |y| sink.borrow_mut().push(y)))
            .unwrap();
        source.push(10.0);
        source.push(20.0);
        assert_eq!(source.listener_count(), 1);
        drop(sub);
        assert_eq!(source.listener_count(), 0);
        source.push(30.0);
        assert_eq!(*seen.borrow(), vec![10.0, 20.0]);
    }

    #[test]
    fn subscription_outliving_source_is_harmless() {
        let source = ManualScroll::new();
        let mut sub = source.subscribe(Box::new(|_| {})).unwrap();
        drop(source);
        sub.unsubscribe();
        sub.unsubscribe();
    }
}
