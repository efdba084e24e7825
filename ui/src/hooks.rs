//! Component-scoped hooks over the platform signal sources.
//!
//! Browser callbacks never write signals directly. They push into an
//! unbounded channel drained by a task spawned in the owning scope, so the
//! task (and with it every signal write) goes away when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::platform::{ScrollSignal, Subscription};
use crate::core::scroll::{HeaderFlags, ScrollTracker};
use crate::i18n::{self, Language};

/// Injectable scroll source. Provide one with `use_context_provider` to
/// override the platform default (tests, embedded previews).
#[derive(Clone)]
pub struct ScrollSource(pub Rc<dyn ScrollSignal>);

impl ScrollSource {
    pub fn new(signal: impl ScrollSignal + 'static) -> Self {
        Self(Rc::new(signal))
    }

    /// `window` scroll events in the browser; an idle manual source elsewhere.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(crate::core::platform::WindowScroll)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(crate::core::platform::ManualScroll::new())
        }
    }
}

/// Header flags derived from scroll samples for the lifetime of the caller.
pub fn use_scroll_flags() -> ReadOnlySignal<HeaderFlags> {
    let mut flags = use_signal(HeaderFlags::default);
    let injected = try_use_context::<ScrollSource>();

    let subscription: Rc<RefCell<Option<Subscription>>> = use_hook(move || {
        let (tx, mut rx) = futures_channel::mpsc::unbounded::<f64>();
        spawn(async move {
            let mut tracker = ScrollTracker::new();
            while let Some(y) = rx.next().await {
                let next = tracker.observe(y);
                if *flags.peek() != next {
                    flags.set(next);
                }
            }
        });

        let source = injected.unwrap_or_else(ScrollSource::platform);
        let attached = source.0.subscribe(Box::new(move |y| {
            let _ = tx.unbounded_send(y);
        }));
        match attached {
            Ok(sub) => Rc::new(RefCell::new(Some(sub))),
            Err(err) => {
                tracing::warn!(%err, "scroll tracking unavailable; header stays in its top state");
                Rc::new(RefCell::new(None))
            }
        }
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    flags.into()
}

/// Reactive handle to the active language.
///
/// Uses the app-wide `Signal<Language>` when the platform shell provides one,
/// otherwise a component-local signal seeded from the loader.
pub fn use_language() -> Signal<Language> {
    let shared = try_use_context::<Signal<Language>>();
    let local = use_signal(i18n::current_language);
    shared.unwrap_or(local)
}

/// Switch language, persist the choice and notify subscribers of `lang_signal`.
pub fn switch_language(mut lang_signal: Signal<Language>, lang: Language) {
    if *lang_signal.peek() == lang && i18n::current_language() == lang {
        return;
    }
    match i18n::set_language(lang) {
        Ok(()) => {
            tracing::debug!(lang = lang.code(), "language switched");
            lang_signal.set(lang);
        }
        Err(err) => tracing::warn!(%err, lang = lang.code(), "language switch failed"),
    }
}
