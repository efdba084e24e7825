use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::reveal::{
    reveal_class, transition_delay_style, RevealDirection, RevealOptions, RevealSession,
    RootMargin, VisibilityCallback, VisibilityWatcher, WatchError, WatchHandle,
    DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD,
};

/// Wraps a block and slides it in the first time it scrolls into view.
///
/// ```ignore
/// rsx! {
///     ScrollReveal { delay: 200,
///         div { class: "feature-card", /* ... */ }
///     }
/// }
/// ```
///
/// The watch starts when the wrapper mounts and ends at the first reveal or at
/// unmount, whichever comes first. Without an intersection primitive the
/// block is revealed straight away.
#[component]
pub fn ScrollReveal(
    children: Element,
    #[props(default)] delay: u32,
    #[props(default)] direction: RevealDirection,
    #[props(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[props(into, default = DEFAULT_ROOT_MARGIN.to_string())] root_margin: String,
) -> Element {
    let mut revealed = use_signal(|| false);
    let options = use_reveal_options(delay, direction, threshold, root_margin);

    let reveal_tx = use_hook(move || {
        let (tx, mut rx) = futures_channel::mpsc::unbounded::<u32>();
        spawn(async move {
            if rx.next().await.is_some() {
                revealed.set(true);
            }
        });
        tx
    });

    let session: Rc<RefCell<Option<RevealSession>>> = use_hook(|| Rc::new(RefCell::new(None)));
    {
        let session = session.clone();
        use_drop(move || {
            session.borrow_mut().take();
        });
    }

    let onmounted = move |evt: MountedEvent| {
        if session.borrow().is_some() {
            return;
        }
        let tx = reveal_tx.clone();
        let started = start_session(&evt.data(), options, move |delay| {
            let _ = tx.unbounded_send(delay);
        });
        *session.borrow_mut() = Some(started);
    };

    let class = reveal_class(direction, revealed());
    let style = transition_delay_style(delay);

    rsx! {
        div { class, style, onmounted: onmounted, {children} }
    }
}

/// Options resolved once at mount. Later prop changes do not reach a running
/// session, and an invalid margin is only reported once.
fn use_reveal_options(
    delay: u32,
    direction: RevealDirection,
    threshold: f64,
    root_margin: String,
) -> RevealOptions {
    use_hook(move || reveal_options(delay, direction, threshold, &root_margin))
}

fn reveal_options(delay: u32, direction: RevealDirection, threshold: f64, root_margin: &str) -> RevealOptions {
    let root_margin = root_margin.parse::<RootMargin>().unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid reveal root margin; using default");
        RootMargin::default()
    });
    RevealOptions {
        threshold,
        root_margin,
        delay_ms: delay,
        direction,
    }
}

/// Stand-in watcher for environments without an intersection primitive.
struct NoIntersection;

impl VisibilityWatcher for NoIntersection {
    type Target = ();

    fn watch(
        &self,
        _target: &(),
        _options: &RevealOptions,
        _notify: VisibilityCallback,
    ) -> Result<WatchHandle, WatchError> {
        Err(WatchError::Unsupported)
    }
}

#[cfg(target_arch = "wasm32")]
fn start_session(
    mounted: &MountedData,
    options: RevealOptions,
    on_reveal: impl FnOnce(u32) + 'static,
) -> RevealSession {
    match mounted.downcast::<web_sys::Element>() {
        Some(element) => RevealSession::start(
            &crate::core::platform::IntersectionWatcher,
            element,
            options,
            on_reveal,
        ),
        None => RevealSession::start(&NoIntersection, &(), options, on_reveal),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn start_session(
    _mounted: &MountedData,
    options: RevealOptions,
    on_reveal: impl FnOnce(u32) + 'static,
) -> RevealSession {
    RevealSession::start(&NoIntersection, &(), options, on_reveal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_fall_back_to_default_margin() {
        let opts = reveal_options(250, RevealDirection::Left, 0.2, "bogus");
        assert_eq!(opts.root_margin, RootMargin::default());
        assert_eq!(opts.delay_ms, 250);
        assert_eq!(opts.direction, RevealDirection::Left);

        let custom = reveal_options(0, RevealDirection::Up, 0.1, "10px 0px");
        assert_eq!(custom.root_margin.top, 10.0);
        assert_eq!(custom.root_margin.bottom, 10.0);
    }

    #[derive(Clone)]
    struct SeenOptions {
        margin: Rc<RefCell<String>>,
        renders: Rc<RefCell<Vec<RevealOptions>>>,
    }

    #[allow(non_snake_case)]
    fn OptionsHarness() -> Element {
        let seen = use_context::<SeenOptions>();
        let margin = seen.margin.borrow().clone();
        let options = use_reveal_options(120, RevealDirection::Right, 0.25, margin);
        seen.renders.borrow_mut().push(options);
        rsx! {}
    }

    #[test]
    fn options_are_resolved_once_per_mount() {
        let seen = SeenOptions {
            margin: Rc::new(RefCell::new("bogus".to_string())),
            renders: Rc::new(RefCell::new(Vec::new())),
        };
        let mut dom = VirtualDom::new(OptionsHarness).with_root_context(seen.clone());
        dom.rebuild_in_place();

        *seen.margin.borrow_mut() = "10px".to_string();
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);

        let renders = seen.renders.borrow();
        assert_eq!(renders.len(), 2);
        assert_eq!(renders[0].root_margin, RootMargin::default());
        assert_eq!(renders[0].delay_ms, 120);
        assert_eq!(renders[1], renders[0]);
    }

    #[test]
    fn unsupported_environment_reveals_immediately() {
        let fired = Rc::new(RefCell::new(None));
        let sink = fired.clone();
        let session = RevealSession::start(&NoIntersection, &(), RevealOptions::with_delay(300), move |d| {
            *sink.borrow_mut() = Some(d);
        });
        assert!(session.is_revealed());
        assert_eq!(*fired.borrow(), Some(300));
    }
}
