//! Reveal-on-visible: one-shot entrance transitions for page blocks.
//!
//! Each wrapped block owns a [`RevealSession`]. The session asks a
//! [`VisibilityWatcher`] to report how much of the block is inside the
//! (margin-adjusted) viewport. The first report that is intersecting and at or
//! above the threshold flips the block to revealed, fires the reveal callback
//! once, and tears the watch down. Nothing ever hides the block again.
//!
//! Watchers are injected:
//! - `platform::IntersectionWatcher` (browser `IntersectionObserver`)
//! - [`PollingWatcher`] (geometry computed from bounds probes on `poll`)
//!
//! If the watcher cannot attach, the session reveals immediately (fail open).

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

/// Default fraction of the block that must be visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default root margin: unchanged top/sides, bottom edge pulled up by 50px.
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WatchError {
    #[error("visibility watching is not supported in this environment")]
    Unsupported,
    #[error("failed to attach visibility watch: {0}")]
    Attach(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RootMarginError {
    #[error("root margin must have 1 to 4 values, got {0}")]
    Arity(usize),
    #[error("invalid root margin value `{0}` (expected pixels, e.g. `-50px`)")]
    Value(String),
}

/// CSS-style margin applied to the viewport box before the intersection test.
/// Positive values grow the box, negative values shrink it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin {
            bottom: -50.0,
            ..RootMargin::ZERO
        }
    }
}

impl FromStr for RootMargin {
    type Err = RootMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(parse_px)
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            other => return Err(RootMarginError::Arity(other.len())),
        };
        Ok(RootMargin {
            top,
            right,
            bottom,
            left,
        })
    }
}

fn parse_px(raw: &str) -> Result<f64, RootMarginError> {
    let number = raw.strip_suffix("px").unwrap_or(raw);
    let value: f64 = number
        .parse()
        .map_err(|_| RootMarginError::Value(raw.to_string()))?;
    // Unitless values are only valid for zero, as in CSS.
    if !raw.ends_with("px") && value != 0.0 {
        return Err(RootMarginError::Value(raw.to_string()));
    }
    if !value.is_finite() {
        return Err(RootMarginError::Value(raw.to_string()));
    }
    Ok(value)
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Which edge a block slides in from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealDirection::Up => "up",
            RevealDirection::Down => "down",
            RevealDirection::Left => "left",
            RevealDirection::Right => "right",
        }
    }
}

/// Per-block configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub delay_ms: u32,
    pub direction: RevealDirection,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::default(),
            delay_ms: 0,
            direction: RevealDirection::Up,
        }
    }
}

impl RevealOptions {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }

    /// Threshold clamped into `[0, 1]` (NaN becomes the default).
    pub fn effective_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }
}

/// One visibility report for a watched block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySample {
    /// Visible fraction of the block, `0.0..=1.0`.
    pub ratio: f64,
    /// Whether the block touches the margin-adjusted viewport at all.
    pub intersecting: bool,
}

impl VisibilitySample {
    pub fn hidden() -> Self {
        Self {
            ratio: 0.0,
            intersecting: false,
        }
    }

    pub fn visible(ratio: f64) -> Self {
        Self {
            ratio,
            intersecting: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    Revealed,
    Unchanged,
}

/// State of one wrapped block.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    pub revealed_once: bool,
    pub delay_ms: u32,
    pub visibility_threshold: f64,
    pub viewport_margin: RootMargin,
}

impl RevealState {
    pub fn new(options: &RevealOptions) -> Self {
        Self {
            revealed_once: false,
            delay_ms: options.delay_ms,
            visibility_threshold: options.effective_threshold(),
            viewport_margin: options.root_margin,
        }
    }

    pub fn observe(&mut self, sample: VisibilitySample) -> RevealTransition {
        if self.revealed_once {
            return RevealTransition::Unchanged;
        }
        if sample.intersecting && sample.ratio >= self.visibility_threshold {
            self.revealed_once = true;
            RevealTransition::Revealed
        } else {
            RevealTransition::Unchanged
        }
    }

    /// Used when no watch could be attached.
    pub fn force_reveal(&mut self) -> RevealTransition {
        if self.revealed_once {
            RevealTransition::Unchanged
        } else {
            self.revealed_once = true;
            RevealTransition::Revealed
        }
    }
}

/// Disposer for an active watch. Cancels on drop; cancelling twice is a no-op.
pub struct WatchHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl WatchHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for WatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

pub type VisibilityCallback = Box<dyn FnMut(VisibilitySample)>;

/// Capability that reports threshold crossings for a target.
///
/// Implementations may call `notify` synchronously from inside `watch` (an
/// observer always reports the initial state once) and must stop calling it
/// once the returned handle is cancelled.
pub trait VisibilityWatcher {
    type Target;

    fn watch(
        &self,
        target: &Self::Target,
        options: &RevealOptions,
        notify: VisibilityCallback,
    ) -> Result<WatchHandle, WatchError>;
}

/// Drives one block from hidden to revealed.
pub struct RevealSession {
    state: Rc<RefCell<RevealState>>,
    handle: Rc<RefCell<Option<WatchHandle>>>,
}

impl RevealSession {
    /// Attach a watch for `target`. `on_reveal` receives the configured delay
    /// and runs at most once.
    pub fn start<W, F>(watcher: &W, target: &W::Target, options: RevealOptions, on_reveal: F) -> Self
    where
        W: VisibilityWatcher,
        F: FnOnce(u32) + 'static,
    {
        let state = Rc::new(RefCell::new(RevealState::new(&options)));
        let handle: Rc<RefCell<Option<WatchHandle>>> = Rc::new(RefCell::new(None));
        let on_reveal: Rc<RefCell<Option<F>>> = Rc::new(RefCell::new(Some(on_reveal)));

        let notify = {
            let state = state.clone();
            let handle = handle.clone();
            let on_reveal = on_reveal.clone();
            Box::new(move |sample: VisibilitySample| {
                let transition = state.borrow_mut().observe(sample);
                if transition == RevealTransition::Revealed {
                    let delay = state.borrow().delay_ms;
                    tracing::debug!(ratio = sample.ratio, delay_ms = delay, "block revealed");
                    // Take first so a re-entrant drop cannot observe a live handle.
                    let finished = handle.borrow_mut().take();
                    drop(finished);
                    if let Some(callback) = on_reveal.borrow_mut().take() {
                        callback(delay);
                    }
                }
            }) as VisibilityCallback
        };

        match watcher.watch(target, &options, notify) {
            Ok(mut attached) => {
                if state.borrow().revealed_once {
                    // Fired synchronously during attach; nothing left to watch.
                    attached.cancel();
                } else {
                    *handle.borrow_mut() = Some(attached);
                }
            }
            Err(err) => {
                tracing::warn!(%err, "visibility watch unavailable; revealing immediately");
                if state.borrow_mut().force_reveal() == RevealTransition::Revealed {
                    let delay = state.borrow().delay_ms;
                    if let Some(callback) = on_reveal.borrow_mut().take() {
                        callback(delay);
                    }
                }
            }
        }

        Self { state, handle }
    }

    pub fn is_revealed(&self) -> bool {
        self.state.borrow().revealed_once
    }

    /// Whether a watch is still attached.
    pub fn is_watching(&self) -> bool {
        self.handle
            .borrow()
            .as_ref()
            .map(WatchHandle::is_active)
            .unwrap_or(false)
    }

    pub fn state(&self) -> RevealState {
        self.state.borrow().clone()
    }
}

impl Drop for RevealSession {
    fn drop(&mut self) {
        let pending = self.handle.borrow_mut().take();
        if pending.is_some() {
            tracing::debug!("reveal watch cancelled before reveal");
        }
        drop(pending);
    }
}

/// Viewport-relative box, CSS pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grow (positive) or shrink (negative) each edge by the margin.
    pub fn expand(&self, margin: &RootMargin) -> Rect {
        let left = self.left - margin.left;
        let top = self.top - margin.top;
        Rect {
            left,
            top,
            width: (self.right() + margin.right - left).max(0.0),
            height: (self.bottom() + margin.bottom - top).max(0.0),
        }
    }

    /// Overlap of two boxes; `None` if they do not touch. Edge-adjacent boxes
    /// produce a zero-area intersection, which still counts as touching.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Visibility of `target` inside `root`.
pub fn sample_visibility(target: &Rect, root: &Rect) -> VisibilitySample {
    match target.intersection(root) {
        None => VisibilitySample::hidden(),
        Some(overlap) => {
            let area = target.area();
            let ratio = if area > 0.0 {
                (overlap.area() / area).clamp(0.0, 1.0)
            } else {
                1.0
            };
            VisibilitySample::visible(ratio)
        }
    }
}

/// Reports the current bounds of a watched block, `None` once it is gone.
pub type BoundsProbe = Rc<dyn Fn() -> Option<Rect>>;

struct PolledWatch {
    probe: BoundsProbe,
    margin: RootMargin,
    notify: VisibilityCallback,
    alive: Rc<Cell<bool>>,
}

/// Fallback watcher for runtimes without a native intersection primitive:
/// the owner calls [`PollingWatcher::poll`] with the current viewport (for
/// example on every scroll or resize sample).
#[derive(Clone, Default)]
pub struct PollingWatcher {
    inner: Rc<PollingInner>,
}

#[derive(Default)]
struct PollingInner {
    watches: RefCell<Vec<PolledWatch>>,
    incoming: RefCell<Vec<PolledWatch>>,
    viewport: Cell<Option<Rect>>,
}

impl PollingWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate every live watch against `viewport`.
    pub fn poll(&self, viewport: Rect) {
        self.inner.viewport.set(Some(viewport));
        {
            let mut incoming = self.inner.incoming.borrow_mut();
            self.inner.watches.borrow_mut().append(&mut incoming);
        }
        // Callbacks may add or cancel watches, so run them without holding the list.
        let mut current = std::mem::take(&mut *self.inner.watches.borrow_mut());
        for watch in current.iter_mut() {
            if !watch.alive.get() {
                continue;
            }
            evaluate(watch, &viewport);
        }
        current.retain(|w| w.alive.get());
        let mut watches = self.inner.watches.borrow_mut();
        current.append(&mut watches);
        *watches = current;
    }

    /// Number of watches that have not been cancelled.
    pub fn active_watches(&self) -> usize {
        let live = |list: &Vec<PolledWatch>| list.iter().filter(|w| w.alive.get()).count();
        live(&self.inner.watches.borrow()) + live(&self.inner.incoming.borrow())
    }
}

fn evaluate(watch: &mut PolledWatch, viewport: &Rect) {
    let sample = match (watch.probe)() {
        Some(bounds) => sample_visibility(&bounds, &viewport.expand(&watch.margin)),
        None => VisibilitySample::hidden(),
    };
    (watch.notify)(sample);
}

impl VisibilityWatcher for PollingWatcher {
    type Target = BoundsProbe;

    fn watch(
        &self,
        target: &Self::Target,
        options: &RevealOptions,
        notify: VisibilityCallback,
    ) -> Result<WatchHandle, WatchError> {
        let alive = Rc::new(Cell::new(true));
        let mut watch = PolledWatch {
            probe: target.clone(),
            margin: options.root_margin,
            notify,
            alive: alive.clone(),
        };
        if let Some(viewport) = self.inner.viewport.get() {
            evaluate(&mut watch, &viewport);
        }
        if alive.get() {
            self.inner.incoming.borrow_mut().push(watch);
        }
        Ok(WatchHandle::new(move || alive.set(false)))
    }
}

/// Wrapper classes for a block, e.g. `"scroll-reveal from-up revealed"`.
pub fn reveal_class(direction: RevealDirection, revealed: bool) -> String {
    let mut class = format!("scroll-reveal from-{}", direction.as_str());
    if revealed {
        class.push_str(" revealed");
    }
    class
}

pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms;")
}
