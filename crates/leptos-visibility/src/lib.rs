//! Leptos Visibility Utilities
//!
//! Tracks whether an element is inside the viewport using `IntersectionObserver`.
//! Intended for end-of-list sentinels: place an empty element after the last
//! rendered row and react to the sensor's reports.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observer configuration
#[derive(Clone, Debug, PartialEq)]
pub struct SensorOptions {
    /// Fraction of the target that must be visible, 0.0..=1.0
    pub threshold: f64,
    /// CSS margin applied around the viewport, e.g. "0px 0px 200px 0px"
    pub root_margin: String,
}

impl Default for SensorOptions {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            root_margin: "0px".to_string(),
        }
    }
}

/// Clamp a threshold into the range the browser accepts
pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// One reading delivered by the observer.
/// `seq` grows with every callback, so two reports with the same state are
/// still distinguishable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityReport {
    pub seq: u64,
    pub visible: bool,
}

impl VisibilityReport {
    pub fn next(self, visible: bool) -> Self {
        Self {
            seq: self.seq + 1,
            visible,
        }
    }
}

/// Hands out each report at most once.
///
/// A reading describes the layout at the moment the browser took it. Once
/// the page under the sentinel changes, only a newer report says anything
/// about where the sentinel is now.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportGate {
    last_seen: u64,
}

impl ReportGate {
    /// True for an unseen report showing the element
    pub fn accept(&mut self, report: VisibilityReport) -> bool {
        if report.seq <= self.last_seen {
            return false;
        }
        self.last_seen = report.seq;
        report.visible
    }
}

/// Visibility state signals
#[derive(Clone, Copy)]
pub struct VisibilitySignals {
    pub report_read: ReadSignal<VisibilityReport>,
    pub report_write: WriteSignal<VisibilityReport>,
}

pub fn create_visibility_signals() -> VisibilitySignals {
    let (report_read, report_write) = signal(VisibilityReport::default());
    VisibilitySignals {
        report_read,
        report_write,
    }
}

/// Record one observer callback
pub fn apply_intersection(signals: &VisibilitySignals, intersecting: bool) {
    signals.report_write.update(|report| *report = report.next(intersecting));
}

type IntersectCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An observer bound to one element. Dropping it disconnects the observer
/// before the callback is freed.
pub struct BoundObserver {
    observer: IntersectionObserver,
    element: web_sys::Element,
    _on_intersect: IntersectCallback,
}

impl BoundObserver {
    /// Drop queued entries and observe the element again. The browser then
    /// delivers a fresh callback for the current layout.
    pub fn recheck(&self) {
        self.observer.take_records();
        self.observer.unobserve(&self.element);
        self.observer.observe(&self.element);
    }
}

impl Drop for BoundObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Start observing `element`, feeding reports into `signals`
pub fn observe_element(
    element: &web_sys::Element,
    options: &SensorOptions,
    signals: VisibilitySignals,
) -> Result<BoundObserver, JsValue> {
    let on_intersect = IntersectCallback::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        // Entries are queued oldest first; the last one is the current state
        let latest = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .last();
        if let Some(entry) = latest {
            apply_intersection(&signals, entry.is_intersecting());
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(clamp_threshold(options.threshold)));
    init.set_root_margin(&options.root_margin);

    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    Ok(BoundObserver {
        observer,
        element: element.clone(),
        _on_intersect: on_intersect,
    })
}

/// Handle returned by `use_visibility_sensor`
#[derive(Clone, Copy)]
pub struct VisibilitySensor {
    pub signals: VisibilitySignals,
    bound: StoredValue<Option<BoundObserver>, LocalStorage>,
}

impl VisibilitySensor {
    /// Latest report (tracked)
    pub fn report(&self) -> VisibilityReport {
        self.signals.report_read.get()
    }

    /// Ask for a fresh report, e.g. after content moved the element
    pub fn recheck(&self) {
        self.bound.try_with_value(|slot| {
            if let Some(bound) = slot {
                bound.recheck();
            }
        });
    }
}

/// Observe the element behind `target` once it is mounted.
/// Re-binds if the node changes and disconnects on cleanup.
pub fn use_visibility_sensor(
    target: NodeRef<leptos::html::Div>,
    options: SensorOptions,
) -> VisibilitySensor {
    let signals = create_visibility_signals();
    let bound = StoredValue::new_local(None::<BoundObserver>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        // Disconnects the previous observer
        bound.set_value(None);
        match observe_element(&element, &options, signals) {
            Ok(observer) => bound.set_value(Some(observer)),
            Err(e) => {
                web_sys::console::error_1(&format!("[Visibility] Failed to observe sentinel: {:?}", e).into());
            }
        }
    });

    on_cleanup(move || {
        bound.try_update_value(|slot| {
            slot.take();
        });
    });

    VisibilitySensor { signals, bound }
}
