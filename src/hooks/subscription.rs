use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::state::lifecycle::Scope;
use crate::state::visibility::{ObserveOptions, Observation, Visibility};

/// An event listener that is removed when the guard is released or dropped.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut()>>,
    scope: Scope,
}

impl ListenerGuard {
    /// Removes the listener. Safe to call more than once.
    pub fn release(&mut self) {
        self.scope.close();
        if let Some(callback) = self.callback.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
            debug!("Removed '{}' listener", self.event);
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

pub fn listen(
    target: &EventTarget,
    event: &'static str,
    mut handler: impl FnMut() + 'static,
) -> Result<ListenerGuard, JsValue> {
    let scope = Scope::new();
    let handle = scope.handle();
    let callback = Closure::<dyn FnMut()>::new(move || {
        handle.run(&mut handler);
    });
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    debug!("Added '{}' listener", event);

    Ok(ListenerGuard {
        target: target.clone(),
        event,
        callback: Some(callback),
        scope,
    })
}

/// An intersection observer that is disconnected when the guard is released or dropped.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    scope: Scope,
}

impl ObserverGuard {
    pub fn release(&mut self) {
        self.scope.close();
        if self.callback.take().is_some() {
            self.observer.disconnect();
            debug!("Disconnected intersection observer");
        }
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Watches `element` and reports every change of its in-view flag to `on_change`.
///
/// In once mode the element is unobserved right after it first enters.
pub fn observe_visibility(
    element: &Element,
    options: ObserveOptions,
    mut on_change: impl FnMut(bool) + 'static,
) -> Result<ObserverGuard, JsValue> {
    let scope = Scope::new();
    let handle = scope.handle();
    let target = element.clone();
    let mut visibility = Visibility::default();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            if !handle.is_live() {
                return;
            }
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                let was_in_view = visibility.is_in_view();
                let (next, observation) = visibility.observe(entry.is_intersecting(), options.once);
                visibility = next;

                if next.is_in_view() != was_in_view {
                    on_change(next.is_in_view());
                }
                if observation == Observation::Stop {
                    observer.unobserve(&target);
                    debug!("Element entered viewport, no longer observing");
                    break;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    debug!(
        "Observing element (threshold {}, once {})",
        options.threshold, options.once
    );

    Ok(ObserverGuard {
        observer,
        callback: Some(callback),
        scope,
    })
}
