//! Fetch Cancellation
//!
//! Ties in-flight requests to component lifetime. Each screen effect holds
//! an [`AbortHandle`]; renewing it cancels the superseded request, and
//! disposing the owning scope (unmount) cancels whatever is still pending,
//! so late responses can never write into a dead screen.

use leptos::prelude::*;
use web_sys::{AbortController, AbortSignal};

/// A renewable abort controller scoped to the current reactive owner
#[derive(Clone, Copy)]
pub struct AbortHandle {
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl AbortHandle {
    /// Create a handle owned by the current reactive scope. The pending
    /// request, if any, is aborted when the scope is disposed.
    pub fn new() -> Self {
        let controller = StoredValue::new_local(None::<AbortController>);
        on_cleanup(move || {
            controller.update_value(|slot| {
                if let Some(ctrl) = slot.take() {
                    ctrl.abort();
                }
            });
        });
        Self { controller }
    }

    /// Abort the superseded request and hand out a fresh signal.
    ///
    /// Returns `None` only if the browser refuses to construct a
    /// controller, in which case the fetch simply runs uncancellable.
    pub fn renew(&self) -> Option<AbortSignal> {
        let fresh = AbortController::new().ok();
        let signal = fresh.as_ref().map(|ctrl| ctrl.signal());
        self.controller.update_value(|slot| {
            if let Some(prev) = std::mem::replace(slot, fresh) {
                prev.abort();
            }
        });
        signal
    }
}

impl Default for AbortHandle {
    fn default() -> Self {
        Self::new()
    }
}
