//! Trailing-edge debounce hook
//!
//! Each queued value replaces the pending one, so only the last value seen
//! within the delay window reaches the callback.

use std::time::Duration;

use dioxus::prelude::*;

/// Handle returned by [`use_debounce`].
///
/// Copyable so event handlers can capture it by value.
pub struct UseDebounce<T: 'static> {
    pending: Signal<Option<Task>>,
    schedule: Callback<T, Task>,
}

impl<T> Clone for UseDebounce<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UseDebounce<T> {}

impl<T> UseDebounce<T> {
    /// Queue `value`, superseding any pending invocation.
    pub fn action(&mut self, value: T) {
        self.cancel();
        let task = self.schedule.call(value);
        self.pending.set(Some(task));
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

/// Debounce `on_elapsed` behind a `delay` window.
///
/// The returned handle schedules a task per [`UseDebounce::action`] call;
/// the task sleeps for `delay` and then invokes `on_elapsed` with the queued
/// value, unless a newer call superseded it first.
///
/// `delay` is captured when the hook first runs and stays fixed for the
/// component's lifetime; later changes to the argument are ignored.
pub fn use_debounce<T: 'static>(
    delay: Duration,
    on_elapsed: impl FnMut(T) + 'static,
) -> UseDebounce<T> {
    use_hook(|| {
        let on_elapsed = Callback::new(on_elapsed);
        UseDebounce {
            pending: Signal::new(None),
            schedule: Callback::new(move |value: T| {
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    on_elapsed.call(value);
                })
            }),
        }
    })
}
