//! Trailing-edge debounce for text inputs.
//!
//! [`Debouncer`] is the clock-free state: every `push` supersedes the previous
//! value and hands out a ticket; only the newest ticket can `fire`.
//! [`DebouncedCallback`] drives it with browser timers.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Handle for one scheduled emission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebounceTicket {
    pub id: u64,
    /// Clock value at which the emission is due
    pub due_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u32,
    generation: u64,
    pending: Option<(DebounceTicket, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Replace the pending value; earlier tickets become stale
    pub fn push(&mut self, value: T, now_ms: f64) -> DebounceTicket {
        self.generation += 1;
        let ticket = DebounceTicket {
            id: self.generation,
            due_at_ms: now_ms + f64::from(self.delay_ms),
        };
        self.pending = Some((ticket, value));
        ticket
    }

    /// Take the pending value if `ticket` is the newest one
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        match &self.pending {
            Some((current, _)) if current.id == ticket.id => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Runs `target` with the last value once `delay_ms` pass without a new call.
pub struct DebouncedCallback<T: Send + Sync + 'static> {
    state: StoredValue<Debouncer<T>>,
    target: Callback<T>,
}

impl<T: Send + Sync + 'static> Clone for DebouncedCallback<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DebouncedCallback<T> {}

impl<T: Send + Sync + 'static> DebouncedCallback<T> {
    pub fn new(delay_ms: u32, target: Callback<T>) -> Self {
        Self {
            state: StoredValue::new(Debouncer::new(delay_ms)),
            target,
        }
    }

    pub fn call(&self, value: T) {
        let Some((ticket, delay_ms)) = self.schedule(value, js_sys::Date::now()) else {
            return;
        };

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            this.settle(ticket);
        });
    }

    /// Record `value` as the pending one; returns its ticket and the delay to
    /// wait. `None` once the owner has been disposed.
    pub fn schedule(&self, value: T, now_ms: f64) -> Option<(DebounceTicket, u32)> {
        let mut scheduled = None;
        self.state
            .update_value(|d| scheduled = Some((d.push(value, now_ms), d.delay_ms())));
        scheduled
    }

    /// Timer for `ticket` elapsed: run the target if nothing newer arrived
    pub fn settle(&self, ticket: DebounceTicket) -> bool {
        let mut ready = None;
        self.state.update_value(|d| ready = d.fire(ticket));
        match ready {
            Some(value) => {
                self.target.run(value);
                true
            }
            None => false,
        }
    }

    pub fn cancel(&self) {
        self.state.update_value(|d| d.cancel());
    }
}
