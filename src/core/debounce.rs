//! Debounced refresh utility.
//!
//! Coalesces bursts of change notifications into one delayed action: each
//! call supersedes any previously pending action, so only the most recent
//! action within the quiescence window ever executes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::utils::dom;

/// One pending-action slot, tracked by generation.
///
/// Every call bumps the generation; a scheduled action only runs if its
/// generation is still current when the timer fires. Superseded actions
/// are therefore dropped before they start; nothing is cancelled
/// mid-flight. Clones share the slot, so a view-model and its bus
/// listener coalesce into the same window.
#[derive(Clone, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run after `delay_ms` of quiescence.
    ///
    /// A zero or negative delay still defers to the next timer tick, so a
    /// synchronous burst of calls coalesces to its last action. `reason`
    /// is diagnostic only and never affects scheduling.
    pub fn call(&self, action: impl FnOnce() + 'static, delay_ms: i32, reason: &str) {
        dom::console_debug(&format!("[debounce] scheduled: {reason}"));
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.generation.clone();
        timer::schedule(delay_ms.max(0) as u32, move || {
            if generation.load(Ordering::SeqCst) == scheduled {
                action();
            }
        });
    }
}

mod timer {
    #[cfg(not(target_arch = "wasm32"))]
    pub use self::host::*;
    #[cfg(target_arch = "wasm32")]
    pub use self::web::*;

    #[cfg(target_arch = "wasm32")]
    mod web {
        use gloo_timers::callback::Timeout;

        pub fn schedule(delay_ms: u32, action: impl FnOnce() + 'static) {
            // The timeout owns the callback until it fires.
            Timeout::new(delay_ms, action).forget();
        }
    }

    /// Deterministic stand-in for the browser timer queue on the host,
    /// where tests drive the clock by hand.
    #[cfg(not(target_arch = "wasm32"))]
    mod host {
        use std::cell::RefCell;

        thread_local! {
            static QUEUE: RefCell<Vec<Box<dyn FnOnce()>>> = const { RefCell::new(Vec::new()) };
        }

        pub fn schedule(_delay_ms: u32, action: impl FnOnce() + 'static) {
            QUEUE.with(|queue| queue.borrow_mut().push(Box::new(action)));
        }

        /// Run every scheduled callback in scheduling order.
        #[allow(dead_code)]
        pub fn fire_pending() {
            let actions: Vec<_> = QUEUE.with(|queue| queue.borrow_mut().drain(..).collect());
            for action in actions {
                action();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_only_the_latest_call_survives_a_burst() {
        let debouncer = Debouncer::new();
        let fired = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let fired = fired.clone();
            debouncer.call(
                move || fired.lock().unwrap().push(tag),
                200,
                &format!("burst-{tag}"),
            );
        }
        timer::fire_pending();
        assert_eq!(*fired.lock().unwrap(), vec!["third"]);
    }

    #[test]
    fn test_zero_delay_still_defers() {
        let debouncer = Debouncer::new();
        let fired = Arc::new(Mutex::new(false));
        {
            let fired = fired.clone();
            debouncer.call(move || *fired.lock().unwrap() = true, 0, "zero");
        }
        // Never synchronous, so a synchronous burst can still coalesce.
        assert!(!*fired.lock().unwrap());
        timer::fire_pending();
        assert!(*fired.lock().unwrap());
    }

    #[test]
    fn test_negative_delay_is_clamped() {
        let debouncer = Debouncer::new();
        let fired = Arc::new(Mutex::new(false));
        {
            let fired = fired.clone();
            debouncer.call(move || *fired.lock().unwrap() = true, -50, "negative");
        }
        assert!(!*fired.lock().unwrap());
        timer::fire_pending();
        assert!(*fired.lock().unwrap());
    }

    #[test]
    fn test_instances_have_independent_slots() {
        let a = Debouncer::new();
        let b = Debouncer::new();
        let count = Arc::new(Mutex::new(0));
        for debouncer in [&a, &b] {
            let count = count.clone();
            debouncer.call(move || *count.lock().unwrap() += 1, 100, "independent");
        }
        timer::fire_pending();
        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let debouncer = Debouncer::new();
        let shared = debouncer.clone();
        let fired = Arc::new(Mutex::new(Vec::new()));
        {
            let fired = fired.clone();
            debouncer.call(move || fired.lock().unwrap().push("original"), 100, "a");
        }
        {
            let fired = fired.clone();
            shared.call(move || fired.lock().unwrap().push("clone"), 100, "b");
        }
        timer::fire_pending();
        assert_eq!(*fired.lock().unwrap(), vec!["clone"]);
    }

    #[test]
    fn test_rescheduling_from_inside_the_action_works() {
        let debouncer = Debouncer::new();
        let count = Arc::new(Mutex::new(0));
        {
            let inner = debouncer.clone();
            let count = count.clone();
            debouncer.call(
                move || {
                    *count.lock().unwrap() += 1;
                    let count = count.clone();
                    inner.call(move || *count.lock().unwrap() += 1, 100, "chained");
                },
                100,
                "outer",
            );
        }
        timer::fire_pending();
        assert_eq!(*count.lock().unwrap(), 1);
        timer::fire_pending();
        assert_eq!(*count.lock().unwrap(), 2);
    }
}
