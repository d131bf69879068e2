//! # Timer Scheduler
//!
//! Turns the reducer's timer effects into tokio tasks. Each task sleeps,
//! then sends its `Action` back to the event loop over the action channel.
//!
//! One task per `TimerSlot`. Scheduling into a slot aborts whatever was
//! there; reset and stop abort explicitly. The reducer's epoch check covers
//! a task that already sent before it was aborted.

use log::{debug, warn};
use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Duration;

use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, TimerSlot};

pub struct Scheduler {
    tx: mpsc::Sender<Action>,
    pending: HashMap<TimerSlot, AbortHandle>,
}

impl Scheduler {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self {
            tx,
            pending: HashMap::new(),
        }
    }

    /// Carry out a timer effect. `Effect::Quit` is the caller's business.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None | Effect::Quit => {}
            Effect::Schedule {
                slot,
                delay,
                action,
            } => self.schedule(slot, delay, action),
            Effect::CancelTimers(slots) => {
                for slot in slots {
                    self.cancel(slot);
                }
            }
            Effect::Restart { delay, action } => {
                self.cancel_all();
                self.schedule(TimerSlot::Solver, delay, action);
            }
        }
    }

    pub fn schedule(&mut self, slot: TimerSlot, delay: Duration, action: Action) {
        self.cancel(slot);
        debug!("Scheduling {:?} in {:?} ({:?})", action, delay, slot);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(action).is_err() {
                warn!("Failed to deliver timer action: receiver dropped");
            }
        });
        self.pending.insert(slot, handle.abort_handle());
    }

    pub fn cancel(&mut self, slot: TimerSlot) {
        if let Some(handle) = self.pending.remove(&slot) {
            debug!("Cancelling {:?} timer", slot);
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }

    /// A task in `slot` has been scheduled and has not yet fired.
    pub fn is_pending(&self, slot: TimerSlot) -> bool {
        self.pending
            .get(&slot)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn any_pending(&self) -> bool {
        self.pending.values().any(|handle| !handle.is_finished())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
