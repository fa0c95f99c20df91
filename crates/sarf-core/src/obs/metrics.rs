use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory counters for lexicon operations.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventState {
    pub ops: EventOps,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Root index
    pub roots_created: u64,
    pub roots_merged: u64,
    pub derivatives_recorded: u64,

    // Scheme store
    pub schemes_inserted: u64,
    pub schemes_replaced: u64,
    pub schemes_removed: u64,

    // Engine entrypoints
    pub generate_calls: u64,
    pub validate_calls: u64,
    pub validate_matches: u64,
    pub analyze_calls: u64,
    pub analyze_cache_hits: u64,
    pub analyze_matches: u64,
}

///
/// EventReport
/// Serializable point-in-time copy of the counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub counters: EventState,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

#[must_use]
pub(crate) fn report() -> EventReport {
    EventReport {
        counters: with_state(Clone::clone),
    }
}
