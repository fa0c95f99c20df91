//! Metrics sink boundary.
//!
//! Lexicon logic never touches `obs::metrics` directly. Every notable
//! operation is described as a [`MetricsEvent`] and handed to the active
//! [`MetricsSink`]: the global counter sink by default, or a scoped override
//! installed with [`with_metrics_sink`].
use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent<'a> {
    RootInserted {
        root: &'a str,
        created: bool,
    },
    DerivativeRecorded {
        root: &'a str,
        word: &'a str,
        scheme: &'a str,
    },
    SchemeUpserted {
        name: &'a str,
        replaced: bool,
    },
    SchemeRemoved {
        name: &'a str,
    },
    Generate {
        root: &'a str,
        scheme: &'a str,
        word: &'a str,
    },
    Validate {
        word: &'a str,
        root: &'a str,
        matched: Option<&'a str>,
    },
    Analyze {
        word: &'a str,
        cache_hit: bool,
        matched: bool,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent<'_>);
}

///
/// GlobalMetricsSink
/// Default process-local sink that writes into the thread-local counters.
/// Overrides that only observe can forward to it to keep the counters live.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent<'_>) {
        metrics::with_state_mut(|m| {
            let ops = &mut m.ops;
            match event {
                MetricsEvent::RootInserted { created: true, .. } => {
                    ops.roots_created = ops.roots_created.saturating_add(1);
                }
                MetricsEvent::RootInserted { created: false, .. } => {
                    ops.roots_merged = ops.roots_merged.saturating_add(1);
                }
                MetricsEvent::DerivativeRecorded { .. } => {
                    ops.derivatives_recorded = ops.derivatives_recorded.saturating_add(1);
                }
                MetricsEvent::SchemeUpserted { replaced, .. } => {
                    if replaced {
                        ops.schemes_replaced = ops.schemes_replaced.saturating_add(1);
                    } else {
                        ops.schemes_inserted = ops.schemes_inserted.saturating_add(1);
                    }
                }
                MetricsEvent::SchemeRemoved { .. } => {
                    ops.schemes_removed = ops.schemes_removed.saturating_add(1);
                }
                MetricsEvent::Generate { .. } => {
                    ops.generate_calls = ops.generate_calls.saturating_add(1);
                }
                MetricsEvent::Validate { matched, .. } => {
                    ops.validate_calls = ops.validate_calls.saturating_add(1);
                    if matched.is_some() {
                        ops.validate_matches = ops.validate_matches.saturating_add(1);
                    }
                }
                MetricsEvent::Analyze {
                    cache_hit, matched, ..
                } => {
                    ops.analyze_calls = ops.analyze_calls.saturating_add(1);
                    if cache_hit {
                        ops.analyze_cache_hits = ops.analyze_cache_hits.saturating_add(1);
                    }
                    if matched {
                        ops.analyze_matches = ops.analyze_matches.saturating_add(1);
                    }
                }
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent<'_>) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored when the closure returns or unwinds.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
