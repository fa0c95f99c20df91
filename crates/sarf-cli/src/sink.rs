use sarf::core::obs::{GlobalMetricsSink, MetricsEvent, MetricsSink};
use tracing::{debug, trace};

///
/// TracingSink
/// Logs every lexicon event, then forwards it to the counter sink.
///

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TracingSink;

impl MetricsSink for TracingSink {
    fn record(&self, event: MetricsEvent<'_>) {
        match event {
            MetricsEvent::RootInserted { root, created } => {
                trace!(root, created, "root inserted");
            }
            MetricsEvent::DerivativeRecorded { root, word, scheme } => {
                trace!(root, word, scheme, "derivative recorded");
            }
            MetricsEvent::SchemeUpserted { name, replaced } => {
                debug!(name, replaced, "scheme upserted");
            }
            MetricsEvent::SchemeRemoved { name } => debug!(name, "scheme removed"),
            MetricsEvent::Generate { root, scheme, word } => {
                debug!(root, scheme, word, "generate");
            }
            MetricsEvent::Validate {
                word,
                root,
                matched,
            } => debug!(word, root, matched = ?matched, "validate"),
            MetricsEvent::Analyze {
                word,
                cache_hit,
                matched,
            } => debug!(word, cache_hit, matched, "analyze"),
        }

        GlobalMetricsSink.record(event);
    }
}
