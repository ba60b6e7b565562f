use site_core::analytics::{AnalyticsEvent, AnalyticsSink, LogSink};

pub fn track(event: AnalyticsEvent) {
    LogSink.record(&event);
}
