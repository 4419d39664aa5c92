#![allow(dead_code)]

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use oxide_sql_platform::{Driver, Platform};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// A driver that escapes with a recognisable marker so tests can tell its
/// output apart from the platform's own quoting.
#[derive(Debug, Default)]
pub struct EscapingDriver {
    pub calls: AtomicUsize,
}

impl Driver for EscapingDriver {
    fn name(&self) -> &str {
        "escaping"
    }

    fn quote_value(&self, value: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Some(format!("N'{}'", value.replace('\'', "''")))
    }
}

/// A driver that is bound but cannot escape natively.
#[derive(Debug, Default)]
pub struct PlainDriver;

impl Driver for PlainDriver {
    fn name(&self) -> &str {
        "plain"
    }

    fn quote_value(&self, _value: &str) -> Option<String> {
        None
    }
}

pub fn sql_server() -> Platform {
    Platform::sql_server()
}

pub fn with_escaping_driver() -> (Platform, Arc<EscapingDriver>) {
    let driver = Arc::new(EscapingDriver::default());
    let platform = Platform::sql_server().with_driver(driver.clone());
    (platform, driver)
}

/// Quotes `fragment` on SQL Server and asserts the result.
pub fn assert_fragment(fragment: &str, safe_words: &[&str], expected: &str) {
    let quoted = sql_server().quote_identifier_in_fragment(fragment, safe_words);
    assert_eq!(
        quoted, expected,
        "Fragment quoting failed.\n  Input:    {fragment}\n  Safe:     {safe_words:?}"
    );
}

/// A log event seen by [`capture_events`].
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub message: String,
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.0,
        });
    }
}

/// Runs `f` with a scoped subscriber and returns every event it logged.
pub fn capture_events<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    let result = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    (result, events)
}

/// Returns the events logged on the security target.
pub fn security_warnings(events: &[CapturedEvent]) -> Vec<&CapturedEvent> {
    events
        .iter()
        .filter(|e| e.target == "oxide_sql_platform::security")
        .collect()
}
