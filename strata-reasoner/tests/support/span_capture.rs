//! Span recording for tracing assertions.
//!
//! Shared by the strata-reasoner and strata-shacl integration tests. The
//! subscriber is installed with `set_default`, so it only sees spans opened
//! on the test's own thread while the returned guard lives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// A span as it was opened
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    pub name: &'static str,
    pub level: tracing::Level,
    pub fields: HashMap<String, String>,
    /// Explicit parent, else the span current when this one was opened
    pub parent_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SpanStore(Arc<Mutex<Vec<CapturedSpan>>>);

impl SpanStore {
    pub fn has_span(&self, name: &str) -> bool {
        self.find_span(name).is_some()
    }

    pub fn find_span(&self, name: &str) -> Option<CapturedSpan> {
        self.find_spans(name).into_iter().next()
    }

    /// All spans named `name`, in opening order
    pub fn find_spans(&self, name: &str) -> Vec<CapturedSpan> {
        let spans = self.0.lock().unwrap();
        spans.iter().filter(|s| s.name == name).cloned().collect()
    }
}

struct RecordingLayer {
    store: SpanStore,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut fields = FieldMap::default();
        attrs.record(&mut fields);

        let parent_name = match attrs.parent() {
            Some(parent) => ctx.span(parent).map(|s| s.name().to_string()),
            None => ctx.lookup_current().map(|s| s.name().to_string()),
        };
        let meta = ctx.span(id).expect("new span is registered").metadata();

        self.store.0.lock().unwrap().push(CapturedSpan {
            name: meta.name(),
            level: *meta.level(),
            fields: fields.0,
            parent_name,
        });
    }
}

/// Span fields rendered as strings; integers and strings without quotes
#[derive(Default)]
struct FieldMap(HashMap<String, String>);

impl Visit for FieldMap {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// Record every span opened on this thread until the guard drops
pub fn init_test_tracing() -> (SpanStore, tracing::subscriber::DefaultGuard) {
    let store = SpanStore::default();
    let subscriber = tracing_subscriber::registry().with(RecordingLayer {
        store: store.clone(),
    });
    let guard = tracing::subscriber::set_default(subscriber);
    (store, guard)
}
