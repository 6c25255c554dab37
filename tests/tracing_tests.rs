//! Tests for the diagnostics emitted through `tracing`.
//!
//! Events are captured into an in-memory buffer by a scoped subscriber, so
//! tests never touch the global default.

use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Clone, Default)]
struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `action` under a subscriber that records `ordkit` events at `directive`.
fn capture(directive: &str, action: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(buffer.clone())
                .with_ansi(false),
        );

    tracing::subscriber::with_default(subscriber, action);
    buffer.contents()
}

#[cfg(feature = "collection")]
#[rstest]
fn test_missing_remove_emits_debug_event() {
    use ordkit::collection::OrderedSet;

    let output = capture("ordkit=debug", || {
        let mut set: OrderedSet<i32> = [1, 2].into();
        assert!(set.remove(&9).is_err());
    });

    assert!(output.contains("remove: element not present"));
    assert!(output.contains("length=2"));
}

#[cfg(feature = "collection")]
#[rstest]
fn test_successful_remove_is_silent() {
    use ordkit::collection::OrderedSet;

    let output = capture("ordkit=trace", || {
        let mut set: OrderedSet<i32> = [1, 2].into();
        assert_eq!(set.remove(&1), Ok(1));
    });

    assert!(output.is_empty());
}

#[cfg(feature = "collection")]
#[rstest]
fn test_filter_above_debug_hides_remove_event() {
    use ordkit::collection::OrderedSet;

    let output = capture("ordkit=info", || {
        let mut set: OrderedSet<i32> = OrderedSet::new();
        assert!(set.remove(&0).is_err());
    });

    assert!(output.is_empty());
}

#[cfg(feature = "sorting")]
#[rstest]
fn test_sorts_emit_trace_events() {
    let output = capture("ordkit=trace", || {
        let _ = ordkit::sorting::merge_sort(&[3, 1, 2]);
        let _ = ordkit::sorting::quick_sorted(&[3, 1, 2]);
    });

    assert!(output.contains("merge_sort"));
    assert!(output.contains("quick_sort"));
}

#[cfg(feature = "dynamic_programming")]
#[rstest]
fn test_knapsack_emits_trace_event() {
    use ordkit::dynamic_programming::{Item, knapsack};

    let output = capture("ordkit=trace", || {
        let _ = knapsack(4, &[Item::new(1, 1)]);
    });

    assert!(output.contains("knapsack"));
    assert!(output.contains("cells=5"));
}
