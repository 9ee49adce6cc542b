//! Event types and sinks for observing placement passes.
//!
//! This module defines [`PlacementEvent`] and a set of sinks to emit, collect, or
//! forward events while running [`crate::place::runner::place`],
//! [`crate::snapshot::apply_snapshot`] or [`crate::place::reconcile::reconcile_count`].
//! Warnings are always logged through `tracing` as well; sinks let an editor
//! surface them without scraping logs.
use crate::place::config::PlacementMode;
use crate::place::runner::PassSummary;
use crate::transform::Transform;

/// Discriminant of [`PlacementEvent`], used by [`EventSink::wants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementEventKind {
    PassStarted,
    Placed,
    SnapshotApplied,
    CountReconciled,
    Warning,
    PassFinished,
}

/// Describes events emitted by placement operations.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PlacementEvent {
    /// Emitted before the first target of a pass is written.
    PassStarted {
        mode: PlacementMode,
        /// First index of the active range.
        start: usize,
        /// One past the last index of the active range.
        end: usize,
        /// Length of the whole target list.
        target_count: usize,
    },

    /// Emitted after a target received its new local transform.
    Placed { index: usize, transform: Transform },

    /// Emitted after a snapshot was written onto a target list.
    SnapshotApplied {
        /// Targets that received a record.
        applied: usize,
        /// Targets left untouched because the snapshot was too short.
        skipped: usize,
    },

    /// Emitted after a target list was grown or shrunk.
    CountReconciled {
        created: usize,
        destroyed: usize,
        count: usize,
    },

    /// Non-fatal warning.
    Warning {
        /// Context string (e.g. "snapshot", "placement").
        context: String,
        /// Human-readable message.
        message: String,
    },

    /// Emitted when a pass completes.
    PassFinished { summary: PassSummary },
}

impl PlacementEvent {
    pub fn kind(&self) -> PlacementEventKind {
        match self {
            PlacementEvent::PassStarted { .. } => PlacementEventKind::PassStarted,
            PlacementEvent::Placed { .. } => PlacementEventKind::Placed,
            PlacementEvent::SnapshotApplied { .. } => PlacementEventKind::SnapshotApplied,
            PlacementEvent::CountReconciled { .. } => PlacementEventKind::CountReconciled,
            PlacementEvent::Warning { .. } => PlacementEventKind::Warning,
            PlacementEvent::PassFinished { .. } => PlacementEventKind::PassFinished,
        }
    }
}

/// A generic event sink that accepts [`PlacementEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlacementEvent);

    /// Whether events of `kind` should be built and sent at all.
    fn wants(&self, _kind: PlacementEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlacementEvent) {}

    #[inline]
    fn wants(&self, _kind: PlacementEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlacementEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn as_slice(&self) -> &[PlacementEvent] {
        &self.events
    }

    /// Messages of all collected [`PlacementEvent::Warning`]s.
    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PlacementEvent::Warning { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, kind: PlacementEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: PlacementEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            if sink.wants(event.kind()) {
                sink.send(event.clone());
            }
        }
        if last.wants(event.kind()) {
            last.send(event);
        }
    }

    fn wants(&self, kind: PlacementEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(msg: &str) -> PlacementEvent {
        PlacementEvent::Warning {
            context: "ctx".into(),
            message: msg.into(),
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(warning("a"));
        sink.send(PlacementEvent::SnapshotApplied {
            applied: 1,
            skipped: 0,
        });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.warnings(), vec!["a"]);
        assert_eq!(sink.count(PlacementEventKind::SnapshotApplied), 1);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn unit_sink_wants_nothing() {
        let sink = ();
        assert!(!sink.wants(PlacementEventKind::Warning));
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(warning("msg"));
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.sinks[0].len(), 1);
        assert_eq!(multi.sinks[1].len(), 1);
        assert!(matches!(
            multi.sinks[1].as_slice()[0],
            PlacementEvent::Warning { .. }
        ));
    }

    #[test]
    fn empty_multi_sink_drops_events() {
        let mut multi: MultiSink<VecSink> = MultiSink::default();
        multi.send(warning("msg"));
        assert!(multi.is_empty());
        assert!(!multi.wants(PlacementEventKind::Warning));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning("x"));
        sink.send(warning("y"));
        drop(sink);
        assert_eq!(count, 2);
    }
}
