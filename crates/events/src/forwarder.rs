//! Projects hub events and pushes them into a sink.

use crate::event::HubEvent;
use crate::sink::EventSink;

/// Forwards typed hub events to an [`EventSink`].
///
/// - No IO of its own / no async
/// - One projection per event, delivered in call order
/// - Stateless apart from the sink it owns
#[derive(Debug)]
pub struct HubEventForwarder<S> {
    sink: S,
}

impl<S> HubEventForwarder<S>
where
    S: EventSink,
{
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Project `event` and send it.
    pub fn forward<E: HubEvent>(&mut self, event: &E) -> Result<(), S::Error> {
        let mapped = event.to_boundary_map();
        tracing::debug!(event_name = event.event_name(), fields = mapped.len(), "forwarding hub event");

        self.sink.send(mapped).inspect_err(|err| {
            tracing::warn!(event_name = event.event_name(), "hub event not delivered: {err:?}");
        })
    }

    /// Forward every event in order, stopping at the first delivery failure.
    pub fn forward_all<'a, E, I>(&mut self, events: I) -> Result<usize, S::Error>
    where
        E: HubEvent,
        I: IntoIterator<Item = &'a E>,
    {
        let mut delivered = 0;
        for event in events {
            self.forward(event)?;
            delivered += 1;
        }
        Ok(delivered)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
