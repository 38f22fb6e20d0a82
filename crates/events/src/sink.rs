//! Outbound delivery seam.
//!
//! The component that actually carries events to the application runtime (an
//! event channel, a stream controller, a test buffer) is outside this crate.
//! It only has to accept projected maps in order.

use std::convert::Infallible;

use cloudbridge_core::BoundaryMap;

/// Receives projected hub events.
///
/// `send` may fail (e.g. the application side has stopped listening). The
/// failure is surfaced to the forwarder's caller, which decides whether to
/// drop the event or tear the stream down.
pub trait EventSink {
    type Error: core::fmt::Debug;

    fn send(&mut self, event: BoundaryMap) -> Result<(), Self::Error>;
}

/// Buffering sink; events are appended in delivery order.
impl EventSink for Vec<BoundaryMap> {
    type Error = Infallible;

    fn send(&mut self, event: BoundaryMap) -> Result<(), Self::Error> {
        self.push(event);
        Ok(())
    }
}

impl<S> EventSink for &mut S
where
    S: EventSink + ?Sized,
{
    type Error = S::Error;

    fn send(&mut self, event: BoundaryMap) -> Result<(), Self::Error> {
        (**self).send(event)
    }
}

impl<S> EventSink for Box<S>
where
    S: EventSink + ?Sized,
{
    type Error = S::Error;

    fn send(&mut self, event: BoundaryMap) -> Result<(), Self::Error> {
        (**self).send(event)
    }
}
