//! Handler capability invoked by the router.

use std::sync::Arc;

/// Callback for one message category. Receives the raw `(status, data1, data2)`.
///
/// Any `Fn(u8, u8, u8) + Send + Sync` closure or function is a handler.
/// Handlers run in-line on the dispatching thread and should not block.
pub trait MidiHandler: Send + Sync {
    fn handle(&self, status: u8, data1: u8, data2: u8);
}

impl<F> MidiHandler for F
where
    F: Fn(u8, u8, u8) + Send + Sync,
{
    #[inline]
    fn handle(&self, status: u8, data1: u8, data2: u8) {
        self(status, data1, data2)
    }
}

/// Handler as stored by the router, shareable across categories.
pub type SharedHandler = Arc<dyn MidiHandler>;
