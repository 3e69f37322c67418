//! Category → handler registry and the dispatch entry point.
//!
//! ## Quick Start
//!
//! ```ignore
//! use midiroute_midi::{MessageCategory, MidiRouter};
//!
//! let router = MidiRouter::builder()
//!     .on(MessageCategory::NoteOn, |status, note, velocity| {
//!         println!("Note On: ch {} note {} vel {}", status & 0x0F, note, velocity);
//!     })
//!     .build();
//!
//! router.dispatch(&[0x90, 60, 100]);
//! ```

mod builder;
mod handler;
mod shared;

pub use builder::MidiRouterBuilder;
pub use handler::{MidiHandler, SharedHandler};
pub use shared::SharedRouter;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::category::MessageCategory;
use crate::message::RawMessage;

/// Outcome of a single dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The registered handler for the category ran.
    Handled(MessageCategory),
    /// No handler for the category; the fallback handler ran.
    Fallback(MessageCategory),
    /// No handler and no fallback; an unhandled-message diagnostic was emitted.
    Unhandled(MessageCategory),
    /// Buffer shorter than 3 bytes. Nothing was classified.
    Ignored,
}

impl Dispatch {
    #[inline]
    pub fn category(&self) -> Option<MessageCategory> {
        match *self {
            Dispatch::Handled(c) | Dispatch::Fallback(c) | Dispatch::Unhandled(c) => Some(c),
            Dispatch::Ignored => None,
        }
    }

    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled(_))
    }
}

/// Anything that accepts raw message buffers. Lets the polling pump drive a
/// plain [`MidiRouter`] or a [`SharedRouter`].
pub trait Dispatcher {
    fn dispatch(&self, bytes: &[u8]) -> Dispatch;
}

/// Handler registry owned by whatever drives the dispatch loop.
///
/// Populate it at setup, then call [`dispatch`](Self::dispatch) once per
/// incoming message. Registration for a category overwrites any earlier one.
#[derive(Default)]
pub struct MidiRouter {
    handlers: HashMap<MessageCategory, SharedHandler>,
    fallback: Option<SharedHandler>,
}

impl MidiRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MidiRouterBuilder {
        MidiRouterBuilder::default()
    }

    // ==================== Registration ====================

    /// Register `handler` for `category`, returning the handler it replaced.
    pub fn register<F>(&mut self, category: MessageCategory, handler: F) -> Option<SharedHandler>
    where
        F: Fn(u8, u8, u8) + Send + Sync + 'static,
    {
        self.register_shared(category, Arc::new(handler))
    }

    /// Register an already shared handler: a [`MidiHandler`] implementor, or
    /// one handler reused across several categories.
    pub fn register_shared(
        &mut self,
        category: MessageCategory,
        handler: SharedHandler,
    ) -> Option<SharedHandler> {
        self.handlers.insert(category, handler)
    }

    pub fn unregister(&mut self, category: MessageCategory) -> Option<SharedHandler> {
        self.handlers.remove(&category)
    }

    /// Catch-all for categories with no handler. Replaces the unhandled diagnostic.
    pub fn set_fallback<F>(&mut self, handler: F) -> Option<SharedHandler>
    where
        F: Fn(u8, u8, u8) + Send + Sync + 'static,
    {
        self.fallback.replace(Arc::new(handler))
    }

    pub fn clear_fallback(&mut self) -> Option<SharedHandler> {
        self.fallback.take()
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
        self.fallback = None;
    }

    // ==================== Queries ====================

    pub fn is_registered(&self, category: MessageCategory) -> bool {
        self.handlers.contains_key(&category)
    }

    pub fn handler(&self, category: MessageCategory) -> Option<&SharedHandler> {
        self.handlers.get(&category)
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Number of categories with a handler (the fallback is not counted).
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn registered_categories(&self) -> Vec<MessageCategory> {
        let mut categories: Vec<_> = self.handlers.keys().copied().collect();
        categories.sort_unstable();
        categories
    }

    // ==================== Dispatch ====================

    /// Classify and route one buffer. Only the first three bytes are read;
    /// a shorter buffer is ignored without classification or diagnostics.
    pub fn dispatch(&self, bytes: &[u8]) -> Dispatch {
        match RawMessage::from_slice(bytes) {
            Ok(message) => self.dispatch_message(message),
            Err(_) => Dispatch::Ignored,
        }
    }

    /// Route an already framed message.
    pub fn dispatch_message(&self, message: RawMessage) -> Dispatch {
        let category = message.category();
        invoke(self.route(category), category, message)
    }

    /// Handler that receives `category`, flagged `true` when it is the fallback.
    fn route(&self, category: MessageCategory) -> Option<(&SharedHandler, bool)> {
        match self.handlers.get(&category) {
            Some(handler) => Some((handler, false)),
            None => self.fallback.as_ref().map(|fallback| (fallback, true)),
        }
    }
}

/// Run the routed handler, or report the message as unhandled.
fn invoke(
    route: Option<(&SharedHandler, bool)>,
    category: MessageCategory,
    message: RawMessage,
) -> Dispatch {
    let RawMessage {
        status,
        data1,
        data2,
    } = message;

    match route {
        Some((handler, is_fallback)) => {
            handler.handle(status, data1, data2);
            if is_fallback {
                Dispatch::Fallback(category)
            } else {
                Dispatch::Handled(category)
            }
        }
        None => {
            debug!(
                "Unhandled MIDI: category={} ({}), status={:#04X}, data1={}, data2={}",
                category as u8, category, status, data1, data2
            );
            Dispatch::Unhandled(category)
        }
    }
}

impl Dispatcher for MidiRouter {
    #[inline]
    fn dispatch(&self, bytes: &[u8]) -> Dispatch {
        MidiRouter::dispatch(self, bytes)
    }
}

impl fmt::Debug for MidiRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MidiRouter")
            .field("categories", &self.registered_categories())
            .field("fallback", &self.has_fallback())
            .finish()
    }
}
