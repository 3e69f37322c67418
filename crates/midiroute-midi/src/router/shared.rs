//! Lock-guarded router for applications that register while dispatching.
//!
//! The plain [`MidiRouter`] assumes setup-then-dispatch. When registration can
//! race with the dispatch loop, wrap it here: dispatch takes a read lock,
//! registration a write lock. The lock is released before any handler runs, so
//! handlers may register or unregister through the same router.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{invoke, Dispatch, Dispatcher, MidiRouter, SharedHandler};
use crate::category::MessageCategory;
use crate::message::RawMessage;

/// Cloneable handle to a router behind an `RwLock`. Clone is cheap (Arc internally).
#[derive(Clone, Default)]
pub struct SharedRouter {
    inner: Arc<RwLock<MidiRouter>>,
}

impl SharedRouter {
    pub fn new(router: MidiRouter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(router)),
        }
    }

    pub fn register<F>(&self, category: MessageCategory, handler: F) -> Option<SharedHandler>
    where
        F: Fn(u8, u8, u8) + Send + Sync + 'static,
    {
        self.inner.write().register(category, handler)
    }

    pub fn unregister(&self, category: MessageCategory) -> Option<SharedHandler> {
        self.inner.write().unregister(category)
    }

    pub fn dispatch(&self, bytes: &[u8]) -> Dispatch {
        let Ok(message) = RawMessage::from_slice(bytes) else {
            return Dispatch::Ignored;
        };
        let category = message.category();
        let route = self
            .inner
            .read()
            .route(category)
            .map(|(handler, is_fallback)| (Arc::clone(handler), is_fallback));
        invoke(
            route.as_ref().map(|(handler, is_fallback)| (handler, *is_fallback)),
            category,
            message,
        )
    }

    pub fn read(&self) -> RwLockReadGuard<'_, MidiRouter> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, MidiRouter> {
        self.inner.write()
    }
}

impl From<MidiRouter> for SharedRouter {
    fn from(router: MidiRouter) -> Self {
        Self::new(router)
    }
}

impl Dispatcher for SharedRouter {
    #[inline]
    fn dispatch(&self, bytes: &[u8]) -> Dispatch {
        SharedRouter::dispatch(self, bytes)
    }
}
