//! MidiRouter builder for setup-time handler registration.

use std::sync::Arc;

use super::{MidiRouter, SharedHandler};
use crate::category::MessageCategory;

#[derive(Default)]
pub struct MidiRouterBuilder {
    handlers: Vec<(MessageCategory, SharedHandler)>,
    fallback: Option<SharedHandler>,
}

impl MidiRouterBuilder {
    /// Handle `category`. A later call for the same category wins.
    pub fn on<F>(mut self, category: MessageCategory, handler: F) -> Self
    where
        F: Fn(u8, u8, u8) + Send + Sync + 'static,
    {
        self.handlers.push((category, Arc::new(handler)));
        self
    }

    /// Handle every category in `categories` with one shared handler.
    pub fn on_many<F>(
        mut self,
        categories: impl IntoIterator<Item = MessageCategory>,
        handler: F,
    ) -> Self
    where
        F: Fn(u8, u8, u8) + Send + Sync + 'static,
    {
        let handler: SharedHandler = Arc::new(handler);
        self.handlers.extend(
            categories
                .into_iter()
                .map(|category| (category, Arc::clone(&handler))),
        );
        self
    }

    pub fn on_shared(mut self, category: MessageCategory, handler: SharedHandler) -> Self {
        self.handlers.push((category, handler));
        self
    }

    pub fn fallback<F>(mut self, handler: F) -> Self
    where
        F: Fn(u8, u8, u8) + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> MidiRouter {
        let mut router = MidiRouter::new();
        for (category, handler) in self.handlers {
            router.register_shared(category, handler);
        }
        router.fallback = self.fallback;
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Dispatch;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_build_is_empty() {
        let router = MidiRouterBuilder::default().build();
        assert!(router.is_empty());
        assert!(!router.has_fallback());
    }

    #[test]
    fn test_on_registers_each_category() {
        let router = MidiRouter::builder()
            .on(MessageCategory::NoteOn, |_, _, _| {})
            .on(MessageCategory::NoteOff, |_, _, _| {})
            .on(MessageCategory::Pan, |_, _, _| {})
            .build();

        assert_eq!(router.len(), 3);
        assert!(router.is_registered(MessageCategory::Pan));
    }

    #[test]
    fn test_later_on_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let (f, s) = (Arc::clone(&first), Arc::clone(&second));

        let router = MidiRouter::builder()
            .on(MessageCategory::Start, move |_, _, _| {
                f.fetch_add(1, Ordering::Relaxed);
            })
            .on(MessageCategory::Start, move |_, _, _| {
                s.fetch_add(1, Ordering::Relaxed);
            })
            .build();

        router.dispatch(&[0xFA, 0, 0]);
        assert_eq!(first.load(Ordering::Relaxed), 0);
        assert_eq!(second.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_on_many_shares_one_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);

        let router = MidiRouter::builder()
            .on_many(
                [
                    MessageCategory::NrpnLsb,
                    MessageCategory::NrpnMsb,
                    MessageCategory::RpnLsb,
                    MessageCategory::RpnMsb,
                ],
                move |_, _, _| {
                    hits_clone.fetch_add(1, Ordering::Relaxed);
                },
            )
            .build();

        for cc in 98..=101u8 {
            assert!(router.dispatch(&[0xB0, cc, 0]).is_handled());
        }
        assert_eq!(hits.load(Ordering::Relaxed), 4);
        assert!(Arc::ptr_eq(
            router.handler(MessageCategory::NrpnLsb).unwrap(),
            router.handler(MessageCategory::RpnMsb).unwrap()
        ));
    }

    #[test]
    fn test_fallback() {
        let router = MidiRouter::builder().fallback(|_, _, _| {}).build();
        assert_eq!(
            router.dispatch(&[0xA0, 60, 1]),
            Dispatch::Fallback(MessageCategory::Unknown)
        );
    }
}
