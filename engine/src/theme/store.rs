use super::{InvalidThemeError, StyleSlotMap, Theme, style_slots_for};

/// Receives theme changes from a [`ThemeStore`].
///
/// Delivery is synchronous: every subscriber has run before
/// [`ThemeStore::set_theme`] returns.
pub trait ThemeSubscriber {
    fn theme_changed(&mut self, theme: Theme, slots: &'static StyleSlotMap);
}

impl<F> ThemeSubscriber for F
where
    F: FnMut(Theme, &'static StyleSlotMap),
{
    fn theme_changed(&mut self, theme: Theme, slots: &'static StyleSlotMap) {
        self(theme, slots)
    }
}

/// Handle returned by [`ThemeStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of the active [`Theme`].
///
/// Constructed explicitly and passed to whoever renders; there is no global
/// instance. Starts on [`Theme::Light`].
pub struct ThemeStore {
    current: Theme,
    subscribers: Vec<(SubscriptionId, Box<dyn ThemeSubscriber>)>,
    next_id: u64,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            current: theme,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn style_slots(&self) -> &'static StyleSlotMap {
        style_slots_for(self.current)
    }

    /// Replace the active theme and notify every subscriber in subscription
    /// order. Re-setting the current theme still notifies; the delivered table
    /// is identical.
    pub fn set_theme(&mut self, next: Theme) {
        let previous = self.current;
        self.current = next;

        if previous == next {
            log::debug!("Theme re-set to {next}");
        } else {
            log::info!("Theme changed: {previous} -> {next}");
        }

        let slots = style_slots_for(next);
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber.theme_changed(next, slots);
        }
    }

    /// Parse `name` and apply it. Unknown names leave the store untouched and
    /// notify nobody.
    pub fn set_theme_by_name(&mut self, name: &str) -> Result<(), InvalidThemeError> {
        match name.parse::<Theme>() {
            Ok(theme) => {
                self.set_theme(theme);
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected theme change: {e}");
                Err(e)
            }
        }
    }

    /// Register a subscriber. It is not called with the current value; read
    /// [`ThemeStore::theme`] for the initial state.
    pub fn subscribe<S>(&mut self, subscriber: S) -> SubscriptionId
    where
        S: ThemeSubscriber + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        log::debug!("Theme subscriber {id:?} registered");
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_err;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_store() -> (ThemeStore, Rc<RefCell<Vec<Theme>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::new();
        let sink = seen.clone();
        store.subscribe(move |theme: Theme, _: &'static StyleSlotMap| {
            sink.borrow_mut().push(theme)
        });
        (store, seen)
    }

    #[test]
    fn test_initial_theme_is_light() {
        let store = ThemeStore::new();
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.style_slots(), style_slots_for(Theme::Light));
    }

    #[test]
    fn test_set_theme_is_visible_immediately() {
        let mut store = ThemeStore::new();
        for theme in Theme::ALL {
            store.set_theme(theme);
            assert_eq!(store.theme(), theme);
            assert_eq!(store.style_slots(), style_slots_for(theme));
        }
    }

    #[test]
    fn test_subscriber_sees_change_before_setter_returns() {
        let (mut store, seen) = recording_store();
        store.set_theme(Theme::Dark);
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
        store.set_theme(Theme::Minimal);
        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Minimal]);
        assert_eq!(store.theme(), Theme::Minimal);
    }

    #[test]
    fn test_invalid_name_keeps_prior_theme_and_is_silent() {
        let (mut store, seen) = recording_store();
        store.set_theme(Theme::Neon);
        let err = assert_err!(store.set_theme_by_name("sepia"));
        assert_eq!(err.name, "sepia");
        assert_eq!(store.theme(), Theme::Neon);
        assert_eq!(*seen.borrow(), vec![Theme::Neon]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let seen = Rc::new(RefCell::new(0usize));
        let mut store = ThemeStore::new();
        let sink = seen.clone();
        let id = store.subscribe(move |_: Theme, _: &'static StyleSlotMap| {
            *sink.borrow_mut() += 1
        });

        store.set_theme(Theme::Dark);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_theme(Theme::Neon);

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::new();
        for tag in ["first", "second", "third"] {
            let log = log.clone();
            store.subscribe(move |_: Theme, _: &'static StyleSlotMap| log.borrow_mut().push(tag));
        }
        store.set_theme(Theme::Dark);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_struct_subscriber() {
        struct Counter(Rc<RefCell<Vec<&'static str>>>);
        impl ThemeSubscriber for Counter {
            fn theme_changed(&mut self, _theme: Theme, slots: &'static StyleSlotMap) {
                self.0.borrow_mut().push(slots.accent);
            }
        }

        let accents = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::new();
        store.subscribe(Counter(accents.clone()));
        store.set_theme(Theme::Neon);
        assert_eq!(*accents.borrow(), vec![style_slots_for(Theme::Neon).accent]);
    }
}
