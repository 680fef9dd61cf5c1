use engine::theme::{StyleSlotMap, style_slots_for};
use engine::{StyleSlot, Theme, ThemeStore};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn any_theme() -> impl Strategy<Value = Theme> {
    prop::sample::select(Theme::ALL.to_vec())
}

/// Either a valid theme id (in random case) or arbitrary junk.
fn any_theme_name() -> impl Strategy<Value = String> {
    prop_oneof![
        any_theme().prop_map(|t| t.id().to_string()),
        any_theme().prop_map(|t| t.id().to_uppercase()),
        "[a-z]{0,10}",
    ]
}

#[cfg(test)]
mod store_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_last_set_wins(sequence in prop::collection::vec(any_theme(), 1..50)) {
            let mut store = ThemeStore::new();
            for theme in &sequence {
                store.set_theme(*theme);
            }

            // Property: the store reports exactly the last value written
            let last = *sequence.last().unwrap();
            prop_assert_eq!(store.theme(), last);
            prop_assert_eq!(store.style_slots(), style_slots_for(last));
        }

        #[test]
        fn test_subscriber_observes_every_write(sequence in prop::collection::vec(any_theme(), 0..50)) {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let sink = seen.clone();
            let mut store = ThemeStore::new();
            store.subscribe(move |theme: Theme, slots: &'static StyleSlotMap| {
                sink.borrow_mut().push((theme, slots.accent));
            });

            for theme in &sequence {
                store.set_theme(*theme);
            }

            // Property: one notification per write, in order, with matching slots
            let seen = seen.borrow();
            prop_assert_eq!(seen.len(), sequence.len());
            for ((observed, accent), expected) in seen.iter().zip(sequence.iter()) {
                prop_assert_eq!(observed, expected);
                prop_assert_eq!(*accent, expected.slots().accent);
            }
        }

        #[test]
        fn test_setting_twice_matches_setting_once(start in any_theme(), theme in any_theme()) {
            let mut once = ThemeStore::with_theme(start);
            once.set_theme(theme);

            let deliveries = Rc::new(RefCell::new(Vec::new()));
            let sink = deliveries.clone();
            let mut twice = ThemeStore::with_theme(start);
            twice.subscribe(move |theme: Theme, slots: &'static StyleSlotMap| {
                sink.borrow_mut().push((theme, slots));
            });
            twice.set_theme(theme);
            twice.set_theme(theme);

            // Property: the second write is observable but changes nothing
            prop_assert_eq!(twice.theme(), once.theme());
            prop_assert!(std::ptr::eq(twice.style_slots(), once.style_slots()));

            let deliveries = deliveries.borrow();
            prop_assert_eq!(deliveries.len(), 2);
            prop_assert_eq!(deliveries[0].0, theme);
            prop_assert_eq!(deliveries[1].0, theme);
            prop_assert!(std::ptr::eq(deliveries[0].1, deliveries[1].1));
            prop_assert_eq!(deliveries[1].1, style_slots_for(theme));
        }

        #[test]
        fn test_named_writes_never_leave_the_theme_set(names in prop::collection::vec(any_theme_name(), 0..50)) {
            let mut store = ThemeStore::new();
            let mut expected = Theme::Light;

            for name in &names {
                match store.set_theme_by_name(name) {
                    Ok(()) => expected = name.parse().unwrap(),
                    Err(err) => prop_assert_eq!(&err.name, name),
                }
                // Property: a rejected name never changes the current theme
                prop_assert_eq!(store.theme(), expected);
            }
        }

        #[test]
        fn test_slot_lookup_matches_fields(theme in any_theme()) {
            let slots = style_slots_for(theme);
            let collected: Vec<_> = slots.iter().collect();

            // Property: iteration covers each slot once and agrees with get()
            prop_assert_eq!(collected.len(), StyleSlot::ALL.len());
            for (slot, value) in collected {
                prop_assert_eq!(slots.get(slot), value);
                prop_assert!(!value.is_empty());
            }
        }
    }
}
