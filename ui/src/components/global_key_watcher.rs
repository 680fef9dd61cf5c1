use crate::components::common::{CreatorActivityMsg, Msg, ThemeActivityMsg};
use crate::config::KeyBindingsConfig;
use engine::ViewAction;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Invisible component subscribed to every event; maps global shortcuts to
/// messages regardless of which component has focus.
#[derive(MockComponent)]
pub struct GlobalKeyWatcher {
    component: Phantom,
    keys: KeyBindingsConfig,
}

impl GlobalKeyWatcher {
    pub fn new(keys: KeyBindingsConfig) -> Self {
        Self {
            component: Phantom::default(),
            keys,
        }
    }

    pub fn map_key(&self, c: char) -> Option<Msg> {
        let keys = &self.keys;
        if c == keys.quit() {
            Some(Msg::AppClose)
        } else if c == keys.theme() {
            Some(Msg::ThemeActivity(ThemeActivityMsg::TogglePicker))
        } else if c == keys.cycle_theme() {
            Some(Msg::ThemeActivity(ThemeActivityMsg::CycleTheme))
        } else if c == keys.generate() {
            Some(Msg::CreatorActivity(CreatorActivityMsg::Generate))
        } else if c == keys.next_prompt() {
            Some(Msg::CreatorActivity(CreatorActivityMsg::NextPreset))
        } else if c == keys.next_option() {
            Some(Msg::ViewActivity(ViewAction::Next))
        } else if c == keys.alt_option() {
            Some(Msg::ViewActivity(ViewAction::NextAlt))
        } else if c == keys.toggle() {
            Some(Msg::ViewActivity(ViewAction::Toggle))
        } else {
            None
        }
    }
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            // Shift is allowed so upper-case bindings such as `T` match
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers,
            }) if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                self.map_key(c)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char, modifiers: KeyModifiers) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code: Key::Char(c),
            modifiers,
        })
    }

    #[test]
    fn test_default_bindings() {
        let mut watcher = GlobalKeyWatcher::new(KeyBindingsConfig::default());
        assert_eq!(
            watcher.on(key('q', KeyModifiers::NONE)),
            Some(Msg::AppClose)
        );
        assert_eq!(
            watcher.on(key('t', KeyModifiers::NONE)),
            Some(Msg::ThemeActivity(ThemeActivityMsg::TogglePicker))
        );
        assert_eq!(
            watcher.on(key('T', KeyModifiers::SHIFT)),
            Some(Msg::ThemeActivity(ThemeActivityMsg::CycleTheme))
        );
        assert_eq!(
            watcher.on(key('g', KeyModifiers::NONE)),
            Some(Msg::CreatorActivity(CreatorActivityMsg::Generate))
        );
        assert_eq!(
            watcher.on(key('p', KeyModifiers::NONE)),
            Some(Msg::CreatorActivity(CreatorActivityMsg::NextPreset))
        );
        assert_eq!(
            watcher.on(key('n', KeyModifiers::NONE)),
            Some(Msg::ViewActivity(ViewAction::Next))
        );
        assert_eq!(
            watcher.on(key('m', KeyModifiers::NONE)),
            Some(Msg::ViewActivity(ViewAction::NextAlt))
        );
        assert_eq!(
            watcher.on(key('o', KeyModifiers::NONE)),
            Some(Msg::ViewActivity(ViewAction::Toggle))
        );
    }

    #[test]
    fn test_control_chords_and_unbound_keys_are_ignored() {
        let mut watcher = GlobalKeyWatcher::new(KeyBindingsConfig::default());
        assert_eq!(watcher.on(key('q', KeyModifiers::CONTROL)), None);
        assert_eq!(watcher.on(key('z', KeyModifiers::NONE)), None);
        assert_eq!(watcher.on(Event::Tick), None);
    }
}
