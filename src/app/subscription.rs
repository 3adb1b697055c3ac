// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Screen};
use crate::ui::sidebar::{self, Tab};
use iced::keyboard::{self, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Ctrl/Cmd+1..6 switch tabs, but only inside the portal.
pub fn create_shortcut_subscription(screen: Screen) -> Subscription<Message> {
    if screen != Screen::Portal {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_tab(&key, modifiers)
                    .map(|tab| Message::Sidebar(sidebar::Message::Select(tab)))
            }
            _ => None,
        }
    })
}

fn shortcut_tab(key: &Key, modifiers: Modifiers) -> Option<Tab> {
    if !modifiers.command() {
        return None;
    }
    match key {
        Key::Character(c) => c.parse::<u8>().ok().and_then(Tab::from_shortcut),
        _ => None,
    }
}

/// Ticks every 100 ms while toasts are on screen, for auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_digit_maps_to_tab() {
        let key = Key::Character("3".into());
        assert_eq!(shortcut_tab(&key, Modifiers::COMMAND), Some(Tab::Orders));
    }

    #[test]
    fn digit_without_modifier_is_ignored() {
        let key = Key::Character("2".into());
        assert_eq!(shortcut_tab(&key, Modifiers::empty()), None);
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let key = Key::Character("9".into());
        assert_eq!(shortcut_tab(&key, Modifiers::COMMAND), None);
    }
}
