use eframe::egui::{InputState, Key};

use crate::action::{ActionRequestQueue, InputAction};

struct Shortcut {
    key: Key,
    command: bool,
    action: InputAction,
}

impl Shortcut {
    const fn plain(key: Key, action: InputAction) -> Self {
        Self {
            key,
            command: false,
            action,
        }
    }

    const fn command(key: Key, action: InputAction) -> Self {
        Self {
            key,
            command: true,
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::plain(Key::Escape, InputAction::ClearInputs),
    Shortcut::command(Key::U, InputAction::ToggleUnitSystem),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.command == shortcut.command {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
