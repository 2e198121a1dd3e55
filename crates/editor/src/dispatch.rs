//! Key event dispatch.
//!
//! Resolution is a pure stateless function: (modifiers, key) → what to do.
//! All bindings are single-step modifier+key combinations, so no chord
//! state machine is needed. The session executes the resolved command;
//! this module only decides what a key means.
//!
//! Primary-modifier printables follow a fixed hotkey table. A handful of
//! combinations are deliberately left to the host environment (browser
//! reload and zoom); everything else under the primary modifier is
//! swallowed so stray host shortcuts cannot fire while typing.

use canvas_edit_input::{Key, KeyEvent};

/// Commands that can be executed on the editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    /// Insert a printable character at the cursor
    InsertChar(char),
    /// Split the current line at the cursor
    InsertNewline,
    /// Insert spaces up to the next tab stop
    InsertTab,
    /// Delete the character before the cursor (Backspace)
    DeleteBackward,
    /// Delete the character after the cursor (forward delete)
    DeleteForward,
    /// Remove the cursor's line
    DeleteCurrentLine,
    /// Character step left/right
    MoveLeft { extend: bool },
    MoveRight { extend: bool },
    /// Line step up/down
    MoveUp { extend: bool },
    MoveDown { extend: bool },
    /// Whitespace-boundary skip
    MoveWordLeft { extend: bool },
    MoveWordRight { extend: bool },
    /// Line boundary jump (with indentation toggle on the start side)
    MoveToLineStart { extend: bool },
    MoveToLineEnd { extend: bool },
    /// Select the entire buffer
    SelectAll,
    /// Write the selection to the clipboard
    CopySelection,
    /// Read the clipboard and insert it
    Paste,
    /// Toggle held-key scrolling upward
    ToggleScrollUp,
    /// Toggle held-key scrolling downward
    ToggleScrollDown,
}

/// What the dispatcher decided about a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dispatch {
    /// Execute this command
    Command(Command),
    /// Swallow the event so the host environment takes no default action
    Suppress,
    /// Leave the event to the host environment (reserved shortcuts)
    PassThrough,
}

/// Resolves a key event to a dispatch decision.
///
/// Returns `None` for keys the editor does not recognize at all.
pub(crate) fn resolve_key(event: &KeyEvent) -> Option<Dispatch> {
    let mods = &event.modifiers;
    let extend = mods.shift;

    let command = match event.key {
        Key::Char(ch) => {
            if mods.primary {
                return Some(resolve_hotkey(ch));
            }
            // Control characters are not text
            if (ch as u32) < 0x20 {
                return None;
            }
            Command::InsertChar(ch)
        }

        Key::Return => Command::InsertNewline,
        Key::Tab => Command::InsertTab,
        Key::Backspace => Command::DeleteBackward,
        Key::Delete => Command::DeleteForward,

        Key::Left if mods.primary => Command::MoveToLineStart { extend },
        Key::Left if mods.alt => Command::MoveWordLeft { extend },
        Key::Left => Command::MoveLeft { extend },

        Key::Right if mods.primary => Command::MoveToLineEnd { extend },
        Key::Right if mods.alt => Command::MoveWordRight { extend },
        Key::Right => Command::MoveRight { extend },

        Key::Up => Command::MoveUp { extend },
        Key::Down => Command::MoveDown { extend },

        Key::Home => Command::MoveToLineStart { extend },
        Key::End => Command::MoveToLineEnd { extend },

        Key::Escape => return None,
    };
    Some(Dispatch::Command(command))
}

/// The primary-modifier hotkey table.
fn resolve_hotkey(ch: char) -> Dispatch {
    match ch.to_ascii_lowercase() {
        'k' => Dispatch::Command(Command::DeleteCurrentLine),
        'a' => Dispatch::Command(Command::SelectAll),
        'c' => Dispatch::Command(Command::CopySelection),
        'v' => Dispatch::Command(Command::Paste),
        'u' => Dispatch::Command(Command::ToggleScrollUp),
        'i' => Dispatch::Command(Command::ToggleScrollDown),
        // Reload and zoom stay with the host environment
        'r' | '-' | '=' | '0' => Dispatch::PassThrough,
        _ => Dispatch::Suppress,
    }
}
