// Copyright 2025 the WxChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events and the commands they resolve to.
//!
//! Keyboard shortcuts and toolbar buttons both resolve to a [`Command`], so the two input paths
//! cannot drift apart.

use kurbo::Point;

use crate::mode::ModeId;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The Enter/Return key.
    Enter,
    /// The Escape key.
    Escape,
}

/// An input event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyPress(Key),
    /// The pointer was clicked at chart coordinates.
    PointerClick(Point),
    /// A toolbar mode button was pressed.
    ModeButton(ModeId),
    /// The "Clear All" button was pressed.
    ClearButton,
}

/// An editor command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Switch mode.
    Select(ModeId),
    /// Decorate the recorded polyline.
    Commit,
    /// Remove every user artifact.
    ClearAll,
}

impl Command {
    /// The command bound to `key`, if any.
    ///
    /// `c`, `w`, `o`, `s`, `d` select fronts, `h` and `l` select markers, Enter commits.
    pub fn from_key(key: Key) -> Option<Self> {
        let mode = match key {
            Key::Enter => return Some(Self::Commit),
            Key::Escape => return None,
            Key::Char('c') => ModeId::ColdFront,
            Key::Char('w') => ModeId::WarmFront,
            Key::Char('o') => ModeId::OccludedFront,
            Key::Char('s') => ModeId::StationaryFront,
            Key::Char('d') => ModeId::Dryline,
            Key::Char('h') => ModeId::HighMarker,
            Key::Char('l') => ModeId::LowMarker,
            Key::Char(_) => return None,
        };
        Some(Self::Select(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_keys_match_buttons() {
        let pairs = [
            ('c', ModeId::ColdFront),
            ('w', ModeId::WarmFront),
            ('o', ModeId::OccludedFront),
            ('s', ModeId::StationaryFront),
            ('d', ModeId::Dryline),
            ('h', ModeId::HighMarker),
            ('l', ModeId::LowMarker),
        ];
        for (c, mode) in pairs {
            assert_eq!(Command::from_key(Key::Char(c)), Some(Command::Select(mode)));
        }
    }

    #[test]
    fn enter_commits_and_other_keys_are_unbound() {
        assert_eq!(Command::from_key(Key::Enter), Some(Command::Commit));
        assert_eq!(Command::from_key(Key::Char('x')), None);
        assert_eq!(Command::from_key(Key::Char('C')), None);
        assert_eq!(Command::from_key(Key::Escape), None);
    }
}
