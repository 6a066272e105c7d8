//! Event-level input controller.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::map::{map_key, should_quit};
use crate::types::Intent;

/// Turns raw terminal events into intents.
///
/// Only key presses count. Releases and terminal auto-repeat are dropped so one
/// tap is one tile.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputController;

impl InputController {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(&self, event: &Event) -> Option<Intent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.translate_key(*key),
            _ => None,
        }
    }

    pub fn translate_key(&self, key: KeyEvent) -> Option<Intent> {
        if should_quit(key) {
            return Some(Intent::Quit);
        }
        map_key(key)
    }
}
