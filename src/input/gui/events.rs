//! Translation of winit window events into explorer input events.

use crate::controllers::interactive::events::input::{InputEvent, Key, PointerButton};
use crate::core::data::point::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

#[must_use]
pub fn map_key(key_code: KeyCode) -> Key {
    match key_code {
        KeyCode::Enter | KeyCode::NumpadEnter => Key::HistoryBack,
        _ => Key::Other,
    }
}

#[must_use]
pub fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

/// Remembers the last cursor position, since winit reports button changes
/// without one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventTranslator {
    cursor: Point,
}

impl EventTranslator {
    pub fn pointer_moved(&mut self, position: Point) -> InputEvent {
        self.cursor = position;
        InputEvent::PointerMoved { position }
    }

    pub fn pointer_button(&self, button: MouseButton, state: ElementState) -> InputEvent {
        let position = self.cursor;
        let button = map_button(button);

        match state {
            ElementState::Pressed => InputEvent::PointerDown { position, button },
            ElementState::Released => InputEvent::PointerUp { position, button },
        }
    }

    /// Key releases and auto-repeats produce nothing.
    #[must_use]
    pub fn key(&self, physical_key: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        let key = match physical_key {
            PhysicalKey::Code(key_code) => map_key(key_code),
            PhysicalKey::Unidentified(_) => Key::Other,
        };

        Some(InputEvent::KeyPressed(key))
    }

    /// `to_pixel` maps window coordinates onto the framebuffer.
    pub fn translate<F>(&mut self, event: &WindowEvent, to_pixel: F) -> Option<InputEvent>
    where
        F: Fn(PhysicalPosition<f64>) -> Point,
    {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Closed),
            WindowEvent::CursorMoved { position, .. } => Some(self.pointer_moved(to_pixel(*position))),
            WindowEvent::MouseInput { state, button, .. } => Some(self.pointer_button(*button, *state)),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        repeat,
                        ..
                    },
                ..
            } => self.key(*physical_key, *state, *repeat),
            _ => None,
        }
    }
}
