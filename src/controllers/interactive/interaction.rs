use crate::controllers::interactive::events::input::{InputEvent, Key, PointerButton};
use crate::core::data::selection_rect::{PixelSquare, SelectionRect};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Selecting,
}

/// What the application should do in response to an input event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// The live selection changed; repaint the overlay only.
    Preview,
    /// The drag finished; zoom into it.
    Commit(SelectionRect),
    PopHistory,
    Exit,
}

/// Tracks the rectangle-drag gesture.
#[derive(Debug, Default, Clone)]
pub struct InteractionStateMachine {
    selection: SelectionRect,
}

impl InteractionStateMachine {
    #[must_use]
    pub fn state(&self) -> InteractionState {
        if self.selection.active {
            InteractionState::Selecting
        } else {
            InteractionState::Idle
        }
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn selection(&self) -> Option<SelectionRect> {
        self.selection.active.then_some(self.selection)
    }

    /// The square the drag in progress would zoom into.
    #[must_use]
    pub fn overlay(&self) -> Option<PixelSquare> {
        self.selection().and_then(|selection| selection.to_square())
    }

    pub fn handle(&mut self, event: InputEvent) -> Option<Command> {
        match (self.state(), event) {
            (_, InputEvent::Closed) => Some(Command::Exit),
            (_, InputEvent::KeyPressed(Key::HistoryBack)) => {
                self.clear();
                Some(Command::PopHistory)
            }
            (_, InputEvent::KeyPressed(Key::Other)) => None,
            (
                InteractionState::Idle,
                InputEvent::PointerDown {
                    position,
                    button: PointerButton::Primary,
                },
            ) => {
                self.selection = SelectionRect::begin(position);
                Some(Command::Preview)
            }
            (InteractionState::Selecting, InputEvent::PointerMoved { position }) => {
                self.selection.end = position;
                Some(Command::Preview)
            }
            (
                InteractionState::Selecting,
                InputEvent::PointerUp {
                    position,
                    button: PointerButton::Primary,
                },
            ) => {
                self.selection.end = position;
                let committed = self.selection;
                self.clear();
                Some(Command::Commit(committed))
            }
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.selection = SelectionRect::default();
    }
}
