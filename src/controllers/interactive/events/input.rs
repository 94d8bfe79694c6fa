use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    /// Return to the previous view.
    HistoryBack,
    Other,
}

/// Input delivered by the display surface's event source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Closed,
    KeyPressed(Key),
    PointerDown { position: Point, button: PointerButton },
    PointerMoved { position: Point },
    PointerUp { position: Point, button: PointerButton },
}
