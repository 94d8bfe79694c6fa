use crate::controllers::interactive::app_state::{AppState, StepOutcome};
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::history::budget_policy::IterationBudgetPolicy;
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::core::actions::render_frame::render_frame::RenderError;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("display surface failed: {0}")]
    Surface(#[source] Box<dyn Error + Send + Sync>),
}

/// How a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub events: usize,
    pub presents: usize,
}

fn present<P, S>(state: &AppState<P>, surface: &mut S) -> Result<(), SessionError>
where
    P: IterationBudgetPolicy,
    S: DisplaySurface,
{
    let Some(frame) = state.frame() else {
        return Ok(());
    };

    surface
        .present(frame, state.overlay())
        .map_err(|err| SessionError::Surface(Box::new(err)))
}

/// Drives `state` from `events` until the stream ends or asks to exit.
///
/// The first frame is rendered and presented before any event is read.
/// This serves pull-based surfaces and scripted event streams; the winit
/// window is callback driven and steps [`AppState`] from its own event loop,
/// presenting on redraw.
pub fn run_session<P, S, I>(
    state: &mut AppState<P>,
    surface: &mut S,
    events: I,
) -> Result<SessionSummary, SessionError>
where
    P: IterationBudgetPolicy,
    S: DisplaySurface,
    I: IntoIterator<Item = InputEvent>,
{
    let mut summary = SessionSummary {
        events: 0,
        presents: 0,
    };

    state.render()?;
    present(state, surface)?;
    summary.presents += 1;

    for event in events {
        summary.events += 1;

        match state.step(event)? {
            StepOutcome::Unchanged => {}
            StepOutcome::Present => {
                present(state, surface)?;
                summary.presents += 1;
            }
            StepOutcome::Exit => break,
        }
    }

    tracing::debug!(
        events = summary.events,
        presents = summary.presents,
        "session finished"
    );

    Ok(summary)
}
