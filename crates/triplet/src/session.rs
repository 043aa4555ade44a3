//! One running game: state, router and scene owned together by the frame loop.

use crate::{
    Canvas, GameState, InputEvent, InputRouter, InputSource, MarkSprites, Scene, TickError,
    Transition,
};
use tracing::{debug, info, instrument};

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Run another frame.
    Continue,
    /// The user asked to leave.
    Quit,
}

/// The game as seen by the frame loop.
///
/// Everything mutable lives here; the loop owns exactly one.
#[derive(Debug, Clone)]
pub struct Session<S> {
    state: GameState,
    router: InputRouter,
    scene: Scene<S>,
}

impl<S> Session<S> {
    /// Creates a session on the title screen.
    pub fn new(router: InputRouter, sprites: MarkSprites<S>) -> Self {
        Self {
            state: GameState::new(),
            router,
            scene: Scene::new(sprites),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Routes and applies one event.
    ///
    /// Returns the transition, or `None` if the event routed to nothing.
    #[instrument(skip(self))]
    pub fn handle_input(&mut self, event: InputEvent) -> (Option<Transition>, Flow) {
        let Some(command) = self.router.route(event) else {
            return (None, Flow::Continue);
        };
        let transition = self.state.apply(command);
        let flow = if command == crate::Command::Quit {
            info!("Quit requested");
            Flow::Quit
        } else {
            Flow::Continue
        };
        (Some(transition), flow)
    }

    /// Draws the current state.
    pub fn render<C>(&self, canvas: &mut C) -> Result<(), C::Error>
    where
        C: Canvas<Sprite = S>,
    {
        self.scene.render(&self.state, canvas)
    }

    /// Runs one frame: drain pending input, then draw.
    ///
    /// Stops draining and skips drawing as soon as a quit arrives.
    #[instrument(skip_all)]
    pub fn tick<I, C>(
        &mut self,
        input: &mut I,
        canvas: &mut C,
    ) -> Result<Flow, TickError<I::Error, C::Error>>
    where
        I: InputSource,
        C: Canvas<Sprite = S>,
    {
        let mut handled = 0usize;
        while let Some(event) = input.next_event().map_err(TickError::Input)? {
            handled += 1;
            if let (_, Flow::Quit) = self.handle_input(event) {
                return Ok(Flow::Quit);
            }
        }
        if handled > 0 {
            debug!(handled, phase = %self.state.phase(), "Input drained");
        }

        self.render(canvas).map_err(TickError::Render)?;
        Ok(Flow::Continue)
    }
}
