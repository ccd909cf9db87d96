use tracing::{info, trace};

use super::config::{ConfigError, GameConfig};
use super::grid::TileGrid;
use super::objects::{ObjectManager, TickResult};
use super::state::{GameState, RoundEnd};
use crate::input::Input;
use crate::render::{FrameSink, RenderFrame, SurfaceHandle};

/// Top-level state machine: Init -> Playing -> GameOver, and back to Init on
/// restart
pub struct Game {
    config: GameConfig,
    state: GameState,
    objects: ObjectManager,
    tiles: TileGrid,
    surface: Option<SurfaceHandle>,
    ticks: u64,
    round_end: Option<RoundEnd>,
}

impl Game {
    /// Create a game in the Init state
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let objects = ObjectManager::new(&config);

        Ok(Self {
            config,
            state: GameState::Init,
            objects,
            tiles: TileGrid::new(),
            surface: None,
            ticks: 0,
            round_end: None,
        })
    }

    /// Attach the surface handle forwarded to sinks on every draw
    pub fn with_surface(mut self, surface: SurfaceHandle) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Start a fresh round and move to Playing
    pub fn init(&mut self) {
        self.objects.reset(&self.config);
        self.tiles = TileGrid::new();
        self.ticks = 0;
        self.round_end = None;
        self.state = GameState::Playing;

        info!(
            head = ?self.objects.player().head(),
            length = self.objects.player().len(),
            "round started"
        );
    }

    /// Run one tick.
    ///
    /// In Init this starts the round; in GameOver nothing happens. Returns
    /// the simulation result when a tick was simulated.
    pub fn update(&mut self, input: &Input) -> Option<TickResult> {
        match self.state {
            GameState::Init => {
                self.init();
                None
            }
            GameState::Playing => Some(self.play_tick(input)),
            GameState::GameOver => None,
        }
    }

    fn play_tick(&mut self, input: &Input) -> TickResult {
        for button in input.pressed_buttons() {
            let direction = button.direction();
            if !self.objects.player_mut().set_pending_direction(direction) {
                trace!(?direction, "reversal ignored");
            }
        }

        let result = self.objects.tick();
        self.ticks += 1;

        if self.config.animate_tiles {
            self.tiles = TileGrid::at_tick(self.ticks);
        }

        if let Some(reason) = result.end {
            self.game_over(reason);
        }

        result
    }

    /// End the round: freeze the score and enter GameOver.
    ///
    /// Does nothing unless the game is Playing.
    pub fn game_over(&mut self, reason: RoundEnd) {
        if self.state != GameState::Playing {
            return;
        }

        let final_score = self.objects.score_mut().freeze();
        self.round_end = Some(reason);
        self.state = GameState::GameOver;

        info!(?reason, final_score, ticks = self.ticks, "round over");
    }

    /// Ask for a new round. The next `update` (or an explicit `init`)
    /// rebuilds the entities.
    pub fn restart(&mut self) {
        self.state = GameState::Init;
        self.tiles = TileGrid::new();
    }

    /// Hand the current frame to a sink
    pub fn draw<S: FrameSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.present(self.surface, &self.frame())
    }

    /// View of the game for the renderer. Before a round starts the board
    /// is empty.
    pub fn frame(&self) -> RenderFrame<'_> {
        let player = self.objects.player();

        if self.state == GameState::Init {
            return RenderFrame {
                state: self.state,
                body: &[],
                direction: self.config.initial_direction,
                food: None,
                tiles: &self.tiles,
                score: 0,
                final_score: None,
                round_end: None,
                ticks: 0,
            };
        }

        RenderFrame {
            state: self.state,
            body: player.body(),
            direction: player.direction(),
            food: self.objects.food(),
            tiles: &self.tiles,
            score: self.objects.score().points(),
            final_score: self.final_score(),
            round_end: self.round_end,
            ticks: self.ticks,
        }
    }

    /// Score frozen at the end of the round; `None` while a round is live
    pub fn final_score(&self) -> Option<u32> {
        match self.state {
            GameState::GameOver => self.objects.score().final_score(),
            _ => None,
        }
    }

    /// Live score of the current round
    pub fn score(&self) -> u32 {
        self.objects.score().points()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn round_end(&self) -> Option<RoundEnd> {
        self.round_end
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn objects(&self) -> &ObjectManager {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectManager {
        &mut self.objects
    }
}
