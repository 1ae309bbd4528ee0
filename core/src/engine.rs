//! The kitchen engine — single owner of the session.
//!
//! TICK ORDER (fixed, documented, never reordered):
//!   1. Clock advance (real countdown −1, simulated clock +F)
//!   2. Cook-state recomputation for everything in the pan
//!   3. Timeout check → finish unserved
//!
//! RULES:
//!   - All SessionState mutation goes through &mut self. A concurrent
//!     host must wrap the engine in a Mutex (or feed it from a single
//!     queue) so ticks and player intents never interleave.
//!   - Leaving Playing stops the tick source and scores exactly once.
//!   - Every public mutator returns the events it produced.

use crate::{
    actions,
    catalog::IngredientCatalog,
    clock::ClockStatus,
    command::PlayerCommand,
    config::KitchenConfig,
    error::KitchenResult,
    event::KitchenEvent,
    narrator::narrate,
    scoring::Scorecard,
    session::{GamePhase, SessionState},
    snapshot::{SessionOutcome, SessionSnapshot},
    ticker::{ManualTicker, TickSource},
};

pub struct KitchenEngine {
    config:    KitchenConfig,
    catalog:   IngredientCatalog,
    state:     SessionState,
    outcome:   Option<SessionOutcome>,
    scorecard: Option<Scorecard>,
    ticker:    Box<dyn TickSource>,
}

impl KitchenEngine {
    /// Validate config and catalog up front; a bad table never reaches
    /// a running session.
    pub fn new(config: KitchenConfig, ticker: Box<dyn TickSource>) -> KitchenResult<Self> {
        config.validate()?;
        let catalog = IngredientCatalog::paella()?;
        let state = SessionState::new(&config, &catalog);
        Ok(Self {
            config,
            catalog,
            state,
            outcome: None,
            scorecard: None,
            ticker,
        })
    }

    /// Default timings with a hand-driven ticker. Used by tests and the
    /// headless runner.
    pub fn build_test() -> KitchenResult<Self> {
        Self::new(KitchenConfig::default(), Box::new(ManualTicker::new()))
    }

    // ── Read side ──────────────────────────────────────────────

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Score, title and message once the session is Finished.
    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    pub fn scorecard(&self) -> Option<&Scorecard> {
        self.scorecard.as_ref()
    }

    pub fn ticker(&self) -> &dyn TickSource {
        self.ticker.as_ref()
    }

    /// Downcast the tick source. Tests and tooling only.
    pub fn ticker_as<T: 'static>(&self) -> Option<&T> {
        self.ticker.as_any().downcast_ref::<T>()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.state, &self.catalog, self.outcome.as_ref())
    }

    // ── Session lifecycle ──────────────────────────────────────

    /// Begin a fresh session. Ignored while one is already Playing.
    pub fn start(&mut self) -> Vec<KitchenEvent> {
        if self.state.is_playing() {
            return vec![];
        }
        self.state.reset(&self.catalog);
        self.state.phase = GamePhase::Playing;
        self.outcome = None;
        self.scorecard = None;
        self.ticker.start();

        log::info!(
            "session started: {}s real, x{:.1} compression, ticker={}",
            self.state.clock.real_duration(),
            self.state.clock.compression_factor(),
            self.ticker.name()
        );
        vec![KitchenEvent::SessionStarted {
            real_seconds:       self.state.clock.real_duration(),
            compression_factor: self.state.clock.compression_factor(),
        }]
    }

    /// Play again: back to PreStart with a clean pan.
    pub fn reset(&mut self) -> Vec<KitchenEvent> {
        self.ticker.stop();
        self.state.reset(&self.catalog);
        self.outcome = None;
        self.scorecard = None;
        log::debug!("session reset");
        vec![KitchenEvent::SessionReset]
    }

    /// Advance one real second. Does nothing unless Playing.
    pub fn tick(&mut self) -> Vec<KitchenEvent> {
        if !self.state.is_playing() {
            return vec![];
        }

        let status = self.state.clock.tick();
        let now = self.state.now();
        let mut events = vec![KitchenEvent::ClockAdvanced {
            real_seconds_remaining: self.state.clock.real_seconds_remaining,
            sim_seconds_elapsed:    now,
        }];

        for change in self.state.recompute_cook_states(&self.catalog) {
            log::debug!(
                "sim={now:.0} {}: {} -> {}",
                change.id,
                change.from.label(),
                change.to.label()
            );
            events.push(KitchenEvent::CookStateChanged {
                id:       change.id.to_string(),
                from:     change.from,
                to:       change.to,
                sim_time: now,
            });
        }

        log::debug!(
            "tick real_left={} sim={now:.0} fire={} covered={}",
            self.state.clock.real_seconds_remaining,
            self.state.fire_level,
            self.state.covered
        );

        if status == ClockStatus::Expired {
            events.push(KitchenEvent::TimeExpired { sim_time: now });
            events.extend(self.finish(false));
        }
        events
    }

    /// Tick up to `n` times, stopping early if the session ends.
    pub fn run_ticks(&mut self, n: u32) -> Vec<KitchenEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            if !self.state.is_playing() {
                break;
            }
            events.extend(self.tick());
        }
        events
    }

    // ── Player intents ─────────────────────────────────────────

    pub fn add_ingredient(&mut self, id: &str) -> Vec<KitchenEvent> {
        actions::add_ingredient(&mut self.state, &self.catalog, id)
            .into_iter()
            .collect()
    }

    pub fn set_fire_level(&mut self, level: i32) -> Vec<KitchenEvent> {
        actions::set_fire_level(&mut self.state, level).into_iter().collect()
    }

    pub fn stir(&mut self) -> Vec<KitchenEvent> {
        actions::stir(&mut self.state).into_iter().collect()
    }

    pub fn toggle_cover(&mut self) -> Vec<KitchenEvent> {
        actions::toggle_cover(&mut self.state).into_iter().collect()
    }

    pub fn serve(&mut self) -> Vec<KitchenEvent> {
        self.finish(true)
    }

    /// Dispatch a command from the presentation layer.
    pub fn apply(&mut self, command: &PlayerCommand) -> Vec<KitchenEvent> {
        match command {
            PlayerCommand::Start                => self.start(),
            PlayerCommand::Reset                => self.reset(),
            PlayerCommand::AddIngredient { id } => self.add_ingredient(id),
            PlayerCommand::SetFireLevel { level } => self.set_fire_level(*level),
            PlayerCommand::Stir                 => self.stir(),
            PlayerCommand::ToggleCover          => self.toggle_cover(),
            PlayerCommand::Serve                => self.serve(),
        }
    }

    fn finish(&mut self, served_by_user: bool) -> Vec<KitchenEvent> {
        let Some(card) = actions::finish(&mut self.state, &self.catalog, served_by_user) else {
            return vec![];
        };
        self.ticker.stop();

        let verdict = narrate(card.score, &card.feedback);
        log::info!(
            "session finished: served={served_by_user} score={} \"{}\"",
            card.score,
            verdict.title
        );

        let event = KitchenEvent::SessionFinished { served_by_user, score: card.score };
        self.outcome = Some(SessionOutcome::new(card.score, verdict));
        self.scorecard = Some(card);
        vec![event]
    }
}
