//! Game loop orchestrator
//!
//! [`Game`] wires the sequencer, object manager, blade trail and rules state
//! into one sequential update stream. Hosts feed it frame deltas and stroke
//! events and drain [`GameEvent`]s for presentation.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::objects::{FallingObject, ObjectManager};
use super::rng::{self, RandomSource};
use super::schedule::{Command, Schedule, TimedCommand};
use super::sequencer::{CHAIN_FOLLOW_UPS, RandomSequencer, SequenceStep};
use super::slice::{SlicePoint, SliceTracker};
use super::state::{GameEvent, GameState, PresentationSink};
use crate::persistence::ScoreSink;
use crate::tuning::Tuning;

/// One playable session; `start()` (re)begins a run
pub struct Game<R: RandomSource = Pcg32> {
    tuning: Tuning,
    state: GameState,
    sequencer: RandomSequencer<R>,
    /// Spawn-side randomness (kinds, origins, velocities, swoosh variants)
    rng: R,
    objects: ObjectManager,
    tracker: SliceTracker,
    schedule: Schedule,
    /// Game clock in seconds since `start()`
    clock: f64,
    started: bool,
    next_wave_queued: bool,
    swoosh_playing: bool,
    last_step: Option<SequenceStep>,
    events: Vec<GameEvent>,
    score_sink: Option<Box<dyn ScoreSink>>,
}

impl Game<Pcg32> {
    /// Game with seeded PCG streams
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_sources(tuning, rng::spawn_rng(seed), rng::sequence_rng(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Game with explicit randomness for spawning and for the wave sequence
    pub fn with_sources(tuning: Tuning, spawn_rng: R, sequence_rng: R) -> Self {
        let tracker = SliceTracker::new(tuning.slice_length);
        let state = GameState::new(tuning.starting_lives);
        Self {
            tuning,
            state,
            sequencer: RandomSequencer::new(sequence_rng),
            rng: spawn_rng,
            objects: ObjectManager::new(),
            tracker,
            schedule: Schedule::new(),
            clock: 0.0,
            started: false,
            next_wave_queued: false,
            swoosh_playing: false,
            last_step: None,
            events: Vec::new(),
            score_sink: None,
        }
    }

    /// Attach a store that receives the score when a run ends
    pub fn with_score_sink(mut self, sink: Box<dyn ScoreSink>) -> Self {
        self.score_sink = Some(sink);
        self
    }

    /// Begin a fresh run (also the restart path); the first wave follows
    /// after the initial delay
    pub fn start(&mut self) {
        self.state = GameState::new(self.tuning.starting_lives);
        self.sequencer.reset();
        self.objects.clear();
        self.tracker = SliceTracker::new(self.tuning.slice_length);
        self.schedule.clear();
        self.clock = 0.0;
        self.started = true;
        self.swoosh_playing = false;
        self.last_step = None;

        self.schedule
            .after(self.clock, self.tuning.initial_wave_delay, Command::TriggerWave);
        self.next_wave_queued = true;

        self.events.push(GameEvent::ScoreChanged(self.state.score));
        self.events.push(GameEvent::LivesChanged(self.state.lives));
        log::info!(
            "Run started: {} lives, first wave in {:.1}s",
            self.state.lives,
            self.tuning.initial_wave_delay
        );
    }

    /// Advance the run by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if !self.started {
            return;
        }
        let dt = dt.max(0.0);
        self.clock += dt as f64;

        for timed in self.schedule.take_due(self.clock) {
            self.run_command(timed);
        }

        if self.state.is_ended() {
            return;
        }

        let lives_before = self.state.lives;
        let missed = self.objects.tick(dt, &self.tuning, &mut self.state);
        for obj in &missed {
            self.events.push(GameEvent::ObjectMissed {
                id: obj.id,
                kind: obj.kind,
            });
        }
        if self.state.lives != lives_before {
            self.events.push(GameEvent::LivesChanged(self.state.lives));
        }

        if self.state.is_ended() {
            self.end_game();
            return;
        }

        if self.objects.is_empty() && !self.next_wave_queued {
            let interval = self.state.spawn_interval(&self.tuning);
            self.schedule.after(self.clock, interval, Command::TriggerWave);
            self.next_wave_queued = true;
        }
    }

    /// Pointer down: start a fresh trail
    pub fn on_stroke_begin(&mut self, point: Vec2) {
        if !self.in_play() {
            return;
        }
        self.tracker.begin_stroke(SlicePoint::new(point, self.clock));
    }

    /// Pointer moved: extend the trail and slice whatever the move crossed
    pub fn on_stroke_move(&mut self, point: Vec2) {
        if !self.in_play() {
            return;
        }
        self.tracker.extend_stroke(SlicePoint::new(point, self.clock));

        if !self.swoosh_playing {
            self.swoosh_playing = true;
            let variant = self.rng.int_in(1, 3) as u8;
            self.events.push(GameEvent::Swoosh { variant });
            self.schedule
                .after(self.clock, self.tuning.swoosh_duration, Command::SwooshFinished);
        }

        let segment: Vec<Vec2> = self.tracker.latest_segment().iter().map(|p| p.pos).collect();
        let hits = self.objects.test_slice(&segment, &mut self.state);
        if hits.is_empty() {
            return;
        }
        for obj in &hits {
            self.events.push(GameEvent::ObjectHit {
                id: obj.id,
                kind: obj.kind,
                pos: obj.pos,
            });
        }
        self.events.push(GameEvent::ScoreChanged(self.state.score));
    }

    /// Pointer up: the trail stays for the fade-out
    pub fn on_stroke_end(&mut self) {
        if !self.in_play() {
            return;
        }
        self.tracker.end_stroke();
        self.events.push(GameEvent::StrokeEnded);
    }

    /// Launch the next wave from the sequence
    pub fn trigger_wave(&mut self) {
        if !self.in_play() {
            return;
        }

        let step = self.sequencer.next();
        for _ in 0..step.immediate_count() {
            self.spawn_one();
        }

        if let Some(divisor) = step.chain_divisor() {
            let spacing = self.state.chain_delay(&self.tuning) / divisor;
            for k in 1..=CHAIN_FOLLOW_UPS {
                self.schedule
                    .after(self.clock, spacing * k as f64, Command::SpawnSingle);
            }
        }

        self.state.escalate(&self.tuning);
        self.last_step = Some(step);
        self.next_wave_queued = false;
        log::debug!(
            "Wave {}: {:?} at t={:.2}s (world speed {:.3})",
            self.state.waves,
            step,
            self.clock,
            self.state.world_speed(&self.tuning)
        );
    }

    /// Drain pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deliver pending events to a presentation sink
    pub fn dispatch_events(&mut self, sink: &mut impl PresentationSink) {
        for event in self.drain_events() {
            sink.on_event(&event);
        }
    }

    /// Score stored by the attached sink (0 if none or unreadable)
    pub fn saved_score(&self) -> u64 {
        let Some(sink) = &self.score_sink else {
            return 0;
        };
        match sink.load_score() {
            Ok(score) => score.unwrap_or(0),
            Err(e) => {
                log::warn!("Failed to load saved score: {e}");
                0
            }
        }
    }

    fn run_command(&mut self, timed: TimedCommand) {
        if self.state.is_ended() && !timed.command.survives_game_over() {
            return;
        }
        match timed.command {
            Command::TriggerWave => self.trigger_wave(),
            Command::SpawnSingle => self.spawn_one(),
            Command::SwooshFinished => self.swoosh_playing = false,
            Command::ShowGameOver => self.events.push(GameEvent::ShowGameOver {
                score: self.state.score,
            }),
        }
    }

    /// Started and not yet over
    fn in_play(&self) -> bool {
        self.started && !self.state.is_ended()
    }

    fn spawn_one(&mut self) {
        if !self.in_play() {
            return;
        }
        let obj = self.objects.spawn_random(&mut self.rng, &self.tuning);
        self.events.push(GameEvent::ObjectSpawned {
            id: obj.id,
            kind: obj.kind,
            pos: obj.pos,
        });
    }

    fn end_game(&mut self) {
        let score = self.state.score;
        self.schedule.cancel_gameplay();
        self.tracker.end_stroke();
        self.swoosh_playing = false;
        self.events.push(GameEvent::GameEnded { score });

        if let Some(sink) = self.score_sink.as_mut() {
            if let Err(e) = sink.save_score(score) {
                log::warn!("Failed to save score {score}: {e}");
            }
        }

        self.schedule.after(
            self.clock,
            self.tuning.game_over_screen_delay,
            Command::ShowGameOver,
        );
        log::info!("Run ended after {} waves, score {}", self.state.waves, score);
    }

    // === Accessors ===

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    /// Whether `start()` has been called
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn live_objects(&self) -> &[FallingObject] {
        self.objects.live()
    }

    /// Trail polyline for drawing (empty below three samples)
    pub fn current_path(&self) -> Vec<Vec2> {
        self.tracker.current_path()
    }

    pub fn tracker(&self) -> &SliceTracker {
        &self.tracker
    }

    pub fn pending(&self) -> &[TimedCommand] {
        self.schedule.pending()
    }

    pub fn next_wave_queued(&self) -> bool {
        self.next_wave_queued
    }

    /// Most recently launched sequence step
    pub fn last_step(&self) -> Option<SequenceStep> {
        self.last_step
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
