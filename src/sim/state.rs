//! Score, lives and difficulty
//!
//! [`GameState`] is the rules core: it only moves forward while playing and
//! ignores every mutation once the run has ended, so late timers and queued
//! input can never touch a finished game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::objects::FruitKind;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver,
}

/// Per-wave difficulty multipliers, all starting at 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Scales the pause before the next wave
    pub spawn_time: f64,
    /// Scales the spacing of chain follow-ups
    pub chain_delay: f64,
    /// Scales world speed
    pub world_speed: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            spawn_time: 1.0,
            chain_delay: 1.0,
            world_speed: 1.0,
        }
    }
}

impl Difficulty {
    /// Compound one wave's worth of ramp
    pub fn escalate(&mut self, tuning: &Tuning) {
        self.spawn_time *= tuning.spawn_time_decay;
        self.chain_delay *= tuning.chain_delay_decay;
        self.world_speed *= tuning.world_speed_growth;
    }
}

/// Events for the presentation layer (visuals and audio)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObjectSpawned { id: u32, kind: FruitKind, pos: Vec2 },
    ObjectHit { id: u32, kind: FruitKind, pos: Vec2 },
    ObjectMissed { id: u32, kind: FruitKind },
    ScoreChanged(u64),
    LivesChanged(u8),
    GameEnded { score: u64 },
    /// Blade sound; `variant` is 1..=3
    Swoosh { variant: u8 },
    /// Pointer lifted; the trail can fade
    StrokeEnded,
    /// Time to switch to the game-over screen
    ShowGameOver { score: u64 },
}

/// Receiver for [`GameEvent`]s. Delivery never blocks the simulation.
pub trait PresentationSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl PresentationSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Rules state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Score (one point per sliced fruit)
    pub score: u64,
    /// Lives remaining
    pub lives: u8,
    /// Difficulty ramp
    pub difficulty: Difficulty,
    /// Current phase
    pub phase: GamePhase,
    /// Waves launched so far
    pub waves: u32,
}

impl GameState {
    /// Fresh run with the given number of lives
    pub fn new(lives: u8) -> Self {
        Self {
            score: 0,
            lives,
            difficulty: Difficulty::default(),
            phase: if lives == 0 {
                GamePhase::GameOver
            } else {
                GamePhase::Playing
            },
            waves: 0,
        }
    }

    /// Whether the run has ended
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add points. Returns false (and does nothing) once ended.
    pub fn add_score(&mut self, points: u64) -> bool {
        if self.is_ended() || points == 0 {
            return false;
        }
        self.score = self.score.saturating_add(points);
        true
    }

    /// Lose a life, ending the run at zero. Returns false once ended.
    pub fn lose_life(&mut self) -> bool {
        if self.is_ended() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Game over with score {}", self.score);
        }
        true
    }

    /// Record a launched wave and compound the ramp. No-op once ended.
    pub fn escalate(&mut self, tuning: &Tuning) -> bool {
        if self.is_ended() {
            return false;
        }
        self.waves += 1;
        self.difficulty.escalate(tuning);
        true
    }

    /// Pause before the next wave, in seconds
    pub fn spawn_interval(&self, tuning: &Tuning) -> f64 {
        tuning.base_spawn_time * self.difficulty.spawn_time
    }

    /// Current chain spacing base, in seconds
    pub fn chain_delay(&self, tuning: &Tuning) -> f64 {
        tuning.base_chain_delay * self.difficulty.chain_delay
    }

    /// Effective world speed; frozen once the run ends
    pub fn world_speed(&self, tuning: &Tuning) -> f32 {
        if self.is_ended() {
            0.0
        } else {
            tuning.base_world_speed * self.difficulty.world_speed
        }
    }
}
