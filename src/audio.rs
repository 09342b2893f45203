//! Sound cues
//!
//! Maps gameplay events to the game's sound assets. Playback itself belongs
//! to the host; this module only decides what to play and how loud.

use crate::settings::Settings;
use crate::sim::{GameEvent, PresentationSink};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Fruit thrown
    Launch,
    /// Fruit sliced
    Whack,
    /// Fruit dropped (life lost)
    Wrong,
    /// Blade movement, variant 1..=3
    Swoosh(u8),
    /// Game over screen shown
    GameOver,
}

impl SoundEffect {
    /// Asset file name
    pub fn file_name(&self) -> String {
        match self {
            SoundEffect::Launch => "launch.caf".to_string(),
            SoundEffect::Whack => "whack.caf".to_string(),
            SoundEffect::Wrong => "wrong.caf".to_string(),
            SoundEffect::Swoosh(variant) => format!("swoosh{}.caf", (*variant).clamp(1, 3)),
            SoundEffect::GameOver => "gameover.caf".to_string(),
        }
    }

    /// Sound for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ObjectSpawned { .. } => Some(SoundEffect::Launch),
            GameEvent::ObjectHit { .. } => Some(SoundEffect::Whack),
            GameEvent::ObjectMissed { .. } => Some(SoundEffect::Wrong),
            GameEvent::Swoosh { variant } => Some(SoundEffect::Swoosh(*variant)),
            GameEvent::ShowGameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::ScoreChanged(_)
            | GameEvent::LivesChanged(_)
            | GameEvent::GameEnded { .. }
            | GameEvent::StrokeEnded => None,
        }
    }
}

/// A sound the host should start
#[derive(Debug, Clone, PartialEq)]
pub struct SoundCue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Presentation sink that turns events into sound cues
#[derive(Debug, Clone, Default)]
pub struct CueMixer {
    settings: Settings,
    queued: Vec<SoundCue>,
}

impl CueMixer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            queued: Vec::new(),
        }
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Take the cues queued since the last call
    pub fn take_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.queued)
    }
}

impl PresentationSink for CueMixer {
    fn on_event(&mut self, event: &GameEvent) {
        let volume = self.settings.effective_sfx_volume();
        if volume <= 0.0 {
            return;
        }
        if let Some(effect) = SoundEffect::for_event(event) {
            self.queued.push(SoundCue { effect, volume });
        }
    }
}
