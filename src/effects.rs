//! Visual effect timings for presentation hosts
//!
//! The simulation removes a sliced fruit immediately; what the player sees is
//! a short scale-down and fade-out drawn by the host from these curves.
//! [`EffectTracker`] follows the event stream and keeps the running effects,
//! honouring the player's visual settings.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{FruitKind, GameEvent, PresentationSink};

/// Sliced-fruit animation: shrink and fade out together
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathAnimation {
    /// Scale reached at the end
    pub final_scale: f32,
    /// Seconds
    pub duration: f32,
}

impl Default for DeathAnimation {
    fn default() -> Self {
        Self {
            final_scale: 0.001,
            duration: 0.2,
        }
    }
}

impl DeathAnimation {
    /// (scale, alpha) at `elapsed` seconds
    pub fn sample(&self, elapsed: f32) -> (f32, f32) {
        let t = progress(elapsed, self.duration);
        let scale = 1.0 + (self.final_scale - 1.0) * t;
        (scale, 1.0 - t)
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.duration
    }
}

/// Blade trail fade after the pointer lifts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailFade {
    pub duration: f32,
}

impl Default for TrailFade {
    fn default() -> Self {
        Self { duration: 0.25 }
    }
}

impl TrailFade {
    /// Trail alpha at `elapsed` seconds since the stroke ended
    pub fn alpha(&self, elapsed: f32) -> f32 {
        1.0 - progress(elapsed, self.duration)
    }
}

/// A sliced fruit still being drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadingFruit {
    pub id: u32,
    pub kind: FruitKind,
    pub pos: Vec2,
    pub elapsed: f32,
}

/// Presentation sink that tracks running visual effects
#[derive(Debug, Clone, Default)]
pub struct EffectTracker {
    settings: Settings,
    death: DeathAnimation,
    trail: TrailFade,
    fading: Vec<FadingFruit>,
    /// Seconds since the last stroke ended; `None` while a stroke is live
    trail_elapsed: Option<f32>,
    bursts: u32,
}

impl EffectTracker {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Age every running effect and drop the finished ones
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        for fruit in &mut self.fading {
            fruit.elapsed += dt;
        }
        let death = self.death;
        self.fading.retain(|f| !death.is_finished(f.elapsed));
        if let Some(elapsed) = &mut self.trail_elapsed {
            *elapsed += dt;
        }
    }

    /// Sliced fruit still on screen, with their (scale, alpha)
    pub fn fading(&self) -> impl Iterator<Item = (&FadingFruit, (f32, f32))> {
        self.fading.iter().map(|f| (f, self.death.sample(f.elapsed)))
    }

    /// Alpha to draw the blade trail with
    pub fn trail_alpha(&self) -> f32 {
        if !self.settings.show_trail {
            return 0.0;
        }
        match self.trail_elapsed {
            Some(elapsed) => self.trail.alpha(elapsed),
            None => 1.0,
        }
    }

    /// Juice bursts started so far
    pub fn bursts(&self) -> u32 {
        self.bursts
    }
}

impl PresentationSink for EffectTracker {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ObjectHit { id, kind, pos } => {
                if self.settings.effective_particles() {
                    self.bursts += 1;
                }
                if !self.settings.reduced_motion {
                    self.fading.push(FadingFruit {
                        id: *id,
                        kind: *kind,
                        pos: *pos,
                        elapsed: 0.0,
                    });
                }
            }
            GameEvent::Swoosh { .. } => self.trail_elapsed = None,
            GameEvent::StrokeEnded => {
                // Reduced motion drops the trail at once
                let start = if self.settings.reduced_motion {
                    self.trail.duration
                } else {
                    0.0
                };
                self.trail_elapsed = Some(start);
            }
            _ => {}
        }
    }
}

fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}
