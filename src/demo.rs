//! Autopilot player
//!
//! Swipes through fruit once they rise into the upper part of the scene.
//! Every `skip_every`-th target is deliberately ignored so demo runs end.

use glam::Vec2;

use crate::sim::{Game, RandomSource};

/// Half-length of the horizontal swipe
const SWIPE_REACH: f32 = 120.0;

/// Simple scripted player
#[derive(Debug, Clone)]
pub struct DemoPlayer {
    /// Fruit above this height get sliced
    pub slice_height: f32,
    /// Ignore every n-th target (0 = never ignore)
    pub skip_every: u32,
    targets_seen: u32,
    ignored: Vec<u32>,
    strokes: u32,
}

impl Default for DemoPlayer {
    fn default() -> Self {
        Self::new(300.0, 0)
    }
}

impl DemoPlayer {
    pub fn new(slice_height: f32, skip_every: u32) -> Self {
        Self {
            slice_height,
            skip_every,
            targets_seen: 0,
            ignored: Vec::new(),
            strokes: 0,
        }
    }

    /// Look at the scene and swipe at most one fruit
    pub fn act<R: RandomSource>(&mut self, game: &mut Game<R>) {
        if game.is_ended() {
            return;
        }
        self.ignored
            .retain(|id| game.live_objects().iter().any(|o| o.id == *id));

        let target = game
            .live_objects()
            .iter()
            .find(|o| o.pos.y >= self.slice_height && !self.ignored.contains(&o.id))
            .map(|o| (o.id, o.pos));
        let Some((id, pos)) = target else {
            return;
        };

        self.targets_seen += 1;
        if self.skip_every > 0 && self.targets_seen % self.skip_every == 0 {
            self.ignored.push(id);
            return;
        }

        game.on_stroke_begin(pos - Vec2::new(SWIPE_REACH, 0.0));
        game.on_stroke_move(pos);
        game.on_stroke_move(pos + Vec2::new(SWIPE_REACH, 0.0));
        game.on_stroke_end();
        self.strokes += 1;
    }

    /// Swipes made so far
    pub fn strokes(&self) -> u32 {
        self.strokes
    }
}
