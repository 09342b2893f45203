//! Fixed timestep driver
//!
//! Hosts hand over variable frame deltas; the simulation only ever sees
//! `SIM_DT` steps.

use super::game::Game;
use super::rng::RandomSource;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time into fixed simulation steps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one host frame. Returns the number of substeps run.
    pub fn advance<R: RandomSource>(&mut self, game: &mut Game<R>, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            game.update(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Leftover time not yet simulated
    pub fn pending_time(&self) -> f32 {
        self.accumulator
    }
}
