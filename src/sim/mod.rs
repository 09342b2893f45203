//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded or injected randomness only
//! - Stable iteration order (by object ID)
//! - Delayed work as queued data, run on the same update stream
//! - No rendering, audio or storage dependencies beyond narrow traits

pub mod collision;
pub mod game;
pub mod objects;
pub mod physics;
pub mod rng;
pub mod schedule;
pub mod sequencer;
pub mod slice;
pub mod state;
pub mod tick;

pub use collision::{closest_point_on_segment, path_hits_circle, segment_hits_circle};
pub use game::Game;
pub use objects::{FallingObject, FruitKind, ObjectManager};
pub use rng::RandomSource;
pub use schedule::{Command, Schedule, TimedCommand};
pub use sequencer::{RandomSequencer, SequenceStep};
pub use slice::{SlicePoint, SliceTracker};
pub use state::{Difficulty, GameEvent, GamePhase, GameState, PresentationSink};
pub use tick::FrameClock;
