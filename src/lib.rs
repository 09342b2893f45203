//! Fruit Slice - a single-screen slicing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic gameplay (waves, physics, slicing, rules)
//! - `persistence`: Score and preference storage
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `audio`: Sound cues for presentation hosts
//! - `effects`: Slice and trail animation curves
//! - `demo`: Autopilot player for the headless binary

pub mod audio;
pub mod demo;
pub mod effects;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame accepted before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
