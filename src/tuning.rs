//! Data-driven game balance
//!
//! All gameplay numbers live in [`Tuning`]. Defaults reproduce the reference
//! feel on a 1024x768 scene; a JSON document can override any subset.

use serde::{Deserialize, Serialize};

/// Inclusive integer range used for random draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Horizontal launch bands
///
/// Origins left of `edges[0]` get `outer` speed to the right, left of
/// `edges[1]` get `inner` speed to the right, left of `edges[2]` get `inner`
/// speed to the left, everything else gets `outer` speed to the left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBands {
    pub edges: [f32; 3],
    pub outer: IntRange,
    pub inner: IntRange,
}

impl Default for ZoneBands {
    fn default() -> Self {
        Self {
            edges: [256.0, 512.0, 756.0],
            outer: IntRange::new(8, 15),
            inner: IntRange::new(3, 5),
        }
    }
}

/// Complete gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scene ===
    pub scene_width: f32,
    pub scene_height: f32,

    // === World ===
    /// Gravity in scene units per second squared
    pub gravity: [f32; 2],
    /// World speed before any difficulty ramp
    pub base_world_speed: f32,
    /// Objects below this y are missed
    pub miss_threshold: f32,

    // === Spawning ===
    pub spawn_x: IntRange,
    pub spawn_y: f32,
    pub zones: ZoneBands,
    pub launch_vertical: IntRange,
    /// Multiplier applied to zone and vertical draws
    pub velocity_scalar: f32,
    /// Angular velocity draw, halved on use
    pub angular_half_steps: IntRange,
    /// Radius of each object's hit circle
    pub hit_radius: f32,

    // === Slicing ===
    pub slice_length: usize,

    // === Rules ===
    pub starting_lives: u8,

    // === Timing (seconds) ===
    pub initial_wave_delay: f64,
    pub base_spawn_time: f64,
    pub base_chain_delay: f64,
    pub game_over_screen_delay: f64,
    pub swoosh_duration: f64,

    // === Difficulty ramp (per wave) ===
    pub spawn_time_decay: f64,
    pub chain_delay_decay: f64,
    pub world_speed_growth: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scene_width: 1024.0,
            scene_height: 768.0,

            gravity: [0.0, -900.0],
            base_world_speed: 0.85,
            miss_threshold: -140.0,

            spawn_x: IntRange::new(64, 960),
            spawn_y: -128.0,
            zones: ZoneBands::default(),
            launch_vertical: IntRange::new(24, 32),
            velocity_scalar: 40.0,
            angular_half_steps: IntRange::new(-6, 6),
            hit_radius: 64.0,

            slice_length: 8,

            starting_lives: 3,

            initial_wave_delay: 2.0,
            base_spawn_time: 0.9,
            base_chain_delay: 3.0,
            game_over_screen_delay: 0.5,
            swoosh_duration: 0.35,

            spawn_time_decay: 0.991,
            chain_delay_decay: 0.99,
            world_speed_growth: 1.02,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the full tuning table
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Gravity as a vector
    pub fn gravity_vec(&self) -> glam::Vec2 {
        glam::Vec2::from_array(self.gravity)
    }
}
