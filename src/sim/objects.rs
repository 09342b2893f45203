//! Falling object lifecycle
//!
//! [`ObjectManager`] owns every live fruit. A fruit leaves the live set in
//! exactly one of two ways: it is sliced, or it drops past the bottom of the
//! scene. Both paths remove it on the spot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::path_hits_circle;
use super::physics;
use super::rng::RandomSource;
use super::state::GameState;
use crate::tuning::Tuning;

/// Fruit palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitKind {
    Strawberry,
    Banana,
    Mango,
    Apple,
    Pineapple,
    Watermelon,
}

impl FruitKind {
    pub const ALL: [FruitKind; 6] = [
        FruitKind::Strawberry,
        FruitKind::Banana,
        FruitKind::Mango,
        FruitKind::Apple,
        FruitKind::Pineapple,
        FruitKind::Watermelon,
    ];

    /// Asset name
    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Strawberry => "strawberry",
            FruitKind::Banana => "banana",
            FruitKind::Mango => "mango",
            FruitKind::Apple => "apple",
            FruitKind::Pineapple => "pineapple",
            FruitKind::Watermelon => "watermelon",
        }
    }

    /// Whether letting this fall costs a life
    pub fn costs_life(&self) -> bool {
        true
    }

    /// Uniform pick from the palette
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let last = Self::ALL.len() as i32 - 1;
        Self::ALL[rng.int_in(0, last) as usize]
    }
}

/// A thrown fruit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub kind: FruitKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current spin angle (radians)
    pub rotation: f32,
    /// Spin rate (radians per second of world time)
    pub angular_vel: f32,
    /// Hit circle radius
    pub radius: f32,
    pub alive: bool,
}

impl FallingObject {
    pub fn new(id: u32, kind: FruitKind, pos: Vec2, vel: Vec2, angular_vel: f32, radius: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            vel,
            rotation: 0.0,
            angular_vel,
            radius,
            alive: true,
        }
    }
}

/// Random launch origin along the spawn row
pub fn random_origin(rng: &mut impl RandomSource, tuning: &Tuning) -> Vec2 {
    let x = rng.int_in(tuning.spawn_x.min, tuning.spawn_x.max);
    Vec2::new(x as f32, tuning.spawn_y)
}

/// Launch velocity for an origin: edge bands throw hard toward the center,
/// middle bands drift gently.
pub fn launch_velocity(origin: Vec2, rng: &mut impl RandomSource, tuning: &Tuning) -> Vec2 {
    let zones = &tuning.zones;
    let horizontal = if origin.x < zones.edges[0] {
        rng.int_in(zones.outer.min, zones.outer.max)
    } else if origin.x < zones.edges[1] {
        rng.int_in(zones.inner.min, zones.inner.max)
    } else if origin.x < zones.edges[2] {
        -rng.int_in(zones.inner.min, zones.inner.max)
    } else {
        -rng.int_in(zones.outer.min, zones.outer.max)
    };
    let vertical = rng.int_in(tuning.launch_vertical.min, tuning.launch_vertical.max);

    Vec2::new(horizontal as f32, vertical as f32) * tuning.velocity_scalar
}

/// Random spin in half-radian steps
pub fn launch_spin(rng: &mut impl RandomSource, tuning: &Tuning) -> f32 {
    let range = tuning.angular_half_steps;
    rng.int_in(range.min, range.max) as f32 / 2.0
}

/// Owner of the live fruit set
#[derive(Debug, Clone, Default)]
pub struct ObjectManager {
    /// Live objects, in spawn (id) order
    objects: Vec<FallingObject>,
    next_id: u32,
}

impl ObjectManager {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new object ID
    fn next_object_id(&mut self) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Throw a fruit of `kind` from `origin` and register it as live
    pub fn spawn(
        &mut self,
        kind: FruitKind,
        origin: Vec2,
        rng: &mut impl RandomSource,
        tuning: &Tuning,
    ) -> FallingObject {
        let angular_vel = launch_spin(rng, tuning);
        let vel = launch_velocity(origin, rng, tuning);
        let id = self.next_object_id();
        let obj = FallingObject::new(id, kind, origin, vel, angular_vel, tuning.hit_radius);
        self.objects.push(obj);
        obj
    }

    /// Throw a random fruit from a random origin
    pub fn spawn_random(&mut self, rng: &mut impl RandomSource, tuning: &Tuning) -> FallingObject {
        let kind = FruitKind::random(rng);
        let origin = random_origin(rng, tuning);
        self.spawn(kind, origin, rng, tuning)
    }

    /// Advance physics, then drop everything below the bottom threshold.
    ///
    /// Each dropped life-costing fruit costs one life. Returns the dropped
    /// objects (already marked dead) in id order. Once the last life is gone
    /// the remaining fruit stay where they are and are not reported.
    pub fn tick(&mut self, dt: f32, tuning: &Tuning, state: &mut GameState) -> Vec<FallingObject> {
        let speed = state.world_speed(tuning);
        physics::step(&mut self.objects, tuning.gravity_vec(), speed, dt);

        let mut missed = Vec::new();
        for id in physics::out_of_bounds(&self.objects, tuning.miss_threshold) {
            if state.is_ended() {
                break;
            }
            let Some(obj) = self.remove(id) else {
                continue;
            };
            if obj.kind.costs_life() {
                state.lose_life();
            }
            missed.push(obj);
        }
        missed
    }

    /// Slice every live fruit the path touches. One point per fruit; a hit
    /// fruit is gone immediately so it cannot score twice.
    pub fn test_slice(&mut self, path: &[Vec2], state: &mut GameState) -> Vec<FallingObject> {
        if path.is_empty() {
            return Vec::new();
        }

        let hit_ids: Vec<u32> = self
            .objects
            .iter()
            .filter(|o| o.alive && path_hits_circle(path, o.pos, o.radius))
            .map(|o| o.id)
            .collect();

        let mut hits = Vec::with_capacity(hit_ids.len());
        for id in hit_ids {
            if let Some(obj) = self.remove(id) {
                state.add_score(1);
                hits.push(obj);
            }
        }
        hits
    }

    /// Take an object out of the live set, marking it dead
    pub fn remove(&mut self, id: u32) -> Option<FallingObject> {
        let index = self.objects.iter().position(|o| o.id == id);
        debug_assert!(index.is_some(), "object {id} removed twice");
        let mut obj = self.objects.remove(index?);
        obj.alive = false;
        Some(obj)
    }

    /// Forget every live object (run reset)
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn get(&self, id: u32) -> Option<&FallingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn live(&self) -> &[FallingObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
