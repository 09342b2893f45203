//! Physics stepper
//!
//! Ballistic motion for thrown fruit. World time is scaled by the current
//! world speed, so a faster world advances positions, velocities and spin
//! together.

use glam::Vec2;

use super::objects::FallingObject;

/// Integrate one step (semi-implicit Euler) for every live object
pub fn step(objects: &mut [FallingObject], gravity: Vec2, world_speed: f32, dt: f32) {
    let scaled_dt = dt * world_speed.max(0.0);
    if scaled_dt <= 0.0 {
        return;
    }

    for obj in objects.iter_mut().filter(|o| o.alive) {
        obj.vel += gravity * scaled_dt;
        obj.pos += obj.vel * scaled_dt;
        obj.rotation += obj.angular_vel * scaled_dt;
    }
}

/// Whether an object has dropped past the bottom threshold
#[inline]
pub fn is_below(obj: &FallingObject, threshold: f32) -> bool {
    obj.pos.y < threshold
}

/// Ids of objects that have dropped past the bottom threshold
pub fn out_of_bounds(objects: &[FallingObject], threshold: f32) -> Vec<u32> {
    objects
        .iter()
        .filter(|o| is_below(o, threshold))
        .map(|o| o.id)
        .collect()
}
