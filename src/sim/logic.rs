//! Per-tick physics, obstacle advancement, scoring, and collision checks.

use super::types::{FlappySim, Mode};
use rand::Rng;

/// Apply a flap.
///
/// From `Ready` this starts the run and applies the impulse in the same
/// step. From `Playing` it only applies the impulse; the velocity is set,
/// not added to, so hammering the key cannot exceed the configured ascent
/// rate. A no-op once the run has ended.
pub fn flap(sim: &mut FlappySim) {
    match sim.mode {
        Mode::Ready => {
            sim.mode = Mode::Playing;
            sim.bird.velocity = sim.config.flap_impulse;
        }
        Mode::Playing => {
            sim.bird.velocity = sim.config.flap_impulse;
        }
        Mode::GameOver => {}
    }
}

/// Advance the simulation by exactly one frame.
///
/// Inert unless `Playing`, so the caller may keep invoking it on every
/// rendered frame. Stage order matters: physics first, then pipe movement
/// and score crediting, then the ground check, then the pipe check — a pipe
/// passed on the bird's final tick still counts.
pub fn process_tick<R: Rng>(sim: &mut FlappySim, rng: &mut R) {
    if sim.mode != Mode::Playing {
        return;
    }
    sim.tick_count += 1;

    // Explicit Euler with a one-frame timestep
    sim.bird.velocity += sim.config.gravity;
    if sim.bird.velocity > sim.config.max_fall_speed {
        sim.bird.velocity = sim.config.max_fall_speed;
    }
    sim.bird.y += sim.bird.velocity;

    // The ceiling stops the bird but never kills it
    let half_body = sim.config.bird_diameter / 2.0;
    if sim.bird.y < half_body {
        sim.bird.y = half_body;
        sim.bird.velocity = 0.0;
    }

    // Scroll pipes and credit passes before any lethal check this tick
    let pipe_width = sim.config.pipe_width;
    let bird_x = sim.config.bird_x;
    for pipe in &mut sim.pipes {
        pipe.x -= sim.config.pipe_speed;
        if !pipe.scored && pipe.x + pipe_width < bird_x {
            pipe.scored = true;
            sim.score += 1;
        }
    }

    // Drop pipes fully past the left edge
    sim.pipes.retain(|p| p.x + pipe_width > 0.0);

    if sim.tick_count % sim.config.spawn_interval == 0 {
        sim.spawn_pipe(rng);
    }

    // Ground: the lower edge of the body reaching the ground band ends the
    // run. No bounce.
    let ground_y = sim.config.height - sim.config.ground_margin;
    if sim.bird.y + half_body >= ground_y {
        sim.bird.y = ground_y - half_body;
        sim.mode = Mode::GameOver;
        return;
    }

    if hits_pipe(sim) {
        sim.mode = Mode::GameOver;
    }
}

/// Test the bird's inset hitbox against every live pipe's hazard columns.
fn hits_pipe(sim: &FlappySim) -> bool {
    let c = &sim.config;
    let half = c.bird_diameter / 2.0 - c.hitbox_inset;
    let left = c.bird_x - half;
    let right = c.bird_x + half;
    let top = sim.bird.y - half;
    let bottom = sim.bird.y + half;

    for pipe in &sim.pipes {
        if right <= pipe.x || left >= pipe.x + c.pipe_width {
            continue;
        }
        // Horizontal overlap: lethal unless the hitbox sits entirely inside
        // the gap
        if top < pipe.gap_top || bottom > pipe.gap_top + c.pipe_gap {
            return true;
        }
    }
    false
}
