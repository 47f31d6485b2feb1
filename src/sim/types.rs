//! Simulation state: the bird, the pipe field, and the control surface.
//!
//! All playfield coordinates are logical pixels. The renderer owns the
//! pixel-to-cell mapping, so the physics tuning is independent of the
//! terminal size.

use rand::Rng;

/// Degrees of visual tilt per unit of vertical velocity.
const ROTATION_SCALE: f64 = 3.0;
/// Steepest upward tilt in degrees.
const ROTATION_MIN: f64 = -30.0;
/// Steepest nose-dive tilt in degrees.
const ROTATION_MAX: f64 = 90.0;

/// Coarse game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bird centered, physics paused, waiting for the first flap.
    Ready,
    /// Live run.
    Playing,
    /// Run ended. State is frozen until `reset`.
    GameOver,
}

/// Simulation tuning. Every gameplay constant lives here so tests can
/// construct scenarios with exact numbers.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Playfield width in pixels.
    pub width: f64,
    /// Playfield height in pixels.
    pub height: f64,
    /// Bird's fixed horizontal position.
    pub bird_x: f64,
    /// Vertical/horizontal extent of the bird's body.
    pub bird_diameter: f64,
    /// Margin subtracted from the body on each side for the lethal hitbox.
    /// The visible sprite is larger than what actually kills you.
    pub hitbox_inset: f64,
    /// Velocity gained per tick while falling.
    pub gravity: f64,
    /// Velocity a flap sets (negative = upward). Not additive.
    pub flap_impulse: f64,
    /// Cap on downward velocity after extended free-fall.
    pub max_fall_speed: f64,
    /// Horizontal extent of a pipe pair.
    pub pipe_width: f64,
    /// Vertical opening between the top and bottom columns.
    pub pipe_gap: f64,
    /// Minimum distance of the gap from the ceiling, and (together with
    /// `ground_margin`) from the bottom of the playfield.
    pub min_gap_top: f64,
    /// Height of the ground band at the bottom of the playfield.
    pub ground_margin: f64,
    /// Pixels each pipe moves left per tick.
    pub pipe_speed: f64,
    /// Ticks between pipe spawns.
    pub spawn_interval: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            bird_x: 100.0,
            bird_diameter: 24.0,
            hitbox_inset: 4.0,
            gravity: 0.5,
            flap_impulse: -8.0,
            max_fall_speed: 12.0,
            pipe_width: 60.0,
            pipe_gap: 120.0,
            min_gap_top: 40.0,
            ground_margin: 20.0,
            pipe_speed: 3.0,
            spawn_interval: 100,
        }
    }
}

impl SimConfig {
    /// Legal range for a pipe's gap top: the gap must clear the ceiling
    /// margin and leave room for the gap itself plus the bottom margin and
    /// the ground band.
    pub fn gap_top_range(&self) -> (f64, f64) {
        let min = self.min_gap_top;
        let max = (self.height - self.pipe_gap - self.min_gap_top - self.ground_margin).max(min);
        (min, max)
    }
}

/// The player's bird.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Vertical center position in pixels.
    pub y: f64,
    /// Vertical velocity in pixels per tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    /// Visual tilt derived from velocity. Cosmetic only, never used for
    /// collision.
    pub fn rotation(&self) -> f64 {
        (self.velocity * ROTATION_SCALE).clamp(ROTATION_MIN, ROTATION_MAX)
    }
}

/// A single pipe pair: a top and bottom column separated by a gap.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge in pixels. Decreases every tick.
    pub x: f64,
    /// Top of the gap. Fixed at creation.
    pub gap_top: f64,
    /// Set once when the trailing edge passes the bird (prevents double
    /// counting).
    pub scored: bool,
}

/// Bird pose as seen by the renderer.
#[derive(Debug, Clone)]
pub struct BirdPose {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub rotation: f64,
}

/// Owned, immutable view of the simulation for rendering. Nothing in here
/// aliases the live state.
#[derive(Debug, Clone)]
pub struct SimSnapshot {
    pub mode: Mode,
    pub score: u32,
    pub high_score: u32,
    /// Tick counter, exposed for cosmetic animation phase.
    pub tick_count: u64,
    pub bird: BirdPose,
    pub pipes: Vec<Pipe>,
    pub config: SimConfig,
}

/// The authoritative simulation state. Owned by the game screen; the
/// renderer only ever sees a `SimSnapshot`.
#[derive(Debug, Clone)]
pub struct FlappySim {
    pub config: SimConfig,
    pub mode: Mode,
    /// Pipes passed this run.
    pub score: u32,
    /// Ticks elapsed this run. Drives spawn cadence and animation phase.
    pub tick_count: u64,
    pub bird: Bird,
    /// Live pipes, ordered left to right (creation order).
    pub pipes: Vec<Pipe>,
    /// Best persisted score, shown in the HUD. Refreshed by the game screen
    /// after each commit to the leaderboard.
    pub high_score: u32,
}

impl FlappySim {
    /// Create a fresh simulation in `Ready` mode with the bird centered.
    pub fn new(config: SimConfig, high_score: u32) -> Self {
        let bird = Bird {
            y: config.height / 2.0,
            velocity: 0.0,
        };
        Self {
            config,
            mode: Mode::Ready,
            score: 0,
            tick_count: 0,
            bird,
            pipes: Vec::new(),
            high_score,
        }
    }

    /// Spawn a pipe at the right edge with a uniformly random gap position.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let (min, max) = self.config.gap_top_range();
        let gap_top = if max > min {
            rng.gen_range(min as i64..=max as i64) as f64
        } else {
            min
        };
        self.pipes.push(Pipe {
            x: self.config.width,
            gap_top,
            scored: false,
        });
    }

    /// End the current run and return to `Ready`.
    ///
    /// Reports the just-ended score when it is positive so the caller can
    /// commit it to the leaderboard; the simulation itself does no I/O.
    pub fn reset(&mut self) -> Option<u32> {
        let finished = if self.mode == Mode::GameOver && self.score > 0 {
            Some(self.score)
        } else {
            None
        };
        self.reinit();
        finished
    }

    /// Discard the current run without reporting a score (used when the
    /// player leaves the game view mid-run).
    pub fn abandon(&mut self) {
        self.reinit();
    }

    fn reinit(&mut self) {
        self.bird = Bird {
            y: self.config.height / 2.0,
            velocity: 0.0,
        };
        self.pipes.clear();
        self.score = 0;
        self.tick_count = 0;
        self.mode = Mode::Ready;
    }

    /// Change the playfield dimensions. Re-centers the bird only while
    /// `Ready`; in-flight pipe positions are absolute pixels and are never
    /// re-scaled.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.config.width = width;
        self.config.height = height;
        if self.mode == Mode::Ready {
            self.bird.y = height / 2.0;
        }
    }

    /// Immutable read for the renderer.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            mode: self.mode,
            score: self.score,
            high_score: self.high_score,
            tick_count: self.tick_count,
            bird: BirdPose {
                x: self.config.bird_x,
                y: self.bird.y,
                velocity: self.bird.velocity,
                rotation: self.bird.rotation(),
            },
            pipes: self.pipes.clone(),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sim_defaults() {
        let sim = FlappySim::new(SimConfig::default(), 7);
        assert_eq!(sim.mode, Mode::Ready);
        assert_eq!(sim.score, 0);
        assert_eq!(sim.tick_count, 0);
        assert_eq!(sim.high_score, 7);
        assert!(sim.pipes.is_empty());
        assert!((sim.bird.y - 150.0).abs() < f64::EPSILON);
        assert!(sim.bird.velocity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawn_pipe_gap_within_legal_range() {
        let mut sim = FlappySim::new(SimConfig::default(), 0);
        let (min, max) = sim.config.gap_top_range();
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            sim.spawn_pipe(&mut rng);
        }
        for pipe in &sim.pipes {
            assert!(pipe.gap_top >= min, "gap_top {} below {}", pipe.gap_top, min);
            assert!(pipe.gap_top <= max, "gap_top {} above {}", pipe.gap_top, max);
            assert!(!pipe.scored);
        }
    }

    #[test]
    fn test_spawn_pipe_starts_at_right_edge() {
        let mut sim = FlappySim::new(SimConfig::default(), 0);
        let mut rng = rand::thread_rng();
        sim.spawn_pipe(&mut rng);
        assert_eq!(sim.pipes.len(), 1);
        assert!((sim.pipes[0].x - sim.config.width).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gap_range_collapses_when_gap_fills_playfield() {
        let config = SimConfig {
            pipe_gap: 220.0, // 300 - 220 - 40 - 20 = 20 < min_gap_top
            ..SimConfig::default()
        };
        let (min, max) = config.gap_top_range();
        assert!((min - 40.0).abs() < f64::EPSILON);
        assert!((max - 40.0).abs() < f64::EPSILON);

        let mut sim = FlappySim::new(config, 0);
        let mut rng = rand::thread_rng();
        sim.spawn_pipe(&mut rng);
        assert!((sim.pipes[0].gap_top - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_reports_positive_score_only_after_game_over() {
        let mut sim = FlappySim::new(SimConfig::default(), 0);
        sim.mode = Mode::GameOver;
        sim.score = 5;
        assert_eq!(sim.reset(), Some(5));
        assert_eq!(sim.mode, Mode::Ready);
        assert_eq!(sim.score, 0);
        assert_eq!(sim.tick_count, 0);
        assert!(sim.pipes.is_empty());

        // Zero score is never reported
        sim.mode = Mode::GameOver;
        assert_eq!(sim.reset(), None);

        // Neither is a score from a run that has not ended
        sim.mode = Mode::Playing;
        sim.score = 3;
        assert_eq!(sim.reset(), None);
    }

    #[test]
    fn test_abandon_discards_run() {
        let mut sim = FlappySim::new(SimConfig::default(), 0);
        sim.mode = Mode::Playing;
        sim.score = 9;
        sim.bird.y = 42.0;
        sim.abandon();
        assert_eq!(sim.mode, Mode::Ready);
        assert_eq!(sim.score, 0);
        assert!((sim.bird.y - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_viewport_recenters_only_when_ready() {
        let mut sim = FlappySim::new(SimConfig::default(), 0);
        sim.set_viewport(400.0, 200.0);
        assert!((sim.bird.y - 100.0).abs() < f64::EPSILON);

        sim.mode = Mode::Playing;
        sim.bird.y = 37.0;
        sim.set_viewport(400.0, 320.0);
        assert!((sim.bird.y - 37.0).abs() < f64::EPSILON);
        assert!((sim.config.height - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_is_detached_from_live_state() {
        let mut sim = FlappySim::new(SimConfig::default(), 3);
        let mut rng = rand::thread_rng();
        sim.spawn_pipe(&mut rng);

        let snap = sim.snapshot();
        sim.pipes[0].x = -999.0;
        sim.bird.y = 1.0;
        sim.score = 50;

        assert!((snap.pipes[0].x - snap.config.width).abs() < f64::EPSILON);
        assert!((snap.bird.y - 150.0).abs() < f64::EPSILON);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.high_score, 3);
    }

    #[test]
    fn test_rotation_derived_and_clamped() {
        let mut bird = Bird {
            y: 0.0,
            velocity: 1.0,
        };
        assert!((bird.rotation() - 3.0).abs() < f64::EPSILON);

        bird.velocity = -20.0;
        assert!((bird.rotation() - (-30.0)).abs() < f64::EPSILON);

        bird.velocity = 40.0;
        assert!((bird.rotation() - 90.0).abs() < f64::EPSILON);
    }
}
