use glam::Vec2;

use crate::config::{BallConfig, Viewport};

/// A thrown ball. Position is the ball's center, y measured up from the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left before it disappears uncaught.
    pub lifetime: u32,
}

impl Ball {
    pub fn throw(pos: Vec2, vel: Vec2, config: &BallConfig) -> Self {
        Self {
            pos,
            vel,
            lifetime: config.lifetime_frames,
        }
    }

    /// Thrown from the top-left corner toward the middle with a random push.
    pub fn throw_random(viewport: &Viewport, config: &BallConfig, rng: &mut fastrand::Rng) -> Self {
        let pos = Vec2::new(config.radius, viewport.height - config.radius);
        let vel = Vec2::new(4.0 + rng.f32() * 6.0, rng.f32() * 4.0);
        Self::throw(pos, vel, config)
    }

    /// One frame of gravity, friction and wall bounces. Returns false once expired.
    pub fn update(&mut self, viewport: &Viewport, config: &BallConfig) -> bool {
        self.lifetime = self.lifetime.saturating_sub(1);

        let r = config.radius;
        let (left, right) = (r, (viewport.width - r).max(r));
        let (bottom, top) = (viewport.floor + r, (viewport.height - r).max(viewport.floor + r));

        if self.is_resting() && self.pos.y <= bottom {
            return self.lifetime > 0;
        }

        self.vel.y -= config.gravity;
        self.pos += self.vel;
        self.vel *= config.friction;

        if self.pos.x < left {
            self.pos.x = left;
            self.vel.x = self.vel.x.abs() * config.bounce;
        }
        if self.pos.x > right {
            self.pos.x = right;
            self.vel.x = -self.vel.x.abs() * config.bounce;
        }
        if self.pos.y < bottom {
            self.pos.y = bottom;
            self.vel.y = self.vel.y.abs() * config.bounce;
        }
        if self.pos.y > top {
            self.pos.y = top;
            self.vel.y = -self.vel.y.abs() * config.bounce;
        }

        // Rest on the floor once it stops bouncing.
        if self.pos.y <= bottom && self.vel.length_squared() < config.min_speed * config.min_speed {
            self.vel = Vec2::ZERO;
        }

        self.lifetime > 0
    }

    pub fn is_resting(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}
