//! Per-pet behavior state machine.
//!
//! `next_frame` advances one pet by one frame. It reads only the pet itself, the
//! stimuli the collection resolved for it (friend, ball) and the injected RNG,
//! and it mutates only the pet.

pub mod sequence;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::pet::animation::SpriteFrame;
use crate::pet::{Family, Pet};

/// Settling speed for pets left above the floor, px/frame.
const FALL_SPEED: f32 = 4.0;
/// How close to the left wall (px) a pet must be to start climbing it.
const WALL_EPSILON: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateKind {
    SitIdle,
    Stand,
    Walk,
    Run,
    Lie,
    ClimbWall,
    WallHang,
    JumpDown,
    Land,
    Swipe,
    Chase,
    IdleWithBall,
    ChaseFriend,
    IdleWithFriend,
    Dying,
}

impl StateKind {
    pub const ALL: [StateKind; 15] = [
        Self::SitIdle,
        Self::Stand,
        Self::Walk,
        Self::Run,
        Self::Lie,
        Self::ClimbWall,
        Self::WallHang,
        Self::JumpDown,
        Self::Land,
        Self::Swipe,
        Self::Chase,
        Self::IdleWithBall,
        Self::ChaseFriend,
        Self::IdleWithFriend,
        Self::Dying,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SitIdle => "sit-idle",
            Self::Stand => "stand",
            Self::Walk => "walk",
            Self::Run => "run",
            Self::Lie => "lie",
            Self::ClimbWall => "climb-wall",
            Self::WallHang => "wall-hang",
            Self::JumpDown => "jump-down",
            Self::Land => "land",
            Self::Swipe => "swipe",
            Self::Chase => "chase",
            Self::IdleWithBall => "idle-with-ball",
            Self::ChaseFriend => "chase-friend",
            Self::IdleWithFriend => "idle-with-friend",
            Self::Dying => "dying",
        }
    }

    /// Walking or running on its own, the states a friend can be lured out of.
    pub fn is_moving(self) -> bool {
        matches!(self, Self::Walk | Self::Run)
    }

    pub fn is_above_ground(self) -> bool {
        matches!(self, Self::ClimbWall | Self::WallHang | Self::JumpDown)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Dying
    }

    /// States that hold the timer and stimuli off until they run out.
    fn is_forced(self) -> bool {
        matches!(self, Self::Swipe | Self::Dying)
    }

    /// States in which gravity pulls a pet back to the floor.
    fn settles(self) -> bool {
        !self.is_above_ground() && !self.is_forced()
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state a pet is in, plus its frame counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorState {
    pub kind: StateKind,
    /// Frames left before the timer fires.
    pub remaining: u32,
    /// Frames spent in this state so far.
    pub frame: u32,
    /// Frames this state was entered with.
    pub duration: u32,
    /// Whether stimuli and user interaction may cut this state short.
    pub interruptible: bool,
}

impl BehaviorState {
    /// Enter `kind` with a randomised duration.
    pub fn enter(kind: StateKind, config: &SimConfig, rng: &mut fastrand::Rng) -> Self {
        if kind.is_forced() {
            return Self::restored(kind, config);
        }
        let base = sequence::hold_frames(kind);
        Self::with_duration(kind, base + rng.u32(0..=base / 2))
    }

    /// Enter `kind` with its base duration. Used when rehydrating snapshots.
    pub fn restored(kind: StateKind, config: &SimConfig) -> Self {
        let duration = match kind {
            StateKind::Swipe => config.swipe_frames,
            _ => sequence::hold_frames(kind),
        };
        Self::with_duration(kind, duration)
    }

    fn with_duration(kind: StateKind, duration: u32) -> Self {
        Self {
            kind,
            remaining: duration,
            frame: 0,
            duration,
            interruptible: !kind.is_forced(),
        }
    }
}

/// What the collection knows about a pet's friend at the start of its frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FriendView {
    pub pos: Vec2,
    pub width: f32,
    pub state: StateKind,
}

/// Everything outside the pet that its frame may depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stimuli {
    pub friend: Option<FriendView>,
    pub ball: Option<Vec2>,
}

/// Something the collection has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// Reached its friend; the friend should settle down too.
    Arrived,
    /// Picked up the ball.
    CaughtBall,
    /// Finished dying; remove it from the collection.
    Despawn,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub state: StateKind,
    pub dx: f32,
    pub dy: f32,
    pub sprite: SpriteFrame,
    pub event: Option<FrameEvent>,
}

/// Advance `pet` by one frame.
pub fn next_frame(
    pet: &mut Pet,
    stimuli: &Stimuli,
    config: &SimConfig,
    rng: &mut fastrand::Rng,
) -> FrameOutcome {
    pet.age += 1;
    let before = pet.pos;

    if let Some(lifespan) = config.lifespan_frames {
        if pet.age >= lifespan && !pet.state.kind.is_terminal() {
            log::info!("{} is getting tired", pet.name());
            enter(pet, StateKind::Dying, config, rng);
        }
    }

    if pet.state.interruptible {
        react_to_stimuli(pet, stimuli, config, rng);
    }

    let mut event = None;
    let mut finished = false;

    match pet.state.kind {
        StateKind::Walk | StateKind::Run => walk(pet, config, rng),
        StateKind::ChaseFriend => match &stimuli.friend {
            Some(friend) => {
                if chase_friend(pet, friend, config) {
                    event = Some(FrameEvent::Arrived);
                    enter(pet, StateKind::IdleWithFriend, config, rng);
                }
            }
            None => finished = true,
        },
        StateKind::Chase => match stimuli.ball {
            Some(ball) => {
                if chase_ball(pet, ball, config) {
                    event = Some(FrameEvent::CaughtBall);
                    enter(pet, StateKind::IdleWithBall, config, rng);
                }
            }
            None => finished = true,
        },
        StateKind::ClimbWall => {
            let top = config.viewport.max_y(pet.height());
            pet.pos.y += speed(pet, config);
            if pet.pos.y >= top {
                pet.pos.y = top;
                enter(pet, StateKind::WallHang, config, rng);
            }
        }
        StateKind::JumpDown => {
            let floor = config.viewport.floor;
            pet.pos.y -= speed(pet, config).max(FALL_SPEED);
            if pet.pos.y <= floor {
                pet.pos.y = floor;
                enter(pet, StateKind::Land, config, rng);
            }
        }
        StateKind::Dying => {
            let duration = pet.state.duration.max(1) as f32;
            pet.opacity = pet.state.remaining.saturating_sub(1) as f32 / duration;
        }
        _ => {}
    }

    if pet.state.kind.settles() {
        let floor = config.viewport.floor;
        if pet.pos.y > floor {
            pet.pos.y = (pet.pos.y - FALL_SPEED).max(floor);
        }
    }

    pet.clamp_to(&config.viewport);

    pet.state.frame = pet.state.frame.saturating_add(1);
    pet.state.remaining = pet.state.remaining.saturating_sub(1);

    if pet.state.kind.is_terminal() {
        if pet.state.remaining == 0 {
            pet.visible = false;
            event = Some(FrameEvent::Despawn);
        }
    } else if finished || pet.state.remaining == 0 {
        transition(pet, config, rng);
    }

    FrameOutcome {
        state: pet.state.kind,
        dx: pet.pos.x - before.x,
        dy: pet.pos.y - before.y,
        sprite: SpriteFrame::new(pet.state.kind, pet.state.frame, pet.facing),
        event,
    }
}

/// Cut the current state short for a ball or a friend on the move.
fn react_to_stimuli(pet: &mut Pet, stimuli: &Stimuli, config: &SimConfig, rng: &mut fastrand::Rng) {
    let current = pet.state.kind;
    if current.is_above_ground() || !pet.on_ground(&config.viewport) || !pet.can_chase() {
        return;
    }

    if stimuli.ball.is_some() {
        if !matches!(current, StateKind::Chase | StateKind::IdleWithBall) {
            enter(pet, StateKind::Chase, config, rng);
        }
        return;
    }

    if let Some(friend) = &stimuli.friend {
        if current.is_moving() && friend.state.is_moving() {
            enter(pet, StateKind::ChaseFriend, config, rng);
        }
    }
}

/// Pixels per frame for the pet's current state.
fn speed(pet: &Pet, config: &SimConfig) -> f32 {
    let tier = pet.kind().params().speed as u8 as f32;
    tier * config.speed_unit
        * config.sizes.get(pet.size()).speed_scale
        * sequence::speed_factor(pet.state.kind)
}

fn walk(pet: &mut Pet, config: &SimConfig, rng: &mut fastrand::Rng) {
    let state = pet.state;
    if state.frame >= state.duration / 2 && rng.f32() < config.direction_flip_chance {
        pet.facing = pet.facing.flipped();
    }
    let step = speed(pet, config);
    step_horizontal(pet, step, config);
}

/// Move along the facing direction, turning around at the viewport edges.
fn step_horizontal(pet: &mut Pet, step: f32, config: &SimConfig) {
    let max_x = config.viewport.max_x(pet.width());
    let next = pet.pos.x + pet.facing.sign() * step;
    if next < 0.0 || next > max_x {
        pet.pos.x = next.clamp(0.0, max_x);
        pet.facing = pet.facing.flipped();
    } else {
        pet.pos.x = next;
    }
}

/// Head toward the friend's last known spot. Returns true on arrival.
fn chase_friend(pet: &mut Pet, friend: &FriendView, config: &SimConfig) -> bool {
    let gap = friend.pos.x - pet.pos.x;
    if gap.abs() <= config.arrive_distance {
        return true;
    }
    pet.facing = crate::pet::Facing::toward(gap);
    let step = speed(pet, config).min(gap.abs());
    pet.pos.x += pet.facing.sign() * step;
    false
}

/// Run under the ball. Returns true once it is within reach.
fn chase_ball(pet: &mut Pet, ball: Vec2, config: &SimConfig) -> bool {
    let center = pet.pos.x + pet.width() * 0.5;
    let gap = ball.x - center;
    let reach = pet.width() * 0.5;
    if gap.abs() <= reach && ball.y <= pet.pos.y + pet.height() {
        return true;
    }
    if gap.abs() > 1.0 {
        pet.facing = crate::pet::Facing::toward(gap);
        let step = speed(pet, config).min(gap.abs());
        pet.pos.x += pet.facing.sign() * step;
    }
    false
}

/// Timer ran out or the state reached its goal: pick what comes next.
fn transition(pet: &mut Pet, config: &SimConfig, rng: &mut fastrand::Rng) {
    let next = match pet.state.kind {
        StateKind::Swipe => pet.resume.take().unwrap_or(sequence::START),
        current => {
            let family = pet.kind().params().family;
            let options = sequence::successors(family, current);
            sequence::pick(options, |s| available(pet, family, s, config), rng)
                .unwrap_or(sequence::START)
        }
    };
    enter(pet, next, config, rng);
}

fn available(pet: &Pet, family: Family, state: StateKind, config: &SimConfig) -> bool {
    match state {
        StateKind::ClimbWall => {
            family == Family::Climber
                && pet.pos.x <= WALL_EPSILON
                && pet.on_ground(&config.viewport)
        }
        _ => true,
    }
}

pub(crate) fn enter(pet: &mut Pet, kind: StateKind, config: &SimConfig, rng: &mut fastrand::Rng) {
    log::debug!("{}: {} -> {}", pet.name(), pet.state.kind, kind);
    match kind {
        StateKind::Walk | StateKind::Run if rng.bool() => pet.facing = pet.facing.flipped(),
        StateKind::ClimbWall => pet.facing = crate::pet::Facing::Left,
        _ => {}
    }
    pet.state = BehaviorState::enter(kind, config, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Viewport;
    use crate::pet::{Facing, PetColor, PetKind, PetSize, PetSpawn};

    fn config() -> SimConfig {
        SimConfig {
            viewport: Viewport { width: 300.0, height: 200.0, floor: 0.0 },
            ..SimConfig::default()
        }
    }

    fn pet(kind: PetKind, x: f32, config: &SimConfig) -> Pet {
        Pet::new(
            kind,
            PetSpawn::new("Jerry", PetSize::Medium, PetColor::Brown).at(x, 0.0),
            config,
        )
    }

    #[test]
    fn stays_inside_viewport() {
        let cfg = config();
        let mut rng = fastrand::Rng::with_seed(1);
        for kind in PetKind::ALL {
            let mut p = pet(kind, 100.0, &cfg);
            for _ in 0..5000 {
                next_frame(&mut p, &Stimuli::default(), &cfg, &mut rng);
                let pos = p.position();
                assert!(pos.x >= 0.0 && pos.x <= cfg.viewport.max_x(p.width()), "{kind} x={}", pos.x);
                assert!(pos.y >= cfg.viewport.floor && pos.y <= cfg.viewport.max_y(p.height()), "{kind} y={}", pos.y);
            }
        }
    }

    #[test]
    fn swipe_holds_for_its_forced_minimum() {
        let cfg = config();
        let mut rng = fastrand::Rng::with_seed(2);
        let mut p = pet(PetKind::Cat, 50.0, &cfg);
        assert!(p.swipe(&cfg));
        assert_eq!(p.state().kind, StateKind::Swipe);
        assert!(!p.state().interruptible);

        let ball = Stimuli { ball: Some(Vec2::new(10.0, 0.0)), ..Stimuli::default() };
        for _ in 0..cfg.swipe_frames - 1 {
            let out = next_frame(&mut p, &ball, &cfg, &mut rng);
            assert_eq!(out.state, StateKind::Swipe);
        }
        let out = next_frame(&mut p, &Stimuli::default(), &cfg, &mut rng);
        assert_ne!(out.state, StateKind::Swipe);
    }

    #[test]
    fn swipe_resumes_interrupted_state() {
        let cfg = config();
        let mut rng = fastrand::Rng::with_seed(3);
        let mut p = pet(PetKind::Dog, 50.0, &cfg);
        enter(&mut p, StateKind::Lie, &cfg, &mut rng);
        p.swipe(&cfg);
        for _ in 0..cfg.swipe_frames {
            next_frame(&mut p, &Stimuli::default(), &cfg, &mut rng);
        }
        assert_eq!(p.state().kind, StateKind::Lie);
    }

    #[test]
    fn rocks_cannot_swipe() {
        let cfg = config();
        let mut p = pet(PetKind::Rocky, 50.0, &cfg);
        assert!(!p.can_swipe());
        assert!(!p.swipe(&cfg));
        assert_eq!(p.state().kind, StateKind::SitIdle);
    }

    #[test]
    fn chasing_friend_arrives() {
        let cfg = config();
        let mut rng = fastrand::Rng::with_seed(4);
        let mut p = pet(PetKind::Dog, 0.0, &cfg);
        enter(&mut p, StateKind::ChaseFriend, &cfg, &mut rng);
        let friend = FriendView { pos: Vec2::new(120.0, 0.0), width: 55.0, state: StateKind::SitIdle };
        let stimuli = Stimuli { friend: Some(friend), ball: None };

        let mut arrived = false;
        for _ in 0..200 {
            let out = next_frame(&mut p, &stimuli, &cfg, &mut rng);
            if out.event == Some(FrameEvent::Arrived) {
                arrived = true;
                assert_eq!(out.state, StateKind::IdleWithFriend);
                break;
            }
            assert_eq!(p.facing(), Facing::Right);
        }
        assert!(arrived);
        assert!((p.position().x - 120.0).abs() <= cfg.arrive_distance);
    }

    #[test]
    fn chase_without_friend_falls_back() {
        let cfg = config();
        let mut rng = fastrand::Rng::with_seed(5);
        let mut p = pet(PetKind::Fox, 10.0, &cfg);
        enter(&mut p, StateKind::ChaseFriend, &cfg, &mut rng);
        let out = next_frame(&mut p, &Stimuli::default(), &cfg, &mut rng);
        assert_ne!(out.state, StateKind::ChaseFriend);
    }

    #[test]
    fn ball_pulls_pets_and_gets_caught() {
        let cfg = config();
        let mut rng = fastrand::Rng::with_seed(6);
        let mut p = pet(PetKind::Dog, 0.0, &cfg);
        let stimuli = Stimuli { ball: Some(Vec2::new(200.0, 4.0)), ..Stimuli::default() };

        let mut caught = false;
        for _ in 0..400 {
            let out = next_frame(&mut p, &stimuli, &cfg, &mut rng);
            if out.event == Some(FrameEvent::CaughtBall) {
                caught = true;
                assert_eq!(out.state, StateKind::IdleWithBall);
                break;
            }
            assert_eq!(out.state, StateKind::Chase);
        }
        assert!(caught);
    }

    #[test]
    fn old_pets_die_and_despawn() {
        let cfg = SimConfig { lifespan_frames: Some(10), ..config() };
        let mut rng = fastrand::Rng::with_seed(7);
        let mut p = pet(PetKind::Cat, 10.0, &cfg);

        let mut despawned = false;
        for i in 0..200 {
            let out = next_frame(&mut p, &Stimuli::default(), &cfg, &mut rng);
            if i >= 10 {
                assert_eq!(out.state, StateKind::Dying);
            }
            if out.event == Some(FrameEvent::Despawn) {
                despawned = true;
                break;
            }
        }
        assert!(despawned);
        assert!(!p.is_visible());
        assert!(p.opacity() < 0.05);
    }

    #[test]
    fn climbers_go_up_and_come_back_down() {
        let cfg = config();
        let mut rng = fastrand::Rng::with_seed(8);
        let mut p = pet(PetKind::Cat, 0.0, &cfg);
        enter(&mut p, StateKind::ClimbWall, &cfg, &mut rng);

        let mut seen = Vec::new();
        for _ in 0..2000 {
            let out = next_frame(&mut p, &Stimuli::default(), &cfg, &mut rng);
            if seen.last() != Some(&out.state) {
                seen.push(out.state);
            }
            if out.state == StateKind::Land {
                break;
            }
        }
        assert_eq!(
            &seen[..],
            &[StateKind::ClimbWall, StateKind::WallHang, StateKind::JumpDown, StateKind::Land]
        );
        assert_eq!(p.position().y, cfg.viewport.floor);
    }

    #[test]
    fn same_seed_same_path() {
        let cfg = config();
        let run = |seed| {
            let mut rng = fastrand::Rng::with_seed(seed);
            let mut p = pet(PetKind::Horse, 100.0, &cfg);
            (0..500)
                .map(|_| next_frame(&mut p, &Stimuli::default(), &cfg, &mut rng).state)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }
}
