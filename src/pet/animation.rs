use crate::behavior::StateKind;
use crate::pet::Facing;

/// Simulation frames each sprite frame stays on screen (sheets animate at 8fps, sim at 60).
const FRAMES_PER_SPRITE: u32 = 8;
/// Frames in every sprite strip.
const SPRITE_FRAMES: u32 = 4;

/// Which sprite strip and frame the renderer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub label: &'static str,
    pub index: u8,
    /// Strips face right; the renderer mirrors them for left-facing pets.
    pub flipped: bool,
}

impl Default for SpriteFrame {
    fn default() -> Self {
        Self {
            label: "idle",
            index: 0,
            flipped: false,
        }
    }
}

impl SpriteFrame {
    pub fn new(state: StateKind, frame: u32, facing: Facing) -> Self {
        Self {
            label: sprite_label(state),
            index: ((frame / FRAMES_PER_SPRITE) % SPRITE_FRAMES) as u8,
            flipped: facing == Facing::Left,
        }
    }
}

pub fn sprite_label(state: StateKind) -> &'static str {
    match state {
        StateKind::SitIdle | StateKind::IdleWithFriend => "idle",
        StateKind::Stand => "stand",
        StateKind::Walk => "walk",
        StateKind::Run | StateKind::Chase | StateKind::ChaseFriend => "run",
        StateKind::Lie => "lie",
        StateKind::ClimbWall => "wallclimb",
        StateKind::WallHang => "wallgrab",
        StateKind::JumpDown => "fall_from_grab",
        StateKind::Land => "land",
        StateKind::Swipe => "swipe",
        StateKind::IdleWithBall => "with_ball",
        StateKind::Dying => "dying",
    }
}
