pub mod animation;
pub mod kind;

pub use kind::{Family, KindParams, PetColor, PetKind, PetSize, SpeedTier};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::behavior::{self, BehaviorState, FrameOutcome, StateKind, Stimuli};
use crate::config::{SimConfig, Viewport};
use crate::error::PetResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Direction that closes a horizontal gap of `dx`.
    pub fn toward(dx: f32) -> Self {
        if dx < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// Everything needed to place a new pet, apart from its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct PetSpawn {
    pub name: String,
    pub display_name: Option<String>,
    pub size: PetSize,
    pub color: PetColor,
    pub x: f32,
    pub y: f32,
    pub creation_index: u32,
}

impl PetSpawn {
    pub fn new(name: impl Into<String>, size: PetSize, color: PetColor) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            size,
            color,
            x: 0.0,
            y: 0.0,
            creation_index: 0,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn creation_index(mut self, index: u32) -> Self {
        self.creation_index = index;
        self
    }
}

/// Build a pet from its kind name. Fails for kinds this panel has no sprites for.
pub fn create_pet(kind: &str, spawn: PetSpawn, config: &SimConfig) -> PetResult<Pet> {
    let kind: PetKind = kind.parse()?;
    Ok(Pet::new(kind, spawn, config))
}

/// One simulated creature.
#[derive(Debug, Clone)]
pub struct Pet {
    name: String,
    display_name: String,
    kind: PetKind,
    size: PetSize,
    color: PetColor,
    width: f32,
    creation_index: u32,
    pub(crate) pos: Vec2,
    pub(crate) facing: Facing,
    pub(crate) state: BehaviorState,
    /// State to return to once a forced reaction is over.
    pub(crate) resume: Option<StateKind>,
    /// Name of the friend, if any. Resolved through the owning collection.
    pub(crate) friend: Option<String>,
    pub(crate) opacity: f32,
    pub(crate) visible: bool,
    /// Frames lived.
    pub(crate) age: u64,
}

impl Pet {
    pub fn new(kind: PetKind, spawn: PetSpawn, config: &SimConfig) -> Self {
        let color = kind.normalize_color(spawn.color);
        let display_name = spawn.display_name.unwrap_or_else(|| spawn.name.clone());
        let mut pet = Self {
            name: spawn.name,
            display_name,
            kind,
            size: spawn.size,
            color,
            width: config.sprite_width(spawn.size),
            creation_index: spawn.creation_index,
            pos: Vec2::new(spawn.x, spawn.y),
            facing: Facing::Right,
            state: BehaviorState::restored(behavior::sequence::START, config),
            resume: None,
            friend: None,
            opacity: 1.0,
            visible: true,
            age: 0,
        };
        pet.clamp_to(&config.viewport);
        pet
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn kind(&self) -> PetKind {
        self.kind
    }

    pub fn size(&self) -> PetSize {
        self.size
    }

    pub fn color(&self) -> PetColor {
        self.color
    }

    pub fn emoji(&self) -> &'static str {
        self.kind.params().emoji
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sprites are square.
    pub fn height(&self) -> f32 {
        self.width
    }

    pub fn creation_index(&self) -> u32 {
        self.creation_index
    }

    /// Bottom-left corner, in viewport pixels measured from the bottom-left.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.width * 0.5)
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn state(&self) -> &BehaviorState {
        &self.state
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn can_swipe(&self) -> bool {
        self.kind.params().can_swipe
    }

    pub fn can_chase(&self) -> bool {
        self.kind.params().can_chase
    }

    pub fn has_friend(&self) -> bool {
        self.friend.is_some()
    }

    /// Name of the friend. Look it up in the collection to get the pet itself.
    pub fn friend(&self) -> Option<&str> {
        self.friend.as_deref()
    }

    /// Speech bubble text.
    pub fn hello(&self) -> String {
        let params = self.kind.params();
        format!("{} {}! I'm {}", params.emoji, params.greeting, self.display_name)
    }

    /// Whether the pet is free to strike up a friendship right now.
    pub fn is_sociable(&self, viewport: &Viewport) -> bool {
        self.can_chase()
            && !self.has_friend()
            && self.state.interruptible
            && !self.state.kind.is_above_ground()
            && self.on_ground(viewport)
    }

    pub fn on_ground(&self, viewport: &Viewport) -> bool {
        self.pos.y <= viewport.floor + 0.5
    }

    pub fn next_frame(
        &mut self,
        stimuli: &Stimuli,
        config: &SimConfig,
        rng: &mut fastrand::Rng,
    ) -> FrameOutcome {
        behavior::next_frame(self, stimuli, config, rng)
    }

    /// React to a click. Returns false if this kind doesn't swipe or the pet is busy.
    pub fn swipe(&mut self, config: &SimConfig) -> bool {
        if !self.can_swipe() || !self.state.interruptible {
            return false;
        }
        self.resume = Some(self.state.kind);
        self.state = BehaviorState::restored(StateKind::Swipe, config);
        log::debug!("{} swipes", self.name);
        true
    }

    pub(crate) fn make_friends_with(&mut self, other: &str) {
        self.friend = Some(other.to_string());
    }

    pub(crate) fn forget_friend(&mut self) {
        self.friend = None;
    }

    pub(crate) fn clamp_to(&mut self, viewport: &Viewport) {
        let x = if self.pos.x.is_finite() { self.pos.x } else { 0.0 };
        let y = if self.pos.y.is_finite() { self.pos.y } else { viewport.floor };
        self.pos.x = x.clamp(0.0, viewport.max_x(self.width));
        self.pos.y = y.clamp(viewport.floor, viewport.max_y(self.height()));
    }
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Generate a name for a pet of `kind` from its name pool.
pub fn random_name(kind: PetKind, rng: &mut fastrand::Rng) -> String {
    const PREFIXES: &[&str] = &[
        "", "", "", "", "", "", "Sir ", "Lady ", "Professor ", "Captain ", "Little ", "Big ",
    ];
    const SUFFIXES: &[&str] = &["", "", "", "", "", "", " Jr.", " the Great", " McFluff"];
    let names = kind.params().names;
    format!(
        "{}{}{}",
        PREFIXES[rng.usize(0..PREFIXES.len())],
        names[rng.usize(0..names.len())],
        SUFFIXES[rng.usize(0..SUFFIXES.len())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_pet_keeps_kind_for_every_kind() {
        let cfg = SimConfig::default();
        for kind in PetKind::ALL {
            let spawn = PetSpawn::new("testPet", PetSize::Medium, PetColor::Brown).display_name("Jerry");
            let pet = create_pet(kind.as_str(), spawn, &cfg).unwrap();
            assert_eq!(pet.kind(), kind);
            assert!(!pet.hello().is_empty());
            assert!(pet.hello().contains("Jerry"));
            assert!(pet.width() > 0.0);
        }
    }

    #[test]
    fn create_pet_rejects_unknown_kind() {
        let spawn = PetSpawn::new("x", PetSize::Small, PetColor::Black);
        let err = create_pet("unicorn", spawn, &SimConfig::default()).unwrap_err();
        assert!(matches!(err, crate::error::PetError::UnknownKind(_)));
    }

    #[test]
    fn cat_says_meow() {
        let spawn = PetSpawn::new("Jerry", PetSize::Medium, PetColor::Brown);
        let pet = create_pet("cat", spawn, &SimConfig::default()).unwrap();
        assert_eq!(pet.emoji(), "🐱");
        assert_eq!(pet.name(), "Jerry");
        assert_eq!(pet.display_name(), "Jerry");
        assert_eq!(pet.color(), PetColor::Brown);
    }

    #[test]
    fn spawn_position_is_clamped() {
        let cfg = SimConfig::default();
        let spawn = PetSpawn::new("far", PetSize::Large, PetColor::Brown).at(10_000.0, -5.0);
        let pet = Pet::new(PetKind::Dog, spawn, &cfg);
        assert_eq!(pet.position().x, cfg.viewport.max_x(pet.width()));
        assert_eq!(pet.position().y, cfg.viewport.floor);
    }

    #[test]
    fn width_follows_size() {
        let cfg = SimConfig::default();
        let small = Pet::new(PetKind::Cat, PetSpawn::new("a", PetSize::Small, PetColor::Black), &cfg);
        let large = Pet::new(PetKind::Cat, PetSpawn::new("b", PetSize::Large, PetColor::Black), &cfg);
        assert!(small.width() < large.width());
    }

    #[test]
    fn random_names_come_from_the_pool() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..50 {
            let name = random_name(PetKind::Crab, &mut rng);
            assert!(PetKind::Crab.params().names.iter().any(|n| name.contains(n)), "{name}");
        }
    }
}
