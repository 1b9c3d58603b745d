use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PetError;

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PetKind {
    Cat,
    Dog,
    Fox,
    Crab,
    Clippy,
    Rocky,
    Snake,
    RubberDuck,
    Turtle,
    Chicken,
    Panda,
    Snail,
    Zappy,
    Totoro,
    Horse,
    Cockatiel,
}

/// Movement speed tier. Multiplied by `speed_unit` and the size scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum SpeedTier {
    Still = 0,
    VerySlow = 1,
    Slow = 2,
    Normal = 3,
    Fast = 4,
}

/// Which behavior sequence a kind follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Walks, runs, climbs the left wall and jumps down.
    Climber,
    /// Walks, runs and lies down.
    Walker,
    /// Slow ground movers that never run.
    Crawler,
    /// Never moves on its own.
    Static,
}

/// Fixed per-kind parameters.
#[derive(Debug, Clone, Copy)]
pub struct KindParams {
    pub emoji: &'static str,
    pub greeting: &'static str,
    pub speed: SpeedTier,
    pub family: Family,
    pub can_swipe: bool,
    pub can_chase: bool,
    pub colors: &'static [PetColor],
    pub default_color: PetColor,
    pub names: &'static [&'static str],
}

impl PetKind {
    pub const ALL: [PetKind; 16] = [
        Self::Cat,
        Self::Dog,
        Self::Fox,
        Self::Crab,
        Self::Clippy,
        Self::Rocky,
        Self::Snake,
        Self::RubberDuck,
        Self::Turtle,
        Self::Chicken,
        Self::Panda,
        Self::Snail,
        Self::Zappy,
        Self::Totoro,
        Self::Horse,
        Self::Cockatiel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Fox => "fox",
            Self::Crab => "crab",
            Self::Clippy => "clippy",
            Self::Rocky => "rocky",
            Self::Snake => "snake",
            Self::RubberDuck => "rubber-duck",
            Self::Turtle => "turtle",
            Self::Chicken => "chicken",
            Self::Panda => "panda",
            Self::Snail => "snail",
            Self::Zappy => "zappy",
            Self::Totoro => "totoro",
            Self::Horse => "horse",
            Self::Cockatiel => "cockatiel",
        }
    }

    pub fn params(self) -> &'static KindParams {
        use PetColor::*;
        match self {
            Self::Cat => &KindParams {
                emoji: "🐱",
                greeting: "meow",
                speed: SpeedTier::Normal,
                family: Family::Climber,
                can_swipe: true,
                can_chase: true,
                colors: &[Black, Brown, White, Gray, LightBrown, Orange],
                default_color: Brown,
                names: &["Whiskers", "Mittens", "Shadow", "Luna", "Mochi", "Noodle", "Biscuit", "Salem", "Felix", "Cleo"],
            },
            Self::Dog => &KindParams {
                emoji: "🐶",
                greeting: "woof",
                speed: SpeedTier::Normal,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[Black, Brown, White, Red, Akita],
                default_color: Brown,
                names: &["Biscuit", "Rex", "Pepper", "Buddy", "Scout", "Nugget", "Waffles", "Boots"],
            },
            Self::Fox => &KindParams {
                emoji: "🦊",
                greeting: "yip",
                speed: SpeedTier::Fast,
                family: Family::Climber,
                can_swipe: true,
                can_chase: true,
                colors: &[Red, White],
                default_color: Red,
                names: &["Ginger", "Rusty", "Cinnamon", "Foxy", "Ember", "Maple"],
            },
            Self::Crab => &KindParams {
                emoji: "🦀",
                greeting: "click click",
                speed: SpeedTier::Slow,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[Red],
                default_color: Red,
                names: &["Ferris", "Pinchy", "Clawdia", "Sebastian", "Crabby"],
            },
            Self::Clippy => &KindParams {
                emoji: "📎",
                greeting: "it looks like you're writing code",
                speed: SpeedTier::Slow,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[Black, Brown, Green, Yellow],
                default_color: Brown,
                names: &["Clippy", "Clippers", "Paperclip", "Binder", "Staples"],
            },
            Self::Rocky => &KindParams {
                emoji: "💎",
                greeting: "...",
                speed: SpeedTier::Still,
                family: Family::Static,
                can_swipe: false,
                can_chase: false,
                colors: &[Gray],
                default_color: Gray,
                names: &["Rocky", "Pebble", "Boulder", "Dwayne", "Flint"],
            },
            Self::Snake => &KindParams {
                emoji: "🐍",
                greeting: "sss",
                speed: SpeedTier::VerySlow,
                family: Family::Crawler,
                can_swipe: true,
                can_chase: true,
                colors: &[Green],
                default_color: Green,
                names: &["Sid", "Slinky", "Hissy", "Noodle", "Monty"],
            },
            Self::RubberDuck => &KindParams {
                emoji: "🐥",
                greeting: "quack",
                speed: SpeedTier::Fast,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[Yellow],
                default_color: Yellow,
                names: &["Ducky", "Quackers", "Debug", "Bubbles", "Squeaky"],
            },
            Self::Turtle => &KindParams {
                emoji: "🐢",
                greeting: "hello",
                speed: SpeedTier::VerySlow,
                family: Family::Crawler,
                can_swipe: true,
                can_chase: true,
                colors: &[Green, Orange],
                default_color: Green,
                names: &["Shelly", "Tank", "Leo", "Donnie", "Speedy"],
            },
            Self::Chicken => &KindParams {
                emoji: "🐔",
                greeting: "cluck",
                speed: SpeedTier::Normal,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[White],
                default_color: White,
                names: &["Nugget", "Henrietta", "Pecky", "Eggbert", "Clucky"],
            },
            Self::Panda => &KindParams {
                emoji: "🐼",
                greeting: "nom nom",
                speed: SpeedTier::Slow,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[Black, Brown],
                default_color: Black,
                names: &["Bao", "Bamboo", "Mei", "Tofu", "Oreo"],
            },
            Self::Snail => &KindParams {
                emoji: "🐌",
                greeting: "hi... slowly",
                speed: SpeedTier::VerySlow,
                family: Family::Crawler,
                can_swipe: true,
                can_chase: true,
                colors: &[Brown],
                default_color: Brown,
                names: &["Gary", "Turbo", "Slimey", "Shelby", "Escargot"],
            },
            Self::Zappy => &KindParams {
                emoji: "⚡",
                greeting: "bzzt",
                speed: SpeedTier::Fast,
                family: Family::Climber,
                can_swipe: true,
                can_chase: true,
                colors: &[Yellow],
                default_color: Yellow,
                names: &["Zappy", "Sparky", "Volt", "Ampere", "Pixel"],
            },
            Self::Totoro => &KindParams {
                emoji: "🐾",
                greeting: "trrr",
                speed: SpeedTier::Normal,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[Gray],
                default_color: Gray,
                names: &["Totoro", "Chibi", "Chu", "Mochi", "Sprout"],
            },
            Self::Horse => &KindParams {
                emoji: "🐴",
                greeting: "neigh",
                speed: SpeedTier::Fast,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[Black, Brown, White],
                default_color: Brown,
                names: &["Spirit", "Biscuit", "Clover", "Pickles", "Marble"],
            },
            Self::Cockatiel => &KindParams {
                emoji: "🦜",
                greeting: "chirp",
                speed: SpeedTier::Normal,
                family: Family::Walker,
                can_swipe: true,
                can_chase: true,
                colors: &[Gray],
                default_color: Gray,
                names: &["Kiwi", "Mango", "Sunny", "Pip", "Chai"],
            },
        }
    }

    /// Pick `requested` if this kind has a sprite sheet in that color, else the kind's default.
    pub fn normalize_color(self, requested: PetColor) -> PetColor {
        let params = self.params();
        if params.colors.contains(&requested) {
            requested
        } else {
            log::debug!(
                "{} has no {} sprites, using {}",
                self,
                requested,
                params.default_color
            );
            params.default_color
        }
    }

    /// Kinds that may become friends. Both sides must be able to run after the other.
    pub fn compatible_with(self, other: PetKind) -> bool {
        self.params().can_chase && other.params().can_chase
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetKind {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| PetError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetColor {
    Black,
    Brown,
    Green,
    Yellow,
    Gray,
    Purple,
    Red,
    White,
    Orange,
    Akita,
    LightBrown,
}

impl PetColor {
    pub const ALL: [PetColor; 11] = [
        Self::Black,
        Self::Brown,
        Self::Green,
        Self::Yellow,
        Self::Gray,
        Self::Purple,
        Self::Red,
        Self::White,
        Self::Orange,
        Self::Akita,
        Self::LightBrown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::White => "white",
            Self::Orange => "orange",
            Self::Akita => "akita",
            Self::LightBrown => "lightbrown",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for PetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    Nano,
    Small,
    Medium,
    Large,
}

impl PetSize {
    pub const ALL: [PetSize; 4] = [Self::Nano, Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nano => "nano",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for PetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
