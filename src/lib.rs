//! Pet panel simulation: little animals that wander, climb, chase balls and make
//! friends inside a host-provided viewport.

pub mod app;
pub mod ball;
pub mod behavior;
pub mod collection;
pub mod config;
pub mod debug;
pub mod element;
pub mod error;
pub mod events;
pub mod panel;
pub mod persist;
pub mod pet;

pub use collection::{Friendship, PetCollection, TickReport};
pub use config::SimConfig;
pub use element::PetElement;
pub use error::{PetError, PetResult};
pub use events::PanelEvent;
pub use panel::{PanelOptions, PetPanel};
pub use persist::{MemoryState, PetElementState, PetPanelState, StateApi, WebviewMessage};
pub use pet::{create_pet, Pet, PetColor, PetKind, PetSize, PetSpawn};
