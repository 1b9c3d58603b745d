//! Snapshot wire format and the port the host implements to store it and carry messages.
//!
//! Snapshots are JSON with camelCase keys. Unknown keys are ignored so older
//! panels can read snapshots written by newer ones.

use serde::{Deserialize, Serialize};

use crate::behavior::StateKind;
use crate::error::{PetError, PetResult};
use crate::pet::{Facing, PetColor, PetKind, PetSize};

/// One pet, flattened so it can be rebuilt without any other context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetElementState {
    pub pet_type: PetKind,
    pub pet_color: PetColor,
    pub pet_size: PetSize,
    pub pos_x: f32,
    pub pos_y: f32,
    pub name: String,
    pub behavior_state: StateKind,
    /// Opaque renderer value, handed back untouched on restore.
    pub left_offset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub facing: Facing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend: Option<String>,
    #[serde(default)]
    pub creation_index: u32,
    #[serde(default)]
    pub age_frames: u64,
}

/// The whole population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPanelState {
    pub pet_counter: u32,
    pub pet_states: Vec<PetElementState>,
}

impl PetPanelState {
    pub fn from_json(text: &str) -> PetResult<Self> {
        serde_json::from_str(text).map_err(|e| PetError::malformed(e.to_string()))
    }

    pub fn to_json(&self) -> PetResult<String> {
        serde_json::to_string(self).map_err(|e| PetError::malformed(e.to_string()))
    }
}

/// Message to the host UI. Only emission order is guaranteed; the schema belongs to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum WebviewMessage {
    Alert { text: String },
    Info { text: String },
    ListPets { text: String },
}

impl WebviewMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Alert { text } | Self::Info { text } | Self::ListPets { text } => text,
        }
    }
}

/// The only channel between the panel and its host.
pub trait StateApi {
    /// `None` means there was no earlier session.
    fn get_state(&self) -> Option<PetPanelState>;
    /// Must be idempotent.
    fn set_state(&mut self, state: PetPanelState);
    /// Fire-and-forget, delivered in call order.
    fn post_message(&mut self, message: WebviewMessage);
}

/// In-process host: keeps the snapshot as JSON text, like a key-value store would.
#[derive(Debug, Default)]
pub struct MemoryState {
    stored: Option<String>,
    messages: Vec<WebviewMessage>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text, e.g. something a previous version wrote.
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self {
            stored: Some(text.into()),
            messages: Vec::new(),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    pub fn messages(&self) -> &[WebviewMessage] {
        &self.messages
    }

    pub fn take_messages(&mut self) -> Vec<WebviewMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn clear(&mut self) {
        self.stored = None;
        self.messages.clear();
    }
}

impl StateApi for MemoryState {
    fn get_state(&self) -> Option<PetPanelState> {
        let text = self.stored.as_deref()?;
        match PetPanelState::from_json(text) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("Ignoring stored pet state: {e}");
                None
            }
        }
    }

    fn set_state(&mut self, state: PetPanelState) {
        match state.to_json() {
            Ok(text) => self.stored = Some(text),
            Err(e) => log::error!("Could not store pet state: {e}"),
        }
    }

    fn post_message(&mut self, message: WebviewMessage) {
        self.messages.push(message);
    }
}
