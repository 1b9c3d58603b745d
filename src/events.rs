//! Commands from the host UI, queued and applied at the start of the next tick.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

/// One user command. Wire form is `{"command": "spawn-pet", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum PanelEvent {
    SpawnPet {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        size: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
    DeletePet {
        name: String,
    },
    ResetPets,
    ThrowBall,
    RollCall,
    ListPets,
    /// A click on the pet.
    Swipe {
        name: String,
    },
    Hello {
        name: String,
    },
}

impl PanelEvent {
    pub fn from_json(text: &str) -> crate::error::PetResult<Self> {
        serde_json::from_str(text).map_err(|e| crate::error::PetError::config(e.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SpawnPet { .. } => "spawn-pet",
            Self::DeletePet { .. } => "delete-pet",
            Self::ResetPets => "reset-pets",
            Self::ThrowBall => "throw-ball",
            Self::RollCall => "roll-call",
            Self::ListPets => "list-pets",
            Self::Swipe { .. } => "swipe",
            Self::Hello { .. } => "hello",
        }
    }
}

/// Multi-producer queue. Senders may live on other threads; only the tick drains.
pub struct EventQueue {
    sender: mpsc::Sender<PanelEvent>,
    receiver: mpsc::Receiver<PanelEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> mpsc::Sender<PanelEvent> {
        self.sender.clone()
    }

    pub fn push(&self, event: PanelEvent) {
        // The receiver lives in `self`, so the channel can't be closed here.
        let _ = self.sender.send(event);
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<PanelEvent> {
        self.receiver.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_send_order_across_threads() {
        let queue = EventQueue::new();
        let tx = queue.sender();
        std::thread::spawn(move || {
            tx.send(PanelEvent::ThrowBall).unwrap();
            tx.send(PanelEvent::RollCall).unwrap();
        })
        .join()
        .unwrap();
        queue.push(PanelEvent::ListPets);

        assert_eq!(
            queue.drain(),
            vec![PanelEvent::ThrowBall, PanelEvent::RollCall, PanelEvent::ListPets]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn parses_host_commands() {
        let spawn = PanelEvent::from_json(r#"{"command":"spawn-pet","type":"dog","color":"red"}"#).unwrap();
        assert_eq!(
            spawn,
            PanelEvent::SpawnPet {
                kind: "dog".into(),
                color: Some("red".into()),
                size: None,
                name: None,
            }
        );
        let reset = PanelEvent::from_json(r#"{"command":"reset-pets"}"#).unwrap();
        assert_eq!(reset.label(), "reset-pets");
        assert!(PanelEvent::from_json(r#"{"command":"feed"}"#).is_err());
    }
}
