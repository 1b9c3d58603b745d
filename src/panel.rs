//! One pets panel session: a population, the host port, the RNG and the inbound queue.

use std::sync::mpsc;

use crate::collection::{PetCollection, TickReport};
use crate::config::SimConfig;
use crate::debug::timer::{SystemPhase, SystemTimers};
use crate::error::{PetError, PetResult};
use crate::events::{EventQueue, PanelEvent};
use crate::persist::{StateApi, WebviewMessage};
use crate::pet::{random_name, PetColor, PetKind, PetSize, PetSpawn};

/// What to spawn when there is no earlier session to restore.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOptions {
    pub kind: PetKind,
    /// `None` picks the kind's default color.
    pub color: Option<PetColor>,
    pub size: PetSize,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            kind: PetKind::Cat,
            color: None,
            size: PetSize::Medium,
        }
    }
}

pub struct PetPanel<S: StateApi> {
    collection: PetCollection,
    host: S,
    rng: fastrand::Rng,
    events: EventQueue,
    options: PanelOptions,
    timers: SystemTimers,
}

impl<S: StateApi> PetPanel<S> {
    /// Restore the previous session from `host`, or start with one default pet.
    pub fn bootstrap(
        config: SimConfig,
        host: S,
        options: PanelOptions,
        rng: fastrand::Rng,
    ) -> PetResult<Self> {
        config.validate()?;

        let (collection, fresh) = match host.get_state() {
            Some(state) => match PetCollection::restore(&state, config.clone()) {
                Ok(collection) => (collection, false),
                Err(e) => {
                    log::warn!("Starting over, stored pets were unusable: {e}");
                    (PetCollection::new(config), true)
                }
            },
            None => (PetCollection::new(config), true),
        };

        let mut panel = Self {
            collection,
            host,
            rng,
            events: EventQueue::new(),
            options,
            timers: SystemTimers::new(),
        };

        if fresh {
            let (kind, color, size) = (panel.options.kind, panel.options.color, panel.options.size);
            panel.spawn(kind, color, size, None)?;
        }
        log::info!("Pet panel ready with {} pets", panel.collection.len());
        panel.persist();
        Ok(panel)
    }

    pub fn collection(&self) -> &PetCollection {
        &self.collection
    }

    pub fn config(&self) -> &SimConfig {
        self.collection.config()
    }

    pub fn host(&self) -> &S {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut S {
        &mut self.host
    }

    pub fn timers(&self) -> &SystemTimers {
        &self.timers
    }

    /// A handle other callbacks or threads can queue commands through.
    pub fn sender(&self) -> mpsc::Sender<PanelEvent> {
        self.events.sender()
    }

    /// Queue a command for the next tick.
    pub fn push_event(&self, event: PanelEvent) {
        self.events.push(event);
    }

    /// Add a pet. A random name is picked from the kind's pool when `name` is `None`.
    pub fn spawn(
        &mut self,
        kind: PetKind,
        color: Option<PetColor>,
        size: PetSize,
        name: Option<String>,
    ) -> PetResult<String> {
        let name = match name {
            Some(name) => name,
            None => self.unused_name(kind),
        };
        let color = color.unwrap_or(kind.params().default_color);
        let config = self.collection.config();
        let x = self.rng.f32() * config.viewport.max_x(config.sprite_width(size));
        let spawn = PetSpawn::new(name, size, color).at(x, config.viewport.floor);
        let el = self.collection.spawn(kind.as_str(), spawn)?;
        Ok(el.name().to_string())
    }

    fn unused_name(&mut self, kind: PetKind) -> String {
        let name = random_name(kind, &mut self.rng);
        if self.collection.locate(&name).is_none() {
            return name;
        }
        format!("{name} {}", self.collection.pet_counter())
    }

    /// Run one frame: apply queued commands, move every pet, look for new
    /// friendships, then save.
    pub fn tick(&mut self) -> TickReport {
        self.timers.begin();
        for event in self.events.drain() {
            let label = event.label();
            if let Err(e) = self.handle(event) {
                log::warn!("{label} failed: {e}");
                self.host.post_message(WebviewMessage::Alert { text: e.to_string() });
            }
        }
        self.timers.end(SystemPhase::Events);

        self.timers.begin();
        let report = self.collection.tick(&mut self.rng);
        self.timers.end(SystemPhase::Behavior);

        self.timers.begin();
        for friendship in self.collection.seek_new_friends(&mut self.rng) {
            let (Some(a), Some(b)) = (
                self.collection.locate(&friendship.a),
                self.collection.locate(&friendship.b),
            ) else {
                continue;
            };
            let text = format!(
                "{} ({}): I'm now friends ❤️ with {} ({})",
                a.pet().display_name(),
                a.pet().emoji(),
                b.pet().display_name(),
                b.pet().emoji()
            );
            self.host.post_message(WebviewMessage::Info { text });
        }
        self.timers.end(SystemPhase::Friends);

        self.timers.begin();
        self.persist();
        self.timers.end(SystemPhase::Persist);

        report
    }

    fn handle(&mut self, event: PanelEvent) -> PetResult<()> {
        match event {
            PanelEvent::SpawnPet { kind, color, size, name } => {
                let kind: PetKind = kind.parse()?;
                let color = color.as_deref().and_then(|c| {
                    let parsed = PetColor::from_name(c);
                    if parsed.is_none() {
                        log::debug!("Unknown color {c:?}, using the default");
                    }
                    parsed
                });
                let size = size
                    .as_deref()
                    .and_then(PetSize::from_name)
                    .unwrap_or(self.options.size);
                self.spawn(kind, color, size, name)?;
            }
            PanelEvent::DeletePet { name } => {
                if self.collection.remove(&name).is_none() {
                    return Err(PetError::config(format!("there is no pet named {name:?}")));
                }
            }
            PanelEvent::ResetPets => {
                log::info!("Resetting {} pets", self.collection.len());
                self.collection.reset();
            }
            PanelEvent::ThrowBall => self.collection.throw_random_ball(&mut self.rng),
            PanelEvent::RollCall => {
                for text in self.collection.roll_call() {
                    self.host.post_message(WebviewMessage::Info { text });
                }
            }
            PanelEvent::ListPets => {
                let text = self.collection.describe();
                self.host.post_message(WebviewMessage::ListPets { text });
            }
            PanelEvent::Swipe { name } => {
                if self.collection.swipe(&name).is_none() {
                    log::debug!("Click on {name:?}, which is gone");
                }
            }
            PanelEvent::Hello { name } => {
                if let Some(text) = self.collection.say_hello(&name) {
                    self.host.post_message(WebviewMessage::Info { text });
                }
            }
        }
        Ok(())
    }

    fn persist(&mut self) {
        self.host.set_state(self.collection.serialize());
    }
}
