//! The pet population: owns every element, advances them each tick, pairs up friends.

use crate::ball::Ball;
use crate::behavior::{self, BehaviorState, FrameEvent, FriendView, StateKind, Stimuli};
use crate::config::SimConfig;
use crate::element::PetElement;
use crate::error::{PetError, PetResult};
use crate::persist::{PetElementState, PetPanelState};
use crate::pet::{Pet, PetSpawn};

/// First creation index handed out in a fresh session.
pub const INITIAL_PET_COUNTER: u32 = 1;

/// Two pets that just became friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub a: String,
    pub b: String,
}

/// What happened during one tick that the host may want to hear about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub frame: u64,
    /// Pets that finished dying and were removed.
    pub despawned: Vec<String>,
    pub caught_ball: Option<String>,
    /// Friends that reached each other, chaser first.
    pub reunions: Vec<Friendship>,
}

#[derive(Debug, Clone)]
pub struct PetCollection {
    elements: Vec<PetElement>,
    pet_counter: u32,
    frame: u64,
    ball: Option<Ball>,
    config: SimConfig,
}

impl Default for PetCollection {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl PetCollection {
    pub fn new(config: SimConfig) -> Self {
        Self {
            elements: Vec::new(),
            pet_counter: INITIAL_PET_COUNTER,
            frame: 0,
            ball: None,
            config,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// All elements in insertion order.
    pub fn pets(&self) -> &[PetElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Ticks run since the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pet_counter(&self) -> u32 {
        self.pet_counter
    }

    /// Hand out the next creation index.
    pub fn next_creation_index(&mut self) -> u32 {
        let index = self.pet_counter;
        self.pet_counter = self.pet_counter.saturating_add(1);
        index
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    // -----------------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------------

    pub fn push(&mut self, element: PetElement) -> PetResult<()> {
        if self.index_of(element.name()).is_some() {
            return Err(PetError::DuplicateName(element.name().to_string()));
        }
        log::info!(
            "Added {} ({} {} {})",
            element.name(),
            element.pet().size(),
            element.pet().color(),
            element.pet().kind()
        );
        self.elements.push(element);
        Ok(())
    }

    /// Build a pet with the next creation index and add it.
    pub fn spawn(&mut self, kind: &str, mut spawn: PetSpawn) -> PetResult<&PetElement> {
        if self.index_of(&spawn.name).is_some() {
            return Err(PetError::DuplicateName(spawn.name));
        }
        spawn.creation_index = self.pet_counter;
        let pet = crate::pet::create_pet(kind, spawn, &self.config)?;
        self.next_creation_index();
        self.push(PetElement::new(pet))?;
        Ok(&self.elements[self.elements.len() - 1])
    }

    /// Linear scan by name. `None` is the normal answer for a missing pet.
    pub fn locate(&self, name: &str) -> Option<&PetElement> {
        self.elements.iter().find(|el| el.name() == name)
    }

    pub fn locate_mut(&mut self, name: &str) -> Option<&mut PetElement> {
        self.elements.iter_mut().find(|el| el.name() == name)
    }

    /// The friend of `name`, if both still exist.
    pub fn friend_of(&self, name: &str) -> Option<&PetElement> {
        let friend = self.locate(name)?.pet().friend()?;
        self.locate(friend)
    }

    /// Remove a pet and clear any friendship pointing at it.
    pub fn remove(&mut self, name: &str) -> Option<PetElement> {
        let Some(index) = self.index_of(name) else {
            log::warn!("No pet named {name:?} to remove");
            return None;
        };
        let removed = self.elements.remove(index);
        for el in &mut self.elements {
            if el.pet().friend() == Some(name) {
                log::info!("{} lost their friend {}", el.name(), name);
                el.pet_mut().forget_friend();
            }
        }
        log::info!("Removed {name}");
        Some(removed)
    }

    /// Drop everyone and start counting from the beginning again.
    pub fn reset(&mut self) {
        self.elements.clear();
        self.ball = None;
        self.frame = 0;
        self.pet_counter = INITIAL_PET_COUNTER;
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.name() == name)
    }

    /// Click on a pet. `None` if there is no such pet, `Some(false)` if it ignored the click.
    pub fn swipe(&mut self, name: &str) -> Option<bool> {
        let index = self.index_of(name)?;
        Some(self.elements[index].swipe(&self.config))
    }

    /// Show the pet's greeting in its speech bubble and return it.
    pub fn say_hello(&mut self, name: &str) -> Option<String> {
        let index = self.index_of(name)?;
        let el = &mut self.elements[index];
        el.say_hello(&self.config);
        Some(el.pet().hello())
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    pub fn throw_ball(&mut self, ball: Ball) {
        log::info!("Ball thrown from ({:.0}, {:.0})", ball.pos.x, ball.pos.y);
        self.ball = Some(ball);
    }

    pub fn throw_random_ball(&mut self, rng: &mut fastrand::Rng) {
        let ball = Ball::throw_random(&self.config.viewport, &self.config.ball, rng);
        self.throw_ball(ball);
    }

    /// Advance every pet by one frame, in insertion order.
    pub fn tick(&mut self, rng: &mut fastrand::Rng) -> TickReport {
        self.frame += 1;
        let mut report = TickReport {
            frame: self.frame,
            ..TickReport::default()
        };

        let expired = match self.ball.as_mut() {
            Some(ball) => !ball.update(&self.config.viewport, &self.config.ball),
            None => false,
        };
        if expired {
            log::debug!("Ball rolled away");
            self.ball = None;
        }

        for i in 0..self.elements.len() {
            let stimuli = self.stimuli_for(i);
            let el = &mut self.elements[i];
            let outcome = el.pet_mut().next_frame(&stimuli, &self.config, rng);
            el.apply(&outcome);

            match outcome.event {
                Some(FrameEvent::CaughtBall) => {
                    if self.ball.take().is_some() {
                        log::info!("{} caught the ball", self.elements[i].name());
                        report.caught_ball = Some(self.elements[i].name().to_string());
                    }
                }
                Some(FrameEvent::Arrived) => {
                    if let Some(reunion) = self.settle_friend(i, rng) {
                        report.reunions.push(reunion);
                    }
                }
                Some(FrameEvent::Despawn) => {
                    report.despawned.push(self.elements[i].name().to_string());
                }
                None => {}
            }
        }

        for name in &report.despawned {
            self.remove(name);
        }
        report
    }

    fn stimuli_for(&self, index: usize) -> Stimuli {
        let friend = self.elements[index]
            .pet()
            .friend()
            .and_then(|name| self.locate(name))
            .map(|el| FriendView {
                pos: el.pet().position(),
                width: el.pet().width(),
                state: el.pet().state().kind,
            });
        Stimuli {
            friend,
            ball: self.ball.map(|b| b.pos),
        }
    }

    /// Pet `index` reached its friend: the friend stops to hang out as well.
    fn settle_friend(&mut self, index: usize, rng: &mut fastrand::Rng) -> Option<Friendship> {
        let chaser = self.elements[index].name().to_string();
        let friend_name = self.elements[index].pet().friend()?.to_string();
        let friend_index = self.index_of(&friend_name)?;

        let config = &self.config;
        let friend = self.elements[friend_index].pet_mut();
        let state = friend.state().kind;
        if friend.state().interruptible && !state.is_above_ground() && state != StateKind::IdleWithFriend {
            behavior::enter(friend, StateKind::IdleWithFriend, config, rng);
        }
        log::debug!("{chaser} caught up with {friend_name}");
        Some(Friendship {
            a: chaser,
            b: friend_name,
        })
    }

    /// Pair up unfriended pets that are close to each other.
    ///
    /// Checks every pair, so it is quadratic in the population. Panels hold tens
    /// of pets, not thousands.
    pub fn seek_new_friends(&mut self, rng: &mut fastrand::Rng) -> Vec<Friendship> {
        let mut formed = Vec::new();
        let count = self.elements.len();
        if count < 2 {
            return formed;
        }

        let viewport = self.config.viewport;
        for i in 0..count {
            for j in 0..count {
                if i == j {
                    continue;
                }
                let (me, them) = (self.elements[i].pet(), self.elements[j].pet());
                if !me.is_sociable(&viewport) {
                    break;
                }
                if !them.is_sociable(&viewport) || !me.kind().compatible_with(them.kind()) {
                    continue;
                }
                if me.center().distance(them.center()) >= self.config.friend_proximity {
                    continue;
                }

                let pair = Friendship {
                    a: me.name().to_string(),
                    b: them.name().to_string(),
                };
                log::info!("{} is now friends with {}", pair.a, pair.b);
                self.befriend(i, j, rng);
                formed.push(pair);
            }
        }
        formed
    }

    fn befriend(&mut self, a: usize, b: usize, rng: &mut fastrand::Rng) {
        let name_a = self.elements[a].name().to_string();
        let name_b = self.elements[b].name().to_string();
        let config = &self.config;

        let pet_a = self.elements[a].pet_mut();
        pet_a.make_friends_with(&name_b);
        behavior::enter(pet_a, StateKind::ChaseFriend, config, rng);

        let pet_b = self.elements[b].pet_mut();
        pet_b.make_friends_with(&name_a);
        behavior::enter(pet_b, StateKind::ChaseFriend, config, rng);
    }

    // -----------------------------------------------------------------------
    // Host-facing summaries
    // -----------------------------------------------------------------------

    /// Every pet says hello.
    pub fn roll_call(&self) -> Vec<String> {
        self.elements
            .iter()
            .map(|el| {
                let pet = el.pet();
                format!(
                    "{} {} ({} {}): {}",
                    pet.emoji(),
                    pet.display_name(),
                    pet.color(),
                    pet.kind(),
                    pet.hello()
                )
            })
            .collect()
    }

    /// One line per pet.
    pub fn describe(&self) -> String {
        self.elements
            .iter()
            .map(|el| {
                let pet = el.pet();
                format!("{} ({} {} {})", pet.display_name(), pet.size(), pet.color(), pet.kind())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    pub fn serialize(&self) -> PetPanelState {
        PetPanelState {
            pet_counter: self.pet_counter,
            pet_states: self.elements.iter().map(element_state).collect(),
        }
    }

    /// Rebuild a population, failing on anything that doesn't check out.
    pub fn restore(state: &PetPanelState, config: SimConfig) -> PetResult<Self> {
        let mut collection = Self::new(config);
        collection.pet_counter = state.pet_counter;

        for (index, s) in state.pet_states.iter().enumerate() {
            if s.name.trim().is_empty() {
                return Err(PetError::malformed(format!("pet #{index} has no name")));
            }
            if !(s.pos_x.is_finite() && s.pos_y.is_finite()) {
                return Err(PetError::malformed(format!("{} has no usable position", s.name)));
            }

            let mut spawn = PetSpawn::new(s.name.clone(), s.pet_size, s.pet_color)
                .at(s.pos_x, s.pos_y)
                .creation_index(s.creation_index);
            spawn.display_name = s.display_name.clone();

            let mut pet = Pet::new(s.pet_type, spawn, &collection.config);
            pet.state = BehaviorState::restored(s.behavior_state, &collection.config);
            pet.facing = s.facing;
            pet.age = s.age_frames;
            pet.friend = s.friend.clone();

            let mut element = PetElement::new(pet);
            element.set_left_offset(s.left_offset.clone());
            collection
                .push(element)
                .map_err(|e| PetError::malformed(e.to_string()))?;
        }

        collection.drop_one_sided_friendships();

        if let Some(highest) = collection.elements.iter().map(|el| el.pet().creation_index()).max() {
            if collection.pet_counter <= highest {
                log::debug!("Pet counter {} behind creation index {highest}", collection.pet_counter);
                collection.pet_counter = highest.saturating_add(1);
            }
        }
        Ok(collection)
    }

    /// Like `restore`, but a snapshot that doesn't check out gives an empty
    /// population instead of an error.
    pub fn deserialize(state: &PetPanelState, config: SimConfig) -> Self {
        match Self::restore(state, config.clone()) {
            Ok(restored) => {
                log::info!("Restored {} pets", restored.len());
                restored
            }
            Err(e) => {
                log::warn!("Discarding pet snapshot: {e}");
                Self::new(config)
            }
        }
    }

    fn drop_one_sided_friendships(&mut self) {
        let one_sided: Vec<usize> = (0..self.elements.len())
            .filter(|&i| {
                let pet = self.elements[i].pet();
                match pet.friend() {
                    Some(friend) => match self.locate(friend) {
                        Some(other) => other.pet().friend() != Some(pet.name()) || friend == pet.name(),
                        None => true,
                    },
                    None => false,
                }
            })
            .collect();
        for i in one_sided {
            log::debug!("Dropping one-sided friendship of {}", self.elements[i].name());
            self.elements[i].pet_mut().forget_friend();
        }
    }
}

fn element_state(el: &PetElement) -> PetElementState {
    let pet = el.pet();
    PetElementState {
        pet_type: pet.kind(),
        pet_color: pet.color(),
        pet_size: pet.size(),
        pos_x: pet.position().x,
        pos_y: pet.position().y,
        name: pet.name().to_string(),
        behavior_state: pet.state().kind,
        left_offset: el.container().left_offset.clone(),
        display_name: (pet.display_name() != pet.name()).then(|| pet.display_name().to_string()),
        facing: pet.facing(),
        friend: pet.friend().map(str::to_string),
        creation_index: pet.creation_index(),
        age_frames: pet.age(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::{PetColor, PetKind, PetSize};
    use glam::Vec2;

    fn element(kind: PetKind, name: &str, x: f32, config: &SimConfig) -> PetElement {
        let spawn = PetSpawn::new(name, PetSize::Medium, PetColor::Brown).at(x, 0.0);
        PetElement::new(Pet::new(kind, spawn, config))
    }

    fn collection(pets: &[(PetKind, &str, f32)]) -> PetCollection {
        let mut c = PetCollection::default();
        for &(kind, name, x) in pets {
            let el = element(kind, name, x, c.config());
            c.push(el).unwrap();
        }
        c
    }

    #[test]
    fn push_locate_remove() {
        let mut c = collection(&[(PetKind::Cat, "Tom", 10.0), (PetKind::Dog, "Rex", 300.0)]);
        assert_eq!(c.locate("Tom").unwrap().pet().kind(), PetKind::Cat);
        assert!(c.locate("missing").is_none());

        let removed = c.remove("Tom").unwrap();
        assert_eq!(removed.name(), "Tom");
        assert!(c.locate("Tom").is_none());
        assert!(c.remove("Tom").is_none());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut c = collection(&[(PetKind::Cat, "Tom", 10.0)]);
        let dup = element(PetKind::Dog, "Tom", 50.0, c.config());
        assert!(matches!(c.push(dup), Err(PetError::DuplicateName(n)) if n == "Tom"));
        assert_eq!(c.len(), 1);
        assert_eq!(c.locate("Tom").unwrap().pet().kind(), PetKind::Cat);
    }

    #[test]
    fn spawn_hands_out_creation_indices() {
        let mut c = PetCollection::default();
        let spawn = |name: &str| PetSpawn::new(name, PetSize::Small, PetColor::Black);
        assert_eq!(c.spawn("dog", spawn("a")).unwrap().pet().creation_index(), 1);
        assert_eq!(c.spawn("fox", spawn("b")).unwrap().pet().creation_index(), 2);
        assert!(c.spawn("dragon", spawn("c")).is_err());
        assert!(c.spawn("dog", spawn("a")).is_err());
        assert_eq!(c.pet_counter(), 3);
    }

    #[test]
    fn close_pets_become_mutual_friends() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut c = collection(&[
            (PetKind::Dog, "Rex", 0.0),
            (PetKind::Fox, "Ginger", 20.0),
            (PetKind::Cat, "Far", 600.0),
        ]);
        let formed = c.seek_new_friends(&mut rng);
        assert_eq!(formed, vec![Friendship { a: "Rex".into(), b: "Ginger".into() }]);

        assert_eq!(c.friend_of("Rex").unwrap().name(), "Ginger");
        assert_eq!(c.friend_of("Ginger").unwrap().name(), "Rex");
        assert!(c.friend_of("Far").is_none());
        for name in ["Rex", "Ginger"] {
            assert_eq!(c.locate(name).unwrap().pet().state().kind, StateKind::ChaseFriend);
        }

        assert!(c.seek_new_friends(&mut rng).is_empty());
    }

    #[test]
    fn rocks_make_no_friends() {
        let mut rng = fastrand::Rng::with_seed(2);
        let mut c = collection(&[(PetKind::Rocky, "Rock", 0.0), (PetKind::Dog, "Rex", 10.0)]);
        assert!(c.seek_new_friends(&mut rng).is_empty());
    }

    #[test]
    fn removing_a_pet_clears_its_friend() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut c = collection(&[(PetKind::Dog, "Rex", 0.0), (PetKind::Dog, "Fido", 10.0)]);
        c.seek_new_friends(&mut rng);
        c.remove("Fido");
        assert!(!c.locate("Rex").unwrap().pet().has_friend());
    }

    #[test]
    fn friends_meet_and_hang_out() {
        let mut rng = fastrand::Rng::with_seed(4);
        let mut c = collection(&[(PetKind::Dog, "Rex", 0.0), (PetKind::Dog, "Fido", 40.0)]);
        c.seek_new_friends(&mut rng);

        let mut met = false;
        for _ in 0..100 {
            let report = c.tick(&mut rng);
            if !report.reunions.is_empty() {
                met = true;
                break;
            }
        }
        assert!(met);
        for name in ["Rex", "Fido"] {
            assert_eq!(c.locate(name).unwrap().pet().state().kind, StateKind::IdleWithFriend);
        }
    }

    #[test]
    fn ball_is_caught_once() {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut c = collection(&[(PetKind::Dog, "Rex", 0.0), (PetKind::Rocky, "Rock", 400.0)]);
        let cfg = c.config().ball;
        c.throw_ball(Ball::throw(Vec2::new(200.0, cfg.radius), Vec2::ZERO, &cfg));

        let mut catcher = None;
        for _ in 0..500 {
            let report = c.tick(&mut rng);
            if report.caught_ball.is_some() {
                catcher = report.caught_ball;
                break;
            }
        }
        assert_eq!(catcher.as_deref(), Some("Rex"));
        assert!(c.ball().is_none());
        assert_eq!(c.locate("Rex").unwrap().pet().state().kind, StateKind::IdleWithBall);
    }

    #[test]
    fn dying_pets_leave_the_collection() {
        let cfg = SimConfig { lifespan_frames: Some(5), ..SimConfig::default() };
        let mut rng = fastrand::Rng::with_seed(6);
        let mut c = PetCollection::new(cfg);
        let el = element(PetKind::Snail, "Gary", 10.0, c.config());
        c.push(el).unwrap();

        let mut gone = Vec::new();
        for _ in 0..200 {
            gone.extend(c.tick(&mut rng).despawned);
        }
        assert_eq!(gone, ["Gary"]);
        assert!(c.is_empty());
    }

    #[test]
    fn motion_stays_bounded_for_a_crowd() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut c = PetCollection::default();
        for (i, kind) in PetKind::ALL.into_iter().enumerate() {
            let el = element(kind, &format!("pet{i}"), i as f32 * 45.0, c.config());
            c.push(el).unwrap();
        }
        let vp = c.config().viewport;
        for _ in 0..3000 {
            c.tick(&mut rng);
            c.seek_new_friends(&mut rng);
            for el in c.pets() {
                let p = el.pet();
                assert!(p.position().x >= 0.0 && p.position().x <= vp.max_x(p.width()));
                assert!(p.position().y >= vp.floor && p.position().y <= vp.max_y(p.height()));
                if let Some(friend) = p.friend() {
                    assert_eq!(c.locate(friend).unwrap().pet().friend(), Some(p.name()));
                }
            }
        }
    }

    #[test]
    fn snapshot_round_trip_keeps_order_and_identity() {
        let mut rng = fastrand::Rng::with_seed(8);
        let mut c = collection(&[
            (PetKind::Cat, "Tom", 10.0),
            (PetKind::Crab, "Ferris", 200.0),
            (PetKind::Horse, "Ed", 500.0),
        ]);
        for _ in 0..250 {
            c.tick(&mut rng);
        }

        let text = c.serialize().to_json().unwrap();
        let restored = PetCollection::deserialize(&PetPanelState::from_json(&text).unwrap(), SimConfig::default());

        assert_eq!(restored.len(), c.len());
        assert_eq!(restored.pet_counter(), c.pet_counter());
        for (a, b) in c.pets().iter().zip(restored.pets()) {
            let (a, b) = (a.pet(), b.pet());
            assert_eq!(a.name(), b.name());
            assert_eq!(a.kind(), b.kind());
            assert_eq!(a.color(), b.color());
            assert_eq!(a.size(), b.size());
            assert_eq!(a.position(), b.position());
            assert_eq!(a.state().kind, b.state().kind);
        }
        assert_eq!(restored.serialize(), c.serialize());
    }

    #[test]
    fn empty_snapshot_starts_counting_at_one() {
        let state = PetPanelState { pet_counter: 1, pet_states: Vec::new() };
        let mut c = PetCollection::deserialize(&state, SimConfig::default());
        assert!(c.is_empty());
        assert_eq!(c.next_creation_index(), 1);
    }

    #[test]
    fn bad_snapshots_give_an_empty_population() {
        let c = collection(&[(PetKind::Cat, "Tom", 10.0), (PetKind::Dog, "Rex", 90.0)]);

        let mut duplicate = c.serialize();
        duplicate.pet_states[1].name = "Tom".into();
        assert!(PetCollection::restore(&duplicate, SimConfig::default()).is_err());
        assert!(PetCollection::deserialize(&duplicate, SimConfig::default()).is_empty());

        let mut unnamed = c.serialize();
        unnamed.pet_states[0].name = " ".into();
        assert!(PetCollection::deserialize(&unnamed, SimConfig::default()).is_empty());

        let mut nowhere = c.serialize();
        nowhere.pet_states[0].pos_x = f32::NAN;
        assert!(PetCollection::deserialize(&nowhere, SimConfig::default()).is_empty());
    }

    #[test]
    fn one_sided_friendships_are_dropped_on_restore() {
        let c = collection(&[(PetKind::Cat, "Tom", 10.0), (PetKind::Dog, "Rex", 90.0)]);
        let mut state = c.serialize();
        state.pet_states[0].friend = Some("Rex".into());
        state.pet_states[1].friend = Some("Nobody".into());

        let restored = PetCollection::restore(&state, SimConfig::default()).unwrap();
        assert!(restored.pets().iter().all(|el| !el.pet().has_friend()));

        state.pet_states[1].friend = Some("Tom".into());
        let restored = PetCollection::restore(&state, SimConfig::default()).unwrap();
        assert_eq!(restored.friend_of("Tom").unwrap().name(), "Rex");
    }

    #[test]
    fn reset_forgets_everything() {
        let mut rng = fastrand::Rng::with_seed(9);
        let mut c = collection(&[(PetKind::Cat, "Tom", 10.0)]);
        c.next_creation_index();
        c.throw_random_ball(&mut rng);
        c.tick(&mut rng);
        c.reset();
        assert!(c.is_empty());
        assert!(c.ball().is_none());
        assert_eq!(c.frame(), 0);
        assert_eq!(c.pet_counter(), INITIAL_PET_COUNTER);
    }

    #[test]
    fn roll_call_and_listing_cover_every_pet() {
        let c = collection(&[(PetKind::Cat, "Tom", 10.0), (PetKind::Dog, "Rex", 90.0)]);
        let calls = c.roll_call();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].contains("Tom") && calls[1].contains("Rex"));
        assert_eq!(c.describe().lines().count(), 2);
    }
}
