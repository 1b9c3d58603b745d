//! A pet plus the logical anchors a renderer attaches its sprite, box and speech bubble to.

use crate::behavior::FrameOutcome;
use crate::config::SimConfig;
use crate::pet::animation::SpriteFrame;
use crate::pet::Pet;

/// Where and how the pet sprite is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnchor {
    pub sprite: SpriteFrame,
    /// Asset path of the sprite strip, relative to the host's media root.
    pub src: String,
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub opacity: f32,
    pub visible: bool,
}

/// Box the sprite and bubble sit in. `left_offset` is an opaque style value for the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerAnchor {
    pub left_offset: String,
    pub bottom: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechAnchor {
    pub text: String,
    pub visible: bool,
    /// Frames until the bubble hides itself.
    frames_left: u32,
}

impl SpeechAnchor {
    pub fn say(&mut self, text: impl Into<String>, frames: u32) {
        self.text = text.into();
        self.visible = true;
        self.frames_left = frames;
    }

    fn tick(&mut self) {
        if !self.visible {
            return;
        }
        self.frames_left = self.frames_left.saturating_sub(1);
        if self.frames_left == 0 {
            self.visible = false;
        }
    }
}

#[derive(Debug, Clone)]
pub struct PetElement {
    pet: Pet,
    image: ImageAnchor,
    container: ContainerAnchor,
    speech: SpeechAnchor,
}

impl PetElement {
    pub fn new(pet: Pet) -> Self {
        let sprite = SpriteFrame::new(pet.state().kind, 0, pet.facing());
        let pos = pet.position();
        let mut element = Self {
            image: ImageAnchor {
                sprite,
                src: String::new(),
                left: pos.x,
                bottom: pos.y,
                width: pet.width(),
                opacity: pet.opacity(),
                visible: pet.is_visible(),
            },
            container: ContainerAnchor {
                left_offset: left_offset(pos.x),
                bottom: pos.y,
            },
            speech: SpeechAnchor::default(),
            pet,
        };
        element.image.src = sprite_src(&element.pet, &sprite);
        element
    }

    pub fn name(&self) -> &str {
        self.pet.name()
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn pet_mut(&mut self) -> &mut Pet {
        &mut self.pet
    }

    pub fn image(&self) -> &ImageAnchor {
        &self.image
    }

    pub fn container(&self) -> &ContainerAnchor {
        &self.container
    }

    pub fn speech(&self) -> &SpeechAnchor {
        &self.speech
    }

    /// Swipe and say hello. Returns false if the pet can't swipe right now.
    pub fn swipe(&mut self, config: &SimConfig) -> bool {
        if !self.pet.swipe(config) {
            return false;
        }
        self.say_hello(config);
        let sprite = SpriteFrame::new(self.pet.state().kind, 0, self.pet.facing());
        self.sync(&sprite);
        true
    }

    pub fn say_hello(&mut self, config: &SimConfig) {
        let text = self.pet.hello();
        self.speech.say(text, config.speech_frames);
    }

    pub fn say(&mut self, text: impl Into<String>, config: &SimConfig) {
        self.speech.say(text, config.speech_frames);
    }

    /// Copy the pet's new frame onto the anchors.
    pub fn apply(&mut self, outcome: &FrameOutcome) {
        self.sync(&outcome.sprite);
        self.speech.tick();
    }

    /// Keep a restored left offset until the first frame overwrites it.
    pub(crate) fn set_left_offset(&mut self, left_offset: String) {
        self.container.left_offset = left_offset;
    }

    fn sync(&mut self, sprite: &SpriteFrame) {
        let pos = self.pet.position();
        if self.image.sprite.label != sprite.label {
            self.image.src = sprite_src(&self.pet, sprite);
        }
        self.image.sprite = *sprite;
        self.image.left = pos.x;
        self.image.bottom = pos.y;
        self.image.opacity = self.pet.opacity();
        self.image.visible = self.pet.is_visible();
        self.container.left_offset = left_offset(pos.x);
        self.container.bottom = pos.y;
    }
}

fn left_offset(x: f32) -> String {
    format!("{}px", x.round())
}

fn sprite_src(pet: &Pet, sprite: &SpriteFrame) -> String {
    format!("{}/{}_{}_8fps.gif", pet.kind(), pet.color(), sprite.label)
}
