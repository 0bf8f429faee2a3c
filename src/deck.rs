use crate::error::DeckError;
use crate::scene::{render_code_scene, render_intro, CodeScene, IntroSlide, Presentation, RenderOptions};

#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Intro(IntroSlide),
    Code(CodeScene),
}

impl Scene {
    pub fn render(&self, opts: &RenderOptions) -> String {
        match self {
            Scene::Intro(slide) => render_intro(slide, opts),
            Scene::Code(scene) => render_code_scene(scene, opts),
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self {
            Scene::Intro(_) => "focus-card intro-layout",
            Scene::Code(_) => "focus-card",
        }
    }
}

/// Ordered scenes plus the index of the one on screen.
#[derive(Debug, Clone)]
pub struct Deck {
    scenes: Vec<Scene>,
    current: usize,
}

impl Deck {
    /// Intro slides first, then one code scene per unit.
    pub fn from_presentation(data: &Presentation) -> Self {
        let mut scenes: Vec<Scene> = data.intro.iter().cloned().map(Scene::Intro).collect();
        scenes.extend(data.units.iter().map(|u| Scene::Code(CodeScene::from_unit(u))));
        Self { scenes, current: 0 }
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Scene> {
        self.scenes.get(self.current)
    }

    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Move by `delta` scenes. Out-of-range targets leave the deck unchanged
    /// and return `false`.
    pub fn navigate(&mut self, delta: isize) -> bool {
        let Some(next) = self.current.checked_add_signed(delta) else {
            return false;
        };
        if next >= self.scenes.len() {
            return false;
        }
        tracing::debug!(from = self.current, to = next, "navigate");
        self.current = next;
        true
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), DeckError> {
        if index >= self.scenes.len() {
            return Err(DeckError::SceneOutOfRange {
                index,
                len: self.scenes.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Markup for the current scene. Each call starts from fresh parser
    /// state, so repeated renders are identical.
    pub fn render_current(&self, opts: &RenderOptions) -> Option<String> {
        self.current().map(|scene| scene.render(opts))
    }

    pub fn render_scene(&self, index: usize, opts: &RenderOptions) -> Result<String, DeckError> {
        self.get(index)
            .map(|scene| scene.render(opts))
            .ok_or(DeckError::SceneOutOfRange {
                index,
                len: self.scenes.len(),
            })
    }
}
