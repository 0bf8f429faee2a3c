//! Slide decks of annotated, syntax-highlighted Python walkthroughs.
//!
//! [`highlight`] colors one line at a time while carrying open triple-quoted
//! strings across lines; [`scene`] turns a unit's code and annotation steps
//! into line markup; [`deck`] orders scenes and [`page`] assembles them into
//! a standalone document.

pub mod deck;
pub mod error;
pub mod highlight;
pub mod page;
pub mod scene;

pub use deck::{Deck, Scene};
pub use error::DeckError;
pub use highlight::{highlight_line, ParserState};
pub use scene::{render_code_scene, CodeScene, Presentation, RenderOptions};
