//! Domain entities.

mod deck;
mod deck_config;
mod slide;
mod visit;

pub use deck::Deck;
pub use deck_config::{
    DEFAULT_COMPANY_NAME, DEFAULT_COURSE_TITLE, DEFAULT_INSTRUCTOR_NAME, DeckConfig,
    DeckConfigUpdate,
};
pub use slide::{Alignment, Card, CardLine, ContentBlock, Kpi, LabeledText, Slide};
pub use visit::{RevealStep, SlideEntry, VisitToken};
