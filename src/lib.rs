//! Single-page portfolio: a hero introduction, a work-experience slider, an
//! about section and side navigation.
//!
//! The slider and the tagline strip are both [`carousel::Carousel`]s. The
//! slider is user-driven and debounced; the tagline strip auto-advances on a
//! timer. Everything else is rendering around their current item.

pub mod auto_advance;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod driver;
pub mod error;
pub mod headless;
pub mod input;
pub mod sections;
pub mod state;
pub mod text_carousel;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod visibility;

pub use carousel::Carousel;
pub use error::{CarouselError, ContentError};
