//! # teacard core
//!
//! Headless card carousel engine plus the record-backed slide source that
//! feeds it.
//!
//! - [`carousel`]: position, layout, infinite wrapping, indicators and
//!   breakpoint handling. Rendering is a pure function of engine state.
//! - [`cards`]: builds one slide per stored record from a field map.
//! - [`storage`]: raw key/value stores and the record helpers on top.
//! - [`actions`]: edit/delete actions delegated from card buttons.
//! - [`dom`]: the small element tree everything renders into.
//!
//! ```
//! use teacard_core::carousel::{Carousel, CarouselOptions};
//! use teacard_core::dom::Element;
//!
//! let slides = (0..5).map(|i| Element::div(["slide"]).with_text(i.to_string())).collect();
//! let mut carousel = Carousel::new(slides, CarouselOptions::default()).unwrap();
//! assert_eq!(carousel.slide_count(), 11);
//! carousel.next();
//! assert_eq!(carousel.real_index(), 1);
//! ```

#![allow(missing_docs)]

pub mod actions;
pub mod cards;
pub mod carousel;
pub mod dom;
pub mod error;
pub mod storage;

pub use carousel::{Carousel, CarouselOptions, EdgePolicy, Navigation};
pub use dom::Element;
pub use error::{CarouselError, Error, Result, StoreError};
