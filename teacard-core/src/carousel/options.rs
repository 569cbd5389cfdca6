//! Carousel configuration and construction-time validation.

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Viewport width (px) below which the carousel switches to mobile layout.
pub const DEFAULT_BREAKPOINT: u32 = 1200;

/// What `go_to` does with requests that fall outside the slide range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Negative targets jump to the last full page; forward overflow, or a
    /// forward move from the last page, wraps to the first slide.
    #[default]
    Wrap,
    /// Negative targets stop at the first slide; forward overflow stops at
    /// the last full page.
    Clamp,
}

/// Options fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Step size for `next`/`prev`.
    #[serde(alias = "slides_to_scroll")]
    pub slides_to_scroll: usize,
    /// Number of slides shown at once.
    #[serde(alias = "slides_visible")]
    pub slides_visible: usize,
    /// Keep both navigation controls visible at the ends of the track.
    #[serde(rename = "loop", alias = "loop_mode")]
    pub loop_mode: bool,
    /// Fake seamless wraparound with boundary clones.
    pub infinite: bool,
    /// Build the paged indicator buttons.
    #[serde(alias = "slide_indicator")]
    pub slide_indicator: bool,
    /// Mobile breakpoint in px.
    pub breakpoint: u32,
    #[serde(alias = "edge_policy")]
    pub edge_policy: EdgePolicy,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            slides_visible: 3,
            loop_mode: false,
            infinite: true,
            slide_indicator: true,
            breakpoint: DEFAULT_BREAKPOINT,
            edge_policy: EdgePolicy::Wrap,
        }
    }
}

impl CarouselOptions {
    pub fn with_slides_to_scroll(mut self, n: usize) -> Self {
        self.slides_to_scroll = n;
        self
    }

    pub fn with_slides_visible(mut self, n: usize) -> Self {
        self.slides_visible = n;
        self
    }

    pub fn with_loop(mut self, on: bool) -> Self {
        self.loop_mode = on;
        self
    }

    pub fn with_infinite(mut self, on: bool) -> Self {
        self.infinite = on;
        self
    }

    pub fn with_slide_indicator(mut self, on: bool) -> Self {
        self.slide_indicator = on;
        self
    }

    pub fn with_breakpoint(mut self, px: u32) -> Self {
        self.breakpoint = px;
        self
    }

    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Number of clones placed on each side of the track in infinite mode.
    pub fn clone_offset(&self) -> usize {
        if self.infinite {
            self.slides_visible + self.slides_to_scroll - 1
        } else {
            0
        }
    }

    /// Rejects option combinations that can never produce a working carousel.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.loop_mode && self.infinite {
            return Err(CarouselError::ConflictingModes);
        }
        if self.slides_visible == 0 {
            return Err(CarouselError::InvalidOption {
                name: "slidesVisible",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.slides_to_scroll == 0 {
            return Err(CarouselError::InvalidOption {
                name: "slidesToScroll",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Validates and then downgrades wrapping modes that are undefined for
    /// `real_count` slides.
    pub fn resolve(mut self, real_count: usize) -> Result<Self, CarouselError> {
        self.validate()?;

        let fits_viewport = if self.infinite {
            real_count < self.slides_visible
        } else {
            real_count <= self.slides_visible
        };

        if fits_viewport && (self.loop_mode || self.infinite || self.slide_indicator) {
            tracing::info!(
                real_count,
                slides_visible = self.slides_visible,
                "Too few slides to page through; disabling loop, infinite and indicator"
            );
            self.loop_mode = false;
            self.infinite = false;
            self.slide_indicator = false;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let o = CarouselOptions::default();
        assert_eq!(o.slides_to_scroll, 1);
        assert_eq!(o.slides_visible, 3);
        assert!(!o.loop_mode);
        assert!(o.infinite);
        assert!(o.slide_indicator);
        assert_eq!(o.breakpoint, 1200);
        assert_eq!(o.edge_policy, EdgePolicy::Wrap);
    }

    #[test]
    fn loop_and_infinite_conflict() {
        let o = CarouselOptions::default().with_loop(true).with_infinite(true);
        assert_eq!(o.validate(), Err(CarouselError::ConflictingModes));
        assert_eq!(o.resolve(10), Err(CarouselError::ConflictingModes));
    }

    #[test]
    fn zero_counts_are_rejected() {
        let o = CarouselOptions::default().with_slides_visible(0);
        assert!(matches!(
            o.validate(),
            Err(CarouselError::InvalidOption { name: "slidesVisible", .. })
        ));
        let o = CarouselOptions::default().with_slides_to_scroll(0);
        assert!(matches!(
            o.validate(),
            Err(CarouselError::InvalidOption { name: "slidesToScroll", .. })
        ));
    }

    #[test]
    fn infinite_downgrade_threshold_is_one_below_visible() {
        let o = CarouselOptions::default();
        let kept = o.clone().resolve(3).expect("valid");
        assert!(kept.infinite);

        let downgraded = o.resolve(2).expect("valid");
        assert!(!downgraded.infinite);
        assert!(!downgraded.slide_indicator);
    }

    #[test]
    fn loop_downgrade_threshold_is_visible_count() {
        let o = CarouselOptions::default().with_infinite(false).with_loop(true);
        assert!(o.clone().resolve(4).expect("valid").loop_mode);

        let downgraded = o.resolve(3).expect("valid");
        assert!(!downgraded.loop_mode);
        assert!(!downgraded.slide_indicator);
    }

    #[test]
    fn deserializes_camel_case_and_snake_case() {
        let camel: CarouselOptions = serde_json::from_str(
            r#"{"slidesVisible": 2, "slidesToScroll": 2, "loop": true, "infinite": false}"#,
        )
        .expect("camel");
        assert_eq!(camel.slides_visible, 2);
        assert_eq!(camel.slides_to_scroll, 2);
        assert!(camel.loop_mode);
        assert!(camel.slide_indicator);

        let snake: CarouselOptions = serde_json::from_str(
            r#"{"slides_visible": 4, "edge_policy": "clamp"}"#,
        )
        .expect("snake");
        assert_eq!(snake.slides_visible, 4);
        assert_eq!(snake.edge_policy, EdgePolicy::Clamp);
        assert!(snake.infinite);
    }
}
