//! Layout engine: track and slide sizing plus deferred height normalization.

use crate::dom::Element;

/// Measures rendered slides. Implemented by the host, which is the only
/// party that knows post-layout geometry.
#[cfg_attr(test, mockall::automock)]
pub trait HeightProbe {
    /// Natural height of the slide at `index` (extended list), in px.
    fn natural_height(&self, index: usize, slide: &Element) -> f32;
}

/// Sizing derived from the slide count and the effective visible count.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    track_width_pct: f64,
    slide_width_pct: f64,
    uniform_height: Option<f32>,
    height_pass_pending: bool,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            track_width_pct: 0.0,
            slide_width_pct: 0.0,
            uniform_height: None,
            height_pass_pending: false,
        }
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes the track so exactly `visible` slides fill the viewport, and
    /// schedules a height pass for the next paint frame.
    pub fn apply(&mut self, slide_count: usize, visible: usize) {
        let visible = visible.max(1);
        if slide_count == 0 {
            self.track_width_pct = 0.0;
            self.slide_width_pct = 0.0;
            self.uniform_height = None;
            self.height_pass_pending = false;
            return;
        }

        let ratio = slide_count as f64 / visible as f64;
        self.track_width_pct = ratio * 100.0;
        self.slide_width_pct = (100.0 / visible as f64) / ratio;
        // Forced heights would poison the next measurement.
        self.uniform_height = None;
        self.height_pass_pending = true;

        tracing::trace!(
            slide_count,
            visible,
            track_width_pct = self.track_width_pct,
            "Layout applied"
        );
    }

    /// Track width as a percentage of the viewport.
    pub fn track_width_pct(&self) -> f64 {
        self.track_width_pct
    }

    /// Slide width as a percentage of the track.
    pub fn slide_width_pct(&self) -> f64 {
        self.slide_width_pct
    }

    /// Height forced onto every slide's content, once measured.
    pub fn uniform_height(&self) -> Option<f32> {
        self.uniform_height
    }

    /// Whether the next paint frame should measure heights.
    pub fn height_pass_pending(&self) -> bool {
        self.height_pass_pending
    }

    /// Measures every slide and records the tallest as the uniform height.
    /// Does nothing unless a pass is pending.
    pub fn run_height_pass(
        &mut self,
        slides: &[Element],
        probe: &dyn HeightProbe,
    ) -> Option<f32> {
        if !self.height_pass_pending {
            return self.uniform_height;
        }
        self.height_pass_pending = false;

        let max = slides
            .iter()
            .enumerate()
            .map(|(i, slide)| probe.natural_height(i, slide))
            .filter(|h| h.is_finite())
            .fold(None, |acc: Option<f32>, h| Some(acc.map_or(h, |m| m.max(h))));

        self.uniform_height = max;
        max
    }

    /// Horizontal translation (percent of track width) that brings `index`
    /// to the left edge of the viewport.
    pub fn translate_pct(index: usize, slide_count: usize) -> f64 {
        if slide_count == 0 {
            return 0.0;
        }
        index as f64 * -100.0 / slide_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::always;

    fn slides(n: usize) -> Vec<Element> {
        (0..n).map(|_| Element::div(["slide"])).collect()
    }

    #[test]
    fn three_visible_of_nine() {
        let mut layout = LayoutEngine::new();
        layout.apply(9, 3);
        assert!((layout.track_width_pct() - 300.0).abs() < 1e-9);
        assert!((layout.slide_width_pct() - 100.0 / 9.0).abs() < 1e-9);
        assert!(layout.height_pass_pending());
    }

    #[test]
    fn visible_slides_fill_the_viewport() {
        let mut layout = LayoutEngine::new();
        for (count, visible) in [(11, 3), (5, 1), (7, 2), (4, 4)] {
            layout.apply(count, visible);
            // slide width is relative to the track; scale back to the viewport
            let viewport_share = layout.slide_width_pct() * layout.track_width_pct() / 100.0;
            assert!((viewport_share * visible as f64 - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_track_has_no_height_pass() {
        let mut layout = LayoutEngine::new();
        layout.apply(0, 3);
        assert_eq!(layout.track_width_pct(), 0.0);
        assert!(!layout.height_pass_pending());
        assert_eq!(LayoutEngine::translate_pct(4, 0), 0.0);
    }

    #[test]
    fn height_pass_takes_the_tallest_slide() {
        let mut probe = MockHeightProbe::new();
        probe
            .expect_natural_height()
            .with(always(), always())
            .times(3)
            .returning(|i, _| [120.0, 340.5, 200.0][i]);

        let mut layout = LayoutEngine::new();
        layout.apply(3, 3);
        assert_eq!(layout.run_height_pass(&slides(3), &probe), Some(340.5));
        assert_eq!(layout.uniform_height(), Some(340.5));
        assert!(!layout.height_pass_pending());
    }

    #[test]
    fn height_pass_runs_once_per_layout() {
        let mut probe = MockHeightProbe::new();
        probe.expect_natural_height().times(2).return_const(50.0_f32);

        let mut layout = LayoutEngine::new();
        layout.apply(2, 1);
        layout.run_height_pass(&slides(2), &probe);
        // second frame without relayout must not measure again
        assert_eq!(layout.run_height_pass(&slides(2), &probe), Some(50.0));
    }

    #[test]
    fn relayout_clears_forced_height() {
        let mut probe = MockHeightProbe::new();
        probe.expect_natural_height().return_const(80.0_f32);

        let mut layout = LayoutEngine::new();
        layout.apply(2, 2);
        layout.run_height_pass(&slides(2), &probe);
        layout.apply(2, 1);
        assert_eq!(layout.uniform_height(), None);
        assert!(layout.height_pass_pending());
    }
}
