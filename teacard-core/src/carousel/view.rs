//! Pure rendering of carousel state.
//!
//! `CarouselView` is a plain snapshot of everything that affects output; the
//! element tree is derived from it and the slide list alone. Class names are
//! the stylesheet contract and must stay stable.

use crate::dom::Element;

pub const WRAPPER_CLASS: &str = "_carousel-wrapper";
pub const VIEWPORT_CLASS: &str = "_carousel-viewport";
pub const CAROUSEL_CLASS: &str = "_carousel";
pub const TRACK_CLASS: &str = "_carousel-track";
pub const SLIDE_CLASS: &str = "_carousel-slide";
pub const NEXT_CLASS: &str = "_carousel-next";
pub const PREV_CLASS: &str = "_carousel-prev";
pub const NEXT_HIDDEN_CLASS: &str = "_carousel-next-hidden";
pub const PREV_HIDDEN_CLASS: &str = "_carousel-prev-hidden";
pub const INDICATOR_CLASS: &str = "_carousel-slide-indicator";
pub const INDICATOR_BUTTON_CLASS: &str = "_carousel-slide-indicator-button";
pub const INDICATOR_ACTIVE_CLASS: &str = "_carousel-slide-indicator-button-active";
pub const INDICATOR_HIDDEN_CLASS: &str = "_carousel-slide-indicator-button-hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorView {
    pub active: bool,
    pub hidden: bool,
}

/// Render-relevant state at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub current_index: usize,
    pub real_index: usize,
    pub is_mobile: bool,
    pub slides_visible: usize,
    pub track_width_pct: f64,
    pub slide_width_pct: f64,
    pub translate_pct: f64,
    /// The last move was instant; the track must not animate to it.
    pub transition_suppressed: bool,
    pub slide_height_px: Option<f32>,
    pub prev_hidden: bool,
    pub next_hidden: bool,
    /// Empty when the indicator is disabled.
    pub indicators: Vec<IndicatorView>,
}

impl CarouselView {
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|i| i.active)
    }

    /// The `transform` value applied to the track.
    pub fn transform(&self) -> String {
        format!("translate3d({}, 0, 0)", format_pct(self.translate_pct))
    }
}

/// Builds the root element inserted into the host page.
pub fn render(view: &CarouselView, slides: &[Element]) -> Element {
    let mut track = Element::div([TRACK_CLASS])
        .with_style("width", format_pct(view.track_width_pct))
        .with_style("transform", view.transform());
    if view.transition_suppressed {
        track.set_style("transition", "none");
    }

    let slide_width = format_pct(view.slide_width_pct);
    for (index, slide) in slides.iter().enumerate() {
        let mut slide = slide.clone();
        slide.add_class(SLIDE_CLASS);
        slide.set_attr("data-slide", index.to_string());
        slide.set_style("width", slide_width.clone());
        if let (Some(height), Some(content)) = (view.slide_height_px, slide.first_child_mut()) {
            content.set_style("height", format!("{height}px"));
        }
        track.append(slide);
    }

    let viewport = Element::div([VIEWPORT_CLASS])
        .with_child(Element::div([CAROUSEL_CLASS]).with_child(track));

    let mut next = Element::div([NEXT_CLASS]);
    next.toggle_class(NEXT_HIDDEN_CLASS, view.next_hidden);
    let mut prev = Element::div([PREV_CLASS]);
    prev.toggle_class(PREV_HIDDEN_CLASS, view.prev_hidden);

    let mut wrapper = Element::div([WRAPPER_CLASS])
        .with_child(viewport)
        .with_child(next)
        .with_child(prev);

    if !view.indicators.is_empty() {
        let buttons = view.indicators.iter().enumerate().map(|(page, state)| {
            let mut button =
                Element::div([INDICATOR_BUTTON_CLASS]).with_attr("data-page", page.to_string());
            button.toggle_class(INDICATOR_ACTIVE_CLASS, state.active);
            button.toggle_class(INDICATOR_HIDDEN_CLASS, state.hidden);
            button
        });
        wrapper.append(Element::div([INDICATOR_CLASS]).with_children(buttons));
    }

    wrapper
}

/// Percentages rounded to four decimals, without a negative zero.
pub fn format_pct(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0 + 0.0;
    format!("{rounded}%")
}
