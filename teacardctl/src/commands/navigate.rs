use anyhow::Result;
use teacard_core::Carousel;
use teacard_core::carousel::Motion;

use super::{EstimatedHeight, Session};
use crate::script::Step;

pub(super) fn run(session: &Session, steps: &[Step], width: Option<u32>) -> Result<()> {
    let mut carousel = session.carousel(width)?;
    println!("{}", state_line("init", &carousel));

    for step in steps {
        match *step {
            Step::Next => carousel.next(),
            Step::Prev => carousel.prev(),
            Step::GoTo(index) => carousel.go_to(index, true),
            Step::Settle => match carousel.pending_transition() {
                Some(generation) => {
                    carousel.transition_end(generation);
                }
                None => tracing::debug!("Nothing to settle"),
            },
            Step::Resize(width) => {
                carousel.resize(width);
            }
            Step::Frame => {
                carousel.on_frame(&EstimatedHeight);
            }
        }
        println!("{}", state_line(&step.to_string(), &carousel));
    }
    Ok(())
}

fn state_line(label: &str, carousel: &Carousel) -> String {
    let view = carousel.view();
    let motion = match carousel.motion() {
        Motion::Idle => "idle".to_string(),
        Motion::Animating { generation } => format!("animating({generation})"),
        Motion::Settling { generation } => format!("settling({generation})"),
    };
    let active = view
        .active_indicator()
        .map_or_else(|| "-".to_string(), |i| i.to_string());
    let height = view
        .slide_height_px
        .map_or_else(|| "-".to_string(), |h| format!("{h}px"));

    format!(
        "{label}: index={} real={} motion={motion} prev_hidden={} next_hidden={} active={active} mobile={} height={height}",
        view.current_index, view.real_index, view.prev_hidden, view.next_hidden, view.is_mobile,
    )
}
