use anyhow::Result;

use super::{EstimatedHeight, Session};

pub(super) fn run(session: &Session, width: Option<u32>) -> Result<()> {
    let mut carousel = session.carousel(width)?;
    carousel.on_frame(&EstimatedHeight);

    tracing::info!(
        slides = carousel.real_count(),
        mobile = carousel.is_mobile(),
        "Rendering carousel"
    );
    println!("{}", carousel.render().to_html());
    Ok(())
}
