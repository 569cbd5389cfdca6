//! Resize responder: tracks which side of the mobile breakpoint we are on.

/// Viewport width threshold separating mobile from desktop layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    width: u32,
}

impl Breakpoint {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// True strictly below the threshold.
    pub fn is_mobile(&self, viewport_width: u32) -> bool {
        viewport_width < self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Remembers the last mobile flag so only crossings are reported.
pub struct ResizeResponder {
    breakpoint: Breakpoint,
    is_mobile: bool,
}

impl ResizeResponder {
    /// Starts on the desktop side.
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            is_mobile: false,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Records a new viewport width. Returns the new mobile flag only when
    /// the breakpoint was crossed.
    pub fn observe(&mut self, viewport_width: u32) -> Option<bool> {
        let mobile = self.breakpoint.is_mobile(viewport_width);
        if mobile == self.is_mobile {
            return None;
        }
        self.is_mobile = mobile;
        tracing::debug!(viewport_width, mobile, "Crossed carousel breakpoint");
        Some(mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_crossings() {
        let mut responder = ResizeResponder::new(Breakpoint::new(1200));
        assert_eq!(responder.observe(1400), None);
        assert_eq!(responder.observe(1199), Some(true));
        for width in (800..1199).rev() {
            assert_eq!(responder.observe(width), None);
        }
        assert_eq!(responder.observe(1200), Some(false));
        assert!(!responder.is_mobile());
    }
}
