//! Navigation controls and paged indicator buttons.

/// Prev/next control visibility. Controls are only ever hidden when loop
/// mode is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    loop_mode: bool,
    prev_hidden: bool,
    next_hidden: bool,
}

impl NavControls {
    /// Both controls start visible.
    pub fn new(loop_mode: bool) -> Self {
        Self {
            loop_mode,
            prev_hidden: false,
            next_hidden: false,
        }
    }

    /// Recomputes visibility after a move. Loop mode keeps both visible.
    pub fn sync(&mut self, index: usize, slide_count: usize, visible: usize) {
        if self.loop_mode {
            return;
        }
        self.prev_hidden = index == 0;
        // hidden once no slide exists at `index + visible`
        self.next_hidden = index + visible >= slide_count;
    }

    pub fn prev_hidden(&self) -> bool {
        self.prev_hidden
    }

    pub fn next_hidden(&self) -> bool {
        self.next_hidden
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One indicator button.
pub struct PagerButton {
    /// Extended index the button navigates to.
    pub target: usize,
    pub active: bool,
    pub hidden: bool,
}

/// One button per scroll-step start position among the real slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    buttons: Vec<PagerButton>,
    step: usize,
}

impl Pager {
    /// Builds buttons for starts `0..=real_count - visible` stepped by
    /// `step`. Returns `None` when there is no full page to point at.
    pub fn build(real_count: usize, visible: usize, step: usize, offset: usize) -> Option<Self> {
        if real_count == 0 || real_count < visible || step == 0 {
            return None;
        }
        let buttons = (0..=real_count - visible)
            .step_by(step)
            .map(|start| PagerButton {
                target: start + offset,
                active: false,
                hidden: false,
            })
            .collect();
        Some(Self { buttons, step })
    }

    /// Marks the bucket holding `real_index` as the only active button.
    /// Indices past the last bucket map to the last button.
    pub fn sync(&mut self, real_index: usize) {
        let Some(last) = self.buttons.len().checked_sub(1) else {
            return;
        };
        let bucket = (real_index / self.step).min(last);
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.active = i == bucket;
        }
    }

    /// Hides or reveals every button without removing any.
    pub fn set_hidden(&mut self, hidden: bool) {
        for button in &mut self.buttons {
            button.hidden = hidden;
        }
    }

    pub fn buttons(&self) -> &[PagerButton] {
        &self.buttons
    }

    /// Extended index behind `button`.
    pub fn target(&self, button: usize) -> Option<usize> {
        self.buttons.get(button).map(|b| b.target)
    }

    pub fn active_button(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.active)
    }

    /// Number of buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
