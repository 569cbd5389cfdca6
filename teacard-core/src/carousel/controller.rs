//! Position controller: target resolution and the motion state machine.

use super::options::EdgePolicy;

/// Motion state of the track.
///
/// Every animated move gets a fresh generation. A transition completion is
/// only honored when it carries the generation of the live animation, so a
/// completion that arrives after the track was re-targeted is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Idle,
    Animating { generation: u64 },
    /// The transition finished; infinite-mode re-homing is running.
    Settling { generation: u64 },
}

#[derive(Debug, Clone)]
/// Current index, edge policy and motion state of the track.
pub struct PositionController {
    current: usize,
    generation: u64,
    motion: Motion,
    edge_policy: EdgePolicy,
}

impl PositionController {
    /// Starts idle at index 0.
    pub fn new(edge_policy: EdgePolicy) -> Self {
        Self {
            current: 0,
            generation: 0,
            motion: Motion::Idle,
            edge_policy,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Generation of the in-flight animation, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        match self.motion {
            Motion::Animating { generation } => Some(generation),
            _ => None,
        }
    }

    /// Redirects an out-of-range request according to the edge policy.
    /// Never fails.
    pub fn resolve_target(&self, requested: isize, slide_count: usize, visible: usize) -> usize {
        let last_page = slide_count.saturating_sub(visible);

        if requested < 0 {
            return match self.edge_policy {
                EdgePolicy::Wrap => last_page,
                EdgePolicy::Clamp => 0,
            };
        }

        let requested = requested as usize;
        match self.edge_policy {
            EdgePolicy::Wrap => {
                let beyond_end = requested > slide_count;
                let no_more_visible = self.current + visible >= slide_count;
                let forward = requested > self.current;
                if beyond_end || (no_more_visible && forward) {
                    0
                } else {
                    requested
                }
            }
            EdgePolicy::Clamp => requested.min(last_page),
        }
    }

    /// Moves to `index`. Returns the generation of the transition the host
    /// must report back, or `None` when no transition will run.
    pub fn commit(&mut self, index: usize, animate: bool) -> Option<u64> {
        let moved = index != self.current;
        self.current = index;

        if animate {
            if !moved {
                return self.pending_generation();
            }
            self.generation += 1;
            self.motion = Motion::Animating {
                generation: self.generation,
            };
            return Some(self.generation);
        }

        // An instant jump cancels whatever was animating.
        if let Motion::Animating { .. } = self.motion {
            self.generation += 1;
            self.motion = Motion::Idle;
        }
        None
    }

    /// Accepts a transition completion. Returns false for stale or
    /// unexpected completions.
    pub fn begin_settle(&mut self, generation: u64) -> bool {
        match self.motion {
            Motion::Animating { generation: live } if live == generation => {
                self.motion = Motion::Settling { generation };
                true
            }
            _ => false,
        }
    }

    /// Ends a settle started by [`Self::begin_settle`].
    pub fn finish_settle(&mut self) {
        if let Motion::Settling { .. } = self.motion {
            self.motion = Motion::Idle;
        }
    }
}
