/// Running point total for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    points: u32,
    frozen: Option<u32>,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points. Only valid before the score is frozen.
    pub fn add(&mut self, points: u32) {
        debug_assert!(self.frozen.is_none(), "score changed after round end");
        if self.frozen.is_none() {
            self.points = self.points.saturating_add(points);
        }
    }

    /// Capture the final score. Later calls keep the first value.
    pub fn freeze(&mut self) -> u32 {
        *self.frozen.get_or_insert(self.points)
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// The frozen value, once the round has ended
    pub fn final_score(&self) -> Option<u32> {
        self.frozen
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }
}
