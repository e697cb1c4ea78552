use serde::{Deserialize, Serialize};

/// A spot in the arena that may host a task area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateLocation {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

const fn at(x: f64, y: f64) -> CandidateLocation {
    CandidateLocation {
        x,
        y,
        radius: 0.05,
    }
}

/// 4x4 grid over the arena, x outer and y inner, both descending.
pub const CANDIDATE_LOCATIONS: [CandidateLocation; 16] = [
    at(0.75, 0.75),
    at(0.75, 0.25),
    at(0.75, -0.25),
    at(0.75, -0.75),
    at(0.25, 0.75),
    at(0.25, 0.25),
    at(0.25, -0.25),
    at(0.25, -0.75),
    at(-0.25, 0.75),
    at(-0.25, 0.25),
    at(-0.25, -0.25),
    at(-0.25, -0.75),
    at(-0.75, 0.75),
    at(-0.75, 0.25),
    at(-0.75, -0.25),
    at(-0.75, -0.75),
];

impl CandidateLocation {
    /// Position and radius attributes as they appear on an `<AreaN>` node.
    pub fn attributes(&self) -> String {
        format!(
            " position=\"{},{}\" radius=\"{}\"",
            self.x, self.y, self.radius
        )
    }
}
