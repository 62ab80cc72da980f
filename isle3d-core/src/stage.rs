/// Rotation-to-stage lookup
use std::f64::consts::TAU;
use std::fmt;

/// Landmark of the island currently facing the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    One,
    Two,
    Three,
    Four,
}

impl Stage {
    /// Stage number as shown by the surrounding UI (1-4)
    pub fn number(self) -> u8 {
        match self {
            Stage::One => 1,
            Stage::Two => 2,
            Stage::Three => 3,
            Stage::Four => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Stage::One),
            2 => Some(Stage::Two),
            3 => Some(Stage::Three),
            4 => Some(Stage::Four),
            _ => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stage {}", self.number())
    }
}

/// Inclusive angular window `[start, end]` in normalized radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageWindow {
    pub start: f64,
    pub end: f64,
    pub stage: Stage,
}

impl StageWindow {
    pub fn contains(&self, normalized: f64) -> bool {
        normalized >= self.start && normalized <= self.end
    }
}

/// Windows in evaluation order; the first match wins.
/// Hand-fit to the island model, keep the literals as they are.
pub const STAGE_WINDOWS: [StageWindow; 4] = [
    StageWindow { start: 5.45, end: 5.85, stage: Stage::Four },
    StageWindow { start: 0.85, end: 1.3, stage: Stage::Three },
    StageWindow { start: 2.4, end: 2.6, stage: Stage::Two },
    StageWindow { start: 4.25, end: 4.75, stage: Stage::One },
];

/// Reduce an unbounded angle into `[0, 2π)`
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

/// Classify an unbounded angle. `None` when no window matches.
pub fn classify(angle: f64) -> Option<Stage> {
    classify_normalized(normalize_angle(angle))
}

pub fn classify_normalized(normalized: f64) -> Option<Stage> {
    STAGE_WINDOWS
        .iter()
        .find(|window| window.contains(normalized))
        .map(|window| window.stage)
}
