use crate::types::scoring::Score;

pub const NEUTRAL_SCORE: Score = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::HigherIsBetter => Self::LowerIsBetter,
            Self::LowerIsBetter => Self::HigherIsBetter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut iter = values.iter().copied();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        });
        Some(Self { min, max })
    }

    pub fn scale(&self, value: f64, direction: Direction) -> Score {
        let spread = self.max - self.min;
        if spread == 0.0 {
            return NEUTRAL_SCORE;
        }
        let ratio = match direction {
            Direction::HigherIsBetter => (value - self.min) / spread,
            Direction::LowerIsBetter => (self.max - value) / spread,
        };
        ratio * 99.0 + 1.0
    }
}

/// Maps `value` onto 1..=100 relative to `all_values`.
pub fn normalize(value: f64, all_values: &[f64], direction: Direction) -> Score {
    match Bounds::of(all_values) {
        Some(bounds) => bounds.scale(value, direction),
        None => NEUTRAL_SCORE,
    }
}
