use crate::types::scoring::ScoredEntity;

pub trait Ranked {
    fn ranking_score(&self) -> f64;
    fn set_rank(&mut self, rank: usize);
}

impl Ranked for ScoredEntity {
    fn ranking_score(&self) -> f64 {
        self.composite
    }

    fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }
}

/// Stable sort by score, highest first, then `rank = position + 1`.
pub fn rank_descending<T: Ranked>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));
    for (index, item) in items.iter_mut().enumerate() {
        item.set_rank(index + 1);
    }
    items
}
