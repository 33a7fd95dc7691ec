//! Score ranking with interchangeable sorting algorithms.
//!
//! All algorithms agree on the resulting score order. They differ only in how
//! participants with equal scores end up: [`SortAlgorithm::Default`] and
//! [`SortAlgorithm::Insertion`] keep their input order, while
//! [`SortAlgorithm::Selection`] leaves whatever its swaps produce.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::model::Participant;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Whether `a` must be placed strictly before `b`.
    fn precedes(self, a: u32, b: u32) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }

    fn compare(self, a: u32, b: u32) -> Ordering {
        match self {
            Direction::Ascending => a.cmp(&b),
            Direction::Descending => b.cmp(&a),
        }
    }
}

/// Sorting strategy used to rank participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    /// The standard library's stable sort.
    #[default]
    Default,
    /// Insertion sort; stable.
    Insertion,
    /// Selection sort; not stable.
    Selection,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Default,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
    ];

    /// Resolve an operator-supplied name. Unknown names select the default.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "insertion" => SortAlgorithm::Insertion,
            "selection" => SortAlgorithm::Selection,
            _ => SortAlgorithm::Default,
        }
    }

    /// Whether equal scores keep their input order.
    pub fn is_stable(self) -> bool {
        !matches!(self, SortAlgorithm::Selection)
    }

    /// Reorder `participants` in place by score.
    pub fn sort(self, participants: &mut [Participant], direction: Direction) {
        tracing::debug!(algorithm = %self, ?direction, len = participants.len(), "ranking");
        match self {
            SortAlgorithm::Default => {
                participants.sort_by(|a, b| direction.compare(a.score, b.score))
            }
            SortAlgorithm::Insertion => insertion_sort(participants, direction),
            SortAlgorithm::Selection => selection_sort(participants, direction),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Default => write!(f, "default"),
            SortAlgorithm::Insertion => write!(f, "insertion"),
            SortAlgorithm::Selection => write!(f, "selection"),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortAlgorithm::from_name(s))
    }
}

/// Shift each element left past every element it strictly precedes.
fn insertion_sort(participants: &mut [Participant], direction: Direction) {
    for i in 1..participants.len() {
        let key = participants[i].score;
        let mut j = i;
        while j > 0 && direction.precedes(key, participants[j - 1].score) {
            j -= 1;
        }
        participants[j..=i].rotate_right(1);
    }
}

/// Swap the best remaining element into each position in turn.
fn selection_sort(participants: &mut [Participant], direction: Direction) {
    let len = participants.len();
    for i in 0..len.saturating_sub(1) {
        let mut best = i;
        for j in i + 1..len {
            if direction.precedes(participants[j].score, participants[best].score) {
                best = j;
            }
        }
        participants.swap(i, best);
    }
}
