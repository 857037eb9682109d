use rand::Rng;

use crate::model::Question;

/// Returns a uniformly shuffled copy of `items`; the input is left untouched.
///
/// Fisher–Yates, walking from the last index down to 1 and swapping each slot
/// with a uniformly drawn index in `0..=i`. The inclusive upper bound is what
/// keeps every permutation equally likely.
#[must_use]
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copied = items.to_vec();
    for i in (1..copied.len()).rev() {
        let r = rng.random_range(0..=i);
        copied.swap(i, r);
    }
    copied
}

/// Builds the raw answer list for `question` in random order.
///
/// The correct answer can land anywhere, so callers must compare by text.
#[must_use]
pub fn build_choices<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    shuffle(&question.answers(), rng)
}
