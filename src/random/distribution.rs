use rand::Rng;

/// Picks an index into `weights` with probability proportional to
/// `weights[i] / total`. Implemented as a cumulative sum plus a single
/// uniform draw in `[0, total)`, then a linear scan for the bucket.
///
/// Negative entries count as zero weight. An empty slice, or one whose
/// total is not a positive finite number, yields `None`.
pub fn random_choice_from_distribution(weights: &[f32], rng: &mut impl Rng) -> Option<usize> {
    let total: f32 = weights.iter().copied().filter(|w| *w > 0.0).sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    let draw = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        if draw < cumulative {
            return Some(index);
        }
    }

    // Rounding in the cumulative sum can leave the draw on the far edge of
    // the last bucket; settle on the last positive weight.
    weights.iter().rposition(|&w| w > 0.0)
}
