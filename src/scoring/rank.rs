use rand::Rng;

/// Pool size for the randomized selection policy.
pub const SAMPLE_POOL: usize = 20;
/// Records drawn from the pool.
pub const SAMPLE_TAKE: usize = 3;

/// Stable descending sort by score: records with equal scores keep their
/// corpus order.
pub fn sort_by_score<T>(scored: &mut [(f32, T)]) {
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
}

/// Top-K selection: at most `k` records, never more than available.
pub fn top_k<T>(mut scored: Vec<(f32, T)>, k: usize) -> Vec<(f32, T)> {
    sort_by_score(&mut scored);
    scored.truncate(k);
    scored
}

/// Sort, keep the best `SAMPLE_POOL` records, then draw `SAMPLE_TAKE`
/// distinct ones uniformly without replacement.
///
/// With fewer than `SAMPLE_TAKE` records available the whole pool is
/// returned: no padding, no error.
pub fn sample_top<T>(mut scored: Vec<(f32, T)>, rng: &mut impl Rng) -> Vec<(f32, T)> {
    sort_by_score(&mut scored);
    scored.truncate(SAMPLE_POOL);

    if scored.len() <= SAMPLE_TAKE {
        return scored;
    }

    let picked = rand::seq::index::sample(rng, scored.len(), SAMPLE_TAKE).into_vec();
    let mut slots: Vec<Option<(f32, T)>> = scored.into_iter().map(Some).collect();
    picked
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect()
}
