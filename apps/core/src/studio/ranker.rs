//! Descending ranking of scored candidates.

/// Anything that carries an integer ranking score
pub trait Scored {
    fn rank_score(&self) -> u32;
}

/// Sort descending by score and keep at most `limit` items.
///
/// The sort is stable: candidates with equal scores keep their input order.
pub fn rank<T: Scored>(items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    rank_by(items, limit, |item| item.rank_score())
}

/// [`rank`] with an explicit key function.
pub fn rank_by<T, F>(mut items: Vec<T>, limit: Option<usize>, key: F) -> Vec<T>
where
    F: Fn(&T) -> u32,
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}
