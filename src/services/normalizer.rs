/// Fixes a candidate list to exactly `target_len` entries.
///
/// Pure function: empty and whitespace-only entries are dropped, the result is
/// truncated to `target_len`, and any remaining slots are filled with
/// synthetic `"Recommendation {n}"` entries where `n` is the 1-based position
/// being filled. Surviving entries keep their relative order, so normalizing
/// an already-normalized list is a no-op.
pub fn normalize(candidates: Vec<String>, target_len: usize) -> Vec<String> {
    let mut items: Vec<String> = candidates
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .take(target_len)
        .collect();

    while items.len() < target_len {
        items.push(format!("Recommendation {}", items.len() + 1));
    }

    items
}
