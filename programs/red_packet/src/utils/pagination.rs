/// Returns the window `[offset, offset + limit)` of `items`, with `limit` capped at `max_limit`
///
/// Out-of-range offsets yield an empty slice.
pub fn page<T>(items: &[T], offset: u32, limit: u32, max_limit: u32) -> &[T] {
    let start = (offset as usize).min(items.len());
    let len = limit.min(max_limit) as usize;
    let end = start.saturating_add(len).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page(&items, 0, 2, 10), &[1, 2]);
        assert_eq!(page(&items, 3, 10, 10), &[4, 5]);
        assert_eq!(page(&items, 1, 10, 3), &[2, 3, 4]);
        assert!(page(&items, 9, 2, 10).is_empty());
        assert!(page(&items, 0, 0, 10).is_empty());
    }
}
