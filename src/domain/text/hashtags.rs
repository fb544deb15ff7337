use crate::domain::model::Hashtag;

/// Drop the first and the last character.
fn strip_ends(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Split one `['tag1', 'tag2']` cell into its tags.
///
/// The cell is not validated: brackets and quotes are removed by position, so
/// a malformed cell yields mangled tags instead of an error.
pub fn parse_hashtag_cell(cell: &str) -> Vec<Hashtag> {
    let inner = strip_ends(cell);
    if inner.is_empty() {
        return Vec::new();
    }
    inner
        .split(',')
        .map(|piece| Hashtag::from(strip_ends(piece.trim())))
        .collect()
}

/// Flatten the hashtag cells of many rows, keeping row order.
pub fn extract_hashtags<'a>(cells: impl IntoIterator<Item = &'a str>) -> Vec<Hashtag> {
    cells.into_iter().flat_map(parse_hashtag_cell).collect()
}
