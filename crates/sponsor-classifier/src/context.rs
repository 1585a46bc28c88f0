/// The slice of `text` reaching `radius` characters before `start` and after
/// `end`, clamped to the text.
///
/// Offsets are bytes (as regex matches report them); the radius counts
/// characters, so the window never splits a code point.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let start = floor_char_boundary(text, start.min(text.len()));
    let end = floor_char_boundary(text, end.clamp(start, text.len()));

    let window_start = if radius == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map_or(0, |(i, _)| i)
    };
    let window_end = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);

    &text[window_start..window_end]
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_clamped_to_text() {
        let text = "abc MATCH def";
        assert_eq!(context_window(text, 4, 9, 200), text);
    }

    #[test]
    fn window_extends_radius_each_side() {
        let text = "0123456789MATCH0123456789";
        assert_eq!(context_window(text, 10, 15, 3), "789MATCH012");
    }

    #[test]
    fn zero_radius_is_the_match() {
        let text = "xxMATCHxx";
        assert_eq!(context_window(text, 2, 7, 0), "MATCH");
    }

    #[test]
    fn radius_counts_characters() {
        let text = "ééééMATCHéééé";
        let start = text.find("MATCH").unwrap();
        let end = start + "MATCH".len();
        assert_eq!(context_window(text, start, end, 2), "ééMATCHéé");
    }

    #[test]
    fn out_of_range_offsets_do_not_panic() {
        let text = "short";
        assert_eq!(context_window(text, 50, 60, 2), "rt");
        assert_eq!(context_window("", 0, 0, 200), "");
        // Mid-code-point offsets are floored to a boundary.
        assert_eq!(context_window("é", 1, 1, 0), "");
    }
}
