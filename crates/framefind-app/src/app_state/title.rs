//! Window title: reflects whether the current search has matches.

/// Format: "{base}" or "{base} (matches found)".
pub(super) fn window_title(base: &str, has_results: bool) -> String {
    if has_results {
        format!("{base} (matches found)")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_marks_matches() {
        assert_eq!(window_title("framefind", true), "framefind (matches found)");
    }

    #[test]
    fn title_without_matches_is_the_base() {
        assert_eq!(window_title("framefind", false), "framefind");
    }
}
