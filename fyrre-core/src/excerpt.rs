//! Excerpt cleaning.
//!
//! The backend's auto-excerpts arrive as markup, with periods escaped as
//! `&#46;` and a trailing ellipsis left over from truncation.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));
static TRAILING_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3,}$").expect("ellipsis pattern"));

const ESCAPED_PERIOD: &str = "&#46;";

/// Turn a raw excerpt into display text.
///
/// Strips tags, decodes `&#46;`, then removes the one trailing run of three
/// or more periods. Whitespace is left alone, so a run followed by a newline
/// stays. Idempotent: the removed run is maximal, so the result never ends
/// in three periods.
///
/// ```
/// use fyrre_core::clean_excerpt;
///
/// assert_eq!(
///     clean_excerpt("A&#46;&#46;&#46; story continues....."),
///     "A... story continues"
/// );
/// ```
pub fn clean_excerpt(raw: &str) -> String {
    let text = TAG.replace_all(raw, "");
    let text = text.replace(ESCAPED_PERIOD, ".");
    TRAILING_ELLIPSIS.replace(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_periods_and_strips_trailing_ellipsis() {
        assert_eq!(
            clean_excerpt("A&#46;&#46;&#46; story continues....."),
            "A... story continues"
        );
    }

    #[test]
    fn strips_markup() {
        assert_eq!(
            clean_excerpt("<p>Berlin&#8217;s <em>new</em> galleries</p>"),
            "Berlin&#8217;s new galleries"
        );
    }

    #[test]
    fn keeps_inner_ellipsis_and_short_runs() {
        assert_eq!(clean_excerpt("Wait... what.."), "Wait... what..");
    }

    #[test]
    fn trailing_ellipsis_inside_paragraph_is_removed() {
        assert_eq!(clean_excerpt("<p>The night was long&#46;&#46;&#46;</p>"), "The night was long");
    }

    #[test]
    fn only_the_last_run_is_removed() {
        assert_eq!(clean_excerpt("He said wait... ....."), "He said wait... ");
        assert_eq!(clean_excerpt("He said wait... "), "He said wait... ");
    }

    #[test]
    fn whitespace_after_the_run_keeps_it() {
        assert_eq!(clean_excerpt("<p>Long night&#46;&#46;&#46;</p>\n"), "Long night...\n");
    }

    #[test]
    fn only_periods_clean_to_empty() {
        assert_eq!(clean_excerpt("....."), "");
        assert_eq!(clean_excerpt(""), "");
    }

    #[test]
    fn bare_angle_brackets_survive() {
        assert_eq!(clean_excerpt("1 <> 2 < 3"), "1 <> 2 < 3");
    }

    #[test]
    fn idempotent_on_awkward_inputs() {
        let inputs = [
            "A&#46;&#46;&#46; story continues.....",
            "a... ....",
            "a.. ...",
            "<<b>a>",
            "&#4<i>6;",
            "&#&#46;46;",
            "text .... \n ...",
            "   ...   ",
            "<p>one</p><p>two.....</p>",
            "no change",
        ];
        for input in inputs {
            let once = clean_excerpt(input);
            assert_eq!(clean_excerpt(&once), once, "not idempotent for {input:?}");
        }
    }
}
