//! Event name rules.
//!
//! Event names are dot-delimited (`"a.b.c"`). Two different rules read them:
//!
//! - **Delivery** walks the ancestors of the emitted name by dropping trailing
//!   segments and compares each candidate by plain string equality.
//! - **Removal** treats a name as a descendant of `target` only when it starts
//!   with `target`, a literal `.`, and then an ASCII letter or `.`.
//!
//! The two rules are not symmetric: `"a.1"` receives `emit("a.1")` deliveries
//! on `"a"` subscribers, yet `off("a", ctx)` leaves a `"a.1"` subscription in
//! place.

use core::iter::FusedIterator;

/// Iterator over the delivery candidates of an emitted name.
///
/// Yields the full name first, then each shorter prefix obtained by cutting at
/// the last `.`, ending with the first segment.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

/// Delivery candidates for `event`, most specific first.
///
/// ```
/// let names: Vec<_> = ripple_core::ancestors("a.b.c").collect();
/// assert_eq!(names, ["a.b.c", "a.b", "a"]);
/// ```
pub fn ancestors(event: &str) -> Ancestors<'_> {
    Ancestors { next: Some(event) }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.rfind('.').map(|idx| &current[..idx]);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(name) => {
                let n = name.matches('.').count() + 1;
                (n, Some(n))
            }
        }
    }
}

impl ExactSizeIterator for Ancestors<'_> {}

impl FusedIterator for Ancestors<'_> {}

/// Whether `candidate` is removed by `off(target, ..)` as a descendant.
///
/// Only the first character after `target.` is inspected: it must be an ASCII
/// letter or `.`. Anything may follow it.
pub fn is_qualifying_descendant(candidate: &str, target: &str) -> bool {
    candidate
        .strip_prefix(target)
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|suffix| suffix.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ancestors_drop_trailing_segments() {
        let names: Vec<_> = ancestors("a.b.c").collect();
        assert_eq!(names, ["a.b.c", "a.b", "a"]);
    }

    #[test]
    fn single_segment_has_itself_only() {
        let names: Vec<_> = ancestors("root").collect();
        assert_eq!(names, ["root"]);
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(ancestors("").collect::<Vec<_>>(), [""]);
        assert_eq!(ancestors("a..b").collect::<Vec<_>>(), ["a..b", "a.", "a"]);
        assert_eq!(ancestors(".a").collect::<Vec<_>>(), [".a", ""]);
        assert_eq!(ancestors("a.b.").collect::<Vec<_>>(), ["a.b.", "a.b", "a"]);
    }

    #[test]
    fn size_hint_matches_segment_count() {
        let mut it = ancestors("x.y.z");
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn letter_descendants_qualify() {
        assert!(is_qualifying_descendant("a.b", "a"));
        assert!(is_qualifying_descendant("a.b.c", "a"));
        assert!(is_qualifying_descendant("a.B", "a"));
        assert!(is_qualifying_descendant("a..", "a"));
    }

    #[test]
    fn only_leading_character_is_checked() {
        // Prefix match: a letter first is enough even if digits follow.
        assert!(is_qualifying_descendant("a.b1", "a"));
        assert!(is_qualifying_descendant("a.b.2", "a"));
        assert!(!is_qualifying_descendant("a.1", "a"));
        assert!(!is_qualifying_descendant("a.1b", "a"));
        assert!(!is_qualifying_descendant("a.-x", "a"));
    }

    #[test]
    fn exact_name_and_strangers_do_not_qualify() {
        assert!(!is_qualifying_descendant("a", "a"));
        assert!(!is_qualifying_descendant("a.", "a"));
        assert!(!is_qualifying_descendant("ab.c", "a"));
        assert!(!is_qualifying_descendant("b.a", "a"));
    }

    #[test]
    fn target_dots_are_literal() {
        assert!(is_qualifying_descendant("a.b.c", "a.b"));
        assert!(!is_qualifying_descendant("axb.c", "a.b"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every candidate is a prefix of the emitted name and the
        /// walk ends at the first segment.
        #[test]
        fn ancestors_are_prefixes(segments in prop::collection::vec("[a-z0-9]{0,4}", 1..6)) {
            let event = segments.join(".");
            let names: Vec<_> = ancestors(&event).collect();

            prop_assert_eq!(names.len(), segments.len());
            prop_assert_eq!(names[0], event.as_str());
            prop_assert_eq!(*names.last().unwrap(), segments[0].as_str());
            for name in &names {
                prop_assert!(event.starts_with(name));
            }
        }

        /// Property: appending `.` and a letter-led suffix always qualifies.
        #[test]
        fn letter_led_suffix_qualifies(
            target in "[a-z0-9.]{0,8}",
            suffix in "[a-zA-Z][a-zA-Z0-9.]{0,8}"
        ) {
            let candidate = format!("{target}.{suffix}");
            prop_assert!(is_qualifying_descendant(&candidate, &target));
        }

        /// Property: a digit right after the dot never qualifies.
        #[test]
        fn digit_led_suffix_never_qualifies(
            target in "[a-z]{1,8}",
            suffix in "[0-9][a-zA-Z0-9.]{0,8}"
        ) {
            let candidate = format!("{target}.{suffix}");
            prop_assert!(!is_qualifying_descendant(&candidate, &target));
        }
    }
}
