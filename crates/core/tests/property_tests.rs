use proptest::prelude::*;
use shell_wc_core::counter::{byte_count, line_count, word_count};

proptest! {
    #[test]
    fn byte_count_equals_length(content in proptest::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(byte_count(&content).value(), content.len());
    }

    #[test]
    fn line_count_is_at_least_one(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert!(line_count(&content).value() >= 1);
    }

    #[test]
    fn trailing_separator_does_not_change_line_count(
        content in "([ -~]{0,20}\n){0,8}[ -~]{1,20}"
    ) {
        // The generated content never ends with a separator, so appending
        // one must not change the segment count.
        let with_separator = format!("{content}\n");
        prop_assert_eq!(
            line_count(content.as_bytes()).value(),
            line_count(with_separator.as_bytes()).value()
        );
    }

    #[test]
    fn word_count_matches_a_model_split(content in "[a-z \n]{0,300}") {
        let model: usize = content
            .split('\n')
            .map(|line| line.split(' ').filter(|token| !token.is_empty()).count())
            .sum();
        prop_assert_eq!(word_count(content.as_bytes()).unwrap().value(), model);
    }
}
