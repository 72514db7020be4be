use manifest_fs::{NormalizedPath, expand_home_with};
use proptest::prelude::*;
use std::path::Path;

proptest! {
    #[test]
    fn paths_without_marker_are_untouched(s in "[^~][a-z0-9/._-]*") {
        let expanded = expand_home_with(&s, Path::new("/home/dev"));
        prop_assert_eq!(expanded.to_string_lossy().into_owned(), s);
    }

    #[test]
    fn marker_is_replaced_by_home_verbatim(rest in "(/[a-z0-9._-]{1,8}){0,4}") {
        let expanded = expand_home_with(&format!("~{rest}"), Path::new("/home/dev"));
        prop_assert_eq!(expanded.to_string_lossy().into_owned(), format!("/home/dev{rest}"));
    }

    #[test]
    fn join_keeps_base_as_prefix(
        base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        key in "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.yaml",
    ) {
        let joined = NormalizedPath::new(&base).join(&key);
        prop_assert_eq!(joined.as_str(), format!("{base}/{key}"));
        prop_assert_eq!(joined.file_name(), key.rsplit('/').next());
    }
}
