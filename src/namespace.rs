//! Namespace derivation for admitted directories.

/// Derive the namespace that groups the templates found under a directory.
///
/// The namespace is `name` with the literal `root` prefix stripped, once. A
/// name that does not start with `root` (an extra root outside the scanned
/// tree, say) derives the empty namespace, which consumers read as
/// "ungrouped". Whatever separator character is left behind after the strip
/// stays in the namespace: downstream consumers key on the exact string
/// shape, so nothing is trimmed.
pub fn derive_namespace(name: &str, root: &str) -> String {
    match name.strip_prefix(root) {
        // An empty root "strips" to the full name; that derives no namespace.
        Some(suffix) if suffix != name => suffix.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_root_prefix_once() {
        assert_eq!(derive_namespace("/r/a", "/r"), "/a");
    }

    #[test]
    fn unrelated_name_is_ungrouped() {
        assert_eq!(derive_namespace("/other", "/r"), "");
    }

    #[test]
    fn leftover_separator_is_kept() {
        assert_eq!(derive_namespace("/srv/partials/header", "/srv/partials"), "/header");
    }

    #[test]
    fn name_equal_to_root_is_ungrouped() {
        assert_eq!(derive_namespace("/r", "/r"), "");
    }

    #[test]
    fn empty_root_is_ungrouped() {
        assert_eq!(derive_namespace("/r/a", ""), "");
    }

    proptest! {
        #[test]
        fn prefixed_names_strip_to_the_exact_suffix(root in "[a-z/]{1,12}", suffix in "[a-z/]{0,12}") {
            let name = format!("{root}{suffix}");
            prop_assert_eq!(derive_namespace(&name, &root), suffix);
        }

        #[test]
        fn non_prefixed_names_are_ungrouped(name in "[a-z]{1,12}", root in "[a-z]{1,12}") {
            prop_assume!(!name.starts_with(&root));
            prop_assert_eq!(derive_namespace(&name, &root), "");
        }
    }
}
