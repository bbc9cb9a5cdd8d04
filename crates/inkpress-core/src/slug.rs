//! URL slug generation for categories.

/// Turn free text into a URL-safe slug.
///
/// Lowercases, drops everything outside `[a-z0-9_]`, whitespace, and
/// hyphens, then collapses runs of whitespace/underscores/hyphens into a
/// single hyphen and trims hyphens from both ends.
///
/// ```
/// use inkpress_core::slugify;
///
/// assert_eq!(slugify("CSS & Styling"), "css-styling");
/// assert_eq!(slugify("  Backend   Development  "), "backend-development");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_sep = false;
    for c in lowered.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_sep = !slug.is_empty();
        } else if c.is_ascii_alphanumeric() {
            if pending_sep {
                slug.push('-');
                pending_sep = false;
            }
            slug.push(c);
        }
        // everything else is dropped without acting as a separator
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Web Development"), "web-development");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(slugify("CSS & Styling"), "css-styling");
        assert_eq!(slugify("What's new?"), "whats-new");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(slugify("a  _ - b"), "a-b");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("  -hello-  "), "hello");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    proptest::proptest! {
        /// Whatever goes in, the output is either empty or a valid slug.
        #[test]
        fn prop_output_is_valid_or_empty(input in ".*") {
            let slug = slugify(&input);
            proptest::prop_assert!(
                slug.is_empty() || crate::validation::is_valid_slug(&slug)
            );
        }
    }
}
