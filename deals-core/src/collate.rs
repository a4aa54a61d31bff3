//! String collation used for category lists and title ordering.
use std::cmp::Ordering;

/// Locale-aware string comparison.
///
/// The browser build backs this with `Intl.Collator`; host builds and tests
/// use [`FoldCollator`].
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<C: Collator + ?Sized> Collator for &C {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Case-folding comparison approximating the root collation order.
///
/// Strings compare by their lowercase form first. Strings equal under case
/// folding put lowercase before uppercase at the first differing position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldCollator;

impl Collator for FoldCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let folded = a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase));
        folded
            .then_with(|| {
                a.chars()
                    .map(char::is_uppercase)
                    .cmp(b.chars().map(char::is_uppercase))
            })
            .then_with(|| a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_at_primary_level() {
        let c = FoldCollator;
        assert_eq!(c.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(c.compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(c.compare("defi", "mining"), Ordering::Less);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_ties() {
        let c = FoldCollator;
        assert_eq!(c.compare("a", "A"), Ordering::Less);
        assert_eq!(c.compare("Mining", "mining"), Ordering::Greater);
        assert_eq!(c.compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        let c = FoldCollator;
        assert_eq!(c.compare("wallet", "wallets"), Ordering::Less);
        assert_eq!(c.compare("", "a"), Ordering::Less);
    }
}
