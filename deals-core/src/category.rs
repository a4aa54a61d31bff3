use crate::collate::Collator;
use crate::deal::DealRecord;
use std::collections::BTreeSet;

/// Distinct lowercase categories across all deals, in collation order.
#[must_use]
pub fn unique_categories<C: Collator>(deals: &[DealRecord], collator: &C) -> Vec<String> {
    let set: BTreeSet<String> = deals
        .iter()
        .flat_map(|deal| deal.categories.iter())
        .map(|category| category.to_lowercase())
        .collect();
    let mut categories: Vec<String> = set.into_iter().collect();
    categories.sort_by(|a, b| collator.compare(a, b));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::FoldCollator;

    fn deal(categories: &[&str]) -> DealRecord {
        DealRecord {
            categories: categories.iter().map(ToString::to_string).collect(),
            ..DealRecord::default()
        }
    }

    #[test]
    fn lowercases_dedupes_and_sorts() {
        let deals = [deal(&["Mining", "mining"]), deal(&["DeFi"])];
        assert_eq!(unique_categories(&deals, &FoldCollator), vec!["defi", "mining"]);
    }

    #[test]
    fn deals_without_categories_contribute_nothing() {
        let deals = [deal(&[]), deal(&[])];
        assert!(unique_categories(&deals, &FoldCollator).is_empty());
    }

    #[test]
    fn spans_every_deal() {
        let deals = [
            deal(&["Wallets", "Books"]),
            deal(&["apparel"]),
            deal(&["BOOKS", "Mining"]),
        ];
        assert_eq!(
            unique_categories(&deals, &FoldCollator),
            vec!["apparel", "books", "mining", "wallets"]
        );
    }
}
