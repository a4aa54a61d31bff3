//! Single-selection ordering of rendered cards.
use crate::card::DealCard;
use crate::collate::Collator;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    /// Highest discount first
    Discount,
    /// Ascending by collated title
    Title,
}

impl SortKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discount => "discount",
            Self::Title => "title",
        }
    }
}

/// At most one active sort. `None` is the default order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<SortKind>,
}

impl SortState {
    #[must_use]
    pub const fn active(self) -> Option<SortKind> {
        self.active
    }

    #[must_use]
    pub fn is_active(self, kind: SortKind) -> bool {
        self.active == Some(kind)
    }

    pub fn toggle(&mut self, kind: SortKind) {
        if self.is_active(kind) {
            self.active = None;
        } else {
            self.active = Some(kind);
        }
    }
}

/// Featured cards first, then load order.
#[must_use]
pub fn compare_default(a: &DealCard, b: &DealCard) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| a.index.cmp(&b.index))
}

#[must_use]
pub fn compare_discount(a: &DealCard, b: &DealCard) -> Ordering {
    b.discount.total_cmp(&a.discount)
}

#[must_use]
pub fn compare_title<C: Collator>(a: &DealCard, b: &DealCard, collator: &C) -> Ordering {
    collator.compare(&a.title, &b.title)
}

/// Positions into `cards`, ordered by the active sort.
#[must_use]
pub fn arrange<C: Collator>(cards: &[DealCard], state: SortState, collator: &C) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    rearrange(cards, &mut order, state, collator);
    order
}

/// Re-sort an existing arrangement in place.
///
/// The sort is stable, so ties keep their current relative position.
pub fn rearrange<C: Collator>(
    cards: &[DealCard],
    order: &mut [usize],
    state: SortState,
    collator: &C,
) {
    match state.active {
        None => order.sort_by(|&a, &b| compare_default(&cards[a], &cards[b])),
        Some(SortKind::Discount) => {
            order.sort_by(|&a, &b| compare_discount(&cards[a], &cards[b]));
        }
        Some(SortKind::Title) => {
            order.sort_by(|&a, &b| compare_title(&cards[a], &cards[b], collator));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::FoldCollator;
    use crate::deal::DealRecord;
    use chrono::Utc;

    fn card(index: usize, title: &str, discount: Option<f64>, featured: bool) -> DealCard {
        let record = DealRecord {
            index,
            title: title.to_string(),
            discount,
            featured,
            ..DealRecord::default()
        };
        DealCard::from_record_in(&record, "images", &Utc)
    }

    fn indices(cards: &[DealCard], order: &[usize]) -> Vec<usize> {
        order.iter().map(|&i| cards[i].index).collect()
    }

    #[test]
    fn default_puts_featured_first_then_index() {
        let cards = vec![
            card(0, "a", None, false),
            card(1, "b", None, true),
            card(2, "c", None, false),
            card(3, "d", None, true),
        ];
        let order = arrange(&cards, SortState::default(), &FoldCollator);
        assert_eq!(indices(&cards, &order), vec![1, 3, 0, 2]);
    }

    #[test]
    fn discount_descends_with_absent_as_zero() {
        let cards = vec![
            card(0, "a", None, false),
            card(1, "b", Some(20.0), false),
            card(2, "c", Some(5.0), true),
        ];
        let mut state = SortState::default();
        state.toggle(SortKind::Discount);
        let order = arrange(&cards, state, &FoldCollator);
        assert_eq!(indices(&cards, &order), vec![1, 2, 0]);
    }

    #[test]
    fn discount_ties_keep_slice_order() {
        let cards = vec![
            card(0, "a", Some(10.0), false),
            card(1, "b", Some(10.0), false),
            card(2, "c", None, false),
            card(3, "d", Some(0.0), false),
        ];
        let mut state = SortState::default();
        state.toggle(SortKind::Discount);
        let order = arrange(&cards, state, &FoldCollator);
        assert_eq!(indices(&cards, &order), vec![0, 1, 2, 3]);
    }

    #[test]
    fn rearrange_keeps_current_order_on_ties() {
        let cards = vec![
            card(0, "a", Some(10.0), false),
            card(1, "b", Some(10.0), false),
        ];
        let mut order = vec![1, 0];
        let mut state = SortState::default();
        state.toggle(SortKind::Discount);
        rearrange(&cards, &mut order, state, &FoldCollator);
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn title_uses_collator() {
        let cards = vec![
            card(0, "banana", None, false),
            card(1, "Apple", None, false),
            card(2, "cherry", None, true),
        ];
        let mut state = SortState::default();
        state.toggle(SortKind::Title);
        let order = arrange(&cards, state, &FoldCollator);
        assert_eq!(indices(&cards, &order), vec![1, 0, 2]);
    }

    #[test]
    fn toggling_active_sort_returns_to_default() {
        let mut state = SortState::default();
        state.toggle(SortKind::Title);
        state.toggle(SortKind::Discount);
        assert!(state.is_active(SortKind::Discount));
        assert!(!state.is_active(SortKind::Title));
        state.toggle(SortKind::Discount);
        assert!(state.active().is_none());
    }
}
