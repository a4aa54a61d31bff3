//! Single-selection filter over rendered cards.
use crate::card::DealCard;

/// What a filter control selects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterSelection {
    Featured,
    /// Lowercase category name
    Category(String),
}

impl FilterSelection {
    #[must_use]
    pub fn category(name: &str) -> Self {
        Self::Category(name.to_lowercase())
    }

    /// Whether a card passes this selection.
    #[must_use]
    pub fn matches(&self, card: &DealCard) -> bool {
        match self {
            Self::Featured => card.featured,
            Self::Category(category) => card.has_category(category),
        }
    }
}

/// At most one active filter. `None` shows every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: Option<FilterSelection>,
}

impl FilterState {
    #[must_use]
    pub const fn active(&self) -> Option<&FilterSelection> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_active(&self, selection: &FilterSelection) -> bool {
        self.active.as_ref() == Some(selection)
    }

    /// Clicking the active control clears it; any other control replaces it.
    pub fn toggle(&mut self, selection: FilterSelection) {
        if self.is_active(&selection) {
            self.active = None;
        } else {
            self.active = Some(selection);
        }
    }

    #[must_use]
    pub fn is_visible(&self, card: &DealCard) -> bool {
        self.active
            .as_ref()
            .is_none_or(|selection| selection.matches(card))
    }

    /// Visibility of each card, in slice order.
    #[must_use]
    pub fn visibility(&self, cards: &[DealCard]) -> Vec<bool> {
        cards.iter().map(|card| self.is_visible(card)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::DealRecord;
    use chrono::Utc;

    fn card(index: usize, featured: bool, categories: &[&str]) -> DealCard {
        let record = DealRecord {
            index,
            featured,
            categories: categories.iter().map(ToString::to_string).collect(),
            ..DealRecord::default()
        };
        DealCard::from_record_in(&record, "images", &Utc)
    }

    fn cards() -> Vec<DealCard> {
        vec![
            card(0, true, &[]),
            card(1, false, &["Mining"]),
            card(2, false, &["mining", "Wallets"]),
        ]
    }

    #[test]
    fn unfiltered_shows_everything() {
        let state = FilterState::default();
        assert_eq!(state.visibility(&cards()), vec![true, true, true]);
    }

    #[test]
    fn category_filter_matches_any_casing() {
        let mut state = FilterState::default();
        state.toggle(FilterSelection::category("MINING"));
        assert_eq!(state.visibility(&cards()), vec![false, true, true]);
    }

    #[test]
    fn featured_filter_uses_flag() {
        let mut state = FilterState::default();
        state.toggle(FilterSelection::Featured);
        assert_eq!(state.visibility(&cards()), vec![true, false, false]);
    }

    #[test]
    fn toggling_active_filter_clears_it() {
        let mut state = FilterState::default();
        state.toggle(FilterSelection::Featured);
        state.toggle(FilterSelection::Featured);
        assert!(state.active().is_none());
        assert_eq!(state.visibility(&cards()), vec![true, true, true]);
    }

    #[test]
    fn new_selection_replaces_previous() {
        let mut state = FilterState::default();
        state.toggle(FilterSelection::Featured);
        state.toggle(FilterSelection::category("wallets"));
        assert!(!state.is_active(&FilterSelection::Featured));
        assert!(state.is_active(&FilterSelection::category("Wallets")));
        assert_eq!(state.visibility(&cards()), vec![false, false, true]);
    }

    #[test]
    fn visibility_is_idempotent() {
        let mut state = FilterState::default();
        state.toggle(FilterSelection::category("mining"));
        let cards = cards();
        assert_eq!(state.visibility(&cards), state.visibility(&cards));
    }
}
