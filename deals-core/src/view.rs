//! The deals page as plain data: cards plus the active filter and sort.
use crate::card::DealCard;
use crate::category::unique_categories;
use crate::collate::Collator;
use crate::deal::DealRecord;
use crate::filter::{FilterSelection, FilterState};
use crate::sort::{SortKind, SortState, arrange, rearrange};
use chrono::{Local, TimeZone};
use std::fmt::Display;
use std::rc::Rc;

/// Cards built once at load, shown in the current order and visibility.
///
/// Cloning is cheap; card data is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct DealsView {
    cards: Rc<[DealCard]>,
    categories: Rc<[String]>,
    filter: FilterState,
    sort: SortState,
    /// Positions into `cards`, in display order
    order: Rc<[usize]>,
}

impl DealsView {
    /// Build cards for the viewer's local time zone.
    #[must_use]
    pub fn from_records<C: Collator>(deals: &[DealRecord], image_dir: &str, collator: &C) -> Self {
        Self::from_records_in(deals, image_dir, collator, &Local)
    }

    #[must_use]
    pub fn from_records_in<C, Tz>(
        deals: &[DealRecord],
        image_dir: &str,
        collator: &C,
        tz: &Tz,
    ) -> Self
    where
        C: Collator,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let cards: Vec<DealCard> = deals
            .iter()
            .map(|deal| DealCard::from_record_in(deal, image_dir, tz))
            .collect();
        let categories = unique_categories(deals, collator);
        let order = arrange(&cards, SortState::default(), collator);
        Self {
            cards: cards.into(),
            categories: categories.into(),
            filter: FilterState::default(),
            sort: SortState::default(),
            order: order.into(),
        }
    }

    /// Cards in load order.
    #[must_use]
    pub fn cards(&self) -> &[DealCard] {
        &self.cards
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn sort(&self) -> SortState {
        self.sort
    }

    pub fn toggle_filter(&mut self, selection: FilterSelection) {
        self.filter.toggle(selection);
        log::debug!("filter now {:?}", self.filter.active());
    }

    /// Switch the sort and re-order the current arrangement.
    pub fn toggle_sort<C: Collator>(&mut self, kind: SortKind, collator: &C) {
        self.sort.toggle(kind);
        let mut order = self.order.to_vec();
        rearrange(&self.cards, &mut order, self.sort, collator);
        self.order = order.into();
        log::debug!("sort now {:?}", self.sort.active());
    }

    /// Every card in display order, hidden ones included.
    pub fn arranged(&self) -> impl Iterator<Item = &DealCard> {
        self.order.iter().map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn is_visible(&self, card: &DealCard) -> bool {
        self.filter.is_visible(card)
    }

    /// Visible cards in display order.
    pub fn visible(&self) -> impl Iterator<Item = &DealCard> {
        self.arranged().filter(|card| self.is_visible(card))
    }
}
