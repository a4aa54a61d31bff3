//! Click handlers for the filter, sort and sidebar controls.
use crate::collate::PageCollator;
use deals_core::{Collator, DealsView, FilterSelection, SortKind};
use yew::prelude::*;

#[must_use]
pub fn toggled_filter(view: &DealsView, selection: FilterSelection) -> DealsView {
    let mut next = view.clone();
    next.toggle_filter(selection);
    next
}

#[must_use]
pub fn toggled_sort<C: Collator>(view: &DealsView, kind: SortKind, collator: &C) -> DealsView {
    let mut next = view.clone();
    next.toggle_sort(kind, collator);
    next
}

/// Controls do nothing until the deal list has loaded.
pub fn filter_callback(view: &UseStateHandle<Option<DealsView>>) -> Callback<FilterSelection> {
    let view = view.clone();
    Callback::from(move |selection: FilterSelection| {
        if let Some(current) = (*view).as_ref() {
            view.set(Some(toggled_filter(current, selection)));
        }
    })
}

pub fn sort_callback(view: &UseStateHandle<Option<DealsView>>) -> Callback<SortKind> {
    let view = view.clone();
    Callback::from(move |kind: SortKind| {
        if let Some(current) = (*view).as_ref() {
            view.set(Some(toggled_sort(current, kind, &PageCollator::new())));
        }
    })
}

pub fn sidebar_toggle(open: &UseStateHandle<bool>) -> Callback<()> {
    let open = open.clone();
    Callback::from(move |()| open.set(!*open))
}

pub fn sidebar_close(open: &UseStateHandle<bool>) -> Callback<()> {
    let open = open.clone();
    Callback::from(move |()| open.set(false))
}
