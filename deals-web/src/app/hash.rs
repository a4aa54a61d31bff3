//! Hash router: one top-level `<article>` visible at a time, chosen by `location.hash`.
use crate::dom;
use deals_core::{resolve_section, section_id_from_hash};
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};
use yew::prelude::*;

/// Index of the section named by `hash`, falling back to the first section.
#[must_use]
pub fn section_for_hash(hash: &str, section_ids: &[String], default_id: &str) -> usize {
    let id = section_id_from_hash(hash, default_id);
    let resolution = resolve_section(&id, section_ids);
    if resolution.missing {
        log::warn!("Missing page to match hash id: {id}");
    }
    resolution.index
}

/// Track the visible section across `hashchange` events.
///
/// When disabled the first section is always shown.
#[hook]
pub fn use_hash_section(section_ids: Rc<[String]>, default_id: AttrValue, enabled: bool) -> usize {
    let active = {
        let ids = section_ids.clone();
        let default_id = default_id.clone();
        use_state(move || {
            if enabled {
                section_for_hash(&dom::location_hash(), &ids, &default_id)
            } else {
                0
            }
        })
    };

    #[cfg(target_arch = "wasm32")]
    {
        let active = active.clone();
        use_effect_with(
            (section_ids, default_id, enabled),
            move |(ids, default_id, enabled)| {
                let listener = enabled.then(|| {
                    let ids = ids.clone();
                    let default_id = default_id.clone();
                    Closure::<dyn Fn()>::new(move || {
                        active.set(section_for_hash(&dom::location_hash(), &ids, &default_id));
                    })
                });
                let window = dom::window();
                if let Some(listener) = &listener {
                    let _ = window.add_event_listener_with_callback(
                        "hashchange",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(listener) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    drop((section_ids, default_id));

    *active
}
