//! Category selector and keyword search box.

use catalog::FilterUpdate;
use leptos::prelude::*;

use crate::state::products::ProductListState;

/// Label of the selector entry that clears the category.
pub const ALL_TYPES_LABEL: &str = "All product types";

/// Filter controls bound to the current list filter.
///
/// The category applies as soon as it changes. The keyword is edited as a
/// local draft and only applied on Enter or the search button.
#[component]
pub fn FilterBar(on_change: Callback<FilterUpdate>) -> impl IntoView {
    let state = expect_context::<RwSignal<ProductListState>>();
    let types = state.with_untracked(|s| s.types().to_vec());
    let keyword_draft = RwSignal::new(state.with_untracked(|s| s.filter.keyword.clone()));

    let submit_keyword = move || on_change.run(FilterUpdate::keyword(keyword_draft.get_untracked()));

    view! {
        <ul class="filter-bar">
            <li class="filter-bar__item">
                <select
                    class="filter-bar__type"
                    prop:value=move || state.with(|s| s.filter.kind.clone())
                    on:change=move |ev| on_change.run(FilterUpdate::kind(event_target_value(&ev)))
                >
                    <option value="" selected=move || state.with(|s| s.filter.kind.is_empty())>
                        {ALL_TYPES_LABEL}
                    </option>
                    {types
                        .into_iter()
                        .map(|t| {
                            let value = t.value.clone();
                            let selected = move || state.with(|s| s.filter.kind == value);
                            view! { <option value=t.value selected=selected>{t.label}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </li>
            <li class="filter-bar__item filter-bar__search">
                <input
                    class="filter-bar__keyword"
                    type="search"
                    placeholder="Search by name or description"
                    prop:value=move || keyword_draft.get()
                    on:input=move |ev| keyword_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit_keyword();
                        }
                    }
                />
                <button class="btn filter-bar__submit" on:click=move |_| submit_keyword()>
                    "Search"
                </button>
            </li>
        </ul>
    }
}
