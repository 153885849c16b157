//! Pagination control: total, page buttons, previous/next, and size changer.

use catalog::{FilterUpdate, PAGE_SIZE_OPTIONS, Page, page_count, page_window};
use leptos::prelude::*;

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

/// Pager for the loaded page. Page buttons emit `FilterUpdate::page`, the
/// size changer emits `FilterUpdate::page_size`.
#[component]
pub fn Pager(page: Page, on_change: Callback<FilterUpdate>) -> impl IntoView {
    let total_pages = page_count(page.total, page.page_size);
    let current = page.page_number;
    let at_first = current <= 1;
    let at_last = current >= total_pages;

    let buttons = page_window(total_pages, current)
        .into_iter()
        .map(|slot| match slot {
            Some(n) => {
                let class = button_class(n == current);
                view! {
                    <button class=class on:click=move |_| on_change.run(FilterUpdate::page(n))>
                        {n}
                    </button>
                }
                .into_any()
            }
            None => view! { <span class="pager__gap">"…"</span> }.into_any(),
        })
        .collect::<Vec<_>>();

    let sizes = size_options(page.page_size)
        .into_iter()
        .map(|size| {
            let value = size.to_string();
            let selected = size == page.page_size;
            view! {
                <option value=value selected=selected>
                    {size_label(size)}
                </option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="pager">
            <span class="pager__total">{total_label(page.total)}</span>
            <button
                class="pager__item pager__prev"
                disabled=at_first
                on:click=move |_| on_change.run(FilterUpdate::page(current.saturating_sub(1)))
            >
                "‹"
            </button>
            {buttons}
            <button
                class="pager__item pager__next"
                disabled=at_last
                on:click=move |_| on_change.run(FilterUpdate::page(current.saturating_add(1)))
            >
                "›"
            </button>
            <select
                class="pager__size"
                on:change=move |ev| {
                    if let Some(size) = parse_size(&event_target_value(&ev)) {
                        on_change.run(FilterUpdate::page_size(size));
                    }
                }
            >
                {sizes}
            </select>
        </div>
    }
}

fn button_class(active: bool) -> &'static str {
    if active { "pager__item pager__item--active" } else { "pager__item" }
}

/// "Total N items" summary.
pub(crate) fn total_label(total: usize) -> String {
    if total == 1 { "Total 1 item".to_owned() } else { format!("Total {total} items") }
}

pub(crate) fn size_label(size: u32) -> String {
    format!("{size} / page")
}

/// Sizes offered by the changer; a size that came from the URL but is not a
/// standard option is listed too so the control reflects the actual page.
pub(crate) fn size_options(current: u32) -> Vec<u32> {
    let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
    if !sizes.contains(&current) {
        sizes.push(current);
        sizes.sort_unstable();
    }
    sizes
}

pub(crate) fn parse_size(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|size| *size > 0)
}
