//! Language filter component for the table-of-contents sidebar.
//!
//! Each key release re-filters the catalog and replaces the whole list.

use langfilter_core::{
    DEFAULT_MAX_RESULTS, LanguageCatalog, LanguageFilterWidget, ListItem, TRUNCATION_MARKER,
};
use leptos::prelude::*;

/// Default placeholder of the filter input.
pub const DEFAULT_PLACEHOLDER: &str = "Search languages...";

/// Searchable, capped list of language links.
#[component]
pub fn LanguageFilter(
    /// Languages available on this page, in display order.
    catalog: LanguageCatalog,
    /// Matches shown before the truncation marker.
    #[prop(default = DEFAULT_MAX_RESULTS)]
    max_results: usize,
    /// Placeholder text for the input.
    #[prop(into, default = DEFAULT_PLACEHOLDER.to_string())]
    placeholder: String,
    /// DOM id of the input.
    #[prop(into, default = "language-search".to_string())]
    input_id: String,
    /// DOM id of the list.
    #[prop(into, default = "language-list".to_string())]
    list_id: String,
) -> impl IntoView {
    let widget = RwSignal::new(LanguageFilterWidget::new(catalog, max_results));

    let on_keyup = move |ev: web_sys::KeyboardEvent| {
        let value = event_target_value(&ev);
        widget.update(|w| {
            w.on_filter_text_changed(value);
        });
    };

    view! {
      <div class="language-filter">
        <input
          type="text"
          id=input_id
          class="language-filter-input"
          placeholder=placeholder
          autocomplete="off"
          on:keyup=on_keyup
        />
        <ul id=list_id class="language-filter-list">
          {move || {
            widget
              .with(|w| w.render().items())
              .into_iter()
              .map(|item| view! { <LanguageFilterItem item=item /> })
              .collect_view()
          }}
        </ul>
      </div>
    }
}

/// A single list item: link, non-navigable placeholder, or truncation marker.
#[component]
fn LanguageFilterItem(item: ListItem) -> impl IntoView {
    let class = item.class_name();

    match item {
        ListItem::Link { title, href } => view! {
          <li class=class>
            <a href=href class="language-filter-link">
              {title}
            </a>
          </li>
        }
        .into_any(),
        ListItem::Placeholder { title } => view! {
          <li class=class>
            <a class="language-filter-link">{title}</a>
          </li>
        }
        .into_any(),
        ListItem::TruncationMarker => view! { <li class=class>{TRUNCATION_MARKER}</li> }.into_any(),
    }
}
