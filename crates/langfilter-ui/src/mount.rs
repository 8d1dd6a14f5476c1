//! JavaScript entry points mounting the widget into generated pages.
//!
//! The generator's sidebar partial pre-renders the list and embeds the catalog
//! as JSON. Mounting replaces that static markup with the live component,
//! keeping the ids and placeholder it was rendered with.

use langfilter_core::{DEFAULT_MAX_RESULTS, LanguageCatalog};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, prelude::*};

use crate::language_filter::{DEFAULT_PLACEHOLDER, LanguageFilter};

/// Initialize the WASM module.
///
/// Sets up the panic hook and routes `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Mount a language filter into `container_id` from a JSON catalog.
#[wasm_bindgen(js_name = mountLanguageFilter)]
pub fn mount_language_filter(
    container_id: &str,
    catalog_json: &str,
    max_results: Option<usize>,
) -> Result<(), JsValue> {
    let catalog = parse_catalog(catalog_json).map_err(|e| js_error(&e))?;

    let container = document()
        .get_element_by_id(container_id)
        .ok_or_else(|| js_error(&format!("container #{container_id} not found")))?;

    let container = container
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| js_error(&format!("#{container_id} is not an HTML element")))?;

    // The static markup stays in place unless mounting can proceed.
    let attrs = StaticMarkup::read(&container);
    container.set_inner_html("");

    let max_results = resolve_max_results(max_results);
    log::info!(
        "mounting language filter into #{container_id} ({} entries, max {max_results})",
        catalog.len()
    );

    leptos::mount::mount_to(container, move || {
        view! {
          <LanguageFilter
            catalog=catalog
            max_results=max_results
            placeholder=attrs.placeholder
            input_id=attrs.input_id
            list_id=attrs.list_id
          />
        }
    })
    .forget();

    Ok(())
}

/// Mount a language filter using the catalog embedded in `<script id=data_id>`.
#[wasm_bindgen(js_name = mountEmbeddedLanguageFilter)]
pub fn mount_embedded_language_filter(
    container_id: &str,
    data_id: &str,
    max_results: Option<usize>,
) -> Result<(), JsValue> {
    let json = document()
        .get_element_by_id(data_id)
        .and_then(|el| el.text_content())
        .ok_or_else(|| js_error(&format!("catalog element #{data_id} not found")))?;

    mount_language_filter(container_id, &json, max_results)
}

/// Ids and placeholder of the pre-rendered markup.
struct StaticMarkup {
    placeholder: String,
    input_id: String,
    list_id: String,
}

impl StaticMarkup {
    fn read(container: &web_sys::Element) -> Self {
        let input = container.query_selector("input").ok().flatten();
        let list = container.query_selector("ul").ok().flatten();

        Self {
            placeholder: input
                .as_ref()
                .and_then(|i| i.get_attribute("placeholder"))
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            input_id: non_empty_id(input.as_ref(), "language-search"),
            list_id: non_empty_id(list.as_ref(), "language-list"),
        }
    }
}

fn non_empty_id(element: Option<&web_sys::Element>, fallback: &str) -> String {
    element
        .map(web_sys::Element::id)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn js_error(message: &str) -> JsValue {
    log::error!("language filter: {message}");
    JsValue::from_str(message)
}

/// Parse the embedded catalog, mapping failures to a readable message.
fn parse_catalog(json: &str) -> Result<LanguageCatalog, String> {
    LanguageCatalog::from_json(json.trim()).map_err(|e| format!("invalid language catalog: {e}"))
}

/// Missing or zero caps fall back to the default.
fn resolve_max_results(max_results: Option<usize>) -> usize {
    max_results
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_MAX_RESULTS)
}
