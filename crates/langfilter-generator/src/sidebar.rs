//! Sidebar partial generation.
//!
//! The partial carries everything the browser needs: the filter input, the
//! list pre-rendered for an empty filter (so the sidebar works without WASM),
//! the catalog as embedded JSON, and the call that mounts the live widget.

use langfilter_core::{
    FilteredList, LanguageCatalog, ListItem, WidgetConfig, filter_catalog,
};

use crate::{
    build::Result,
    template::{Template, TemplateContext},
};

/// Module path of the compiled UI bundle.
pub const DEFAULT_WASM_MODULE: &str = "/pkg/langfilter_ui.js";

/// Sidebar partial template.
pub const SIDEBAR_TEMPLATE: &str = r#"<div id="{{ root_id }}" class="language-filter">
  <input type="text" id="{{ input_id }}" class="language-filter-input" placeholder="{{ placeholder }}" autocomplete="off">
  <ul id="{{ list_id }}" class="language-filter-list">
{{ items? }}  </ul>
  <script type="application/json" id="{{ data_id }}">{{ catalog_json }}</script>
  <script type="module">
    import init, { mountEmbeddedLanguageFilter } from "{{ wasm_module }}";
    init().then(() => mountEmbeddedLanguageFilter("{{ root_id }}", "{{ data_id }}", {{ max_results }}));
  </script>
</div>
"#;

/// Renders sidebar partials for a widget configuration.
#[derive(Debug, Clone)]
pub struct SidebarRenderer {
    config: WidgetConfig,
    wasm_module: String,
    template: Template,
}

impl SidebarRenderer {
    /// Create a renderer using the default UI bundle path.
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            wasm_module: DEFAULT_WASM_MODULE.to_string(),
            template: Template::new("sidebar", SIDEBAR_TEMPLATE),
        }
    }

    /// Use a different UI bundle path.
    #[must_use]
    pub fn with_wasm_module(mut self, module: impl Into<String>) -> Self {
        self.wasm_module = module.into();
        self
    }

    /// Id of the element the live widget mounts into.
    #[must_use]
    pub fn root_id(&self) -> String {
        format!("{}-root", self.config.list_id)
    }

    /// Render the sidebar partial for `catalog`.
    pub fn render(&self, catalog: &LanguageCatalog) -> Result<String> {
        let initial = filter_catalog(catalog, "", self.config.max_results);
        let catalog_json = catalog.to_json()?;

        let ctx = TemplateContext::new()
            .with_var("root_id", escape_html(&self.root_id()))
            .with_var("input_id", escape_html(&self.config.input_id))
            .with_var("list_id", escape_html(&self.config.list_id))
            .with_var("data_id", escape_html(&self.config.data_id))
            .with_var("placeholder", escape_html(&self.config.placeholder))
            .with_var("items", render_list_html(&initial))
            .with_var("catalog_json", escape_script_json(&catalog_json))
            .with_var("wasm_module", escape_html(&self.wasm_module))
            .with_var("max_results", self.config.max_results.to_string());

        Ok(self.template.render(&ctx)?)
    }
}

/// Render the `<li>` elements of a filtered list, one per line.
pub fn render_list_html(list: &FilteredList<'_>) -> String {
    list.items()
        .iter()
        .map(|item| {
            let class = item.class_name();
            match item {
                ListItem::Link { title, href } => format!(
                    "    <li class=\"{class}\"><a href=\"{}\" class=\"language-filter-link\">{}</a></li>\n",
                    escape_html(href),
                    escape_html(title)
                ),
                ListItem::Placeholder { title } => format!(
                    "    <li class=\"{class}\"><a class=\"language-filter-link\">{}</a></li>\n",
                    escape_html(title)
                ),
                ListItem::TruncationMarker => {
                    format!("    <li class=\"{class}\">{}</li>\n", item.label())
                }
            }
        })
        .collect()
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep embedded JSON from terminating its `<script>` element.
fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "\\u003c!--")
}
