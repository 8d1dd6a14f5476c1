//! Minimal template interpolation for generated partials.
//!
//! Variables are written as `{{ name }}`; `{{ name? }}` renders as empty when
//! the variable is missing. Values are inserted verbatim, so callers escape
//! them first.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A named template with `{{ variable }}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    ///
    /// Substituted values are never rescanned for placeholders.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax(format!("unclosed {{{{ in {}", self.name)))?;

            let var_name = after_open[..end].trim();
            let (var_name, optional) = match var_name.strip_suffix('?') {
                Some(stripped) => (stripped.trim(), true),
                None => (var_name, false),
            };

            if var_name.is_empty() {
                return Err(TemplateError::InvalidSyntax(format!(
                    "empty variable name in {}",
                    self.name
                )));
            }

            match context.get(var_name) {
                Some(v) => result.push_str(v),
                None if optional => {}
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            }

            rest = &after_open[end + 2..];
        }

        result.push_str(rest);
        Ok(result)
    }
}
