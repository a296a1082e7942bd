use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

/// One GraphQL-style operation: a name, a body, and bound variables.
///
/// Identifiers that come from outside (route parameters, user input) are
/// always passed through [`bind`](Self::bind) and referenced as `$name` in the
/// body. The body itself is a fixed template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentQuery {
    #[serde(skip)]
    operation_name: Cow<'static, str>,
    query: Cow<'static, str>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    variables: Map<String, Value>,
}

impl ContentQuery {
    pub fn new(
        operation_name: impl Into<Cow<'static, str>>,
        query: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            operation_name: operation_name.into(),
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Bind `$name` to `value`. Rebinding replaces the previous value.
    pub fn bind(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }

    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    pub fn body(&self) -> &str {
        &self.query
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }
}
