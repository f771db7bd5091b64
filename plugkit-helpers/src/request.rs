//! Request-parameter retrieval
//!
//! A typed stand-in for reaching into request superglobals: the caller
//! hands over the already-parsed query and body maps, and lookups follow
//! the host's precedence (a GET request never consults the body; anything
//! else checks the body first, then the query). Values are escaped on the
//! way out unless the caller explicitly opts into raw output.

use indexmap::IndexMap;

/// The HTTP method of the request being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// A GET request; only query parameters are consulted.
    Get,
    /// A POST request.
    Post,
    /// Any other method; treated like POST for lookup precedence.
    Other,
}

/// A request parameter value: single, or repeated (e.g. `tags[]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// One value.
    Single(String),
    /// Multiple values under the same name.
    Many(Vec<String>),
}

impl ParamValue {
    fn escaped(&self, escape: Escape) -> ParamValue {
        let apply = |text: &str| match escape {
            Escape::Html => esc_html(text),
            Escape::Raw => text.to_string(),
            Escape::With(func) => func(text),
        };

        match self {
            ParamValue::Single(value) => ParamValue::Single(apply(value)),
            ParamValue::Many(values) => {
                ParamValue::Many(values.iter().map(|value| apply(value)).collect())
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> ParamValue {
        ParamValue::Single(value.to_string())
    }
}

/// How to escape parameter values on retrieval.
#[derive(Debug, Clone, Copy)]
pub enum Escape {
    /// HTML-escape the value (the safe default).
    Html,
    /// Return the value untouched. The output is untrusted input.
    Raw,
    /// Apply a custom escaping function to each value.
    With(fn(&str) -> String),
}

/// The parameters of one request.
#[derive(Debug, Clone)]
pub struct RequestParams {
    method: Method,
    query: IndexMap<String, ParamValue>,
    body: IndexMap<String, ParamValue>,
}

impl RequestParams {
    /// An empty parameter set for the given request method.
    pub fn new(method: Method) -> RequestParams {
        RequestParams {
            method,
            query: IndexMap::new(),
            body: IndexMap::new(),
        }
    }

    /// Add a query-string parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Add a request-body parameter.
    pub fn with_body(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.body.insert(name.into(), value.into());
        self
    }

    /// Look up a parameter, escaping each value with `escape`.
    ///
    /// GET requests consult only the query map; other methods check the
    /// body first and fall back to the query. `None` when the parameter
    /// is absent.
    pub fn param(&self, name: &str, escape: Escape) -> Option<ParamValue> {
        let found = match self.method {
            Method::Get => self.query.get(name),
            Method::Post | Method::Other => self.body.get(name).or_else(|| self.query.get(name)),
        }?;

        Some(found.escaped(escape))
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> ParamValue {
        ParamValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Escape text for safe HTML display: `&`, `<`, `>`, `"`, and `'` become
/// entities.
pub fn esc_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
