//! Resource form binding.
//!
//! A [`FormSpec`] declares everything about one form: the endpoint, the CRUD intent that picks
//! the HTTP method, which inputs hold the record id and the payload fields, and how the
//! response is shown. [`submit`] turns the values captured at submission time into a request,
//! sends it, and produces the text for the form's result element plus an optional redirect.

pub mod catalog;
pub mod field;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use serde_json::{Map, Value};

use crate::{
    api::{endpoint, ApiRequest, ApiResponse, Method, Transport},
    error::Error,
    session::SessionContext,
};

pub use field::{BlankPolicy, FieldKind, FieldSpec, FieldValue};

/// CRUD intent of a form, which fixes its HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Read,
    Update,
    Delete,
}

impl Intent {
    pub fn method(self) -> Method {
        match self {
            Intent::Create => Method::Post,
            Intent::Read => Method::Get,
            Intent::Update => Method::Put,
            Intent::Delete => Method::Delete,
        }
    }
}

/// How the response body is written into the result element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// The whole body, stringified. Success and error bodies look the same.
    Json,
    /// The `message` field, or `Error: <error>`.
    Message,
}

/// Navigation triggered by one exact success message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub message: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    /// Id of the form element, e.g. `createUserForm`
    pub name: &'static str,
    pub title: &'static str,
    /// Collection path or endpoint, e.g. `/users` or `/login`
    pub endpoint: &'static str,
    pub intent: Intent,
    /// Input holding the record id, appended to the endpoint path
    pub id_input: Option<&'static str>,
    pub fields: &'static [FieldSpec],
    pub display: DisplayMode,
    /// Adds the session's `user_id` to the payload
    pub with_session_user: bool,
    pub redirect: Option<Redirect>,
}

impl FormSpec {
    /// Id of the element the response is written into: `createUserForm` → `createUserResult`.
    pub fn result_element(&self) -> String {
        format!("{}Result", self.name.trim_end_matches("Form"))
    }

    pub fn path(&self, values: &FormValues) -> String {
        match self.id_input {
            Some(input) => endpoint::resource(
                self.endpoint.trim_start_matches('/'),
                Some(values.get(input)),
            ),
            None => self.endpoint.to_string(),
        }
    }

    /// Serializes the payload fields into a flat JSON object.
    pub fn payload(&self, values: &FormValues, session: &SessionContext) -> Value {
        let mut payload = Map::new();

        for field in self.fields {
            if let Some(value) = field.read(values.get(field.input)) {
                payload.insert(field.name.to_string(), value.into());
            }
        }

        if self.with_session_user {
            if let Some(user_id) = session.user_id() {
                payload.insert("user_id".to_string(), Value::from(user_id.0));
            }
        }

        Value::Object(payload)
    }

    /// Builds the request for the values captured at submission time.
    ///
    /// Nothing is validated: malformed numbers are sent as `null` and the API decides.
    pub fn build_request(&self, values: &FormValues, session: &SessionContext) -> ApiRequest {
        let path = self.path(values);

        match self.intent {
            Intent::Read => ApiRequest::get(path),
            Intent::Delete => ApiRequest::delete(path),
            Intent::Create => ApiRequest::post(path, self.payload(values, session)),
            Intent::Update => ApiRequest::put(path, self.payload(values, session)),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.intent {
            Intent::Create => "Submit",
            Intent::Read => "Read",
            Intent::Update => "Update",
            Intent::Delete => "Delete",
        }
    }
}

/// Raw text of a form's inputs keyed by input id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, input: &str, value: impl Into<String>) -> Self {
        self.set(input, value);
        self
    }

    pub fn set(&mut self, input: &str, value: impl Into<String>) {
        self.0.insert(input.to_string(), value.into());
    }

    /// Text of `input`, empty when the input was never touched.
    pub fn get(&self, input: &str) -> &str {
        self.0.get(input).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Something holding form input values that other components may write into.
pub trait FieldTarget {
    fn set_field(&mut self, input: &str, value: String);
}

impl FieldTarget for FormValues {
    fn set_field(&mut self, input: &str, value: String) {
        self.set(input, value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    /// Text for the form's result element
    pub display: String,
    /// Location to navigate to, set only for an exact redirect message match
    pub navigate_to: Option<&'static str>,
}

impl FormOutcome {
    pub fn from_response(spec: &FormSpec, response: &ApiResponse) -> Self {
        let display = match spec.display {
            DisplayMode::Json => response.body.to_string(),
            DisplayMode::Message => match (response.message(), response.error()) {
                (Some(message), _) => message.to_string(),
                (None, Some(error)) => format!("Error: {}", error),
                (None, None) => response.body.to_string(),
            },
        };

        let navigate_to = spec
            .redirect
            .filter(|redirect| response.message() == Some(redirect.message))
            .map(|redirect| redirect.location);

        Self {
            display,
            navigate_to,
        }
    }
}

/// Submits a form and returns what to display.
///
/// # Returns
/// - `Ok(FormOutcome)` - The API answered; error bodies are displayed like successes
/// - `Err(Error::Transport)` - The API could not be reached; logged, display unchanged
/// - `Err(Error::InvalidBody)` - The answer was not JSON; logged, display unchanged
pub async fn submit<T: Transport>(
    transport: &T,
    spec: &FormSpec,
    values: &FormValues,
    session: &SessionContext,
) -> Result<FormOutcome, Error> {
    let request = spec.build_request(values, session);

    let response = transport.send(request).await.inspect_err(|e| {
        tracing::error!("Error submitting {}: {}", spec.name, e);
    })?;

    let outcome = FormOutcome::from_response(spec, &response);
    if let Some(location) = outcome.navigate_to {
        tracing::info!("{} succeeded, navigating to {}", spec.name, location);
    }

    Ok(outcome)
}
