//! Navigation between views.
//!
//! A [`Route`] is a view path plus its query parameters, e.g. `/get-patient?id=<id>`. Flows
//! read their input from the current route and request navigation through a [`Navigator`],
//! which is supplied by whatever hosts the flows (a UI router, the command line, a test).

use crate::constants::{GET_PATIENT_ROUTE, ID_QUERY_PARAM};
use crate::{VaccineError, VaccineResult};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;
use vaccine_types::PatientId;

/// A view path and its query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    path: String,
    query: Vec<(String, String)>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// The route of the get-patient view for `id`.
    pub fn get_patient(id: &PatientId) -> Self {
        Self::new(GET_PATIENT_ROUTE).with_query(ID_QUERY_PARAM, id.as_str())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of the query parameter `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The patient identifier carried in the `id` query parameter, if present and non-empty.
    pub fn patient_id(&self) -> Option<PatientId> {
        self.query_param(ID_QUERY_PARAM)
            .and_then(|v| PatientId::new(v).ok())
    }

    /// Renders the route as a URL path with an encoded query string.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.query {
            serializer.append_pair(k, v);
        }
        format!("{}?{}", self.path, serializer.finish())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

impl FromStr for Route {
    type Err = VaccineError;

    /// Parses an in-app URL such as `/get-patient?id=abc`. A `#fragment` is dropped.
    fn from_str(url: &str) -> VaccineResult<Self> {
        let url = url.trim();
        if !url.starts_with('/') {
            return Err(VaccineError::Validation(format!(
                "route must start with '/', got: '{}'",
                url
            )));
        }
        let url = url.split_once('#').map_or(url, |(before, _)| before);

        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };
        let query = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self {
            path: path.to_string(),
            query,
        })
    }
}

/// The router collaborator: performs "navigate to route" and exposes the current route.
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    fn current(&self) -> Option<&Route>;
}

/// A navigator that only remembers where it has been.
#[derive(Debug, Default, Clone)]
pub struct History {
    routes: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route navigated to, oldest first.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        tracing::debug!("navigating to {}", route);
        self.routes.push(route);
    }

    fn current(&self) -> Option<&Route> {
        self.routes.last()
    }
}
