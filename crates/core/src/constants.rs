//! Constants used throughout the vaccine-id core crate.
//!
//! Backend resource paths, navigation routes and table column names live here so that flows,
//! the HTTP client and the command line agree on them.

/// Backend resource for creating and fetching patients.
pub const PATIENT_RESOURCE: &str = "patient";

/// Backend resource for patient search.
pub const PATIENT_SEARCH_RESOURCE: &str = "patient/search";

/// Backend resource for the service health check.
pub const HEALTH_RESOURCE: &str = "health";

/// Route of the get-patient view.
pub const GET_PATIENT_ROUTE: &str = "/get-patient";

/// Query parameter carrying the patient identifier.
pub const ID_QUERY_PARAM: &str = "id";

/// Date layout entered on forms: month/day/year.
pub const FORM_DATE_HINT: &str = "M/D/YYYY";

/// Date layout sent to the backend.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns of the immunization table on the get-patient view.
pub const IMMUNIZATION_COLUMNS: [&str; 5] = ["name", "manufacturer", "lot", "provider", "date"];

/// Columns of the search result table. `profile` holds the per-row navigation action.
pub const SEARCH_COLUMNS: [&str; 5] = ["id", "name", "surname", "dob", "profile"];

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

