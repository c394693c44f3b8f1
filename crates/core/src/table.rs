//! Table models bound by the views.
//!
//! A table is a plain ordered `Vec` of rows, kept in the order the backend returned them. This
//! module only describes how a row splits into display cells.

use crate::constants::{IMMUNIZATION_COLUMNS, SEARCH_COLUMNS};
use crate::model::{ImmunizationRecord, PatientSummary};
use crate::navigation::Route;

/// A row that can be laid out under a fixed set of columns.
pub trait TableRow {
    fn columns() -> &'static [&'static str];

    /// One cell per entry of [`TableRow::columns`], in the same order.
    fn cells(&self) -> Vec<String>;
}

impl TableRow for ImmunizationRecord {
    fn columns() -> &'static [&'static str] {
        &IMMUNIZATION_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.manufacturer.clone(),
            self.lot.clone(),
            self.provider.clone(),
            self.date.clone(),
        ]
    }
}

impl TableRow for PatientSummary {
    fn columns() -> &'static [&'static str] {
        &SEARCH_COLUMNS
    }

    /// The `profile` cell holds the route the row links to.
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.surname.clone(),
            self.dob.clone(),
            Route::get_patient(&self.id).to_url(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaccine_types::PatientId;

    #[test]
    fn test_immunization_cells_follow_columns() {
        let record = ImmunizationRecord {
            name: "MMR".into(),
            manufacturer: "Merck".into(),
            lot: "L1".into(),
            provider: "Clinic".into(),
            date: "2001-05-06".into(),
        };
        let cells = record.cells();
        assert_eq!(cells.len(), ImmunizationRecord::columns().len());
        assert_eq!(cells[2], "L1");
        assert_eq!(cells[4], "2001-05-06");
    }

    #[test]
    fn test_summary_profile_cell_links_to_patient() {
        let summary = PatientSummary {
            id: PatientId::new("abc").unwrap(),
            name: "Ada".into(),
            surname: "Lovelace".into(),
            dob: "1990-03-04".into(),
        };
        let cells = summary.cells();
        assert_eq!(cells.len(), PatientSummary::columns().len());
        assert_eq!(cells[4], "/get-patient?id=abc");
    }
}
