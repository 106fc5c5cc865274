//! UI Components
//!
//! Leptos components for the BOPM form.

mod crew;
mod fields;
mod identification;
mod occurrence;
mod report_panel;
mod seized_list;
mod support_list;

pub use crew::CrewSection;
pub use fields::{TextAreaField, TextField};
pub use identification::IdentificationSection;
pub use occurrence::OccurrenceSection;
pub use report_panel::ReportPanel;
pub use seized_list::SeizedList;
pub use support_list::SupportList;
