mod markdown_vm;
mod survey_vm;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use survey_vm::{SurveyIntent, SurveyVm, export_results};
