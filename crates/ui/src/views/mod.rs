mod intro;
mod state;
pub(crate) mod survey;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use intro::INTRO_MARKDOWN;
pub use state::ViewError;
pub use survey::SurveyView;
