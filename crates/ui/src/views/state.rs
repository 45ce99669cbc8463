use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Answer submitted without a selection; re-prompt.
    MissingSelection,
    /// Question sets could not be built at start.
    SetupFailed,
    ExportFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::MissingSelection => "Please select an answer before continuing.",
            ViewError::SetupFailed => {
                "The test could not be prepared: not enough images are available."
            }
            ViewError::ExportFailed => "Saving the results failed. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::InvalidInput => ViewError::MissingSelection,
            SessionError::InsufficientPool { .. } | SessionError::Pool(_) => ViewError::SetupFailed,
            _ => ViewError::Unknown,
        }
    }
}
