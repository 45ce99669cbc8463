use std::fmt;

use thiserror::Error;

use crate::model::ComparisonResponse;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FoolRateError {
    #[error("fool rate is undefined without comparison responses")]
    EmptyResponseSet,
}

/// Percentage of comparison answers where the rater picked the generated image.
///
/// Always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FoolRate(f64);

impl FoolRate {
    /// Compute the fool rate over the responses recorded so far.
    ///
    /// # Errors
    ///
    /// Returns `FoolRateError::EmptyResponseSet` when `responses` is empty.
    pub fn from_responses(responses: &[ComparisonResponse]) -> Result<Self, FoolRateError> {
        if responses.is_empty() {
            return Err(FoolRateError::EmptyResponseSet);
        }
        let fooled = responses.iter().filter(|r| r.is_fooled()).count();
        #[allow(clippy::cast_precision_loss)]
        let percent = 100.0 * fooled as f64 / responses.len() as f64;
        Ok(Self(percent))
    }

    #[must_use]
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Two-decimal rendering without the percent sign, as written to exports.
    #[must_use]
    pub fn to_fixed(self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for FoolRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, Side};

    fn response(id: u32, response: Side, correct: Side) -> ComparisonResponse {
        ComparisonResponse::new(ItemId::new(id), response, correct)
    }

    #[test]
    fn empty_set_is_undefined() {
        assert_eq!(
            FoolRate::from_responses(&[]),
            Err(FoolRateError::EmptyResponseSet)
        );
    }

    #[test]
    fn all_correct_is_zero() {
        let responses: Vec<_> = (1..=20)
            .map(|id| {
                let side = if id % 2 == 0 { Side::A } else { Side::B };
                response(id, side, side)
            })
            .collect();
        let rate = FoolRate::from_responses(&responses).unwrap();
        assert_eq!(rate.percent(), 0.0);
    }

    #[test]
    fn all_fooled_is_hundred() {
        let responses = vec![response(1, Side::A, Side::B), response(2, Side::B, Side::A)];
        let rate = FoolRate::from_responses(&responses).unwrap();
        assert_eq!(rate.percent(), 100.0);
        assert_eq!(rate.to_string(), "100.00%");
    }

    #[test]
    fn rate_ignores_response_order() {
        let mut responses = vec![
            response(1, Side::A, Side::B),
            response(2, Side::A, Side::A),
            response(3, Side::B, Side::B),
        ];
        let forward = FoolRate::from_responses(&responses).unwrap();
        responses.reverse();
        let backward = FoolRate::from_responses(&responses).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.to_fixed(), "33.33");
    }
}
