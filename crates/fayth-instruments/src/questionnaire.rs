//! DSM-5 and ASRS v1.1 questionnaires: item banks, domain scoring,
//! presentation classification, follow-up selection and interpretation.

pub mod asrs;
pub mod context;
pub mod dsm5;
pub mod followups;
pub mod interpretation;

use fayth_core::models::questionnaire::{LIKERT_MAX, Responses};

/// Sum of responses over `ids` (missing = 0) and the maximum possible sum.
pub(crate) fn likert_totals<'a>(
    responses: &Responses,
    ids: impl IntoIterator<Item = &'a str>,
) -> (u32, u32) {
    ids.into_iter().fold((0, 0), |(total, max), id| {
        let response = responses.get(id).copied().unwrap_or(0);
        (total + u32::from(response), max + u32::from(LIKERT_MAX))
    })
}

/// `round(total / max * 100)`, or 0 for an empty domain.
pub(crate) fn percentage(total: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (f64::from(total) / f64::from(max) * 100.0).round() as u32
}
