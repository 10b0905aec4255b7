use crate::core::criteria;
use crate::models::{CoffeeBean, Dimension, PreferenceVector, Recommendation};
use thiserror::Error;

/// Errors from the ranking engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("limit must be a positive integer, got {0}")]
    InvalidLimit(usize),
}

/// Score and rank a catalog against a preference vector
///
/// Every dimension rule is evaluated for every bean; contributions are
/// summed into the raw score and the triggered reasons collected in
/// evaluation order. Beans are sorted by descending score and truncated
/// to `limit`. The sort is stable, so beans with equal scores keep their
/// relative catalog order.
///
/// An empty catalog is valid and yields an empty list; a zero limit is
/// rejected before any scoring.
pub fn rank(
    catalog: &[CoffeeBean],
    prefs: &PreferenceVector,
    limit: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    if limit == 0 {
        return Err(RecommendError::InvalidLimit(limit));
    }

    let mut recommendations: Vec<Recommendation> = catalog
        .iter()
        .map(|bean| score_bean(bean, prefs))
        .collect();

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations.truncate(limit);

    Ok(recommendations)
}

fn score_bean(bean: &CoffeeBean, prefs: &PreferenceVector) -> Recommendation {
    let mut score = 0;
    let mut match_reasons = Vec::new();

    for dimension in Dimension::ALL {
        if let Some((points, reason)) = criteria::evaluate(dimension, bean, prefs) {
            score += points;
            match_reasons.push(reason.to_string());
        }
    }

    Recommendation {
        bean: bean.clone(),
        score,
        match_reasons,
    }
}
