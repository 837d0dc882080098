use std::convert::Infallible;

use super::domain::{Nutrition, Profile, Recommendation};
use super::evaluation::{benefits, evaluate, explain};
use tracing::debug;

/// Maximum number of entries returned by a single recommendation run.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Resolve each catalog label through `lookup`, then filter, explain, rank and truncate.
///
/// Labels without nutrition are skipped. An empty result is a valid outcome.
pub fn recommend<L, F>(
    profile: &Profile,
    catalog_labels: &[L],
    mut lookup: F,
) -> Vec<Recommendation>
where
    L: AsRef<str>,
    F: FnMut(&str) -> Option<Nutrition>,
{
    match try_recommend(profile, catalog_labels, |label| {
        Ok::<_, Infallible>(lookup(label))
    }) {
        Ok(recommendations) => recommendations,
        Err(never) => match never {},
    }
}

/// Fallible form of [`recommend`]: the first lookup error stops resolution and is returned.
pub fn try_recommend<L, F, E>(
    profile: &Profile,
    catalog_labels: &[L],
    mut lookup: F,
) -> Result<Vec<Recommendation>, E>
where
    L: AsRef<str>,
    F: FnMut(&str) -> Result<Option<Nutrition>, E>,
{
    let mut candidates = Vec::with_capacity(catalog_labels.len());
    for label in catalog_labels {
        let label = label.as_ref();
        match lookup(label)? {
            Some(nutrition) => candidates.push(nutrition),
            None => debug!(label, "no nutrition data; skipping"),
        }
    }
    debug!(resolved = candidates.len(), "catalog entries gathered");

    Ok(rank(profile, candidates))
}

/// Filter already-resolved candidates against the profile and rank the survivors.
///
/// Candidates are expected in catalog order; ties on vitamin C keep that order.
pub fn rank<I>(profile: &Profile, candidates: I) -> Vec<Recommendation>
where
    I: IntoIterator<Item = Nutrition>,
{
    let mut accepted: Vec<Recommendation> = candidates
        .into_iter()
        .filter(|fruit| evaluate(fruit, profile).is_accepted())
        .map(|fruit| Recommendation {
            fruit: fruit.name().to_string(),
            reason: explain(&fruit, profile),
            nutritional_benefits: benefits(&fruit),
            nutrition: fruit.facts(),
        })
        .collect();

    debug!(accepted = accepted.len(), "profile rules applied");

    // `sort_by` is stable.
    accepted.sort_by(|a, b| b.nutrition.vitamin_c.total_cmp(&a.nutrition.vitamin_c));
    accepted.truncate(RECOMMENDATION_LIMIT);
    accepted
}
