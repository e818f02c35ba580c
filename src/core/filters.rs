use crate::models::Dog;

/// Check whether a candidate may be paired with the target dog
///
/// A candidate is skipped when it is the target itself, belongs to the
/// same owner, or has the same gender.
#[inline]
pub fn is_eligible_candidate(target: &Dog, candidate: &Dog) -> bool {
    if candidate.id == target.id {
        return false;
    }

    if candidate.owner_id == target.owner_id {
        return false;
    }

    candidate.gender != target.gender
}

/// Candidates that survive [`is_eligible_candidate`], in input order
pub fn eligible_candidates<'a>(
    target: &'a Dog,
    candidates: &'a [Dog],
) -> impl Iterator<Item = &'a Dog> + 'a {
    candidates
        .iter()
        .filter(move |candidate| is_eligible_candidate(target, candidate))
}
