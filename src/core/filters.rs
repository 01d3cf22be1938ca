use crate::models::Profile;

/// Check whether `candidate` and `query` are mutually eligible
///
/// Both sides must declare a gender and what they are looking for, the
/// candidate must be looking for the query's gender and vice versa, and a
/// profile is never eligible against itself.
#[inline]
pub fn is_eligible(candidate: &Profile, query: &Profile) -> bool {
    if candidate.id == query.id {
        return false;
    }

    let (Some(candidate_gender), Some(candidate_seeks)) =
        (candidate.gender.as_deref(), candidate.looking_for.as_deref())
    else {
        return false;
    };
    let (Some(query_gender), Some(query_seeks)) =
        (query.gender.as_deref(), query.looking_for.as_deref())
    else {
        return false;
    };

    candidate_seeks == query_gender && query_seeks == candidate_gender
}
