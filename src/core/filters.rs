use crate::models::{MatchCriteria, Mood, Project};

/// Time-estimate token for quick projects.
pub const QUICK_TIME_TOKEN: &str = "4-6";
/// Time-estimate tokens for projects worth taking time on.
pub const MEDIUM_TIME_TOKEN: &str = "8-12";
pub const LONG_TIME_TOKEN: &str = "16-20";

/// Check if a project belongs to at least one requested category
///
/// An empty criteria set means no category preference and admits every
/// project. Projects may belong to several categories; one overlap is
/// enough.
#[inline]
pub fn matches_category(project: &Project, criteria: &MatchCriteria) -> bool {
    if criteria.categories.is_empty() {
        return true;
    }

    project
        .category
        .iter()
        .any(|category| criteria.categories.iter().any(|wanted| wanted == category))
}

/// Check the stash-buster constraint
#[inline]
pub fn matches_stash_buster(project: &Project, criteria: &MatchCriteria) -> bool {
    if criteria.mood == Mood::StashBuster {
        return project.is_stash_buster;
    }

    true
}

/// Check the time-budget constraint
///
/// Time estimates are free-text labels, so this is a token match against
/// the known hour-range tokens, not a numeric comparison.
#[inline]
pub fn matches_time_budget(project: &Project, criteria: &MatchCriteria) -> bool {
    match criteria.mood {
        Mood::Quick => project.time_estimate.contains(QUICK_TIME_TOKEN),
        Mood::TakeTime => {
            project.time_estimate.contains(MEDIUM_TIME_TOKEN)
                || project.time_estimate.contains(LONG_TIME_TOKEN)
        }
        _ => true,
    }
}

/// Check that the user owns every machine the project requires
///
/// An empty criteria set means the machine question imposes no constraint.
/// The containment runs the opposite way from the category rule: the
/// user's machines must be a superset of the project's requirements, so a
/// project with no required machines always passes.
#[inline]
pub fn matches_machine_ownership(project: &Project, criteria: &MatchCriteria) -> bool {
    if criteria.machines.is_empty() {
        return true;
    }

    project
        .machines_required
        .iter()
        .all(|required| criteria.machines.iter().any(|owned| owned == required))
}
