use serde::{Deserialize, Serialize};

/// Grouping for a skill goal, used for the category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Technical,
    SoftSkills,
    Business,
}

impl GoalCategory {
    /// Human-readable name for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Technical => "Technical",
            GoalCategory::SoftSkills => "Soft Skills",
            GoalCategory::Business => "Business",
        }
    }

    /// CSS hook for category-specific badge colors.
    pub fn css_class(&self) -> &'static str {
        match self {
            GoalCategory::Technical => "technical",
            GoalCategory::SoftSkills => "soft-skills",
            GoalCategory::Business => "business",
        }
    }
}

/// Kind of learning resource attached to a goal.
///
/// An enum rather than a free-form tag so the icon dispatch in the planner
/// page stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Certification,
    Book,
}

/// A course, certification, or book recommended for a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    pub kind: ResourceKind,
    pub url: String,
}

/// One prioritized skill-development goal in the career planner.
///
/// `id` is stable across reorders; `priority` is derived from list position
/// and rewritten by [`reorder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGoal {
    pub id: String,
    pub name: String,
    pub category: GoalCategory,
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// 1-based rank; always the permutation `1..=len` after a reorder.
    pub priority: u32,
    pub resources: Vec<LearningResource>,
}

/// Move the goal at `source` so it sits at `dest`, then renumber priorities.
///
/// Standard list-splice semantics: the item is removed first, so with
/// `dest > source` it lands after the item that originally sat at `dest`,
/// and before it otherwise. `dest: None` (a drag cancelled outside any drop
/// target) and out-of-range indexes leave the list untouched. Every item's
/// priority is reassigned from its position, not just the moved one.
pub fn reorder(goals: &mut Vec<SkillGoal>, source: usize, dest: Option<usize>) {
    let Some(dest) = dest else { return };
    if source >= goals.len() || dest >= goals.len() {
        return;
    }
    let item = goals.remove(source);
    goals.insert(dest, item);
    for (pos, goal) in goals.iter_mut().enumerate() {
        goal.priority = pos as u32 + 1;
    }
}

/// Mean progress across all goals, rounded to the nearest percent.
pub fn overall_progress(goals: &[SkillGoal]) -> u8 {
    if goals.is_empty() {
        return 0;
    }
    let total: u32 = goals.iter().map(|g| g.progress as u32).sum();
    ((total as f64 / goals.len() as f64).round()) as u8
}

/// Total number of learning resources across all goals.
pub fn resource_count(goals: &[SkillGoal]) -> usize {
    goals.iter().map(|g| g.resources.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn goal(id: &str, name: &str, progress: u8, priority: u32) -> SkillGoal {
        SkillGoal {
            id: id.into(),
            name: name.into(),
            category: GoalCategory::Technical,
            progress,
            priority,
            resources: vec![LearningResource {
                name: format!("{name} fundamentals"),
                kind: ResourceKind::Course,
                url: "#".into(),
            }],
        }
    }

    fn sample_goals() -> Vec<SkillGoal> {
        vec![
            goal("1", "Cloud Computing", 65, 1),
            goal("2", "Leadership", 40, 2),
            goal("3", "Machine Learning", 30, 3),
            goal("4", "Product Strategy", 20, 4),
        ]
    }

    fn names(goals: &[SkillGoal]) -> Vec<&str> {
        goals.iter().map(|g| g.name.as_str()).collect()
    }

    fn priorities(goals: &[SkillGoal]) -> Vec<u32> {
        goals.iter().map(|g| g.priority).collect()
    }

    #[test]
    fn moving_third_item_to_front_renumbers_everything() {
        let mut goals = sample_goals();
        reorder(&mut goals, 2, Some(0));
        assert_eq!(
            names(&goals),
            vec![
                "Machine Learning",
                "Cloud Computing",
                "Leadership",
                "Product Strategy"
            ]
        );
        assert_eq!(priorities(&goals), vec![1, 2, 3, 4]);
    }

    #[test]
    fn moving_forward_lands_after_original_occupant() {
        let mut goals = sample_goals();
        reorder(&mut goals, 0, Some(2));
        assert_eq!(
            names(&goals),
            vec![
                "Leadership",
                "Machine Learning",
                "Cloud Computing",
                "Product Strategy"
            ]
        );
        assert_eq!(priorities(&goals), vec![1, 2, 3, 4]);
    }

    #[test]
    fn cancelled_drag_is_a_no_op() {
        let mut goals = sample_goals();
        let before = goals.clone();
        reorder(&mut goals, 1, None);
        assert_eq!(goals, before);
    }

    #[test]
    fn out_of_range_indexes_are_ignored() {
        let mut goals = sample_goals();
        let before = goals.clone();
        reorder(&mut goals, 9, Some(0));
        reorder(&mut goals, 0, Some(9));
        assert_eq!(goals, before);
    }

    #[test]
    fn priorities_stay_a_permutation_after_many_reorders() {
        let mut goals = sample_goals();
        for (src, dest) in [(0, 3), (2, 1), (3, 0), (1, 2), (0, 0)] {
            reorder(&mut goals, src, Some(dest));
            let mut ranks = priorities(&goals);
            ranks.sort_unstable();
            assert_eq!(ranks, vec![1, 2, 3, 4]);
        }
        // Ids survive reordering untouched.
        let mut ids: Vec<&str> = goals.iter().map(|g| g.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn overall_progress_is_the_rounded_mean() {
        let goals = sample_goals();
        // (65 + 40 + 30 + 20) / 4 = 38.75 -> 39
        assert_eq!(overall_progress(&goals), 39);
        assert_eq!(overall_progress(&[]), 0);
    }

    #[test]
    fn resource_count_sums_across_goals() {
        assert_eq!(resource_count(&sample_goals()), 4);
    }

    #[test]
    fn category_and_kind_serialize_as_snake_case_keys() {
        assert_eq!(
            serde_json::to_string(&GoalCategory::SoftSkills).unwrap(),
            "\"soft_skills\""
        );
        assert_eq!(
            serde_json::to_string(&ResourceKind::Certification).unwrap(),
            "\"certification\""
        );
    }

    #[test]
    fn goal_serde_roundtrip() {
        let goals = sample_goals();
        let json = serde_json::to_string(&goals).unwrap();
        let back: Vec<SkillGoal> = serde_json::from_str(&json).unwrap();
        assert_eq!(goals, back);
    }
}
