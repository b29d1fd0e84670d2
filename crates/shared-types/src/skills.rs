/// Fixed skill catalog shown by the onboarding wizard and the profile editor.
///
/// Rendering always follows catalog order; a user's selection carries no
/// ordering of its own.
pub const SKILL_CATALOG: &[&str] = &[
    "React",
    "JavaScript",
    "Python",
    "Data Science",
    "Machine Learning",
    "Cloud Computing",
    "DevOps",
    "UI/UX Design",
    "Product Management",
    "Leadership",
    "Marketing",
    "Sales",
    "Cybersecurity",
    "Mobile Development",
];

/// Toggle membership of `skill` in the selection.
///
/// Present entries are removed, absent ones appended; toggling twice
/// restores the original selection.
pub fn toggle(selected: &mut Vec<String>, skill: &str) {
    if let Some(pos) = selected.iter().position(|s| s == skill) {
        selected.remove(pos);
    } else {
        selected.push(skill.to_string());
    }
}

/// Whether the given skill is currently selected.
pub fn is_selected(selected: &[String], skill: &str) -> bool {
    selected.iter().any(|s| s == skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selected = vec!["Python".to_string()];
        toggle(&mut selected, "Leadership");
        assert!(is_selected(&selected, "Leadership"));

        toggle(&mut selected, "Python");
        assert!(!is_selected(&selected, "Python"));
    }

    #[test]
    fn double_toggle_restores_original_selection() {
        let original = vec!["React".to_string(), "DevOps".to_string()];

        let mut selected = original.clone();
        toggle(&mut selected, "Sales");
        toggle(&mut selected, "Sales");
        assert_eq!(selected, original);

        // Same law starting from a selected skill.
        toggle(&mut selected, "React");
        toggle(&mut selected, "React");
        assert_eq!(
            selected.iter().filter(|s| *s == "React").count(),
            1,
            "React should still be selected exactly once"
        );
    }

    #[test]
    fn catalog_has_no_duplicates() {
        let mut names: Vec<&str> = SKILL_CATALOG.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SKILL_CATALOG.len());
    }
}
