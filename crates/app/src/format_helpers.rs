/// Initials for an avatar fallback, first letters of the first two words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
    }

    #[test]
    fn initials_ignore_extra_words() {
        assert_eq!(initials("Dr. Aisha Patel"), "DA");
    }

    #[test]
    fn initials_single_word() {
        assert_eq!(initials("sarah"), "S");
    }

    #[test]
    fn initials_empty() {
        assert_eq!(initials(""), "");
    }
}
