/// Splits a name into words at case boundaries and non-alphanumeric
/// separators, so both `AttackPatternType` and `Related_Attack_Patterns`
/// come apart the same way.
pub fn split_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev_lower = false;
    for (i, c) in name.char_indices() {
        if !c.is_ascii_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&name[s..i]);
            }
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower {
            if let Some(s) = start.take() {
                words.push(&name[s..i]);
            }
            start = Some(i);
        } else if start.is_none() {
            start = Some(i);
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
    }
    if let Some(s) = start {
        words.push(&name[s..]);
    }
    words
}

pub fn snake_case(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub fn pascal_case(name: &str) -> String {
    let mut result = String::new();
    for word in split_words(name) {
        push_capitalized(&mut result, word);
    }
    result
}

/// Pascal-case words joined by underscores, e.g. `attack_pattern_catalog`
/// becomes `Attack_Pattern_Catalog`. Some taxonomy schemas name their
/// global elements this way.
pub fn pascal_underscore(name: &str) -> String {
    let words = split_words(name);
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push('_');
        }
        push_capitalized(&mut result, word);
    }
    result
}

fn push_capitalized(result: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        first.to_uppercase().for_each(|c| result.push(c));
        chars.flat_map(|c| c.to_lowercase()).for_each(|c| result.push(c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case() {
        assert_eq!(split_words("helloWorld"), vec!["hello", "World"]);
    }

    #[test]
    fn splits_mixed_separators() {
        assert_eq!(
            split_words("Related_Attack_Patterns"),
            vec!["Related", "Attack", "Patterns"]
        );
        assert_eq!(
            split_words("AttackPatternType"),
            vec!["Attack", "Pattern", "Type"]
        );
    }

    #[test]
    fn split_noop() {
        assert_eq!(split_words("hello"), vec!["hello"]);
    }

    #[test]
    fn acronyms_stay_one_word() {
        assert_eq!(snake_case("CAPEC"), "capec");
    }

    #[test]
    fn snake_case_normalizes() {
        assert_eq!(snake_case("AttackPatternType"), "attack_pattern_type");
        assert_eq!(snake_case("Related_Weakness"), "related_weakness");
        assert_eq!(snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn pascal_case_concatenates() {
        assert_eq!(pascal_case("attack_pattern"), "AttackPattern");
        assert_eq!(pascal_case("weakness_catalog"), "WeaknessCatalog");
    }

    #[test]
    fn pascal_underscore_keeps_separators() {
        assert_eq!(
            pascal_underscore("attack_pattern_catalog"),
            "Attack_Pattern_Catalog"
        );
    }
}
