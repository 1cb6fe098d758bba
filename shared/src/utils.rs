use crate::constants::{DELETE_CONFIRM_WORDS, TOKEN_MIN_LEN};

pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub fn is_token_plausible(token: &str) -> bool {
    token.chars().count() >= TOKEN_MIN_LEN
}

pub fn is_delete_confirmed(answer: &str) -> bool {
    let answer = answer.to_lowercase();
    DELETE_CONFIRM_WORDS.iter().any(|word| *word == answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate_chars("привет", 3), "при");
        assert_eq!(truncate_chars("ab", 10), "ab");
    }

    #[test]
    fn delete_words() {
        assert!(is_delete_confirmed("DELETE"));
        assert!(is_delete_confirmed("Удалить"));
        assert!(is_delete_confirmed("del"));
        assert!(!is_delete_confirmed("remove"));
        assert!(!is_delete_confirmed(""));
    }

    #[test]
    fn token_length() {
        assert!(!is_token_plausible("short"));
        assert!(is_token_plausible("0123456789"));
    }
}
