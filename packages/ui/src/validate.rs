//! Client-side form validation, run before any network call.

use crate::habit_form::HabitDraft;

/// Validate a registration form. Returns the first failing rule's message:
/// password confirmation, then name length, then password length.
pub fn registration_error(name: &str, password: &str, confirm_password: &str) -> Option<String> {
    if password != confirm_password {
        return Some("As senhas não coincidem".to_string());
    }
    if name.chars().count() < 3 {
        return Some("O nome deve ter pelo menos 3 caracteres".to_string());
    }
    if password.chars().count() < 6 {
        return Some("A senha deve ter pelo menos 6 caracteres".to_string());
    }
    None
}

/// Validate a habit draft: name 2–100 characters after trimming, description
/// up to 500.
pub fn habit_draft_error(draft: &HabitDraft) -> Option<String> {
    let name_length = draft.name.trim().chars().count();
    if !(2..=100).contains(&name_length) {
        return Some("O nome deve ter entre 2 e 100 caracteres".to_string());
    }
    if draft.description.chars().count() > 500 {
        return Some("A descrição deve ter no máximo 500 caracteres".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_rejects_mismatched_passwords_first() {
        // Mismatch wins even when the name is also too short.
        assert_eq!(
            registration_error("Jo", "secret-1", "secret-2").as_deref(),
            Some("As senhas não coincidem")
        );
    }

    #[test]
    fn registration_rejects_short_name() {
        assert_eq!(
            registration_error("Jo", "secret-1", "secret-1").as_deref(),
            Some("O nome deve ter pelo menos 3 caracteres")
        );
    }

    #[test]
    fn registration_rejects_short_password() {
        assert_eq!(
            registration_error("João", "12345", "12345").as_deref(),
            Some("A senha deve ter pelo menos 6 caracteres")
        );
    }

    #[test]
    fn registration_accepts_valid_input() {
        assert_eq!(registration_error("João", "secret-1", "secret-1"), None);
    }

    #[test]
    fn habit_name_must_be_between_2_and_100_characters() {
        let mut draft = HabitDraft {
            name: "A".to_string(),
            ..HabitDraft::default()
        };
        assert!(habit_draft_error(&draft).is_some());

        draft.name = "Academia".to_string();
        assert_eq!(habit_draft_error(&draft), None);

        draft.name = "x".repeat(101);
        assert!(habit_draft_error(&draft).is_some());

        // Whitespace does not count towards the minimum.
        draft.name = "  a  ".to_string();
        assert!(habit_draft_error(&draft).is_some());
    }

    #[test]
    fn habit_description_is_capped_at_500_characters() {
        let mut draft = HabitDraft {
            name: "Academia".to_string(),
            description: "x".repeat(500),
            ..HabitDraft::default()
        };
        assert_eq!(habit_draft_error(&draft), None);

        draft.description.push('x');
        assert_eq!(
            habit_draft_error(&draft).as_deref(),
            Some("A descrição deve ter no máximo 500 caracteres")
        );
    }
}
