//! Validation for the `[chat]` and `[secrets]` sections.

use crate::schema::SupaConfig;

use super::helpers::validate_not_blank;

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &SupaConfig) {
    if let Some(prompt) = &config.chat.system_prompt {
        validate_not_blank(errors, "chat.system_prompt", prompt);
    }
}

pub(crate) fn validate_secrets(errors: &mut Vec<String>, config: &SupaConfig) {
    let name = &config.secrets.name;
    validate_not_blank(errors, "secrets.name", name);
    if name.chars().any(|c| c == '=' || c.is_whitespace()) {
        errors.push(format!("secrets.name = {name:?} is not a valid variable name"));
    }
}
