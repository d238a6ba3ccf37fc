//! Form validation applied before any network call.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Password policy: at least one uppercase letter, one lowercase letter,
/// and six characters.
///
/// # Errors
///
/// The first violated rule's user-facing message.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

/// Required fields for the add/update lesson forms.
///
/// # Errors
///
/// A message naming the first missing field.
pub fn validate_lesson_form(
    title: &str,
    description: &str,
    category: &str,
    emotional_tone: &str,
) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title is required.");
    }
    if description.trim().is_empty() {
        return Err("Description is required.");
    }
    if category.is_empty() {
        return Err("Pick a category.");
    }
    if emotional_tone.is_empty() {
        return Err("Pick an emotional tone.");
    }
    Ok(())
}

/// Registration form: name and email are required on top of the password
/// policy.
///
/// # Errors
///
/// A message for the first violated rule.
pub fn validate_register_form(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name is required.");
    }
    if email.trim().is_empty() {
        return Err("Email is required.");
    }
    validate_password(password)
}
