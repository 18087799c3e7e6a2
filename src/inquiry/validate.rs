use crate::error::IntakeError;
use crate::models::ContactForm;
use crate::validate::is_valid_email;

/// Server-side checks. Only name, email, and message are mandatory here;
/// phone, project type, and budget range are enforced by the form UI alone,
/// so programmatic clients may omit them.
pub fn check(form: &ContactForm) -> Result<(), IntakeError> {
    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.message.trim().is_empty()
    {
        return Err(IntakeError::Validation(
            "Name, email, and message are required fields".to_string(),
        ));
    }

    if !is_valid_email(form.email.trim()) {
        return Err(IntakeError::Validation("Invalid email format".to_string()));
    }

    Ok(())
}
