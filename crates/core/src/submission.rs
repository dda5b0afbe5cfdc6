//! Validation of inbound project submissions.
//!
//! A submission arrives as a flat set of untrusted string fields. The only
//! rule is that the five required fields must be non-empty after trimming;
//! optional fields pass through untouched apart from trimming. No email or
//! phone format checks are performed; any non-empty string is accepted.

/// Raw form fields as received from the submitter.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
}

/// A submission that passed validation. All required fields are non-empty
/// and every field is whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
}

/// Validate a submission, reporting **every** missing required field.
///
/// Returns the full list of error messages rather than failing on the first
/// missing field, so the submitter can fix the whole form in one pass.
pub fn validate(form: &SubmissionForm) -> Result<ValidSubmission, Vec<String>> {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    let project_type = form.project_type.trim();
    let description = form.description.trim();

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push("Full name is required.".to_string());
    }
    if email.is_empty() {
        errors.push("Email is required.".to_string());
    }
    if phone.is_empty() {
        errors.push("Phone number is required.".to_string());
    }
    if project_type.is_empty() {
        errors.push("Project type is required.".to_string());
    }
    if description.is_empty() {
        errors.push("Project description is required.".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidSubmission {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        project_type: project_type.to_string(),
        description: description.to_string(),
        budget: form.budget.trim().to_string(),
        deadline: form.deadline.trim().to_string(),
    })
}
