use crate::core::validate_email;

/// Result of checking a batch of email addresses
pub struct EmailCheckResult {
    pub valid: bool,
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

/// Check each address with the creation-time email rule
pub fn check_emails(emails: &[String]) -> EmailCheckResult {
    let (accepted, rejected): (Vec<String>, Vec<String>) =
        emails.iter().cloned().partition(|e| validate_email(e));

    EmailCheckResult {
        valid: rejected.is_empty(),
        accepted,
        rejected,
    }
}

/// Print email check result
pub fn print_email_check_result(result: &EmailCheckResult) {
    for email in &result.accepted {
        println!("  VALID    {}", email);
    }
    for email in &result.rejected {
        println!("  INVALID  {}", email);
    }
}
