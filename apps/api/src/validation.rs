use crate::errors::AppError;

/// Checks a caller-supplied role, then trims it. Only the empty string is
/// rejected; a whitespace-only role trims to "" and is treated as unknown.
/// Role names keep their casing.
pub fn normalize_target_role(raw: &str) -> Result<&str, AppError> {
    if raw.is_empty() {
        return Err(AppError::Validation(
            "targetRole (string) is required".to_string(),
        ));
    }
    Ok(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(
            normalize_target_role("  Data Analyst \n").unwrap(),
            "Data Analyst"
        );
    }

    #[test]
    fn test_normalize_keeps_case() {
        assert_eq!(
            normalize_target_role("backend DEVELOPER").unwrap(),
            "backend DEVELOPER"
        );
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(
            normalize_target_role(""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_normalize_whitespace_only_trims_to_empty() {
        assert_eq!(normalize_target_role("   \t").unwrap(), "");
    }
}
