use chrono::Utc;

/// Top-up reference code: "TOP" followed by the creation instant in
/// millisecond precision, matching codes already in the table.
pub fn generate_topup_code() -> String {
    format!("TOP{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_topup_code() {
        let code = generate_topup_code();
        assert!(code.starts_with("TOP"));
        assert!(code.len() > 3);
        assert!(code[3..].chars().all(|c| c.is_ascii_digit()));

        // millisecond timestamps are 13 digits in this era
        assert_eq!(code[3..].len(), 13);
    }
}
