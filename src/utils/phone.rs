/// Normalizes a recognizably Indonesian mobile number (08xx..., 8xx...,
/// 628xx...) to +62 form. Anything else is returned unchanged so stored
/// numbers never get mangled.
pub fn format_indonesian_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if let Some(rest) = digits.strip_prefix("62") {
        if rest.starts_with('8') {
            return format!("+62{rest}");
        }
    }
    if let Some(rest) = digits.strip_prefix('0') {
        if rest.starts_with('8') {
            return format!("+62{rest}");
        }
    }
    if digits.starts_with('8') {
        return format!("+62{digits}");
    }

    phone.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_indonesian_phone() {
        assert_eq!(format_indonesian_phone("081234567890"), "+6281234567890");
        assert_eq!(format_indonesian_phone("6281234567890"), "+6281234567890");
        assert_eq!(format_indonesian_phone("+6281234567890"), "+6281234567890");
        assert_eq!(format_indonesian_phone("81234567890"), "+6281234567890");
        assert_eq!(format_indonesian_phone("0812-3456-7890"), "+6281234567890");
    }

    #[test]
    fn test_format_leaves_unrecognized_input_alone() {
        assert_eq!(format_indonesian_phone("12345"), "12345");
        assert_eq!(format_indonesian_phone("0212345678"), "0212345678");
        assert_eq!(format_indonesian_phone(""), "");
    }
}
