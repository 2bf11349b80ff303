//! Tests for field validators
//!
//! These tests pin down each field rule, including:
//! - Exact error messages returned to forms
//! - First-failing-condition ordering for multi-step rules
//! - Date of birth age arithmetic around birthdays and leap days

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::ValidationResult;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn message(result: ValidationResult) -> String {
        result.message().unwrap_or_default().to_string()
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("a@b.co").is_valid());
        assert!(validate_email("Jane.Doe@Example.COM").is_valid());
        assert!(validate_email("user@mail.example.com").is_valid());

        for bad in ["a@b.c", "", "plainaddress", "a@@b.co", "a b@c.co", "a@b co.in", "@b.co"] {
            assert_eq!(message(validate_email(bad)), "Invalid email address", "{bad}");
        }
    }

    #[test]
    fn test_accepted_emails_have_single_at_and_long_suffix() {
        let samples = [
            "a@b.co",
            "shop.owner@store.example.in",
            "x+y@z.io",
            "a@b.c",
            "a@b@c.co",
            "no-domain@",
            "trailing@dot.",
        ];

        for email in samples.iter().filter(|e| validate_email(e).is_valid()) {
            assert_eq!(email.matches('@').count(), 1, "{email}");
            let (local, domain) = email.split_once('@').unwrap();
            assert!(!local.is_empty() && !local.contains(char::is_whitespace));
            let (_, suffix) = domain.rsplit_once('.').unwrap();
            assert!(suffix.chars().count() >= 2, "{email}");
        }
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("1234567890").is_valid());
        assert!(validate_phone("+911234567890").is_valid());
        assert!(validate_phone("123456789012").is_valid());

        for bad in ["", "123456789", "1234567890123", "12345-67890", "+", "++1234567890"] {
            assert_eq!(message(validate_phone(bad)), "Invalid phone number", "{bad}");
        }
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Jo").is_valid());
        assert!(validate_name("  Jane Doe  ").is_valid());
        assert!(validate_name(&"a".repeat(50)).is_valid());

        let too_long = "a".repeat(51);
        for bad in ["", "J", "   J  ", "John3", "O'Brien", too_long.as_str()] {
            assert_eq!(
                message(validate_name(bad)),
                "Name should be 2–50 letters only",
                "{bad}"
            );
        }
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("abc123").is_valid());
        assert!(validate_password("P@ss1!").is_valid());
        assert!(validate_password("Secure&Pass2024").is_valid());

        let expected = "Password must be at least 6 characters, include a letter & number";
        for bad in ["", "abcdef", "123456", "ab1", "abc12#", "abc 123"] {
            assert_eq!(message(validate_password(bad)), expected, "{bad}");
        }
    }

    #[test]
    fn test_password_rule_matches_its_definition() {
        let allowed = |c: char| c.is_ascii_alphanumeric() || "@$!%*?&".contains(c);
        let samples = [
            "abc123", "abcdef", "a1", "a1a1a1", "!!!!!!1a", "Zz9@@@", "abc 123", "ÄÖÜ123",
            "1234567a", "a-12345",
        ];

        for s in samples {
            let expected = s.chars().count() >= 6
                && s.chars().any(|c| c.is_ascii_alphabetic())
                && s.chars().any(|c| c.is_ascii_digit())
                && s.chars().all(allowed);
            assert_eq!(validate_password(s).is_valid(), expected, "{s}");
        }
    }

    #[test]
    fn test_dob_ordering_of_failures() {
        let today = date(2024, 5, 16);

        assert_eq!(message(validate_dob_on("", today)), "Date of Birth is required");

        let malformed_inputs = [
            "2010-05-15",
            "1-5-2010",
            "15/05/2010",
            "00-05-2010",
            "32-01-2000",
            "15-13-2000",
            "15-05-1899",
            "15-05-2100",
        ];
        for malformed in malformed_inputs {
            assert_eq!(
                message(validate_dob_on(malformed, today)),
                "DOB must be in dd-mm-yyyy format",
                "{malformed}"
            );
        }

        for impossible in ["31-02-2000", "29-02-2001", "31-04-1990"] {
            assert_eq!(
                message(validate_dob_on(impossible, today)),
                "Invalid Date of Birth",
                "{impossible}"
            );
        }

        assert_eq!(
            message(validate_dob_on("01-01-2020", today)),
            "You must be at least 13 years old"
        );
    }

    #[test]
    fn test_dob_accepts_old_enough_users() {
        let today = date(2024, 5, 16);
        assert!(validate_dob_on("15-05-2010", today).is_valid());
        assert!(validate_dob_on("29-02-2008", today).is_valid());
        assert!(validate_dob_on("01-01-1900", today).is_valid());
    }

    #[test]
    fn test_dob_thirteenth_birthday_boundary() {
        let today = date(2024, 5, 16);

        // Exactly 13 today
        assert!(validate_dob_on("16-05-2011", today).is_valid());

        // Birthday is tomorrow
        assert_eq!(
            message(validate_dob_on("17-05-2011", today)),
            "You must be at least 13 years old"
        );
    }

    #[test]
    fn test_age_on_leap_day_birthday() {
        let born = date(2008, 2, 29);
        assert_eq!(age_on(born, date(2021, 2, 28)), 12);
        assert_eq!(age_on(born, date(2021, 3, 1)), 13);
        assert_eq!(age_on(born, date(2024, 2, 29)), 16);
    }

    #[test]
    fn test_address_line_validation() {
        assert!(validate_address_line("12 Main St").is_valid());
        assert!(validate_address_line("abcde").is_valid());

        for bad in ["", "abcd", "  ab  "] {
            assert_eq!(
                message(validate_address_line(bad)),
                "Address must be at least 5 characters",
                "{bad}"
            );
        }
    }

    #[test]
    fn test_city_state_country_validation() {
        assert!(validate_city("New York").is_valid());
        assert!(validate_state(" Karnataka ").is_valid());
        assert!(validate_country("India").is_valid());

        assert_eq!(message(validate_city("N")), "City should be 2–50 letters only");
        assert_eq!(message(validate_state("Zone 5")), "State should be 2–50 letters only");
        assert_eq!(message(validate_country("")), "Country should be 2–50 letters only");
    }

    #[test]
    fn test_postal_code_validation() {
        for good in ["560001", "SW1A 1AA", "12345-6789", " 1234 "] {
            assert!(validate_postal_code(good).is_valid(), "{good}");
        }

        for bad in ["", "123", "12345678901", "12_34"] {
            assert_eq!(message(validate_postal_code(bad)), "Invalid postal code", "{bad}");
        }
    }

    #[test]
    fn test_shop_name_validation() {
        assert!(validate_shop_name("Tom & Jerry-Store 2").is_valid());
        assert!(validate_shop_name("ABC").is_valid());

        for short in ["", "A", "  ab  "] {
            assert_eq!(
                message(validate_shop_name(short)),
                "Shop name must be at least 3 characters long",
                "{short}"
            );
        }

        assert_eq!(
            message(validate_shop_name("Shop!")),
            "Shop name can only contain letters, numbers, spaces, & and -"
        );
    }

    #[test]
    fn test_validators_are_idempotent() {
        let today = date(2024, 5, 16);
        let inputs = ["", "abc123", "a@b.co", "15-05-2010", "Tom & Jerry", "560001"];

        for kind in FieldKind::ALL {
            for input in inputs {
                assert_eq!(
                    kind.validate_on(input, today),
                    kind.validate_on(input, today),
                    "{kind} {input}"
                );
            }
        }
    }

    #[test]
    fn test_every_field_kind_rejects_empty_input() {
        for kind in FieldKind::ALL {
            assert!(!kind.validate("").is_valid(), "{kind}");
        }
    }

    #[test]
    fn test_field_kind_dispatch() {
        assert!(FieldKind::Email.validate("a@b.co").is_valid());
        assert!(FieldKind::PostalCode.validate("560001").is_valid());
        assert_eq!(
            FieldKind::ShopName.validate("A"),
            ValidationResult::invalid("Shop name must be at least 3 characters long")
        );
        assert!(FieldKind::DateOfBirth
            .validate_on("15-05-2010", date(2024, 5, 16))
            .is_valid());
    }

    #[test]
    fn test_field_kind_parsing() {
        assert_eq!("dateOfBirth".parse::<FieldKind>().unwrap(), FieldKind::DateOfBirth);
        assert_eq!("POSTALCODE".parse::<FieldKind>().unwrap(), FieldKind::PostalCode);
        assert!("zip".parse::<FieldKind>().is_err());

        for kind in FieldKind::ALL {
            assert_eq!(kind.to_string().parse::<FieldKind>().unwrap(), kind);
        }

        let json = serde_json::to_string(&FieldKind::ShopName).unwrap();
        assert_eq!(json, "\"shopName\"");
    }
}
