use paxlist_core::{check_identifier, normalize_identifier, validate_identifier, IdentifierError};

const KNOWN_VALID: &[&str] = &["52998224725", "11144477735", "12345678909"];

#[test]
fn known_valid_identifiers_pass() {
    for identifier in KNOWN_VALID {
        assert!(validate_identifier(identifier), "{identifier} should pass");
    }
}

#[test]
fn punctuation_is_ignored() {
    assert!(validate_identifier("529.982.247-25"));
    assert!(validate_identifier(" 111-444-777 35 "));
}

#[test]
fn incrementing_last_digit_fails() {
    for identifier in KNOWN_VALID {
        let mut digits = identifier.as_bytes().to_vec();
        let last = digits[10] - b'0';
        digits[10] = b'0' + (last + 1) % 10;
        let tampered = String::from_utf8(digits).unwrap();

        assert!(!validate_identifier(&tampered), "{tampered} should fail");
    }
}

#[test]
fn repeated_digit_sentinels_fail() {
    for digit in '0'..='9' {
        let sentinel = std::iter::repeat(digit).take(11).collect::<String>();
        assert!(!validate_identifier(&sentinel), "{sentinel} should fail");
        assert_eq!(
            check_identifier(&sentinel),
            Err(IdentifierError::RepeatedDigit)
        );
    }
}

#[test]
fn wrong_lengths_fail() {
    for candidate in ["", "abc", "5299822472", "529982247250", "5 2 9"] {
        let len = normalize_identifier(candidate).len();
        assert!(!validate_identifier(candidate), "`{candidate}` should fail");
        assert_eq!(
            check_identifier(candidate),
            Err(IdentifierError::WrongLength { len })
        );
    }
}

#[test]
fn validation_is_deterministic() {
    for candidate in ["52998224725", "52998224726", "garbage", "00000000000"] {
        let first = validate_identifier(candidate);
        for _ in 0..3 {
            assert_eq!(validate_identifier(candidate), first);
        }
    }
}
