use profilebook_core::{validate_profile, Profile, ProfileField, DATE_FORMAT_MESSAGE};

fn valid_profile() -> Profile {
    Profile::new("Ada", "Lovelace", "1815-12-10", "British", "Mathematician.")
}

#[test]
fn fully_valid_profile_has_no_errors() {
    assert!(validate_profile(&valid_profile()).is_empty());
}

#[test]
fn picture_is_never_validated() {
    let mut profile = valid_profile();
    assert!(validate_profile(&profile).is_empty());

    profile.picture = Some(String::new());
    assert!(validate_profile(&profile).is_empty());
}

#[test]
fn each_empty_field_gets_a_required_message() {
    let expected = [
        (ProfileField::FirstName, "First name is required"),
        (ProfileField::LastName, "Last name is required"),
        (ProfileField::DateOfBirth, "Date of Birth is required"),
        (ProfileField::Nationality, "Nationality is required"),
        (ProfileField::ShortBio, "Short Bio is required"),
    ];

    for (field, message) in expected {
        let mut profile = valid_profile();
        profile.set_field(field, "");

        let errors = validate_profile(&profile);
        assert_eq!(errors.len(), 1, "one error expected for {field}");
        assert_eq!(errors.get(&field).map(String::as_str), Some(message));
    }
}

#[test]
fn whitespace_only_counts_as_empty() {
    let mut profile = valid_profile();
    profile.set_field(ProfileField::ShortBio, "   \t ");

    let errors = validate_profile(&profile);
    assert_eq!(
        errors.get(&ProfileField::ShortBio).map(String::as_str),
        Some("Short Bio is required")
    );
}

#[test]
fn all_empty_fields_are_reported_in_display_order() {
    let mut profile = valid_profile();
    for field in ProfileField::ALL {
        profile.set_field(field, " ");
    }

    let errors = validate_profile(&profile);
    assert_eq!(errors.len(), ProfileField::ALL.len());
    let keys: Vec<ProfileField> = errors.keys().copied().collect();
    assert_eq!(keys, ProfileField::ALL);
}

#[test]
fn malformed_date_of_birth_gets_the_format_message() {
    for malformed in ["1990-1-1", "10-12-1815", "1815/12/10", "born 1815-12-10"] {
        let mut profile = valid_profile();
        profile.set_field(ProfileField::DateOfBirth, malformed);

        let errors = validate_profile(&profile);
        assert_eq!(errors.len(), 1, "one error expected for `{malformed}`");
        assert_eq!(
            errors.get(&ProfileField::DateOfBirth).map(String::as_str),
            Some(DATE_FORMAT_MESSAGE)
        );
    }
}

#[test]
fn empty_date_of_birth_gets_required_not_format_message() {
    let mut profile = valid_profile();
    profile.set_field(ProfileField::DateOfBirth, "  ");

    let errors = validate_profile(&profile);
    assert_eq!(
        errors.get(&ProfileField::DateOfBirth).map(String::as_str),
        Some("Date of Birth is required")
    );
}

#[test]
fn date_check_is_shape_only() {
    // Calendar-impossible values pass as long as the shape matches.
    let mut profile = valid_profile();
    profile.set_field(ProfileField::DateOfBirth, "2024-13-40");

    assert!(validate_profile(&profile).is_empty());
}
