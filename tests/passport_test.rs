#[cfg(test)]
mod tests {
    use myhealth::passport::*;
    use myhealth::storage::{KeyValueStore, MemoryStore};

    fn sample() -> Passport {
        Passport {
            full_name: "Maria Santos".to_string(),
            emergency_contact: "09171234567".to_string(),
            blood_type: BloodType::ONegative,
            allergies: "Penicillin".to_string(),
        }
    }

    #[test]
    fn test_default_passport_is_incomplete() {
        let passport = Passport::new();
        assert!(!passport.is_complete());
        assert_eq!(
            passport.missing_fields(),
            vec!["Name", "Emergency Contact", "Blood Type", "Allergies"]
        );
    }

    #[test]
    fn test_complete_passport_has_no_missing_fields() {
        let passport = sample();
        assert!(passport.is_complete());
        assert!(passport.missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_count_as_missing() {
        let mut passport = sample();
        passport.allergies = "   ".to_string();
        assert_eq!(passport.missing_fields(), vec!["Allergies"]);
    }

    #[test]
    fn test_validate_names_the_missing_fields() {
        assert!(sample().validate().is_ok());

        let mut passport = sample();
        passport.full_name.clear();
        passport.blood_type = BloodType::Unknown;
        let err = passport.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: passport is missing: Name, Blood Type"
        );
    }

    #[test]
    fn test_blood_type_parsing() {
        assert_eq!(BloodType::from("A+"), BloodType::APositive);
        assert_eq!(BloodType::from("ab-"), BloodType::AbNegative);
        assert_eq!(BloodType::from(" O+ "), BloodType::OPositive);
        assert_eq!(BloodType::from(""), BloodType::Unknown);
        assert_eq!(BloodType::from("C+"), BloodType::Unknown);
        // Every selectable group round-trips through its code
        for blood_type in BloodType::all() {
            assert_eq!(BloodType::from(blood_type.code()), blood_type);
        }
    }

    #[test]
    fn test_blood_type_display() {
        assert_eq!(BloodType::AbPositive.to_string(), "AB+");
        assert_eq!(BloodType::ONegative.to_string(), "O-");
        assert_eq!(BloodType::Unknown.to_string(), "Unknown");
        assert_eq!(BloodType::Unknown.code(), "");
    }

    #[test]
    fn test_passport_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"fullName\":\"Maria Santos\""));
        assert!(json.contains("\"emergencyContact\":\"09171234567\""));
        assert!(json.contains("\"bloodType\":\"O-\""));
        assert!(json.contains("\"allergies\":\"Penicillin\""));
    }

    #[test]
    fn test_passport_reads_legacy_record() {
        // Shape of a record written by the original on-device store
        let legacy = r#"{"fullName":"Juan dela Cruz","emergencyContact":"(054) 473-2326","bloodType":"AB+","allergies":"None"}"#;
        let passport: Passport = serde_json::from_str(legacy).unwrap();
        assert_eq!(passport.full_name, "Juan dela Cruz");
        assert_eq!(passport.blood_type, BloodType::AbPositive);
        assert!(passport.is_complete());
    }

    #[test]
    fn test_unset_blood_type_round_trips_as_empty_string() {
        let passport = Passport {
            full_name: "X".to_string(),
            ..Passport::default()
        };
        let json = serde_json::to_string(&passport).unwrap();
        assert!(json.contains("\"bloodType\":\"\""));

        let back: Passport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.blood_type, BloodType::Unknown);
    }

    #[test]
    fn test_missing_and_unknown_fields_tolerated() {
        let partial = r#"{"fullName":"Ana","planet":"Earth"}"#;
        let passport: Passport = serde_json::from_str(partial).unwrap();
        assert_eq!(passport.full_name, "Ana");
        assert_eq!(passport.emergency_contact, "");
        assert_eq!(passport.blood_type, BloodType::Unknown);
    }

    #[test]
    fn test_store_round_trip() {
        let mut store = PassportStore::new(Box::new(MemoryStore::new()));
        assert!(!store.has_passport());
        assert_eq!(store.load_or_default(), Passport::default());

        store.save(&sample()).unwrap();
        assert!(store.has_passport());
        assert_eq!(store.load(), Some(sample()));

        store.clear().unwrap();
        assert!(!store.has_passport());
    }

    #[test]
    fn test_corrupt_stored_value_treated_as_absent() {
        let mut backing = MemoryStore::new();
        backing.put(PASSPORT_STORAGE_KEY, "{not json").unwrap();
        let store = PassportStore::new(Box::new(backing));

        assert_eq!(store.load(), None);
        assert!(!store.has_passport());
        assert_eq!(store.load_or_default(), Passport::default());
    }

    #[test]
    fn test_emergency_card_fields_in_display_order() {
        let card = EmergencyCard::from_passport(&sample(), true);
        let labels: Vec<&str> = card.fields.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Name", "Blood Type", "Emergency Contact", "Allergies"]
        );
        assert_eq!(card.fields[1].value, "O-");
        assert!(!card.placeholder_data);
    }

    #[test]
    fn test_emergency_card_flags_default_data() {
        let card = EmergencyCard::from_passport(&Passport::default(), false);
        assert!(card.placeholder_data);
        assert!(EmergencyCard::placeholder_notice().contains("default data"));
    }

    #[test]
    fn test_pattern_grid_seeded_generation_is_reproducible() {
        let a = PatternGrid::generate(Some(42));
        let b = PatternGrid::generate(Some(42));
        assert_eq!(a, b);
        assert!(a.filled_count() <= PATTERN_SIDE * PATTERN_SIDE);

        // Every cell is addressable
        let mut counted = 0;
        for row in 0..PATTERN_SIDE {
            for col in 0..PATTERN_SIDE {
                if a.is_filled(row, col) {
                    counted += 1;
                }
            }
        }
        assert_eq!(counted, a.filled_count());
    }
}
