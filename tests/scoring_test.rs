#[cfg(test)]
mod tests {
    use myhealth::assessment::*;
    use serde_json::json;

    fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(id, value)| ((*id).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_answers_score_zero_low() {
        let empty = AnswerSet::default();
        for category in AssessmentCategory::all() {
            let result = score(category, &empty);
            assert_eq!(result.points, 0);
            assert_eq!(result.risk_level, RiskLevel::Low);
        }
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify_points(0), RiskLevel::Low);
        assert_eq!(classify_points(4), RiskLevel::Low);
        assert_eq!(classify_points(5), RiskLevel::Moderate);
        assert_eq!(classify_points(8), RiskLevel::Moderate);
        assert_eq!(classify_points(9), RiskLevel::High);
        assert_eq!(classify_points(30), RiskLevel::High);
    }

    #[test]
    fn test_threshold_requires_strictly_greater() {
        // Exactly at the threshold awards nothing
        let at = answers(&[("age", "50")]);
        assert_eq!(score(AssessmentCategory::Cardiovascular, &at).points, 0);

        // Just above awards the rule's points
        let above = answers(&[("age", "51")]);
        assert_eq!(score(AssessmentCategory::Cardiovascular, &above).points, 2);

        // Fractional values count too
        let fractional = answers(&[("age", "50.5")]);
        assert_eq!(
            score(AssessmentCategory::Cardiovascular, &fractional).points,
            2
        );
    }

    #[test]
    fn test_out_of_range_numeric_excluded() {
        // Above the declared max contributes nothing, even though the
        // threshold rule would match
        let too_old = answers(&[("age", "150")]);
        assert_eq!(score(AssessmentCategory::Cardiovascular, &too_old).points, 0);

        // Negative values are excluded as well
        let negative = answers(&[("age", "-5")]);
        assert_eq!(
            score(AssessmentCategory::Cardiovascular, &negative).points,
            0
        );

        // Just inside the range still scores
        let edge = answers(&[("age", "120")]);
        assert_eq!(score(AssessmentCategory::Cardiovascular, &edge).points, 2);
    }

    #[test]
    fn test_unparseable_numeric_skipped() {
        let garbage = answers(&[("age", "abc"), ("smoker", "yes")]);
        let result = score(AssessmentCategory::Cardiovascular, &garbage);
        assert_eq!(result.points, 4);
    }

    #[test]
    fn test_empty_string_answer_skipped() {
        let blank = answers(&[("age", ""), ("smoker", "yes")]);
        let result = score(AssessmentCategory::Cardiovascular, &blank);
        assert_eq!(result.points, 4);
    }

    #[test]
    fn test_unmatched_choice_contributes_zero() {
        let odd = answers(&[("smoker", "sometimes")]);
        assert_eq!(score(AssessmentCategory::Cardiovascular, &odd).points, 0);
    }

    #[test]
    fn test_unknown_answer_ids_ignored() {
        let stray = answers(&[("age", "60"), ("shoeSize", "45")]);
        let result = score(AssessmentCategory::Cardiovascular, &stray);
        assert_eq!(result.points, 2);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let set = answers(&[("age", "55"), ("smoker", "yes"), ("bmi", "32")]);
        let first = score(AssessmentCategory::Cardiovascular, &set);
        let second = score(AssessmentCategory::Cardiovascular, &set);
        assert_eq!(first, second);
    }

    #[test]
    fn test_multiple_thresholds_all_sum() {
        const TIERED: &[QuestionDefinition] = &[QuestionDefinition {
            id: "count",
            label: "Count",
            input: InputKind::Numeric(NumericInput {
                min: 0.0,
                max: None,
                step: None,
                rules: &[
                    ThresholdRule {
                        op: Comparison::GreaterThan,
                        threshold: 10.0,
                        points: 1,
                    },
                    ThresholdRule {
                        op: Comparison::GreaterThan,
                        threshold: 20.0,
                        points: 2,
                    },
                ],
            }),
        }];

        assert_eq!(score_questions(TIERED, &answers(&[("count", "5")])), 0);
        assert_eq!(score_questions(TIERED, &answers(&[("count", "15")])), 1);
        assert_eq!(score_questions(TIERED, &answers(&[("count", "25")])), 3);
        // Default max of 120 applies when no max is declared
        assert_eq!(score_questions(TIERED, &answers(&[("count", "121")])), 0);
    }

    #[test]
    fn test_cardiovascular_high_scenario() {
        // age +2, smoker +4, bmi +3, sedentary +3
        let set = answers(&[
            ("age", "60"),
            ("smoker", "yes"),
            ("bmi", "32"),
            ("activityLevel", "sedentary"),
        ]);
        let result = score(AssessmentCategory::Cardiovascular, &set);
        assert_eq!(result.points, 12);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_stroke_low_scenario() {
        // Only the unknown blood-pressure answer contributes
        let set = answers(&[
            ("age", "40"),
            ("highBloodPressure", "unknown"),
            ("heartRhythm", "no"),
            ("diabetes", "no"),
        ]);
        let result = score(AssessmentCategory::Stroke, &set);
        assert_eq!(result.points, 1);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_heart_attack_moderate_scenario() {
        // age +2, occasional chest pain +2, unknown cholesterol +1, family history +3
        let set = answers(&[
            ("age", "55"),
            ("chestPain", "occasional"),
            ("cholesterol", "unknown"),
            ("familyHistory", "yes"),
        ]);
        let result = score(AssessmentCategory::HeartAttack, &set);
        assert_eq!(result.points, 8);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_partial_answers_still_score() {
        let set = answers(&[("highBloodPressure", "yes")]);
        let result = score(AssessmentCategory::Stroke, &set);
        assert_eq!(result.points, 5);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_result_serializes_to_contract_shape() {
        let set = answers(&[
            ("age", "55"),
            ("smoker", "yes"),
            ("bmi", "32"),
            ("activityLevel", "sedentary"),
        ]);
        let result = score(AssessmentCategory::Cardiovascular, &set);
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value, json!({ "points": 12, "riskLevel": "high" }));

        let back: ScoreResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_guidance_per_level() {
        assert!(RiskLevel::Low.guidance().contains("healthy lifestyle"));
        assert!(RiskLevel::Moderate
            .guidance()
            .contains("Barangay Health Center"));
        assert!(RiskLevel::High.guidance().contains("Consult a doctor"));
    }
}
