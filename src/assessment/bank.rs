//! Built-in question bank
//!
//! The fixed question tables for the three assessment categories. Keeping
//! them as compile-time constants makes the whole scoring configuration
//! auditable in one place.

use super::category::AssessmentCategory;
use super::question::{
    ChoiceInput, ChoiceOption, Comparison, InputKind, NumericInput, QuestionDefinition,
    ThresholdRule,
};

const AGE: QuestionDefinition = QuestionDefinition {
    id: "age",
    label: "Age",
    input: InputKind::Numeric(NumericInput {
        min: 0.0,
        max: Some(120.0),
        step: None,
        rules: &[ThresholdRule {
            op: Comparison::GreaterThan,
            threshold: 50.0,
            points: 2,
        }],
    }),
};

const CARDIOVASCULAR: &[QuestionDefinition] = &[
    AGE,
    QuestionDefinition {
        id: "smoker",
        label: "Do you smoke?",
        input: InputKind::SingleChoice(ChoiceInput {
            options: &[
                ChoiceOption {
                    value: "yes",
                    label: "Yes",
                    points: 4,
                },
                ChoiceOption {
                    value: "no",
                    label: "No",
                    points: 0,
                },
            ],
        }),
    },
    QuestionDefinition {
        id: "bmi",
        label: "BMI (Body Mass Index)",
        input: InputKind::Numeric(NumericInput {
            min: 0.0,
            max: Some(120.0),
            step: Some(0.1),
            rules: &[ThresholdRule {
                op: Comparison::GreaterThan,
                threshold: 30.0,
                points: 3,
            }],
        }),
    },
    QuestionDefinition {
        id: "activityLevel",
        label: "Physical Activity Level",
        input: InputKind::SingleChoice(ChoiceInput {
            options: &[
                ChoiceOption {
                    value: "sedentary",
                    label: "Sedentary (Little to no exercise)",
                    points: 3,
                },
                ChoiceOption {
                    value: "moderate",
                    label: "Moderate (Exercise 1-3 times/week)",
                    points: 1,
                },
                ChoiceOption {
                    value: "active",
                    label: "Active (Exercise 4+ times/week)",
                    points: 0,
                },
            ],
        }),
    },
];

const STROKE: &[QuestionDefinition] = &[
    AGE,
    QuestionDefinition {
        id: "highBloodPressure",
        label: "Do you have high blood pressure?",
        input: InputKind::SingleChoice(ChoiceInput {
            options: &[
                ChoiceOption {
                    value: "yes",
                    label: "Yes",
                    points: 5,
                },
                ChoiceOption {
                    value: "no",
                    label: "No",
                    points: 0,
                },
                ChoiceOption {
                    value: "unknown",
                    label: "Unknown",
                    points: 1,
                },
            ],
        }),
    },
    QuestionDefinition {
        id: "heartRhythm",
        label: "Do you experience irregular heartbeat or palpitations?",
        input: InputKind::SingleChoice(ChoiceInput {
            options: &[
                ChoiceOption {
                    value: "yes",
                    label: "Yes",
                    points: 4,
                },
                ChoiceOption {
                    value: "no",
                    label: "No",
                    points: 0,
                },
            ],
        }),
    },
    QuestionDefinition {
        id: "diabetes",
        label: "Do you have diabetes?",
        input: InputKind::SingleChoice(ChoiceInput {
            options: &[
                ChoiceOption {
                    value: "yes",
                    label: "Yes",
                    points: 3,
                },
                ChoiceOption {
                    value: "no",
                    label: "No",
                    points: 0,
                },
            ],
        }),
    },
];

const HEART_ATTACK: &[QuestionDefinition] = &[
    AGE,
    QuestionDefinition {
        id: "chestPain",
        label: "Have you experienced chest pain or discomfort?",
        input: InputKind::SingleChoice(ChoiceInput {
            options: &[
                ChoiceOption {
                    value: "frequent",
                    label: "Frequently",
                    points: 5,
                },
                ChoiceOption {
                    value: "occasional",
                    label: "Occasionally",
                    points: 2,
                },
                ChoiceOption {
                    value: "never",
                    label: "Never",
                    points: 0,
                },
            ],
        }),
    },
    QuestionDefinition {
        id: "cholesterol",
        label: "Do you have high cholesterol?",
        input: InputKind::SingleChoice(ChoiceInput {
            options: &[
                ChoiceOption {
                    value: "yes",
                    label: "Yes",
                    points: 4,
                },
                ChoiceOption {
                    value: "no",
                    label: "No",
                    points: 0,
                },
                ChoiceOption {
                    value: "unknown",
                    label: "Unknown",
                    points: 1,
                },
            ],
        }),
    },
    QuestionDefinition {
        id: "familyHistory",
        label: "Family history of heart disease?",
        input: InputKind::SingleChoice(ChoiceInput {
            options: &[
                ChoiceOption {
                    value: "yes",
                    label: "Yes",
                    points: 3,
                },
                ChoiceOption {
                    value: "no",
                    label: "No",
                    points: 0,
                },
            ],
        }),
    },
];

/// Question table for a category, in presentation order.
#[must_use]
pub const fn questions(category: AssessmentCategory) -> &'static [QuestionDefinition] {
    match category {
        AssessmentCategory::Cardiovascular => CARDIOVASCULAR,
        AssessmentCategory::Stroke => STROKE,
        AssessmentCategory::HeartAttack => HEART_ATTACK,
    }
}
