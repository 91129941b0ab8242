pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 255;
pub const QUANTITY_MIN: i32 = 1;
pub const QUANTITY_MAX: i32 = 10_000;

/// A single rejected field, reported with a code-style identifier
/// for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: &'static str,
}

/// User-supplied payload for create/update requests.
///
/// Only obtainable through [`ItemInput::new`], which checks every field and
/// reports all violations at once.
#[derive(Debug, Clone)]
pub struct ItemInput {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
}

impl ItemInput {
    pub fn new(
        name: String,
        description: Option<String>,
        quantity: i32,
    ) -> Result<Self, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if name.trim().is_empty() {
            violations.push(FieldViolation {
                field: "name",
                code: "item.name_blank",
            });
        } else {
            // Length is counted in characters, not bytes.
            let len = name.chars().count();
            if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
                violations.push(FieldViolation {
                    field: "name",
                    code: "item.name_length",
                });
            }
        }

        if let Some(ref description) = description
            && description.chars().count() > DESCRIPTION_MAX_CHARS
        {
            violations.push(FieldViolation {
                field: "description",
                code: "item.description_length",
            });
        }

        if !(QUANTITY_MIN..=QUANTITY_MAX).contains(&quantity) {
            violations.push(FieldViolation {
                field: "quantity",
                code: "item.quantity_range",
            });
        }

        if violations.is_empty() {
            Ok(Self {
                name,
                description,
                quantity,
            })
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn codes_for(result: &Result<ItemInput, Vec<FieldViolation>>, field: &str) -> Vec<&'static str> {
        match result {
            Ok(_) => vec![],
            Err(violations) => violations
                .iter()
                .filter(|v| v.field == field)
                .map(|v| v.code)
                .collect(),
        }
    }

    #[test]
    fn should_accept_valid_input() {
        let result = ItemInput::new("Rice".to_string(), Some("Whole grain 5kg".to_string()), 2);

        assert!(result.is_ok());
        let input = result.unwrap();
        assert_eq!(input.name, "Rice");
        assert_eq!(input.description.as_deref(), Some("Whole grain 5kg"));
        assert_eq!(input.quantity, 2);
    }

    #[test]
    fn should_accept_missing_description() {
        assert!(ItemInput::new("Rice".to_string(), None, 1).is_ok());
    }

    #[test]
    fn should_reject_blank_name() {
        let result = ItemInput::new("   ".to_string(), None, 1);

        assert_eq!(codes_for(&result, "name"), vec!["item.name_blank"]);
    }

    #[test]
    fn should_reject_name_shorter_than_three_chars() {
        let result = ItemInput::new("ab".to_string(), None, 1);

        assert_eq!(codes_for(&result, "name"), vec!["item.name_length"]);
    }

    #[test]
    fn should_reject_name_longer_than_hundred_chars() {
        let result = ItemInput::new("a".repeat(101), None, 1);

        assert_eq!(codes_for(&result, "name"), vec!["item.name_length"]);
    }

    #[test]
    fn should_accept_name_at_length_boundaries() {
        assert!(ItemInput::new("a".repeat(3), None, 1).is_ok());
        assert!(ItemInput::new("a".repeat(100), None, 1).is_ok());
    }

    #[test]
    fn should_count_name_length_in_chars_not_bytes() {
        // Three characters, six bytes in UTF-8.
        assert!(ItemInput::new("áéí".to_string(), None, 1).is_ok());
    }

    #[test]
    fn should_reject_description_longer_than_limit() {
        let result = ItemInput::new("Rice".to_string(), Some("d".repeat(256)), 1);

        assert_eq!(
            codes_for(&result, "description"),
            vec!["item.description_length"]
        );
    }

    #[test]
    fn should_accept_description_at_limit() {
        assert!(ItemInput::new("Rice".to_string(), Some("d".repeat(255)), 1).is_ok());
    }

    #[test]
    fn should_reject_quantity_below_minimum() {
        let result = ItemInput::new("Rice".to_string(), None, 0);

        assert_eq!(codes_for(&result, "quantity"), vec!["item.quantity_range"]);
    }

    #[test]
    fn should_reject_quantity_above_maximum() {
        let result = ItemInput::new("Rice".to_string(), None, 10_001);

        assert_eq!(codes_for(&result, "quantity"), vec!["item.quantity_range"]);
    }

    #[test]
    fn should_accept_quantity_at_boundaries() {
        assert!(ItemInput::new("Rice".to_string(), None, 1).is_ok());
        assert!(ItemInput::new("Rice".to_string(), None, 10_000).is_ok());
    }

    #[test]
    fn should_report_all_violations_at_once() {
        let result = ItemInput::new("ab".to_string(), Some("d".repeat(300)), 0);

        let violations = result.unwrap_err();
        assert_eq!(violations.len(), 3);
        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"description"));
        assert!(fields.contains(&"quantity"));
    }

    proptest! {
        #[test]
        fn should_accept_any_input_within_ranges(
            name in "[a-zA-Z][a-zA-Z ]{1,98}[a-zA-Z]",
            quantity in QUANTITY_MIN..=QUANTITY_MAX,
        ) {
            prop_assert!(ItemInput::new(name, None, quantity).is_ok());
        }

        #[test]
        fn should_reject_any_quantity_outside_range(
            quantity in prop_oneof![i32::MIN..QUANTITY_MIN, (QUANTITY_MAX + 1)..=i32::MAX],
        ) {
            let result = ItemInput::new("Rice".to_string(), None, quantity);
            prop_assert!(matches!(
                result,
                Err(ref violations) if violations.iter().any(|v| v.field == "quantity")
            ));
        }
    }
}
