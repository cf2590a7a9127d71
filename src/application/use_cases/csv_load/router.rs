use crate::domain::csv::{leaf_at, FieldMap, FieldValue};
use crate::domain::people::{PersonRow, SkipReason};

/// Validate one record and split it into store-ready columns.
///
/// Pure: the record is only read. Row-level failures are data, not errors.
pub(super) fn route_record(record: &FieldMap, ordinal: usize) -> Result<PersonRow, SkipReason> {
    let first = leaf_at(record, &["name", "firstName"])
        .map(str::trim)
        .unwrap_or("");
    let last = leaf_at(record, &["name", "lastName"])
        .map(str::trim)
        .unwrap_or("");

    if first.is_empty() || last.is_empty() {
        return Err(SkipReason {
            row: ordinal,
            reason: "Missing name.firstName or name.lastName".to_string(),
        });
    }

    let raw_age = leaf_at(record, &["age"]).unwrap_or("");
    let Some(age) = parse_leading_int(raw_age) else {
        return Err(SkipReason {
            row: ordinal,
            reason: format!("Invalid age: \"{}\"", raw_age),
        });
    };

    let address = match record.get("address") {
        Some(FieldValue::Node(map)) => map.clone(),
        _ => FieldMap::new(),
    };

    // name and age move to dedicated columns; everything else, address
    // included, stays in the remainder payload.
    let mut additional = record.clone();
    additional.remove("name");
    additional.remove("age");

    Ok(PersonRow {
        name: format!("{} {}", first, last),
        age,
        address,
        additional,
    })
}

/// Base-10 integer from the leading prefix of `raw`: optional sign, then
/// digits. Trailing non-digits are ignored; no leading digits is a failure,
/// as is a digit prefix that overflows i64.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::insert_path;

    fn record(pairs: &[(&str, &str)]) -> FieldMap {
        let mut map = FieldMap::new();
        for (path, value) in pairs {
            insert_path(&mut map, path, value.to_string());
        }
        map
    }

    #[test]
    fn routes_a_valid_row() {
        let record = record(&[
            ("name.firstName", "Rohit"),
            ("name.lastName", "Prasad"),
            ("age", "35"),
            ("address.city", "Pune"),
            ("gender", "M"),
        ]);

        let person = route_record(&record, 1).unwrap();
        assert_eq!(person.name, "Rohit Prasad");
        assert_eq!(person.age, 35);
        assert_eq!(leaf_at(&person.address, &["city"]), Some("Pune"));
        assert_eq!(leaf_at(&person.additional, &["gender"]), Some("M"));
    }

    #[test]
    fn empty_first_name_is_skipped() {
        let record = record(&[
            ("name.firstName", "  "),
            ("name.lastName", "Prasad"),
            ("age", "35"),
        ]);

        let skip = route_record(&record, 4).unwrap_err();
        assert_eq!(skip.row, 4);
        assert_eq!(skip.reason, "Missing name.firstName or name.lastName");
    }

    #[test]
    fn missing_last_name_is_skipped() {
        let record = record(&[("name.firstName", "Rohit"), ("age", "35")]);

        let skip = route_record(&record, 1).unwrap_err();
        assert_eq!(skip.reason, "Missing name.firstName or name.lastName");
    }

    #[test]
    fn non_numeric_age_is_skipped_with_the_raw_value() {
        let record = record(&[
            ("name.firstName", "Rohit"),
            ("name.lastName", "Prasad"),
            ("age", "abc"),
        ]);

        let skip = route_record(&record, 2).unwrap_err();
        assert_eq!(skip.reason, "Invalid age: \"abc\"");
    }

    #[test]
    fn missing_age_renders_as_empty_string() {
        let record = record(&[("name.firstName", "Rohit"), ("name.lastName", "Prasad")]);

        let skip = route_record(&record, 1).unwrap_err();
        assert_eq!(skip.reason, "Invalid age: \"\"");
    }

    #[test]
    fn age_keeps_leading_digits_and_drops_trailing_junk() {
        let record = record(&[
            ("name.firstName", "Rohit"),
            ("name.lastName", "Prasad"),
            ("age", "35 years"),
        ]);

        assert_eq!(route_record(&record, 1).unwrap().age, 35);
    }

    #[test]
    fn signed_ages_parse() {
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("  42  "), Some(42));
        assert_eq!(parse_leading_int("x42"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }

    #[test]
    fn scalar_address_becomes_empty_structure() {
        let record = record(&[
            ("name.firstName", "Rohit"),
            ("name.lastName", "Prasad"),
            ("age", "35"),
            ("address", "12 MG Road"),
        ]);

        let person = route_record(&record, 1).unwrap();
        assert!(person.address.is_empty());
        assert_eq!(leaf_at(&person.additional, &["address"]), Some("12 MG Road"));
    }

    #[test]
    fn additional_keeps_address_subtree() {
        let record = record(&[
            ("name.firstName", "Rohit"),
            ("name.lastName", "Prasad"),
            ("age", "35"),
            ("address.city", "Pune"),
        ]);

        let person = route_record(&record, 1).unwrap();
        assert!(!person.additional.contains_key("name"));
        assert!(!person.additional.contains_key("age"));
        assert_eq!(leaf_at(&person.additional, &["address", "city"]), Some("Pune"));
    }
}
