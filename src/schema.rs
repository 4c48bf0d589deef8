//! Schema Validator: checks an arbitrary JSON object against the fixed Book
//! shape and collects every violation. Pure, no I/O, input is never mutated.

use chrono::Datelike;
use serde_json::{Map, Value};

/// Upper bound for an integer field.
#[derive(Clone, Copy, Debug)]
enum IntMax {
    Unbounded,
    /// The current calendar year, evaluated at validation time.
    CurrentYear,
}

#[derive(Clone, Copy, Debug)]
enum FieldKind {
    Str {
        min_len: usize,
        max_len: Option<usize>,
    },
    Uri,
    Int {
        min: i64,
        max: IntMax,
    },
}

struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
}

/// The Book shape. Every field is required; order here fixes the order of
/// violation messages.
const BOOK_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "isbn",
        kind: FieldKind::Str {
            min_len: 10,
            max_len: Some(13),
        },
    },
    FieldSpec {
        name: "amazon_url",
        kind: FieldKind::Uri,
    },
    FieldSpec {
        name: "author",
        kind: FieldKind::Str {
            min_len: 1,
            max_len: None,
        },
    },
    FieldSpec {
        name: "language",
        kind: FieldKind::Str {
            min_len: 1,
            max_len: None,
        },
    },
    FieldSpec {
        name: "pages",
        kind: FieldKind::Int {
            min: 1,
            max: IntMax::Unbounded,
        },
    },
    FieldSpec {
        name: "publisher",
        kind: FieldKind::Str {
            min_len: 1,
            max_len: None,
        },
    },
    FieldSpec {
        name: "title",
        kind: FieldKind::Str {
            min_len: 1,
            max_len: None,
        },
    },
    FieldSpec {
        name: "year",
        kind: FieldKind::Int {
            min: 0,
            max: IntMax::CurrentYear,
        },
    },
];

/// Validate `body` against the Book shape. Returns one message per failed
/// constraint, in field order; empty means valid.
pub fn validate(body: &Map<String, Value>) -> Vec<String> {
    let mut violations = Vec::new();
    for field in BOOK_FIELDS {
        match body.get(field.name) {
            None | Some(Value::Null) => {
                violations.push(format!("{} is required", field.name));
            }
            Some(v) => validate_field(field, v, &mut violations),
        }
    }
    violations
}

fn validate_field(field: &FieldSpec, v: &Value, violations: &mut Vec<String>) {
    match field.kind {
        FieldKind::Str { min_len, max_len } => match v.as_str() {
            None => violations.push(format!("{} must be a string", field.name)),
            Some(s) => {
                if s.chars().count() < min_len {
                    if min_len == 1 {
                        violations.push(format!("{} must not be empty", field.name));
                    } else {
                        violations.push(format!(
                            "{} must be at least {} characters",
                            field.name, min_len
                        ));
                    }
                } else if let Some(max) = max_len {
                    if s.chars().count() > max {
                        violations.push(format!(
                            "{} must be at most {} characters",
                            field.name, max
                        ));
                    }
                }
            }
        },
        FieldKind::Uri => match v.as_str() {
            None => violations.push(format!("{} must be a string", field.name)),
            Some(s) => {
                if url::Url::parse(s).is_err() {
                    violations.push(format!("{} must be a well-formed URI", field.name));
                }
            }
        },
        FieldKind::Int { min, max } => match v.as_i64() {
            None => violations.push(format!("{} must be an integer", field.name)),
            Some(n) => {
                if n < min {
                    violations.push(format!("{} must be at least {}", field.name, min));
                }
                let upper = match max {
                    IntMax::Unbounded => None,
                    IntMax::CurrentYear => Some(i64::from(current_year())),
                };
                if let Some(upper) = upper {
                    if n > upper {
                        violations.push(format!("{} must be at most {}", field.name, upper));
                    }
                }
            }
        },
    }
}

pub(crate) fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_book() -> Map<String, Value> {
        match json!({
            "isbn": "1234567890",
            "amazon_url": "http://a.co/test",
            "author": "Test Author",
            "language": "Test Language",
            "pages": 100,
            "publisher": "Test Publisher",
            "title": "Test Title",
            "year": 2022,
        }) {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn valid_book_has_no_violations() {
        assert_eq!(Vec::<String>::new(), validate(&valid_book()));
    }

    #[test]
    fn empty_body_reports_every_required_field() {
        let violations = validate(&Map::new());
        assert_eq!(8, violations.len());
        assert_eq!("isbn is required", violations[0]);
        assert_eq!("year is required", violations[7]);
    }

    #[test]
    fn null_counts_as_missing() {
        let mut body = valid_book();
        body.insert("author".into(), Value::Null);
        assert_eq!(vec!["author is required".to_string()], validate(&body));
    }

    #[test]
    fn isbn_length_bounds() {
        let mut body = valid_book();
        body.insert("isbn".into(), json!("123456789"));
        assert_eq!(
            vec!["isbn must be at least 10 characters".to_string()],
            validate(&body)
        );

        body.insert("isbn".into(), json!("12345678901234"));
        assert_eq!(
            vec!["isbn must be at most 13 characters".to_string()],
            validate(&body)
        );

        // 13 characters is still fine.
        body.insert("isbn".into(), json!("1234567890123"));
        assert_eq!(Vec::<String>::new(), validate(&body));
    }

    #[test]
    fn non_string_isbn_is_a_type_violation() {
        let mut body = valid_book();
        body.insert("isbn".into(), json!(1234567890));
        assert_eq!(vec!["isbn must be a string".to_string()], validate(&body));
    }

    #[test]
    fn empty_author_is_rejected() {
        let mut body = valid_book();
        body.insert("author".into(), json!(""));
        assert_eq!(vec!["author must not be empty".to_string()], validate(&body));
    }

    #[test]
    fn malformed_uri_is_rejected() {
        let mut body = valid_book();
        body.insert("amazon_url".into(), json!("not a uri"));
        assert_eq!(
            vec!["amazon_url must be a well-formed URI".to_string()],
            validate(&body)
        );
    }

    #[test]
    fn non_integer_pages_is_rejected() {
        let mut body = valid_book();
        body.insert("pages".into(), json!("not-a-number"));
        assert_eq!(vec!["pages must be an integer".to_string()], validate(&body));

        body.insert("pages".into(), json!(12.5));
        assert_eq!(vec!["pages must be an integer".to_string()], validate(&body));
    }

    #[test]
    fn pages_must_be_positive() {
        let mut body = valid_book();
        body.insert("pages".into(), json!(0));
        assert_eq!(vec!["pages must be at least 1".to_string()], validate(&body));
    }

    #[test]
    fn year_bounds() {
        let mut body = valid_book();
        body.insert("year".into(), json!(-1));
        assert_eq!(vec!["year must be at least 0".to_string()], validate(&body));

        let next_year = i64::from(current_year()) + 1;
        body.insert("year".into(), json!(next_year));
        assert_eq!(
            vec![format!("year must be at most {}", current_year())],
            validate(&body)
        );

        body.insert("year".into(), json!(i64::from(current_year())));
        assert_eq!(Vec::<String>::new(), validate(&body));
    }

    #[test]
    fn violations_come_back_in_field_order() {
        let mut body = valid_book();
        body.remove("isbn");
        body.insert("pages".into(), json!(0));
        body.insert("year".into(), json!(-5));
        assert_eq!(
            vec![
                "isbn is required".to_string(),
                "pages must be at least 1".to_string(),
                "year must be at least 0".to_string(),
            ],
            validate(&body)
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let body = valid_book();
        let before = body.clone();
        let _ = validate(&body);
        assert_eq!(before, body);
    }
}
