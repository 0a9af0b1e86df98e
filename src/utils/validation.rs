//! Field validation shared by the create and update operations.
//!
//! A field set is accepted when all five fields are present, non-empty after
//! trimming, and both dates parse. Everything else is rejected as a whole.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::models::{EventInput, EventPayload};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    NotText,
    InvalidDate,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "is required"),
            Self::NotText => write!(f, "must be a string"),
            Self::InvalidDate => write!(f, "is not a valid date"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

/// Every field that failed, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }

    fn push(&mut self, field: &'static str, problem: FieldProblem) {
        self.0.push(FieldError { field, problem });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", e.field, e.problem)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_event(payload: &EventPayload) -> Result<EventInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let titulo = text(&mut errors, "titulo", payload.titulo.as_ref());
    let descripcion = text(&mut errors, "descripcion", payload.descripcion.as_ref());
    let fecha_inicio = date(&mut errors, "fecha_inicio", payload.fecha_inicio.as_ref());
    let fecha_fin = date(&mut errors, "fecha_fin", payload.fecha_fin.as_ref());
    let ubicacion = text(&mut errors, "ubicacion", payload.ubicacion.as_ref());

    match (titulo, descripcion, fecha_inicio, fecha_fin, ubicacion) {
        (Some(titulo), Some(descripcion), Some(fecha_inicio), Some(fecha_fin), Some(ubicacion)) => {
            Ok(EventInput {
                titulo,
                descripcion,
                fecha_inicio,
                fecha_fin,
                ubicacion,
            })
        }
        _ => Err(errors),
    }
}

/// Parses the date forms a client may send. Offsets are folded into UTC.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&Value>,
) -> Option<String> {
    let raw = match value {
        None | Some(Value::Null) => {
            errors.push(field, FieldProblem::Missing);
            return None;
        }
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => {
            errors.push(field, FieldProblem::NotText);
            return None;
        }
    };

    if raw.is_empty() {
        errors.push(field, FieldProblem::Missing);
        return None;
    }

    Some(raw)
}

fn date(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&Value>,
) -> Option<NaiveDateTime> {
    let raw = text(errors, field, value)?;
    let parsed = parse_datetime(&raw);
    if parsed.is_none() {
        errors.push(field, FieldProblem::InvalidDate);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> EventPayload {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "titulo": "Launch",
            "descripcion": "Product launch",
            "fecha_inicio": "2024-01-01",
            "fecha_fin": "2024-01-02",
            "ubicacion": "HQ",
        })
    }

    #[test]
    fn test_valid_payload() {
        let input = validate_event(&payload(valid())).unwrap();
        assert_eq!(input.titulo, "Launch");
        assert_eq!(input.descripcion, "Product launch");
        assert_eq!(input.ubicacion, "HQ");
        assert_eq!(input.fecha_inicio, parse_datetime("2024-01-01 00:00:00").unwrap());
        assert_eq!(input.fecha_fin, parse_datetime("2024-01-02T00:00").unwrap());
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in ["titulo", "descripcion", "fecha_inicio", "fecha_fin", "ubicacion"] {
            let mut body = valid();
            body.as_object_mut().unwrap().remove(field);
            let errors = validate_event(&payload(body)).unwrap_err();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
            assert_eq!(errors.0[0].problem, FieldProblem::Missing);
        }
    }

    #[test]
    fn test_blank_and_null_count_as_missing() {
        let mut body = valid();
        body["titulo"] = json!("   ");
        body["ubicacion"] = Value::Null;
        let errors = validate_event(&payload(body)).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["titulo", "ubicacion"]);
    }

    #[test]
    fn test_text_is_trimmed() {
        let mut body = valid();
        body["titulo"] = json!("  Launch  ");
        assert_eq!(validate_event(&payload(body)).unwrap().titulo, "Launch");
    }

    #[test]
    fn test_numbers_are_accepted_as_text() {
        let mut body = valid();
        body["ubicacion"] = json!(42);
        assert_eq!(validate_event(&payload(body)).unwrap().ubicacion, "42");
    }

    #[test]
    fn test_structured_values_are_rejected() {
        let mut body = valid();
        body["descripcion"] = json!(["a", "b"]);
        body["titulo"] = json!(true);
        let errors = validate_event(&payload(body)).unwrap_err();
        assert!(errors.0.iter().all(|e| e.problem == FieldProblem::NotText));
        assert_eq!(errors.0.len(), 2);
    }

    #[test]
    fn test_unparsable_dates_are_rejected() {
        let bad_dates = [
            "not-a-date",
            "2024-13-01",
            "2024-02-30",
            "01/02/2024",
            "2024-01-01 25:00",
        ];
        for bad in bad_dates {
            let mut body = valid();
            body["fecha_fin"] = json!(bad);
            let errors = validate_event(&payload(body)).unwrap_err();
            assert_eq!(
                errors.0,
                vec![FieldError {
                    field: "fecha_fin",
                    problem: FieldProblem::InvalidDate
                }],
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_datetime_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(parse_datetime("2024-03-15 09:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-03-15T09:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-03-15 09:30"), Some(expected));
        assert_eq!(parse_datetime("2024-03-15T09:30:00Z"), Some(expected));
        assert_eq!(parse_datetime("2024-03-15T11:30:00+02:00"), Some(expected));
        assert!(parse_datetime("2024-03-15T09:30:00.250").is_some());
    }

    #[test]
    fn test_display_lists_fields() {
        let errors = validate_event(&EventPayload::default()).unwrap_err();
        assert_eq!(errors.0.len(), 5);
        assert!(errors.to_string().starts_with("titulo is required"));
    }
}
