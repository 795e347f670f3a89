//! Column-role detection from header names.
//!
//! Headers from form exports vary wildly ("Program aInteres", "E-MAIL",
//! "Telefono Celular"), so roles are detected by keyword lookup over
//! normalized header text. These are heuristics for convenience; callers
//! can always override the chosen program column explicitly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use progmap_match::normalize;
use progmap_model::SourceTable;

const PROGRAM_KEYWORDS: &[&str] = &["program", "programa", "interes", "carrera"];
const EMAIL_KEYWORDS: &[&str] = &["email", "mail", "correo", "eml"];
const PHONE_KEYWORDS: &[&str] = &["tel", "phone", "celular", "telefono", "whatsapp"];
const CONTACT_ID_KEYWORDS: &[&str] = &["idinterno", "id", "contacto", "codigo", "identificador"];
const DATABASE_KEYWORDS: &[&str] = &["iddatabase", "database", "base"];

/// Header names detected for each known role. `None` when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedColumns {
    pub program: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_id: Option<String>,
    pub database: Option<String>,
}

fn matches_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| normalized.contains(keyword))
}

/// Scans headers and assigns each role by keyword match.
///
/// The program role prefers a header containing both "program" and
/// "interes" over a plain keyword hit; the contact-id role prefers the
/// "id" + "contacto" combination. For other roles a later matching header
/// replaces an earlier one, mirroring a single left-to-right scan.
pub fn detect_columns(headers: &[String]) -> DetectedColumns {
    let mut detected = DetectedColumns::default();
    let mut program_is_priority = false;
    let mut contact_is_priority = false;

    for header in headers {
        let normalized = normalize(header);

        if normalized.contains("program") && normalized.contains("interes") {
            detected.program = Some(header.clone());
            program_is_priority = true;
        } else if !program_is_priority
            && detected.program.is_none()
            && matches_any(&normalized, PROGRAM_KEYWORDS)
        {
            detected.program = Some(header.clone());
        }

        if matches_any(&normalized, EMAIL_KEYWORDS) {
            detected.email = Some(header.clone());
        }

        if matches_any(&normalized, PHONE_KEYWORDS) {
            detected.phone = Some(header.clone());
        }

        if normalized.contains("id") && normalized.contains("contacto") {
            detected.contact_id = Some(header.clone());
            contact_is_priority = true;
        } else if !contact_is_priority
            && detected.contact_id.is_none()
            && matches_any(&normalized, CONTACT_ID_KEYWORDS)
        {
            detected.contact_id = Some(header.clone());
        }

        if matches_any(&normalized, DATABASE_KEYWORDS) {
            detected.database = Some(header.clone());
        }
    }

    debug!(?detected, "detected column roles");
    detected
}

/// Distinct non-empty values of the database column, sorted numerically
/// when both values parse as numbers, lexicographically otherwise.
pub fn unique_database_values(table: &SourceTable, field: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in table.column_values(field) {
        let trimmed = value.trim();
        if trimmed.is_empty() || values.iter().any(|v| v == trimmed) {
            continue;
        }
        values.push(trimmed.to_string());
    }
    values.sort_by(|a, b| match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => a.cmp(b),
    });
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn detects_common_roles() {
        let detected = detect_columns(&headers(&[
            "ID Contacto",
            "Correo Electronico",
            "Telefono Celular",
            "Carrera",
            "IdDatabase",
        ]));
        assert_eq!(detected.contact_id.as_deref(), Some("ID Contacto"));
        assert_eq!(detected.email.as_deref(), Some("Correo Electronico"));
        assert_eq!(detected.phone.as_deref(), Some("Telefono Celular"));
        assert_eq!(detected.program.as_deref(), Some("Carrera"));
        assert_eq!(detected.database.as_deref(), Some("IdDatabase"));
    }

    #[test]
    fn program_interes_header_beats_plain_keyword() {
        let detected = detect_columns(&headers(&["Carrera", "Programa de Interes"]));
        assert_eq!(detected.program.as_deref(), Some("Programa de Interes"));

        // Priority match is kept even when a plain keyword follows.
        let detected = detect_columns(&headers(&["Programa de Interes", "Carrera"]));
        assert_eq!(detected.program.as_deref(), Some("Programa de Interes"));
    }

    #[test]
    fn accents_do_not_defeat_detection() {
        let detected = detect_columns(&headers(&["Teléfono", "Programa de Interés"]));
        assert_eq!(detected.phone.as_deref(), Some("Teléfono"));
        assert_eq!(detected.program.as_deref(), Some("Programa de Interés"));
    }

    #[test]
    fn nothing_detected_on_unknown_headers() {
        let detected = detect_columns(&headers(&["alpha", "beta"]));
        assert_eq!(detected, DetectedColumns::default());
    }

    #[test]
    fn database_values_sort_numerically() {
        let table = SourceTable::new(
            vec!["base".to_string()],
            ["10", "2", "2", "", "1"]
                .iter()
                .map(|v| vec![(*v).to_string()])
                .collect(),
        );
        assert_eq!(unique_database_values(&table, "base"), ["1", "2", "10"]);
    }
}
