use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Message bundle selection. English is the default and the fallback for
/// keys missing from other bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Hr,
}

impl Locale {
    /// Picks a locale from an `Accept-Language` header value.
    pub fn from_header(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim_start().to_ascii_lowercase().starts_with("hr") => Locale::Hr,
            _ => Locale::En,
        }
    }
}

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("validation_failed", "Validation failed for {} action"),
        ("employee_save_success", "Employee saved successfully"),
        ("employee_delete_success", "Employee deleted successfully"),
        ("error_code_employee_id_not_found", "Employee with id={} not found"),
        (
            "error_code_employee_email_not_found",
            "Employee with email={} not found",
        ),
        ("error_code_first_name_empty", "First name is required"),
        ("error_code_last_name_empty", "Last name is required"),
        ("error_code_email_empty", "Email is required"),
        ("error_code_email_invalid", "Email format is invalid"),
        ("error_code_email_already_exist", "Email already exists"),
        ("error_invalid_request_body", "Invalid request body"),
        (
            "error_internal",
            "Something went wrong, contact the system admin",
        ),
    ])
});

static HR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("validation_failed", "Validacija nije uspjela za akciju {}"),
        ("employee_save_success", "Zaposlenik je uspješno spremljen"),
        ("employee_delete_success", "Zaposlenik je uspješno obrisan"),
        (
            "error_code_employee_id_not_found",
            "Zaposlenik s id={} nije pronađen",
        ),
        (
            "error_code_employee_email_not_found",
            "Zaposlenik s email={} nije pronađen",
        ),
        ("error_code_first_name_empty", "Ime je obavezno"),
        ("error_code_last_name_empty", "Prezime je obavezno"),
        ("error_code_email_empty", "Email je obavezan"),
        ("error_code_email_invalid", "Format emaila nije ispravan"),
        ("error_code_email_already_exist", "Email već postoji"),
        ("error_invalid_request_body", "Tijelo zahtjeva nije ispravno"),
        (
            "error_internal",
            "Nešto je pošlo po zlu, kontaktirajte administratora",
        ),
    ])
});

/// Resolves a message key. Unknown keys fall back to the English bundle,
/// then to the key itself so a missing translation never panics a request.
pub fn get(key: &str, locale: Locale) -> String {
    let bundle = match locale {
        Locale::En => &EN,
        Locale::Hr => &HR,
    };
    bundle
        .get(key)
        .or_else(|| EN.get(key))
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Resolves a message key and substitutes the first `{}` placeholder.
pub fn format(key: &str, arg: impl std::fmt::Display, locale: Locale) -> String {
    get(key, locale).replacen("{}", &arg.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_from_header() {
        assert_eq!(Locale::from_header(None), Locale::En);
        assert_eq!(Locale::from_header(Some("en-US,en;q=0.9")), Locale::En);
        assert_eq!(Locale::from_header(Some("hr-HR,hr;q=0.8")), Locale::Hr);
        assert_eq!(Locale::from_header(Some("HR")), Locale::Hr);
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(get("no_such_key", Locale::Hr), "no_such_key");
    }

    #[test]
    fn format_substitutes_placeholder() {
        assert_eq!(
            format("error_code_employee_id_not_found", 42, Locale::En),
            "Employee with id=42 not found"
        );
        assert_eq!(
            format("error_code_employee_id_not_found", 42, Locale::Hr),
            "Zaposlenik s id=42 nije pronađen"
        );
    }
}
