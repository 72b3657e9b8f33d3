use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a delimiter setting such as `","` or `"\t"` into the byte the csv reader expects.
pub fn parse_delimiter(field_name: &str, value: &str) -> Result<u8> {
    let candidate = match value {
        "\\t" | "tab" => "\t",
        other => other,
    };

    match candidate.as_bytes() {
        [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' && *byte != b'\r' => {
            Ok(*byte)
        }
        _ => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Delimiter must be a single ASCII character other than a quote or newline"
                .to_string(),
        }),
    }
}

/// Checks a header row for the required column names.
///
/// Every missing name is reported, in the order given by `required`.
pub fn validate_required_columns(headers: &[String], required: &[&str]) -> Result<()> {
    let present: HashSet<&str> = headers.iter().map(String::as_str).collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !present.contains(*name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EtlError::MissingRequiredFields { fields: missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./output").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("input.path", "leads.csv", &["csv", "tsv"]).is_ok());
        assert!(validate_file_extension("input.path", "LEADS.CSV", &["csv", "tsv"]).is_ok());
        assert!(validate_file_extension("input.path", "leads.xlsx", &["csv", "tsv"]).is_err());
        assert!(validate_file_extension("input.path", "leads", &["csv", "tsv"]).is_err());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("input.delimiter", ",").unwrap(), b',');
        assert_eq!(parse_delimiter("input.delimiter", "\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("input.delimiter", "tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("input.delimiter", ";").unwrap(), b';');
        assert!(parse_delimiter("input.delimiter", "").is_err());
        assert!(parse_delimiter("input.delimiter", ",,").is_err());
        assert!(parse_delimiter("input.delimiter", "\"").is_err());
    }

    #[test]
    fn test_validate_required_columns_reports_all_missing() {
        let headers = vec!["phone_1".to_string(), "email_1".to_string()];
        match validate_required_columns(&headers, &["first_name", "last_name"]) {
            Err(EtlError::MissingRequiredFields { fields }) => {
                assert_eq!(fields, vec!["first_name", "last_name"]);
            }
            other => panic!("expected missing fields error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_required_columns_passes_when_present() {
        let headers = vec![
            "last_name".to_string(),
            "zip_code".to_string(),
            "first_name".to_string(),
        ];
        assert!(validate_required_columns(&headers, &["first_name", "last_name"]).is_ok());
    }
}
