//! Typed filters for the company and job listing endpoints.
//!
//! Query strings arrive as ordered `(key, value)` string pairs. Each entity has a
//! closed set of filter fields; parsing rejects any key outside that set, any key
//! given twice, and values that do not normalize to the field's type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Query string contains inappropriate filtering field(s): {}", .0.join(", "))]
    InappropriateFields(Vec<String>),

    #[error("Filtering field supplied more than once: {0}")]
    DuplicateField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// A closed set of filter fields accepted by one entity
pub trait FilterField: Sized {
    /// Public names of the accepted fields
    const WHITELIST: &'static [&'static str];

    fn key(&self) -> &'static str;

    /// Normalize a raw transport value for a whitelisted key
    fn parse(key: &'static str, raw: &str) -> Result<Self, FilterError>;
}

/// Parse ordered query pairs into typed filter fields, keeping their order
pub fn parse_filter<F: FilterField>(pairs: &[(String, String)]) -> Result<Vec<F>, FilterError> {
    let unknown: Vec<String> = pairs
        .iter()
        .filter(|(key, _)| !F::WHITELIST.contains(&key.as_str()))
        .map(|(key, _)| key.clone())
        .collect();
    if !unknown.is_empty() {
        return Err(FilterError::InappropriateFields(unknown));
    }

    let mut fields: Vec<F> = Vec::with_capacity(pairs.len());
    for (key, raw) in pairs {
        let Some(known) = F::WHITELIST.iter().copied().find(|k| *k == key.as_str()) else {
            continue;
        };
        if fields.iter().any(|f| f.key() == known) {
            return Err(FilterError::DuplicateField(known.to_string()));
        }
        fields.push(F::parse(known, raw)?);
    }

    Ok(fields)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyFilterField {
    /// Case-insensitive substring of the company name
    Name(String),
    /// Inclusive lower bound on employee count
    MinEmployees(i32),
    /// Inclusive upper bound on employee count
    MaxEmployees(i32),
}

impl FilterField for CompanyFilterField {
    const WHITELIST: &'static [&'static str] = &["name", "minEmployees", "maxEmployees"];

    fn key(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::MinEmployees(_) => "minEmployees",
            Self::MaxEmployees(_) => "maxEmployees",
        }
    }

    fn parse(key: &'static str, raw: &str) -> Result<Self, FilterError> {
        match key {
            "name" => parse_text(key, raw).map(Self::Name),
            "minEmployees" => parse_count(key, raw).map(Self::MinEmployees),
            "maxEmployees" => parse_count(key, raw).map(Self::MaxEmployees),
            other => Err(FilterError::InappropriateFields(vec![other.to_string()])),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFilterField {
    /// Case-insensitive substring of the job title
    Title(String),
    /// Inclusive lower bound on salary
    MinSalary(i32),
    /// When true only jobs with non-zero equity match
    HasEquity(bool),
}

impl FilterField for JobFilterField {
    const WHITELIST: &'static [&'static str] = &["title", "minSalary", "hasEquity"];

    fn key(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::MinSalary(_) => "minSalary",
            Self::HasEquity(_) => "hasEquity",
        }
    }

    fn parse(key: &'static str, raw: &str) -> Result<Self, FilterError> {
        match key {
            "title" => parse_text(key, raw).map(Self::Title),
            "minSalary" => parse_count(key, raw).map(Self::MinSalary),
            "hasEquity" => parse_flag(key, raw).map(Self::HasEquity),
            other => Err(FilterError::InappropriateFields(vec![other.to_string()])),
        }
    }
}

fn parse_text(field: &'static str, raw: &str) -> Result<String, FilterError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FilterError::InvalidValue {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn parse_count(field: &'static str, raw: &str) -> Result<i32, FilterError> {
    match raw.trim().parse::<i32>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(FilterError::InvalidValue {
            field,
            reason: format!("expected a non-negative integer, got {:?}", raw),
        }),
    }
}

fn parse_flag(field: &'static str, raw: &str) -> Result<bool, FilterError> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FilterError::InvalidValue {
            field,
            reason: format!("expected \"true\" or \"false\", got {:?}", raw),
        }),
    }
}
