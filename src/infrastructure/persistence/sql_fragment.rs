//! SQL fragment builder for partial updates and filtered reads.
//!
//! Both builders are pure: they return fragment text with `$n` placeholders and
//! the values for those placeholders, in the same order. No value is ever
//! written into the SQL text; column names come from a per-entity translation
//! table or, failing that, the public field name quoted as an identifier.

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::changes::FieldValue;
use crate::domain::filters::{CompanyFilterField, JobFilterField};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("No data")]
    NoData,

    #[error("{min_field} cannot be greater than {max_field}")]
    InvertedRange {
        min_field: &'static str,
        max_field: &'static str,
    },

    #[error("Filter does not constrain any field")]
    NoConditions,
}

impl From<FragmentError> for RepositoryError {
    fn from(err: FragmentError) -> Self {
        RepositoryError::InvalidRequest(err.to_string())
    }
}

/// Entity-scoped mapping from public field names to storage columns
#[derive(Debug, Clone, Copy)]
pub struct FieldTranslation {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldTranslation {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Column for `field`; fields without an entry keep their own name
    pub fn column_for<'a>(&self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(public, _)| *public == field)
            .map(|(_, column)| *column)
            .unwrap_or(field)
    }
}

/// `"col"=$n` assignments with their positional values
#[derive(Debug, Clone, PartialEq)]
pub struct SetFragment {
    pub assignments: Vec<String>,
    pub values: Vec<FieldValue>,
}

impl SetFragment {
    /// Assignments joined for embedding after `SET`
    pub fn set_clause(&self) -> String {
        self.assignments.join(", ")
    }

    /// Position of the first placeholder after the assignments
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Boolean predicate with its positional values
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub conditions: Vec<String>,
    pub values: Vec<FieldValue>,
}

impl Predicate {
    fn new() -> Self {
        Self {
            conditions: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Conditions joined for embedding after `WHERE`
    pub fn where_clause(&self) -> String {
        self.conditions.join(" AND ")
    }

    fn push_bound(&mut self, column: &str, operator: &str, value: FieldValue) {
        self.values.push(value);
        self.conditions.push(format!(
            "{} {} ${}",
            quote_ident(column),
            operator,
            self.values.len()
        ));
    }

    fn push_fixed(&mut self, condition: String) {
        self.conditions.push(condition);
    }

    fn finish(self) -> Result<Self, FragmentError> {
        if self.conditions.is_empty() {
            return Err(FragmentError::NoConditions);
        }
        Ok(self)
    }
}

/// Build the SET list of a partial update.
///
/// `{firstName: "Aliya", age: 32}` => `["\"first_name\"=$1", "\"age\"=$2"]`, `["Aliya", 32]`
pub fn build_set_fragment(
    updates: &[(&str, FieldValue)],
    translation: &FieldTranslation,
) -> Result<SetFragment, FragmentError> {
    if updates.is_empty() {
        return Err(FragmentError::NoData);
    }

    let assignments = updates
        .iter()
        .enumerate()
        .map(|(idx, (field, _))| {
            format!("{}=${}", quote_ident(translation.column_for(field)), idx + 1)
        })
        .collect();
    let values = updates.iter().map(|(_, value)| value.clone()).collect();

    Ok(SetFragment {
        assignments,
        values,
    })
}

/// Build the WHERE predicate for the company listing.
///
/// `[MinEmployees(2), MaxEmployees(3)]` => `"num_employees" >= $1 AND "num_employees" <= $2`
pub fn build_company_filter_predicate(
    filter: &[CompanyFilterField],
) -> Result<Predicate, FragmentError> {
    if filter.is_empty() {
        return Err(FragmentError::NoData);
    }

    let min = filter.iter().find_map(|f| match f {
        CompanyFilterField::MinEmployees(n) => Some(*n),
        _ => None,
    });
    let max = filter.iter().find_map(|f| match f {
        CompanyFilterField::MaxEmployees(n) => Some(*n),
        _ => None,
    });
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(FragmentError::InvertedRange {
                min_field: "minEmployees",
                max_field: "maxEmployees",
            });
        }
    }

    let mut predicate = Predicate::new();
    for field in filter {
        match field {
            CompanyFilterField::Name(name) => predicate.push_bound(
                "name",
                "ILIKE",
                FieldValue::Text(Some(contains_pattern(name))),
            ),
            CompanyFilterField::MinEmployees(n) => {
                predicate.push_bound("num_employees", ">=", FieldValue::Integer(Some(*n)))
            }
            CompanyFilterField::MaxEmployees(n) => {
                predicate.push_bound("num_employees", "<=", FieldValue::Integer(Some(*n)))
            }
        }
    }

    predicate.finish()
}

/// Build the WHERE predicate for the job listing.
///
/// `hasEquity=false` adds no condition, so a filter made only of it is rejected.
pub fn build_job_filter_predicate(filter: &[JobFilterField]) -> Result<Predicate, FragmentError> {
    if filter.is_empty() {
        return Err(FragmentError::NoData);
    }

    let mut predicate = Predicate::new();
    for field in filter {
        match field {
            JobFilterField::Title(title) => predicate.push_bound(
                "title",
                "ILIKE",
                FieldValue::Text(Some(contains_pattern(title))),
            ),
            JobFilterField::MinSalary(n) => {
                predicate.push_bound("salary", ">=", FieldValue::Integer(Some(*n)))
            }
            JobFilterField::HasEquity(true) => {
                predicate.push_fixed(format!("{} > 0", quote_ident("equity")))
            }
            JobFilterField::HasEquity(false) => {}
        }
    }

    predicate.finish()
}

/// Quote a column name as a SQL identifier
fn quote_ident(column: &str) -> String {
    format!("\"{}\"", column.replace('"', "\"\""))
}

/// `ILIKE` pattern matching `needle` literally anywhere in the column
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
