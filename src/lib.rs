//! # Jobly - Job Board Backend
//!
//! CRUD service for companies, jobs, users and job applications on PostgreSQL,
//! built on Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Entities, value objects, filter and change parsing
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: PostgreSQL repositories, SQL fragment builder, JWT and password hashing
//! - **API**: HTTP handlers and middleware
//!
//! ## SQL fragments
//!
//! Partial updates and list filters are turned into parameterized SQL pieces:
//!
//! ```
//! use jobly::domain::changes::FieldValue;
//! use jobly::infrastructure::persistence::{sql_fragment::build_set_fragment, QueryBuilder};
//!
//! let set = build_set_fragment(
//!     &[("numEmployees", FieldValue::Integer(Some(5)))],
//!     &QueryBuilder::COMPANY_FIELDS,
//! )
//! .unwrap();
//! assert_eq!(set.set_clause(), "\"num_employees\"=$1");
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
