pub mod authorization;
pub mod changes;
pub mod entities;
pub mod errors;
pub mod filters;
pub mod validation;
pub mod value_objects;
