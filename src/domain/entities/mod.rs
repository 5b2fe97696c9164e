mod application;
mod company;
mod job;
mod user;

pub use application::JobApplication;
pub use company::{Company, CompanyDetail, NewCompany};
pub use job::{Job, NewJob};
pub use user::{NewUser, User, UserCredentials, UserDetail};
