mod company_handle;
mod username;

pub use company_handle::CompanyHandle;
pub use username::Username;
