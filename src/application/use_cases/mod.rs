mod applications;
mod companies;
mod jobs;
mod users;

pub use applications::ApplyToJobUseCase;
pub use companies::{
    CreateCompanyUseCase, DeleteCompanyUseCase, GetCompanyUseCase, ListCompaniesUseCase,
    UpdateCompanyUseCase,
};
pub use jobs::{CreateJobUseCase, DeleteJobUseCase, GetJobUseCase, ListJobsUseCase, UpdateJobUseCase};
pub use users::{
    AuthenticateUserUseCase, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase,
    ListUsersUseCase, UpdateUserUseCase,
};
