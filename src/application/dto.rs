use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{Company, CompanyDetail, Job, User, UserDetail};

/// Body of `POST /companies`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 25, message = "handle must be 1-25 characters"))]
    pub handle: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0, message = "numEmployees must not be negative"))]
    pub num_employees: Option<i32>,
    #[validate(url(message = "logoUrl must be a URL"))]
    pub logo_url: Option<String>,
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 0, message = "salary must not be negative"))]
    pub salary: Option<i32>,
    #[validate(range(min = 0.0, max = 1.0, message = "equity must be between 0 and 1"))]
    pub equity: Option<f64>,
    #[validate(length(min = 1, max = 25, message = "companyHandle must be 1-25 characters"))]
    pub company_handle: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 25, message = "username must be 1-25 characters"))]
    pub username: String,
    #[validate(length(min = 5, max = 20, message = "password must be 5-20 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 30, message = "firstName must be 1-30 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30, message = "lastName must be 1-30 characters"))]
    pub last_name: String,
    #[validate(
        email(message = "email must be an email address"),
        length(min = 6, max = 60, message = "email must be 6-60 characters")
    )]
    pub email: String,
}

/// Body of `POST /users`; admins may create other admins
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 25, message = "username must be 1-25 characters"))]
    pub username: String,
    #[validate(length(min = 5, max = 20, message = "password must be 5-20 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 30, message = "firstName must be 1-30 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30, message = "lastName must be 1-30 characters"))]
    pub last_name: String,
    #[validate(
        email(message = "email must be an email address"),
        length(min = 6, max = 60, message = "email must be 6-60 characters")
    )]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl From<RegisterUserRequest> for CreateUserRequest {
    fn from(req: RegisterUserRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            is_admin: false,
        }
    }
}

/// Body of `POST /auth/token`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 25, message = "username must be 1-25 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompaniesResponse {
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetailResponse {
    pub user: UserDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// New user plus a token for them
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserResponse {
    pub user: User,
    pub token: String,
}

/// Key of a removed company or user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedJobResponse {
    pub deleted: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppliedResponse {
    pub applied: i32,
}
