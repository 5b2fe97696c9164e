//! Repository tests against a real PostgreSQL using TestContainers
//!
//! Each test starts its own container and applies the migrations, so tests are
//! isolated from each other. They need Docker and are ignored by default:
//! `cargo test -- --ignored`.

use sqlx::PgPool;
use testcontainers::ContainerAsync;
use testcontainers_modules::{postgres::Postgres, testcontainers::runners::AsyncRunner};

use jobly::application::ports::{
    ApplicationRepository, CompanyRepository, JobRepository, RepositoryError, UserRepository,
};
use jobly::domain::{
    changes::FieldValue,
    entities::{NewCompany, NewJob, NewUser},
    filters::{CompanyFilterField, JobFilterField},
    value_objects::{CompanyHandle, Username},
};
use jobly::infrastructure::persistence::{
    PostgresApplicationRepository, PostgresCompanyRepository, PostgresJobRepository,
    PostgresUserRepository,
};

/// Test environment using TestContainers
struct TestEnvironment {
    companies: PostgresCompanyRepository,
    jobs: PostgresJobRepository,
    users: PostgresUserRepository,
    applications: PostgresApplicationRepository,
    _container: ContainerAsync<Postgres>,
}

impl TestEnvironment {
    async fn new() -> Self {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get container host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");
        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            companies: PostgresCompanyRepository::new(pool.clone()),
            jobs: PostgresJobRepository::new(pool.clone()),
            users: PostgresUserRepository::new(pool.clone()),
            applications: PostgresApplicationRepository::new(pool),
            _container: container,
        }
    }

    async fn seed_company(&self, handle: &str, name: &str, num_employees: Option<i32>) {
        self.companies
            .create(&NewCompany {
                handle: CompanyHandle::new(handle.to_string()).unwrap(),
                name: name.to_string(),
                description: format!("Desc {}", name),
                num_employees,
                logo_url: None,
            })
            .await
            .unwrap();
    }

    async fn seed_job(&self, title: &str, salary: Option<i32>, equity: Option<f64>) -> i32 {
        self.jobs
            .create(&NewJob {
                title: title.to_string(),
                salary,
                equity,
                company_handle: CompanyHandle::new("c1".to_string()).unwrap(),
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_user(&self, username: &str) {
        self.users
            .create(&NewUser {
                username: Username::new(username.to_string()).unwrap(),
                password_hash: "sha256$16$00$00".to_string(),
                first_name: "First".to_string(),
                last_name: "Last".to_string(),
                email: format!("{}@email.com", username),
                is_admin: false,
            })
            .await
            .unwrap();
    }
}

fn handles(companies: &[jobly::entities::Company]) -> Vec<&str> {
    companies.iter().map(|c| c.handle.as_str()).collect()
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_company_crud() {
    let env = TestEnvironment::new().await;
    env.seed_company("c2", "Bravo", Some(2)).await;
    env.seed_company("c1", "Alpha", Some(1)).await;

    let all = env.companies.find_all().await.unwrap();
    assert_eq!(handles(&all), vec!["c1", "c2"]);

    let detail = env.companies.get("c1").await.unwrap();
    assert_eq!(detail.company.name, "Alpha");
    assert!(detail.jobs.is_empty());

    let updated = env
        .companies
        .update(
            "c1",
            &[
                ("numEmployees", FieldValue::Integer(Some(10))),
                ("logoUrl", FieldValue::Text(Some("http://c1.img".to_string()))),
            ],
        )
        .await
        .unwrap();
    assert_eq!(updated.num_employees, Some(10));
    assert_eq!(updated.logo_url.as_deref(), Some("http://c1.img"));

    env.companies.remove("c1").await.unwrap();
    let err = env.companies.get("c1").await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(msg) if msg == "No company: c1"));

    let err = env.companies.remove("c1").await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_company_duplicates_conflict() {
    let env = TestEnvironment::new().await;
    env.seed_company("c1", "Alpha", None).await;

    let err = env
        .companies
        .create(&NewCompany {
            handle: CompanyHandle::new("c1".to_string()).unwrap(),
            name: "Other".to_string(),
            description: String::new(),
            num_employees: None,
            logo_url: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_company_filters() {
    let env = TestEnvironment::new().await;
    env.seed_company("c1", "50% Off", Some(1)).await;
    env.seed_company("c2", "5000 Off", Some(20)).await;
    env.seed_company("c3", "Anderson", Some(300)).await;

    // Wildcards in the input match literally
    let found = env
        .companies
        .find_filtered(&[CompanyFilterField::Name("50%".to_string())])
        .await
        .unwrap();
    assert_eq!(handles(&found), vec!["c1"]);

    let found = env
        .companies
        .find_filtered(&[CompanyFilterField::Name("AND".to_string())])
        .await
        .unwrap();
    assert_eq!(handles(&found), vec!["c3"]);

    let found = env
        .companies
        .find_filtered(&[
            CompanyFilterField::MinEmployees(10),
            CompanyFilterField::MaxEmployees(300),
        ])
        .await
        .unwrap();
    assert_eq!(handles(&found), vec!["c2", "c3"]);

    let err = env
        .companies
        .find_filtered(&[
            CompanyFilterField::MinEmployees(100),
            CompanyFilterField::MaxEmployees(30),
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidRequest(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_jobs() {
    let env = TestEnvironment::new().await;
    env.seed_company("c1", "Alpha", None).await;

    let j1 = env.seed_job("Engineer", Some(100_000), Some(0.05)).await;
    let j2 = env.seed_job("Analyst", Some(50_000), None).await;

    let job = env.jobs.get(j1).await.unwrap();
    assert_eq!(job.equity, Some(0.05));
    assert_eq!(job.company_handle, "c1");

    let all = env.jobs.find_all().await.unwrap();
    assert_eq!(
        all.iter().map(|j| j.id).collect::<Vec<_>>(),
        vec![j2, j1]
    );

    let found = env
        .jobs
        .find_filtered(&[
            JobFilterField::MinSalary(60_000),
            JobFilterField::HasEquity(true),
        ])
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, j1);

    let detail = env.companies.get("c1").await.unwrap();
    assert_eq!(
        detail.jobs.iter().map(|j| j.id).collect::<Vec<_>>(),
        vec![j1, j2]
    );

    let updated = env
        .jobs
        .update(j2, &[("equity", FieldValue::Decimal(Some(0.5)))])
        .await
        .unwrap();
    assert_eq!(updated.equity, Some(0.5));

    env.jobs.remove(j2).await.unwrap();
    let err = env.jobs.get(j2).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(msg) if msg == format!("No job: {}", j2)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_job_for_missing_company() {
    let env = TestEnvironment::new().await;

    let err = env
        .jobs
        .create(&NewJob {
            title: "J".to_string(),
            salary: None,
            equity: None,
            company_handle: CompanyHandle::new("nope".to_string()).unwrap(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(msg) if msg == "No company: nope"));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_users_and_applications() {
    let env = TestEnvironment::new().await;
    env.seed_company("c1", "Alpha", None).await;
    let job_id = env.seed_job("Engineer", None, None).await;
    env.seed_user("u1").await;

    let credentials = env.users.find_credentials("u1").await.unwrap().unwrap();
    assert_eq!(credentials.password_hash, "sha256$16$00$00");
    assert!(env.users.find_credentials("nope").await.unwrap().is_none());

    let err = env
        .users
        .create(&NewUser {
            username: Username::new("u1".to_string()).unwrap(),
            password_hash: "x".to_string(),
            first_name: "F".to_string(),
            last_name: "L".to_string(),
            email: "u1@email.com".to_string(),
            is_admin: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let applied = env.applications.apply("u1", job_id).await.unwrap();
    assert_eq!(applied.job_id, job_id);

    let err = env.applications.apply("u1", job_id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let err = env.applications.apply("u1", 0).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let err = env.applications.apply("nope", job_id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let detail = env.users.get("u1").await.unwrap();
    assert_eq!(detail.jobs, vec![job_id]);

    let updated = env
        .users
        .update(
            "u1",
            &[
                ("firstName", FieldValue::Text(Some("New".to_string()))),
                ("password", FieldValue::Text(Some("sha256$16$11$11".to_string()))),
            ],
        )
        .await
        .unwrap();
    assert_eq!(updated.first_name, "New");
    let credentials = env.users.find_credentials("u1").await.unwrap().unwrap();
    assert_eq!(credentials.password_hash, "sha256$16$11$11");

    env.users.remove("u1").await.unwrap();
    let err = env.users.get("u1").await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}
