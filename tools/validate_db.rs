//! Scan a Jobly database for rows that break the data invariants, e.g. after
//! importing a dump loaded without the schema's CHECK constraints.

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use sqlx::Row;
use std::env;

#[derive(Parser)]
#[command(about = "Report (and optionally repair) invalid rows in a Jobly database")]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Null out invalid numeric values and drop orphaned applications
    #[arg(long)]
    fix: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .context("DATABASE_URL must be set or passed with --database-url")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .context("connecting to database")?;

    // Jobs with negative salary
    let negative_salary = sqlx::query("SELECT id, salary FROM jobs WHERE salary < 0")
        .fetch_all(&pool)
        .await?;

    println!("Negative salary rows: {}", negative_salary.len());
    for r in negative_salary.iter() {
        let id: i32 = r.get("id");
        let salary: i32 = r.get("salary");
        println!("job {}: salary {}", id, salary);
        if cli.fix {
            sqlx::query("UPDATE jobs SET salary = NULL WHERE id = $1")
                .bind(id)
                .execute(&pool)
                .await?;
            println!("Fixed: job {} salary -> NULL", id);
        }
    }

    // Jobs with equity outside 0..=1
    let invalid_equity = sqlx::query(
        "SELECT id, equity::float8 AS equity FROM jobs WHERE equity < 0 OR equity > 1",
    )
    .fetch_all(&pool)
    .await?;

    println!("Invalid equity rows: {}", invalid_equity.len());
    for r in invalid_equity.iter() {
        let id: i32 = r.get("id");
        let equity: f64 = r.get("equity");
        println!("job {}: equity {}", id, equity);
        if cli.fix {
            sqlx::query("UPDATE jobs SET equity = NULL WHERE id = $1")
                .bind(id)
                .execute(&pool)
                .await?;
            println!("Fixed: job {} equity -> NULL", id);
        }
    }

    // Users whose email has no '@'; reported only, there is no safe replacement
    let invalid_emails = sqlx::query("SELECT username, email FROM users WHERE position('@' in email) = 0")
        .fetch_all(&pool)
        .await?;

    println!("Invalid email rows: {}", invalid_emails.len());
    for r in invalid_emails.iter() {
        let username: String = r.get("username");
        let email: String = r.get("email");
        println!("user {}: email {:?}", username, email);
    }

    // Applications pointing at missing users or jobs
    let orphaned = sqlx::query(
        r#"SELECT a.username, a.job_id
           FROM applications a
           LEFT JOIN users u ON u.username = a.username
           LEFT JOIN jobs j ON j.id = a.job_id
           WHERE u.username IS NULL OR j.id IS NULL"#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Orphaned application rows: {}", orphaned.len());
    for r in orphaned.iter() {
        let username: String = r.get("username");
        let job_id: i32 = r.get("job_id");
        println!("application {} -> job {}", username, job_id);
        if cli.fix {
            sqlx::query("DELETE FROM applications WHERE username = $1 AND job_id = $2")
                .bind(&username)
                .bind(job_id)
                .execute(&pool)
                .await?;
            println!("Fixed: removed application {} -> job {}", username, job_id);
        }
    }

    pool.close().await;
    Ok(())
}
