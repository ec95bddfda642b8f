//! Loan application repository
//!
//! Rows are inserted once and never updated. Listing returns one page of
//! rows together with the total match count, computed in the same statement
//! through a window function.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for the `loan_applications` table
#[derive(Debug, Clone)]
pub struct LoanApplicationRepository {
    pool: PgPool,
}

impl LoanApplicationRepository {
    /// Creates a new LoanApplicationRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new application row
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` if the id is already taken
    pub async fn insert(&self, row: &LoanApplicationRow) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO loan_applications (
                application_id, full_name, monthly_income, loan_amount,
                loan_purpose, age, phone_number, email, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(row.application_id)
        .bind(&row.full_name)
        .bind(row.monthly_income)
        .bind(row.loan_amount)
        .bind(&row.loan_purpose)
        .bind(row.age)
        .bind(&row.phone_number)
        .bind(&row.email)
        .bind(row.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Retrieves an application by its identifier
    ///
    /// # Returns
    ///
    /// The stored row or `DatabaseError::NotFound`
    pub async fn get_by_id(&self, application_id: Uuid) -> Result<LoanApplicationRow, DatabaseError> {
        sqlx::query_as::<_, LoanApplicationRow>(
            r#"
            SELECT
                application_id, full_name, monthly_income, loan_amount,
                loan_purpose, age, phone_number, email, created_at
            FROM loan_applications
            WHERE application_id = $1
            "#,
        )
        .bind(application_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("LoanApplication", application_id))
    }

    /// Lists applications, optionally restricted to one purpose
    ///
    /// Rows are ordered by creation time, then id. The returned count covers
    /// every matching row regardless of `limit` and `offset`.
    pub async fn list(
        &self,
        purpose: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<LoanApplicationRow>, u64), DatabaseError> {
        let rows = sqlx::query_as::<_, CountedLoanApplicationRow>(
            r#"
            SELECT
                application_id, full_name, monthly_income, loan_amount,
                loan_purpose, age, phone_number, email, created_at,
                COUNT(*) OVER() AS total_count
            FROM loan_applications
            WHERE ($1::TEXT IS NULL OR loan_purpose = $1)
            ORDER BY created_at, application_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(purpose)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        // The window count rides on the rows, so an offset past the end
        // needs its own count.
        let total = match rows.first() {
            Some(first) => first.total_count,
            None => self.count(purpose).await?,
        };
        debug!(rows = rows.len(), total, "Listed loan applications");

        let rows = rows.into_iter().map(|r| r.application).collect();
        Ok((rows, u64::try_from(total).unwrap_or(0)))
    }

    /// Counts applications, optionally restricted to one purpose
    pub async fn count(&self, purpose: Option<&str>) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM loan_applications
            WHERE ($1::TEXT IS NULL OR loan_purpose = $1)
            "#,
        )
        .bind(purpose)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

/// A row of the `loan_applications` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LoanApplicationRow {
    pub application_id: Uuid,
    pub full_name: String,
    pub monthly_income: i64,
    pub loan_amount: i64,
    pub loan_purpose: String,
    pub age: i64,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct CountedLoanApplicationRow {
    #[sqlx(flatten)]
    application: LoanApplicationRow,
    total_count: i64,
}
