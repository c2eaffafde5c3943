//! PostgreSQL implementation of the ListingStore port.
//!
//! Uses sqlx for type-safe database operations with connection
//! pooling. Activation idempotency rests on the UNIQUE constraint on
//! `payment_session_id`: the insert uses `ON CONFLICT DO NOTHING` and
//! reports `Duplicate` when no row came back, which also resolves
//! races between concurrent redeliveries (first insert wins).

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog::Tier;
use crate::domain::foundation::{DomainError, ErrorCode, ListingId, OwnerId};
use crate::domain::listing::{Listing, ListingUpdate, NewListing};
use crate::ports::{InsertOutcome, ListingStore};

/// PostgreSQL implementation of the ListingStore port.
pub struct PostgresListingStore {
    pool: PgPool,
    /// Bound on every store call. A timed-out call fails; retry is the
    /// webhook transport's job.
    call_timeout: Duration,
}

impl PostgresListingStore {
    pub fn new(pool: PgPool, call_timeout: Duration) -> Self {
        Self { pool, call_timeout }
    }

    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, DomainError>>,
    ) -> Result<T, DomainError> {
        tokio::time::timeout(self.call_timeout, fut)
            .await
            .map_err(|_| DomainError::new(ErrorCode::Timeout, "listing store call timed out"))?
    }
}

/// Database row representation of a listing.
#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    id: Uuid,
    title: String,
    company: String,
    location: String,
    job_type: String,
    description: String,
    salary_range: Option<String>,
    contact_email: String,
    contact_phone: Option<String>,
    tier: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl TryFrom<ListingRow> for Listing {
    type Error = DomainError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let tier = Tier::parse(&row.tier).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid tier value: {}", row.tier),
            )
        })?;

        Ok(Listing {
            id: ListingId::from_uuid(row.id),
            title: row.title,
            company: row.company,
            location: row.location,
            job_type: row.job_type,
            description: row.description,
            salary_range: row.salary_range,
            contact_email: row.contact_email,
            contact_phone: row.contact_phone,
            tier,
            owner_id: OwnerId::from_uuid(row.owner_id),
            created_at: row.created_at,
            expires_at: row.expires_at,
        })
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl ListingStore for PostgresListingStore {
    async fn insert(&self, listing: NewListing) -> Result<InsertOutcome, DomainError> {
        self.bounded(async {
            let inserted: Option<(Uuid,)> = sqlx::query_as(
                r#"
                INSERT INTO job_listings (
                    title, company, location, job_type, description,
                    salary_range, contact_email, contact_phone,
                    tier, owner_id, payment_session_id, created_at, expires_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                ON CONFLICT (payment_session_id) DO NOTHING
                RETURNING id
                "#,
            )
            .bind(&listing.draft.title)
            .bind(&listing.draft.company)
            .bind(&listing.draft.location)
            .bind(&listing.draft.job_type)
            .bind(&listing.draft.description)
            .bind(&listing.draft.salary_range)
            .bind(&listing.draft.contact_email)
            .bind(&listing.draft.contact_phone)
            .bind(listing.tier.as_str())
            .bind(listing.draft.owner_id.as_uuid())
            .bind(&listing.payment_session_id)
            .bind(listing.created_at)
            .bind(listing.expires_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert listing", e))?;

            Ok(match inserted {
                Some((id,)) => InsertOutcome::Inserted(ListingId::from_uuid(id)),
                None => InsertOutcome::Duplicate,
            })
        })
        .await
    }

    async fn update(
        &self,
        id: ListingId,
        owner_id: OwnerId,
        update: ListingUpdate,
    ) -> Result<(), DomainError> {
        self.bounded(async {
            let result = sqlx::query(
                r#"
                UPDATE job_listings SET
                    title = $3,
                    company = $4,
                    location = $5,
                    job_type = $6,
                    description = $7,
                    salary_range = $8,
                    contact_email = $9,
                    contact_phone = $10
                WHERE id = $1 AND owner_id = $2
                "#,
            )
            .bind(id.as_uuid())
            .bind(owner_id.as_uuid())
            .bind(&update.title)
            .bind(&update.company)
            .bind(&update.location)
            .bind(&update.job_type)
            .bind(&update.description)
            .bind(&update.salary_range)
            .bind(&update.contact_email)
            .bind(&update.contact_phone)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update listing", e))?;

            if result.rows_affected() == 0 {
                return Err(DomainError::listing_not_found());
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ListingId, owner_id: OwnerId) -> Result<(), DomainError> {
        self.bounded(async {
            let result = sqlx::query(
                "DELETE FROM job_listings WHERE id = $1 AND owner_id = $2",
            )
            .bind(id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete listing", e))?;

            if result.rows_affected() == 0 {
                return Err(DomainError::listing_not_found());
            }
            Ok(())
        })
        .await
    }

    async fn find_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Listing>, DomainError> {
        self.bounded(async {
            let rows: Vec<ListingRow> = sqlx::query_as(
                r#"
                SELECT id, title, company, location, job_type, description,
                       salary_range, contact_email, contact_phone,
                       tier, owner_id, created_at, expires_at
                FROM job_listings
                WHERE owner_id = $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(owner_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query listings by owner", e))?;

            rows.into_iter().map(Listing::try_from).collect()
        })
        .await
    }

    async fn find_active(&self, now: DateTime<Utc>) -> Result<Vec<Listing>, DomainError> {
        self.bounded(async {
            let rows: Vec<ListingRow> = sqlx::query_as(
                r#"
                SELECT id, title, company, location, job_type, description,
                       salary_range, contact_email, contact_phone,
                       tier, owner_id, created_at, expires_at
                FROM job_listings
                WHERE expires_at > $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query active listings", e))?;

            rows.into_iter().map(Listing::try_from).collect()
        })
        .await
    }
}
