//! Postgres Access
//!
//! One connection, three statements: look up the user by email, read the
//! task document, upsert it back. Concurrent runs are serialized by the
//! upsert itself, not by this module.

use tokio_postgres::{Client, NoTls};
use tracing::{debug, error};

use crate::error::SeedResult;
use crate::model::UserData;

pub struct Database {
    client: Client,
}

impl Database {
    /// Connect to Postgres and spawn the background connection task.
    pub async fn connect(url: &str) -> SeedResult<Self> {
        let (client, connection) = tokio_postgres::connect(url, NoTls).await?;
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                error!("postgres connection error: {err}");
            }
        });
        debug!("connected to postgres");
        Ok(Self { client })
    }

    /// Resolve a user id by email. `None` when no such user exists.
    pub async fn find_user_id(&self, email: &str) -> SeedResult<Option<String>> {
        let row = self
            .client
            .query_opt("SELECT id FROM users WHERE email = $1", &[&email])
            .await?;
        Ok(row.map(|row| row.get(0)))
    }

    /// Load the user's task document, or the empty document when none is
    /// stored yet.
    pub async fn load_user_data(&self, user_id: &str) -> SeedResult<UserData> {
        let row = self
            .client
            .query_opt(
                "SELECT tasks_json FROM user_data WHERE user_id = $1",
                &[&user_id],
            )
            .await?;
        match row {
            Some(row) => {
                let raw: String = row.get(0);
                Ok(serde_json::from_str(&raw)?)
            }
            None => Ok(UserData::default()),
        }
    }

    /// Upsert the user's task document.
    pub async fn save_user_data(&self, user_id: &str, data: &UserData) -> SeedResult<()> {
        let raw = serde_json::to_string(data)?;
        self.client
            .execute(
                "INSERT INTO user_data (user_id, tasks_json) VALUES ($1, $2) \
                 ON CONFLICT (user_id) DO UPDATE SET tasks_json = EXCLUDED.tasks_json",
                &[&user_id, &raw],
            )
            .await?;
        debug!(user_id, "task document upserted");
        Ok(())
    }
}
