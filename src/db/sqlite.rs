use crate::db::models::{ContactMessage, NewMessage, SiteSettings};
use crate::db::schema::SQLITE_INIT;
use crate::error::SiteError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SiteStorage {
    pool: SqlitePool,
}

impl SiteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SiteError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a contact message, stamping it with the current UTC time.
    /// Returns the stored row.
    pub async fn insert_message(&self, msg: NewMessage) -> Result<ContactMessage, SiteError> {
        let timestamp = Utc::now();
        let result = sqlx::query(
            "INSERT INTO messages (name, email, phone, content, timestamp) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.phone)
        .bind(&msg.content)
        .bind(timestamp.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(ContactMessage {
            id: result.last_insert_rowid(),
            name: msg.name,
            email: msg.email,
            phone: msg.phone,
            content: msg.content,
            timestamp,
        })
    }

    /// All messages, most recent first.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, SiteError> {
        let rows = sqlx::query(
            "SELECT id, name, email, phone, content, timestamp FROM messages
             ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_message).collect()
    }

    /// The `n` most recent messages, most recent first.
    pub async fn recent_messages(&self, n: i64) -> Result<Vec<ContactMessage>, SiteError> {
        let rows = sqlx::query(
            "SELECT id, name, email, phone, content, timestamp FROM messages
             ORDER BY timestamp DESC, id DESC LIMIT ?",
        )
        .bind(n)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_message).collect()
    }

    pub async fn count_messages(&self) -> Result<i64, SiteError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Fetch the singleton settings row, inserting the default when absent.
    pub async fn get_or_create_settings(&self) -> Result<SiteSettings, SiteError> {
        let row = sqlx::query(
            "SELECT site_name, email, phone, address, logo FROM site_settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            return Self::row_to_settings(row);
        }

        let settings = SiteSettings::initial();
        sqlx::query(
            "INSERT INTO site_settings (id, site_name, email, phone, address, logo)
             VALUES (1, ?, ?, ?, ?, ?)",
        )
        .bind(&settings.site_name)
        .bind(&settings.email)
        .bind(&settings.phone)
        .bind(&settings.address)
        .bind(&settings.logo)
        .execute(&self.pool)
        .await?;
        Ok(settings)
    }

    /// Overwrite the singleton settings row.
    pub async fn update_settings(&self, settings: &SiteSettings) -> Result<(), SiteError> {
        sqlx::query(
            "UPDATE site_settings SET site_name = ?, email = ?, phone = ?, address = ?, logo = ?
             WHERE id = 1",
        )
        .bind(&settings.site_name)
        .bind(&settings.email)
        .bind(&settings.phone)
        .bind(&settings.address)
        .bind(&settings.logo)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    fn row_to_message(row: SqliteRow) -> Result<ContactMessage, SiteError> {
        let timestamp_str: String = row.try_get("timestamp")?;
        let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&timestamp_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(ContactMessage {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            content: row.try_get("content")?,
            timestamp,
        })
    }

    fn row_to_settings(row: SqliteRow) -> Result<SiteSettings, SiteError> {
        Ok(SiteSettings {
            site_name: row.try_get("site_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            address: row.try_get("address")?,
            logo: row.try_get("logo")?,
        })
    }
}
