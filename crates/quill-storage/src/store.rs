use std::time::Duration;

use sea_orm::sea_query::Table;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Schema, TransactionTrait,
};

use quill_core::models::text_piece::{NewTextPiece, TextPiece};

use crate::entity::text_piece;
use crate::error::StorageError;

/// Idle timeout and max lifetime for the single in-memory connection. Finite,
/// since the pool adds it to an `Instant`.
const IN_MEMORY_CONNECTION_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 100);

/// Handle to the TextPiece store.
///
/// Cloning is cheap: clones share the underlying connection pool. The store
/// owns every row; callers only ever receive plain [`TextPiece`] values.
#[derive(Clone)]
pub struct TextPieceStore {
    db: DatabaseConnection,
}

impl TextPieceStore {
    /// Open a connection pool for `database_url`.
    ///
    /// See [`connect_options`] for how in-memory URLs are handled.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let db = Database::connect(connect_options(database_url))
            .await
            .map_err(|source| StorageError::Connect {
                url: database_url.to_string(),
                source,
            })?;

        tracing::debug!(in_memory = is_in_memory(database_url), "store connected");
        Ok(Self { db })
    }

    /// Connect and create the schema in one step.
    pub async fn open(database_url: &str) -> Result<Self, StorageError> {
        let store = Self::connect(database_url).await?;
        store.create_schema().await?;
        Ok(store)
    }

    /// Create the `text_pieces` relation from the entity definition.
    /// A no-op if it already exists.
    pub async fn create_schema(&self) -> Result<(), StorageError> {
        let backend = self.db.get_database_backend();
        let mut stmt = Schema::new(backend).create_table_from_entity(text_piece::Entity);
        stmt.if_not_exists();
        self.db.execute(backend.build(&stmt)).await?;
        tracing::debug!("schema created");
        Ok(())
    }

    /// Drop the `text_pieces` relation and every row in it.
    pub async fn teardown(&self) -> Result<(), StorageError> {
        let backend = self.db.get_database_backend();
        let stmt = Table::drop()
            .table(text_piece::Entity)
            .if_exists()
            .to_owned();
        self.db.execute(backend.build(&stmt)).await?;
        tracing::debug!("schema dropped");
        Ok(())
    }

    /// Insert one TextPiece and commit before returning.
    ///
    /// The insert runs in its own transaction. If anything fails before the
    /// commit, the transaction guard is dropped and rolls back.
    pub async fn create(&self, new: NewTextPiece) -> Result<TextPiece, StorageError> {
        let txn = self.db.begin().await?;

        let model = text_piece::ActiveModel {
            content: Set(new.into_content()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::debug!(id = model.id, "text piece created");
        Ok(model.into())
    }

    /// Every stored TextPiece in insertion order.
    pub async fn list_all(&self) -> Result<Vec<TextPiece>, StorageError> {
        let models = text_piece::Entity::find()
            .order_by_asc(text_piece::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(TextPiece::from).collect())
    }

    pub async fn count(&self) -> Result<u64, StorageError> {
        let count = text_piece::Entity::find().count(&self.db).await?;
        Ok(count)
    }

    /// Close the pool. Pending checkouts finish first.
    pub async fn close(self) -> Result<(), StorageError> {
        self.db.close().await?;
        Ok(())
    }
}

/// Pool options for `database_url`.
///
/// An in-memory SQLite database lives only as long as its connection, so for
/// those URLs the pool is pinned to exactly one connection that is never
/// reaped for idleness or age.
pub fn connect_options(database_url: &str) -> ConnectOptions {
    let mut opts = ConnectOptions::new(database_url.to_string());
    opts.sqlx_logging(false);
    if is_in_memory(database_url) {
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONNECTION_TTL)
            .max_lifetime(IN_MEMORY_CONNECTION_TTL);
    }
    opts
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
