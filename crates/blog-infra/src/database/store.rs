//! Store adapter - parameterized statements against the underlying database.

use sea_orm::{
    ConnectionTrait, DbBackend, DbConn, DbErr, QueryResult, SqlErr, Statement, Value,
};

use blog_core::error::RepoError;

/// Thin wrapper issuing parameterized SQL through a shared connection pool.
///
/// Values are always bound, never spliced into the statement text. Each call
/// is a single statement; there is no retry and no transaction around it.
#[derive(Clone)]
pub struct SqlStore {
    db: DbConn,
}

impl SqlStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub fn backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.backend(), sql, values)
    }

    /// Run a write and return the number of rows it affected.
    pub async fn execute(&self, sql: &str, values: Vec<Value>) -> Result<u64, RepoError> {
        let result = self
            .db
            .execute(self.statement(sql, values))
            .await
            .map_err(into_repo_error)?;

        Ok(result.rows_affected())
    }

    /// Fetch exactly one row, failing with [`RepoError::NotFound`] when there is none.
    pub async fn query_one(&self, sql: &str, values: Vec<Value>) -> Result<QueryResult, RepoError> {
        self.db
            .query_one(self.statement(sql, values))
            .await
            .map_err(into_repo_error)?
            .ok_or(RepoError::NotFound)
    }

    /// Fetch every row the statement yields.
    pub async fn query_many(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<Vec<QueryResult>, RepoError> {
        self.db
            .query_all(self.statement(sql, values))
            .await
            .map_err(into_repo_error)
    }
}

/// Classify a driver error without losing its message.
pub(crate) fn into_repo_error(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return RepoError::Constraint(msg),
        _ => {}
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        DbErr::RecordNotFound(_) => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// Read a named column from a row.
pub(crate) fn get<T: sea_orm::TryGetable>(row: &QueryResult, column: &str) -> Result<T, RepoError> {
    row.try_get("", column)
        .map_err(|e| RepoError::Query(format!("reading column {column}: {e}")))
}
