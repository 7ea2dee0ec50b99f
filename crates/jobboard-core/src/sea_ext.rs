use sea_orm::{ConnectionTrait, DbBackend, DbErr, EntityTrait, QuerySelect, Select, SqlErr};

/// True when the store rejected a write because of a unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Row locking for read-modify-write sequences inside a transaction.
pub trait LockForUpdate {
    /// `SELECT ... FOR UPDATE` on backends with row locks. SQLite serialises
    /// writers at the database level and has no row lock syntax.
    fn lock_for_update<C: ConnectionTrait>(self, conn: &C) -> Self;
}

impl<E> LockForUpdate for Select<E>
where
    E: EntityTrait,
{
    fn lock_for_update<C: ConnectionTrait>(self, conn: &C) -> Self {
        match conn.get_database_backend() {
            DbBackend::Sqlite => self,
            DbBackend::Postgres | DbBackend::MySql => self.lock_exclusive(),
        }
    }
}
