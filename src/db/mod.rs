pub mod queries;

pub use queries::categories::Category;
pub use queries::questions::Question;

use sqlx::sqlite::SqlitePool;
use sqlx::Error;

pub async fn establish_connection(database_url: &str) -> Result<SqlitePool, Error> {
    SqlitePool::connect(database_url).await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
