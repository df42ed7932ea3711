use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

pub async fn get_db() -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
