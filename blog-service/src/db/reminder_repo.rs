use crate::models::Reminder;
use sqlx::PgPool;

/// All reminders with all columns, for the admin listing. Reminders have
/// no other reader and no application-layer write path.
pub async fn list_all_reminders(pool: &PgPool) -> Result<Vec<Reminder>, sqlx::Error> {
    let reminders =
        sqlx::query_as::<_, Reminder>("SELECT id, date, email, text FROM reminders ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(reminders)
}
