use basalt_data_sqlx::Tx;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Row, Sqlite};

async fn pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT NOT NULL)")
        .execute(&pool)
        .await
        .unwrap();
    pool
}

async fn note_count(pool: &Pool<Sqlite>) -> i64 {
    sqlx::query("SELECT COUNT(*) AS n FROM notes")
        .fetch_one(pool)
        .await
        .unwrap()
        .get("n")
}

#[tokio::test]
async fn test_commit_persists() {
    let pool = pool().await;
    let mut tx = Tx::begin(&pool).await.unwrap();
    sqlx::query("INSERT INTO notes (id, body) VALUES (1, 'kept')")
        .execute(tx.as_mut())
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert_eq!(note_count(&pool).await, 1);
}

#[tokio::test]
async fn test_rollback_discards() {
    let pool = pool().await;
    let mut tx = Tx::begin(&pool).await.unwrap();
    sqlx::query("INSERT INTO notes (id, body) VALUES (1, 'dropped')")
        .execute(tx.as_mut())
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    assert_eq!(note_count(&pool).await, 0);
}

#[tokio::test]
async fn test_drop_rolls_back() {
    let pool = pool().await;
    {
        let mut tx = Tx::begin(&pool).await.unwrap();
        sqlx::query("INSERT INTO notes (id, body) VALUES (1, 'dropped')")
            .execute(tx.as_mut())
            .await
            .unwrap();
    }

    assert_eq!(note_count(&pool).await, 0);
}
