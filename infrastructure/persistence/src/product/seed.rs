use sqlx::SqlitePool;

use crate::db::DatabaseError;

/// Sample catalog inserted into an empty table: (name, description, price, stock).
const SAMPLE_PRODUCTS: [(&str, &str, f64, i64); 5] = [
    ("Product A", "Description of Product A", 19.99, 100),
    ("Product B", "Description of Product B", 29.99, 150),
    ("Product C", "Description of Product C", 9.99, 200),
    ("Product D", "Description of Product D", 49.99, 80),
    ("Product E", "Description of Product E", 24.99, 50),
];

/// Inserts the sample catalog when the products table has no rows.
/// Returns the number of rows inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<u64, DatabaseError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::SeedError)?;

    if count > 0 {
        tracing::debug!("Skipping seed, products table already has {count} rows");
        return Ok(0);
    }

    let mut inserted = 0;
    for (name, description, price, stock) in SAMPLE_PRODUCTS {
        inserted += sqlx::query(
            "INSERT INTO products (name, description, price, stock) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock)
        .execute(pool)
        .await
        .map_err(DatabaseError::SeedError)?
        .rows_affected();
    }

    tracing::info!("Database seeded with {inserted} sample products");
    Ok(inserted)
}
