use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{EventRepository, RepositoryResult};
use crate::models::{Event, EventInput};

#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Event>> {
        let row = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, titulo, descripcion, fecha_inicio, fecha_fin, ubicacion, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, titulo, descripcion, fecha_inicio, fecha_fin, ubicacion, created_at, updated_at
            FROM events
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, input: EventInput) -> RepositoryResult<Event> {
        let row = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (titulo, descripcion, fecha_inicio, fecha_fin, ubicacion)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, titulo, descripcion, fecha_inicio, fecha_fin, ubicacion, created_at, updated_at
            "#,
        )
        .bind(&input.titulo)
        .bind(&input.descripcion)
        .bind(input.fecha_inicio)
        .bind(input.fecha_fin)
        .bind(&input.ubicacion)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: Uuid, input: EventInput) -> RepositoryResult<Option<Event>> {
        let row = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET
                titulo = $2,
                descripcion = $3,
                fecha_inicio = $4,
                fecha_fin = $5,
                ubicacion = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, titulo, descripcion, fecha_inicio, fecha_fin, ubicacion, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.titulo)
        .bind(&input.descripcion)
        .bind(input.fecha_inicio)
        .bind(input.fecha_fin)
        .bind(&input.ubicacion)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
