use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted event row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub titulo: String,
    pub descripcion: String,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub ubicacion: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for create and update, exactly as the client sent it.
///
/// Fields stay untyped until validation so that a missing field, a `null`
/// and a wrongly typed value all end up as the same 400 response instead
/// of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    pub titulo: Option<Value>,
    pub descripcion: Option<Value>,
    pub fecha_inicio: Option<Value>,
    pub fecha_fin: Option<Value>,
    pub ubicacion: Option<Value>,
}

/// The five client-settable fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub titulo: String,
    pub descripcion: String,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub ubicacion: String,
}

impl Event {
    /// Overwrites every client-settable field. Nothing from the old record survives.
    pub fn apply(&mut self, input: EventInput, now: DateTime<Utc>) {
        self.titulo = input.titulo;
        self.descripcion = input.descripcion;
        self.fecha_inicio = input.fecha_inicio;
        self.fecha_fin = input.fecha_fin;
        self.ubicacion = input.ubicacion;
        self.updated_at = now;
    }
}
