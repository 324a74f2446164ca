//! Async handlers behind the plant routes.
//!
//! Diesel is synchronous, so every store call is moved onto tokio's blocking
//! pool together with a pooled connection.

use diesel::prelude::*;
use tracing::{debug, info};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::actions;
use crate::db::Store;
use crate::error::ApiError;
use crate::models::PlantPayload;

async fn run<T, F>(store: Store, action: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || -> Result<T, ApiError> {
        let mut conn = store.get()?;
        Ok(action(&mut *conn)?)
    })
    .await?
}

/// `GET /plants`
pub async fn list_plants(store: Store) -> Result<impl Reply, Rejection> {
    let plants = run(store, actions::list_plants).await?;
    debug!(count = plants.len(), "listed plants");

    Ok(warp::reply::json(&plants))
}

/// `POST /plants`
pub async fn create_plant(payload: PlantPayload, store: Store) -> Result<impl Reply, Rejection> {
    let new_plant = payload.validate().map_err(ApiError::from)?;
    let plant = run(store, move |conn| actions::insert_new_plant(conn, &new_plant)).await?;
    info!(id = plant.id, name = %plant.name, "plant created");

    Ok(warp::reply::with_status(
        warp::reply::json(&plant),
        StatusCode::CREATED,
    ))
}

/// `GET /plants/{id}`
pub async fn get_plant(id: i32, store: Store) -> Result<impl Reply, Rejection> {
    let plant = run(store, move |conn| actions::find_plant_by_id(conn, id))
        .await?
        .ok_or(ApiError::NotFound(id))?;
    debug!(id, "found plant");

    Ok(warp::reply::json(&plant))
}
