use std::convert::Infallible;

use warp::{Filter, Rejection, Reply};

use crate::db::Store;
use crate::error;
use crate::handlers;
use crate::models::PlantPayload;

const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Full API: the plant routes with request tracing and JSON error replies.
pub fn api(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    plants(store)
        .recover(error::handle_rejection)
        .with(warp::trace::request())
}

/// GET /plants, POST /plants, GET /plants/{id}
pub fn plants(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    list_plants(store.clone())
        .or(create_plant(store.clone()))
        .or(get_plant(store))
}

pub fn list_plants(
    store: Store,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("plants")
        .and(warp::get())
        .and(with_store(store))
        .and_then(handlers::list_plants)
}

pub fn create_plant(
    store: Store,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("plants")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<PlantPayload>())
        .and(with_store(store))
        .and_then(handlers::create_plant)
}

pub fn get_plant(
    store: Store,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("plants" / i32)
        .and(warp::get())
        .and(with_store(store))
        .and_then(handlers::get_plant)
}

fn with_store(store: Store) -> impl Filter<Extract = (Store,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}
