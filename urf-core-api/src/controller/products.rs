//! Product endpoints, generic over the unit-of-work backend

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use urf_core_db::repository::{DeleteById, ExistsById, Find, Insert, Query, Update};
use urf_core_db::{ProductModel, ProductsUnitOfWork, UnitOfWork, UnitOfWorkFactory};

use crate::error::{ApiError, ApiResult};
use crate::router::AppState;

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Product {id} does not exist"))
}

/// `GET /api/{entity}`
pub async fn list<F: UnitOfWorkFactory>(
    State(state): State<AppState<F>>,
) -> ApiResult<Json<Vec<ProductModel>>> {
    let uow = state.factory.begin().await?;
    let products = uow.products_repository().query().await?;
    Ok(Json(products))
}

/// `GET /api/{entity}/{id}`
pub async fn get<F: UnitOfWorkFactory>(
    State(state): State<AppState<F>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProductModel>> {
    let uow = state.factory.begin().await?;
    uow.products_repository()
        .find(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// `POST /api/{entity}`
pub async fn create<F: UnitOfWorkFactory>(
    State(state): State<AppState<F>>,
    Json(item): Json<ProductModel>,
) -> ApiResult<Response> {
    let uow = state.factory.begin().await?;
    let saved = uow.products_repository().insert(item).await?;
    uow.commit().await?;

    tracing::info!(id = saved.id, "Product created");
    let location = format!("{}/{}", state.base_path(), saved.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved),
    )
        .into_response())
}

/// `PUT /api/{entity}/{id}`
///
/// The body replaces the whole record. A conflicting commit is re-checked in
/// a fresh unit of work so a concurrently deleted row reports 404.
pub async fn update<F: UnitOfWorkFactory>(
    State(state): State<AppState<F>>,
    Path(id): Path<i32>,
    Json(item): Json<ProductModel>,
) -> ApiResult<Json<ProductModel>> {
    if item.id != id {
        return Err(ApiError::BadRequest(format!(
            "Path id {id} does not match body id {}",
            item.id
        )));
    }

    let uow = state.factory.begin().await?;
    let updated = uow.products_repository().update(item).await?;

    match uow.commit().await {
        Ok(()) => {
            tracing::info!(id, "Product updated");
            Ok(Json(updated))
        }
        Err(err) if err.is_concurrency_conflict() => {
            let check = state.factory.begin().await?;
            if check.products_repository().exists_by_id(id).await? {
                Err(ApiError::Conflict(err.to_string()))
            } else {
                Err(not_found(id))
            }
        }
        Err(err) => Err(err.into()),
    }
}

/// `DELETE /api/{entity}/{id}`
pub async fn delete<F: UnitOfWorkFactory>(
    State(state): State<AppState<F>>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let uow = state.factory.begin().await?;
    if !uow.products_repository().delete_by_id(id).await? {
        return Err(not_found(id));
    }
    uow.commit().await?;

    tracing::info!(id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
