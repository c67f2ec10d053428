use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use galley_gate::Submission;
use galley_types::{Dish, DishPayload, Envelope};

use super::{body, located};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// `GET /dishes`
pub async fn list(State(state): State<AppState>) -> ServerResult<Json<Envelope<Vec<Dish>>>> {
    let dishes = state.store.dishes()?;
    Ok(Json(Envelope::new(dishes.list().to_vec())))
}

/// `POST /dishes`
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Envelope<DishPayload>>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Envelope<Dish>>)> {
    let payload = body(payload)?;
    let dish = create_dish(&state, &payload)?;
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

/// `GET /dishes/:dish_id`
pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> ServerResult<Json<Envelope<Dish>>> {
    let dishes = state.store.dishes()?;
    let accepted = state
        .pipelines
        .dish_read
        .run(Submission::new(&*dishes, &()).with_route_id(&dish_id))?;
    let index = located(accepted, "dish read")?;
    let dish = dishes
        .get(index)
        .cloned()
        .ok_or_else(|| ServerError::Internal(format!("dish {dish_id} vanished while locked")))?;
    Ok(Json(Envelope::new(dish)))
}

/// `PUT /dishes/:dish_id`
pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    payload: Result<Json<Envelope<DishPayload>>, JsonRejection>,
) -> ServerResult<Json<Envelope<Dish>>> {
    let payload = body(payload)?;
    let dish = update_dish(&state, &dish_id, &payload)?;
    Ok(Json(Envelope::new(dish)))
}

fn create_dish(state: &AppState, payload: &DishPayload) -> ServerResult<Dish> {
    let mut dishes = state.store.dishes_mut()?;
    state
        .pipelines
        .dish_create
        .run(Submission::new(&*dishes, payload))?;

    let id = dishes.allocate_id()?;
    let dish = Dish::from_payload(id, payload)?;
    let dish = dishes.insert(dish)?.clone();
    tracing::info!(dish_id = %dish.id, "dish created");
    Ok(dish)
}

fn update_dish(state: &AppState, dish_id: &str, payload: &DishPayload) -> ServerResult<Dish> {
    let mut dishes = state.store.dishes_mut()?;
    let accepted = state
        .pipelines
        .dish_update
        .run(Submission::new(&*dishes, payload).with_route_id(dish_id))?;
    let index = located(accepted, "dish update")?;

    let dish = dishes
        .get_mut(index)
        .ok_or_else(|| ServerError::Internal(format!("dish {dish_id} vanished while locked")))?;
    dish.apply(payload)?;
    tracing::info!(dish_id = %dish.id, "dish updated");
    Ok(dish.clone())
}
