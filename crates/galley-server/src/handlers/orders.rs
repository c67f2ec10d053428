use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use galley_gate::Submission;
use galley_types::{Envelope, Order, OrderPayload};

use super::{body, located};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// `GET /orders`
pub async fn list(State(state): State<AppState>) -> ServerResult<Json<Envelope<Vec<Order>>>> {
    let orders = state.store.orders()?;
    Ok(Json(Envelope::new(orders.list().to_vec())))
}

/// `POST /orders`
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Envelope<OrderPayload>>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Envelope<Order>>)> {
    let payload = body(payload)?;
    let order = create_order(&state, &payload)?;
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

/// `GET /orders/:order_id`
pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ServerResult<Json<Envelope<Order>>> {
    let orders = state.store.orders()?;
    let accepted = state
        .pipelines
        .order_read
        .run(Submission::new(&*orders, &()).with_route_id(&order_id))?;
    let index = located(accepted, "order read")?;
    let order = orders
        .get(index)
        .cloned()
        .ok_or_else(|| ServerError::Internal(format!("order {order_id} vanished while locked")))?;
    Ok(Json(Envelope::new(order)))
}

/// `PUT /orders/:order_id`
pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    payload: Result<Json<Envelope<OrderPayload>>, JsonRejection>,
) -> ServerResult<Json<Envelope<Order>>> {
    let payload = body(payload)?;
    let order = update_order(&state, &order_id, &payload)?;
    Ok(Json(Envelope::new(order)))
}

/// `DELETE /orders/:order_id`
pub async fn destroy(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ServerResult<StatusCode> {
    destroy_order(&state, &order_id)?;
    Ok(StatusCode::NO_CONTENT)
}

fn create_order(state: &AppState, payload: &OrderPayload) -> ServerResult<Order> {
    let mut orders = state.store.orders_mut()?;
    state
        .pipelines
        .order_create
        .run(Submission::new(&*orders, payload))?;

    let id = orders.allocate_id()?;
    let order = Order::from_payload(id, payload)?;
    let order = orders.insert(order)?.clone();
    tracing::info!(order_id = %order.id, status = ?order.status, "order created");
    Ok(order)
}

fn update_order(state: &AppState, order_id: &str, payload: &OrderPayload) -> ServerResult<Order> {
    let mut orders = state.store.orders_mut()?;
    let accepted = state
        .pipelines
        .order_update
        .run(Submission::new(&*orders, payload).with_route_id(order_id))?;
    let index = located(accepted, "order update")?;

    let order = orders
        .get_mut(index)
        .ok_or_else(|| ServerError::Internal(format!("order {order_id} vanished while locked")))?;
    let previous = order.status.clone();
    order.apply(payload)?;
    tracing::info!(
        order_id = %order.id,
        from = ?previous,
        to = ?order.status,
        "order updated"
    );
    Ok(order.clone())
}

fn destroy_order(state: &AppState, order_id: &str) -> ServerResult<()> {
    let mut orders = state.store.orders_mut()?;
    let accepted = state
        .pipelines
        .order_delete
        .run(Submission::new(&*orders, &()).with_route_id(order_id))?;
    let index = located(accepted, "order delete")?;

    orders
        .remove_at(index)
        .ok_or_else(|| ServerError::Internal(format!("order {order_id} vanished while locked")))?;
    tracing::info!(order_id, "order destroyed");
    Ok(())
}
