//! The declared pipeline for every route.
//!
//! Order matters: only the first failing stage is reported, so the sequence
//! below is part of the observable contract.

use galley_types::{Dish, DishPayload, Order, OrderPayload, OrderStatus};

use crate::pipeline::Pipeline;
use crate::stages::{
    DeclaredStatus, DeletionEligible, LineQuantities, Locate, NonEmptyList, PositiveInteger,
    RequireField, RouteIdMatches, StatusTransition,
};

/// `GET /dishes/{id}`.
pub fn dish_read() -> Pipeline<(), Dish> {
    Pipeline::new("dish read").stage(Locate)
}

/// `POST /dishes`.
pub fn dish_create() -> Pipeline<DishPayload, Dish> {
    dish_fields(Pipeline::new("dish create"))
}

/// `PUT /dishes/{id}`.
pub fn dish_update() -> Pipeline<DishPayload, Dish> {
    dish_fields(Pipeline::new("dish update").stage(Locate).stage(RouteIdMatches))
}

fn dish_fields(pipeline: Pipeline<DishPayload, Dish>) -> Pipeline<DishPayload, Dish> {
    pipeline
        .stage(RequireField::new("name"))
        .stage(RequireField::new("description"))
        .stage(RequireField::new("price"))
        .stage(PositiveInteger::new("price"))
        .stage(RequireField::new("image_url"))
}

/// `GET /orders/{id}`.
pub fn order_read() -> Pipeline<(), Order> {
    Pipeline::new("order read").stage(Locate)
}

/// `POST /orders`. The status is stored as supplied and not checked.
pub fn order_create() -> Pipeline<OrderPayload, Order> {
    order_fields(Pipeline::new("order create"))
}

/// `PUT /orders/{id}`.
pub fn order_update() -> Pipeline<OrderPayload, Order> {
    let status_message = format!(
        "Order must have a status of {}",
        OrderStatus::declared_list()
    );
    order_fields(Pipeline::new("order update").stage(Locate).stage(RouteIdMatches))
        .stage(RequireField::new("status").with_message(status_message))
        .stage(DeclaredStatus)
        .stage(StatusTransition)
}

/// `DELETE /orders/{id}`.
pub fn order_delete() -> Pipeline<(), Order> {
    Pipeline::new("order delete")
        .stage(Locate)
        .stage(DeletionEligible)
}

fn order_fields(pipeline: Pipeline<OrderPayload, Order>) -> Pipeline<OrderPayload, Order> {
    pipeline
        .stage(RequireField::new("deliverTo"))
        .stage(RequireField::new("mobileNumber"))
        .stage(RequireField::new("dishes"))
        .stage(NonEmptyList::new("dishes", "dish"))
        .stage(LineQuantities::new("dishes"))
}

/// Every route pipeline, built once and shared across requests.
#[derive(Debug)]
pub struct Pipelines {
    pub dish_read: Pipeline<(), Dish>,
    pub dish_create: Pipeline<DishPayload, Dish>,
    pub dish_update: Pipeline<DishPayload, Dish>,
    pub order_read: Pipeline<(), Order>,
    pub order_create: Pipeline<OrderPayload, Order>,
    pub order_update: Pipeline<OrderPayload, Order>,
    pub order_delete: Pipeline<(), Order>,
}

impl Pipelines {
    pub fn new() -> Self {
        Self {
            dish_read: dish_read(),
            dish_create: dish_create(),
            dish_update: dish_update(),
            order_read: order_read(),
            order_create: order_create(),
            order_update: order_update(),
            order_delete: order_delete(),
        }
    }
}

impl Default for Pipelines {
    fn default() -> Self {
        Self::new()
    }
}
