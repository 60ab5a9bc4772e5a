//! Order CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use domain::{Order, OrderDetails, OrderId, OrderService};
use order_store::OrderStore;
use serde::Deserialize;

use crate::error::ApiError;

/// Returned when a create payload lacks a product name or a positive price.
pub const INVALID_ORDER_MESSAGE: &str =
    "Invalid order data: Product name cannot be null and product price must be greater than zero.";

/// Returned by the list endpoint when the store is empty.
pub const NO_ORDERS_MESSAGE: &str = "No orders data found.";

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub order_service: OrderService<S>,
}

// -- Request types --

/// Query string of `GET /orders/findByIdAndName`.
#[derive(Debug, Deserialize)]
pub struct FindByIdAndNameParams {
    pub orderid: i64,
    pub productname: Option<String>,
}

// -- Handlers --

/// POST /orders/addOrder: place a new order.
#[tracing::instrument(skip(state, payload))]
pub async fn add_order<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<Option<OrderDetails>>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(details) = payload?;

    if let Some(ref details) = details
        && !details.is_valid_for_create()
    {
        return Err(ApiError::BadRequest(INVALID_ORDER_MESSAGE.to_string()));
    }

    let order = state.order_service.place_order(details).await?;
    Ok(Json(order))
}

/// GET /orders/allOrders: list every order; an empty store is a 404.
#[tracing::instrument(skip(state))]
pub async fn all_orders<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.order_service.get_all_orders().await?;

    if orders.is_empty() {
        tracing::info!("no orders found");
        return Err(ApiError::NotFound(NO_ORDERS_MESSAGE.to_string()));
    }

    tracing::info!(count = orders.len(), "retrieved orders");
    Ok(Json(orders))
}

/// GET /orders/{orderid}: load one order.
#[tracing::instrument(skip(state))]
pub async fn get_order<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    orderid: Result<Path<i64>, PathRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(orderid) = orderid?;
    let order = state
        .order_service
        .get_order_by_id(OrderId::new(orderid))
        .await?;
    Ok(Json(order))
}

/// GET /orders/findByIdAndName?orderid=&productname=: exact match on both.
#[tracing::instrument(skip(state))]
pub async fn find_by_id_and_name<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    params: Result<Query<FindByIdAndNameParams>, QueryRejection>,
) -> Result<Json<Order>, ApiError> {
    let Query(params) = params?;
    let order = state
        .order_service
        .find_by_id_and_product_name(OrderId::new(params.orderid), params.productname.as_deref())
        .await?;
    Ok(Json(order))
}

/// PUT /orders/updateOrder/{orderid}: overwrite all mutable fields.
#[tracing::instrument(skip(state, payload))]
pub async fn update_order<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    orderid: Result<Path<i64>, PathRejection>,
    payload: Result<Json<OrderDetails>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(orderid) = orderid?;
    let Json(update) = payload?;

    let order = state
        .order_service
        .update_order_by_id(update, OrderId::new(orderid))
        .await?;
    Ok(Json(order))
}

/// DELETE /orders/deleteOrder/{orderid}: delete one order.
#[tracing::instrument(skip(state))]
pub async fn delete_order<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    orderid: Result<Path<i64>, PathRejection>,
) -> Result<String, ApiError> {
    let Path(orderid) = orderid?;
    let id = OrderId::new(orderid);
    state.order_service.delete_order_by_id(id).await?;

    let message = format!("Order with ID {id} deleted successfully.");
    tracing::info!("{message}");
    Ok(message)
}
