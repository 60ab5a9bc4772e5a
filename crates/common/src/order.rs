//! The order record and its mutable payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::OrderId;

/// The mutable fields of an order.
///
/// This is the body accepted by both create and update. Any `orderid` the
/// client sends is ignored; the store owns identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    #[serde(rename = "productname", alias = "productName", default)]
    pub product_name: Option<String>,

    /// A missing price reads as zero, which create-time validation rejects.
    #[serde(rename = "productprice", alias = "productPrice", default)]
    pub product_price: f64,

    #[serde(rename = "orderdate", alias = "orderDate", default)]
    pub order_date: Option<NaiveDate>,

    #[serde(rename = "shippingaddress", alias = "shippingAddress", default)]
    pub shipping_address: Option<String>,
}

impl OrderDetails {
    /// Creates details with a product name and price and no date or address.
    pub fn new(product_name: impl Into<String>, product_price: f64) -> Self {
        Self {
            product_name: Some(product_name.into()),
            product_price,
            order_date: None,
            shipping_address: None,
        }
    }

    pub fn with_order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = Some(order_date);
        self
    }

    pub fn with_shipping_address(mut self, address: impl Into<String>) -> Self {
        self.shipping_address = Some(address.into());
        self
    }

    /// Returns true when the details are acceptable for a new order:
    /// a non-empty product name and a price strictly greater than zero.
    pub fn is_valid_for_create(&self) -> bool {
        let has_name = self
            .product_name
            .as_deref()
            .is_some_and(|name| !name.is_empty());
        has_name && self.product_price > 0.0
    }
}

/// A persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderid", alias = "orderId", alias = "id")]
    pub id: OrderId,

    #[serde(rename = "productname", alias = "productName")]
    pub product_name: Option<String>,

    #[serde(rename = "productprice", alias = "productPrice")]
    pub product_price: f64,

    #[serde(rename = "orderdate", alias = "orderDate")]
    pub order_date: Option<NaiveDate>,

    #[serde(rename = "shippingaddress", alias = "shippingAddress")]
    pub shipping_address: Option<String>,
}

impl Order {
    /// Builds an order from its ID and details.
    pub fn from_details(id: OrderId, details: OrderDetails) -> Self {
        Self {
            id,
            product_name: details.product_name,
            product_price: details.product_price,
            order_date: details.order_date,
            shipping_address: details.shipping_address,
        }
    }

    /// Overwrites every mutable field with `details`. The ID is kept.
    pub fn overwrite(&mut self, details: OrderDetails) {
        self.product_name = details.product_name;
        self.product_price = details.product_price;
        self.order_date = details.order_date;
        self.shipping_address = details.shipping_address;
    }

    /// Returns the mutable fields of this order.
    pub fn details(&self) -> OrderDetails {
        OrderDetails {
            product_name: self.product_name.clone(),
            product_price: self.product_price,
            order_date: self.order_date,
            shipping_address: self.shipping_address.clone(),
        }
    }
}
