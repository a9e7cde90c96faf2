//! Grocery ordering for the QuickBasket agent.
//!
//! Holds the product catalog and recipe lists, the per-session cart the
//! agent edits through its tools, and the [`Order`] record produced when the
//! cart is checked out. Orders implement [`voxdesk_progress::Tracked`] so
//! their status can be advanced along [`StatusFlow::order_delivery`].
//!
//! The coffee counter's [`DrinkOrder`] lives here too: a single drink, saved
//! once every detail is known.
//!
//! [`StatusFlow::order_delivery`]: voxdesk_progress::StatusFlow::order_delivery

mod cart;
mod catalog;
mod drink;
mod error;
mod order;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogItem, Recipes};
pub use drink::DrinkOrder;
pub use error::GroceryError;
pub use order::{status_message, Order, OrderItem};
