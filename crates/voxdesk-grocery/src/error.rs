use thiserror::Error;

/// Errors returned by cart, catalog and drink order operations.
///
/// The messages of the first four variants are phrased for the customer;
/// agents may read them back verbatim.
#[derive(Error, Debug)]
pub enum GroceryError {
    /// No catalog product carries this name or id.
    #[error("'{0}' is not in the catalog")]
    NotInCatalog(String),

    /// The product exists but is not in the cart.
    #[error("'{0}' is not in your cart")]
    NotInCart(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("your cart is empty")]
    EmptyCart,

    /// No recipe matches the requested dish.
    #[error("no recipe found for '{0}'")]
    UnknownRecipe(String),

    /// A data file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file holds invalid JSON.
    #[error("invalid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
