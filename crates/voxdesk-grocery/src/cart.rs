//! The shopping cart edited by the grocery agent's tools.

use crate::catalog::{Catalog, CatalogItem, Recipes};
use crate::error::GroceryError;
use crate::order::{Order, OrderItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog id of the product.
    pub id: String,
    /// Units in the cart.
    pub quantity: u32,
}

/// One session's cart. Lines reference catalog products by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of the named product, on top of any already in the cart.
    ///
    /// The line quantity saturates at `u32::MAX`.
    pub fn add<'c>(
        &mut self,
        catalog: &'c Catalog,
        name: &str,
        quantity: u32,
    ) -> Result<&'c CatalogItem, GroceryError> {
        let product = catalog
            .find_by_name(name)
            .ok_or_else(|| GroceryError::NotInCatalog(name.to_string()))?;
        self.add_id(&product.id, quantity);
        Ok(product)
    }

    /// Removes `quantity` of the named product, or all of it when `quantity`
    /// is `None` or at least what is in the cart. Returns how many were
    /// removed.
    pub fn remove(
        &mut self,
        catalog: &Catalog,
        name: &str,
        quantity: Option<u32>,
    ) -> Result<u32, GroceryError> {
        let product = catalog
            .find_by_name(name)
            .ok_or_else(|| GroceryError::NotInCart(name.to_string()))?;
        let pos = self
            .position(&product.id)
            .ok_or_else(|| GroceryError::NotInCart(product.name.clone()))?;

        let held = self.lines[pos].quantity;
        match quantity {
            Some(q) if q < held => {
                self.lines[pos].quantity -= q;
                Ok(q)
            }
            _ => {
                self.lines.remove(pos);
                Ok(held)
            }
        }
    }

    /// Sets the quantity of a product already in the cart; zero removes it.
    pub fn update_quantity(
        &mut self,
        catalog: &Catalog,
        name: &str,
        quantity: u32,
    ) -> Result<(), GroceryError> {
        let product = catalog
            .find_by_name(name)
            .ok_or_else(|| GroceryError::NotInCatalog(name.to_string()))?;
        let pos = self
            .position(&product.id)
            .ok_or_else(|| GroceryError::NotInCart(product.name.clone()))?;

        if quantity == 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity = quantity;
        }
        Ok(())
    }

    /// Adds one of each ingredient of a recipe. Ingredients missing from the
    /// catalog are skipped. Returns the names of the products added.
    pub fn add_recipe(
        &mut self,
        catalog: &Catalog,
        recipes: &Recipes,
        recipe: &str,
    ) -> Result<Vec<String>, GroceryError> {
        let ids = recipes
            .ingredients(recipe)
            .ok_or_else(|| GroceryError::UnknownRecipe(recipe.to_string()))?;

        let mut added = Vec::new();
        for id in ids {
            let Some(product) = catalog.find_by_id(id) else {
                tracing::warn!(recipe, id = %id, "recipe ingredient not in catalog");
                continue;
            };
            self.add_id(id, 1);
            added.push(product.name.clone());
        }
        Ok(added)
    }

    /// Sum of price times quantity over lines whose product is in the catalog.
    pub fn total(&self, catalog: &Catalog) -> f64 {
        self.priced(catalog).map(|(line, p)| line_total(line, p)).sum()
    }

    /// Spoken summary of the cart contents.
    pub fn summary(&self, catalog: &Catalog) -> String {
        if self.lines.is_empty() {
            return "Your cart is empty.".to_string();
        }

        let mut out = String::from("Your cart contains:");
        for (line, product) in self.priced(catalog) {
            let _ = write!(
                out,
                "\n- {} (x{}) — ₹{}",
                product.name,
                line.quantity,
                line_total(line, product)
            );
        }
        let _ = write!(out, "\n\nTotal: ₹{}", self.total(catalog));
        out
    }

    /// Checks out the cart, emptying it.
    ///
    /// # Errors
    ///
    /// Returns [`GroceryError::EmptyCart`] for an empty cart and
    /// [`GroceryError::NotInCatalog`] if a line's product has left the
    /// catalog; the cart is kept in both cases.
    pub fn place_order(
        &mut self,
        catalog: &Catalog,
        now: DateTime<Utc>,
    ) -> Result<Order, GroceryError> {
        if self.lines.is_empty() {
            return Err(GroceryError::EmptyCart);
        }

        let mut items = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let product = catalog
                .find_by_id(&line.id)
                .ok_or_else(|| GroceryError::NotInCatalog(line.id.clone()))?;
            items.push(OrderItem {
                id: line.id.clone(),
                qty: line.quantity,
                price: product.price,
            });
        }

        let order = Order::new(items, now);
        self.lines.clear();
        tracing::info!(order_id = %order.order_id, total = order.total, "order placed");
        Ok(order)
    }

    /// Cart lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity of a product id in the cart, zero if absent.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.position(id).map_or(0, |pos| self.lines[pos].quantity)
    }

    /// Whether the cart holds nothing.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn add_id(&mut self, id: &str, quantity: u32) {
        match self.position(id) {
            Some(pos) => {
                let line = &mut self.lines[pos];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => self.lines.push(CartLine {
                id: id.to_string(),
                quantity,
            }),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.id == id)
    }

    fn priced<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a CartLine, &'a CatalogItem)> {
        self.lines
            .iter()
            .filter_map(move |line| catalog.find_by_id(&line.id).map(|p| (line, p)))
    }
}

fn line_total(line: &CartLine, product: &CatalogItem) -> f64 {
    product.price * f64::from(line.quantity)
}
