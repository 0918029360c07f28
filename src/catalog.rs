//! Catalog

use std::{borrow::Borrow, fmt};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Stock keeping unit, the identifier of a catalog item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Create a new SKU.
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    /// Returns the SKU as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sku {
    fn from(sku: &str) -> Self {
        Self::new(sku)
    }
}

impl From<String> for Sku {
    fn from(sku: String) -> Self {
        Self(sku)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Sku {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Sku {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchasable item in the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    sku: Sku,
    name: String,
    price: Money<'static, Currency>,
}

impl CatalogItem {
    /// Create a new catalog item.
    pub fn new(
        sku: impl Into<Sku>,
        name: impl Into<String>,
        price: Money<'static, Currency>,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }

    /// Returns the SKU of the item
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Returns the display name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }
}

/// Returns the first item in `items` with the given SKU.
pub fn find_item<'c>(items: &'c [CatalogItem], sku: &str) -> Option<&'c CatalogItem> {
    items.iter().find(|item| item.sku == *sku)
}
