//! Project metadata and field resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Business data collected by the surrounding form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectMetadata {
    pub client_name: String,
    pub product_name: String,
    pub order_number: String,
    pub batch_code: String,
    pub production_date: String,
    pub prepared_by: String,
    pub observations: String,
}

/// Metadata slot a field element can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldBinding {
    Client,
    Product,
    Order,
    Batch,
}

impl FieldBinding {
    /// Maps a symbolic field name, in Spanish or English, to its slot.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Cliente" | "Client" => Some(Self::Client),
            "Producto" | "Product" => Some(Self::Product),
            "Pedido" | "Order" => Some(Self::Order),
            "Lote" | "Batch" => Some(Self::Batch),
            _ => None,
        }
    }

    pub fn value<'a>(&self, metadata: &'a ProjectMetadata) -> &'a str {
        match self {
            Self::Client => &metadata.client_name,
            Self::Product => &metadata.product_name,
            Self::Order => &metadata.order_number,
            Self::Batch => &metadata.batch_code,
        }
    }
}

/// Source of values for field elements.
pub trait MetadataResolver {
    /// Value bound to `name`, or `None` when the name is not a known field.
    fn lookup(&self, name: &str) -> Option<String>;
}

impl MetadataResolver for ProjectMetadata {
    fn lookup(&self, name: &str) -> Option<String> {
        FieldBinding::from_name(name).map(|binding| binding.value(self).to_string())
    }
}

impl MetadataResolver for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Text displayed for a field named `name`.
///
/// Unknown names display themselves; a blank value displays the bracketed
/// name so an incomplete document still shows what belongs there.
pub fn resolve_field(resolver: &dyn MetadataResolver, name: &str) -> String {
    let value = resolver.lookup(name).unwrap_or_else(|| name.to_string());
    if value.trim().is_empty() {
        format!("[{name}]")
    } else {
        value
    }
}
