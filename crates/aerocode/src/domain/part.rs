use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{Categorized, Category, Domain, Record};
use crate::classify::{StockLevel, Tone};

/// Stock status of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartStatus {
    /// Enough units on hand.
    #[serde(rename = "Em Estoque")]
    InStock,
    /// Running low.
    #[serde(rename = "Estoque Baixo")]
    LowStock,
    /// Critically low.
    #[serde(rename = "Estoque Crítico")]
    CriticalStock,
}

impl Category for PartStatus {
    const ALL: &'static [Self] = &[Self::InStock, Self::LowStock, Self::CriticalStock];

    fn label(self) -> &'static str {
        match self {
            Self::InStock => "Em Estoque",
            Self::LowStock => "Estoque Baixo",
            Self::CriticalStock => "Estoque Crítico",
        }
    }

    fn tone(self) -> Tone {
        StockLevel::from(self).tone()
    }
}

/// A stocked aircraft component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Part id, e.g. `P001`.
    pub id: String,
    /// Part name.
    pub name: String,
    /// Category (Motor, Estrutura, Sistemas, Eletrônica).
    pub category: String,
    /// Units on hand.
    pub quantity: u32,
    /// Reorder threshold.
    pub min_quantity: u32,
    /// Warehouse location.
    pub location: String,
    /// Supplier name.
    pub supplier: String,
    /// Stock status as recorded.
    pub status: PartStatus,
}

impl Record for Part {
    const DOMAIN: Domain = Domain::Part;
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "id", "category"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "category" => Some(Cow::Borrowed(&self.category)),
            "quantity" => Some(Cow::Owned(self.quantity.to_string())),
            "minQuantity" => Some(Cow::Owned(self.min_quantity.to_string())),
            "location" => Some(Cow::Borrowed(&self.location)),
            "supplier" => Some(Cow::Borrowed(&self.supplier)),
            "status" => Some(Cow::Borrowed(self.status.label())),
            _ => None,
        }
    }
}

impl Categorized for Part {
    type Category = PartStatus;
    const CATEGORY_FIELD: &'static str = "status";

    fn category(&self) -> PartStatus {
        self.status
    }
}
