//! Catalogue search and category filtering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::cart::ProductRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub unit_price: u64,
    pub image_ref: String,
}

impl Product {
    /// What the add-to-cart button hands to the store.
    pub fn to_product_ref(&self) -> ProductRef {
        ProductRef::new(self.name.clone(), self.unit_price, self.image_ref.clone())
    }
}

/// Category picked in the filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Protein,
    Creatine,
    Bcaa,
    /// A value the catalogue does not know; matches nothing.
    Unknown,
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" => Category::All,
            "protein" => Category::Protein,
            "creatine" => Category::Creatine,
            "bcaa" => Category::Bcaa,
            _ => Category::Unknown,
        })
    }
}

impl Category {
    const PROTEIN_KEYWORDS: [&'static str; 4] = ["protein", "whey", "plant", "mass"];

    /// `name` must already be lower-cased.
    fn matches_name(self, name: &str) -> bool {
        match self {
            Category::All => true,
            Category::Protein => Self::PROTEIN_KEYWORDS.iter().any(|k| name.contains(k)),
            Category::Creatine => name.contains("creatine"),
            Category::Bcaa => name.contains("bcaa"),
            Category::Unknown => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    term: String,
    category: Category,
}

impl ProductFilter {
    pub fn new(term: &str, category: Category) -> Self {
        Self {
            term: term.to_lowercase(),
            category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let name = product.name.to_lowercase();
        let matches_term = self.term.is_empty()
            || name.contains(&self.term)
            || product.description.to_lowercase().contains(&self.term);
        matches_term && self.category.matches_name(&name)
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub title: &'a str,
    pub visible: Vec<&'a Product>,
    /// Show the "No products found" placeholder.
    pub no_results: bool,
}

pub fn filter_sections<'a>(sections: &'a [Section], filter: &ProductFilter) -> Vec<SectionView<'a>> {
    sections
        .iter()
        .map(|section| {
            let visible = filter.apply(&section.products);
            SectionView {
                title: &section.title,
                no_results: visible.is_empty(),
                visible,
            }
        })
        .collect()
}
