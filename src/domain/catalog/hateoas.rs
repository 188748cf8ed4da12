//! HATEOAS response shaping: raw rows become `{name, href}` pairs with one
//! hypermedia link per item.

use serde::Serialize;

use crate::domain::joya::entity::Joya;

/// A single navigational entry in a listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub name: String,
    pub href: String,
}

/// The shaped current page: `total_joyas` counts the rows on this page only,
/// not the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogListing {
    #[serde(rename = "totalJoyas")]
    pub total_joyas: usize,
    pub results: Vec<ResourceLink>,
}

/// Map rows to links, preserving input order.
///
/// `href` is `{base_url}/{entity}/{id}`, or `{base_url}/{id}` when `entity` is empty.
pub fn shape(base_url: &str, entity: &str, rows: &[Joya]) -> CatalogListing {
    let results: Vec<ResourceLink> = rows
        .iter()
        .map(|joya| ResourceLink {
            name: joya.nombre.clone(),
            href: if entity.is_empty() {
                format!("{}/{}", base_url, joya.id)
            } else {
                format!("{}/{}/{}", base_url, entity, joya.id)
            },
        })
        .collect();

    CatalogListing {
        total_joyas: results.len(),
        results,
    }
}
