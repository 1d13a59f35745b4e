//! Page resolver: turns a requested slug into something to render.

use crate::catalog::Catalog;
use crate::types::ContentRecord;

/// Outcome of resolving a slug. `NotFound` is an ordinary result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderResult<'a> {
    Found(&'a ContentRecord),
    NotFound,
}

impl<'a> RenderResult<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, RenderResult::Found(_))
    }

    pub fn record(&self) -> Option<&'a ContentRecord> {
        match self {
            RenderResult::Found(record) => Some(record),
            RenderResult::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PageResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> PageResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Slugs to generate pages for, in catalog order
    pub fn list_routes(&self) -> Vec<&'a str> {
        self.catalog.all().iter().map(|r| r.slug.as_str()).collect()
    }

    pub fn resolve(&self, slug: &str) -> RenderResult<'a> {
        match self.catalog.find_by_slug(slug) {
            Some(record) => RenderResult::Found(record),
            None => RenderResult::NotFound,
        }
    }
}
