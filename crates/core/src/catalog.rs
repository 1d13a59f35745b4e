//! Content catalog: the fixed set of slugged records known to the site.
//!
//! Built once from the source list and read-only afterwards. Source order is
//! kept as given; it is the default display order on listing pages.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::ContentRecord;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ContentRecord>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting the source list if any slug repeats.
    pub fn new(records: Vec<ContentRecord>) -> Result<Self> {
        let mut by_slug = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if let Some(first) = by_slug.insert(record.slug.clone(), position) {
                return Err(Error::DuplicateSlug {
                    slug: record.slug.clone(),
                    first,
                    second: position,
                });
            }
        }

        tracing::debug!(records = records.len(), "content catalog loaded");

        Ok(Self { records, by_slug })
    }

    /// Every record, in source order
    pub fn all(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentRecord> {
        self.records.iter()
    }

    /// Exact, case-sensitive slug lookup
    pub fn find_by_slug(&self, slug: &str) -> Option<&ContentRecord> {
        self.by_slug.get(slug).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ContentRecord;
    type IntoIter = std::slice::Iter<'a, ContentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(slug: &str, title: &str) -> ContentRecord {
        ContentRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: format!("{} excerpt", title),
            body: format!("# {}", title),
            image_ref: "images/post.jpg".to_string(),
            published_at: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
            category: "Wellness".to_string(),
            author: "Pharmacy Team".to_string(),
        }
    }

    fn sample() -> Vec<ContentRecord> {
        vec![
            record("understanding-prescriptions", "Understanding Your Prescription"),
            record("boost-immune-system", "Boost Your Immune System Naturally"),
            record("managing-chronic-conditions", "Managing Chronic Conditions"),
        ]
    }

    #[test]
    fn test_all_preserves_source_order() {
        let catalog = Catalog::new(sample()).unwrap();
        let slugs: Vec<&str> = catalog.all().iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "understanding-prescriptions",
                "boost-immune-system",
                "managing-chronic-conditions"
            ]
        );
    }

    #[test]
    fn test_order_is_not_sorted() {
        let catalog = Catalog::new(vec![record("zeta", "Z"), record("alpha", "A")]).unwrap();
        assert_eq!(catalog.all()[0].slug, "zeta");
        assert_eq!(catalog.all()[1].slug, "alpha");
    }

    #[test]
    fn test_find_by_slug_round_trip() {
        let catalog = Catalog::new(sample()).unwrap();
        for source in sample() {
            let found = catalog.find_by_slug(&source.slug).unwrap();
            assert_eq!(found.slug, source.slug);
            assert_eq!(found, &source);
        }
    }

    #[test]
    fn test_distinct_slugs_find_distinct_records() {
        let catalog = Catalog::new(sample()).unwrap();
        let a = catalog.find_by_slug("understanding-prescriptions").unwrap();
        let b = catalog.find_by_slug("boost-immune-system").unwrap();
        assert_ne!(a, b);
        assert!(!std::ptr::eq(a, b));
    }

    #[test]
    fn test_find_by_slug_is_exact_and_case_sensitive() {
        let catalog = Catalog::new(sample()).unwrap();
        assert!(catalog.find_by_slug("Boost-Immune-System").is_none());
        assert!(catalog.find_by_slug("boost-immune").is_none());
        assert!(catalog.find_by_slug(" boost-immune-system").is_none());
        assert!(catalog.find_by_slug("").is_none());
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let result = Catalog::new(vec![record("a", "First"), record("b", "B"), record("a", "Second")]);
        match result {
            Err(Error::DuplicateSlug {
                slug,
                first,
                second,
            }) => {
                assert_eq!(slug, "a");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("expected duplicate slug error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_slug_message() {
        let err = Catalog::new(vec![record("a", "A"), record("a", "A")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Configuration error"));
        assert!(message.contains("'a'"));
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let catalog = Catalog::new(sample()).unwrap();
        let first: Vec<ContentRecord> = catalog.all().to_vec();
        let second: Vec<ContentRecord> = catalog.all().to_vec();
        assert_eq!(first, second);
        assert_eq!(
            catalog.find_by_slug("boost-immune-system"),
            catalog.find_by_slug("boost-immune-system")
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.find_by_slug("anything").is_none());
    }

    #[test]
    fn test_catalog_is_shareable_across_threads() {
        let catalog = std::sync::Arc::new(Catalog::new(sample()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let catalog = catalog.clone();
                std::thread::spawn(move || {
                    catalog
                        .find_by_slug("managing-chronic-conditions")
                        .map(|r| r.title.clone())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap().as_deref(),
                Some("Managing Chronic Conditions")
            );
        }
    }
}
