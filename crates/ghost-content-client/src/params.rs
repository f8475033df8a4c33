//! Query parameters for browse and read operations.
//!
//! List-valued parameters (`include`, `fields`, `formats`) are
//! comma-separated strings forwarded verbatim, matching the upstream
//! query syntax. Unset parameters never appear in the query string.

use serde::Deserialize;

/// Parameters accepted by browse (list) operations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseParams {
    /// Related records to expand, comma-separated (e.g. "authors,tags").
    pub include: Option<String>,
    /// Fields to return, comma-separated (e.g. "title,slug").
    pub fields: Option<String>,
    /// Upstream filter expression (e.g. "featured:true").
    pub filter: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page number, 1-based.
    pub page: Option<u32>,
    /// Sort order (e.g. "published_at desc").
    pub order: Option<String>,
    /// Content formats to return, comma-separated (posts/pages only).
    pub formats: Option<String>,
}

/// Parameters accepted by read (single-item) operations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadParams {
    /// Related records to expand, comma-separated.
    pub include: Option<String>,
    /// Fields to return, comma-separated.
    pub fields: Option<String>,
    /// Content formats to return, comma-separated (posts/pages only).
    pub formats: Option<String>,
}

impl BrowseParams {
    /// Collect the set parameters as query key/value pairs.
    ///
    /// When `with_formats` is false the `formats` parameter is dropped
    /// (the resource does not recognize it).
    pub fn query_pairs(&self, with_formats: bool) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_str(&mut pairs, "include", &self.include);
        push_str(&mut pairs, "fields", &self.fields);
        push_str(&mut pairs, "filter", &self.filter);
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        push_str(&mut pairs, "order", &self.order);
        if with_formats {
            push_str(&mut pairs, "formats", &self.formats);
        }
        pairs
    }
}

impl ReadParams {
    /// Collect the set parameters as query key/value pairs.
    pub fn query_pairs(&self, with_formats: bool) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_str(&mut pairs, "include", &self.include);
        push_str(&mut pairs, "fields", &self.fields);
        if with_formats {
            push_str(&mut pairs, "formats", &self.formats);
        }
        pairs
    }
}

fn push_str(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        pairs.push((key, v.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_unset_params_are_omitted() {
        let params = BrowseParams::default();
        assert!(params.query_pairs(true).is_empty());
    }

    #[test]
    fn test_browse_pairs_in_documented_order() {
        let params = BrowseParams {
            include: Some("authors".to_string()),
            fields: Some("title,slug".to_string()),
            filter: Some("featured:true".to_string()),
            limit: Some(5),
            page: Some(2),
            order: Some("published_at desc".to_string()),
            formats: Some("html".to_string()),
        };
        let pairs = params.query_pairs(true);
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["include", "fields", "filter", "limit", "page", "order", "formats"]
        );
        assert_eq!(pairs[3].1, "5");
        assert_eq!(pairs[4].1, "2");
    }

    #[test]
    fn test_browse_formats_dropped_when_unsupported() {
        let params = BrowseParams {
            formats: Some("html".to_string()),
            ..Default::default()
        };
        assert!(params.query_pairs(false).is_empty());
        assert_eq!(params.query_pairs(true).len(), 1);
    }

    #[test]
    fn test_read_formats_dropped_when_unsupported() {
        let params = ReadParams {
            include: Some("authors".to_string()),
            fields: None,
            formats: Some("html,plaintext".to_string()),
        };
        let pairs = params.query_pairs(false);
        assert_eq!(pairs, vec![("include", "authors".to_string())]);
    }

    #[test]
    fn test_deserialize_ignores_unknown_args() {
        // Unrecognized parameters drop silently so they are never
        // forwarded upstream.
        let params: BrowseParams = serde_json::from_value(serde_json::json!({
            "fields": "title",
            "bogus": "value",
            "another": 7
        }))
        .unwrap();
        assert_eq!(params.fields.as_deref(), Some("title"));
        let pairs = params.query_pairs(true);
        assert_eq!(pairs, vec![("fields", "title".to_string())]);
    }
}
