//! Static table of Content API resources.
//!
//! Each resource maps to exactly one upstream collection endpoint.
//! The table is fixed at compile time; nothing here mutates at runtime.

use std::fmt;

/// A Content API resource collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Published posts (`posts/`).
    Posts,
    /// Authors with published posts (`authors/`).
    Authors,
    /// Public tags (`tags/`).
    Tags,
    /// Static pages (`pages/`).
    Pages,
    /// Membership tiers (`tiers/`, browse only).
    Tiers,
    /// Site settings (`settings/`, browse only, no parameters).
    Settings,
}

impl Resource {
    /// All resources, in the order the upstream API documents them.
    pub const ALL: [Resource; 6] = [
        Resource::Posts,
        Resource::Authors,
        Resource::Tags,
        Resource::Pages,
        Resource::Tiers,
        Resource::Settings,
    ];

    /// Collection path relative to the Content API base URL.
    ///
    /// The upstream API requires the trailing slash.
    pub fn collection_path(&self) -> &'static str {
        match self {
            Resource::Posts => "posts/",
            Resource::Authors => "authors/",
            Resource::Tags => "tags/",
            Resource::Pages => "pages/",
            Resource::Tiers => "tiers/",
            Resource::Settings => "settings/",
        }
    }

    /// Singular name, used in tool descriptions and error messages.
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Posts => "post",
            Resource::Authors => "author",
            Resource::Tags => "tag",
            Resource::Pages => "page",
            Resource::Tiers => "tier",
            Resource::Settings => "settings",
        }
    }

    /// Plural name, used in tool names and descriptions.
    pub fn plural(&self) -> &'static str {
        match self {
            Resource::Posts => "posts",
            Resource::Authors => "authors",
            Resource::Tags => "tags",
            Resource::Pages => "pages",
            Resource::Tiers => "tiers",
            Resource::Settings => "settings",
        }
    }

    /// Whether the resource accepts the `formats` parameter.
    ///
    /// Only posts and pages carry renderable content bodies.
    pub fn supports_formats(&self) -> bool {
        matches!(self, Resource::Posts | Resource::Pages)
    }

    /// Whether the resource supports only the browse (list) operation.
    pub fn browse_only(&self) -> bool {
        matches!(self, Resource::Tiers | Resource::Settings)
    }

    /// Whether browse accepts shaping parameters at all.
    ///
    /// The settings endpoint accepts no query parameters beyond the
    /// API key.
    pub fn supports_browse_params(&self) -> bool {
        !matches!(self, Resource::Settings)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths_keep_trailing_slash() {
        for resource in Resource::ALL {
            assert!(resource.collection_path().ends_with('/'));
        }
    }

    #[test]
    fn test_formats_support() {
        assert!(Resource::Posts.supports_formats());
        assert!(Resource::Pages.supports_formats());
        assert!(!Resource::Authors.supports_formats());
        assert!(!Resource::Tags.supports_formats());
        assert!(!Resource::Tiers.supports_formats());
        assert!(!Resource::Settings.supports_formats());
    }

    #[test]
    fn test_browse_only_resources() {
        assert!(Resource::Tiers.browse_only());
        assert!(Resource::Settings.browse_only());
        assert!(!Resource::Posts.browse_only());
        assert!(!Resource::Authors.browse_only());
    }

    #[test]
    fn test_settings_accepts_no_browse_params() {
        assert!(!Resource::Settings.supports_browse_params());
        assert!(Resource::Tiers.supports_browse_params());
    }

    #[test]
    fn test_display_uses_plural() {
        assert_eq!(Resource::Posts.to_string(), "posts");
        assert_eq!(Resource::Settings.to_string(), "settings");
    }
}
