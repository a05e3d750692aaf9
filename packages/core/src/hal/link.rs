//! HAL link objects

use once_cell::sync::Lazy;

use crate::encode::{Describe, Emitted, MemberTable};

/// A HAL link per draft-kelly-json-hal-08 §5.
///
/// `href` is required; every other field is optional and omitted from the
/// encoded output while unset, under the encoder's default null handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    href: String,
    templated: Option<bool>,
    media_type: Option<String>,
    deprecation: Option<String>,
    name: Option<String>,
    profile: Option<String>,
    title: Option<String>,
    hreflang: Option<String>,
}

impl Link {
    /// New link pointing at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    /// Target URI.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Mark the `href` as a URI template.
    #[must_use]
    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = Some(templated);
        self
    }

    /// Expected media type of the target resource (the `type` field).
    #[must_use]
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// URI with further information about the link's deprecation.
    #[must_use]
    pub fn deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.deprecation = Some(deprecation.into());
        self
    }

    /// Secondary key selecting between links sharing a relation.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// URI of the profile of the target resource.
    #[must_use]
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Human-readable label.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Language of the target resource.
    #[must_use]
    pub fn hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }
}

/// A bare string is shorthand for a link with that `href`.
impl From<&str> for Link {
    fn from(href: &str) -> Self {
        Link::new(href)
    }
}

impl From<String> for Link {
    fn from(href: String) -> Self {
        Link::new(href)
    }
}

fn emit_href(link: &Link) -> Emitted<'_> {
    Emitted::from(link.href.as_str())
}

fn emit_templated(link: &Link) -> Emitted<'_> {
    Emitted::from(link.templated)
}

fn emit_media_type(link: &Link) -> Emitted<'_> {
    Emitted::from(link.media_type.as_deref())
}

fn emit_deprecation(link: &Link) -> Emitted<'_> {
    Emitted::from(link.deprecation.as_deref())
}

fn emit_name(link: &Link) -> Emitted<'_> {
    Emitted::from(link.name.as_deref())
}

fn emit_profile(link: &Link) -> Emitted<'_> {
    Emitted::from(link.profile.as_deref())
}

fn emit_title(link: &Link) -> Emitted<'_> {
    Emitted::from(link.title.as_deref())
}

fn emit_hreflang(link: &Link) -> Emitted<'_> {
    Emitted::from(link.hreflang.as_deref())
}

impl Describe for Link {
    fn table() -> &'static MemberTable<Self> {
        static TABLE: Lazy<MemberTable<Link>> = Lazy::new(|| {
            MemberTable::builder()
                .scalar("href", emit_href)
                .scalar("templated", emit_templated)
                .scalar("type", emit_media_type)
                .scalar("deprecation", emit_deprecation)
                .scalar("name", emit_name)
                .scalar("profile", emit_profile)
                .scalar("title", emit_title)
                .scalar("hreflang", emit_hreflang)
                .build()
        });
        &TABLE
    }
}
