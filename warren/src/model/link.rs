use crate::model::Meta;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::convert::TryFrom;
use std::str::FromStr;

pub type Links = HashMap<String, Link>;

/// A link is kept as sent; [`Link::uri`] validates it on demand so an odd `href` never fails
/// the whole document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Link {
    Raw(String),
    Object {
        href: String,
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        meta: Meta,
    },
}

impl Link {
    pub fn href(&self) -> &str {
        match self {
            Link::Raw(raw) => raw,
            Link::Object { href, .. } => href,
        }
    }

    pub fn uri(&self) -> Result<http::Uri, http::uri::InvalidUri> { self.href().parse() }
}

impl FromStr for Link {
    type Err = http::uri::InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<http::Uri>()?;
        Ok(Link::Raw(s.into()))
    }
}

impl From<http::Uri> for Link {
    fn from(uri: http::Uri) -> Self { Link::Raw(uri.to_string()) }
}

impl TryFrom<&Link> for http::Uri {
    type Error = http::uri::InvalidUri;

    fn try_from(link: &Link) -> Result<Self, Self::Error> { link.uri() }
}

/// `null` link values and a `null` links object are both allowed by JSON:API and dropped here
pub(crate) fn deserialize_links<'de, D>(deserializer: D) -> Result<Links, D::Error>
where
    D: Deserializer<'de>,
{
    let links = Option::<HashMap<String, Option<Link>>>::deserialize(deserializer)?;
    Ok(links
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, link)| link.map(|link| (name, link)))
        .collect())
}
