//! Raw thread payload shapes as returned by the upstream API.
//!
//! These types are deserialisation targets only. Every field is optional so a
//! payload mixing comments with `more` stubs and post entries decodes without
//! error; the normaliser decides which entries become canonical comments.
//!
//! Reply listings nest several JSON levels per comment, so payloads are
//! decoded with [`decode_listings`], which lifts the parser's nesting limit
//! and grows the stack on demand. The depth ceiling is applied later by the
//! normaliser.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::de::value::MapAccessDeserializer;
use serde::{Deserialize, Deserializer};

/// Discriminator marking a genuine comment entry.
pub const COMMENT_KIND: &str = "t1";

/// Discriminator marking the submission entry in the post listing.
pub const POST_KIND: &str = "t3";

/// Body placeholder left behind when a comment's content was removed.
pub const DELETED_BODY: &str = "[deleted]";

/// One entry of a listing: a comment, a `more` stub, or a post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawNode {
    /// Entry discriminator (`t1` for comments).
    #[serde(default)]
    pub kind: String,
    /// Entry payload.
    #[serde(default)]
    pub data: RawCommentData,
}

/// Payload of a raw entry. Comment fields are absent on other kinds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCommentData {
    /// Comment identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Author name.
    #[serde(default)]
    pub author: Option<String>,
    /// Comment body, possibly the deleted placeholder.
    #[serde(default)]
    pub body: Option<String>,
    /// Net score; may be negative.
    #[serde(default)]
    pub score: Option<i64>,
    /// Creation time in Unix seconds.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub created_utc: Option<i64>,
    /// Nested reply listing. The API sends `""` when there are no replies.
    #[serde(default, deserialize_with = "lenient_listing")]
    pub replies: Option<RawListing>,
    /// Submission title, present on post entries.
    #[serde(default)]
    pub title: Option<String>,
    /// Community name, present on post entries.
    #[serde(default)]
    pub subreddit: Option<String>,
}

/// A listing wrapper holding sibling entries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawListing {
    /// Listing discriminator (usually `Listing`); not required.
    #[serde(default)]
    pub kind: Option<String>,
    /// Listing payload.
    #[serde(default)]
    pub data: RawListingData,
}

/// Children of a listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawListingData {
    /// Sibling entries in source order.
    #[serde(default)]
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Returns `true` when the entry is a comment whose body survived.
    #[must_use]
    pub fn is_live_comment(&self) -> bool {
        self.kind == COMMENT_KIND && self.data.body.as_deref() != Some(DELETED_BODY)
    }

    /// Returns the raw reply entries, or an empty slice without a container.
    #[must_use]
    pub fn reply_nodes(&self) -> &[RawNode] {
        self.data
            .replies
            .as_ref()
            .map_or(&[], |listing| listing.data.children.as_slice())
    }
}

impl Drop for RawListingData {
    // Deep reply chains would otherwise be dropped recursively.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Some(listing) = node.data.replies.as_mut() {
                pending.append(&mut listing.data.children);
            }
        }
    }
}

/// Decodes the `[post listing, comment listing]` response body.
///
/// # Errors
///
/// Returns the parser error when the body is not valid JSON, an entry has a
/// wrongly typed field, or trailing data follows the array.
pub fn decode_listings(body: &[u8]) -> Result<Vec<RawListing>, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();
    let listings =
        Vec::<RawListing>::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(listings)
}

/// Decodes a reply container.
///
/// Objects must be valid listings; scalars and arrays (the API sends `""`)
/// mean there are no replies.
fn lenient_listing<'de, D>(deserializer: D) -> Result<Option<RawListing>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ReplyContainerVisitor)
}

struct ReplyContainerVisitor;

impl<'de> Visitor<'de> for ReplyContainerVisitor {
    type Value = Option<RawListing>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a reply listing or an empty placeholder")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        RawListing::deserialize(MapAccessDeserializer::new(map)).map(Some)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_str<E: de::Error>(self, _value: &str) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, _value: i64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_u64<E: de::Error>(self, _value: u64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

/// Decodes Unix seconds sent either as an integer or as a float.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(value.and_then(|number| number.as_i64().or_else(|| number.as_f64().map(truncate_seconds))))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "fractional seconds are discarded and the float-to-int cast saturates"
)]
fn truncate_seconds(seconds: f64) -> i64 {
    seconds.trunc() as i64
}
