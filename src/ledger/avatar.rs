//! Avatar URL helpers.

use super::FriendId;

/// Placeholder avatar service used when nothing else is configured.
pub const DEFAULT_AVATAR_BASE: &str = "https://i.pravatar.cc/48";

/// Append the friend id to `url` as the `u` query parameter.
///
/// Two friends sharing the same base image still get distinct URLs, which
/// also defeats caching of the placeholder service.
pub fn with_id_param(url: &str, id: FriendId) -> String {
    let url = url.trim();
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}u={id}")
}
