//! Test helpers for constructing Bitbucket wire payloads.
//!
//! This module provides builder functions returning `serde_json::Value`
//! payloads shaped like the Bitbucket Cloud API records, for use as mock
//! response bodies in tests.
//!
//! # Examples
//!
//! ```
//! use bitbucket_cloud::api::models::test_support::{repository_json, values_page};
//!
//! let page = values_page(vec![repository_json("acme/widgets")]);
//! assert_eq!(page["values"][0]["full_name"], "acme/widgets");
//! ```

use serde_json::{Value, json};

/// Wraps items in the collection envelope Bitbucket uses for listings.
///
/// The envelope carries page metadata alongside `values`, as the live API
/// does.
///
/// # Examples
///
/// ```
/// use bitbucket_cloud::api::models::test_support::values_page;
///
/// let page = values_page(vec![]);
/// assert_eq!(page["size"], 0);
/// assert!(page["values"].as_array().is_some_and(Vec::is_empty));
/// ```
#[must_use]
pub fn values_page(items: Vec<Value>) -> Value {
    json!({
        "pagelen": 10,
        "page": 1,
        "size": items.len(),
        "values": items
    })
}

/// Constructs a minimal repository record.
///
/// # Examples
///
/// ```
/// use bitbucket_cloud::api::models::test_support::repository_json;
///
/// let record = repository_json("acme/widgets");
/// assert_eq!(record["full_name"], "acme/widgets");
/// ```
#[must_use]
pub fn repository_json(full_name: &str) -> Value {
    json!({
        "type": "repository",
        "full_name": full_name,
        "is_private": false,
        "created_on": "2025-01-01T00:00:00.000000+00:00"
    })
}

/// Constructs a minimal open pull request record.
#[must_use]
pub fn pull_request_json(id: u64, title: &str) -> Value {
    json!({
        "type": "pullrequest",
        "id": id,
        "title": title,
        "state": "OPEN",
        "close_source_branch": false,
        "author": { "nickname": "alice" }
    })
}

/// Constructs a minimal new issue record.
///
/// # Examples
///
/// ```
/// use bitbucket_cloud::api::models::test_support::issue_json;
///
/// let record = issue_json(42, "Widget leaks");
/// assert_eq!(record["id"], 42);
/// assert_eq!(record["priority"], "major");
/// ```
#[must_use]
pub fn issue_json(id: u64, title: &str) -> Value {
    json!({
        "type": "issue",
        "id": id,
        "title": title,
        "state": "new",
        "kind": "bug",
        "priority": "major",
        "content": { "raw": title, "markup": "markdown" }
    })
}

/// Constructs a user profile record as returned by `/user`.
#[must_use]
pub fn user_profile_json(username: &str) -> Value {
    json!({
        "type": "user",
        "username": username,
        "display_name": username,
        "account_id": "557058:aaaa-bbbb",
        "uuid": "{0000-1111}"
    })
}

/// Constructs an email record as returned by `/user/emails`.
#[must_use]
pub fn user_email_json(email: &str, is_primary: bool) -> Value {
    json!({
        "type": "email",
        "email": email,
        "is_primary": is_primary,
        "is_confirmed": true
    })
}

/// Constructs a minimal workspace record.
#[must_use]
pub fn workspace_json(slug: &str) -> Value {
    json!({
        "type": "workspace",
        "slug": slug,
        "name": slug,
        "uuid": "{2222-3333}"
    })
}

/// Constructs a workspace membership record pairing a user with a workspace.
#[must_use]
pub fn workspace_membership_json(nickname: &str, slug: &str) -> Value {
    json!({
        "type": "workspace_membership",
        "user": { "nickname": nickname, "display_name": nickname },
        "workspace": workspace_json(slug)
    })
}
