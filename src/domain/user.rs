//! User domain model and mutation payloads.
//!
//! This module defines the core [`User`] record as reported by the remote
//! directory service, plus the two payload types that travel with mutations:
//! [`UserDraft`] for creates (everything but the service-assigned id) and
//! [`UserFields`] for updates (a full replacement of the editable fields).

use serde::{Deserialize, Serialize};

/// A single user record in the directory.
///
/// The `id` is the sole identity key: no two records in the derived working
/// list ever share one. Ids are assigned by the remote service; a locally
/// synthesized provisional id (used when the service returns none on create)
/// is always negative so it cannot collide with a service-assigned id.
///
/// # Examples
///
/// ```
/// use rosterdeck::domain::User;
///
/// let user = User {
///     id: 1,
///     email: "ada@example.com".to_string(),
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     avatar: "https://example.com/ada.png".to_string(),
/// };
/// assert_eq!(user.full_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identity key, service-assigned (negative when provisional).
    pub id: i64,
    /// Contact address, used as a display string only.
    pub email: String,
    /// Given name, non-empty.
    pub first_name: String,
    /// Family name, non-empty.
    pub last_name: String,
    /// Avatar image URL.
    pub avatar: String,
}

impl User {
    /// Returns `"first_name last_name"`, the string the search filter runs over.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Reports whether this record matches a search query.
    ///
    /// Matching is a case-insensitive substring test over the full name.
    /// An empty query matches everything.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rosterdeck::domain::User;
    /// # let user = User {
    /// #     id: 1,
    /// #     email: "ada@example.com".to_string(),
    /// #     first_name: "Ada".to_string(),
    /// #     last_name: "Lovelace".to_string(),
    /// #     avatar: String::new(),
    /// # };
    /// assert!(user.matches_search("ADA"));
    /// assert!(user.matches_search("lace"));
    /// assert!(!user.matches_search("bob"));
    /// ```
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.full_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    /// Combines a draft with an assigned id into a full record.
    #[must_use]
    pub fn from_draft(id: i64, draft: UserDraft) -> Self {
        Self {
            id,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            avatar: draft.avatar,
        }
    }
}

/// Payload for creating a user: every [`User`] field except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// Payload for updating a user: the editable fields, applied as a shallow merge.
///
/// The update form always submits a full field set, so every field is present;
/// "shallow merge" means the fields replace their counterparts on the existing
/// record while the record keeps its id and its position in the working list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl UserFields {
    /// Merges these fields into an existing record, preserving its id.
    pub fn apply_to(&self, user: &mut User) {
        user.email.clone_from(&self.email);
        user.first_name.clone_from(&self.first_name);
        user.last_name.clone_from(&self.last_name);
        user.avatar.clone_from(&self.avatar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            id: 1,
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            avatar: "https://example.com/ada.png".to_string(),
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let user = ada();
        assert!(user.matches_search("ADA"));
        assert!(user.matches_search("a lov"));
        assert!(user.matches_search(""));
        assert!(!user.matches_search("grace"));
    }

    #[test]
    fn apply_to_replaces_fields_but_keeps_id() {
        let mut user = ada();
        let fields = UserFields {
            email: user.email.clone(),
            first_name: "Augusta".to_string(),
            last_name: user.last_name.clone(),
            avatar: user.avatar.clone(),
        };
        fields.apply_to(&mut user);
        assert_eq!(user.id, 1);
        assert_eq!(user.first_name, "Augusta");
        assert_eq!(user.last_name, "Lovelace");
    }
}
