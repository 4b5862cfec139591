//! Pending-mutation overlay for the derived working list.
//!
//! Local creates, updates, and deletes are not written back into the page
//! cache: the cache only ever holds what the service returned. Instead every
//! locally successful mutation is appended to an ordered log of
//! [`PendingMutation`] entries, and the working list is derived on every
//! access by flattening the cache and then replaying the log over the result
//! (fetch → flatten → replay). Re-fetching a page therefore overwrites its
//! cached data but never loses a local mutation: the log simply replays again
//! on the fresh base.
//!
//! The log is append-only and survives both re-fetches and logout, which
//! touches the session only. Replay is a pure function, so two callers
//! deriving from identical cache and log contents always observe identical
//! output.

use crate::domain::{User, UserFields};
use serde::{Deserialize, Serialize};

/// One locally applied mutation, not yet reflected by a fresh fetch.
///
/// Entries are replayed in issue order. Each entry is keyed by record id,
/// which is the sole identity key of the working list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingMutation {
    /// A record created locally, placed at the front of the working list.
    Create {
        /// The full record, with its service-assigned or provisional id.
        user: User,
        /// Whether the id came from the service (`true`) or was synthesized
        /// locally (`false`). Provisional ids are negative.
        confirmed: bool,
    },

    /// A field merge applied to the record with the matching id.
    ///
    /// Invisible while the id is absent from the base list; the entry stays
    /// in the log and takes effect again whenever the record reappears.
    Update { id: i64, fields: UserFields },

    /// Removal of the record with the matching id; a no-op while absent.
    Delete { id: i64 },
}

impl PendingMutation {
    /// The record id this mutation is keyed by.
    #[must_use]
    pub const fn key(&self) -> i64 {
        match self {
            Self::Create { user, .. } => user.id,
            Self::Update { id, .. } | Self::Delete { id } => *id,
        }
    }
}

/// Replays a mutation log over a flattened base list.
///
/// Entries apply in issue order:
///
/// - `Create` prepends the record at index 0, unless a record with the same
///   id is already present (a later fetch caught up with the create), in
///   which case the entry is skipped to preserve the unique-id invariant.
/// - `Update` shallow-merges fields into the matching record in place; the
///   record's position is unchanged. Absent id: no visible effect.
/// - `Delete` removes the first (only) record with the matching id. Absent
///   id: no-op.
///
/// The base list is consumed and returned mutated; the log is untouched.
#[must_use]
pub fn replay(mut base: Vec<User>, log: &[PendingMutation]) -> Vec<User> {
    for mutation in log {
        match mutation {
            PendingMutation::Create { user, .. } => {
                if !base.iter().any(|existing| existing.id == user.id) {
                    base.insert(0, user.clone());
                }
            }
            PendingMutation::Update { id, fields } => {
                if let Some(existing) = base.iter_mut().find(|u| u.id == *id) {
                    fields.apply_to(existing);
                }
            }
            PendingMutation::Delete { id } => {
                if let Some(position) = base.iter().position(|u| u.id == *id) {
                    base.remove(position);
                }
            }
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, first: &str, last: &str) -> User {
        User {
            id,
            email: format!("{}@example.com", first.to_lowercase()),
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar: format!("https://example.com/{id}.png"),
        }
    }

    fn fields_of(user: &User) -> UserFields {
        UserFields {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            avatar: user.avatar.clone(),
        }
    }

    #[test]
    fn create_prepends_at_front() {
        let base = vec![user(1, "Jon", "Snow"), user(2, "Arya", "Stark")];
        let log = vec![PendingMutation::Create {
            user: user(3, "Ada", "Lovelace"),
            confirmed: true,
        }];
        let list = replay(base, &log);
        assert_eq!(list[0].id, 3);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn create_skipped_when_id_already_in_base() {
        let base = vec![user(3, "Ada", "Lovelace"), user(1, "Jon", "Snow")];
        let log = vec![PendingMutation::Create {
            user: user(3, "Ada", "Lovelace"),
            confirmed: true,
        }];
        let list = replay(base, &log);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 3);
    }

    #[test]
    fn update_merges_in_place_and_keeps_position() {
        let base = vec![user(1, "Jon", "Snow"), user(2, "Arya", "Stark")];
        let mut fields = fields_of(&base[0]);
        fields.first_name = "John".to_string();
        let log = vec![PendingMutation::Update { id: 1, fields }];
        let list = replay(base, &log);
        assert_eq!(list[0].id, 1);
        assert_eq!(list[0].first_name, "John");
        assert_eq!(list[0].last_name, "Snow");
        assert_eq!(list[1].id, 2);
    }

    #[test]
    fn update_for_absent_id_is_invisible() {
        let base = vec![user(1, "Jon", "Snow")];
        let log = vec![PendingMutation::Update {
            id: 99,
            fields: fields_of(&user(99, "Ghost", "Record")),
        }];
        let list = replay(base.clone(), &log);
        assert_eq!(list, base);
    }

    #[test]
    fn delete_removes_exactly_one_matching_record() {
        let base = vec![user(1, "Jon", "Snow"), user(2, "Arya", "Stark")];
        let log = vec![PendingMutation::Delete { id: 1 }];
        let list = replay(base, &log);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 2);
    }

    #[test]
    fn delete_for_absent_id_is_noop() {
        let base = vec![user(1, "Jon", "Snow")];
        let log = vec![PendingMutation::Delete { id: 42 }];
        let list = replay(base.clone(), &log);
        assert_eq!(list, base);
    }

    #[test]
    fn log_replays_in_issue_order() {
        // Create then delete of the same id nets out to nothing; the reverse
        // order would leave the created record in place.
        let log = vec![
            PendingMutation::Create {
                user: user(5, "Ada", "Lovelace"),
                confirmed: false,
            },
            PendingMutation::Delete { id: 5 },
        ];
        assert!(replay(vec![], &log).is_empty());

        let reversed = vec![
            PendingMutation::Delete { id: 5 },
            PendingMutation::Create {
                user: user(5, "Ada", "Lovelace"),
                confirmed: false,
            },
        ];
        assert_eq!(replay(vec![], &reversed).len(), 1);
    }
}
