use serde::{Deserialize, Serialize};

/// A registered user, as the appliance reports it.
///
/// The appliance owns the record; `absence_count` and `is_dropped` are
/// maintained entirely on-device. We only ever hold a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub absence_count: u32,
    pub is_dropped: bool,
}

impl User {
    pub fn status_label(&self) -> &'static str {
        if self.is_dropped { "Dropped" } else { "Active" }
    }

    pub fn status_class(&self) -> &'static str {
        if self.is_dropped { "dropped" } else { "active" }
    }
}

/// Status facet of the roster filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterFilter {
    #[default]
    All,
    Active,
    Dropped,
}

impl RosterFilter {
    /// Parse a filter-select value, falling back to `All` for anything else.
    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "dropped" => Self::Dropped,
            _ => Self::All,
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            Self::All => true,
            Self::Active => !user.is_dropped,
            Self::Dropped => user.is_dropped,
        }
    }
}

/// Filter the roster snapshot by free text and status.
///
/// The text match is a case-insensitive substring test against the id OR the
/// name. Relative order is preserved and the snapshot is left untouched.
pub fn filter_users(users: &[User], search: &str, filter: RosterFilter) -> Vec<User> {
    let needle = search.trim().to_lowercase();
    users
        .iter()
        .filter(|user| {
            needle.is_empty()
                || user.id.to_lowercase().contains(&needle)
                || user.name.to_lowercase().contains(&needle)
        })
        .filter(|user| filter.matches(user))
        .cloned()
        .collect()
}

pub fn dropped_count(users: &[User]) -> usize {
    users.iter().filter(|user| user.is_dropped).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<User> {
        vec![
            User {
                id: "u1".into(),
                name: "Alice".into(),
                absence_count: 0,
                is_dropped: false,
            },
            User {
                id: "u2".into(),
                name: "Bob".into(),
                absence_count: 5,
                is_dropped: true,
            },
            User {
                id: "U3".into(),
                name: "Caroline".into(),
                absence_count: 2,
                is_dropped: false,
            },
        ]
    }

    #[test]
    fn empty_search_with_all_is_identity() {
        let users = roster();
        let filtered = filter_users(&users, "", RosterFilter::All);
        assert_eq!(filtered, users);
    }

    #[test]
    fn dropped_filter_keeps_only_dropped() {
        let users = roster();
        let filtered = filter_users(&users, "", RosterFilter::Dropped);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "u2");
    }

    #[test]
    fn search_is_case_insensitive_on_id_and_name() {
        let users = roster();
        let by_name = filter_users(&users, "aLi", RosterFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alice");

        let by_id = filter_users(&users, "u3", RosterFilter::All);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "U3");
    }

    #[test]
    fn search_and_status_combine() {
        let users = roster();
        let filtered = filter_users(&users, "o", RosterFilter::Active);
        // "Bob" matches the text but is dropped; "Caroline" matches both.
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Caroline");
    }

    #[test]
    fn filter_is_pure() {
        let users = roster();
        let first = filter_users(&users, "u", RosterFilter::All);
        let second = filter_users(&users, "u", RosterFilter::All);
        assert_eq!(first, second);
        assert_eq!(users, roster());
    }

    #[test]
    fn filter_preserves_relative_order() {
        let users = roster();
        let filtered = filter_users(&users, "", RosterFilter::Active);
        assert_eq!(filtered[0].id, "u1");
        assert_eq!(filtered[1].id, "U3");
    }

    #[test]
    fn wire_format_is_camel_case() {
        let user = &roster()[1];
        let json = serde_json::to_value(user).unwrap();
        assert_eq!(json["absenceCount"], 5);
        assert_eq!(json["isDropped"], true);

        let parsed: User = serde_json::from_value(json).unwrap();
        assert_eq!(&parsed, user);
    }

    #[test]
    fn dropped_count_counts_only_dropped() {
        assert_eq!(dropped_count(&roster()), 1);
        assert_eq!(dropped_count(&[]), 0);
    }
}
