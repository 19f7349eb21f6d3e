//! Column descriptor resolution.
//!
//! Pure mapping from a raw [`Column`] to the icon/avatar data the sidebar
//! renders. Deterministic for a given column value and free of side effects,
//! so callers may recompute it on every render or memoize it as they see
//! fit. Unrecognized kinds and subtypes resolve to a defined fallback rather
//! than failing: the column set is externally controlled and may contain
//! types this build does not specifically style.

use crate::column::{AvatarRef, Column, ColumnDescriptor, ColumnKind, Icon};

/// Fallback icon for columns the sidebar has no specific styling for.
pub const FALLBACK_ICON: Icon = Icon::MarkGithub;

/// Derives the display descriptor for a column.
pub fn resolve(column: &Column) -> ColumnDescriptor {
    match column.kind {
        ColumnKind::Notifications => ColumnDescriptor {
            icon: Icon::Bell,
            // Repo-scoped inboxes show the repo owner's avatar
            avatar: column.repo.is_some().then(|| avatar_for(column)).flatten(),
        },
        ColumnKind::Activity => resolve_activity(column),
        ColumnKind::Unknown => fallback(),
    }
}

fn resolve_activity(column: &Column) -> ColumnDescriptor {
    let icon = match column.subtype.as_deref() {
        Some("USER_RECEIVED_EVENTS") => Icon::Home,
        Some("USER_EVENTS" | "USER_PUBLIC_EVENTS") => Icon::Person,
        Some("USER_ORG_EVENTS" | "ORG_PUBLIC_EVENTS") => Icon::Organization,
        Some("REPO_EVENTS" | "REPO_NETWORK_EVENTS") => Icon::Repo,
        _ => return fallback(),
    };
    ColumnDescriptor {
        icon,
        avatar: avatar_for(column),
    }
}

fn avatar_for(column: &Column) -> Option<AvatarRef> {
    column.owner.as_ref().map(|owner| AvatarRef {
        username: owner.clone(),
        disable_link: true,
    })
}

fn fallback() -> ColumnDescriptor {
    ColumnDescriptor {
        icon: FALLBACK_ICON,
        avatar: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(kind: ColumnKind, subtype: Option<&str>, owner: Option<&str>) -> Column {
        Column {
            id: "test".into(),
            kind,
            subtype: subtype.map(str::to_string),
            owner: owner.map(str::to_string),
            repo: None,
        }
    }

    #[test]
    fn notifications_resolve_to_bell() {
        let descriptor = resolve(&column(ColumnKind::Notifications, None, None));
        assert_eq!(descriptor.icon, Icon::Bell);
        assert!(descriptor.avatar.is_none());
    }

    #[test]
    fn received_events_resolve_to_home() {
        let descriptor = resolve(&column(
            ColumnKind::Activity,
            Some("USER_RECEIVED_EVENTS"),
            Some("octocat"),
        ));
        assert_eq!(descriptor.icon, Icon::Home);
        let avatar = descriptor.avatar.expect("avatar present");
        assert_eq!(avatar.username, "octocat");
        assert!(avatar.disable_link);
    }

    #[test]
    fn org_events_resolve_to_organization() {
        for subtype in ["USER_ORG_EVENTS", "ORG_PUBLIC_EVENTS"] {
            let descriptor = resolve(&column(ColumnKind::Activity, Some(subtype), Some("rust-lang")));
            assert_eq!(descriptor.icon, Icon::Organization);
        }
    }

    #[test]
    fn repo_events_resolve_to_repo() {
        let descriptor = resolve(&column(ColumnKind::Activity, Some("REPO_EVENTS"), Some("rust-lang")));
        assert_eq!(descriptor.icon, Icon::Repo);
    }

    #[test]
    fn unrecognized_subtype_falls_back_without_avatar() {
        let descriptor = resolve(&column(ColumnKind::Activity, Some("GALACTIC_EVENTS"), Some("octocat")));
        assert_eq!(descriptor.icon, FALLBACK_ICON);
        assert!(descriptor.avatar.is_none());
    }

    #[test]
    fn missing_subtype_falls_back() {
        let descriptor = resolve(&column(ColumnKind::Activity, None, None));
        assert_eq!(descriptor.icon, FALLBACK_ICON);
    }

    #[test]
    fn unknown_kind_falls_back() {
        let descriptor = resolve(&column(ColumnKind::Unknown, Some("USER_EVENTS"), None));
        assert_eq!(descriptor.icon, FALLBACK_ICON);
    }

    #[test]
    fn resolution_is_deterministic() {
        let c = column(ColumnKind::Activity, Some("USER_EVENTS"), Some("octocat"));
        assert_eq!(resolve(&c), resolve(&c));
    }
}
