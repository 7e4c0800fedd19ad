//! Role-scoped sidebar navigation: a plain lookup table, recomputed from the
//! role on render, never persisted.

use crate::types::Role;

pub struct NavLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

const MEMBER_LINKS: &[NavLink] = &[
    NavLink {
        icon: "📊",
        label: "Overview",
        href: "/dashboard/member",
    },
    NavLink {
        icon: "💳",
        label: "Purchase Plan",
        href: "/dashboard/member/purchase",
    },
    NavLink {
        icon: "📅",
        label: "Class Schedule",
        href: "/dashboard/member/schedule",
    },
    NavLink {
        icon: "📄",
        label: "Attendance",
        href: "/dashboard/member/attendance",
    },
    NavLink {
        icon: "⚙️",
        label: "Profile",
        href: "/dashboard/member/profile",
    },
];

const TRAINER_LINKS: &[NavLink] = &[NavLink {
    icon: "📊",
    label: "Overview",
    href: "/dashboard/trainer",
}];

const ADMIN_LINKS: &[NavLink] = &[NavLink {
    icon: "📊",
    label: "Admin Portal",
    href: "/dashboard/admin",
}];

/// Staff accounts exist in the role model but have no dashboard section yet,
/// so their link set is empty.
pub fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Member => MEMBER_LINKS,
        Role::Trainer => TRAINER_LINKS,
        Role::Admin => ADMIN_LINKS,
        Role::Staff => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_links_are_ordered_and_scoped() {
        let labels: Vec<_> = nav_links(Role::Member).iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            [
                "Overview",
                "Purchase Plan",
                "Class Schedule",
                "Attendance",
                "Profile"
            ]
        );
        assert!(nav_links(Role::Member)
            .iter()
            .all(|l| l.href.starts_with("/dashboard/member")));
    }

    #[test]
    fn every_role_has_a_link_set() {
        assert_eq!(nav_links(Role::Trainer).len(), 1);
        assert_eq!(nav_links(Role::Admin).len(), 1);
        assert!(nav_links(Role::Staff).is_empty());
    }
}
