//! Capability tiers and the pure role-configuration union logic.
//!
//! A guild's role configuration maps named community roles to Discord role
//! ids. Each access tier is a union of named roles; `TierSets` precomputes
//! those unions once per loaded configuration so per-request checks are a
//! plain set intersection. An absent or empty configuration resolves every
//! tier to an empty set, which denies access without being an error.

use std::collections::HashSet;

/// Named community roles recognised in a guild's role configuration.
pub const ROLE_ADMINISTRADOR: &str = "Administrador";
pub const ROLE_MODERADOR: &str = "Moderador";
pub const ROLE_SOPORTE: &str = "Soporte";
pub const ROLE_POLICIA: &str = "Policia";
pub const ROLE_PERIODISTA: &str = "Periodista";
pub const ROLE_ECONOMIA: &str = "Economia";

/// Every role name a guild configuration may map.
pub const NAMED_ROLES: [&str; 6] = [
    ROLE_ADMINISTRADOR,
    ROLE_MODERADOR,
    ROLE_SOPORTE,
    ROLE_POLICIA,
    ROLE_PERIODISTA,
    ROLE_ECONOMIA,
];

/// Capability tier required by an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessTier {
    /// Full administration.
    Admin,
    /// Request reviewers: Administrador, Moderador, Soporte.
    High,
    /// Any staff role.
    Medium,
    /// May issue administrative warnings.
    WarnManage,
    /// Police operations (antecedentes).
    Police,
    /// News publishing.
    News,
    /// Economy account administration.
    Economy,
}

impl AccessTier {
    /// Named roles whose holders belong to this tier.
    fn role_names(self) -> &'static [&'static str] {
        match self {
            Self::Admin => &[ROLE_ADMINISTRADOR],
            Self::High => &[ROLE_ADMINISTRADOR, ROLE_MODERADOR, ROLE_SOPORTE],
            Self::Medium => &[
                ROLE_ADMINISTRADOR,
                ROLE_MODERADOR,
                ROLE_SOPORTE,
                ROLE_POLICIA,
                ROLE_PERIODISTA,
                ROLE_ECONOMIA,
            ],
            Self::WarnManage => &[ROLE_ADMINISTRADOR, ROLE_MODERADOR],
            Self::Police => &[ROLE_ADMINISTRADOR, ROLE_POLICIA],
            Self::News => &[ROLE_ADMINISTRADOR, ROLE_PERIODISTA],
            Self::Economy => &[ROLE_ADMINISTRADOR, ROLE_ECONOMIA],
        }
    }
}

/// One named-role → Discord-role-id mapping loaded from the database.
#[derive(Clone, Debug)]
pub struct RoleMapping {
    pub role_name: String,
    pub discord_role_id: u64,
}

/// Precomputed tier → Discord-role-id unions for one guild.
///
/// Built once per configuration load and cached by guild id; checking a
/// tier is then an intersection against the member's live role list.
#[derive(Clone, Debug, Default)]
pub struct TierSets {
    admin: HashSet<u64>,
    high: HashSet<u64>,
    medium: HashSet<u64>,
    warn_manage: HashSet<u64>,
    police: HashSet<u64>,
    news: HashSet<u64>,
    economy: HashSet<u64>,
}

impl TierSets {
    /// Computes every tier union from a loaded role configuration.
    ///
    /// Pure function of its input: mappings with names outside the known
    /// set contribute to no tier. An empty slice yields empty unions,
    /// which deny all tiers.
    pub fn from_mappings(mappings: &[RoleMapping]) -> Self {
        let mut sets = Self::default();

        for mapping in mappings {
            for (tier, set) in [
                (AccessTier::Admin, &mut sets.admin),
                (AccessTier::High, &mut sets.high),
                (AccessTier::Medium, &mut sets.medium),
                (AccessTier::WarnManage, &mut sets.warn_manage),
                (AccessTier::Police, &mut sets.police),
                (AccessTier::News, &mut sets.news),
                (AccessTier::Economy, &mut sets.economy),
            ] {
                if tier.role_names().contains(&mapping.role_name.as_str()) {
                    set.insert(mapping.discord_role_id);
                }
            }
        }

        sets
    }

    /// True when no recognised role is mapped, i.e. the guild has no
    /// usable configuration yet. Every named role belongs to the Medium
    /// union, so that set alone decides.
    pub fn is_empty(&self) -> bool {
        self.medium.is_empty()
    }

    fn set(&self, tier: AccessTier) -> &HashSet<u64> {
        match tier {
            AccessTier::Admin => &self.admin,
            AccessTier::High => &self.high,
            AccessTier::Medium => &self.medium,
            AccessTier::WarnManage => &self.warn_manage,
            AccessTier::Police => &self.police,
            AccessTier::News => &self.news,
            AccessTier::Economy => &self.economy,
        }
    }

    /// True when the member holds at least one role in the tier's union.
    pub fn allows(&self, tier: AccessTier, member_roles: &[u64]) -> bool {
        let set = self.set(tier);
        member_roles.iter().any(|role| set.contains(role))
    }

    /// Display label for a reviewer, derived from the highest reviewer
    /// role the member holds. Used only in notification text.
    ///
    /// The reviewer unions nest: `admin` holds Administrador ids,
    /// `warn_manage` adds Moderador, `high` adds Soporte. Walking them
    /// from narrowest to widest attributes the member's best role.
    pub fn reviewer_label(&self, member_roles: &[u64]) -> Option<&'static str> {
        let holds = |set: &HashSet<u64>| member_roles.iter().any(|role| set.contains(role));

        if holds(&self.admin) {
            Some("Administrador")
        } else if holds(&self.warn_manage) {
            Some("Moderador")
        } else if holds(&self.high) {
            Some("Soporte")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mapping(name: &str, id: u64) -> RoleMapping {
        RoleMapping {
            role_name: name.to_string(),
            discord_role_id: id,
        }
    }

    /// An empty configuration denies every tier regardless of roles held.
    #[test]
    fn empty_config_denies_all_tiers() {
        let sets = TierSets::from_mappings(&[]);

        assert!(!sets.allows(AccessTier::Admin, &[1, 2, 3]));
        assert!(!sets.allows(AccessTier::Medium, &[1, 2, 3]));
        assert!(!sets.allows(AccessTier::Police, &[]));
    }

    /// A member with none of a tier's configured roles is denied.
    #[test]
    fn disjoint_role_sets_are_denied() {
        let sets = TierSets::from_mappings(&[
            mapping(ROLE_ADMINISTRADOR, 10),
            mapping(ROLE_POLICIA, 20),
        ]);

        assert!(!sets.allows(AccessTier::Admin, &[20, 30]));
        assert!(!sets.allows(AccessTier::Police, &[30, 40]));
    }

    /// A single overlapping role grants the tier.
    #[test]
    fn singleton_overlap_is_granted() {
        let sets = TierSets::from_mappings(&[
            mapping(ROLE_ADMINISTRADOR, 10),
            mapping(ROLE_POLICIA, 20),
        ]);

        assert!(sets.allows(AccessTier::Police, &[20]));
        // Administrador belongs to every tier union.
        assert!(sets.allows(AccessTier::Police, &[10]));
        assert!(sets.allows(AccessTier::News, &[10]));
    }

    /// An empty member role list is always denied.
    #[test]
    fn empty_member_roles_denied() {
        let sets = TierSets::from_mappings(&[mapping(ROLE_ADMINISTRADOR, 10)]);

        assert!(!sets.allows(AccessTier::Admin, &[]));
    }

    /// Unknown role names in the configuration contribute to no tier.
    #[test]
    fn unknown_role_names_ignored() {
        let sets = TierSets::from_mappings(&[mapping("Fundador", 99)]);

        assert!(!sets.allows(AccessTier::Admin, &[99]));
        assert!(!sets.allows(AccessTier::Medium, &[99]));
    }

    /// The reviewer label reflects the highest reviewer role held.
    #[test]
    fn reviewer_label_prefers_admin() {
        let sets = TierSets::from_mappings(&[
            mapping(ROLE_ADMINISTRADOR, 10),
            mapping(ROLE_MODERADOR, 20),
            mapping(ROLE_SOPORTE, 30),
        ]);

        assert_eq!(sets.reviewer_label(&[20, 10]), Some("Administrador"));
        assert_eq!(sets.reviewer_label(&[20]), Some("Moderador"));
        assert_eq!(sets.reviewer_label(&[30]), Some("Soporte"));
        assert_eq!(sets.reviewer_label(&[40]), None);
    }

    /// A guild mapping only some reviewer roles still labels correctly.
    #[test]
    fn reviewer_label_with_partial_config() {
        let sets = TierSets::from_mappings(&[mapping(ROLE_SOPORTE, 30)]);

        assert_eq!(sets.reviewer_label(&[30]), Some("Soporte"));
        assert_eq!(sets.reviewer_label(&[10]), None);
    }
}
