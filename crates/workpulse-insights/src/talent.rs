//! Talent movement tracker.

use workpulse_core::types::TalentMove;

/// Role selector for the talent tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Role(String),
}

impl RoleFilter {
    /// `"All"` selects every role; anything else selects that exact role.
    pub fn parse(raw: &str) -> Self {
        if raw == "All" {
            Self::All
        } else {
            Self::Role(raw.to_string())
        }
    }

    fn accepts(&self, role: &str) -> bool {
        match self {
            Self::All => true,
            Self::Role(r) => r == role,
        }
    }
}

/// Distinct roles in first-seen order.
pub fn role_options(moves: &[TalentMove]) -> Vec<&str> {
    let mut roles: Vec<&str> = Vec::new();
    for m in moves {
        if !roles.contains(&m.role.as_str()) {
            roles.push(&m.role);
        }
    }
    roles
}

/// Moves matching the role filter whose person, company or role contains
/// `query` (case-insensitive). Input order is kept.
pub fn filter_moves<'a>(
    moves: &'a [TalentMove],
    role: &RoleFilter,
    query: &str,
) -> Vec<&'a TalentMove> {
    let needle = query.trim().to_lowercase();
    moves
        .iter()
        .filter(|m| role.accepts(&m.role))
        .filter(|m| {
            needle.is_empty()
                || [&m.person, &m.company, &m.role]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
