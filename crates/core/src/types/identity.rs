//! Who is browsing: a guest or a signed-in account.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// The current browsing identity.
///
/// Favorites, the compare list and the cart are partitioned by identity, so a
/// guest and every signed-in account each see an independent set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Identity {
    /// Nobody is signed in.
    #[default]
    Guest,
    /// A signed-in account with a stable id.
    User(UserId),
}

impl Identity {
    /// The signed-in account id, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Guest => None,
            Self::User(id) => Some(id),
        }
    }

    /// Returns `true` when nobody is signed in.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }
}

impl From<Option<UserId>> for Identity {
    fn from(id: Option<UserId>) -> Self {
        id.map_or(Self::Guest, Self::User)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => f.write_str("guest"),
            Self::User(id) => write!(f, "user:{id}"),
        }
    }
}
