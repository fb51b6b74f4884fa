//! Route-derived role and the row actions it unlocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The role is decided by the shell from the current path (`/admin/...`
//! pages are administrative) and handed down to list views and rows, which
//! dispatch on [`RowAction`] instead of comparing role strings.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Privileges of the person looking at a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// Stockroom staff: may add, edit and delete records.
    Admin,
    /// Lab member: may browse availability and request items.
    #[default]
    Borrower,
}

/// The single affordance a row offers its viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Open the edit modal for this record.
    Edit,
    /// Cart placeholder; enabled only when the record is available.
    AddToCart { enabled: bool },
}

/// A sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub label: &'static str,
    pub href: &'static str,
}

const ADMIN_MENU: &[MenuLink] = &[
    MenuLink { label: "Materials", href: "/admin/materials" },
    MenuLink { label: "Chemicals", href: "/admin/chemicals" },
    MenuLink { label: "Users", href: "/admin/users" },
];

const BORROWER_MENU: &[MenuLink] = &[
    MenuLink { label: "Materials", href: "/materials" },
    MenuLink { label: "Chemicals", href: "/chemicals" },
];

impl Role {
    /// Role for a route path: any `admin` segment makes it administrative.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path.split('/').any(|segment| segment == "admin") { Self::Admin } else { Self::Borrower }
    }

    /// What a row for a record with the given availability offers.
    #[must_use]
    pub fn row_action(self, available: bool) -> RowAction {
        match self {
            Self::Admin => RowAction::Edit,
            Self::Borrower => RowAction::AddToCart { enabled: available },
        }
    }

    /// Whether list views show create affordances.
    #[must_use]
    pub fn can_create(self) -> bool {
        self == Self::Admin
    }

    #[must_use]
    pub fn menu(self) -> &'static [MenuLink] {
        match self {
            Self::Admin => ADMIN_MENU,
            Self::Borrower => BORROWER_MENU,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Borrower => "borrower",
        }
    }
}
