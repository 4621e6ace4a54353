use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{Categorized, Category, Domain, Record};
use crate::classify::{EmployeeAvailability, Tone};

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    /// Working.
    #[serde(rename = "Ativo")]
    Active,
    /// On vacation.
    #[serde(rename = "Férias")]
    Vacation,
    /// On leave.
    #[serde(rename = "Afastado")]
    Leave,
}

impl Category for EmployeeStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Vacation, Self::Leave];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Vacation => "Férias",
            Self::Leave => "Afastado",
        }
    }

    fn tone(self) -> Tone {
        EmployeeAvailability::from(self).tone()
    }
}

/// A member of the production staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Staff id, e.g. `E001`.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Job title.
    pub role: String,
    /// Department.
    pub department: String,
    /// Work e-mail.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Employment status.
    pub status: EmployeeStatus,
}

impl Employee {
    /// First letter of every space-separated part of the name.
    ///
    /// `"João Silva"` gives `"JS"`.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

impl Record for Employee {
    const DOMAIN: Domain = Domain::Employee;
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "role", "id"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "initials" => Some(Cow::Owned(self.initials())),
            "role" => Some(Cow::Borrowed(&self.role)),
            "department" => Some(Cow::Borrowed(&self.department)),
            "email" => Some(Cow::Borrowed(&self.email)),
            "phone" => Some(Cow::Borrowed(&self.phone)),
            "status" => Some(Cow::Borrowed(self.status.label())),
            _ => None,
        }
    }
}

impl Categorized for Employee {
    type Category = EmployeeStatus;
    const CATEGORY_FIELD: &'static str = "status";

    fn category(&self) -> EmployeeStatus {
        self.status
    }
}
