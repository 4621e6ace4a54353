//! The console's named views and their form dialogs.
//!
//! Views are listed in sidebar order. Each one shows a single domain, has a
//! search box bound to that domain's default search fields, and opens a
//! "new record" dialog. Submitting a dialog closes it without touching any
//! store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Aircraft, Domain, Employee, Inspection, Part, Record, Stage};
use crate::error::Error;

/// A named view of the console.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Aircraft table.
    #[default]
    Aeronaves,
    /// Employee cards.
    Funcionarios,
    /// Parts inventory.
    Pecas,
    /// Production stage timelines.
    Etapas,
    /// Tests and inspections.
    Testes,
}

impl View {
    /// Every view, in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Aeronaves,
        Self::Funcionarios,
        Self::Pecas,
        Self::Etapas,
        Self::Testes,
    ];

    /// Stable identifier used in configuration and on the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Aeronaves => "aeronaves",
            Self::Funcionarios => "funcionarios",
            Self::Pecas => "pecas",
            Self::Etapas => "etapas",
            Self::Testes => "testes",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Aeronaves => "Aeronaves",
            Self::Funcionarios => "Funcionários",
            Self::Pecas => "Peças",
            Self::Etapas => "Etapas",
            Self::Testes => "Testes",
        }
    }

    /// Page heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Etapas => "Etapas de Produção",
            Self::Testes => "Testes e Inspeções",
            other => other.label(),
        }
    }

    /// Placeholder shown in the empty search box.
    #[must_use]
    pub fn search_placeholder(self) -> &'static str {
        match self {
            Self::Aeronaves => "Buscar por ID ou modelo...",
            Self::Funcionarios => "Buscar funcionário...",
            Self::Pecas => "Buscar peça...",
            Self::Etapas => "Buscar etapa...",
            Self::Testes => "Buscar teste...",
        }
    }

    /// Caption of the "new record" button.
    #[must_use]
    pub fn create_label(self) -> &'static str {
        match self {
            Self::Aeronaves => "Nova Aeronave",
            Self::Funcionarios => "Novo Funcionário",
            Self::Pecas => "Nova Peça",
            Self::Etapas => "Nova Etapa",
            Self::Testes => "Novo Teste",
        }
    }

    /// Domain shown by this view.
    #[must_use]
    pub fn domain(self) -> Domain {
        match self {
            Self::Aeronaves => Domain::Aircraft,
            Self::Funcionarios => Domain::Employee,
            Self::Pecas => Domain::Part,
            Self::Etapas => Domain::Stage,
            Self::Testes => Domain::Test,
        }
    }

    /// Fields the search box matches against.
    #[must_use]
    pub fn search_fields(self) -> &'static [&'static str] {
        match self {
            Self::Aeronaves => Aircraft::SEARCH_FIELDS,
            Self::Funcionarios => Employee::SEARCH_FIELDS,
            Self::Pecas => Part::SEARCH_FIELDS,
            Self::Etapas => Stage::SEARCH_FIELDS,
            Self::Testes => Inspection::SEARCH_FIELDS,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.id() == s)
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

/// What became of a submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The form was accepted and discarded; no record was stored.
    Discarded,
}

/// A modal form dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dialog {
    open: bool,
}

impl Dialog {
    /// Show the dialog.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Whether the dialog is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close without submitting.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Submit the form. The dialog closes and nothing is persisted.
    pub fn submit(&mut self) -> Submission {
        debug!("Form submitted; no store is updated");
        self.open = false;
        Submission::Discarded
    }
}

/// Per-view UI state: the active view, its search text and its dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// The view shown.
    pub view: View,
    /// Current search text.
    pub query: String,
    /// The "new record" dialog.
    pub dialog: Dialog,
}

impl ViewState {
    /// Fresh state for a view: empty search, dialog closed.
    #[must_use]
    pub fn new(view: View) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Replace the search text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Switch to another view. Search text and dialog are reset.
    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            *self = Self::new(view);
        }
    }
}
