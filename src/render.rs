//! Full-replace rendering of the account grid, the feature grid and the summary fields.

use crate::format::{fmt_json_number, fmt_money};
use crate::model::{Account, Profile, FEATURES};

/// A card as it will appear in a grid; plain text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Account {
        institution: String,
        balance: String,
        kind: String,
    },
    Feature {
        label: String,
    },
}

impl Card {
    pub fn account(account: &Account, currency: &str) -> Self {
        Card::Account {
            institution: account.institution.clone(),
            balance: fmt_money(account.balance, currency),
            kind: account.kind.clone(),
        }
    }

    pub fn feature(label: &str) -> Self {
        Card::Feature {
            label: label.to_string(),
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Card::Account { .. } => "account-card",
            Card::Feature { .. } => "feature-card",
        }
    }
}

/// A grid element whose children are cards.
pub trait CardContainer {
    /// Removes every child.
    fn clear(&mut self);
    fn append(&mut self, card: &Card);
}

/// An element that displays a single text value.
pub trait TextSlot {
    fn set_text(&mut self, text: &str);
}

pub fn render_accounts(container: &mut dyn CardContainer, accounts: &[Account], currency: &str) {
    container.clear();
    for account in accounts {
        container.append(&Card::account(account, currency));
    }
}

pub fn render_features(container: &mut dyn CardContainer) {
    container.clear();
    for label in FEATURES {
        container.append(&Card::feature(label));
    }
}

pub fn render_summary(
    total_balance: &mut dyn TextSlot,
    credit_score: &mut dyn TextSlot,
    profile: &Profile,
    currency: &str,
) {
    total_balance.set_text(&fmt_money(profile.total_balance, currency));
    credit_score.set_text(&fmt_json_number(&profile.credit_score));
}
