//! Payment item model
//!
//! An item is one recurring payment inside a budget. Paid and skipped are
//! kept mutually exclusive by the transition methods below.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ItemId;
use crate::error::{TrackerError, TrackerResult};

/// How often an item recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Bimonthly,
    Quarterly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Self::Monthly, Self::Bimonthly, Self::Quarterly];

    /// Label shown in the item form selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Bimonthly => "Every Other Month",
            Self::Quarterly => "Quarterly",
        }
    }

    /// Short lowercase name shown on item rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Bimonthly => "bimonthly",
            Self::Quarterly => "quarterly",
        }
    }

    /// The next option in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Monthly => Self::Bimonthly,
            Self::Bimonthly => Self::Quarterly,
            Self::Quarterly => Self::Monthly,
        }
    }

    /// The previous option in selector order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Monthly => Self::Quarterly,
            Self::Bimonthly => Self::Monthly,
            Self::Quarterly => Self::Bimonthly,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values of an item that has not been submitted yet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub name: String,

    /// Amount exactly as typed
    #[serde(default)]
    pub amount: String,

    #[serde(default)]
    pub is_automatic: bool,

    #[serde(default)]
    pub frequency: Frequency,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn automatic(mut self, is_automatic: bool) -> Self {
        self.is_automatic = is_automatic;
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Presence checks only: both name and amount must be non-empty
    pub fn validate(&self) -> TrackerResult<()> {
        if self.name.is_empty() {
            return Err(TrackerError::Validation("Item name is required".into()));
        }
        if self.amount.is_empty() {
            return Err(TrackerError::Validation("Item amount is required".into()));
        }
        Ok(())
    }
}

/// A payment item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub amount: Amount,
    pub is_automatic: bool,
    pub frequency: Frequency,
    pub is_skipped: bool,
    pub is_paid: bool,

    /// When the item was last marked paid (serialized as RFC 3339)
    pub last_paid_date: Option<DateTime<Utc>>,
}

impl Item {
    /// Build a fresh, unpaid and unskipped item from a draft
    pub fn from_draft(id: ItemId, draft: &ItemDraft) -> TrackerResult<Self> {
        draft.validate()?;

        Ok(Self {
            id,
            name: draft.name.clone(),
            amount: Amount::parse(&draft.amount),
            is_automatic: draft.is_automatic,
            frequency: draft.frequency,
            is_skipped: false,
            is_paid: false,
            last_paid_date: None,
        })
    }

    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = amount;
    }

    /// Flip the skipped flag; an item is never left both skipped and paid
    pub fn toggle_skipped(&mut self) {
        self.is_skipped = !self.is_skipped;
        self.is_paid = false;
    }

    pub fn mark_paid(&mut self, at: DateTime<Utc>) {
        self.is_paid = true;
        self.is_skipped = false;
        self.last_paid_date = Some(at);
    }

    /// Contribution of this item to its budget's spend
    pub fn spend(&self) -> Amount {
        if self.is_skipped {
            Amount::zero()
        } else {
            self.amount
        }
    }

    /// "Automatic" or "Manual"
    pub fn payment_mode(&self) -> &'static str {
        if self.is_automatic {
            "Automatic"
        } else {
            "Manual"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::TimeZone;

    fn rent() -> Item {
        Item::from_draft(ItemId::from_raw(1), &ItemDraft::new("Rent", "1200")).unwrap()
    }

    #[test]
    fn test_from_draft_defaults() {
        let draft = ItemDraft::new("Netflix", "15.99")
            .automatic(true)
            .frequency(Frequency::Quarterly);
        let item = Item::from_draft(ItemId::from_raw(7), &draft).unwrap();

        assert_eq!(item.amount, Amount::Value(Money::from_cents(1599)));
        assert!(item.is_automatic);
        assert_eq!(item.frequency, Frequency::Quarterly);
        assert!(!item.is_skipped);
        assert!(!item.is_paid);
        assert!(item.last_paid_date.is_none());
    }

    #[test]
    fn test_from_draft_requires_name_and_amount() {
        let err = Item::from_draft(ItemId::from_raw(1), &ItemDraft::new("", "10")).unwrap_err();
        assert!(err.is_validation());

        let err = Item::from_draft(ItemId::from_raw(1), &ItemDraft::new("Rent", "")).unwrap_err();
        assert!(err.is_validation());

        // Presence only: blank text still counts as present
        let item = Item::from_draft(ItemId::from_raw(1), &ItemDraft::new(" ", " ")).unwrap();
        assert_eq!(item.name, " ");
        assert!(item.amount.is_nan());
    }

    #[test]
    fn test_unparseable_amount_is_kept_as_nan() {
        let item = Item::from_draft(ItemId::from_raw(1), &ItemDraft::new("Gym", "lots")).unwrap();
        assert!(item.amount.is_nan());
    }

    #[test]
    fn test_toggle_skipped_clears_paid() {
        let mut item = rent();
        item.mark_paid(Utc::now());
        item.toggle_skipped();

        assert!(item.is_skipped);
        assert!(!item.is_paid);
        assert!(item.last_paid_date.is_some());
    }

    #[test]
    fn test_mark_paid_clears_skipped() {
        let mut item = rent();
        item.toggle_skipped();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        item.mark_paid(at);

        assert!(item.is_paid);
        assert!(!item.is_skipped);
        assert_eq!(item.last_paid_date, Some(at));
    }

    #[test]
    fn test_spend_ignores_skipped_but_not_paid() {
        let mut item = rent();
        item.mark_paid(Utc::now());
        assert_eq!(item.spend(), Amount::parse("1200"));

        item.toggle_skipped();
        assert_eq!(item.spend(), Amount::zero());
    }

    #[test]
    fn test_frequency_cycle_and_labels() {
        assert_eq!(Frequency::Monthly.next(), Frequency::Bimonthly);
        assert_eq!(Frequency::Quarterly.next(), Frequency::Monthly);
        assert_eq!(Frequency::Monthly.prev(), Frequency::Quarterly);
        assert_eq!(Frequency::Bimonthly.label(), "Every Other Month");
        assert_eq!(
            serde_json::to_string(&Frequency::Bimonthly).unwrap(),
            "\"bimonthly\""
        );
    }

    #[test]
    fn test_last_paid_date_serializes_as_iso8601() {
        let mut item = rent();
        item.mark_paid(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["last_paid_date"], "2024-03-01T12:00:00Z");
    }
}
