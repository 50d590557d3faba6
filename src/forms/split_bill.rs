//! # Split-Bill Form
//!
//! Collects the bill total, your share of it, and who paid. The friend's
//! share is never entered; it is always `bill - your_expense`.
//!
//! ## Settlement
//!
//! | Payer | Delta added to the friend's balance |
//! |-------|-------------------------------------|
//! | You | `+friend_expense` (they now owe you their share) |
//! | Friend | `-your_expense` (you now owe them your share) |

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payer {
    You,
    Friend,
}

impl Payer {
    pub fn toggle(self) -> Self {
        match self {
            Payer::You => Payer::Friend,
            Payer::Friend => Payer::You,
        }
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payer::You => write!(f, "You"),
            Payer::Friend => write!(f, "Friend"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitBillField {
    Bill,
    YourExpense,
    Payer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBillForm {
    bill: Option<i64>,
    your_expense: Option<i64>,
    pub payer: Payer,
    pub active: SplitBillField,
}

impl Default for SplitBillForm {
    fn default() -> Self {
        Self {
            bill: None,
            your_expense: None,
            payer: Payer::You,
            active: SplitBillField::Bill,
        }
    }
}

impl SplitBillForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(&self) -> Option<i64> {
        self.bill
    }

    pub fn your_expense(&self) -> Option<i64> {
        self.your_expense
    }

    /// `bill - your_expense`, or `None` while no bill is entered.
    pub fn friend_expense(&self) -> Option<i64> {
        self.bill.map(|bill| bill - self.your_expense.unwrap_or_default())
    }

    /// Set the bill total. Negative values are ignored.
    pub fn set_bill(&mut self, bill: Option<i64>) {
        if bill.is_some_and(|b| b < 0) {
            return;
        }
        self.bill = bill;
    }

    /// Set your expense, keeping the previous value if the new one exceeds
    /// the bill (an empty bill counts as zero) or is negative.
    ///
    /// Returns whether the value was accepted.
    pub fn set_your_expense(&mut self, expense: Option<i64>) -> bool {
        if let Some(value) = expense {
            if value < 0 || value > self.bill.unwrap_or_default() {
                return false;
            }
        }
        self.your_expense = expense;
        true
    }

    pub fn next_field(&mut self) {
        self.active = match self.active {
            SplitBillField::Bill => SplitBillField::YourExpense,
            SplitBillField::YourExpense => SplitBillField::Payer,
            SplitBillField::Payer => SplitBillField::Bill,
        };
    }

    pub fn previous_field(&mut self) {
        self.active = match self.active {
            SplitBillField::Bill => SplitBillField::Payer,
            SplitBillField::YourExpense => SplitBillField::Bill,
            SplitBillField::Payer => SplitBillField::YourExpense,
        };
    }

    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggle();
    }

    /// Type a digit into the active numeric field.
    pub fn push_digit(&mut self, digit: u32) {
        let Some(field) = self.numeric_field() else {
            return;
        };
        let candidate = field
            .unwrap_or_default()
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit)));
        let Some(candidate) = candidate else {
            return;
        };

        match self.active {
            SplitBillField::Bill => self.set_bill(Some(candidate)),
            SplitBillField::YourExpense => {
                self.set_your_expense(Some(candidate));
            }
            SplitBillField::Payer => {}
        }
    }

    /// Delete the last digit of the active numeric field.
    pub fn pop_digit(&mut self) {
        let Some(Some(value)) = self.numeric_field() else {
            return;
        };
        let shortened = if value < 10 { None } else { Some(value / 10) };

        match self.active {
            SplitBillField::Bill => self.set_bill(shortened),
            SplitBillField::YourExpense => {
                self.set_your_expense(shortened);
            }
            SplitBillField::Payer => {}
        }
    }

    fn numeric_field(&self) -> Option<Option<i64>> {
        match self.active {
            SplitBillField::Bill => Some(self.bill),
            SplitBillField::YourExpense => Some(self.your_expense),
            SplitBillField::Payer => None,
        }
    }

    /// The balance delta for the selected friend, or `None` when the bill or
    /// your expense is empty or zero.
    pub fn settlement_delta(&self) -> Option<i64> {
        let bill = self.bill.filter(|b| *b != 0)?;
        let yours = self.your_expense.filter(|e| *e != 0)?;

        Some(match self.payer {
            Payer::You => bill - yours,
            Payer::Friend => -yours,
        })
    }
}
