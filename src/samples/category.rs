// file: src/samples/category.rs
// description: fixed sample categories and accounts for synthetic transactions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named bucket of synthetic transactions. Amounts are in cents; a
/// negative range is an expense, a positive one income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCategory {
    pub name: &'static str,
    pub descriptions: &'static [&'static str],
    pub amount_range_cents: (i64, i64),
}

pub static CATEGORIES: [SampleCategory; 6] = [
    SampleCategory {
        name: "Groceries",
        descriptions: &["Whole Foods", "Trader Joe's", "Supermarket"],
        amount_range_cents: (-12_000, -2_000),
    },
    SampleCategory {
        name: "Dining",
        descriptions: &["Restaurant", "Cafe", "Delivery"],
        amount_range_cents: (-8_000, -1_000),
    },
    SampleCategory {
        name: "Transportation",
        descriptions: &["Lyft", "Uber", "Gas Station"],
        amount_range_cents: (-6_000, -1_500),
    },
    SampleCategory {
        name: "Utilities",
        descriptions: &["Electric", "Water", "Internet"],
        amount_range_cents: (-20_000, -4_000),
    },
    SampleCategory {
        name: "Entertainment",
        descriptions: &["Streaming", "Bookstore", "Concert"],
        amount_range_cents: (-15_000, -1_500),
    },
    SampleCategory {
        name: "Salary",
        descriptions: &["Payroll", "Employer Deposit"],
        amount_range_cents: (150_000, 320_000),
    },
];

pub fn find_category(name: &str) -> Option<&'static SampleCategory> {
    CATEGORIES.iter().find(|c| c.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Account {
    Checking,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Savings,
}

impl Account {
    pub const ALL: [Account; 3] = [Account::Checking, Account::CreditCard, Account::Savings];

    pub fn name(&self) -> &'static str {
        match self {
            Account::Checking => "Checking",
            Account::CreditCard => "Credit Card",
            Account::Savings => "Savings",
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ranges_are_well_formed() {
        for category in &CATEGORIES {
            let (min, max) = category.amount_range_cents;
            assert!(min <= max, "{} has an inverted range", category.name);
            assert!(
                (min < 0) == (max < 0),
                "{} range straddles zero",
                category.name
            );
            assert!(!category.descriptions.is_empty());
        }
    }

    #[test]
    fn test_only_salary_is_income() {
        let income: Vec<&str> = CATEGORIES
            .iter()
            .filter(|c| c.amount_range_cents.0 >= 0)
            .map(|c| c.name)
            .collect();
        assert_eq!(income, vec!["Salary"]);
    }

    #[test]
    fn test_find_category() {
        assert_eq!(find_category("Dining").map(|c| c.name), Some("Dining"));
        assert!(find_category("Travel").is_none());
    }

    #[test]
    fn test_account_names() {
        let names: Vec<String> = Account::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["Checking", "Credit Card", "Savings"]);
    }
}
