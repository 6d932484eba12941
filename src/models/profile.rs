//! Profile type and expense category models
//!
//! The profile type decides which expense categories a user can record and
//! how income is labelled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of user a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    /// Receives weekly pocket money
    Student,
    /// Receives a monthly salary
    Employee,
}

const STUDENT_CATEGORIES: [Category; 5] = [
    Category::Food,
    Category::Stationary,
    Category::Transport,
    Category::Entertainment,
    Category::Miscellaneous,
];

const EMPLOYEE_CATEGORIES: [Category; 8] = [
    Category::Rent,
    Category::Groceries,
    Category::Transport,
    Category::Utilities,
    Category::DiningOut,
    Category::Entertainment,
    Category::Savings,
    Category::Investments,
];

impl ProfileType {
    pub const ALL: [ProfileType; 2] = [ProfileType::Student, ProfileType::Employee];

    /// Fixed expense categories for this profile, in display order
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Student => &STUDENT_CATEGORIES,
            Self::Employee => &EMPLOYEE_CATEGORIES,
        }
    }

    /// Whether `category` is one of this profile's slots
    pub fn allows(&self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    /// Label for the income field ("Weekly Pocket Money" / "Monthly Salary")
    pub fn income_label(&self) -> &'static str {
        match self {
            Self::Student => "Weekly Pocket Money",
            Self::Employee => "Monthly Salary",
        }
    }

    /// Short label used on dashboards ("Pocket Money" / "Salary")
    pub fn income_short_label(&self) -> &'static str {
        match self {
            Self::Student => "Pocket Money",
            Self::Employee => "Salary",
        }
    }

    /// Noun used in advisory sentences ("pocket money" / "income")
    pub fn income_noun(&self) -> &'static str {
        match self {
            Self::Student => "pocket money",
            Self::Employee => "income",
        }
    }

    /// Parse profile type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" | "s" => Some(Self::Student),
            "employee" | "e" => Some(Self::Employee),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Employee => write!(f, "Employee"),
        }
    }
}

/// An expense category
///
/// The union of every profile's category slots. Which ones a record may use
/// is decided by [`ProfileType::categories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Stationary,
    Transport,
    Entertainment,
    Miscellaneous,
    Rent,
    Groceries,
    Utilities,
    #[serde(rename = "Dining Out")]
    DiningOut,
    Savings,
    Investments,
}

impl Category {
    /// Display name, exactly as shown in forms and exports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Stationary => "Stationary",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Miscellaneous => "Miscellaneous",
            Self::Rent => "Rent",
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::DiningOut => "Dining Out",
            Self::Savings => "Savings",
            Self::Investments => "Investments",
        }
    }

    /// Categories that count as putting money aside
    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Savings | Self::Investments)
    }

    /// Parse a category from its display name (case-insensitive)
    ///
    /// "dining-out" and "dining_out" are accepted as spellings of "Dining Out".
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();

        match normalized.as_str() {
            "food" => Some(Self::Food),
            "stationary" | "stationery" => Some(Self::Stationary),
            "transport" => Some(Self::Transport),
            "entertainment" => Some(Self::Entertainment),
            "miscellaneous" | "misc" => Some(Self::Miscellaneous),
            "rent" => Some(Self::Rent),
            "groceries" => Some(Self::Groceries),
            "utilities" => Some(Self::Utilities),
            "dining out" | "diningout" => Some(Self::DiningOut),
            "savings" => Some(Self::Savings),
            "investments" => Some(Self::Investments),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sets() {
        let student: Vec<&str> = ProfileType::Student
            .categories()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(
            student,
            ["Food", "Stationary", "Transport", "Entertainment", "Miscellaneous"]
        );

        let employee: Vec<&str> = ProfileType::Employee
            .categories()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(
            employee,
            [
                "Rent",
                "Groceries",
                "Transport",
                "Utilities",
                "Dining Out",
                "Entertainment",
                "Savings",
                "Investments"
            ]
        );
    }

    #[test]
    fn test_allows() {
        assert!(ProfileType::Student.allows(Category::Transport));
        assert!(ProfileType::Employee.allows(Category::Transport));
        assert!(!ProfileType::Student.allows(Category::Rent));
        assert!(!ProfileType::Employee.allows(Category::Food));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProfileType::Student.income_label(), "Weekly Pocket Money");
        assert_eq!(ProfileType::Employee.income_label(), "Monthly Salary");
        assert_eq!(ProfileType::Student.income_noun(), "pocket money");
        assert_eq!(ProfileType::Employee.income_noun(), "income");
    }

    #[test]
    fn test_profile_parse() {
        assert_eq!(ProfileType::parse("Student"), Some(ProfileType::Student));
        assert_eq!(ProfileType::parse(" EMPLOYEE "), Some(ProfileType::Employee));
        assert_eq!(ProfileType::parse("retiree"), None);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse("Dining Out"), Some(Category::DiningOut));
        assert_eq!(Category::parse("dining-out"), Some(Category::DiningOut));
        assert_eq!(Category::parse("DINING_OUT"), Some(Category::DiningOut));
        assert_eq!(Category::parse("yachts"), None);
    }

    #[test]
    fn test_category_serializes_display_name() {
        let json = serde_json::to_string(&Category::DiningOut).unwrap();
        assert_eq!(json, "\"Dining Out\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::DiningOut);
    }
}
