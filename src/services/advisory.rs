//! Rule-based financial commentary
//!
//! Turns the record's metrics into advisory sentences and picks a money-saving
//! tip. Tip selection is the only non-deterministic step in the crate, so the
//! random source is passed in.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{ExpenseEntry, ProfileType, SavingsBand};

pub const STUDENT_TIPS: [&str; 5] = [
    "A penny saved is a penny earned.",
    "Do not save what is left after spending, but spend what is left after saving.",
    "Beware of little expenses; a small leak will sink a great ship.",
    "Financial freedom is available to those who learn about it and work for it.",
    "The habit of saving is itself an education.",
];

pub const EMPLOYEE_TIPS: [&str; 5] = [
    "The art is not in making money, but in keeping it.",
    "Never spend your money before you have it.",
    "It's not how much money you make, but how much money you keep.",
    "The goal isn't more money. The goal is living life on your terms.",
    "Save a part of your income and begin now, for the man with a surplus controls circumstances and the man without a surplus is controlled by circumstances.",
];

pub const SAVINGS_RECOMMENDATION: &str =
    "Consider adding a 'Savings' or 'Investments' category to build your financial future.";

pub const REDUCE_SPENDING_HINT: &str =
    "Consider reducing expenses in this category to save more.";

/// The fixed tip list for a profile
pub fn tips_for(profile: ProfileType) -> &'static [&'static str] {
    match profile {
        ProfileType::Student => &STUDENT_TIPS,
        ProfileType::Employee => &EMPLOYEE_TIPS,
    }
}

/// Pick one of the profile's tips uniformly at random
pub fn select_tip<R: Rng + ?Sized>(profile: ProfileType, rng: &mut R) -> &'static str {
    let tips = tips_for(profile);
    // Tip lists are non-empty constants
    tips.choose(rng).copied().unwrap_or(tips[0])
}

/// Sentence describing how much of the income is being saved
pub fn spending_insight(profile: ProfileType, ratio: f64) -> String {
    let noun = profile.income_noun();
    match SavingsBand::classify(ratio) {
        SavingsBand::Overspending => format!(
            "Warning: You're spending {:.1}% more than your {}!",
            ratio.abs(),
            noun
        ),
        SavingsBand::BelowTarget => format!(
            "You're saving {:.1}% of your {}. Try to save at least 20%.",
            ratio, noun
        ),
        SavingsBand::OnTarget => format!("Excellent! You're saving {:.1}% of your {}.", ratio, noun),
    }
}

/// Same insight in the upper-case tagged form used by text exports
pub fn tagged_insight(profile: ProfileType, ratio: f64) -> String {
    let band = SavingsBand::classify(ratio);
    let noun = profile.income_noun();
    match band {
        SavingsBand::Overspending => format!(
            "{}: You're spending {:.1}% more than your {}!",
            band.tag(),
            ratio.abs(),
            noun
        ),
        SavingsBand::BelowTarget => format!(
            "{}: You're saving {:.1}% of your {}. Try to save at least 20%.",
            band.tag(),
            ratio,
            noun
        ),
        SavingsBand::OnTarget => format!(
            "{}: You're saving {:.1}% of your {}.",
            band.tag(),
            ratio,
            noun
        ),
    }
}

/// Sentence naming the highest-spending category
pub fn dominant_message(entry: &ExpenseEntry, currency: &str) -> String {
    format!(
        "Your highest spending is on {} ({}). {}",
        entry.category,
        entry.amount.format_with_symbol(currency),
        REDUCE_SPENDING_HINT
    )
}
