//! CLI command listing each profile's expense categories

use crate::models::ProfileType;

/// Handle `spend categories`; lists every profile when none is given
pub fn handle_categories_command(profile: Option<ProfileType>) {
    let profiles = match profile {
        Some(profile) => vec![profile],
        None => ProfileType::ALL.to_vec(),
    };

    for (i, profile) in profiles.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({})", profile, profile.income_label());
        for category in profile.categories() {
            println!("  - {}", category);
        }
    }
}
