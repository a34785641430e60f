//! `grubl options`: prints what `search` accepts.

use grubl_core::options::{emoji_for, FALLBACK_EMOJI, PLACE_TYPE_OPTIONS, RADIUS_OPTIONS};
use grubl_core::PriceLevel;

pub(crate) fn print_options() {
    println!("Place types (--type):");
    for opt in PLACE_TYPE_OPTIONS {
        let emoji = emoji_for(opt.code).unwrap_or(FALLBACK_EMOJI);
        println!("  {emoji} {:<22} {}", opt.code, opt.label);
    }

    println!("\nRadii in meters (--radius):");
    let radii: Vec<String> = RADIUS_OPTIONS.iter().map(u32::to_string).collect();
    println!("  {}", radii.join(", "));

    println!("\nPrice tiers (--price):");
    for level in PriceLevel::SELECTABLE {
        println!(
            "  {:<16} {}",
            level.cli_name(),
            level.label().unwrap_or_default()
        );
    }
}
