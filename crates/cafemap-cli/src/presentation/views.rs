use crate::presentation::formatters::{format_distance, format_rating, star_row};
use crate::presentation::view_models::CardViewModel;
use cafemap_engine::AppState;
use cafemap_types::ColorTier;
use owo_colors::OwoColorize;

pub fn print_header(total: usize, state: &AppState, color: bool) {
    let title = if color {
        "cafemap".bold().to_string()
    } else {
        "cafemap".to_string()
    };

    let filter = if state.filter_workable {
        "workable only"
    } else {
        "all"
    };

    println!(
        "{} · Total: {} · sort: {} · filter: {}",
        title, total, state.sort_mode, filter
    );
    println!();
}

pub fn print_cards(cards: &[CardViewModel], color: bool) {
    for card in cards {
        print_card(card, color);
    }
}

fn print_card(card: &CardViewModel, color: bool) {
    let bullet = if card.selected { "▶" } else { "●" };
    let name = if color {
        card.name.bold().to_string()
    } else {
        card.name.clone()
    };

    println!(
        "{} {}  ({})",
        paint(card.tier, bullet, color),
        name,
        card.id
    );
    println!(
        "    {} {} · flat white: {}",
        star_row(card.stars_filled),
        format_rating(card.overall),
        format_rating(card.secondary)
    );

    let mut status = workable_badge(card.workable, color);
    if let Some(km) = card.distance_km {
        status.push_str(" · ");
        status.push_str(&format_distance(km));
        status.push_str(" away");
    }
    println!("    {}", status);
    println!();
}

pub fn print_detail(card: &CardViewModel, color: bool) {
    let name = if color {
        card.name.bold().to_string()
    } else {
        card.name.clone()
    };

    println!("{}  ({})", name, card.id);
    println!("  Coordinates: {}", card.coordinates);
    println!(
        "  Rating: {} {}",
        star_row(card.stars_filled),
        format_rating(card.overall)
    );
    println!("  Flat white: {}", format_rating(card.secondary));
    println!("  {}", workable_badge(card.workable, color));
    if let Some(km) = card.distance_km {
        println!("  Distance: {} ({})", format_distance(km), card.tier);
    }
    if card.selected {
        println!("  Selected");
    }
}

// Distinct label text per state; the original card always said "Workable"
// and distinguished the states by color alone, which reads as a defect.
fn workable_badge(workable: bool, color: bool) -> String {
    match (workable, color) {
        (true, true) => "Workable".green().to_string(),
        (true, false) => "Workable".to_string(),
        (false, true) => "Not workable".red().to_string(),
        (false, false) => "Not workable".to_string(),
    }
}

fn paint(tier: ColorTier, text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }

    match tier {
        ColorTier::ExcellentDark => text.green().bold().to_string(),
        ColorTier::Excellent => text.green().to_string(),
        ColorTier::Good => text.bright_green().to_string(),
        ColorTier::Fair => text.yellow().to_string(),
        ColorTier::Poor => text.red().to_string(),
        ColorTier::Unknown => text.dimmed().to_string(),
    }
}
