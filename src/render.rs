use std::time::Instant;

use colored::{Color, Colorize as _};

use crate::{
    board::{BoardView, CardView, ModalView},
    filter::{ChipGroup, FilterControls},
};

/// Paints one frame. An open modal covers the board entirely, the terminal
/// analog of locking background scroll behind an overlay.
pub fn paint(view: &BoardView) {
    if let Some(modal) = &view.modal {
        paint_modal(modal);
    } else {
        paint_board(view);
    }
    if let Some(toast) = &view.toast {
        if toast.visible(Instant::now()) {
            println!("\n{}", toast.message.cyan().bold());
        }
    }
}

fn paint_board(view: &BoardView) {
    println!("\n{}", view.count_label.bold());

    if view.cards.is_empty() {
        println!("\n  Nothing matches your filters. Try `clear` to reset them.");
        return;
    }

    for card in &view.cards {
        paint_card(card);
    }

    if view.total_pages > 1 {
        let buttons = (1..=view.total_pages)
            .map(|page| {
                if page == view.current_page {
                    format!("[{page}]").bold().to_string()
                } else {
                    format!(" {page} ")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("\nPages: {buttons}");
    }
}

fn paint_card(card: &CardView) {
    let accent = accent_color(&card.color);
    println!(
        "\n [{}] {} {}{}",
        card.id.to_string().bold(),
        card.logo.color(accent).bold(),
        card.title.bold(),
        if card.saved { " 🔖" } else { "" },
    );
    println!("     {}", card.company.italic());
    println!("     {}", card.tags.join("  ").bright_black());
    println!("     {}", card.description);
    println!(
        "     {}  {}",
        card.salary.yellow(),
        card.posted.bright_black(),
    );
}

fn paint_modal(modal: &ModalView) {
    let accent = accent_color(&modal.color);
    println!(
        "\n {} {}",
        modal.logo.color(accent).bold(),
        modal.title.bold().underline(),
    );
    println!(" {}", modal.company.italic());
    println!("\n {}", modal.tags.join("  ").bright_black());
    println!("\n {}", modal.description);
    if !modal.about.is_empty() {
        println!("\n {}\n {}", "About the Role".bold(), modal.about);
    }
    if !modal.requirements.is_empty() {
        println!("\n {}", "Requirements".bold());
        for requirement in &modal.requirements {
            println!("   • {requirement}");
        }
    }
    println!(
        "\n {}   {}",
        if modal.saved {
            "🔖 Saved!".green().bold()
        } else {
            "🔖 Save Job".normal()
        },
        format!("(`save {}` to toggle, `close` to go back)", modal.id).bright_black(),
    );
}

/// Paints the control surface with the active selection in each group.
pub fn paint_controls(controls: &FilterControls) {
    println!("\n{}", "Filters".bold());
    println!("  search:     {}", quoted(&controls.sidebar_search));
    println!(
        "  location:   {}",
        options_line(controls.locations(), &controls.location),
    );
    println!("  category:   {}", chip_line(&controls.category));
    println!("  experience: {}", chip_line(&controls.experience));
    println!("  type:       {}", chip_line(&controls.job_type));
    println!("  sort:       {}", controls.sort);
}

fn chip_line(group: &ChipGroup) -> String {
    options_line(group.options(), group.value())
}

fn options_line(options: &[String], active: &str) -> String {
    let mut parts = vec![marked("All", active.is_empty())];
    for option in options {
        parts.push(marked(option, option == active));
    }
    parts.join("  ")
}

fn marked(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]").bold().to_string()
    } else {
        label.to_string()
    }
}

fn quoted(text: &str) -> String {
    if text.is_empty() {
        "(none)".to_string()
    } else {
        format!("\"{text}\"")
    }
}

/// Parses a `#rrggbb` accent into a terminal color, falling back to white.
fn accent_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Color::White;
    }
    let channel = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(u8::MAX);
    Color::TrueColor {
        r: channel(0..2),
        g: channel(2..4),
        b: channel(4..6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_parses_hex_colors() {
        assert_eq!(
            accent_color("#ff8800"),
            Color::TrueColor {
                r: 255,
                g: 136,
                b: 0,
            },
        );
        assert_eq!(accent_color("6366f1"), Color::TrueColor {
            r: 0x63,
            g: 0x66,
            b: 0xf1,
        });
    }

    #[test]
    fn accent_falls_back_on_garbage() {
        assert_eq!(accent_color(""), Color::White);
        assert_eq!(accent_color("#zzzzzz"), Color::White);
        assert_eq!(accent_color("#fff"), Color::White);
    }
}
