use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

pub fn get_styles() -> Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

pub mod colors {
    use crossterm::style::Color;

    pub const CYAN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
}

/// Print a boxed banner sized to the title's display width.
pub fn print_banner(title: &str) {
    let inner = title.width() + 2;
    println!("╔{}╗", "═".repeat(inner));
    println!("║ {} ║", title.with(colors::CYAN).bold());
    println!("╚{}╝", "═".repeat(inner));
}

/// Print one numbered song row; positions are shown 1-based.
pub fn print_song_row(position: usize, song: &impl std::fmt::Display) {
    println!(
        "{} {}",
        format!("{:>4}.", position).with(colors::DIM),
        song
    );
}

pub fn print_ok(message: &str) {
    println!("{}", message.with(colors::GREEN));
}

pub fn print_miss(message: &str) {
    println!("{}", message.with(colors::RED));
}
