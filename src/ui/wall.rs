//! Text rendering of a loaded wall for the terminal.

use console::style;
use std::fmt::Write;

use poster_wall_common::{LayoutField, Storage, WallRuntime};

use super::icons::{LINK, POSTER};

/// Plain-text listing of the reconciled wall state.
pub fn format_wall<S: Storage>(runtime: &WallRuntime<S>) -> String {
    let mut out = String::new();
    let config = runtime.config();
    let settings = runtime.settings();

    let _ = writeln!(out, "{}", config.wall_description);
    let _ = writeln!(out);

    let layout: Vec<String> = LayoutField::ALL
        .iter()
        .map(|&field| format!("{}={}px", field, settings.get(field)))
        .collect();
    let _ = writeln!(out, "Layout: {}", layout.join(" "));
    let _ = writeln!(
        out,
        "Titles: {}",
        if runtime.show_titles() { "shown" } else { "hidden" }
    );
    let _ = writeln!(out);

    let width = runtime.cards().len().to_string().len();
    for (i, card) in runtime.cards().iter().enumerate() {
        let _ = write!(
            out,
            "  {:>width$}. {}  \"{}\"",
            i,
            card.id,
            card.title,
            width = width
        );
        if card.has_link() {
            let _ = write!(out, "  {}{}", LINK, card.link);
        }
        let _ = writeln!(out);
    }

    out
}

/// Print the wall header and listing to stdout.
pub fn print_wall<S: Storage>(runtime: &WallRuntime<S>) {
    println!();
    println!(
        "{}{} ({} cards)",
        POSTER,
        style(&runtime.config().wall_title).bold().cyan(),
        runtime.cards().len()
    );
    print!("{}", format_wall(runtime));
    println!();
}
