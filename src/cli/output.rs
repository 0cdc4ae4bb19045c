use crate::stack::Cake;
use console::style;
use std::fmt::Display;

/// Marker printed after the highlighted entry (top layer, current cake)
pub const CURRENT_MARKER: &str = "<--";

/// Centralized output formatting utilities for consistent CLI presentation
pub struct Output;

impl Output {
    /// Print a success message in green
    pub fn success<T: Display>(message: T) {
        println!("{}", style(message).green());
    }

    /// Print an error, empty-state or cancellation message in red
    pub fn error<T: Display>(message: T) {
        println!("{}", style(message).red());
    }

    /// Print a transitional note in yellow
    pub fn warning<T: Display>(message: T) {
        println!("{}", style(message).yellow());
    }

    /// Print a highlighted entry in cyan, followed by the current marker
    pub fn highlight<T: Display>(entry: T) {
        println!("{}", style(format!("{entry} {CURRENT_MARKER}")).cyan());
    }

    /// Print an unstyled line
    pub fn plain<T: Display>(message: T) {
        println!("{message}");
    }

    /// Print a `label: value` header with the value in magenta
    pub fn label<T: Display>(label: &str, value: T) {
        println!("{label}: {}", style(value).magenta());
    }

    /// Print a divider wide enough to underline a `label: value` header
    pub fn divider(width: usize) {
        println!("{}", "-".repeat(width));
    }

    /// Print the cake called `name`, top layer first and highlighted
    pub fn cake(name: &str, cake: &Cake) {
        Self::label("Cake", name);
        Self::divider(name.chars().count() + 6);

        if cake.is_empty() {
            Self::error("No layers in the cake.");
            return;
        }

        for (index, layer) in cake.layers().enumerate() {
            if index == 0 {
                Self::highlight(layer);
            } else {
                Self::plain(layer);
            }
        }
    }

    /// Print the bakery listing, marking the current cake
    pub fn cakes(names: &[String], current: &str) {
        for name in names {
            if name == current {
                Self::highlight(name);
            } else {
                Self::plain(name);
            }
        }
    }
}
