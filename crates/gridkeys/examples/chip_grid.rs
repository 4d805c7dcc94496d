//! Drives a chip grid from the command line and prints the layout after each key.
//!
//! Run with: cargo run -p gridkeys --example chip_grid -- down right right left up
//!
//! Set `GRIDKEYS_CONFIG` to a TOML file to pick the direction (the system
//! locale decides otherwise). Set `RUST_LOG` (e.g. `gridkeys=trace`) to watch
//! the manager work.

use std::sync::Arc;

use gridkeys::keyboard::{Key, KeyPressEvent};
use gridkeys::{
    Direction, FocusableCell, GridFocusKeyManager, GridKeyConfig, GridRow, LiveList,
};
use tracing_subscriber::EnvFilter;

struct Chip {
    label: String,
}

impl FocusableCell for Chip {
    fn focus(&self) {
        println!("  focus -> {}", self.label);
    }
}

struct ChipRow {
    cells: Vec<Arc<Chip>>,
}

impl GridRow for ChipRow {
    type Cell = Chip;

    fn cells(&self) -> &[Arc<Chip>] {
        &self.cells
    }
}

fn chip_row(labels: &[&str]) -> Arc<ChipRow> {
    Arc::new(ChipRow {
        cells: labels
            .iter()
            .map(|label| {
                Arc::new(Chip {
                    label: (*label).to_string(),
                })
            })
            .collect(),
    })
}

fn parse_key(word: &str) -> Option<Key> {
    match word {
        "up" => Some(Key::ArrowUp),
        "down" => Some(Key::ArrowDown),
        "left" => Some(Key::ArrowLeft),
        "right" => Some(Key::ArrowRight),
        "tab" => Some(Key::Tab),
        _ => None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var_os("GRIDKEYS_CONFIG") {
        Some(path) => GridKeyConfig::load(path).unwrap_or_else(|err| {
            eprintln!("ignoring config: {err}");
            GridKeyConfig::default()
        }),
        None => GridKeyConfig::default().with_direction(Direction::system()),
    };

    let rows = Arc::new(LiveList::new(vec![
        chip_row(&["apple", "remove"]),
        chip_row(&["banana", "remove"]),
        chip_row(&["cherry", "remove"]),
    ]));
    let manager = GridFocusKeyManager::new(Arc::clone(&rows)).with_config(&config);
    manager.change().connect(|position| println!("  change -> {position}"));

    println!("direction: {}", manager.directionality());
    print!("{}", manager.debug_layout());

    for word in std::env::args().skip(1) {
        let Some(key) = parse_key(&word) else {
            eprintln!("unknown key {word:?}");
            continue;
        };

        let mut event = KeyPressEvent::from_key(key);
        let handled = manager.on_keydown(&mut event);
        println!("{word} (handled: {handled})");
        print!("{}", manager.debug_layout());
    }
}
