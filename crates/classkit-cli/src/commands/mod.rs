pub mod clock;
pub mod config;
pub mod countdown;
pub mod draw;
pub mod group;
pub mod session;

use classkit_core::{Config, Drawer, Grouper};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Drawer seeded from `random.seed` when configured.
pub fn drawer(config: &Config) -> Drawer {
    match config.random.seed {
        Some(seed) => Drawer::seeded(seed),
        None => Drawer::new(),
    }
}

/// Grouper seeded from `random.seed` when configured.
pub fn grouper(config: &Config) -> Grouper {
    match config.random.seed {
        Some(seed) => Grouper::seeded(seed),
        None => Grouper::new(),
    }
}

pub fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
}
