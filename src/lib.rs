// Domain layer - grid, cells, seed patterns
pub mod domain;

// Application layer - simulation state and clock
pub mod application;

// Infrastructure layer - configuration, rendering, input
pub mod config;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::GameState;
pub use config::Config;
pub use domain::{Cell, Grid, Pattern, Transition, presets};
