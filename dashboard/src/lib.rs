//! # CryptoHub Market Dashboard - Library Root
//!
//! A **native desktop GUI** for tracking cryptocurrency markets: live
//! prices, incremental search with suggestions, and an infinitely scrolling
//! coin table. This library crate contains all modules used by the binary
//! crate (`main.rs`).
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui_extras   - HTTP image loading for coin icons     │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!                          │ HTTPS/JSON
//!                          ▼
//!                 ┌─────────────────┐
//!                 │  CoinGecko API  │
//!                 └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application orchestration
//!   - Event-driven architecture with async fetch tasks
//!   - Screen navigation and shared state
//!
//! - **market**: The list core
//!   - `search`: suggestion and committed-filter matching
//!   - `pagination`: visible-row accounting
//!   - `list`: the mode state machine tying them together
//!
//! - **services**: External integrations
//!   - `api`: CoinGecko HTTP client
//!
//! - **ui**: Rendering framework
//!   - `screens`: Home and coin detail
//!   - `widgets`: nav bar, status bar, tables, icons
//!   - `theme`: dark/light palette with persistence
//!
//! - **core**: Error types and the market-data service trait
//!
//! - **utils**: Tokio runtime bridge and logging setup
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   ├── market (list state machine)
//!   │   └── services::api (HTTP requests)
//!   │
//!   └── ui (rendering)
//!       ├── screens::{home, coin_detail}
//!       ├── widgets::*
//!       └── theme
//! ```

pub mod app;
pub mod core;
pub mod market;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
pub use ui::DashboardApp;
