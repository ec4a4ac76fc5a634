//! # Presentation Layer
//!
//! Everything the user sees: plain text, JSON, and the interactive gallery.
//! It follows an adaptation of **MVVM (Model-View-ViewModel)** so the browsing
//! state in `folio_engine` never leaks formatting concerns.
//!
//! ## Data Flow
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (Controller)    (Converter)       (Contract)        (View)      (Console/JSON/TUI)
//! ```
//!
//! ## Directory Guide
//!
//! ### `view_models/`
//! * Structs that define *what* the user can see. Pure data, `Serialize`.
//! * No domain types: ids, categories and sections are plain strings here.
//! * The JSON test: "If I print this struct as JSON, is it clean and machine-readable?"
//!
//! ### `presenters/`
//! * Pure functions from `Browser`/`Project` state to view models.
//! * Tab counts, tool badge truncation and fallback notices are decided here.
//!
//! ### `views/`
//! * `fmt::Display` implementations for the plain text layout.
//!
//! ### `renderers/`
//! * `console.rs`: prints a `CommandResultViewModel` as text or JSON.
//! * `tui/`: the interactive gallery on top of ratatui.
//!
//! ### `formatters/`
//! * Small string helpers shared by views and widgets.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Change how many tool badges a card shows | **`presenters/`** |
//! | Change the text layout of a card | **`views/`** |
//! | Change a key binding or a widget | **`renderers/tui/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
