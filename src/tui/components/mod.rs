//! # TUI Components
//!
//! UI components for the checklist screen.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: "Checklist" header and progress line
//! - `ItemRow`: a single checklist row
//! - `EmptyState`: hint shown while the list is empty
//! - `Footer`: key hints for the current mode
//!
//! ### Stateful Components (Event-Driven)
//!
//! Transient wrappers over persistent state kept in `TuiState`:
//! - `InputBox`: the draft field shown in Entry mode
//! - `ChecklistView`: scrollable list that follows the cursor
//!
//! ## Props-Based Data Flow
//!
//! Components never reach into `ChecklistState`. They render from a
//! `Snapshot` handed down by `ui::draw_ui`, so each one can be drawn into a
//! `TestBackend` in isolation.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (Title and progress)
//! ├── item_row.rs   (Single row renderer)
//! ├── checklist.rs  (Scrollable row container)
//! ├── empty.rs      (Empty-list hint)
//! ├── footer.rs     (Key hints)
//! └── input_box/    (Draft field with wrapping and cursor)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod checklist;
pub mod empty;
pub mod footer;
pub mod input_box;
pub mod item_row;
pub use checklist::{ChecklistView, ChecklistViewState};
pub use empty::EmptyState;
pub use footer::Footer;
pub use input_box::{InputBox, InputBoxState, InputEvent};
