//! # TUI Components
//!
//! All UI components for the calculator form.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top line with app name and key hints
//! - `ButtonRow`: The four action buttons
//! - `ErrorBanner`: Error message region
//! - `ResultPanel`: The active result card, or a hint
//!
//! ### Event-Translating Components
//!
//! - `NumberField`: Renders one input and turns key presses into `FieldEvent`s.
//!   Its text is owned by core state, so the field holds no buffer of its own.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into global
//! state. `ui::draw_ui` builds them fresh from `Calculator` + `TuiState` on
//! every frame:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ErrorBanner { message: error }.render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! error_banner.render(frame, area); // reads from global Calculator
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top line)
//! ├── number_field.rs   (Number A / Number B)
//! ├── button_row.rs     (Action buttons)
//! ├── error_banner.rs   (Error region)
//! └── result_panel.rs   (Results region)
//! ```

pub mod button_row;
pub mod error_banner;
pub mod number_field;
pub mod result_panel;
mod title_bar;

pub use button_row::{Button, ButtonRow};
pub use error_banner::ErrorBanner;
pub use number_field::{FieldEvent, NumberField};
pub use result_panel::ResultPanel;
pub use title_bar::TitleBar;
