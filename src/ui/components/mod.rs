//! Reusable UI components.
//!
//! ## Components
//!
//! - `InputField` - labelled text input with focus, masking and multi-line wrap
//! - `TabSelector` - horizontal tabs with a `▶` marker

mod input_field;
mod tab_selector;

pub use input_field::{input_field_height, render_input_field, InputFieldConfig};
pub use tab_selector::render_tab_selector;
