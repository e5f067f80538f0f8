pub mod layout;
pub mod text_input;

pub use layout::{center_fixed, center_popup, columns, hit};
pub use text_input::TextInput;
