pub mod button;
pub mod input;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use input::Input;
pub use select::LookupSelect;
pub use textarea::Textarea;
