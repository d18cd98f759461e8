pub mod label;
pub mod record;

pub use label::Label;
pub use record::{LabeledTitle, TitleRecord};
