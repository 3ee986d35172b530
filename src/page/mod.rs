pub mod date_formatting;
pub mod flag_emoji;
pub mod html_generator;
pub mod meta_tags;

pub use html_generator::HtmlGenerator;
