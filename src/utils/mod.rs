pub mod colors;
pub mod path;
pub mod table;
pub mod text;

pub use table::TabWriter;
pub use text::truncate_chars;
