pub mod column;
pub mod table;
pub mod text;

pub use column::Column;
pub use table::TableBuilder;
pub use text::Text;
