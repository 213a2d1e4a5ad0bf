pub mod entity;
pub mod function;
pub mod source_file;

pub use entity::{Entity, EntityKind};
pub use function::Function;
pub use source_file::SourceFile;
