pub mod convert;
pub mod path;
pub mod text;
