pub mod completion;
pub mod validate;
