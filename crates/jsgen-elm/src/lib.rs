pub mod emitters;
pub mod generator;
pub mod names;
pub mod type_mapper;

pub use generator::{ElmEmitter, ElmError};
