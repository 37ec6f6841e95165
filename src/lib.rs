pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod transform;
pub mod value;

pub use ast::{Assignments, Entry, Group, Node, Pair, Position};
pub use config::TomlConfig;
pub use error::{AccessError, ErrorKind, TransformError};
pub use transform::{apply, EscapePolicy, Transform, TransformOptions};
pub use value::{Table, Value};
