mod hashes;
mod introspection;
mod registry;
mod spec;
mod strings;

pub use registry::{all, lookup, CommandMetadata};
pub use spec::{CommandDoc, CommandSpec};

use crate::resp::Value;
use crate::store::Store;

pub enum Dispatch {
    Ran(Value),
    UnknownCommand(String),
    WrongArity(String),
}

pub fn dispatch(request: &Value, store: &Store) -> Dispatch {
    let tokens = match request {
        Value::Array(Some(items)) => items,
        _ => return Dispatch::UnknownCommand(String::new()),
    };

    let name = match tokens.first().and_then(|v| v.as_bulk_str()) {
        Some(s) => s.to_uppercase(),
        None => return Dispatch::UnknownCommand(String::new()),
    };

    let metadata = match registry::lookup(&name) {
        Some(m) => m,
        None => return Dispatch::UnknownCommand(name),
    };

    if !metadata.spec.matches_arity(tokens.len()) {
        return Dispatch::WrongArity(name);
    }

    Dispatch::Ran((metadata.handler)(request, store))
}
