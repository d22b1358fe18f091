use std::collections::HashMap;
use std::sync::OnceLock;

use crate::resp::Value;
use crate::store::Store;

use super::introspection;
use super::spec::{CommandDoc, CommandSpec};
use super::{hashes, strings};

pub type Handler = fn(&Value, &Store) -> Value;

pub struct SubcommandMetadata {
    pub name: &'static str,
    pub spec: CommandSpec,
    pub doc: CommandDoc,
}

pub struct CommandMetadata {
    pub name: &'static str,
    pub spec: CommandSpec,
    pub doc: CommandDoc,
    pub handler: Handler,
    pub subcommands: &'static [SubcommandMetadata],
}

static COMMANDS: &[CommandMetadata] = &[
    CommandMetadata {
        name: "PING",
        spec: CommandSpec { arg_count: -1, flags: &["readonly", "fast"], first_key: 1, last_key: 1, steps: 1, acl_categories: &["@connection", "@fast"] },
        doc: CommandDoc { summary: "Returns PONG if no argument is provided, otherwise return a copy of the argument.", since: "1.0.0", group: "connection", complexity: "O(1)" },
        handler: strings::ping,
        subcommands: &[],
    },
    CommandMetadata {
        name: "SET",
        spec: CommandSpec { arg_count: -3, flags: &["write", "fast"], first_key: 1, last_key: 2, steps: 1, acl_categories: &["@write", "@slow", "@string"] },
        doc: CommandDoc { summary: "Set key to hold the string value.", since: "1.0.0", group: "string", complexity: "O(1)" },
        handler: strings::set,
        subcommands: &[],
    },
    CommandMetadata {
        name: "GET",
        spec: CommandSpec { arg_count: 2, flags: &["readonly", "fast"], first_key: 1, last_key: 1, steps: 1, acl_categories: &["@read", "@fast", "@string"] },
        doc: CommandDoc { summary: "Get the value of key.", since: "1.0.0", group: "string", complexity: "O(1)" },
        handler: strings::get,
        subcommands: &[],
    },
    CommandMetadata {
        name: "DEL",
        spec: CommandSpec { arg_count: -2, flags: &["write"], first_key: 1, last_key: 1, steps: 1, acl_categories: &["@write", "@slow", "@keyspace"] },
        doc: CommandDoc { summary: "Removes the specified keys.", since: "1.0.0", group: "keyspace", complexity: "O(1) - O(N)" },
        handler: strings::del,
        subcommands: &[],
    },
    CommandMetadata {
        name: "INCR",
        spec: CommandSpec { arg_count: 2, flags: &["write", "fast"], first_key: 1, last_key: 1, steps: 1, acl_categories: &["@write", "@fast", "@string"] },
        doc: CommandDoc { summary: "Increments the number stored at key by one.", since: "1.0.0", group: "string", complexity: "O(1)" },
        handler: strings::incr,
        subcommands: &[],
    },
    CommandMetadata {
        name: "HSET",
        spec: CommandSpec { arg_count: 4, flags: &["write", "fast"], first_key: 1, last_key: 3, steps: 1, acl_categories: &["@write", "@hash", "@fast"] },
        doc: CommandDoc { summary: "Sets field in the hash stored at key to value.", since: "2.0.0", group: "hash", complexity: "O(1)" },
        handler: hashes::hset,
        subcommands: &[],
    },
    CommandMetadata {
        name: "HGET",
        spec: CommandSpec { arg_count: 3, flags: &["readonly", "fast"], first_key: 1, last_key: 2, steps: 1, acl_categories: &["@read", "@hash", "@fast"] },
        doc: CommandDoc { summary: "Returns the value associated with field in the hash stored at key.", since: "2.0.0", group: "hash", complexity: "O(1)" },
        handler: hashes::hget,
        subcommands: &[],
    },
    CommandMetadata {
        name: "HDEL",
        spec: CommandSpec { arg_count: -3, flags: &["write"], first_key: 1, last_key: 2, steps: 1, acl_categories: &["@write", "@fast", "@hash"] },
        doc: CommandDoc { summary: "Removes the specified fields from the hash stored at key.", since: "2.0.0", group: "keyspace", complexity: "O(N)" },
        handler: hashes::hdel,
        subcommands: &[],
    },
    CommandMetadata {
        name: "HGETALL",
        spec: CommandSpec { arg_count: 2, flags: &["readonly"], first_key: 1, last_key: 1, steps: 1, acl_categories: &["@read", "@hash", "@slow"] },
        doc: CommandDoc { summary: "Returns all fields and values of the hash stored at key.", since: "2.0.0", group: "hash", complexity: "O(N)" },
        handler: hashes::hgetall,
        subcommands: &[],
    },
    CommandMetadata {
        name: "COMMAND",
        spec: CommandSpec { arg_count: -1, flags: &["readonly"], first_key: 1, last_key: 1, steps: 1, acl_categories: &["@connection", "@slow"] },
        doc: CommandDoc { summary: "Return an array with details about every command.", since: "2.8.13", group: "connection", complexity: "O(N)" },
        handler: introspection::command,
        subcommands: &[SubcommandMetadata {
            name: "COMMAND DOCS",
            spec: CommandSpec { arg_count: -2, flags: &["readonly"], first_key: 2, last_key: 2, steps: 1, acl_categories: &["@connection", "@slow"] },
            doc: CommandDoc { summary: "Return documentary information about commands.", since: "7.0.0", group: "connection", complexity: "O(N)" },
        }],
    },
];

pub fn all() -> &'static [CommandMetadata] {
    COMMANDS
}

fn index() -> &'static HashMap<&'static str, &'static CommandMetadata> {
    static INDEX: OnceLock<HashMap<&'static str, &'static CommandMetadata>> = OnceLock::new();
    INDEX.get_or_init(|| COMMANDS.iter().map(|c| (c.name, c)).collect())
}

pub fn lookup(name: &str) -> Option<&'static CommandMetadata> {
    index().get(name).copied()
}
