use crate::resp::Value;
use crate::store::Store;

use super::registry;

// COMMAND [DOCS] [name]
pub fn command(request: &Value, _store: &Store) -> Value {
    let args = request.args();

    if args.is_empty() {
        return Value::array(all_specs());
    }

    let first = args[0].as_bulk_str().unwrap_or_default().to_uppercase();
    if first == "DOCS" {
        let filter = args.get(1).and_then(|v| v.as_bulk_str()).map(|s| s.to_uppercase());
        return Value::array(all_docs(filter.as_deref()));
    }

    let wanted = first;
    match registry::lookup(&wanted) {
        Some(cmd) => Value::array(vec![cmd.spec.to_value(cmd.name)]),
        None => Value::array(Vec::new()),
    }
}

fn all_specs() -> Vec<Value> {
    let mut out = Vec::new();
    for cmd in registry::all() {
        out.push(cmd.spec.to_value(cmd.name));
        for sub in cmd.subcommands {
            out.push(sub.spec.to_value(sub.name));
        }
    }
    out
}

fn all_docs(filter: Option<&str>) -> Vec<Value> {
    let matches = |name: &str| filter.map_or(true, |f| f == name);
    let mut out = Vec::new();
    for cmd in registry::all() {
        if matches(cmd.name) {
            out.push(cmd.doc.to_value(cmd.name));
        }
        for sub in cmd.subcommands {
            if matches(sub.name) {
                out.push(sub.doc.to_value(sub.name));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(tokens: &[&str]) -> Value {
        Value::array(tokens.iter().map(|t| Value::bulk(*t)).collect())
    }

    #[test]
    fn no_args_lists_every_command_including_subcommands() {
        let store = Store::new();
        let result = command(&req(&["COMMAND"]), &store);
        match result {
            Value::Array(Some(items)) => {
                assert_eq!(items.len(), registry::all().len() + 1);
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn single_name_filters_to_one_spec() {
        let store = Store::new();
        let result = command(&req(&["COMMAND", "get"]), &store);
        match result {
            Value::Array(Some(items)) => assert_eq!(items.len(), 1),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn unknown_name_filters_to_empty_array() {
        let store = Store::new();
        let result = command(&req(&["COMMAND", "nope"]), &store);
        assert_eq!(result, Value::array(Vec::new()));
    }

    #[test]
    fn docs_with_no_filter_lists_every_doc() {
        let store = Store::new();
        let result = command(&req(&["COMMAND", "DOCS"]), &store);
        match result {
            Value::Array(Some(items)) => {
                assert_eq!(items.len(), registry::all().len() + 1);
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn docs_with_filter_returns_only_that_command() {
        let store = Store::new();
        let result = command(&req(&["COMMAND", "DOCS", "GET"]), &store);
        match result {
            Value::Array(Some(items)) => assert_eq!(items.len(), 1),
            other => panic!("expected array, got {other:?}"),
        }
    }
}
