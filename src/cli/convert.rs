//! Filter tree -> JSON conversion utilities

use serde_json::{Map, Number, Value};

use crate::ast::{Argument, Function, FunctionKind};

/// Convert a parsed call to `{"function": name, "kind": ..., "args": [...]}`.
///
/// `kind` is omitted for names outside the operator and comparator vocabularies.
pub fn function_to_json(function: &Function) -> Value {
    let mut obj = Map::new();
    obj.insert("function".to_string(), Value::String(function.name.clone()));

    match function.kind() {
        Some(FunctionKind::Operator(_)) => {
            obj.insert("kind".to_string(), Value::String("operator".to_string()));
        }
        Some(FunctionKind::Comparator(_)) => {
            obj.insert("kind".to_string(), Value::String("comparator".to_string()));
        }
        None => {}
    }

    obj.insert(
        "args".to_string(),
        Value::Array(function.args.iter().map(argument_to_json).collect()),
    );
    Value::Object(obj)
}

/// Convert a single argument; literals become JSON scalars
pub fn argument_to_json(arg: &Argument) -> Value {
    match arg {
        Argument::Function(func) => function_to_json(func),
        Argument::String(s) => Value::String(s.clone()),
        Argument::Integer(n) => Value::Number((*n).into()),
        Argument::Float(n) => Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Argument::Boolean(b) => Value::Bool(*b),
    }
}
