//! Command-line argument layer
//!
//! Understands the usual option shapes: `--key value`, `--key=value`,
//! `--flag` (true), `--no-flag` (false) and `-abc` (a, b and c true). Keys
//! containing `:` nest. Everything else is positional and lands in the array
//! at key `_`. A bare `--` makes every following argument positional.

use serde_json::{Map, Number, Value};

use crate::namespace::{path, split_key, Layer, Source};

/// Key holding positional arguments.
pub const POSITIONAL_KEY: &str = "_";

pub fn args_layer<I, S>(args: I) -> Layer
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Layer::new(Source::Args, parse_args(args))
}

pub fn parse_args<I, S>(args: I) -> Map<String, Value>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tree = Map::new();
    let mut positional = Vec::new();
    let mut args = args.into_iter().map(Into::into).peekable();

    while let Some(arg) = args.next() {
        if arg == "--" {
            positional.extend(args.by_ref().map(|a| coerce(&a)));
            break;
        }

        if let Some(long) = arg.strip_prefix("--") {
            if let Some((key, value)) = long.split_once('=') {
                set(&mut tree, key, coerce(value));
            } else if let Some(negated) = long.strip_prefix("no-").filter(|k| !k.is_empty()) {
                set(&mut tree, negated, Value::Bool(false));
            } else if let Some(value) = args.next_if(|next| !is_option(next)) {
                set(&mut tree, long, coerce(&value));
            } else {
                set(&mut tree, long, Value::Bool(true));
            }
            continue;
        }

        if let Some(short) = arg.strip_prefix('-').filter(|s| !s.is_empty() && !is_number(s)) {
            let mut chars: Vec<char> = short.chars().collect();
            let last = chars.pop();
            for c in chars {
                set(&mut tree, &c.to_string(), Value::Bool(true));
            }
            if let Some(c) = last {
                let value = match args.next_if(|next| !is_option(next)) {
                    Some(value) => coerce(&value),
                    None => Value::Bool(true),
                };
                set(&mut tree, &c.to_string(), value);
            }
            continue;
        }

        positional.push(coerce(&arg));
    }

    if !positional.is_empty() {
        tree.insert(POSITIONAL_KEY.to_string(), Value::Array(positional));
    }
    tree
}

fn set(tree: &mut Map<String, Value>, key: &str, value: Value) {
    path::insert(tree, &split_key(key), value);
}

fn is_option(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) => !rest.is_empty() && !is_number(rest),
        None => false,
    }
}

fn is_number(s: &str) -> bool {
    s.parse::<f64>().map(f64::is_finite).unwrap_or(false) && !s.chars().any(char::is_alphabetic)
}

/// Type a raw argument value: booleans and numbers are recognized, anything
/// else stays a string.
///
/// A value only becomes a number when the number prints back as the exact
/// same text, so `0123`, `007`, `1.50`, `+5` and integers beyond `i64` stay
/// strings.
pub fn coerce(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => exact_number(raw).map_or_else(|| Value::String(raw.to_string()), Value::Number),
    }
}

fn exact_number(raw: &str) -> Option<Number> {
    let number = match raw.parse::<i64>() {
        Ok(int) => Number::from(int),
        Err(_) => Number::from_f64(raw.parse::<f64>().ok()?)?,
    };
    (number.to_string() == raw).then_some(number)
}
