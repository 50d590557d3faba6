//! # Prompt Commands
//!
//! Parses a line typed at the assistant prompt into an action invocation.
//!
//! ```text
//! help
//! addFriend name="Mary Ann"
//! splitBill friendId=933372 amount=15
//! splitBill {"friendId": 933372, "amount": 15}
//! ```
//!
//! `key=value` arguments are converted to the parameter's declared kind, so
//! `amount=15` becomes the JSON number `15`.

use serde_json::{Map, Value};

use super::action::{ActionError, ParamKind};
use super::bridge::LocalBridge;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Invoke { action: String, args: Value },
}

/// Parse `line` against the actions registered on `bridge`.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse(line: &str, bridge: &LocalBridge) -> Result<Option<Command>, ActionError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    if name.eq_ignore_ascii_case("help") {
        return Ok(Some(Command::Help));
    }

    let action = bridge.action(name).ok_or_else(|| ActionError::UnknownAction {
        name: name.to_string(),
        available: bridge.action_names(),
    })?;

    let args = if rest.starts_with('{') {
        serde_json::from_str(rest)
            .map_err(|e| ActionError::invalid(name, "<arguments>", e.to_string()))?
    } else {
        let mut object = Map::new();
        for token in tokenize(rest) {
            let (key, raw) = token.split_once('=').ok_or_else(|| {
                ActionError::invalid(name, token.as_str(), "expected key=value")
            })?;
            let param = action
                .parameters()
                .iter()
                .find(|p| p.name == key)
                .ok_or_else(|| ActionError::invalid(name, key, "unknown parameter"))?;
            object.insert(key.to_string(), coerce(name, key, param.kind, raw)?);
        }
        Value::Object(object)
    };

    Ok(Some(Command::Invoke {
        action: name.to_string(),
        args,
    }))
}

fn coerce(action: &str, key: &str, kind: ParamKind, raw: &str) -> Result<Value, ActionError> {
    match kind {
        ParamKind::String => Ok(Value::String(raw.to_string())),
        ParamKind::Number => {
            if let Ok(n) = raw.parse::<i64>() {
                return Ok(Value::from(n));
            }
            raw.parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| ActionError::invalid(action, key, "expected number"))
        }
    }
}

/// Split on whitespace, keeping double-quoted runs together and dropping
/// the quotes.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
