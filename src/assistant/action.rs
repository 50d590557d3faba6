use serde_json::{json, Map, Value};
use std::fmt::{self, Debug};
use thiserror::Error;

use crate::ledger::{Directory, IdGenerator, Selection};

/// Errors raised while dispatching an assistant action.
#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error("unknown action '{name}' (available: {})", .available.join(", "))]
    UnknownAction { name: String, available: Vec<String> },

    #[error("missing required argument '{argument}' for {action}")]
    MissingArgument { action: String, argument: String },

    #[error("invalid argument '{argument}' for {action}: {reason}")]
    InvalidArgument {
        action: String,
        argument: String,
        reason: String,
    },
}

impl ActionError {
    pub fn invalid(
        action: impl Into<String>,
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            action: action.into(),
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

/// Declared type of an action parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Number => value.is_number(),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
}

/// Mutable view of the ledger handed to an action handler.
pub struct ActionContext<'a> {
    pub directory: &'a mut Directory,
    pub selection: &'a mut Selection,
    pub ids: &'a mut dyn IdGenerator,
    /// Base URL new avatars are derived from
    pub avatar_base: &'a str,
}

/// An action the assistant can call.
pub trait Action: Send + Sync + Debug {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn parameters(&self) -> &[Parameter];

    /// Apply the action. Arguments have already been checked against
    /// [`Action::parameters`].
    fn handle(&self, ctx: &mut ActionContext<'_>, args: &Value) -> Result<(), ActionError>;

    /// JSON schema of the parameter list.
    fn parameters_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.parameters() {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.as_str(),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(Value::from(param.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Check `args` against the declared parameters.
    fn validate_args(&self, args: &Value) -> Result<(), ActionError> {
        let Some(object) = args.as_object() else {
            return Err(ActionError::invalid(
                self.name(),
                "<arguments>",
                "expected a JSON object",
            ));
        };

        for param in self.parameters() {
            match object.get(param.name) {
                None | Some(Value::Null) if param.required => {
                    return Err(ActionError::MissingArgument {
                        action: self.name().to_string(),
                        argument: param.name.to_string(),
                    });
                }
                Some(value) if !value.is_null() && !param.kind.matches(value) => {
                    return Err(ActionError::invalid(
                        self.name(),
                        param.name,
                        format!("expected {}", param.kind),
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}
