use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::action::{Action, ActionContext, ActionError};
use crate::ledger::Directory;

pub const FRIENDS_CONTEXT_DESCRIPTION: &str =
    "Current friends with IDs, names, images and balances";

/// Read-only context published to the assistant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readable {
    pub description: String,
    pub value: Value,
}

impl Readable {
    /// The full friend list, unfiltered.
    pub fn friends(directory: &Directory) -> Self {
        Self {
            description: FRIENDS_CONTEXT_DESCRIPTION.to_string(),
            value: directory.snapshot(),
        }
    }
}

/// Registration hooks offered by an assistant integration.
pub trait AssistantBridge {
    /// Replace the context the assistant reads from.
    fn publish_readable(&mut self, readable: Readable);

    fn register_action(&mut self, action: Box<dyn Action>);
}

/// In-process bridge: keeps the latest context and dispatches actions by
/// name.
#[derive(Debug, Default)]
pub struct LocalBridge {
    context: Option<Readable>,
    actions: Vec<Box<dyn Action>>,
}

impl LocalBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published context.
    pub fn context(&self) -> Option<&Readable> {
        self.context.as_ref()
    }

    pub fn actions(&self) -> impl Iterator<Item = &dyn Action> {
        self.actions.iter().map(|a| {
            let action: &dyn Action = a.as_ref();
            action
        })
    }

    pub fn action(&self, name: &str) -> Option<&dyn Action> {
        self.actions().find(|a| a.name() == name)
    }

    pub fn action_names(&self) -> Vec<String> {
        self.actions().map(|a| a.name().to_string()).collect()
    }

    /// Names, descriptions and parameter schemas of every registered action.
    pub fn manifest(&self) -> Value {
        let actions: Vec<Value> = self
            .actions()
            .map(|a| {
                json!({
                    "name": a.name(),
                    "description": a.description(),
                    "parameters": a.parameters_schema(),
                })
            })
            .collect();
        Value::Array(actions)
    }

    /// Validate `args` and run the named action against the ledger.
    pub fn dispatch(
        &self,
        name: &str,
        args: &Value,
        ctx: &mut ActionContext<'_>,
    ) -> Result<(), ActionError> {
        let action = self.action(name).ok_or_else(|| ActionError::UnknownAction {
            name: name.to_string(),
            available: self.action_names(),
        })?;

        action.validate_args(args)?;
        debug!(action = name, %args, "Dispatching assistant action");
        action.handle(ctx, args)?;
        info!(action = name, "Assistant action applied");
        Ok(())
    }
}

impl AssistantBridge for LocalBridge {
    fn publish_readable(&mut self, readable: Readable) {
        self.context = Some(readable);
    }

    fn register_action(&mut self, action: Box<dyn Action>) {
        // Re-registering a name replaces the earlier handler
        self.actions.retain(|a| a.name() != action.name());
        self.actions.push(action);
    }
}
