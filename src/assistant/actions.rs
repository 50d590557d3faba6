//! The two actions registered with every assistant bridge.

use serde_json::Value;
use tracing::{debug, info};

use super::action::{Action, ActionContext, ActionError, ParamKind, Parameter};
use super::bridge::AssistantBridge;
use crate::ledger::{avatar, Friend, FriendId};

/// Register `addFriend` and `splitBill` with `bridge`.
pub fn register_default_actions(bridge: &mut dyn AssistantBridge) {
    bridge.register_action(Box::new(AddFriendAction));
    bridge.register_action(Box::new(SplitBillAction));
}

/// Read a whole number out of a JSON number, accepting `15` and `15.0`.
fn whole_number(action: &str, argument: &str, value: &Value) -> Result<i64, ActionError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(ActionError::invalid(
            action,
            argument,
            "expected a whole number",
        )),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AddFriendAction;

const ADD_FRIEND_PARAMS: &[Parameter] = &[Parameter {
    name: "name",
    kind: ParamKind::String,
    description: "Name of the friend",
    required: true,
}];

impl Action for AddFriendAction {
    fn name(&self) -> &str {
        "addFriend"
    }

    fn description(&self) -> &str {
        "Add a new friend to the list"
    }

    fn parameters(&self) -> &[Parameter] {
        ADD_FRIEND_PARAMS
    }

    fn handle(&self, ctx: &mut ActionContext<'_>, args: &Value) -> Result<(), ActionError> {
        let name = args["name"].as_str().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(ActionError::invalid(self.name(), "name", "must not be empty"));
        }

        let id = ctx.ids.next_id();
        // The avatar comes from the id alone; a name makes a poor file name
        let image = avatar::with_id_param(ctx.avatar_base, id);
        ctx.directory.append(Friend::new(id, name, image));

        info!(%id, name, "Friend added by assistant");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SplitBillAction;

const SPLIT_BILL_PARAMS: &[Parameter] = &[
    Parameter {
        name: "friendId",
        kind: ParamKind::Number,
        description: "ID of the friend",
        required: true,
    },
    Parameter {
        name: "amount",
        kind: ParamKind::Number,
        description: "Amount to adjust balance (positive means you owe)",
        required: true,
    },
];

impl Action for SplitBillAction {
    fn name(&self) -> &str {
        "splitBill"
    }

    fn description(&self) -> &str {
        "Split a bill with a specific friend"
    }

    fn parameters(&self) -> &[Parameter] {
        SPLIT_BILL_PARAMS
    }

    fn handle(&self, ctx: &mut ActionContext<'_>, args: &Value) -> Result<(), ActionError> {
        let raw_id = whole_number(self.name(), "friendId", &args["friendId"])?;
        let amount = whole_number(self.name(), "amount", &args["amount"])?;
        let delta = amount
            .checked_neg()
            .ok_or_else(|| ActionError::invalid(self.name(), "amount", "out of range"))?;

        let Ok(id) = u64::try_from(raw_id).map(FriendId) else {
            debug!(raw_id, "splitBill for a negative id, ignoring");
            return Ok(());
        };

        if ctx.directory.get(id).is_none() {
            debug!(%id, "splitBill for an unknown friend, ignoring");
        }

        // `amount` is what you owe, so it comes off the balance
        if !ctx.directory.settle(id, delta) {
            return Ok(());
        }
        ctx.selection.clear_if(id);

        info!(%id, amount, "Bill split by assistant");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Directory, Selection, SequentialIds};
    use serde_json::json;

    struct Fixture {
        directory: Directory,
        selection: Selection,
        ids: SequentialIds,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                directory: Directory::sample(),
                selection: Selection::new(),
                ids: SequentialIds::starting_at(777),
            }
        }

        fn run(&mut self, action: &dyn Action, args: Value) -> Result<(), ActionError> {
            let mut ctx = ActionContext {
                directory: &mut self.directory,
                selection: &mut self.selection,
                ids: &mut self.ids,
                avatar_base: avatar::DEFAULT_AVATAR_BASE,
            };
            action.validate_args(&args)?;
            action.handle(&mut ctx, &args)
        }
    }

    #[test]
    fn test_add_friend_uses_id_for_avatar() {
        let mut fx = Fixture::new();
        fx.run(&AddFriendAction, json!({"name": "Dana"}))
            .expect("addFriend succeeds");

        assert_eq!(fx.directory.len(), 4);
        let dana = fx.directory.get(FriendId(777)).expect("dana added");
        assert_eq!(dana.name, "Dana");
        assert_eq!(dana.balance, 0);
        assert_eq!(dana.image, "https://i.pravatar.cc/48?u=777");
        assert!(!dana.image.contains("Dana"));
    }

    #[test]
    fn test_add_friend_rejects_blank_name() {
        let mut fx = Fixture::new();
        assert!(fx.run(&AddFriendAction, json!({"name": "  "})).is_err());
        assert!(fx.run(&AddFriendAction, json!({})).is_err());
        assert_eq!(fx.directory.len(), 3);
    }

    #[test]
    fn test_split_bill_subtracts_amount() {
        let mut fx = Fixture::new();
        fx.run(&SplitBillAction, json!({"friendId": 933372, "amount": 15}))
            .expect("splitBill succeeds");
        assert_eq!(fx.directory.get(FriendId(933_372)).map(|f| f.balance), Some(5));
    }

    #[test]
    fn test_split_bill_accepts_whole_floats() {
        let mut fx = Fixture::new();
        fx.run(&SplitBillAction, json!({"friendId": 933372.0, "amount": 5.0}))
            .expect("splitBill succeeds");
        assert_eq!(fx.directory.get(FriendId(933_372)).map(|f| f.balance), Some(15));
    }

    #[test]
    fn test_split_bill_rejects_fractional_amount() {
        let mut fx = Fixture::new();
        let err = fx
            .run(&SplitBillAction, json!({"friendId": 933372, "amount": 1.5}))
            .expect_err("fractional amount");
        assert!(err.to_string().contains("amount"));
        assert_eq!(fx.directory, Directory::sample());
    }

    #[test]
    fn test_split_bill_clears_matching_selection_only() {
        let mut fx = Fixture::new();
        fx.selection.toggle(FriendId(118_836));

        fx.run(&SplitBillAction, json!({"friendId": 933372, "amount": 1}))
            .expect("splitBill succeeds");
        assert_eq!(fx.selection.current(), Some(FriendId(118_836)));

        fx.run(&SplitBillAction, json!({"friendId": 118836, "amount": 1}))
            .expect("splitBill succeeds");
        assert_eq!(fx.selection.current(), None);
    }

    #[test]
    fn test_split_bill_extreme_amounts() {
        let mut fx = Fixture::new();
        fx.selection.toggle(FriendId(118_836));

        let err = fx
            .run(&SplitBillAction, json!({"friendId": 118836, "amount": i64::MIN}))
            .expect_err("amount cannot be negated");
        assert_eq!(err, ActionError::invalid("splitBill", "amount", "out of range"));

        // Clark is at -7, so subtracting i64::MAX would overflow
        fx.run(&SplitBillAction, json!({"friendId": 118836, "amount": i64::MAX}))
            .expect("overflow is ignored");
        assert_eq!(fx.directory, Directory::sample());
        assert_eq!(fx.selection.current(), Some(FriendId(118_836)));
    }

    #[test]
    fn test_split_bill_unknown_friend_is_noop() {
        let mut fx = Fixture::new();
        fx.run(&SplitBillAction, json!({"friendId": 1, "amount": 10}))
            .expect("splitBill succeeds");
        fx.run(&SplitBillAction, json!({"friendId": -4, "amount": 10}))
            .expect("splitBill succeeds");
        assert_eq!(fx.directory, Directory::sample());
    }
}
