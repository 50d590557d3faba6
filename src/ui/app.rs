use tracing::{debug, info, warn};

use crate::assistant::command::{self, Command};
use crate::assistant::{ActionContext, AssistantBridge, LocalBridge, Readable};
use crate::forms::{AddFriendForm, SplitBillForm};
use crate::ledger::{Directory, Friend, FriendId, IdGenerator, Selection};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FriendList,
    AddFriend,
    SplitBill,
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct App {
    pub directory: Directory,
    pub selection: Selection,
    ids: Box<dyn IdGenerator>,
    assistant: LocalBridge,
    avatar_base: String,
    pub cursor: usize,
    pub focus: Focus,
    pub show_add_friend: bool,
    pub add_friend_form: AddFriendForm,
    pub split_bill_form: SplitBillForm,
    pub prompt_input: String,
    pub status: Option<StatusMessage>,
    pub theme: Theme,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        directory: Directory,
        ids: Box<dyn IdGenerator>,
        assistant: LocalBridge,
        avatar_base: String,
        theme: Theme,
    ) -> Self {
        let mut app = Self {
            directory,
            selection: Selection::new(),
            ids,
            assistant,
            add_friend_form: AddFriendForm::new(avatar_base.clone()),
            avatar_base,
            cursor: 0,
            focus: Focus::FriendList,
            show_add_friend: false,
            split_bill_form: SplitBillForm::new(),
            prompt_input: String::new(),
            status: None,
            theme,
            show_help: false,
            should_quit: false,
        };
        app.publish_context();
        app
    }

    pub fn assistant(&self) -> &LocalBridge {
        &self.assistant
    }

    /// Hand the current friend list to the assistant.
    pub fn publish_context(&mut self) {
        self.assistant
            .publish_readable(Readable::friends(&self.directory));
    }

    // -- Friend list --

    pub fn next(&mut self) {
        let count = self.directory.len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.directory.len();
        if count > 0 {
            self.cursor = if self.cursor > 0 {
                self.cursor - 1
            } else {
                count - 1
            };
        }
    }

    pub fn cursor_friend(&self) -> Option<&Friend> {
        self.directory.as_slice().get(self.cursor)
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection.current().and_then(|id| self.directory.get(id))
    }

    /// Select `id`, or deselect it if it is already selected. Selecting
    /// closes the add-friend form and starts a fresh split-bill form.
    pub fn toggle_selection(&mut self, id: FriendId) {
        if self.selection.toggle(id) {
            self.split_bill_form = SplitBillForm::new();
            self.close_add_friend();
            self.focus = Focus::SplitBill;
            debug!(%id, "Friend selected");
        } else {
            self.focus = Focus::FriendList;
            debug!(%id, "Friend deselected");
        }
    }

    pub fn toggle_selection_at_cursor(&mut self) {
        if let Some(id) = self.cursor_friend().map(|f| f.id) {
            self.toggle_selection(id);
        }
    }

    // -- Add-friend form --

    /// Open or close the add-friend form. Opening it drops the selection.
    pub fn toggle_add_friend(&mut self) {
        if self.show_add_friend {
            self.close_add_friend();
            self.focus = Focus::FriendList;
        } else {
            self.show_add_friend = true;
            self.selection.clear();
            self.focus = Focus::AddFriend;
        }
    }

    fn close_add_friend(&mut self) {
        self.show_add_friend = false;
        self.add_friend_form.reset();
    }

    pub fn submit_add_friend(&mut self) {
        let Some(friend) = self.add_friend_form.submit(self.ids.as_mut()) else {
            return;
        };

        info!(id = %friend.id, name = %friend.name, "Friend added");
        self.directory.append(friend);
        self.cursor = self.directory.len() - 1;
        self.close_add_friend();
        self.focus = Focus::FriendList;
    }

    // -- Split-bill form --

    /// Apply the split-bill form to the selected friend and drop the selection.
    pub fn submit_split_bill(&mut self) {
        let Some(id) = self.selection.current() else {
            return;
        };
        let Some(delta) = self.split_bill_form.settlement_delta() else {
            return;
        };

        // An out-of-range result is rejected like any other invalid input
        if !self.directory.adjust_balance(id, delta) {
            return;
        }
        info!(%id, delta, "Bill split");
        self.selection.clear();
        self.split_bill_form = SplitBillForm::new();
        self.focus = Focus::FriendList;
    }

    // -- Assistant prompt --

    pub fn open_prompt(&mut self) {
        self.prompt_input.clear();
        self.focus = Focus::Prompt;
    }

    pub fn close_prompt(&mut self) {
        self.prompt_input.clear();
        self.focus = self.resting_focus();
    }

    /// Run the prompt line as an assistant command.
    pub fn run_prompt(&mut self) {
        let line = std::mem::take(&mut self.prompt_input);
        self.status = self.run_command(&line);
        self.focus = self.resting_focus();
    }

    /// Run one assistant command line and describe the outcome.
    pub fn run_command(&mut self, line: &str) -> Option<StatusMessage> {
        let command = match command::parse(line, &self.assistant) {
            Ok(Some(command)) => command,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, line, "Rejected assistant command");
                return Some(StatusMessage::error(e.to_string()));
            }
        };

        match command {
            Command::Help => Some(StatusMessage::info(format!(
                "Actions: {}",
                self.assistant.action_names().join(", ")
            ))),
            Command::Invoke { action, args } => {
                let mut ctx = ActionContext {
                    directory: &mut self.directory,
                    selection: &mut self.selection,
                    ids: self.ids.as_mut(),
                    avatar_base: &self.avatar_base,
                };
                let result = self.assistant.dispatch(&action, &args, &mut ctx);
                self.publish_context();

                match result {
                    Ok(()) => Some(StatusMessage::info(format!("{action} done"))),
                    Err(e) => {
                        warn!(error = %e, "Assistant action failed");
                        Some(StatusMessage::error(e.to_string()))
                    }
                }
            }
        }
    }

    /// Where focus goes when a transient pane closes.
    fn resting_focus(&self) -> Focus {
        if self.selection.current().is_some() {
            Focus::SplitBill
        } else if self.show_add_friend {
            Focus::AddFriend
        } else {
            Focus::FriendList
        }
    }

    // -- Misc --

    /// Tab order: list, then whichever forms are open.
    pub fn cycle_focus(&mut self) {
        let order = [
            (Focus::FriendList, true),
            (Focus::AddFriend, self.show_add_friend),
            (Focus::SplitBill, self.selection.current().is_some()),
        ];
        let start = order
            .iter()
            .position(|(f, _)| *f == self.focus)
            .unwrap_or(0);

        self.focus = (1..=order.len())
            .map(|step| order[(start + step) % order.len()])
            .find(|(_, visible)| *visible)
            .map_or(Focus::FriendList, |(f, _)| f);
    }

    /// Switch to the next built-in theme and return its name.
    pub fn next_theme(&mut self) -> &'static str {
        let next = self.theme.next();
        self.theme = next.clone();
        next.name
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
