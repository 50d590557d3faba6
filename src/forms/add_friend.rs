use crate::ledger::{avatar, Friend, IdGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFriendField {
    Name,
    Image,
}

/// Name and image URL entered by the user.
#[derive(Debug, Clone)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    pub active: AddFriendField,
    default_image: String,
}

impl AddFriendForm {
    /// A blank form whose image field starts at `default_image`.
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            active: AddFriendField::Name,
            default_image,
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
        self.active = AddFriendField::Name;
    }

    pub fn next_field(&mut self) {
        self.active = match self.active {
            AddFriendField::Name => AddFriendField::Image,
            AddFriendField::Image => AddFriendField::Name,
        };
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.active {
            AddFriendField::Name => &mut self.name,
            AddFriendField::Image => &mut self.image,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_buffer().push(c);
    }

    pub fn pop_char(&mut self) {
        self.active_buffer().pop();
    }

    /// Build a new friend from the form, or `None` if either field is blank.
    ///
    /// The generated id is appended to the image URL. The form is reset on
    /// success.
    pub fn submit(&mut self, ids: &mut dyn IdGenerator) -> Option<Friend> {
        let name = self.name.trim();
        let image = self.image.trim();
        if name.is_empty() || image.is_empty() {
            return None;
        }

        let id = ids.next_id();
        let friend = Friend::new(id, name, avatar::with_id_param(image, id));
        self.reset();
        Some(friend)
    }
}
