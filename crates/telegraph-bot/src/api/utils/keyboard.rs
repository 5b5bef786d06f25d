//! Builders for [`InlineKeyboardMarkup`] and [`ReplyKeyboardMarkup`]
use crate::api::types::*;
use std::convert::From;

/// Maximum buttons in one keyboard row
pub const MAX_BUTTONS_IN_ROW: usize = 8;

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(val: InlineKeyboardMarkup) -> Self {
        ReplyMarkup::InlineKeyboard(val)
    }
}
impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(val: ReplyKeyboardMarkup) -> Self {
        ReplyMarkup::ReplyKeyboard(val)
    }
}
impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(val: ReplyKeyboardRemove) -> Self {
        ReplyMarkup::RemoveKeyboard(val)
    }
}
impl From<ForceReply> for ReplyMarkup {
    fn from(val: ForceReply) -> Self {
        ReplyMarkup::ForceReply(val)
    }
}

impl Default for InlineKeyboardMarkup {
    fn default() -> Self {
        Self {
            inline_keyboard: vec![vec![]],
        }
    }
}
impl InlineKeyboardMarkup {
    /// # Create new [`InlineKeyboardMarkup`] with one empty row
    pub fn new() -> Self {
        Self::default()
    }
    /// # Append row to [`InlineKeyboardMarkup`]
    pub fn add_row(mut self) -> Self {
        self.inline_keyboard.push(vec![]);
        self
    }
    /// # Get index of last row
    pub fn get_row_index(&self) -> usize {
        self.inline_keyboard.len().saturating_sub(1)
    }
    /// # Append button to last row
    /// Maximum buttons in row is 8. If row is full, add new row
    pub fn add_button(mut self, button: InlineKeyboardButton) -> Self {
        push_button(&mut self.inline_keyboard, button);
        self
    }
}

impl Default for ReplyKeyboardMarkup {
    fn default() -> Self {
        Self {
            keyboard: vec![vec![]],
            resize_keyboard: None,
            one_time_keyboard: None,
            selective: None,
        }
    }
}
impl ReplyKeyboardMarkup {
    /// # Create new [`ReplyKeyboardMarkup`] with one empty row
    pub fn new() -> Self {
        Self::default()
    }
    /// # Append row to [`ReplyKeyboardMarkup`]
    pub fn add_row(mut self) -> Self {
        self.keyboard.push(vec![]);
        self
    }
    /// # Append button to last row
    /// Maximum buttons in row is 8. If row is full, add new row
    pub fn add_button(mut self, button: KeyboardButton) -> Self {
        push_button(&mut self.keyboard, button);
        self
    }
    /// Fit the keyboard height to the buttons
    pub fn resize(mut self, value: bool) -> Self {
        self.resize_keyboard = Some(value);
        self
    }
    /// Hide the keyboard once a button is pressed
    pub fn one_time(mut self, value: bool) -> Self {
        self.one_time_keyboard = Some(value);
        self
    }
    /// Show only to mentioned users and the replied-to sender
    pub fn selective(mut self, value: bool) -> Self {
        self.selective = Some(value);
        self
    }
}

fn push_button<B>(rows: &mut Vec<Vec<B>>, button: B) {
    match rows.last_mut() {
        Some(row) if row.len() < MAX_BUTTONS_IN_ROW => row.push(button),
        _ => rows.push(vec![button]),
    }
}

impl InlineKeyboardButton {
    /// Create new [`InlineKeyboardButton`] with URL
    /// ## Parameters
    /// - `text`: [`String`] - Button text
    /// - `url`: [`String`] - URL
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        InlineKeyboardButton {
            text: text.into(),
            url: Some(url.into()),
            ..Default::default()
        }
    }
    /// Create new [`InlineKeyboardButton`] with callback data
    /// ## Parameters
    /// - `text`: [`String`] - Button text
    /// - `data`: [`String`] - Callback data
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        InlineKeyboardButton {
            text: text.into(),
            callback_data: Some(data.into()),
            ..Default::default()
        }
    }
    /// Create new [`InlineKeyboardButton`] that starts an inline query in another chat
    pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
        InlineKeyboardButton {
            text: text.into(),
            switch_inline_query: Some(query.into()),
            ..Default::default()
        }
    }
}

impl KeyboardButton {
    /// Plain text button
    pub fn text(text: impl Into<String>) -> Self {
        KeyboardButton {
            text: text.into(),
            ..Default::default()
        }
    }
    /// Button sending the user's phone number
    pub fn contact(text: impl Into<String>) -> Self {
        KeyboardButton {
            text: text.into(),
            request_contact: Some(true),
            ..Default::default()
        }
    }
    /// Button sending the user's location
    pub fn location(text: impl Into<String>) -> Self {
        KeyboardButton {
            text: text.into(),
            request_location: Some(true),
            ..Default::default()
        }
    }
}
