pub mod keyboard;
pub mod parser;
pub use crate::api::types::*;
use crate::error::Result;
pub use parser::*;

/// Setter for rendered text, implemented by every request carrying text or a caption
pub trait MessageTextSetters: Sized {
    /// Set message text, or caption for media messages, with its parse mode
    /// ## Parameters
    /// - `parser`: [`MessageTextParser`] - Text parser
    ///
    /// ## Errors
    /// - any rendering error of [`MessageTextBuilder::parse`]
    fn set_text(self, parser: MessageTextParser) -> Result<Self>;
}

/// Setters for the `reply_markup` field
///
/// Each setter replaces the whole markup: the last one called wins.
pub trait ReplyMarkupSetters: Sized {
    /// Set any [`ReplyMarkup`]
    fn set_reply_markup(self, markup: ReplyMarkup) -> Self;
    /// Attach an inline keyboard
    /// ## Parameters
    /// - `keyboard`: [`InlineKeyboardMarkup`] - Keyboard
    fn set_inline_keyboard(self, keyboard: InlineKeyboardMarkup) -> Self {
        self.set_reply_markup(ReplyMarkup::InlineKeyboard(keyboard))
    }
    /// Replace the user's keyboard with a custom one
    /// ## Parameters
    /// - `keyboard`: [`ReplyKeyboardMarkup`] - Keyboard
    fn set_reply_keyboard(self, keyboard: ReplyKeyboardMarkup) -> Self {
        self.set_reply_markup(ReplyMarkup::ReplyKeyboard(keyboard))
    }
    /// Remove the custom keyboard
    /// ## Parameters
    /// - `selective`: only for mentioned users and the replied-to sender
    fn set_remove_keyboard(self, selective: Option<bool>) -> Self {
        self.set_reply_markup(ReplyMarkup::RemoveKeyboard(ReplyKeyboardRemove {
            remove_keyboard: true,
            selective,
        }))
    }
    /// Show the reply interface to the user
    /// ## Parameters
    /// - `selective`: only for mentioned users and the replied-to sender
    fn set_force_reply(self, selective: Option<bool>) -> Self {
        self.set_reply_markup(ReplyMarkup::ForceReply(ForceReply {
            force_reply: true,
            selective,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default)]
    struct Caption {
        caption: String,
        parse_mode: Option<ParseMode>,
    }
    impl MessageTextSetters for Caption {
        fn set_text(mut self, parser: MessageTextParser) -> Result<Self> {
            let (caption, parse_mode) = parser.parse()?;
            self.caption = caption;
            self.parse_mode = Some(parse_mode);
            Ok(self)
        }
    }

    #[derive(Clone, Debug, Default)]
    struct Markup {
        reply_markup: Option<ReplyMarkup>,
    }
    impl ReplyMarkupSetters for Markup {
        fn set_reply_markup(mut self, markup: ReplyMarkup) -> Self {
            self.reply_markup = Some(markup);
            self
        }
    }

    #[test]
    fn test_set_text_renders_parser() {
        let parser = MessageTextParser::new(ParseMode::HTML)
            .add(MessageTextFormat::Bold("a<b".to_string()));
        let caption = Caption::default().set_text(parser).unwrap();
        assert_eq!(caption.caption, "<b>a&lt;b</b>");
        assert_eq!(caption.parse_mode, Some(ParseMode::HTML));
    }

    #[test]
    fn test_set_text_propagates_render_error() {
        let parser = MessageTextParser::new(ParseMode::Markdown)
            .add(MessageTextFormat::Italic("a_b".to_string()));
        let err = Caption::default().set_text(parser).unwrap_err();
        assert!(matches!(err, crate::error::BotError::Validation(_)));
    }

    #[test]
    fn test_last_markup_setter_wins() {
        let markup = Markup::default()
            .set_inline_keyboard(InlineKeyboardMarkup::new())
            .set_remove_keyboard(None)
            .set_force_reply(Some(true));
        assert_eq!(
            markup.reply_markup,
            Some(ReplyMarkup::ForceReply(ForceReply {
                force_reply: true,
                selective: Some(true),
            }))
        );
    }

    #[test]
    fn test_remove_keyboard_is_always_true() {
        let markup = Markup::default().set_remove_keyboard(None);
        let Some(ReplyMarkup::RemoveKeyboard(remove)) = markup.reply_markup else {
            panic!("Expected RemoveKeyboard");
        };
        assert!(remove.remove_keyboard);
        assert!(remove.selective.is_none());
    }
}
