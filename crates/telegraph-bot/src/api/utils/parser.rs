use crate::api::types::*;
use crate::error::{BotError, Result};
use reqwest::Url;

/// Characters escaped with `\` anywhere in MarkdownV2 text
const MARKDOWN_V2_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    '\\',
];
/// Characters escaped with `\` outside entities in legacy Markdown
const MARKDOWN_SPECIAL: &[char] = &['_', '*', '`', '['];

pub trait MessageTextBuilder {
    /// Create new parser
    fn new(parse_mode: ParseMode) -> Self;
    /// Add formatted text to parser
    fn add(self, text: MessageTextFormat) -> Self;
    /// Add new row to parser
    fn next_line(self) -> Self;
    /// Add space to parser
    fn space(self) -> Self;
    /// Render text in the parser's parse mode
    fn parse(&self) -> Result<(String, ParseMode)>;
}

impl MessageTextParser {
    /// Parse [`MessageTextFormat`] types to HTML string
    fn parse_html(&self, text: &MessageTextFormat) -> Result<String> {
        match text {
            MessageTextFormat::Plain(text) => Ok(escape_html(text)),
            MessageTextFormat::Link(url, text) => {
                let parsed_url = Url::parse(url)?;
                Ok(format!(
                    "<a href=\"{}\">{}</a>",
                    escape_html(parsed_url.as_str()),
                    escape_html(text)
                ))
            }
            MessageTextFormat::Bold(text) => Ok(format!("<b>{}</b>", escape_html(text))),
            MessageTextFormat::Italic(text) => Ok(format!("<i>{}</i>", escape_html(text))),
            MessageTextFormat::Code(text) => Ok(format!("<code>{}</code>", escape_html(text))),
            MessageTextFormat::Pre(text, language) => match language {
                Some(language) => Ok(format!(
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    escape_html(language),
                    escape_html(text)
                )),
                None => Ok(format!("<pre>{}</pre>", escape_html(text))),
            },
            MessageTextFormat::Mention(user_id, name) => Ok(format!(
                "<a href=\"tg://user?id={}\">{}</a>",
                user_id,
                escape_html(name)
            )),
        }
    }

    /// Parse [`MessageTextFormat`] types to MarkdownV2 string
    fn parse_markdown_v2(&self, text: &MessageTextFormat) -> Result<String> {
        match text {
            MessageTextFormat::Plain(text) => Ok(escape_markdown_v2(text)),
            MessageTextFormat::Link(url, text) => {
                let parsed_url = Url::parse(url)?;
                Ok(format!(
                    "[{}]({})",
                    escape_markdown_v2(text),
                    escape_with(parsed_url.as_str(), &[')', '\\'])
                ))
            }
            MessageTextFormat::Bold(text) => Ok(format!("*{}*", escape_markdown_v2(text))),
            MessageTextFormat::Italic(text) => Ok(format!("_{}_", escape_markdown_v2(text))),
            MessageTextFormat::Code(text) => Ok(format!("`{}`", escape_with(text, &['`', '\\']))),
            MessageTextFormat::Pre(text, language) => Ok(format!(
                "```{}\n{}\n```",
                pre_language(language.as_deref())?,
                escape_with(text, &['`', '\\'])
            )),
            MessageTextFormat::Mention(user_id, name) => Ok(format!(
                "[{}](tg://user?id={})",
                escape_markdown_v2(name),
                user_id
            )),
        }
    }

    /// Parse [`MessageTextFormat`] types to legacy Markdown string
    ///
    /// Legacy Markdown has no escaping inside entities, so entity text
    /// containing its own delimiter is rejected.
    fn parse_markdown(&self, text: &MessageTextFormat) -> Result<String> {
        match text {
            MessageTextFormat::Plain(text) => Ok(escape_with(text, MARKDOWN_SPECIAL)),
            MessageTextFormat::Link(url, text) => {
                let parsed_url = Url::parse(url)?;
                Ok(format!(
                    "[{}]({})",
                    entity_text(text, ']')?,
                    entity_text(parsed_url.as_str(), ')')?
                ))
            }
            MessageTextFormat::Bold(text) => Ok(format!("*{}*", entity_text(text, '*')?)),
            MessageTextFormat::Italic(text) => Ok(format!("_{}_", entity_text(text, '_')?)),
            MessageTextFormat::Code(text) => Ok(format!("`{}`", entity_text(text, '`')?)),
            MessageTextFormat::Pre(text, language) => Ok(format!(
                "```{}\n{}\n```",
                pre_language(language.as_deref())?,
                entity_text(text, '`')?
            )),
            MessageTextFormat::Mention(user_id, name) => Ok(format!(
                "[{}](tg://user?id={})",
                entity_text(name, ']')?,
                user_id
            )),
        }
    }
}

impl MessageTextBuilder for MessageTextParser {
    fn new(parse_mode: ParseMode) -> Self {
        Self {
            text: Vec::new(),
            parse_mode,
        }
    }
    /// Add formatted text to [`MessageTextFormat`]
    /// ## Parameters
    /// - `text`: [`MessageTextFormat`] - Text
    fn add(mut self, text: MessageTextFormat) -> Self {
        self.text.push(text);
        self
    }
    /// Line feed
    fn next_line(self) -> Self {
        self.add(MessageTextFormat::Plain(String::from("\n")))
    }
    /// Space
    fn space(self) -> Self {
        self.add(MessageTextFormat::Plain(String::from(" ")))
    }
    /// Parse [`MessageTextFormat`] to string
    fn parse(&self) -> Result<(String, ParseMode)> {
        let mut result = String::new();
        for item in &self.text {
            let rendered = match self.parse_mode {
                ParseMode::HTML => self.parse_html(item)?,
                ParseMode::MarkdownV2 => self.parse_markdown_v2(item)?,
                ParseMode::Markdown => self.parse_markdown(item)?,
            };
            result.push_str(&rendered);
        }
        Ok((result, self.parse_mode))
    }
}

/// Replace special characters with HTML entities
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn escape_markdown_v2(text: &str) -> String {
    escape_with(text, MARKDOWN_V2_SPECIAL)
}

/// Prefix every char of `special` with `\`
fn escape_with(text: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn entity_text(text: &str, delimiter: char) -> Result<&str> {
    if text.contains(delimiter) {
        return Err(BotError::Validation(format!(
            "Markdown entity text cannot contain `{delimiter}`: {text}"
        )));
    }
    Ok(text)
}

/// Language tag of a Markdown code block: it ends at the first whitespace
/// and cannot close the block
fn pre_language(language: Option<&str>) -> Result<&str> {
    let language = language.unwrap_or_default();
    if language.contains(|c: char| c == '`' || c == '\\' || c.is_whitespace()) {
        return Err(BotError::Validation(format!(
            "Invalid code block language: {language:?}"
        )));
    }
    Ok(language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{MessageTextFormat, ParseMode, UserId};

    fn parser_html() -> MessageTextParser {
        MessageTextParser::new(ParseMode::HTML)
    }

    #[test]
    fn test_plain_text() {
        let parser = parser_html().add(MessageTextFormat::Plain("Hello".to_string()));
        let (html, mode) = parser.parse().unwrap();
        assert_eq!(html, "Hello");
        assert_eq!(mode, ParseMode::HTML);
    }

    #[test]
    fn test_bold_italic_code() {
        let parser = parser_html()
            .add(MessageTextFormat::Bold("B".to_string()))
            .add(MessageTextFormat::Italic("I".to_string()))
            .add(MessageTextFormat::Code("C".to_string()));
        let (html, _) = parser.parse().unwrap();
        assert_eq!(html, "<b>B</b><i>I</i><code>C</code>");
    }

    #[test]
    fn test_pre_with_and_without_language() {
        let parser = parser_html()
            .add(MessageTextFormat::Pre(
                "code".to_string(),
                Some("rust".to_string()),
            ))
            .add(MessageTextFormat::Pre("code2".to_string(), None));
        let (html, _) = parser.parse().unwrap();
        assert!(html.contains("<pre><code class=\"language-rust\">code</code></pre>"));
        assert!(html.contains("<pre>code2</pre>"));
    }

    #[test]
    fn test_link_and_mention() {
        let parser = parser_html()
            .add(MessageTextFormat::Link(
                "http://a.com".to_string(),
                "A".to_string(),
            ))
            .add(MessageTextFormat::Mention(UserId(42), "Bob".to_string()));
        let (html, _) = parser.parse().unwrap();
        assert!(html.contains("<a href=\"http://a.com/\">A</a>"));
        assert!(html.contains("<a href=\"tg://user?id=42\">Bob</a>"));
    }

    #[test]
    fn test_html_escape() {
        let parser = parser_html().add(MessageTextFormat::Plain("<tag>&text>".to_string()));
        let (html, _) = parser.parse().unwrap();
        assert_eq!(html, "&lt;tag&gt;&amp;text&gt;");
    }

    #[test]
    fn test_next_line_and_space() {
        let parser = parser_html()
            .add(MessageTextFormat::Plain("A".to_string()))
            .space()
            .add(MessageTextFormat::Plain("B".to_string()))
            .next_line()
            .add(MessageTextFormat::Plain("C".to_string()));
        let (html, _) = parser.parse().unwrap();
        assert_eq!(html, "A B\nC");
    }

    #[test]
    fn test_link_invalid_url_returns_error() {
        let parser = parser_html().add(MessageTextFormat::Link(
            "not a url".to_string(),
            "A".to_string(),
        ));
        assert!(parser.parse().is_err());
    }

    #[test]
    fn test_empty_parser_returns_empty_string() {
        let (html, mode) = parser_html().parse().unwrap();
        assert_eq!(html, "");
        assert_eq!(mode, ParseMode::HTML);
    }

    #[test]
    fn test_markdown_v2_escapes_everywhere() {
        let parser = MessageTextParser::new(ParseMode::MarkdownV2)
            .add(MessageTextFormat::Plain("1+1=2.".to_string()))
            .space()
            .add(MessageTextFormat::Bold("a_b".to_string()))
            .add(MessageTextFormat::Code("x`y".to_string()));
        let (text, mode) = parser.parse().unwrap();
        assert_eq!(text, "1\\+1\\=2\\. *a\\_b*`x\\`y`");
        assert_eq!(mode, ParseMode::MarkdownV2);
    }

    #[test]
    fn test_markdown_v2_mention() {
        let parser = MessageTextParser::new(ParseMode::MarkdownV2)
            .add(MessageTextFormat::Mention(UserId(7), "J.D.".to_string()));
        let (text, _) = parser.parse().unwrap();
        assert_eq!(text, "[J\\.D\\.](tg://user?id=7)");
    }

    #[test]
    fn test_markdown_plain_escape() {
        let parser = MessageTextParser::new(ParseMode::Markdown)
            .add(MessageTextFormat::Plain("snake_case *x*".to_string()))
            .add(MessageTextFormat::Italic("it".to_string()));
        let (text, _) = parser.parse().unwrap();
        assert_eq!(text, "snake\\_case \\*x\\*_it_");
    }

    #[test]
    fn test_markdown_v2_pre_language() {
        let parser = MessageTextParser::new(ParseMode::MarkdownV2)
            .add(MessageTextFormat::Pre("fn main() {}".to_string(), Some("rust".to_string())));
        let (text, _) = parser.parse().unwrap();
        assert_eq!(text, "```rust\nfn main() {}\n```");
    }

    #[test]
    fn test_pre_language_cannot_break_block() {
        for language in ["ru`st", "rust\nx", "a b", "c\\"] {
            for mode in [ParseMode::MarkdownV2, ParseMode::Markdown] {
                let parser = MessageTextParser::new(mode)
                    .add(MessageTextFormat::Pre("x".to_string(), Some(language.to_string())));
                let err = parser.parse().unwrap_err();
                assert!(matches!(err, BotError::Validation(_)), "{language:?} {mode:?}");
            }
        }
        let parser = MessageTextParser::new(ParseMode::HTML)
            .add(MessageTextFormat::Pre("x".to_string(), Some("a\"b".to_string())));
        assert!(parser.parse().unwrap().0.contains("language-a&quot;b"));
    }

    #[test]
    fn test_markdown_entity_with_delimiter_fails() {
        let parser = MessageTextParser::new(ParseMode::Markdown)
            .add(MessageTextFormat::Bold("2*3".to_string()));
        let err = parser.parse().unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
    }
}
