//! Endpoint templates for every API operation
//!
//! Each template carries `%v` placeholders: the first is always the bot token,
//! the rest are positional path values (the file path of a content download).
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::fmt::{Display, Formatter};

/// Placeholder substituted by [`format_endpoint`]
pub const PLACEHOLDER: &str = "%v";

/// Bytes escaped inside one path segment; `/` is kept as the segment separator
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// API operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetMe,
    SetWebhook,
    GetUpdates,
    DeleteWebhook,
    GetWebhookInfo,
    GetFile,
    GetContent,
    GetUserProfilePhotos,
    SendMessage,
    ForwardMessage,
    SendPhoto,
    SendAudio,
    SendDocument,
    SendVideo,
    SendVoice,
    SendVideoNote,
    SendLocation,
    EditMessageLiveLocation,
    StopMessageLiveLocation,
    SendVenue,
    SendContact,
    SendChatAction,
}

impl Endpoint {
    pub const ALL: [Endpoint; 22] = [
        Endpoint::GetMe,
        Endpoint::SetWebhook,
        Endpoint::GetUpdates,
        Endpoint::DeleteWebhook,
        Endpoint::GetWebhookInfo,
        Endpoint::GetFile,
        Endpoint::GetContent,
        Endpoint::GetUserProfilePhotos,
        Endpoint::SendMessage,
        Endpoint::ForwardMessage,
        Endpoint::SendPhoto,
        Endpoint::SendAudio,
        Endpoint::SendDocument,
        Endpoint::SendVideo,
        Endpoint::SendVoice,
        Endpoint::SendVideoNote,
        Endpoint::SendLocation,
        Endpoint::EditMessageLiveLocation,
        Endpoint::StopMessageLiveLocation,
        Endpoint::SendVenue,
        Endpoint::SendContact,
        Endpoint::SendChatAction,
    ];

    /// Path template of the operation
    pub const fn template(self) -> &'static str {
        match self {
            Endpoint::GetMe => "/bot%v/getMe",
            Endpoint::SetWebhook => "/bot%v/setWebhook",
            Endpoint::GetUpdates => "/bot%v/getUpdates",
            Endpoint::DeleteWebhook => "/bot%v/deleteWebhook",
            Endpoint::GetWebhookInfo => "/bot%v/getWebhookInfo",
            Endpoint::GetFile => "/bot%v/getFile",
            Endpoint::GetContent => "/file/bot%v/%v",
            Endpoint::GetUserProfilePhotos => "/bot%v/getUserProfilePhotos",
            Endpoint::SendMessage => "/bot%v/sendMessage",
            Endpoint::ForwardMessage => "/bot%v/forwardMessage",
            Endpoint::SendPhoto => "/bot%v/sendPhoto",
            Endpoint::SendAudio => "/bot%v/sendAudio",
            Endpoint::SendDocument => "/bot%v/sendDocument",
            Endpoint::SendVideo => "/bot%v/sendVideo",
            Endpoint::SendVoice => "/bot%v/sendVoice",
            Endpoint::SendVideoNote => "/bot%v/sendVideoNote",
            Endpoint::SendLocation => "/bot%v/sendLocation",
            Endpoint::EditMessageLiveLocation => "/bot%v/editMessageLiveLocation",
            Endpoint::StopMessageLiveLocation => "/bot%v/stopMessageLiveLocation",
            Endpoint::SendVenue => "/bot%v/sendVenue",
            Endpoint::SendContact => "/bot%v/sendContact",
            Endpoint::SendChatAction => "/bot%v/sendChatAction",
        }
    }

    /// Number of positional values expected after the token
    pub fn path_arity(self) -> usize {
        self.template().matches(PLACEHOLDER).count().saturating_sub(1)
    }

    /// Resolve the path for `token` and positional `args`
    ///
    /// Each value is percent-encoded segment by segment, so `#`, `?` and `%`
    /// stay part of the path.
    pub fn path(self, token: &str, args: &[&str]) -> String {
        let encoded: Vec<String> = args.iter().map(|arg| encode_path_value(arg)).collect();
        let encoded: Vec<&str> = encoded.iter().map(String::as_str).collect();
        format_endpoint(self.template(), token, &encoded)
    }
}

impl Display for Endpoint {
    /// Operation name, as used in the path
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let template = self.template();
        let name = template.rsplit('/').next().unwrap_or(template);
        match self {
            Endpoint::GetContent => write!(f, "file"),
            _ => write!(f, "{name}"),
        }
    }
}

/// Substitute placeholders left to right: `token` first, then `args` in order
pub fn format_endpoint(template: &str, token: &str, args: &[&str]) -> String {
    debug_assert_eq!(
        template.matches(PLACEHOLDER).count(),
        args.len() + 1,
        "template {template} expects a different number of values"
    );
    let mut values = std::iter::once(token).chain(args.iter().copied());
    let mut pieces = template.split(PLACEHOLDER);
    let mut path = String::with_capacity(template.len() + token.len());
    if let Some(head) = pieces.next() {
        path.push_str(head);
    }
    for piece in pieces {
        path.push_str(values.next().unwrap_or_default());
        path.push_str(piece);
    }
    path
}

/// Percent-encode every `/`-separated segment of a path value
pub fn encode_path_value(value: &str) -> String {
    value
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_send_message() {
        assert_eq!(
            format_endpoint("/bot%v/sendMessage", "TOKEN", &[]),
            "/botTOKEN/sendMessage"
        );
    }

    #[test]
    fn test_format_content_path() {
        assert_eq!(
            Endpoint::GetContent.path("123:abc", &["photos/file_1.jpg"]),
            "/file/bot123:abc/photos/file_1.jpg"
        );
    }

    #[test]
    fn test_content_path_escapes_reserved_chars() {
        assert_eq!(
            Endpoint::GetContent.path("T", &["docs/a#b?.pdf"]),
            "/file/botT/docs/a%23b%3F.pdf"
        );
        assert_eq!(
            Endpoint::GetContent.path("T", &["docs/a b%20c.pdf"]),
            "/file/botT/docs/a%20b%2520c.pdf"
        );
    }

    #[test]
    fn test_encode_path_value_keeps_separators() {
        assert_eq!(encode_path_value("photos/file_1.jpg"), "photos/file_1.jpg");
        assert_eq!(encode_path_value("voice/файл.ogg"), "voice/%D1%84%D0%B0%D0%B9%D0%BB.ogg");
    }

    #[test]
    fn test_every_template_is_well_formed() {
        for endpoint in Endpoint::ALL {
            let template = endpoint.template();
            assert!(template.starts_with('/'), "{endpoint:?}");
            assert!(
                template.starts_with("/bot%v/") || template.starts_with("/file/bot%v/"),
                "{endpoint:?} must start with the token segment"
            );
            let args = vec!["x"; endpoint.path_arity()];
            let path = endpoint.path("T", &args);
            assert!(!path.contains(PLACEHOLDER), "{endpoint:?} left {path}");
        }
    }

    #[test]
    fn test_only_content_takes_a_path_value() {
        for endpoint in Endpoint::ALL {
            let expected = usize::from(endpoint == Endpoint::GetContent);
            assert_eq!(endpoint.path_arity(), expected, "{endpoint:?}");
        }
    }

    #[test]
    fn test_display_is_operation_name() {
        assert_eq!(Endpoint::SendMessage.to_string(), "sendMessage");
        assert_eq!(
            Endpoint::GetUserProfilePhotos.to_string(),
            "getUserProfilePhotos"
        );
        assert_eq!(Endpoint::GetContent.to_string(), "file");
    }

    #[test]
    fn test_templates_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for endpoint in Endpoint::ALL {
            assert!(seen.insert(endpoint.template()), "{endpoint:?}");
        }
    }
}
