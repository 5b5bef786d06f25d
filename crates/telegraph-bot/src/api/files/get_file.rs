#![allow(unused_parens)]
//! Get basic info about a file and prepare it for downloading, method `getFile`
//! [More info](https://core.telegram.org/bots/api#getfile)
use crate::prelude::*;
use bytes::Bytes;
use tracing::debug;
bot_api_method! {
    method = GetFile,
    http_method = HTTPMethod::GET,
    request = RequestGetFile {
        required {
            file_id: FileId,
        },
        optional {}
    },
    response = File,
}

impl File {
    /// Server-side path, if the file is ready for download
    pub fn download_path(&self) -> Option<&str> {
        self.file_path.as_deref().filter(|path| !path.is_empty())
    }
}

impl Call<'_, RequestGetFile> {
    /// Resolve the file, then fetch its content
    ///
    /// The content request is sent only when the metadata request succeeded
    /// and returned a non-empty `file_path`.
    ///
    /// ## Errors
    /// - any error of the metadata request, unchanged
    /// - `BotError::NotFound` - the file has no download path
    /// - any error of the content request
    pub async fn download(self) -> Result<ApiResponse<Bytes>> {
        let bot = self.bot();
        let file = self.commit().await?.result;
        let Some(path) = file.download_path() else {
            return Err(BotError::NotFound(format!(
                "File {} has no download path",
                file.file_id
            )));
        };
        debug!("Downloading file content");
        bot.get_content(path).commit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_get_file_query() {
        let req = RequestGetFile::new(FileId::from("AgADBAAD"));
        assert_eq!(
            req.payload().unwrap(),
            Payload::Query("file_id=AgADBAAD".to_string())
        );
    }

    #[test]
    fn test_download_path() {
        let mut file = File {
            file_id: FileId::from("a"),
            file_size: None,
            file_path: Some(String::new()),
        };
        assert!(file.download_path().is_none());
        file.file_path = Some("documents/file_1.pdf".to_string());
        assert_eq!(file.download_path(), Some("documents/file_1.pdf"));
        file.file_path = None;
        assert!(file.download_path().is_none());
    }
}
