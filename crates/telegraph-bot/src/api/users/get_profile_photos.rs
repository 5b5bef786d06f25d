#![allow(unused_parens)]
//! Get a list of profile pictures for a user, method `getUserProfilePhotos`
//! [More info](https://core.telegram.org/bots/api#getuserprofilephotos)
use crate::prelude::*;
use bytes::Bytes;
use tracing::{debug, trace};
bot_api_method! {
    method = GetUserProfilePhotos,
    http_method = HTTPMethod::GET,
    request = RequestGetUserProfilePhotos {
        required {
            user_id: UserId,
        },
        optional {
            /// Sequential number of the first photo to be returned
            offset: i32,
            /// 1..=100, defaults to 100
            limit: i32,
        }
    },
    response = UserProfilePhotos,
}

impl UserProfilePhotos {
    /// First size with a non-empty `file_path`, scanning photos in order and
    /// the sizes of each photo in order
    pub fn first_available_path(&self) -> Option<&str> {
        self.photos
            .iter()
            .flatten()
            .filter_map(|size| size.file_path.as_deref())
            .find(|path| !path.is_empty())
    }
}

impl Call<'_, RequestGetUserProfilePhotos> {
    /// Sets `offset`
    pub fn offset(self, offset: i32) -> Self {
        self.with(|rq| rq.with_offset(offset))
    }

    /// Sets `limit`
    pub fn limit(self, limit: i32) -> Self {
        self.with(|rq| rq.with_limit(limit))
    }

    /// Fetch the candidate set, pick the first downloadable size, fetch its content
    ///
    /// ## Errors
    /// - any error of the metadata request, unchanged
    /// - `BotError::NotFound` - no size has a download path; nothing is downloaded
    /// - any error of the content request
    pub async fn download(self) -> Result<ApiResponse<Bytes>> {
        let bot = self.bot();
        let user_id = self.request().user_id;
        let photos = self.commit().await?.result;
        trace!("Received {} profile photos", photos.photos.len());
        let Some(path) = photos.first_available_path() else {
            return Err(BotError::NotFound(format!(
                "User {user_id} has no downloadable profile photo"
            )));
        };
        debug!("Downloading profile photo content");
        bot.get_content(path).commit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(path: &str) -> PhotoSize {
        PhotoSize {
            file_id: FileId::from(path),
            file_path: Some(path.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_available_path_row_major() {
        let photos = UserProfilePhotos {
            total_count: 2,
            photos: vec![vec![size(""), size("A")], vec![size("B")]],
        };
        assert_eq!(photos.first_available_path(), Some("A"));
    }

    #[test]
    fn test_first_available_path_skips_missing() {
        let mut no_path = size("x");
        no_path.file_path = None;
        let photos = UserProfilePhotos {
            total_count: 2,
            photos: vec![vec![no_path], vec![], vec![size("C")]],
        };
        assert_eq!(photos.first_available_path(), Some("C"));
    }

    #[test]
    fn test_first_available_path_none() {
        let photos = UserProfilePhotos {
            total_count: 1,
            photos: vec![vec![size("")]],
        };
        assert!(photos.first_available_path().is_none());
        assert!(UserProfilePhotos::default().first_available_path().is_none());
    }

    #[test]
    fn test_request_query() {
        let req = RequestGetUserProfilePhotos::new(UserId(7))
            .with_offset(0)
            .with_limit(1);
        assert_eq!(
            req.payload().unwrap(),
            Payload::Query("user_id=7&offset=0&limit=1".to_string())
        );
    }

    #[test]
    fn test_call_limit_and_offset() {
        let bot = Bot::with_params("T", "http://localhost:8081").unwrap();
        let call = bot
            .get_user_profile_photos(RequestGetUserProfilePhotos::new(UserId(7)))
            .limit(5)
            .offset(2);
        assert_eq!(call.request().limit, Some(5));
        assert_eq!(call.request().offset, Some(2));
    }
}
