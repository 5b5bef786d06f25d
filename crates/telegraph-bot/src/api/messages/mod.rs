pub mod edit_live_location;
pub mod forward_message;
pub mod send_audio;
pub mod send_contact;
pub mod send_document;
pub mod send_location;
pub mod send_message;
pub mod send_photo;
pub mod send_venue;
pub mod send_video;
pub mod send_video_note;
pub mod send_voice;
pub mod stop_live_location;

pub use edit_live_location::*;
pub use forward_message::*;
pub use send_audio::*;
pub use send_contact::*;
pub use send_document::*;
pub use send_location::*;
pub use send_message::*;
pub use send_photo::*;
pub use send_venue::*;
pub use send_video::*;
pub use send_video_note::*;
pub use send_voice::*;
pub use stop_live_location::*;
