pub mod video;

pub use video::{
    PlayVideoResponse, Picture, UploadResponse, Video, VideoList, VideoSort, DEFAULT_PAGE,
    DEFAULT_PER_PAGE, UNTITLED,
};
