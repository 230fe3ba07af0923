mod tracks;

pub use tracks::TrackManager;
pub use tracks::TrackStoreError;
