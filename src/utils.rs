use crate::types::{PlaylistTrack, Track};

const BAD_CHARACTERS: &[char] = &[
    '/', '\\', '?', '%', '*', ':', '|', '"', '\'', '(', ')', '.', '<', '>', '-', ' ',
];

pub fn sanitize_file_name(name: &str) -> String {
    name.chars().filter(|c| !BAD_CHARACTERS.contains(c)).collect()
}

pub fn track_file_name(name: &str) -> String {
    format!("{}.mp3", sanitize_file_name(name))
}

pub fn parse_track(raw: &PlaylistTrack, include_file_name: bool) -> Track {
    Track {
        name: raw.name.clone(),
        artist: raw
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        url: raw.external_urls.spotify.clone(),
        file_name: include_file_name.then(|| track_file_name(&raw.name)),
    }
}

pub fn backfill_file_names(tracks: Vec<Track>) -> Vec<Track> {
    tracks
        .into_iter()
        .map(|track| {
            let file_name = track
                .file_name
                .unwrap_or_else(|| track_file_name(&track.name));
            Track {
                file_name: Some(file_name),
                ..track
            }
        })
        .collect()
}

pub fn search_query(track: &Track) -> String {
    format!("ytsearch:{} {}", track.artist, track.name)
}
