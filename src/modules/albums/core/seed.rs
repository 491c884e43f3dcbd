use crate::modules::albums::core::album::{Album, AlbumId};

const SEED_ALBUMS: [(AlbumId, &str, &str, f64, &str); 6] = [
    (
        1,
        "You, Me and an App Id",
        "Daprize",
        10.99,
        "https://aka.ms/albums-daprlogo",
    ),
    (
        2,
        "Seven Revision Army",
        "The Blue-Green Stripes",
        13.99,
        "https://aka.ms/albums-containerappslogo",
    ),
    (
        3,
        "Scale It Up",
        "KEDA Club",
        13.99,
        "https://aka.ms/albums-kedalogo",
    ),
    (
        4,
        "Lost in Translation",
        "MegaDNS",
        12.99,
        "https://aka.ms/albums-envoylogo",
    ),
    (
        5,
        "Lock Down Your Love",
        "V is for VNET",
        12.99,
        "https://aka.ms/albums-vnetlogo",
    ),
    (
        6,
        "Sweet Container O' Mine",
        "Guns N Probeses",
        14.99,
        "https://aka.ms/albums-containerappslogo",
    ),
];

/// The sample catalog every fresh store starts from.
pub fn seed_albums() -> Vec<Album> {
    SEED_ALBUMS
        .iter()
        .map(|&(id, title, artist, price, image_url)| Album {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            price,
            image_url: image_url.to_string(),
        })
        .collect()
}
