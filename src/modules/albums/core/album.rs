// Album record and the field rules every stored album satisfies.
//
// Responsibilities
// - Define the stored record, the full field set used on create, and the
//   partial field set used on update.
// - Validate title, artist, price and image URL.
// - Merge a patch onto an existing record without touching absent fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub type AlbumId = u64;

/// Upper bound on `title` and `artist`, counted in characters.
pub const MAX_TEXT_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlbumValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("price must be a finite number greater than or equal to 0, got {0}")]
    InvalidPrice(f64),

    #[error("image_url must be an absolute URL: {0}")]
    InvalidImageUrl(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub image_url: String,
}

/// Fields supplied when creating an album. The id is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub image_url: String,
}

/// Partial update: `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl Album {
    pub fn validate(&self) -> Result<(), AlbumValidationError> {
        validate_title(&self.title)?;
        validate_artist(&self.artist)?;
        validate_price(self.price)?;
        validate_image_url(&self.image_url)
    }

    /// Returns a copy of this album with every field present in `patch` overridden.
    pub fn apply(&self, patch: &AlbumPatch) -> Album {
        Album {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            artist: patch.artist.clone().unwrap_or_else(|| self.artist.clone()),
            price: patch.price.unwrap_or(self.price),
            image_url: patch
                .image_url
                .clone()
                .unwrap_or_else(|| self.image_url.clone()),
        }
    }
}

impl NewAlbum {
    pub fn validate(&self) -> Result<(), AlbumValidationError> {
        validate_title(&self.title)?;
        validate_artist(&self.artist)?;
        validate_price(self.price)?;
        validate_image_url(&self.image_url)
    }

    pub fn into_album(self, id: AlbumId) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

impl AlbumPatch {
    pub fn validate(&self) -> Result<(), AlbumValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(artist) = &self.artist {
            validate_artist(artist)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(image_url) = &self.image_url {
            validate_image_url(image_url)?;
        }
        Ok(())
    }
}

pub fn validate_title(title: &str) -> Result<(), AlbumValidationError> {
    validate_text("title", title)
}

pub fn validate_artist(artist: &str) -> Result<(), AlbumValidationError> {
    validate_text("artist", artist)
}

pub fn validate_price(price: f64) -> Result<(), AlbumValidationError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(AlbumValidationError::InvalidPrice(price))
    }
}

pub fn validate_image_url(image_url: &str) -> Result<(), AlbumValidationError> {
    Url::parse(image_url)
        .map(|_| ())
        .map_err(|e| AlbumValidationError::InvalidImageUrl(e.to_string()))
}

fn validate_text(field: &'static str, value: &str) -> Result<(), AlbumValidationError> {
    let actual = value.chars().count();
    if actual == 0 {
        return Err(AlbumValidationError::Empty { field });
    }
    if actual > MAX_TEXT_LENGTH {
        return Err(AlbumValidationError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod album_tests {
    use super::*;
    use crate::tests::fixtures::NewAlbumBuilder;
    use rstest::rstest;

    fn album() -> Album {
        NewAlbumBuilder::new().build().into_album(7)
    }

    #[rstest]
    fn it_should_accept_a_valid_new_album() {
        assert_eq!(NewAlbumBuilder::new().build().validate(), Ok(()));
    }

    #[rstest]
    fn it_should_reject_an_empty_title() {
        let new_album = NewAlbumBuilder::new().title("").build();
        assert_eq!(
            new_album.validate(),
            Err(AlbumValidationError::Empty { field: "title" })
        );
    }

    #[rstest]
    fn it_should_reject_a_title_over_the_limit() {
        let new_album = NewAlbumBuilder::new()
            .title("x".repeat(MAX_TEXT_LENGTH + 1))
            .build();
        assert_eq!(
            new_album.validate(),
            Err(AlbumValidationError::TooLong {
                field: "title",
                max: 200,
                actual: 201,
            })
        );
    }

    #[rstest]
    fn it_should_count_characters_not_bytes() {
        let title = "é".repeat(MAX_TEXT_LENGTH);
        assert_eq!(validate_title(&title), Ok(()));
    }

    #[rstest]
    fn it_should_reject_an_empty_artist() {
        let new_album = NewAlbumBuilder::new().artist("").build();
        assert_eq!(
            new_album.validate(),
            Err(AlbumValidationError::Empty { field: "artist" })
        );
    }

    #[rstest]
    fn it_should_reject_a_relative_image_url() {
        let new_album = NewAlbumBuilder::new().image_url("covers/mine.png").build();
        assert!(matches!(
            new_album.validate(),
            Err(AlbumValidationError::InvalidImageUrl(_))
        ));
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(14.99, true)]
    #[case(-0.01, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn it_should_only_accept_finite_non_negative_prices(#[case] price: f64, #[case] ok: bool) {
        assert_eq!(validate_price(price).is_ok(), ok);
    }

    #[rstest]
    #[case("https://example.com/cover.png", true)]
    #[case("https://aka.ms/albums-daprlogo", true)]
    #[case("cover.png", false)]
    #[case("/images/cover.png", false)]
    #[case("", false)]
    fn it_should_only_accept_absolute_urls(#[case] image_url: &str, #[case] ok: bool) {
        assert_eq!(validate_image_url(image_url).is_ok(), ok);
    }

    #[rstest]
    fn it_should_only_override_fields_present_in_the_patch() {
        let current = album();
        let patch = AlbumPatch {
            price: Some(2.50),
            ..AlbumPatch::default()
        };

        let merged = current.apply(&patch);

        assert_eq!(merged.price, 2.50);
        assert_eq!(merged.id, current.id);
        assert_eq!(merged.title, current.title);
        assert_eq!(merged.artist, current.artist);
        assert_eq!(merged.image_url, current.image_url);
    }

    #[rstest]
    fn it_should_leave_the_album_unchanged_for_an_empty_patch() {
        let current = album();
        assert_eq!(current.apply(&AlbumPatch::default()), current);
    }

    #[rstest]
    fn it_should_validate_only_present_patch_fields() {
        let patch = AlbumPatch {
            image_url: Some("not a url".to_string()),
            ..AlbumPatch::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(AlbumValidationError::InvalidImageUrl(_))
        ));
        assert_eq!(AlbumPatch::default().validate(), Ok(()));
    }
}
