//! Renders raw catalog volumes into display cards.
//!
//! Catalog records are allowed to miss almost every field, so each derived
//! value has a fallback and a malformed record can never abort rendering of
//! the remaining ones.

use std::fmt;

use crate::book::{BookSummary, ImageLinks, Volume, VolumeInfo};

/// Cover shown when a volume has no image links at all.
pub const PLACEHOLDER_COVER: &str = r#"data:image/svg+xml,<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 300"><rect width="200" height="300" fill="%23f0f0f0"/><text x="100" y="150" text-anchor="middle" fill="%23999" font-family="Arial" font-size="16">No Cover</text></svg>"#;

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_AUTHOR: &str = "Unknown Author";
const NO_DESCRIPTION: &str = "No description available.";
const DEAD_LINK: &str = "#";

const DESCRIPTION_LIMIT: usize = 150;
const ELLIPSIS: &str = "...";

/// A single book rendered for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookCard {
    /// The catalog identifier of the book.
    pub id: String,
    /// Title, falling back to a placeholder when the record has none.
    pub title: String,
    /// Authors joined into a single line.
    pub authors: String,
    /// Description with markup stripped and truncated for display.
    pub description: String,
    /// Cover image URL, always non-empty and never plain `http:`.
    pub cover: String,
    /// Reading preview URL, or a dead anchor when the record has none.
    pub preview_link: String,
    /// Whether the book is currently favorited.
    pub favorite: bool,
}

impl BookCard {
    /// Derive a display card from a raw catalog volume.
    #[must_use]
    pub fn new(volume: Volume, favorite: bool) -> Self {
        // Deconstruct the volume to take ownership of fields (avoids cloning).
        let Volume {
            id,
            volume_info:
                VolumeInfo {
                    title,
                    authors,
                    description,
                    image_links,
                    preview_link,
                    info_link,
                },
        } = volume;

        let title = title.unwrap_or_else(|| UNKNOWN_TITLE.to_owned());

        let mut authors = authors.unwrap_or_default();
        authors.retain(|author| !author.is_empty());
        let authors = if authors.is_empty() {
            UNKNOWN_AUTHOR.to_owned()
        } else {
            authors.join(", ")
        };

        let description = description.map_or_else(
            || NO_DESCRIPTION.to_owned(),
            |d| shorten(&strip_tags(&d), DESCRIPTION_LIMIT),
        );

        let cover = image_links
            .and_then(|ImageLinks { thumbnail, small_thumbnail }| thumbnail.or(small_thumbnail))
            .map_or_else(|| PLACEHOLDER_COVER.to_owned(), secure);

        let preview_link = preview_link
            .or(info_link)
            .unwrap_or_else(|| DEAD_LINK.to_owned());

        Self {
            id,
            title,
            authors,
            description,
            cover,
            preview_link,
            favorite,
        }
    }

    /// The summary stored when this card is favorited.
    #[must_use]
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            authors: self.authors.clone(),
            thumbnail: self.cover.clone(),
            preview_link: self.preview_link.clone(),
        }
    }
}

impl fmt::Display for BookCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "by {}", self.authors)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "Preview: {}", self.preview_link)?;
        write!(
            f,
            "[{}]",
            if self.favorite { "Favorited" } else { "Favorite" }
        )
    }
}

/// An ordered set of rendered cards for one search action.
#[derive(Debug, Default)]
pub struct Listing {
    cards: Vec<BookCard>,
}

impl Listing {
    /// True when the search produced no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The rendered cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[BookCard] {
        &self.cards
    }

    /// Consumes the listing, returning the rendered cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<BookCard> {
        self.cards
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return write!(f, "No books found\nTry searching with different keywords.");
        }

        let mut cards = self.cards.iter();
        if let Some(card) = cards.next() {
            write!(f, "{card}")?;
        }
        for card in cards {
            write!(f, "\n\n{card}")?;
        }
        Ok(())
    }
}

/// Render catalog volumes into a listing, marking favorited books.
///
/// The lookup receives each volume id so the caller decides what counts as
/// favorited, which keeps the renderer independent of the store.
#[must_use]
pub fn render<F>(volumes: Vec<Volume>, is_favorite: F) -> Listing
where
    F: Fn(&str) -> bool,
{
    let cards = volumes
        .into_iter()
        .map(|volume| {
            let favorite = is_favorite(&volume.id);
            BookCard::new(volume, favorite)
        })
        .collect();
    Listing { cards }
}

/// Remove embedded markup tags, keeping the text between them.
fn strip_tags(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => stripped.push(c),
            _ => {}
        }
    }
    stripped
}

/// Truncate to `limit` characters, marking the cut with an ellipsis only
/// when something was actually cut.
fn shorten(text: &str, limit: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        head + ELLIPSIS
    } else {
        head
    }
}

/// Upgrade a plain `http:` URL to `https:`.
fn secure(url: String) -> String {
    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{rest}"),
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{ImageLinks, Volume, VolumeInfo};

    fn bare_volume(id: &str) -> Volume {
        Volume {
            id: id.to_owned(),
            volume_info: VolumeInfo::default(),
        }
    }

    fn volume_with_info(info: VolumeInfo) -> Volume {
        Volume {
            id: "vol1".to_owned(),
            volume_info: info,
        }
    }

    #[test]
    fn missing_fields_resolve_to_fallbacks() {
        let card = BookCard::new(bare_volume("vol1"), false);

        assert_eq!("Unknown Title", card.title);
        assert_eq!("Unknown Author", card.authors);
        assert_eq!("No description available.", card.description);
        assert_eq!(PLACEHOLDER_COVER, card.cover);
        assert_eq!("#", card.preview_link);
    }

    #[test]
    fn empty_author_list_falls_back_to_unknown_author() {
        let card = BookCard::new(
            volume_with_info(VolumeInfo {
                authors: Some(vec![]),
                ..VolumeInfo::default()
            }),
            false,
        );

        assert_eq!("Unknown Author", card.authors);
    }

    #[test]
    fn authors_are_joined_with_a_comma() {
        let card = BookCard::new(
            volume_with_info(VolumeInfo {
                authors: Some(vec!["Frank Herbert".to_owned(), "Brian Herbert".to_owned()]),
                ..VolumeInfo::default()
            }),
            false,
        );

        assert_eq!("Frank Herbert, Brian Herbert", card.authors);
    }

    #[test]
    fn description_of_exactly_the_limit_is_left_unmodified() {
        let description = "a".repeat(150);
        let card = BookCard::new(
            volume_with_info(VolumeInfo {
                description: Some(description.clone()),
                ..VolumeInfo::default()
            }),
            false,
        );

        assert_eq!(description, card.description);
    }

    #[test]
    fn description_over_the_limit_is_truncated_with_an_ellipsis() {
        let card = BookCard::new(
            volume_with_info(VolumeInfo {
                description: Some("a".repeat(151)),
                ..VolumeInfo::default()
            }),
            false,
        );

        let expected = "a".repeat(150) + "...";
        assert_eq!(expected, card.description);
    }

    #[test]
    fn markup_is_stripped_before_truncation() {
        let card = BookCard::new(
            volume_with_info(VolumeInfo {
                description: Some("<p>A <b>short</b> blurb</p>".to_owned()),
                ..VolumeInfo::default()
            }),
            false,
        );

        assert_eq!("A short blurb", card.description);
    }

    #[test]
    fn cover_prefers_the_full_thumbnail_and_upgrades_to_https() {
        let card = BookCard::new(
            volume_with_info(VolumeInfo {
                image_links: Some(ImageLinks {
                    thumbnail: Some("http://books.example/full.jpg".to_owned()),
                    small_thumbnail: Some("http://books.example/small.jpg".to_owned()),
                }),
                ..VolumeInfo::default()
            }),
            false,
        );

        assert_eq!("https://books.example/full.jpg", card.cover);
    }

    #[test]
    fn cover_falls_back_to_the_small_thumbnail() {
        let card = BookCard::new(
            volume_with_info(VolumeInfo {
                image_links: Some(ImageLinks {
                    thumbnail: None,
                    small_thumbnail: Some("https://books.example/small.jpg".to_owned()),
                }),
                ..VolumeInfo::default()
            }),
            false,
        );

        assert_eq!("https://books.example/small.jpg", card.cover);
    }

    #[test]
    fn preview_falls_back_to_the_info_link() {
        let card = BookCard::new(
            volume_with_info(VolumeInfo {
                info_link: Some("https://books.example/info".to_owned()),
                ..VolumeInfo::default()
            }),
            false,
        );

        assert_eq!("https://books.example/info", card.preview_link);
    }

    #[test]
    fn favorited_ids_are_marked_by_the_lookup() {
        let volumes = vec![bare_volume("vol1"), bare_volume("vol2")];

        let listing = render(volumes, |id| id == "vol2");
        let cards = listing.cards();

        assert!(!cards[0].favorite);
        assert!(cards[1].favorite);
    }

    #[test]
    fn empty_listing_displays_the_no_results_placeholder() {
        let listing = render(vec![], |_| false);

        assert!(listing.is_empty());
        assert!(listing.to_string().contains("No books found"));
    }

    #[test]
    fn listing_displays_the_favorite_toggle_state() {
        let listing = render(vec![bare_volume("vol1")], |_| true);

        let text = listing.to_string();
        assert!(text.contains("[Favorited]"));
        assert!(!text.contains("[Favorite]"));
    }

    #[test]
    fn toggling_a_favorite_changes_only_that_card_on_rerender() {
        let volumes = || vec![bare_volume("vol1"), bare_volume("vol2"), bare_volume("vol3")];
        let mut favorites = crate::favorites::Favorites::default();

        let listing = render(volumes(), |id| favorites.is_favorite(id));
        assert!(listing.cards().iter().all(|card| !card.favorite));

        favorites.toggle(listing.cards()[1].summary());

        let rerendered = render(volumes(), |id| favorites.is_favorite(id));
        let flags: Vec<bool> = rerendered.cards().iter().map(|card| card.favorite).collect();
        assert_eq!(vec![false, true, false], flags);
        assert_eq!(1, favorites.list().len());

        favorites.remove("vol2");

        let rerendered = render(volumes(), |id| favorites.is_favorite(id));
        assert!(rerendered.cards().iter().all(|card| !card.favorite));
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn summary_carries_the_rendered_values() {
        let card = BookCard::new(bare_volume("vol1"), false);
        let summary = card.summary();

        assert_eq!("vol1", summary.id);
        assert_eq!("Unknown Title", summary.title);
        assert_eq!(PLACEHOLDER_COVER, summary.thumbnail);
        assert_eq!("#", summary.preview_link);
    }
}
