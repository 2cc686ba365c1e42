use libroseek::{card::render, favorites::Favorites, file::FavoritesFile};

use log::warn;

use crate::interact;

pub const SEARCH_FAILED: &str = "Search failed. Please try again later.";

type CommandResult = Result<String, Box<dyn std::error::Error>>;

/// Fetch matching books, render them against the favorites and either print
/// the listing or enter the interactive toggle loop.
pub fn search_listing(
    query: &str,
    max_results: u8,
    favorites: &mut Favorites,
    store: &mut FavoritesFile,
    interact: bool,
) -> CommandResult {
    let volumes = match libroseek::search_books(query, max_results) {
        Ok(volumes) => volumes,
        Err(err) => {
            // degrade to the generic failure message, never retried
            warn!("Catalog request failed: {err}");
            return Ok(SEARCH_FAILED.to_owned());
        }
    };

    let listing = render(volumes, |id| favorites.is_favorite(id));

    if interact && !listing.is_empty() {
        println!("{listing}\n");
        interact::user_toggle_favorites(&listing.into_cards(), favorites, store)?;
        Ok(format!("{} books in your favorites", favorites.list().len()))
    } else {
        Ok(listing.to_string())
    }
}

/// Show the favorites panel, or the empty-state message when there are no
/// favorites yet. In interactive mode entries can be removed one at a time.
pub fn favorites_panel(
    favorites: &mut Favorites,
    store: &mut FavoritesFile,
    interact: bool,
) -> CommandResult {
    if favorites.list().is_empty() {
        return Ok(
            "You have no favorite books yet - search for a book and favorite it from the results."
                .to_owned(),
        );
    }

    let panel = favorites
        .list()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");

    if interact {
        println!("{panel}\n");
        interact::user_remove_favorites(favorites, store)?;
        Ok(format!("{} books in your favorites", favorites.list().len()))
    } else {
        Ok(panel)
    }
}
