use dialoguer::theme::ColorfulTheme;
use eyre::{eyre, Context, Result};
use libroseek::{card::BookCard, favorites::Favorites, file::FavoritesFile};

pub fn user_select<S: ToString>(prompt: &str, items: &[S]) -> Result<Option<usize>> {
    dialoguer::Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection failed"))
}

/// Let the user flip favorites from a rendered listing until they cancel.
///
/// Every mutation is written through to the favorites file straight away so
/// a cancelled session loses nothing.
pub fn user_toggle_favorites(
    cards: &[BookCard],
    favorites: &mut Favorites,
    store: &mut FavoritesFile,
) -> Result<()> {
    loop {
        let labels: Vec<String> = cards
            .iter()
            .map(|card| {
                let marker = if favorites.is_favorite(&card.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                format!("{marker} {}", card.title)
            })
            .collect();

        let index = match user_select("Toggle a favorite (Esc to finish)", &labels)? {
            Some(index) => index,
            None => return Ok(()),
        };

        let card = cards.get(index).ok_or_else(|| {
            eyre!("Internal error: user selection should be valid and not cause an out of index error")
        })?;

        let added = favorites.toggle(card.summary());
        persist(favorites, store)?;
        println!(
            "'{}' {} favorites",
            card.title,
            if added { "added to" } else { "removed from" }
        );
    }
}

/// Let the user remove stored favorites until they cancel or none are left.
pub fn user_remove_favorites(
    favorites: &mut Favorites,
    store: &mut FavoritesFile,
) -> Result<()> {
    while !favorites.list().is_empty() {
        let titles: Vec<String> = favorites
            .list()
            .iter()
            .map(|book| book.title.clone())
            .collect();

        let index = match user_select("Remove a favorite (Esc to finish)", &titles)? {
            Some(index) => index,
            None => return Ok(()),
        };

        let id = favorites
            .list()
            .get(index)
            .map(|book| book.id.clone())
            .ok_or_else(|| {
                eyre!("Internal error: user selection should be valid and not cause an out of index error")
            })?;

        favorites.remove(&id);
        persist(favorites, store)?;
    }
    Ok(())
}

fn persist(favorites: &mut Favorites, store: &mut FavoritesFile) -> Result<()> {
    if favorites.dirty() {
        store
            .write(favorites)
            .wrap_err("Failed to update the favorites file")?;
    }
    Ok(())
}
