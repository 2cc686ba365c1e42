use std::path::Path;

use libroseek::{favorites::Favorites, file::FavoritesFile};

use clap::Subcommand;
use log::trace;

use crate::{app, file};

const EMPTY_QUERY: &str = "Nothing to search for - enter a query and try again.";

const BROWSE_RESULTS: u8 = 20;
const POPULAR_QUERY: &str = "bestseller fiction";
const POPULAR_RESULTS: u8 = 8;

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search the catalog for books matching a free text query
    ///
    /// The free text can be combined with the author and subject options,
    /// which narrow the search using the catalog's qualifier tokens. The
    /// isbn option replaces the free text entirely.
    #[clap(arg_required_else_help = true)]
    Search {
        /// Free text to search for
        query: Vec<String>,

        /// Only books by this author
        #[clap(short, long)]
        author: Option<String>,

        /// Only books about this subject
        #[clap(short, long)]
        subject: Option<String>,

        /// Look up a single book by ISBN instead of free text
        #[clap(long)]
        isbn: Option<String>,

        /// The maximum number of books to show
        #[clap(short, long, default_value_t = 12)]
        max_results: u8,
    },

    /// Browse books of a category
    #[clap(arg_required_else_help = true)]
    Browse {
        /// The category to browse, e.g. fiction, history, science
        category: String,
    },

    /// Show a selection of popular books
    Popular,

    /// List your favorite books
    Favorites,

    /// Remove a book from your favorites using its catalog id
    #[clap(arg_required_else_help = true)]
    Rm {
        /// The catalog id of the book to remove
        id: String,
    },

    /// Switch between the light and dark theme
    Theme,
}

impl Commands {
    pub fn execute(
        self,
        favorites: &mut Favorites,
        store: &mut FavoritesFile,
        data_dir: &Path,
        interact: bool,
    ) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Commands::Search {
                query,
                author,
                subject,
                isbn,
                max_results,
            } => {
                let query =
                    build_query(&query, author.as_deref(), subject.as_deref(), isbn.as_deref());
                if query.is_empty() {
                    trace!("Query is empty after trimming - skipping the catalog request");
                    return Ok(EMPTY_QUERY.to_owned());
                }
                app::search_listing(&query, max_results, favorites, store, interact)
            }
            Commands::Browse { category } => app::search_listing(
                &format!("subject:{category}"),
                BROWSE_RESULTS,
                favorites,
                store,
                interact,
            ),
            Commands::Popular => {
                app::search_listing(POPULAR_QUERY, POPULAR_RESULTS, favorites, store, interact)
            }
            Commands::Favorites => app::favorites_panel(favorites, store, interact),
            Commands::Rm { id } => {
                trace!("Checking the favorites for an entry with this id..");
                if favorites.remove(&id) {
                    Ok("Book removed from favorites".to_owned())
                } else {
                    Ok(format!("No favorite found with the id of '{id}'"))
                }
            }
            Commands::Theme => {
                let theme = file::toggle_theme(data_dir)?;
                Ok(format!("{theme} theme enabled"))
            }
        }
    }
}

/// Assemble the catalog query from the free text and qualifier options.
///
/// An ISBN replaces the free text entirely, author and subject narrow it.
fn build_query(
    terms: &[String],
    author: Option<&str>,
    subject: Option<&str>,
    isbn: Option<&str>,
) -> String {
    if let Some(isbn) = isbn {
        return format!("isbn:{}", isbn.trim());
    }

    let mut query = terms.join(" ").trim().to_owned();
    if let Some(author) = author {
        query.push_str(&format!(" inauthor:{author}"));
    }
    if let Some(subject) = subject {
        query.push_str(&format!(" subject:{subject}"));
    }
    query.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::build_query;

    #[test]
    fn whitespace_only_terms_build_an_empty_query() {
        assert_eq!("", build_query(&["   ".to_owned()], None, None, None));
        assert_eq!("", build_query(&[], None, None, None));
    }

    #[test]
    fn author_and_subject_narrow_the_free_text() {
        let query = build_query(
            &["dune".to_owned()],
            Some("herbert"),
            Some("fiction"),
            None,
        );

        assert_eq!("dune inauthor:herbert subject:fiction", query);
    }

    #[test]
    fn qualifiers_without_free_text_stand_alone() {
        let query = build_query(&[], None, Some("history"), None);

        assert_eq!("subject:history", query);
    }

    #[test]
    fn isbn_replaces_the_free_text() {
        let query = build_query(
            &["dune".to_owned()],
            Some("herbert"),
            None,
            Some("9780441013593"),
        );

        assert_eq!("isbn:9780441013593", query);
    }
}
