use log::{info, trace};
use reqwest::Url;
use serde::Deserialize;

use crate::{book::Volume, Error, ErrorKind};

use super::Client;

const VOLUMES_URL: &str = "https://www.googleapis.com/books/v1/volumes";

pub(crate) fn search<C: Client>(query: &str, max_results: u8) -> Result<Vec<Volume>, Error> {
    info!("Searching the volumes catalog for '{query}'");
    let max = max_results.to_string();
    let url = Url::parse_with_params(
        VOLUMES_URL,
        [
            ("q", query),
            ("maxResults", max.as_str()),
            ("printType", "books"),
            ("orderBy", "relevance"),
        ],
    )
    .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

    let client = C::default();
    let VolumesModel { mut items } = client.get_json(url.as_str())?;

    trace!("Request returned {} volumes", items.len());

    // The endpoint already honours maxResults but callers rely on the
    // length bound, so enforce it here as well.
    items.truncate(usize::from(max_results));
    Ok(items)
}

/// A page of results from the volumes endpoint.
///
/// The endpoint omits `items` entirely for a query with no matches, which
/// is a zero-result response rather than an error.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct VolumesModel {
    #[serde(default)]
    items: Vec<Volume>,
}
