//! Filesystem persistence for the favorites collection.
//!
//! The collection is stored as a single JSON file which is rewritten
//! wholesale after every mutation - there is no incremental persistence.

use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, Write},
    path::Path,
};

use crate::{favorites::Favorites, Error, ErrorKind};

/// A reference to the open favorites file.
///
/// `FavoritesFile`s are automatically closed when they go out of scope.
/// Errors detected on closing are ignored by the implementation of `Drop`.
pub struct FavoritesFile {
    file: File,
}

impl FavoritesFile {
    const fn new(file: File) -> Self {
        Self { file }
    }

    /// Attempts to open an existing favorites file in read and write mode.
    ///
    /// # Errors
    ///
    /// This function will return an error if `path` does not already exist
    /// or the user lacks permissions to open the file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map(Self::new)
            .map_err(|e| {
                Error::wrap_with(
                    ErrorKind::IO,
                    e,
                    format!(
                        "Failed to open the '{}' file for reading and writing",
                        path.display()
                    ),
                )
            })
    }

    /// Creates a new favorites file in read and write mode.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file already exists or the
    /// user lacks permissions to create the file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        OpenOptions::new()
            .create_new(true)
            .read(true)
            .write(true)
            .open(path)
            .map(Self::new)
            .map_err(|e| {
                Error::wrap_with(
                    ErrorKind::IO,
                    e,
                    format!(
                        "Failed to create and open the '{}' file for reading and writing",
                        path.display()
                    ),
                )
            })
    }

    /// Read the stored collection.
    ///
    /// Malformed stored text is recovered silently as an empty collection,
    /// only a failure to read the file itself is an error.
    ///
    /// # Errors
    ///
    /// An `Err` of kind [`ErrorKind::IO`] when the file cannot be read.
    pub fn read(&mut self) -> Result<Favorites, Error> {
        let mut content = String::new();
        self.file
            .read_to_string(&mut content)
            .map_err(|e| Error::wrap_with(ErrorKind::IO, e, "Cannot read contents of file"))?;

        log::trace!("{} bytes read from the favorites file", content.len());
        Ok(Favorites::from_json(&content))
    }

    /// Replace the stored text with the serialized collection.
    ///
    /// # Errors
    ///
    /// An `Err` when serialization fails or the file cannot be written.
    pub fn write(&mut self, favorites: &Favorites) -> Result<(), Error> {
        fn overwrite_file_from_start(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
            // Rewind the cursor back to the start of the file to write over
            // the contents and set the length of the file to be equal to
            // bytes so that existing data is removed
            file.rewind()?;
            file.set_len(bytes.len() as u64)?;
            file.write_all(bytes)
        }

        let bytes = favorites.to_json()?.into_bytes();
        overwrite_file_from_start(&mut self.file, &bytes)
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::book::BookSummary;

    use assert_fs::{
        fixture::{FileTouch, FileWriteStr, PathChild},
        NamedTempFile, TempDir,
    };

    fn summary(id: &str) -> BookSummary {
        BookSummary {
            id: id.to_owned(),
            title: "Dune".to_owned(),
            authors: "Frank Herbert".to_owned(),
            thumbnail: "https://books.example/cover.jpg".to_owned(),
            preview_link: "https://books.example/preview".to_owned(),
        }
    }

    fn create_temp_file(name: &str) -> NamedTempFile {
        // create temp file locally
        let file = NamedTempFile::new(name).expect("Cannot create temp file for test");
        // touch the temp file so it can be discovered by code
        file.touch().expect("Failure on touch of new temp file");
        file
    }

    #[test]
    #[should_panic(
        expected = "Failed to open the 'file does not exist.json' file for reading and writing"
    )]
    fn err_when_trying_to_open_file_that_does_not_exist() {
        FavoritesFile::open("file does not exist.json").unwrap();
    }

    #[test]
    #[should_panic(expected = "Failed to create and open")]
    fn err_when_trying_to_create_file_that_already_exists() {
        let file = create_temp_file("favorites.json");
        let res = FavoritesFile::create(NamedTempFile::path(&file));
        drop(res.unwrap());
    }

    #[test]
    fn open_existing_temp_file() {
        let file = create_temp_file("favorites.json");
        let res = FavoritesFile::open(NamedTempFile::path(&file));
        assert!(res.is_ok());
        drop(res);
        file.close().unwrap();
    }

    #[test]
    fn empty_file_reads_as_an_empty_collection() {
        let file = create_temp_file("favorites.json");

        let favorites = FavoritesFile::open(NamedTempFile::path(&file))
            .unwrap()
            .read()
            .unwrap();

        assert!(favorites.list().is_empty());
    }

    #[test]
    fn malformed_file_reads_as_an_empty_collection() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let child = dir.child("favorites.json");
        child.write_str("not json").unwrap();

        let favorites = FavoritesFile::open(child.path()).unwrap().read().unwrap();

        assert!(favorites.list().is_empty());
    }

    #[test]
    fn written_collection_reads_back_in_order() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let path = dir.child("favorites.json").path().to_path_buf();

        let mut favorites = Favorites::default();
        favorites.toggle(summary("a"));
        favorites.toggle(summary("b"));

        FavoritesFile::create(&path).unwrap().write(&favorites).unwrap();

        let restored = FavoritesFile::open(&path).unwrap().read().unwrap();
        assert_eq!(favorites.list(), restored.list());
    }

    #[test]
    fn write_replaces_the_previous_contents_wholesale() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let path = dir.child("favorites.json").path().to_path_buf();

        let mut favorites = Favorites::default();
        favorites.toggle(summary("a"));
        favorites.toggle(summary("b"));

        let mut file = FavoritesFile::create(&path).unwrap();
        file.write(&favorites).unwrap();

        // shrink the collection and rewrite, no stale bytes may remain
        favorites.remove("b");
        file.write(&favorites).unwrap();
        drop(file);

        let restored = FavoritesFile::open(&path).unwrap().read().unwrap();
        let ids: Vec<_> = restored.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(vec!["a"], ids);
    }
}
