//! Corpus loading from a directory of HTML pages

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SurfrankError};
use crate::graph::{extract_links, Corpus, CorpusBuilder};

/// Parse a directory of HTML pages into a [`Corpus`].
///
/// Only regular `*.html` files at the top level of `directory` are read;
/// hidden files and subdirectories are skipped. Each page is keyed by its
/// file name, and its anchor targets are resolved against the other pages
/// during the build, so external URLs, fragments, and self-links never make
/// it into the graph.
pub fn crawl_corpus(directory: &Path) -> Result<Corpus> {
    let mut builder = CorpusBuilder::new();
    let mut pages = 0usize;

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !is_page(&entry) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let content = fs::read_to_string(entry.path())?;
        let links = extract_links(&content);
        debug!(page = %name, links = links.len(), "crawled page");

        builder.add_page(name, links);
        pages += 1;
    }

    if pages == 0 {
        return Err(SurfrankError::NoPages(directory.to_path_buf()));
    }

    Ok(builder.build())
}

fn is_page(entry: &DirEntry) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && name.ends_with(".html")
}
