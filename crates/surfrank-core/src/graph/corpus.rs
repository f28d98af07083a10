//! Corpus model: pages interned to dense ids with outlink lists

use std::collections::{BTreeMap, BTreeSet};

/// Accumulates pages and their raw link targets before interning.
///
/// Targets are kept as a set, so duplicate links in a page count once.
/// Resolution against the corpus happens in [`CorpusBuilder::build`]:
/// targets that name no corpus page are dropped, as are self-links.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page and the raw targets extracted from it.
    ///
    /// Adding the same page again replaces its targets.
    pub fn add_page<I, S>(&mut self, name: impl Into<String>, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets = targets.into_iter().map(Into::into).collect();
        self.pages.insert(name.into(), targets);
    }

    /// Intern the accumulated pages into a [`Corpus`].
    ///
    /// Page ids are assigned in lexicographic name order, so a given set of
    /// pages always interns the same way regardless of insertion order.
    pub fn build(self) -> Corpus {
        let names: Vec<String> = self.pages.keys().cloned().collect();

        let outlinks = self
            .pages
            .iter()
            .map(|(name, targets)| {
                targets
                    .iter()
                    .filter(|target| *target != name)
                    .filter_map(|target| names.binary_search(target).ok())
                    .collect()
            })
            .collect();

        Corpus { names, outlinks }
    }
}

/// An immutable link graph over a set of pages.
///
/// Pages are identified by dense ids `0..page_count()`, assigned in
/// lexicographic name order. `outlinks[id]` holds the ids a page links to,
/// deduplicated, sorted, with self-links and unresolvable targets already
/// removed. A page with an empty outlink list is dangling.
#[derive(Debug, Clone)]
pub struct Corpus {
    names: Vec<String>,
    outlinks: Vec<Vec<usize>>,
}

impl Corpus {
    pub fn page_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a page's id by name.
    pub fn page_id(&self, name: &str) -> Option<usize> {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .ok()
    }

    /// Look up a page's name by id.
    pub fn page_name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Page names in id order (lexicographic).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Ids of the pages `id` links to. Empty for out-of-range ids.
    pub fn outlinks(&self, id: usize) -> &[usize] {
        self.outlinks.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn out_degree(&self, id: usize) -> usize {
        self.outlinks(id).len()
    }

    /// A dangling page has no outlinks anywhere in the corpus.
    pub fn is_dangling(&self, id: usize) -> bool {
        self.out_degree(id) == 0
    }

    /// Invert the link graph: `incoming[p]` lists the pages linking to `p`.
    pub fn reverse_index(&self) -> Vec<Vec<usize>> {
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); self.names.len()];
        for (source, targets) in self.outlinks.iter().enumerate() {
            for &target in targets {
                incoming[target].push(source);
            }
        }
        incoming
    }
}
