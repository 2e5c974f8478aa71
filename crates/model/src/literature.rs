// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SiteXmlError;
use crate::record::{FromRecord, Record};
use crate::value::ValueKind;
use serde::Serialize;

/// A bibliographic reference backing an indicator value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteratureSource {
    title: String,
    #[serde(rename = "firstAuthor", skip_serializing_if = "Option::is_none")]
    first_author: Option<String>,
    #[serde(rename = "secondaryAuthors", skip_serializing_if = "Option::is_none")]
    secondary_authors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    booktitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(rename = "DOI", skip_serializing_if = "Option::is_none")]
    doi: Option<String>,
}

impl LiteratureSource {
    /// Creates a new `LiteratureSource` with only a title.
    ///
    /// # Arguments
    ///
    /// * `title` - The title of the publication
    #[must_use]
    pub const fn new(title: String) -> Self {
        Self {
            title,
            first_author: None,
            secondary_authors: None,
            year: None,
            booktitle: None,
            language: None,
            doi: None,
        }
    }

    #[must_use]
    pub fn with_first_author(mut self, first_author: String) -> Self {
        self.first_author = Some(first_author);
        self
    }

    #[must_use]
    pub fn with_secondary_authors(mut self, secondary_authors: String) -> Self {
        self.secondary_authors = Some(secondary_authors);
        self
    }

    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn with_booktitle(mut self, booktitle: String) -> Self {
        self.booktitle = Some(booktitle);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: String) -> Self {
        self.language = Some(language);
        self
    }

    #[must_use]
    pub fn with_doi(mut self, doi: String) -> Self {
        self.doi = Some(doi);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.first_author.as_deref()
    }

    #[must_use]
    pub fn secondary_authors(&self) -> Option<&str> {
        self.secondary_authors.as_deref()
    }

    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    #[must_use]
    pub fn booktitle(&self) -> Option<&str> {
        self.booktitle.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }
}

impl FromRecord for LiteratureSource {
    const KIND: ValueKind = ValueKind::LiteratureSource;

    fn take_from(record: &mut Record) -> Result<Self, SiteXmlError> {
        const TEXT: &[ValueKind] = &[ValueKind::Text];

        Ok(Self {
            title: record.required("title", TEXT)?,
            first_author: record.optional("firstAuthor", TEXT)?,
            secondary_authors: record.optional("secondaryAuthors", TEXT)?,
            year: record.optional("year", &[ValueKind::Integer])?,
            booktitle: record.optional("booktitle", TEXT)?,
            language: record.optional("language", TEXT)?,
            doi: record.optional("DOI", TEXT)?,
        })
    }
}
