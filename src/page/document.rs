use crate::core::error::VerifyError;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Parsed response body, queried with CSS selectors.
///
/// Single-value accessors require the selector to match exactly one element;
/// a page with duplicated markup fails instead of silently using the first hit.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    fn selector(css: &str) -> Result<Selector, VerifyError> {
        Selector::parse(css).map_err(|e| VerifyError::InvalidSelector {
            selector: css.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn select_all(&self, css: &str) -> Result<Vec<ElementRef<'_>>, VerifyError> {
        let selector = Self::selector(css)?;
        Ok(self.html.select(&selector).collect())
    }

    pub fn count(&self, css: &str) -> Result<usize, VerifyError> {
        let n = self.select_all(css)?.len();
        debug!("selector `{}` matched {} element(s)", css, n);
        Ok(n)
    }

    pub fn expect_count(&self, css: &str, expected: usize) -> Result<(), VerifyError> {
        let actual = self.count(css)?;
        if actual == expected {
            Ok(())
        } else {
            Err(VerifyError::Cardinality {
                selector: css.to_string(),
                expected,
                actual,
            })
        }
    }

    pub fn expect_single(&self, css: &str) -> Result<ElementRef<'_>, VerifyError> {
        let mut matches = self.select_all(css)?;
        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(VerifyError::SelectorMiss {
                selector: css.to_string(),
                index: 0,
                matched: 0,
            }),
            n => Err(VerifyError::Cardinality {
                selector: css.to_string(),
                expected: 1,
                actual: n,
            }),
        }
    }

    /// Inner HTML of the single match, trimmed.
    pub fn single_html(&self, css: &str) -> Result<String, VerifyError> {
        Ok(self.expect_single(css)?.inner_html().trim().to_string())
    }

    /// Text content of the single match with whitespace runs collapsed.
    pub fn single_text(&self, css: &str) -> Result<String, VerifyError> {
        let element = self.expect_single(css)?;
        Ok(normalize_text(element.text()))
    }

    pub fn single_attr(&self, css: &str, attribute: &str) -> Result<String, VerifyError> {
        self.expect_single(css)?
            .value()
            .attr(attribute)
            .map(|v| v.to_string())
            .ok_or_else(|| VerifyError::MissingAttribute {
                selector: css.to_string(),
                attribute: attribute.to_string(),
            })
    }
}

fn normalize_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
