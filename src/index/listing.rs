// src/index/listing.rs
// =============================================================================
// Extracts raw entry hrefs from an autoindex HTML page.
//
// An autoindex page (Apache mod_autoindex, nginx autoindex, ...) looks like:
//
//   <html><body>
//   <h1>Index of /pub</h1>
//   <pre><a href="../">../</a>
//   <a href="docs/">docs/</a>      01-Jan-2024 10:00    -
//   <a href="a.txt">a.txt</a>      01-Jan-2024 10:00  12K
//   </pre>
//   </body></html>
//
// We only look at anchors that are direct children of a <pre> directly
// under <body>. Links anywhere else on the page (headers, footers,
// breadcrumbs) are not entries.
// =============================================================================

use scraper::{Html, Selector};

use crate::error::{Error, Result};

const ENTRY_SELECTOR: &str = "body > pre > a";
const LISTING_SELECTOR: &str = "body > pre";

// Returns every entry href on the page, in document order
//
// Parameters:
//   html: the page body
//   url: the page URL (only used in error messages)
//
// A page without any <pre> block is not an autoindex listing, and is
// reported as a parse error rather than treated as an empty directory.
pub fn extract_entry_hrefs(html: &str, url: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    let listing = selector(LISTING_SELECTOR, url)?;
    if document.select(&listing).next().is_none() {
        return Err(Error::Parse {
            url: url.to_string(),
            message: "no <pre> listing block found".to_string(),
        });
    }

    let entries = selector(ENTRY_SELECTOR, url)?;
    let hrefs = document
        .select(&entries)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    Ok(hrefs)
}

fn selector(css: &str, url: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse {
        url: url.to_string(),
        message: format!("invalid selector '{}': {}", css, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const APACHE_PAGE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">
<html>
 <head><title>Index of /pub</title></head>
 <body>
<h1>Index of /pub</h1>
<pre><img src="/icons/blank.gif" alt="Icon "> <a href="?C=N;O=D">Name</a>                    <a href="?C=M;O=A">Last modified</a>
<hr><img src="/icons/back.gif" alt="[PARENTDIR]"> <a href="../">Parent Directory</a>
<img src="/icons/folder.gif" alt="[DIR]"> <a href="a/">a/</a>                      2024-01-01 10:00    -
<img src="/icons/text.gif" alt="[TXT]"> <a href="b.txt">b.txt</a>                   2024-01-01 10:00   12
<hr></pre>
<address>Apache Server at example.com Port 80</address>
<a href="/elsewhere">not an entry</a>
</body></html>"#;

    #[test]
    fn test_extracts_anchors_in_document_order() {
        let hrefs = extract_entry_hrefs(APACHE_PAGE, "http://h/pub").unwrap();
        assert_eq!(hrefs, vec!["?C=N;O=D", "?C=M;O=A", "../", "a/", "b.txt"]);
    }

    #[test]
    fn test_ignores_links_outside_pre() {
        let hrefs = extract_entry_hrefs(APACHE_PAGE, "http://h/pub").unwrap();
        assert!(!hrefs.iter().any(|h| h == "/elsewhere"));
    }

    #[test]
    fn test_empty_listing() {
        let html = "<html><body><h1>Index of /</h1><pre><a href=\"../\">../</a>\n</pre></body></html>";
        let hrefs = extract_entry_hrefs(html, "http://h").unwrap();
        assert_eq!(hrefs, vec!["../"]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = "<html><body><pre><a name=\"x\">x</a><a href=\"y\">y</a></pre></body></html>";
        let hrefs = extract_entry_hrefs(html, "http://h").unwrap();
        assert_eq!(hrefs, vec!["y"]);
    }

    #[test]
    fn test_page_without_pre_is_parse_error() {
        let html = "<html><body><p>Not found</p></body></html>";
        let err = extract_entry_hrefs(html, "http://h/x").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
