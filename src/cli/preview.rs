//! `preview` command: print the redirect page for a URL.

use crate::log;
use crate::redirect::generate_redirect_html;
use crate::utils::path::route::is_absolute_http_url;

/// Write the page to stdout. Warns (on stderr) when `url` is not absolute,
/// since the template inserts it without escaping.
pub fn print_preview(url: &str) {
    if !is_absolute_http_url(url) {
        log!("warning"; "`{}` is not an absolute http(s) URL, inserting verbatim", url);
    }
    print!("{}", generate_redirect_html(url));
}
