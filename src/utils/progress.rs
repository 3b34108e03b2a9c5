//! Progress reporting for long renders

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{prefix:>12.cyan.bold} [{elapsed_precise}] [{wide_bar}] {pos}/{len} {eta}";

/// Returns a styled [ProgressBar] with `len` steps.
pub fn get_progressbar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");

    ProgressBar::new(len).with_style(style)
}
