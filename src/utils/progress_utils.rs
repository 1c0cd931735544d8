use std::borrow::Cow;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}";

/// Progress bar on stderr. Hidden automatically when stderr is not a terminal.
pub fn progress_bar(len: u64, msg: impl Into<Cow<'static, str>>) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(TEMPLATE)
        .map(|style| style.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    ProgressBar::new(len).with_style(style).with_message(msg)
}
