//! Performing navigation effects returned by the wall runtime.

use anyhow::{Context, Result};

use poster_wall_common::Effect;

/// Something that can open a URL in a new browsing context.
pub trait Navigator {
    fn navigate(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs with the system's default browser.
#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open {}", url))
    }
}

/// Carry out `effect`. Returns the URL that was opened, if any.
pub fn perform<N: Navigator>(navigator: &mut N, effect: Effect) -> Result<Option<String>> {
    match effect {
        Effect::None => Ok(None),
        Effect::Navigate(url) => {
            tracing::debug!(url = %url, "Navigating");
            navigator.navigate(&url)?;
            Ok(Some(url))
        }
    }
}
