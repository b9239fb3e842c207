//! Application state managed via Dioxus context.
//!
//! `AppState` lives for the whole session and is provided by the layout;
//! `DatasetState` is provided by each data page so the shared selector
//! components can reach it with `use_context::<DatasetState>()`.

use crate::fetch::fetch_text;
use crate::theme::Theme;
use dioxus::prelude::*;
use wgi_core::dataset::{default_manifest, find_dataset, parse_manifest, DatasetDescriptor};

/// `localStorage` key of the theme preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Session-wide state shared by every page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dark theme enabled
    pub dark_mode: Signal<bool>,
}

impl AppState {
    /// Create the state, restoring the saved theme preference.
    pub fn new() -> Self {
        Self {
            dark_mode: Signal::new(load_dark_mode().unwrap_or(false)),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode((self.dark_mode)())
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_dark_mode(&mut self) {
        let next = !(self.dark_mode)();
        self.dark_mode.set(next);
        save_dark_mode(next);
    }
}

/// Per-page dataset selection state.
#[derive(Clone, Copy)]
pub struct DatasetState {
    /// Datasets listed in the manifest
    pub datasets: Signal<Vec<DatasetDescriptor>>,
    /// Currently selected dataset id (empty when none)
    pub selected: Signal<String>,
    /// Whether a fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if the manifest could not be loaded
    pub error_msg: Signal<Option<String>>,
}

impl DatasetState {
    pub fn new() -> Self {
        Self {
            datasets: Signal::new(Vec::new()),
            selected: Signal::new(String::new()),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
        }
    }

    /// Descriptor of the selected dataset, if any.
    pub fn selected_dataset(&self) -> Option<DatasetDescriptor> {
        let id = (self.selected)();
        if id.is_empty() {
            return None;
        }
        find_dataset(&self.datasets.read(), &id).cloned()
    }

    /// Fetch the dataset manifest, falling back to the built-in list when
    /// the static asset is missing or malformed.
    pub async fn load_manifest(mut self, url: &str) {
        self.loading.set(true);
        let datasets = match fetch_text(url).await.and_then(|text| parse_manifest(&text)) {
            Ok(datasets) => Ok(datasets),
            Err(e) => {
                log::warn!("[WGI] manifest {} unavailable ({}), using built-in list", url, e);
                default_manifest()
            }
        };
        match datasets {
            Ok(datasets) => {
                log::info!("[WGI] {} datasets available", datasets.len());
                self.datasets.set(datasets);
            }
            Err(e) => {
                log::error!("[WGI] no dataset manifest: {}", e);
                self.error_msg
                    .set(Some(format!("Gagal memuat daftar dataset: {}", e)));
            }
        }
        self.loading.set(false);
    }
}

/// What a finished dataset fetch should do, given the selection at the time
/// it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSettle {
    /// Still the selected dataset: apply the rows and clear loading.
    Apply,
    /// Another dataset is selected and its own fetch is pending.
    DiscardKeepLoading,
    /// Nothing is selected any more.
    DiscardClearLoading,
}

pub fn settle_fetch(selected: &str, requested: &str) -> FetchSettle {
    if selected == requested {
        FetchSettle::Apply
    } else if selected.is_empty() {
        FetchSettle::DiscardClearLoading
    } else {
        FetchSettle::DiscardKeepLoading
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Saved theme preference, `None` when nothing was stored.
pub fn load_dark_mode() -> Option<bool> {
    let value = local_storage()?.get_item(DARK_MODE_KEY).ok().flatten()?;
    Some(value == "true")
}

pub fn save_dark_mode(dark: bool) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(DARK_MODE_KEY, if dark { "true" } else { "false" }) {
            log::warn!("[WGI] could not persist theme: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_current_fetch() {
        assert_eq!(settle_fetch("3", "3"), FetchSettle::Apply);
    }

    #[test]
    fn test_settle_after_switching_dataset() {
        assert_eq!(settle_fetch("5", "3"), FetchSettle::DiscardKeepLoading);
    }

    #[test]
    fn test_settle_after_clearing_selection() {
        assert_eq!(settle_fetch("", "3"), FetchSettle::DiscardClearLoading);
    }
}
