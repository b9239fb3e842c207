use crate::Route;
use dioxus::prelude::*;
use wgi_ui::components::EmptyState;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("[WGI] no route for /{}", path);

    rsx! {
        div {
            style: "max-width: 600px; margin: 48px auto; text-align: center;",
            EmptyState {
                title: "Halaman tidak ditemukan".to_string(),
                hint: format!("/{} tidak tersedia.", path),
            }
            Link { to: Route::Home {}, "Kembali ke Beranda" }
        }
    }
}
