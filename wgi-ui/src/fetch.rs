//! Static asset retrieval through the browser `fetch` API.
//!
//! Assets may be served gzip-compressed (e.g. `indonesia.geojson.gz`); the
//! payload is decompressed when it starts with the gzip magic bytes, so a
//! server that already applied `Content-Encoding: gzip` is handled too.

use anyhow::{anyhow, bail};
use flate2::read::GzDecoder;
use std::io::Read;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

fn js_err(context: &str, value: JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, value)
}

/// Fetch raw bytes of a relative or absolute URL.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_err(url, e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| js_err(url, e))?;
    if !resp.ok() {
        bail!("{} returned HTTP {}", url, resp.status());
    }
    let buffer = JsFuture::from(resp.array_buffer().map_err(|e| js_err(url, e))?)
        .await
        .map_err(|e| js_err(url, e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Decode a UTF-8 payload, gunzipping it first if it is gzip-compressed.
pub fn decode_text(bytes: Vec<u8>) -> anyhow::Result<String> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut text = String::new();
        GzDecoder::new(bytes.as_slice()).read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

/// Fetch a text asset.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let bytes = fetch_bytes(url).await?;
    let text = decode_text(bytes)?;
    log::info!("[WGI] fetched {} ({} bytes)", url, text.len());
    Ok(text)
}

/// Fetch `{url}.gz` and fall back to `url` when the compressed copy is missing.
pub async fn fetch_text_prefer_gz(url: &str) -> anyhow::Result<String> {
    let gz_url = format!("{}.gz", url);
    match fetch_text(&gz_url).await {
        Ok(text) => Ok(text),
        Err(e) => {
            log::info!("[WGI] {} unavailable ({}), using {}", gz_url, e, url);
            fetch_text(url).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_decode_plain_text() {
        let text = decode_text(b"province,value\n".to_vec()).unwrap();
        assert_eq!(text, "province,value\n");
    }

    #[test]
    fn test_decode_gzip_text() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"{\"type\":\"FeatureCollection\"}").unwrap();
        let gz = encoder.finish().unwrap();
        let text = decode_text(gz).unwrap();
        assert_eq!(text, "{\"type\":\"FeatureCollection\"}");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(decode_text(vec![0xff, 0xfe, 0x00]).is_err());
    }
}
