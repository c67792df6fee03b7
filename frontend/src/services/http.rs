//! Browser transport for the upload endpoints.
//!
//! Direct file uploads go through `XMLHttpRequest` because fetch exposes no
//! upload progress. Text fields go through gloo-net.

use futures::channel::mpsc;
use futures::StreamExt;
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::config::endpoint_url;
use crate::controller::{FileSource, UploadTransport};
use crate::progress::byte_percent;
use crate::types::{AppError, AppResult, HttpReply};

impl FileSource for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// Signals forwarded from XHR callbacks to the awaiting future.
enum XhrEvent {
    Progress(u8),
    Load,
    Failed(&'static str),
}

/// Talks to the same-origin upload endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl UploadTransport for BrowserTransport {
    type File = File;

    async fn post_file(
        &self,
        endpoint: &str,
        field: &str,
        file: &File,
        on_progress: &dyn Fn(u8),
    ) -> AppResult<HttpReply> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data.append_with_blob(field, file).map_err(js_error)?;

        let xhr = XmlHttpRequest::new().map_err(js_error)?;
        xhr.open_with_async("POST", &endpoint_url(endpoint), true)
            .map_err(js_error)?;

        let (tx, mut rx) = mpsc::unbounded::<XhrEvent>();

        let progress_tx = tx.clone();
        let onprogress = Closure::wrap(Box::new(move |event: ProgressEvent| {
            if event.length_computable() {
                if let Some(percent) = byte_percent(event.loaded(), event.total()) {
                    let _ = progress_tx.unbounded_send(XhrEvent::Progress(percent));
                }
            }
        }) as Box<dyn FnMut(ProgressEvent)>);

        let load_tx = tx.clone();
        let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let _ = load_tx.unbounded_send(XhrEvent::Load);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let error_tx = tx.clone();
        let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let _ = error_tx.unbounded_send(XhrEvent::Failed("request failed"));
        }) as Box<dyn FnMut(web_sys::Event)>);

        let onabort = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let _ = tx.unbounded_send(XhrEvent::Failed("request aborted"));
        }) as Box<dyn FnMut(web_sys::Event)>);

        let upload = xhr.upload().map_err(js_error)?;
        upload.set_onprogress(Some(onprogress.as_ref().unchecked_ref()));
        xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        xhr.set_onabort(Some(onabort.as_ref().unchecked_ref()));

        xhr.send_with_opt_form_data(Some(&form_data))
            .map_err(js_error)?;

        let result = loop {
            match rx.next().await {
                Some(XhrEvent::Progress(percent)) => on_progress(percent),
                Some(XhrEvent::Load) => break read_reply(&xhr),
                Some(XhrEvent::Failed(reason)) => break Err(AppError::Network(reason.to_string())),
                None => break Err(AppError::Network("request dropped".to_string())),
            }
        };

        // The closures are dropped with this frame; detach them first.
        upload.set_onprogress(None);
        xhr.set_onload(None);
        xhr.set_onerror(None);
        xhr.set_onabort(None);

        result
    }

    async fn post_field(&self, endpoint: &str, field: &str, value: &str) -> AppResult<HttpReply> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data.append_with_str(field, value).map_err(js_error)?;

        let request = Request::post(&endpoint_url(endpoint))
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

        Ok(HttpReply { status, body })
    }
}

fn read_reply(xhr: &XmlHttpRequest) -> AppResult<HttpReply> {
    let status = xhr.status().map_err(js_error)?;
    let body = xhr.response_text().map_err(js_error)?.unwrap_or_default();
    Ok(HttpReply { status, body })
}

fn js_error(err: JsValue) -> AppError {
    AppError::Browser(format!("{:?}", err))
}
