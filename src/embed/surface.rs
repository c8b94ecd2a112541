//! HTTP-backed embed surface.

use super::{EmbedContent, EmbedSignal, EmbedSurface, extract_title};
use crate::catalog::Tool;
use crate::error::{Error, Result};
use crate::events::{AppEvent, Event};
use std::time::Duration;
use tokio::sync::mpsc;

/// Embed surface that fetches tool content over HTTP.
///
/// Fidelity note: like a browser iframe, an HTTP error page still counts as
/// "loaded" (the document arrived; the status is shown in the pane). Only a
/// transport-level failure reports `Failed`. A page that serves a blank or
/// anti-embedding shell with status 200 is indistinguishable from a real
/// load; that limitation is documented on [`EmbedSurface`].
pub struct HttpSurface {
    client: reqwest::Client,
    events: mpsc::UnboundedSender<Event>,
}

impl HttpSurface {
    /// Create a surface that reports signals on `events`.
    pub fn new(events: mpsc::UnboundedSender<Event>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("botdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::application(e.to_string()))?;
        Ok(Self { client, events })
    }

    async fn fetch(client: reqwest::Client, tool: Tool) -> Result<EmbedContent> {
        let response = client
            .get(&tool.src)
            .send()
            .await
            .map_err(|e| Error::embed(e.to_string()))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| Error::embed(e.to_string()))?;

        Ok(EmbedContent {
            final_url,
            status,
            bytes: body.len(),
            title: extract_title(&body),
        })
    }
}

impl EmbedSurface for HttpSurface {
    fn mount(&self, tool: &Tool, reload_token: u64) {
        let client = self.client.clone();
        let events = self.events.clone();
        let tool = tool.clone();

        tokio::spawn(async move {
            tracing::debug!(tool = %tool.id, token = reload_token, "mounting embed");
            let signal = match Self::fetch(client, tool).await {
                Ok(content) => EmbedSignal::Loaded {
                    token: reload_token,
                    content,
                },
                Err(e) => EmbedSignal::Failed {
                    token: reload_token,
                    reason: e.to_string(),
                },
            };
            // Receiver gone means the app is shutting down.
            let _ = events.send(Event::App(AppEvent::Embed(signal)));
        });
    }
}
