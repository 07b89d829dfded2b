// ABOUTME: HTTP downloader for cover images with size limits and progress display
// ABOUTME: Fans out a page of cover requests and joins them before rendering

use anyhow::{anyhow, Context, Result};
use futures_util::future::join_all;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::io::IsTerminal;
use std::time::Duration;

use crate::constants::{covers, env, timeouts};

pub struct CoverDownloader {
    client: Client,
    max_bytes: u64,
    show_progress: bool,
}

impl CoverDownloader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(timeouts::COVER_DOWNLOAD_TIMEOUT)
            .user_agent(covers::USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(covers::MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client for covers")?;

        // Progress only for an interactive stderr
        let show_progress = std::io::stderr().is_terminal() && std::env::var(env::QUIET).is_err();

        Ok(Self {
            client,
            max_bytes: covers::MAX_COVER_BYTES,
            show_progress,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Cover request failed for {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Cover request failed with status {status}: {url}"));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok());
        if let Some(content_type) = content_type {
            if !content_type.starts_with("image/") {
                return Err(anyhow!(
                    "URL does not serve image content (content-type: {content_type}): {url}"
                ));
            }
        }

        if let Some(length) = response.content_length() {
            if length > self.max_bytes {
                return Err(anyhow!(
                    "Cover exceeds size limit: {length} bytes (max: {}): {url}",
                    self.max_bytes
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.with_context(|| format!("Failed to read cover body: {url}"))?;
            bytes.extend_from_slice(&chunk);
            if bytes.len() as u64 > self.max_bytes {
                return Err(anyhow!(
                    "Cover exceeds size limit: {} bytes (max: {}): {url}",
                    bytes.len(),
                    self.max_bytes
                ));
            }
        }

        log::debug!("Downloaded cover {} ({} bytes)", url, bytes.len());
        Ok(bytes)
    }

    /// Downloads every present URL concurrently; results keep input order.
    pub async fn download_all<'a, I>(&self, urls: I) -> Vec<Option<Result<Vec<u8>>>>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let urls: Vec<_> = urls.into_iter().collect();
        let progress = self.progress_bar(urls.iter().flatten().count());

        let downloads = urls.into_iter().map(|url| {
            let progress = progress.clone();
            async move {
                let url = url?;
                let result = self.download(url).await;
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                Some(result)
            }
        });
        let results = join_all(downloads).await;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }
        results
    }

    fn progress_bar(&self, total: usize) -> Option<ProgressBar> {
        if !self.show_progress || total == 0 {
            return None;
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar().template("{msg} [{bar:25.cyan/blue}] {pos}/{len}");
        if let Ok(style) = style {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb.set_message("Fetching covers");
        pb.enable_steady_tick(Duration::from_millis(timeouts::PROGRESS_BAR_TICK_MS));
        Some(pb)
    }
}
