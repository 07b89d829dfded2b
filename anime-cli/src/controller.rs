// ABOUTME: Command dispatcher wiring the TMDB client, cover downloads, watchlist and renderers
// ABOUTME: Covers for a page are fetched concurrently and joined before any rendering starts

use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use std::io::Write;

use tmdb_sdk::constants::{discover, urls};
use tmdb_sdk::{AnimePage, TmdbClient};

use crate::cli::Commands;
use crate::cli_output::CliOutput;
use crate::config::Config;
use crate::constants::{display, env};
use crate::covers::CoverDownloader;
use crate::display::{
    resolve_columns, DetailRenderer, Downsampler, ListDisplayer, ListItemRenderer, PixelGrid,
    Renderable, Rgb,
};
use crate::output::{EntryView, JsonFormatter, OutputFormat, TableFormatter};
use crate::watchlist::{NewEntry, Watchlist, WatchlistError};

pub struct Controller {
    config: Config,
    output: CliOutput,
    client: Option<TmdbClient>,
    downloader: CoverDownloader,
}

impl Controller {
    /// Builds the TMDB client from `TMDB_API_TOKEN` when it is set; commands
    /// that need the API fail later if it is not.
    pub fn new(config: Config, output: CliOutput) -> Result<Self> {
        let client = match std::env::var(env::API_TOKEN) {
            Ok(token) if !token.trim().is_empty() => {
                Some(Self::build_client(&config, SecretString::from(token))?)
            }
            _ => None,
        };

        Ok(Self {
            config,
            output,
            client,
            downloader: CoverDownloader::new()?,
        })
    }

    pub fn with_client(mut self, client: TmdbClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_downloader(mut self, downloader: CoverDownloader) -> Self {
        self.downloader = downloader;
        self
    }

    pub fn build_client(config: &Config, token: SecretString) -> Result<TmdbClient> {
        TmdbClient::builder()
            .auth_token(token)
            .base_url(
                config
                    .api_url
                    .clone()
                    .unwrap_or_else(|| urls::TMDB_API_BASE.to_string()),
            )
            .image_base_url(
                config
                    .image_base_url
                    .clone()
                    .unwrap_or_else(|| urls::TMDB_IMAGE_BASE.to_string()),
            )
            .language(
                config
                    .language
                    .clone()
                    .unwrap_or_else(|| discover::DEFAULT_LANGUAGE.to_string()),
            )
            .build()
            .context("Failed to create TMDB client")
    }

    pub async fn run(&self, command: Commands, out: &mut dyn Write) -> Result<()> {
        match command {
            Commands::Search {
                id: Some(id), ..
            } => self.show_details(id, out).await,
            Commands::Search {
                id: None,
                page,
                genres,
                name,
            } => self.search(name.as_deref(), page, &genres, out).await,
            Commands::List {
                id,
                name,
                json,
                pretty,
            } => self.list(id, name.as_deref(), json, pretty, out),
            Commands::Add {
                anime_id,
                tag_id,
                watching_season,
                last_watched_episode,
                last_watched_at,
            } => {
                self.add(NewEntry {
                    tmdb_id: anime_id,
                    title: String::new(),
                    seasons: 0,
                    watching_season,
                    last_watched_episode,
                    last_watched_at,
                    tag_id,
                })
                .await
            }
            Commands::Remove { anime_id } => self.remove(anime_id),
            Commands::Update { anime_id, changes } => self.update(anime_id, changes.into()),
            Commands::Genres => self.genres(out).await,
            Commands::Tags => self.tags(out),
        }
    }

    fn client(&self) -> Result<&TmdbClient> {
        self.client.as_ref().ok_or_else(|| {
            anyhow!(
                "{} is not set. Create an API Read Access Token at \
                 https://www.themoviedb.org/settings/api",
                env::API_TOKEN
            )
        })
    }

    fn watchlist(&self) -> Result<Watchlist> {
        let path = self.config.watchlist_path()?;
        Ok(Watchlist::open(path)?)
    }

    async fn search(
        &self,
        name: Option<&str>,
        page: u32,
        genres: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let client = self.client()?;
        let results = match name {
            Some(name) => client
                .get_anime_list_by_name(name, page, genres)
                .await
                .with_context(|| format!("Failed to search for '{name}'"))?,
            None => client
                .get_anime_list(page, genres)
                .await
                .context("Failed to fetch anime list")?,
        };
        self.show_page(&results, out).await
    }

    async fn show_page(&self, page: &AnimePage, out: &mut dyn Write) -> Result<()> {
        let covers = self
            .downloader
            .download_all(page.anime_list.iter().map(|a| a.cover_url.as_deref()))
            .await;
        let columns = resolve_columns(self.config.terminal_columns)?;

        writeln!(out, "Page: {} of {}", page.page, page.total_pages)?;
        if page.anime_list.is_empty() {
            self.output.info("No series matched");
        }
        for (item, cover) in page.anime_list.iter().zip(covers) {
            let grid = self.cover_grid(cover, &item.title)?;
            let renderer = ListItemRenderer::new(item, grid, columns).with_glyph(self.config.glyph());
            if let Err(e) = renderer.render_info(out) {
                self.output
                    .error(&format!("Failed to render '{}': {e}", item.title));
            }
        }
        writeln!(out, "Page: {} of {}", page.page, page.total_pages)?;
        Ok(())
    }

    async fn show_details(&self, id: u64, out: &mut dyn Write) -> Result<()> {
        let details = self
            .client()?
            .get_anime_details(id)
            .await
            .with_context(|| format!("Failed to fetch details for series {id}"))?;

        let cover = match details.summary.cover_url.as_deref() {
            Some(url) => Some(self.downloader.download(url).await),
            None => None,
        };
        let grid = self.cover_grid(cover, &details.summary.title)?;
        let columns = resolve_columns(self.config.terminal_columns)?;

        DetailRenderer::new(&details, grid, columns)
            .with_glyph(self.config.glyph())
            .render_info(out)?;
        Ok(())
    }

    /// Decodes a downloaded cover, falling back to a blank grid when the
    /// series has none or it could not be fetched or decoded.
    fn cover_grid(&self, cover: Option<Result<Vec<u8>>>, title: &str) -> Result<PixelGrid> {
        let width = self.config.cover_width();
        let downsampler = Downsampler::new(width);

        match cover {
            Some(Ok(bytes)) => match downsampler.downsample(&bytes) {
                Ok(grid) => return Ok(grid),
                Err(e) => self
                    .output
                    .warning(&format!("Cover for '{title}' could not be decoded: {e}")),
            },
            Some(Err(e)) => self
                .output
                .warning(&format!("Cover for '{title}' unavailable: {e:#}")),
            None => log::debug!("'{}' has no cover", title),
        }

        Ok(PixelGrid::filled(
            width as usize,
            display::DEFAULT_GRID_HEIGHT,
            Rgb::new(0, 0, 0),
        )?)
    }

    fn list(
        &self,
        id: Option<u64>,
        name: Option<&str>,
        json: bool,
        pretty: bool,
        out: &mut dyn Write,
    ) -> Result<()> {
        let watchlist = self.watchlist()?;
        let entries = match (id, name) {
            (Some(id), _) => vec![watchlist.get(id).ok_or(WatchlistError::NotFound(id))?],
            (None, Some(name)) => watchlist.search_by_title(name),
            (None, None) => watchlist.all(),
        };

        let views: Vec<EntryView<'_>> = entries
            .into_iter()
            .map(|entry| EntryView {
                entry,
                tag: watchlist.tag_name(entry.tag_id).unwrap_or("Unknown"),
            })
            .collect();

        let formatter: Box<dyn OutputFormat> = if json {
            Box::new(JsonFormatter::new(pretty))
        } else {
            Box::new(TableFormatter::new(self.output.use_color()))
        };
        writeln!(out, "{}", formatter.format_entries(&views)?)?;

        if views.is_empty() && !json {
            self.output.info("Your watchlist has no matching series");
        }
        Ok(())
    }

    /// Looks the series up on TMDB to record its title and season count.
    async fn add(&self, mut entry: NewEntry) -> Result<()> {
        let mut watchlist = self.watchlist()?;
        if watchlist.find_by_tmdb_id(entry.tmdb_id).is_some() {
            return Err(WatchlistError::Duplicate(entry.tmdb_id).into());
        }

        let details = self
            .client()?
            .get_anime_details(entry.tmdb_id)
            .await
            .with_context(|| format!("Failed to fetch details for series {}", entry.tmdb_id))?;
        entry.title = details.summary.title;
        entry.seasons = details.seasons_count;

        let title = entry.title.clone();
        let id = watchlist.insert(entry)?;
        self.output
            .success(&format!("Added '{title}' to your watchlist with id {id}"));
        Ok(())
    }

    fn remove(&self, id: u64) -> Result<()> {
        let removed = self.watchlist()?.delete(id)?;
        self.output
            .success(&format!("Removed '{}' from your watchlist", removed.title));
        Ok(())
    }

    fn update(&self, id: u64, changes: crate::watchlist::EntryUpdate) -> Result<()> {
        let today = chrono::Local::now().date_naive();
        let updated = self.watchlist()?.update(id, changes, today)?;
        self.output.success(&format!("Updated '{}'", updated.title));
        Ok(())
    }

    async fn genres(&self, out: &mut dyn Write) -> Result<()> {
        let genres = self
            .client()?
            .get_genres_list()
            .await
            .context("Failed to fetch genres")?;
        ListDisplayer::new("Genres", genres.into_iter().map(|g| g.name)).render_info(out)?;
        Ok(())
    }

    fn tags(&self, out: &mut dyn Write) -> Result<()> {
        let watchlist = self.watchlist()?;
        let tags = watchlist.tags().iter().map(|t| format!("{}: {}", t.id, t.name));
        ListDisplayer::new("Tags", tags).render_info(out)?;
        Ok(())
    }
}
