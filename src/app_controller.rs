use log::{error, info};
use std::path::{Path, PathBuf};

use crate::annotator::{ActionTally, Annotator};
use crate::app_config::Config;
use crate::corpus::{self, VerseEntry, VerseFile};
use crate::errors::{AppError, CorpusError};
use crate::grouping::TextEquivalence;
use crate::normalizer::{NormalizeSummary, Normalizer};
use crate::render::{HtmlRenderer, HtmlVariant, MarkdownRenderer, RenderSummary};

// @module: Application controller running each corpus tool

/// Options for the HTML renderer
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    pub variant: HtmlVariant,
    pub conceal_principal: bool,
    /// Overrides the configured output path
    pub output: Option<PathBuf>,
}

/// Result of a trailing-newline repair run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewlineSummary {
    pub examined: usize,
    pub fixed: usize,
    pub errors: usize,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    fn slok_dir(&self) -> &Path {
        &self.config.slok_dir
    }

    fn verse_files(&self) -> Result<Vec<VerseFile>, AppError> {
        let files = corpus::list_verse_files(self.slok_dir())?;
        info!("Processing {} JSON files in {:?}...", files.len(), self.slok_dir());
        Ok(files)
    }

    /// Insert or check the speaker of every verse record
    pub fn add_speakers(&self, fix_mismatches: bool) -> Result<ActionTally, AppError> {
        let files = self.verse_files()?;
        let tally = Annotator::new(fix_mismatches).annotate_files(&files);
        info!("Done! {}", tally);
        Ok(tally)
    }

    /// Recompute all speakers by carry-forward in verse order
    pub fn recompute_speakers(&self) -> Result<NormalizeSummary, AppError> {
        let files = self.verse_files()?;
        Normalizer::new().run(&files)
    }

    /// Re-serialize records that lack a trailing newline
    pub fn fix_newlines(&self) -> Result<NewlineSummary, AppError> {
        let files = self.verse_files()?;
        let mut summary = NewlineSummary::default();

        for file in &files {
            summary.examined += 1;
            match corpus::fix_trailing_newline(&file.path) {
                Ok(true) => {
                    summary.fixed += 1;
                    info!("Fixed: {}", file.file_name());
                }
                Ok(false) => {}
                Err(e) => {
                    summary.errors += 1;
                    error!("Error processing {}: {}", file.file_name(), e);
                }
            }
        }

        info!("Done! Fixed {} files.", summary.fixed);
        Ok(summary)
    }

    /// Render the HTML document
    pub fn render_html(&self, options: &HtmlOptions) -> Result<RenderSummary, AppError> {
        let output = options.output.as_deref().unwrap_or(&self.config.html_output);
        let entries = self.load_entries(output)?;

        let renderer = match options.variant {
            HtmlVariant::Chat => HtmlRenderer::chat(TextEquivalence::new(self.config.grouping.clone())),
            HtmlVariant::Reveal => HtmlRenderer::reveal(),
        }
        .with_concealed_principal(options.conceal_principal);

        let document = renderer.render(&entries);
        info!(
            "Original verses: {} | Grouped messages: {}",
            document.summary.verses, document.summary.messages
        );
        document.write_to(output)?;
        info!(
            "Total sloks processed: {} | Messages displayed: {}",
            document.summary.verses, document.summary.messages
        );
        Ok(document.summary)
    }

    /// Render the Markdown document
    pub fn render_markdown(&self, output: Option<&Path>) -> Result<RenderSummary, AppError> {
        let output = output.unwrap_or(&self.config.markdown_output);
        let entries = self.load_entries(output)?;

        let document = MarkdownRenderer::new().render(&entries);
        document.write_to(output)?;
        info!("Total sloks processed: {}", document.summary.verses);
        Ok(document.summary)
    }

    fn load_entries(&self, output: &Path) -> Result<Vec<VerseEntry>, AppError> {
        info!("Reading slok files from: {:?}", self.slok_dir());
        info!("Output will be written to: {:?}", output);
        info!("{}", "-".repeat(60));

        let entries = corpus::load_commentary(self.slok_dir())?;
        if entries.is_empty() {
            return Err(CorpusError::NoUsableRecords(self.slok_dir().to_path_buf()).into());
        }
        Ok(entries)
    }
}
