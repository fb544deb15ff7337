use crate::domain::cloud::*;
use crate::domain::interface::*;
use crate::domain::text::{clean_text, StopwordFilter};
use crate::error::*;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub enum RenderError {
    NoWords,
    ImageWriteError,
}

impl IServiceError for RenderError {
    fn error_type(&self) -> String {
        use RenderError::*;

        match self {
            NoWords => "no_words",
            ImageWriteError => "image_write_error",
        }
        .to_string()
    }

    fn exit_code(&self) -> i32 {
        use RenderError::*;

        match self {
            NoWords => exit_code::DATA_ERR,
            ImageWriteError => exit_code::CANT_CREATE,
        }
    }
}

#[derive(Clone)]
pub struct WordCloudService {
    font: Arc<dyn IGlyphFont + Send + Sync>,
    stopwords: StopwordFilter,
    options: LayoutOptions,
    seed: u64,
}

impl WordCloudService {
    pub fn new(
        font: Arc<dyn IGlyphFont + Send + Sync>,
        stopwords: StopwordFilter,
        options: LayoutOptions,
        seed: u64,
    ) -> Self {
        Self {
            font,
            stopwords,
            options,
            seed,
        }
    }

    /// Normalize `texts`, weigh their words and draw the cloud. The image is
    /// written to `output` only when `save` is set.
    pub fn build(&self, texts: &[String], output: &Path, save: bool) -> Result<WordCloud> {
        let text = texts
            .iter()
            .map(|t| clean_text(t))
            .collect::<Vec<_>>()
            .join(" ");
        let frequencies = word_frequencies(&text, &self.stopwords);
        if frequencies.is_empty() {
            return Err(ServiceError::new(
                RenderError::NoWords,
                anyhow::anyhow!("no words left to draw from {} texts", texts.len()),
            ));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let placements = layout(&frequencies, self.font.as_ref(), &self.options, &mut rng);
        info!(
            words = frequencies.len(),
            placed = placements.len(),
            "laid out word cloud"
        );
        let image = render(
            &placements,
            self.font.as_ref(),
            self.options.width,
            self.options.height,
        );

        if save {
            image
                .save(output)
                .with_context(|| format!("writing {}", output.display()))
                .map_err(|err| ServiceError::new(RenderError::ImageWriteError, err))?;
            info!(output = %output.display(), "saved word cloud");
        }
        Ok(WordCloud { image, placements })
    }
}
