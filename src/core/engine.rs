use crate::core::create::{draw_dog, media_file_name, DrawMode};
use crate::core::dataset::decode_records;
use crate::core::find::find_by_name;
use crate::core::stats::compute_stats;
use crate::domain::model::{DogMatch, DogRecord, NameStats, NewDog};
use crate::domain::ports::{DatasetSource, MediaSource, Storage};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Runs one command: fetch the registry, keep one year, answer.
pub struct DogEngine<D: DatasetSource, M: MediaSource, S: Storage> {
    dataset: D,
    media: M,
    storage: S,
}

impl<D: DatasetSource, M: MediaSource, S: Storage> DogEngine<D, M, S> {
    pub fn new(dataset: D, media: M, storage: S) -> Self {
        Self {
            dataset,
            media,
            storage,
        }
    }

    pub async fn load_year(&self, year: i32) -> Result<Vec<DogRecord>> {
        tracing::debug!("Fetching registry...");
        let raw = self.dataset.fetch().await?;
        let records = decode_records(&raw, year)?;
        tracing::info!("Loaded {} registrations for {}", records.len(), year);
        Ok(records)
    }

    pub async fn find(&self, name: &str, year: i32) -> Result<Vec<DogMatch>> {
        let records = self.load_year(year).await?;
        let matches = find_by_name(&records, name);
        tracing::debug!("{} match(es) for '{}'", matches.len(), name);
        Ok(matches)
    }

    pub async fn stats(&self, year: i32) -> Result<NameStats> {
        let records = self.load_year(year).await?;
        compute_stats(&records, year)
    }

    pub async fn create(&self, year: i32, mode: DrawMode) -> Result<NewDog> {
        let mut rng = StdRng::from_entropy();
        self.create_with_rng(year, mode, &mut rng).await
    }

    pub async fn create_with_rng<R: Rng + Send>(
        &self,
        year: i32,
        mode: DrawMode,
        rng: &mut R,
    ) -> Result<NewDog> {
        let records = self.load_year(year).await?;
        let draft = draw_dog(&records, year, mode, rng)?;
        tracing::debug!("Drew {:?}", draft);

        let media_url = self.media.random_media_url().await?;
        let file_name = media_file_name(&draft.name, year, &media_url);

        let mut body = self.media.download(&media_url).await?;
        let image_path = self.storage.write_stream(&file_name, body.as_mut()).await?;
        tracing::info!("📁 Saved {}", image_path.display());

        Ok(NewDog {
            year,
            name: draft.name,
            birth_year: draft.birth_year,
            sex: draft.sex,
            image_url: media_url.to_string(),
            image_path,
        })
    }
}
