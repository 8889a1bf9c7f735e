use async_trait::async_trait;
use chrono::Utc;
use ishtehar::config::SummarizerConfig;
use ishtehar::manifesto::{
    GeminiClient, GenerationRequest, GeneratorError, ManifestoGenerator, ManifestoSummarizer,
    UnconfiguredGenerator,
};
use ishtehar::wall::{seed_posts, PostStore, WallService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Generator picked at startup from the environment.
#[derive(Debug)]
pub(crate) enum ConfiguredGenerator {
    Gemini(GeminiClient),
    Unconfigured(UnconfiguredGenerator),
}

impl ConfiguredGenerator {
    pub(crate) fn from_config(config: &SummarizerConfig) -> Self {
        match GeminiClient::from_config(config) {
            Some(client) => {
                info!(model = client.model(), "manifesto generator configured");
                Self::Gemini(client)
            }
            None => {
                warn!("GEMINI_API_KEY not set; manifesto drafts will return the error message");
                Self::Unconfigured(UnconfiguredGenerator)
            }
        }
    }
}

#[async_trait]
impl ManifestoGenerator for ConfiguredGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        match self {
            Self::Gemini(client) => client.generate(request).await,
            Self::Unconfigured(fallback) => fallback.generate(request).await,
        }
    }
}

pub(crate) fn initial_store(seed: bool) -> PostStore {
    if seed {
        PostStore::with_posts(seed_posts(Utc::now()))
    } else {
        PostStore::new()
    }
}

pub(crate) fn build_wall_service(
    config: &SummarizerConfig,
    store: PostStore,
) -> Arc<WallService<ConfiguredGenerator>> {
    let generator = Arc::new(ConfiguredGenerator::from_config(config));
    let summarizer = ManifestoSummarizer::new(generator).with_timeout(config.timeout);
    Arc::new(WallService::new(store, summarizer))
}
