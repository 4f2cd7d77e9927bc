use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{Comment, Feedback, StudentSession};
use crate::services::{DataSource, RecommendationEngine, StaticDataSource, TaxonomyTables};

/// Request-shaping limits taken from the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub default_top_n: usize,
    pub max_top_n: usize,
    pub long_term_min_months: u32,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            default_top_n: config.default_top_n,
            max_top_n: config.max_top_n,
            long_term_min_months: config.long_term_min_months,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Shared application state
///
/// The engine, taxonomy and data source are frozen at startup and read
/// without locking; only session bookkeeping sits behind the lock.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    pub taxonomy: Arc<TaxonomyTables>,
    pub data_source: Arc<dyn DataSource>,
    pub settings: Settings,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// In-memory session state, lost on restart
#[derive(Default)]
pub struct AppStateInner {
    pub sessions: HashMap<Uuid, StudentSession>,
    pub comments: HashMap<String, Vec<Comment>>,
    pub feedback: Vec<Feedback>,
}

impl AppState {
    pub fn new(
        engine: RecommendationEngine,
        taxonomy: TaxonomyTables,
        data_source: Arc<dyn DataSource>,
        settings: Settings,
    ) -> Self {
        Self {
            engine: Arc::new(engine),
            taxonomy: Arc::new(taxonomy),
            data_source,
            settings,
            inner: Arc::new(RwLock::new(AppStateInner::default())),
        }
    }

    /// State over the standard taxonomy and the static data source
    pub fn with_defaults(engine: RecommendationEngine, settings: Settings) -> Self {
        Self::new(
            engine,
            TaxonomyTables::standard(),
            Arc::new(StaticDataSource::new()),
            settings,
        )
    }
}
