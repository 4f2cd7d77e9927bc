pub mod alumni;
pub mod catalog;
pub mod data_source;
pub mod eligibility;
pub mod encoder;
pub mod internships;
pub mod recommender;
pub mod similarity;
pub mod taxonomy;

pub use catalog::{load_catalog, load_catalog_file, Catalog, CatalogLoadError};
pub use data_source::{DataSource, StaticDataSource};
pub use encoder::{build_feature_matrix, build_vocabulary, FeatureMatrix, FeatureVocabulary};
pub use recommender::{recommend, RecommendationEngine, ScoredCertification, DEFAULT_TOP_N};
pub use taxonomy::TaxonomyTables;
