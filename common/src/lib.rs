//! Plate Finder Common Library
//!
//! CLIと他のフロントエンドで共有されるカタログ・検索・ページングの中核

pub mod types;
pub mod error;
pub mod search;
pub mod store;
pub mod pagination;
pub mod menu;
pub mod session;
pub mod suggest;
pub mod present;
pub mod service;

pub use types::{Plate, PlateId, ScoredPlate};
pub use error::{Error, Result};
pub use search::{rank, score, search, tokenize};
pub use store::{Catalog, PlateStore};
pub use pagination::{page, page_count, Direction, ResultPage, PAGE_SIZE};
pub use menu::{MenuEvent, MenuOption, SelectMenu};
pub use session::{BrowseSession, SessionId};
pub use suggest::{Color, GuidedSelectionState, GuidedStage, PlateType, Suggestion};
pub use present::Presenter;
pub use service::{BrowseView, CatalogSource, PlateService};
