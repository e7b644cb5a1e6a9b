use std::path::PathBuf;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::inventory::Category;
use crate::platform::desktop::config::AppConfig;
use crate::usecase::services::load_service::CategoryData;
use crate::{load_dashboard_data, loaded_timestamp};

pub struct AppState {
    pub workbook_path: Signal<PathBuf>,
    pub categories: Signal<Vec<CategoryData>>,
    pub selected: Signal<Category>,
    pub loaded_at: Signal<String>,
}

impl AppState {
    /// All categories are loaded here, before the first render.
    pub fn new(config: &AppConfig) -> Self {
        let path = config.workbook_path.clone();
        let initial_path = path.clone();
        Self {
            workbook_path: use_signal(move || initial_path),
            categories: use_signal(move || load_dashboard_data(&path)),
            selected: use_signal(Category::default),
            loaded_at: use_signal(loaded_timestamp),
        }
    }
}
