use std::sync::Arc;

use common::CatalogSet;
use common::media::MediaStore;

use crate::config::AppConfig;
use crate::generation::Generator;
use crate::uploads::UploadStore;

#[derive(Clone)]
pub struct AppState {
    pub catalogs: Arc<CatalogSet>,
    pub uploads: Arc<UploadStore>,
    pub media: Arc<MediaStore>,
    pub generator: Arc<dyn Generator>,
    pub config: AppConfig,
}
