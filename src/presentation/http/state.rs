// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Site-wide values shared by every rendered page.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub title: String,
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub site: Arc<SiteSettings>,
}
