use serde::{Deserialize, Serialize};

/// Singleton envelope the CMS wraps every item response in.
#[derive(Deserialize, Debug)]
pub struct ItemResponse<T> {
    pub data: T,
}

#[derive(Deserialize, Debug)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

/// The maintenance_mode singleton. One record, no history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MaintenanceRecord {
    pub is_active: bool,
    pub title: String,
    pub message: String,
    pub estimated_time: String,
    pub contact_email: String,
    pub show_contact_email: bool,
}

impl MaintenanceRecord {
    /// Named fail-open fallback: when the maintenance check itself is broken
    /// the site must stay reachable, so the default record is inactive.
    pub fn fail_open_default() -> Self {
        MaintenanceRecord {
            is_active: false,
            title: "Site under maintenance".to_string(),
            message: "We are working on improving your experience.".to_string(),
            estimated_time: "We will be back shortly".to_string(),
            contact_email: "hello@studiokaze.com".to_string(),
            show_contact_email: true,
        }
    }
}

/// The hero_video singleton driving the landing hero section.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct HeroVideo {
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub poster_image: String,
    pub autoplay: bool,
    pub muted: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub show_controls: bool,
}

/// Hero video record with its file IDs already resolved to asset URLs.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroVideoComplete {
    pub video: HeroVideo,
    pub video_url: String,
    pub poster_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Subscription {
    pub id: i32,
    pub service_name: String,
    pub status: String,
    pub plan_type: String,
    pub billing_cycle: String,
    pub cost: String,
    pub renewal_date: String,
}
