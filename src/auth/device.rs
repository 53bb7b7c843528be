/// Catégorie d'appareil dérivée du User-Agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Mobile,
    Desktop,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Desktop => "desktop",
        }
    }
}

const MOBILE_MARKERS: [&str; 4] = ["android", "iphone", "ipad", "windows phone"];

/// Classification pure: mobile ssi le User-Agent contient un des marqueurs
/// (insensible à la casse), sinon desktop. Absence de User-Agent → desktop.
pub fn classify(user_agent: Option<&str>) -> DeviceType {
    let Some(ua) = user_agent else {
        return DeviceType::Desktop;
    };

    let ua = ua.to_ascii_lowercase();
    if MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)) {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}
