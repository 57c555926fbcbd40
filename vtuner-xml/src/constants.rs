//! Fixed protocol constants.
//!
//! Tag names, fallback values and framing strings are dictated by receiver
//! firmware in the field. Changing any of them breaks compatibility with
//! real devices.

// ─────────────────────────────────────────────────────────────────────────────
// Document framing
// ─────────────────────────────────────────────────────────────────────────────

/// XML declaration written in front of every menu document.
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>"#;

/// Separator inserted between adjacent tags, giving one tag per line.
pub const LINE_BREAK: &str = "\r\n";

// ─────────────────────────────────────────────────────────────────────────────
// URLs
// ─────────────────────────────────────────────────────────────────────────────

pub const SECURE_SCHEME: &str = "https://";
pub const INSECURE_SCHEME: &str = "http://";

/// Placeholder query appended to outward URLs.
///
/// Receivers append their own request parameters with `&`
/// (e.g. `&mac=...&dlang=eng&startitems=1&enditems=100`), so the target URL
/// must already carry a `?`.
pub const FILLER_PARAM: &str = "?empty=";

// ─────────────────────────────────────────────────────────────────────────────
// Page tags
// ─────────────────────────────────────────────────────────────────────────────

pub const TAG_LIST_OF_ITEMS: &str = "ListOfItems";
pub const TAG_ITEM_COUNT: &str = "ItemCount";
pub const TAG_NO_DATA_CACHE: &str = "NoDataCache";
pub const NO_DATA_CACHE_VALUE: &str = "Yes";

/// Declared count when the caller never set one.
pub const UNKNOWN_COUNT: i64 = -1;

// ─────────────────────────────────────────────────────────────────────────────
// Item tags
// ─────────────────────────────────────────────────────────────────────────────

pub const TAG_ITEM: &str = "Item";
pub const TAG_ITEM_TYPE: &str = "ItemType";

pub const TYPE_PREVIOUS: &str = "Previous";
pub const TYPE_DISPLAY: &str = "Display";
pub const TYPE_SEARCH: &str = "Search";
pub const TYPE_DIRECTORY: &str = "Dir";
pub const TYPE_STATION: &str = "Station";

pub const TAG_URL_PREVIOUS: &str = "UrlPrevious";
pub const TAG_URL_PREVIOUS_BACKUP: &str = "UrlPreviousBackUp";

pub const TAG_DISPLAY: &str = "Display";

pub const TAG_SEARCH_URL: &str = "SearchURL";
pub const TAG_SEARCH_URL_BACKUP: &str = "SearchURLBackUp";
pub const TAG_SEARCH_CAPTION: &str = "SearchCaption";
pub const TAG_SEARCH_TEXTBOX: &str = "SearchTextbox";
pub const TAG_SEARCH_BUTTON_GO: &str = "SearchButtonGo";
pub const TAG_SEARCH_BUTTON_CANCEL: &str = "SearchButtonCancel";
pub const SEARCH_BUTTON_GO_LABEL: &str = "Search";
pub const SEARCH_BUTTON_CANCEL_LABEL: &str = "Cancel";

pub const TAG_TITLE: &str = "Title";
pub const TAG_URL_DIR: &str = "UrlDir";
pub const TAG_URL_DIR_BACKUP: &str = "UrlDirBackUp";

pub const TAG_STATION_ID: &str = "StationId";
pub const TAG_STATION_NAME: &str = "StationName";
pub const TAG_STATION_URL: &str = "StationUrl";
pub const TAG_STATION_DESC: &str = "StationDesc";
pub const TAG_STATION_FORMAT: &str = "StationFormat";
pub const TAG_STATION_LOCATION: &str = "StationLocation";
pub const TAG_STATION_BANDWIDTH: &str = "StationBandWidth";
pub const TAG_STATION_MIME: &str = "StationMime";
pub const TAG_RELIA: &str = "Relia";
pub const TAG_BOOKMARK: &str = "Bookmark";

// ─────────────────────────────────────────────────────────────────────────────
// Station defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_GENRE: &str = "Pop";
pub const DEFAULT_LOCATION: &str = "Netherlands";
pub const DEFAULT_BITRATE: &str = "96";
pub const DEFAULT_MIME: &str = "MP3";

/// Reliability rating reported for every station.
pub const RELIA_VALUE: &str = "3";

// ─────────────────────────────────────────────────────────────────────────────
// Handshake
// ─────────────────────────────────────────────────────────────────────────────

pub const TAG_ENCRYPTED_TOKEN: &str = "EncryptedToken";

/// Placeholder session token answered to the initial handshake.
pub const INIT_TOKEN: &str = "0000000000000000";
