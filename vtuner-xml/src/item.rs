//! Menu items and their protocol rendering.
//!
//! Every item renders to an `<Item>` element whose first child is
//! `<ItemType>`. Child order inside each variant is fixed; receivers rely on
//! it even when their parsers claim to be order-tolerant.
//!
//! URLs are stored raw. The `?empty=` filler is added while rendering, once
//! per emitted tag.

use crate::constants::*;
use crate::element::{push_empty, push_text};
use crate::error::{RenderError, RenderResult};
use crate::url::{strip_secure_scheme, with_filler_param};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{trace, warn};
use xmltree::Element;

/// One entry of a menu page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    Previous(Previous),
    Display(Display),
    Search(Search),
    Directory(Directory),
    Station(Station),
}

impl Item {
    /// Value written to the `<ItemType>` tag
    pub fn item_type(&self) -> &'static str {
        match self {
            Item::Previous(_) => TYPE_PREVIOUS,
            Item::Display(_) => TYPE_DISPLAY,
            Item::Search(_) => TYPE_SEARCH,
            Item::Directory(_) => TYPE_DIRECTORY,
            Item::Station(_) => TYPE_STATION,
        }
    }

    /// Render this item to its `<Item>` element
    pub fn to_xml(&self) -> RenderResult<Element> {
        let mut item = Element::new(TAG_ITEM);
        push_text(&mut item, TAG_ITEM_TYPE, self.item_type())?;

        match self {
            Item::Previous(previous) => previous.write_children(&mut item)?,
            Item::Display(display) => display.write_children(&mut item)?,
            Item::Search(search) => search.write_children(&mut item)?,
            Item::Directory(directory) => directory.write_children(&mut item)?,
            Item::Station(station) => station.write_children(&mut item)?,
        }

        trace!(item_type = self.item_type(), children = item.children.len(), "Rendered item");
        Ok(item)
    }
}

// =============================================================================
// PREVIOUS
// =============================================================================

/// Link back to the parent menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Previous {
    pub url: String,
}

impl Previous {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn write_children(&self, item: &mut Element) -> RenderResult<()> {
        let url = with_filler_param(&self.url);
        push_text(item, TAG_URL_PREVIOUS, &url)?;
        push_text(item, TAG_URL_PREVIOUS_BACKUP, &url)
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

/// Non-interactive line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    pub text: String,
}

impl Display {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    fn write_children(&self, item: &mut Element) -> RenderResult<()> {
        push_text(item, TAG_DISPLAY, &self.text)
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// Search prompt; the receiver shows a text box and queries `url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    pub caption: String,
    pub url: String,
}

impl Search {
    pub fn new(caption: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            url: url.into(),
        }
    }

    fn write_children(&self, item: &mut Element) -> RenderResult<()> {
        let url = with_filler_param(&self.url);
        push_text(item, TAG_SEARCH_URL, &url)?;
        push_text(item, TAG_SEARCH_URL_BACKUP, &url)?;
        push_text(item, TAG_SEARCH_CAPTION, &self.caption)?;
        push_empty(item, TAG_SEARCH_TEXTBOX);
        push_text(item, TAG_SEARCH_BUTTON_GO, SEARCH_BUTTON_GO_LABEL)?;
        push_text(item, TAG_SEARCH_BUTTON_CANCEL, SEARCH_BUTTON_CANCEL_LABEL)
    }
}

// =============================================================================
// DIRECTORY
// =============================================================================

/// Link to a sub-menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    pub title: String,
    pub destination: String,
    /// Number of entries behind the link, `-1` when unknown. Not emitted.
    #[serde(default = "unknown_count")]
    pub item_count: i64,
}

fn unknown_count() -> i64 {
    UNKNOWN_COUNT
}

impl Directory {
    pub fn new(title: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            destination: destination.into(),
            item_count: UNKNOWN_COUNT,
        }
    }

    pub fn with_item_count(mut self, item_count: i64) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn set_item_count(&mut self, item_count: i64) {
        self.item_count = item_count;
    }

    fn write_children(&self, item: &mut Element) -> RenderResult<()> {
        // Titles always carry one leading space
        push_text(item, TAG_TITLE, &format!(" {}", self.title))?;
        let url = with_filler_param(&self.destination);
        push_text(item, TAG_URL_DIR, &url)?;
        push_text(item, TAG_URL_DIR_BACKUP, &url)
    }
}

// =============================================================================
// STATION
// =============================================================================

/// Playable radio station
///
/// Required values go through [`Station::new`]; everything else is optional
/// and falls back to a protocol default when absent or empty. The client MAC
/// address must be assigned before the station is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base stream URL, never `https://`
    #[serde(deserialize_with = "deserialize_plain_url")]
    url: String,
    /// Resolved track URL, preferred over `url` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_url: Option<String>,
    /// Kept for collaborators; receivers get no logo tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
    pub prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
}

fn deserialize_plain_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let url = String::deserialize(deserializer)?;
    Ok(strip_secure_scheme(&url))
}

/// Treat `None` and `""` alike
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Station {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl AsRef<str>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            url: strip_secure_scheme(url.as_ref()),
            track_url: None,
            icon: None,
            genre: None,
            location: None,
            mime: None,
            bitrate: None,
            bookmark: None,
            prefix: prefix.into(),
            mac: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn with_bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    pub fn with_bookmark(mut self, bookmark: impl Into<String>) -> Self {
        self.bookmark = Some(bookmark.into());
        self
    }

    pub fn with_track_url(mut self, track_url: impl Into<String>) -> Self {
        self.track_url = Some(track_url.into());
        self
    }

    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac = Some(mac.into());
        self
    }

    pub fn set_track_url(&mut self, track_url: impl Into<String>) {
        self.track_url = Some(track_url.into());
    }

    pub fn set_bookmark(&mut self, bookmark: impl Into<String>) {
        self.bookmark = Some(bookmark.into());
    }

    pub fn set_mac(&mut self, mac: impl Into<String>) {
        self.mac = Some(mac.into());
    }

    /// Playable URL with the client parameters appended, if the station has one
    pub fn stream_url(&self) -> RenderResult<Option<String>> {
        let mac = self.mac.as_deref().ok_or_else(|| RenderError::IncompleteStation {
            id: self.id.clone(),
        })?;

        let params = format!("?ex45v={}&id={}&p={}", mac, self.id, self.prefix);
        let base = non_empty(&self.track_url)
            .or_else(|| Some(self.url.as_str()).filter(|url| !url.is_empty()));
        Ok(base.map(|url| format!("{url}{params}")))
    }

    fn write_children(&self, item: &mut Element) -> RenderResult<()> {
        let stream_url = self.stream_url().inspect_err(|_| {
            warn!(station_id = %self.id, "Refusing to render station without client MAC");
        })?;

        push_text(item, TAG_STATION_ID, &self.id)?;
        push_text(item, TAG_STATION_NAME, &self.name)?;
        if let Some(stream_url) = stream_url {
            push_text(item, TAG_STATION_URL, &stream_url)?;
        }
        push_text(
            item,
            TAG_STATION_DESC,
            non_empty(&self.description).unwrap_or(&self.name),
        )?;
        push_text(
            item,
            TAG_STATION_FORMAT,
            non_empty(&self.genre).unwrap_or(DEFAULT_GENRE),
        )?;
        push_text(
            item,
            TAG_STATION_LOCATION,
            non_empty(&self.location).unwrap_or(DEFAULT_LOCATION),
        )?;
        let bandwidth = match self.bitrate {
            Some(bitrate) if bitrate > 0 => bitrate.to_string(),
            _ => DEFAULT_BITRATE.to_string(),
        };
        push_text(item, TAG_STATION_BANDWIDTH, &bandwidth)?;
        push_text(
            item,
            TAG_STATION_MIME,
            non_empty(&self.mime).unwrap_or(DEFAULT_MIME),
        )?;
        push_text(item, TAG_RELIA, RELIA_VALUE)?;
        if let Some(bookmark) = non_empty(&self.bookmark) {
            push_text(item, TAG_BOOKMARK, bookmark)?;
        }
        Ok(())
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<Previous> for Item {
    fn from(previous: Previous) -> Self {
        Item::Previous(previous)
    }
}

impl From<Display> for Item {
    fn from(display: Display) -> Self {
        Item::Display(display)
    }
}

impl From<Search> for Item {
    fn from(search: Search) -> Self {
        Item::Search(search)
    }
}

impl From<Directory> for Item {
    fn from(directory: Directory) -> Self {
        Item::Directory(directory)
    }
}

impl From<Station> for Item {
    fn from(station: Station) -> Self {
        Item::Station(station)
    }
}
