//! Integration tests parsing rendered menu documents back into a tree

use vtuner_xml::{Directory, Display, Item, Page, Previous, RenderError, Search, Station};
use xmltree::Element;

/// Parse a rendered body with the CRLF line layer removed
fn parse_document(document: &str) -> Element {
    let flat = document.replace("\r\n", "");
    Element::parse(flat.as_bytes()).expect("rendered document should be well-formed XML")
}

fn child_names(element: &Element) -> Vec<&str> {
    element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .map(|e| e.name.as_str())
        .collect()
}

fn items(root: &Element) -> Vec<&Element> {
    root.children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|e| e.name == "Item")
        .collect()
}

fn text(element: &Element, name: &str) -> String {
    element
        .get_child(name)
        .and_then(|e| e.get_text())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

fn full_menu() -> Page {
    let mut page = Page::new();
    page.add(Previous::new("http://radio.local/setupapp/Yamaha/asp/BrowseXML/loginXML.asp"));
    page.add(Display::new("Top 40"));
    page.add(Search::new("Search stations", "http://radio.local/search"));
    page.add(Directory::new("Jazz", "http://x/jazz").with_item_count(12));

    let mut station = Station::new("MY_3B8A", "Smooth Jazz", "https://stream.example.org/smooth", "MY")
        .with_description("Relaxing jazz")
        .with_bitrate(192);
    station.set_mac("001122334455");
    page.add(station);

    page.set_count(5);
    page
}

#[test]
fn test_document_starts_with_prolog_line() {
    let document = full_menu().render().unwrap();
    let first_line = document.split("\r\n").next().unwrap();

    assert_eq!(first_line, r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>"#);
}

#[test]
fn test_root_children_order() {
    let root = parse_document(&full_menu().with_dont_cache(true).render().unwrap());

    assert_eq!(root.name, "ListOfItems");
    assert_eq!(
        child_names(&root),
        vec!["ItemCount", "NoDataCache", "Item", "Item", "Item", "Item", "Item"]
    );
    assert_eq!(text(&root, "ItemCount"), "5");
    assert_eq!(text(&root, "NoDataCache"), "Yes");
}

#[test]
fn test_item_children_order_per_variant() {
    let root = parse_document(&full_menu().render().unwrap());
    let rendered = items(&root);

    let expected: Vec<Vec<&str>> = vec![
        vec!["ItemType", "UrlPrevious", "UrlPreviousBackUp"],
        vec!["ItemType", "Display"],
        vec![
            "ItemType",
            "SearchURL",
            "SearchURLBackUp",
            "SearchCaption",
            "SearchTextbox",
            "SearchButtonGo",
            "SearchButtonCancel",
        ],
        vec!["ItemType", "Title", "UrlDir", "UrlDirBackUp"],
        vec![
            "ItemType",
            "StationId",
            "StationName",
            "StationUrl",
            "StationDesc",
            "StationFormat",
            "StationLocation",
            "StationBandWidth",
            "StationMime",
            "Relia",
        ],
    ];

    assert_eq!(rendered.len(), expected.len());
    for (item, names) in rendered.iter().zip(expected) {
        assert_eq!(child_names(item), names);
    }

    let types: Vec<String> = rendered.iter().map(|item| text(item, "ItemType")).collect();
    assert_eq!(types, vec!["Previous", "Display", "Search", "Dir", "Station"]);
}

#[test]
fn test_parsed_values() {
    let root = parse_document(&full_menu().render().unwrap());
    let rendered = items(&root);

    assert_eq!(
        text(rendered[0], "UrlPrevious"),
        "http://radio.local/setupapp/Yamaha/asp/BrowseXML/loginXML.asp?empty="
    );
    assert_eq!(text(rendered[2], "SearchURLBackUp"), "http://radio.local/search?empty=");
    assert_eq!(text(rendered[3], "Title"), " Jazz");
    assert_eq!(text(rendered[3], "UrlDir"), "http://x/jazz?empty=");
    assert_eq!(text(rendered[3], "UrlDirBackUp"), "http://x/jazz?empty=");

    let station = rendered[4];
    assert_eq!(
        text(station, "StationUrl"),
        "http://stream.example.org/smooth?ex45v=001122334455&id=MY_3B8A&p=MY"
    );
    assert_eq!(text(station, "StationDesc"), "Relaxing jazz");
    assert_eq!(text(station, "StationFormat"), "Pop");
    assert_eq!(text(station, "StationLocation"), "Netherlands");
    assert_eq!(text(station, "StationBandWidth"), "192");
    assert_eq!(text(station, "StationMime"), "MP3");
    assert_eq!(text(station, "Relia"), "3");
}

#[test]
fn test_unicode_text_survives() {
    let mut page = Page::new().with_count(1);
    page.add(Display::new("Café Ørsted <live> & more"));

    let root = parse_document(&page.render().unwrap());
    assert_eq!(text(items(&root)[0], "Display"), "Café Ørsted <live> & more");
}

#[test]
fn test_missing_mac_renders_nothing() {
    let page: Page = vec![
        Item::from(Display::new("ok")),
        Item::from(Station::new("MY_9", "Nameless", "http://x/9", "MY")),
    ]
    .into_iter()
    .collect();

    let err = page.render().unwrap_err();
    assert!(matches!(err, RenderError::IncompleteStation { ref id } if id == "MY_9"));
    assert!(err.to_string().contains("MY_9"));
}
