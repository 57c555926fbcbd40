//! Render a menu page containing every item type.
//!
//! Run with `VTUNER_LOG_MODE=debug` to see the render events.

use vtuner_xml::logging::init_logging_from_env;
use vtuner_xml::{init_token, Directory, Display, Page, Previous, Search, Station};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env()?;

    let mut page = Page::new();
    page.add(Previous::new("http://radio.local/setupapp/Yamaha/asp/BrowseXML/loginXML.asp"));
    page.add(Display::new("Internet Radio"));
    page.add(Search::new("Search stations", "http://radio.local/search"));
    page.add(Directory::new("Jazz", "http://radio.local/genre/jazz"));

    let mut station = Station::new("MY_42", "Jazz FM", "https://stream.example.org/jazz", "MY")
        .with_genre("Jazz")
        .with_location("United Kingdom")
        .with_bitrate(128);
    station.set_mac("0011AABBCCDD");
    page.add(station);

    page.set_count(5);
    page.set_dont_cache(true);

    println!("{}", init_token());
    println!("{}", page.render()?);
    Ok(())
}
