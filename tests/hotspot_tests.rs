// Host-side tests for hotspot content helpers and the static tour data.

use pano_tour::core::{first_link_url, sanitize, InfoHotspot};
use pano_tour::data::{demo_tour, preview_url, tile_url};

#[test]
fn extracts_single_quoted_href() {
    let html = "<a href='https://tadappi.github.io/Sphere-Viewer-TEST/maple.jpg' \
                target='_blank'>メイプル写真</a>";
    assert_eq!(
        first_link_url(html),
        Some("https://tadappi.github.io/Sphere-Viewer-TEST/maple.jpg")
    );
}

#[test]
fn extracts_double_quoted_href() {
    assert_eq!(
        first_link_url(r#"see <a href="https://example.com/a">here</a>"#),
        Some("https://example.com/a")
    );
}

#[test]
fn first_of_multiple_links_wins() {
    let html = r#"<a href="https://example.com/1">one</a> <a href="https://example.com/2">two</a>"#;
    assert_eq!(first_link_url(html), Some("https://example.com/1"));
}

#[test]
fn empty_or_missing_href_resolves_to_none() {
    assert_eq!(first_link_url("plain text, no markup"), None);
    assert_eq!(first_link_url("<a href=''>empty</a>"), None);
    assert_eq!(first_link_url("<a href=unquoted>odd</a>"), None);
}

#[test]
fn empty_href_does_not_mask_a_later_link() {
    let html = r#"<a href=''>x</a> <a href='https://example.com/real'>y</a>"#;
    assert_eq!(first_link_url(html), Some("https://example.com/real"));
}

#[test]
fn info_hotspot_link_url_reads_its_text() {
    let spot = InfoHotspot {
        yaw: 0.0,
        pitch: 0.0,
        title: "t".to_owned(),
        text: "<a href='https://example.com/x'>x</a>".to_owned(),
    };
    assert_eq!(spot.link_url(), Some("https://example.com/x"));
}

#[test]
fn sanitize_escapes_every_occurrence() {
    assert_eq!(sanitize("a & b < c > d & e"), "a &amp; b &lt; c &gt; d &amp; e");
    assert_eq!(sanitize("plain"), "plain");
}

#[test]
fn tile_urls_follow_the_level_face_row_column_layout() {
    assert_eq!(tile_url("0-oomachi", 2, 'f', 3, 1), "tiles/0-oomachi/2/f/1/3.jpg");
    assert_eq!(preview_url("0-oomachi"), "tiles/0-oomachi/preview.jpg");
}

#[test]
fn demo_tour_matches_the_bundled_tile_set() {
    let data = demo_tour();
    assert_eq!(data.scenes.len(), 1);
    let scene = &data.scenes[0];
    assert_eq!(scene.id, "0-oomachi");
    assert_eq!(scene.levels.len(), 5);
    assert!(scene.levels[0].fallback_only);
    assert_eq!(scene.face_size, 3600.0);
    assert_eq!(scene.info_hotspots.len(), 1);
    assert!(scene.info_hotspots[0].link_url().is_some());
    assert!(data.settings.autorotate_enabled);
}
