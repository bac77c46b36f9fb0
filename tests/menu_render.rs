//! End-to-end rendering tests: page arithmetic, page-break behaviour, the
//! beverage grid, and the final PDF byte stream. Content streams are written
//! uncompressed, so the emitted bytes can be searched for literal text.

use pizzeria_menu::layout::wrap_chars;
use pizzeria_menu::placeholder::ensure_placeholder;
use pizzeria_menu::render::{self, render_menu};
use pizzeria_menu::{Image, Menu, MenuItem, Pt};
use tempfile::TempDir;

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// The literal bytes a span's text occupies in a content stream
fn stream_literal(text: &str) -> Vec<u8> {
    text.replace('(', "\\(").replace(')', "\\)").into_bytes()
}

/// Derive the page count from the published layout constants alone,
/// independent of the renderer's cursor bookkeeping
fn expected_page_count(menu: &Menu) -> usize {
    let floor = render::section_floor();
    let mut pages = 1usize;
    let mut y = render::first_page_top();

    y -= render::HEADING_LEADING;
    for item in &menu.food {
        let height = render::food_block_height(item);
        if y - height < floor {
            pages += 1;
            y = render::continuation_top();
        }
        y -= height;
    }

    let lead_in = render::SECTION_GAP
        + render::DIVIDER_LEADING
        + render::HEADING_LEADING
        + render::BEVERAGE_ROW_HEIGHT;
    if y - lead_in < floor {
        pages += 1;
        y = render::continuation_top();
    } else {
        y -= render::SECTION_GAP + render::DIVIDER_LEADING;
    }
    y -= render::HEADING_LEADING;

    let mut placed = 0;
    while placed < menu.beverages.len() {
        if y - render::BEVERAGE_ROW_HEIGHT < floor {
            pages += 1;
            y = render::continuation_top();
        }
        y -= render::BEVERAGE_ROW_HEIGHT;
        placed += render::BEVERAGE_COLUMNS;
    }

    pages
}

#[test]
fn house_menu_page_count_matches_block_arithmetic() {
    let menu = Menu::house();
    let doc = render_menu(&menu, Vec::new());
    assert_eq!(doc.page_count(), expected_page_count(&menu));
}

#[test]
fn every_item_appears_exactly_once_in_the_output() {
    let menu = Menu::house();
    let doc = render_menu(&menu, Vec::new());

    let mut bytes = Vec::new();
    doc.write(&mut bytes).expect("document serializes");
    assert!(bytes.starts_with(b"%PDF-"));

    for name in menu
        .food
        .iter()
        .map(|i| i.name.as_str())
        .chain(menu.beverages.iter().map(|b| b.name.as_str()))
    {
        let needle = stream_literal(name);
        assert_eq!(
            count_occurrences(&bytes, &needle),
            1,
            "expected {name:?} exactly once"
        );
    }

    assert_eq!(count_occurrences(&bytes, b"(Pizze)"), 1);
    assert_eq!(count_occurrences(&bytes, b"(Bevande)"), 1);
}

#[test]
fn long_sections_spill_onto_extra_pages_without_splitting_blocks() {
    let mut menu = Menu::house();
    let mut food = Vec::new();
    for round in 0..4 {
        for item in &menu.food {
            food.push(MenuItem::new(
                &format!("{} {round}", item.name),
                &item.description,
                item.price,
                None,
            ));
        }
    }
    menu.food = food;

    let doc = render_menu(&menu, Vec::new());
    assert!(doc.page_count() > 1);
    assert_eq!(doc.page_count(), expected_page_count(&menu));

    for item in &menu.food {
        let page = doc
            .pages_in_order()
            .find(|p| p.spans().any(|s| s.text == item.name))
            .unwrap_or_else(|| panic!("{} landed on no page", item.name));
        let name_span = page
            .spans()
            .find(|s| s.text == item.name)
            .expect("name span exists");

        // all of the item's description lines sit directly under the name,
        // on the same page
        let block = render::food_block_height(item);
        for line in wrap_chars(&item.description, render::DESC_WRAP_COLUMNS) {
            assert!(
                page.spans().any(|s| {
                    s.text == line
                        && s.coords.1 < name_span.coords.1
                        && s.coords.1 > name_span.coords.1 - block
                }),
                "description line {line:?} of {} split away from its block",
                item.name
            );
        }
    }

    // nothing is ever drawn into the bottom margin
    for page in doc.pages_in_order() {
        for span in page.spans() {
            assert!(span.coords.1 >= page.content_box.y1);
        }
    }
}

#[test]
fn beverages_fill_a_static_two_column_grid() {
    let menu = Menu::house();
    let doc = render_menu(&menu, Vec::new());

    let content_box = doc
        .pages_in_order()
        .next()
        .expect("document has pages")
        .content_box;
    let content_width = content_box.width();

    let mut baselines: Vec<Pt> = Vec::new();
    for (i, beverage) in menu.beverages.iter().enumerate() {
        let column = i % render::BEVERAGE_COLUMNS;
        let expected_x = content_box.x1 + render::beverage_column_offset(content_width, column);

        let span = doc
            .pages_in_order()
            .flat_map(|p| p.spans())
            .find(|s| s.text == beverage.name)
            .unwrap_or_else(|| panic!("{} not rendered", beverage.name));
        assert!(
            (span.coords.0 - expected_x).0.abs() < 0.01,
            "{} not in column {column}",
            beverage.name
        );
        baselines.push(span.coords.1);
    }

    // both columns of a row share a baseline; the cursor only advances once
    // per full row
    for row in baselines.chunks(render::BEVERAGE_COLUMNS) {
        if let [left, right] = row {
            assert_eq!(left, right);
        }
    }
}

#[test]
fn generated_placeholders_flow_into_the_document() {
    let dir = TempDir::new().expect("can create temp dir");
    let menu = Menu::house();

    let mut art = Vec::new();
    for item in &menu.food {
        let filename = item.image.as_ref().expect("house dishes have image keys");
        let path = dir.path().join(filename);
        ensure_placeholder(&path, &item.name).expect("placeholder generation succeeds");
        let image = Image::new_from_disk(&path).expect("placeholder loads back");
        art.push((filename.clone(), image));
    }

    let doc = render_menu(&menu, art);
    let mut bytes = Vec::new();
    doc.write(&mut bytes).expect("document serializes");

    // one thumbnail placement per dish, images indexed in insertion order
    for i in 0..menu.food.len() {
        let needle = format!("/I{i} Do");
        assert_eq!(
            count_occurrences(&bytes, needle.as_bytes()),
            1,
            "expected one placement of image {i}"
        );
    }
}
