//! Lays the menu out onto A4 pages.
//!
//! The renderer is a pure function of the menu data and the fixed layout
//! constants below: it does no I/O of its own. Item artwork is decoded by
//! the caller and handed in; the output [Document] is serialized by the
//! caller. All vertical positioning flows through an explicit
//! [LayoutCursor], and the page-break policy is a single check before each
//! block is drawn; blocks are never split across pages.

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::{BuiltinFont, SpanFont};
use crate::image::Image;
use crate::info::Info;
use crate::layout::{wrap_chars, LayoutCursor, Margins};
use crate::menu::{format_price, BeverageItem, Menu, MenuItem};
use crate::page::{CircleLayout, ImageLayout, Page, RectLayout, SpanLayout};
use crate::pagesize::{self, PageSize};
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;
use std::collections::HashMap;

const PAGE_SIZE: PageSize = pagesize::A4;
/// 18 mm, all four sides
const MARGIN: Pt = Pt(18.0 * 72.0 / 25.4);

const TITLE: &str = "Pizzeria La Repubblica";
const SUBTITLE: &str = "Autentica pizza italiana · Ricette tradizionali";
const CONTACT: &str = "Via della Repubblica 15 · Tel. +39 012 345 6789 · iltuo.ristorante@gmail.com";

const HEADER_HEIGHT: Pt = Pt(90.0);
/// Space between the header banner and the first section heading
const HEADER_GAP: Pt = Pt(30.0);
const TITLE_SIZE: Pt = Pt(30.0);
const TITLE_BASELINE_DROP: Pt = Pt(50.0);
const SUBTITLE_SIZE: Pt = Pt(11.0);
const SUBTITLE_BASELINE_DROP: Pt = Pt(68.0);

/// 6 mm decorative stripe hugging the left margin
const STRIPE_WIDTH: Pt = Pt(6.0 * 72.0 / 25.4);
const STRIPE_GAP: Pt = Pt(2.0);

pub const HEADING_SIZE: Pt = Pt(18.0);
pub const HEADING_LEADING: Pt = Pt(24.0);

const NAME_SIZE: Pt = Pt(12.0);
pub const NAME_LEADING: Pt = Pt(14.0);
const DESC_SIZE: Pt = Pt(10.0);
pub const DESC_LEADING: Pt = Pt(12.0);
/// Character budget for wrapped ingredient lists
pub const DESC_WRAP_COLUMNS: usize = 60;
/// Breathing room after each food block
pub const ITEM_GAP: Pt = Pt(8.0);

/// Square thumbnail beside each dish that has artwork
pub const THUMB_SIZE: Pt = Pt(36.0);
const THUMB_GAP: Pt = Pt(8.0);

pub const BEVERAGE_ROW_HEIGHT: Pt = Pt(16.0);
const BEVERAGE_SIZE: Pt = Pt(11.0);
pub const BEVERAGE_COLUMNS: usize = 2;
pub const BEVERAGE_COLUMN_GAP: Pt = Pt(12.0);

/// Vertical lead-in for the beverage section: gap, divider rule, heading
pub const SECTION_GAP: Pt = Pt(10.0);
pub const DIVIDER_LEADING: Pt = Pt(14.0);
const DIVIDER_HEIGHT: Pt = Pt(1.5);

/// Items are never drawn closer to the bottom margin than this, keeping the
/// footer band clear
pub const FOOTER_CLEARANCE: Pt = Pt(80.0);
const FOOTER_TEXT_SIZE: Pt = Pt(9.0);
const FOOTER_BASELINE_RISE: Pt = Pt(8.0);
const FLOURISH_RADIUS: Pt = Pt(6.0 * 72.0 / 25.4 / 2.0);

/// Baseline of the first section heading on the opening page
pub fn first_page_top() -> Pt {
    PAGE_SIZE.1 - HEADER_HEIGHT - HEADER_GAP
}

/// Baseline continuation pages restart from
pub fn continuation_top() -> Pt {
    PAGE_SIZE.1 - MARGIN
}

/// The y coordinate below which no item block may extend
pub fn section_floor() -> Pt {
    MARGIN + FOOTER_CLEARANCE
}

/// Vertical extent a food item's block will consume: the name/price line,
/// the wrapped description lines, at least the thumbnail when the item has
/// artwork, then padding
pub fn food_block_height(item: &MenuItem) -> Pt {
    let lines = wrap_chars(&item.description, DESC_WRAP_COLUMNS).len();
    let text = NAME_LEADING + DESC_LEADING * lines as f32;
    let block = if item.image.is_some() {
        text.max(THUMB_SIZE)
    } else {
        text
    };
    block + ITEM_GAP
}

/// Horizontal offset of a beverage column from the left content edge
pub fn beverage_column_offset(content_width: Pt, column: usize) -> Pt {
    let column_width =
        (content_width - BEVERAGE_COLUMN_GAP * (BEVERAGE_COLUMNS - 1) as f32) / BEVERAGE_COLUMNS as f32;
    (column_width + BEVERAGE_COLUMN_GAP) * column as f32
}

/// Render the menu to a fresh document. `art` maps item image filenames to
/// decoded images; items whose filename is absent from the map render
/// without a thumbnail (their block still reserves the space, so page
/// arithmetic does not depend on which files were found).
pub fn render_menu(menu: &Menu, art: Vec<(String, Image)>) -> Document {
    let mut doc = Document::new();
    doc.set_info(
        Info::new()
            .title(TITLE)
            .author(TITLE)
            .subject("Menu")
            .clone(),
    );

    let mut art_ids: HashMap<String, Id<Image>> = HashMap::new();
    for (filename, image) in art {
        let id = doc.add_image(image);
        art_ids.insert(filename, id);
    }

    let margins = Margins::all(MARGIN);
    let mut page = Page::new(PAGE_SIZE, Some(margins.clone()));
    paint_header(&mut page);
    paint_stripe(&mut page, PAGE_SIZE.1 - MARGIN - HEADER_HEIGHT);

    let mut cursor = LayoutCursor::new(page.content_box.x1, first_page_top());
    let floor = section_floor();

    // food section
    draw_heading(&mut page, &mut cursor, "Pizze");
    for item in &menu.food {
        let height = food_block_height(item);
        if !cursor.fits(height, floor) {
            break_page(&mut doc, &mut page, &mut cursor, &margins);
        }
        draw_food_item(&mut page, &mut cursor, item, &art_ids);
    }

    // divider, then beverages
    let lead_in = SECTION_GAP + DIVIDER_LEADING + HEADING_LEADING + BEVERAGE_ROW_HEIGHT;
    if !cursor.fits(lead_in, floor) {
        break_page(&mut doc, &mut page, &mut cursor, &margins);
    } else {
        cursor.advance(SECTION_GAP);
        draw_divider(&mut page, &cursor);
        cursor.advance(DIVIDER_LEADING);
    }
    draw_heading(&mut page, &mut cursor, "Bevande");

    let content_width = page.content_box.width();
    for (i, beverage) in menu.beverages.iter().enumerate() {
        let column = i % BEVERAGE_COLUMNS;
        if column == 0 && !cursor.fits(BEVERAGE_ROW_HEIGHT, floor) {
            break_page(&mut doc, &mut page, &mut cursor, &margins);
        }
        draw_beverage(&mut page, &cursor, beverage, content_width, column);
        if column == BEVERAGE_COLUMNS - 1 {
            cursor.advance(BEVERAGE_ROW_HEIGHT);
        }
    }
    if menu.beverages.len() % BEVERAGE_COLUMNS != 0 {
        cursor.advance(BEVERAGE_ROW_HEIGHT);
    }

    paint_footer(&mut page);
    doc.add_page(page);

    doc
}

/// Finalize the current page and start a continuation page, repainting the
/// decorative stripe and resetting the cursor to the top
fn break_page(doc: &mut Document, page: &mut Page, cursor: &mut LayoutCursor, margins: &Margins) {
    let mut fresh = Page::new(PAGE_SIZE, Some(margins.clone()));
    paint_stripe(&mut fresh, PAGE_SIZE.1 - MARGIN);
    let finished = std::mem::replace(page, fresh);
    doc.add_page(finished);
    cursor.next_page(continuation_top());
}

fn paint_header(page: &mut Page) {
    let (width, height) = PAGE_SIZE;
    page.add_rect(RectLayout {
        rect: Rect {
            x1: Pt(0.0),
            y1: height - HEADER_HEIGHT,
            x2: width,
            y2: height,
        },
        colour: colours::TERRACOTTA,
    });
    draw_centred(
        page,
        TITLE,
        BuiltinFont::HelveticaBold,
        TITLE_SIZE,
        colours::WHITE,
        height - TITLE_BASELINE_DROP,
    );
    draw_centred(
        page,
        SUBTITLE,
        BuiltinFont::HelveticaOblique,
        SUBTITLE_SIZE,
        colours::WHITE,
        height - SUBTITLE_BASELINE_DROP,
    );
}

fn paint_stripe(page: &mut Page, top: Pt) {
    page.add_rect(RectLayout {
        rect: Rect {
            x1: MARGIN - STRIPE_WIDTH - STRIPE_GAP,
            y1: MARGIN,
            x2: MARGIN - STRIPE_GAP,
            y2: top,
        },
        colour: colours::CREAM,
    });
}

fn paint_footer(page: &mut Page) {
    let (width, _) = PAGE_SIZE;
    draw_centred(
        page,
        CONTACT,
        BuiltinFont::Helvetica,
        FOOTER_TEXT_SIZE,
        colours::SLATE,
        MARGIN + FOOTER_BASELINE_RISE,
    );
    page.add_circle(CircleLayout {
        centre: (width - MARGIN - FLOURISH_RADIUS * 2.0, MARGIN + Pt(14.0)),
        radius: FLOURISH_RADIUS,
        colour: colours::TERRACOTTA,
    });
}

fn draw_centred(page: &mut Page, text: &str, font: BuiltinFont, size: Pt, colour: Colour, y: Pt) {
    let (width, _) = PAGE_SIZE;
    let x = (width - font.width_of_text(text, size)) / 2.0;
    page.add_span(SpanLayout {
        text: text.to_string(),
        font: SpanFont { font, size },
        colour,
        coords: (x, y),
    });
}

fn draw_heading(page: &mut Page, cursor: &mut LayoutCursor, text: &str) {
    page.add_span(SpanLayout {
        text: text.to_string(),
        font: SpanFont {
            font: BuiltinFont::HelveticaBold,
            size: HEADING_SIZE,
        },
        colour: colours::INK,
        coords: (cursor.x, cursor.y),
    });
    cursor.advance(HEADING_LEADING);
}

fn draw_divider(page: &mut Page, cursor: &LayoutCursor) {
    let x2 = page.content_box.x2;
    page.add_rect(RectLayout {
        rect: Rect {
            x1: cursor.x,
            y1: cursor.y,
            x2,
            y2: cursor.y + DIVIDER_HEIGHT,
        },
        colour: colours::TERRACOTTA,
    });
}

fn draw_food_item(
    page: &mut Page,
    cursor: &mut LayoutCursor,
    item: &MenuItem,
    art_ids: &HashMap<String, Id<Image>>,
) {
    let height = food_block_height(item);
    let art = item
        .image
        .as_deref()
        .and_then(|filename| art_ids.get(filename));

    let text_x = if item.image.is_some() {
        // thumbnail space is reserved whether or not the file was found
        if let Some(&id) = art {
            let top = cursor.y + BuiltinFont::HelveticaBold.ascent(NAME_SIZE);
            page.add_image(ImageLayout {
                image: id,
                position: Rect {
                    x1: cursor.x,
                    y1: top - THUMB_SIZE,
                    x2: cursor.x + THUMB_SIZE,
                    y2: top,
                },
            });
        }
        cursor.x + THUMB_SIZE + THUMB_GAP
    } else {
        cursor.x
    };

    page.add_span(SpanLayout {
        text: item.name.clone(),
        font: SpanFont {
            font: BuiltinFont::HelveticaBold,
            size: NAME_SIZE,
        },
        colour: colours::INK,
        coords: (text_x, cursor.y),
    });

    let price = format_price(item.price);
    let price_x = page.content_box.x2 - BuiltinFont::HelveticaBold.width_of_text(&price, NAME_SIZE);
    page.add_span(SpanLayout {
        text: price,
        font: SpanFont {
            font: BuiltinFont::HelveticaBold,
            size: NAME_SIZE,
        },
        colour: colours::TERRACOTTA,
        coords: (price_x, cursor.y),
    });

    let mut line_y = cursor.y - NAME_LEADING;
    for line in wrap_chars(&item.description, DESC_WRAP_COLUMNS) {
        page.add_span(SpanLayout {
            text: line,
            font: SpanFont {
                font: BuiltinFont::Helvetica,
                size: DESC_SIZE,
            },
            colour: colours::SLATE,
            coords: (text_x, line_y),
        });
        line_y -= DESC_LEADING;
    }

    cursor.advance(height);
}

fn draw_beverage(
    page: &mut Page,
    cursor: &LayoutCursor,
    beverage: &BeverageItem,
    content_width: Pt,
    column: usize,
) {
    let column_width =
        (content_width - BEVERAGE_COLUMN_GAP * (BEVERAGE_COLUMNS - 1) as f32) / BEVERAGE_COLUMNS as f32;
    let x = cursor.x + beverage_column_offset(content_width, column);

    page.add_span(SpanLayout {
        text: beverage.name.clone(),
        font: SpanFont {
            font: BuiltinFont::Helvetica,
            size: BEVERAGE_SIZE,
        },
        colour: colours::INK,
        coords: (x, cursor.y),
    });

    let price = format_price(beverage.price);
    let price_x = x + column_width - BuiltinFont::Helvetica.width_of_text(&price, BEVERAGE_SIZE);
    page.add_span(SpanLayout {
        text: price,
        font: SpanFont {
            font: BuiltinFont::Helvetica,
            size: BEVERAGE_SIZE,
        },
        colour: colours::SLATE,
        coords: (price_x, cursor.y),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;

    #[test]
    fn food_blocks_reserve_thumbnail_space() {
        let with_art = MenuItem::new("Margherita", "Pomodoro", 6.5, Some("margherita.png"));
        let without_art = MenuItem::new("Margherita", "Pomodoro", 6.5, None);
        assert_eq!(food_block_height(&with_art), THUMB_SIZE + ITEM_GAP);
        assert!(food_block_height(&without_art) < food_block_height(&with_art));
    }

    #[test]
    fn taller_descriptions_grow_the_block() {
        let short = MenuItem::new("Diavola", "Pomodoro", 8.5, None);
        let long = MenuItem::new(
            "Capricciosa",
            "Pomodoro, mozzarella, prosciutto cotto, funghi, carciofi, olive",
            9.0,
            None,
        );
        assert!(food_block_height(&long) > food_block_height(&short));
    }

    #[test]
    fn beverage_columns_are_offset_but_rows_share_a_baseline() {
        let width = Pt(480.0);
        assert_eq!(beverage_column_offset(width, 0), Pt(0.0));
        let second = beverage_column_offset(width, 1);
        assert!(second > width / 2.0);
    }

    #[test]
    fn house_menu_renders_without_art() {
        let menu = Menu::house();
        let doc = render_menu(&menu, Vec::new());
        assert!(doc.page_count() >= 1);

        // header and both section headings are present somewhere
        let all_text: Vec<&str> = doc
            .pages_in_order()
            .flat_map(|p| p.spans())
            .map(|s| s.text.as_str())
            .collect();
        assert!(all_text.contains(&"Pizzeria La Repubblica"));
        assert!(all_text.contains(&"Pizze"));
        assert!(all_text.contains(&"Bevande"));
    }
}
