use crate::colour::Colour;
use crate::font::{encode_win_ansi, BuiltinFont, SpanFont};
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};
use std::io::Write;

/// A run of text placed at a fixed baseline position
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A solid filled rectangle
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub colour: Colour,
}

/// A solid filled circle, approximated with four Bézier arcs
#[derive(Clone, PartialEq, Debug)]
pub struct CircleLayout {
    pub centre: (Pt, Pt),
    pub radius: Pt,
    pub colour: Colour,
}

/// An image XObject stretched over a target rectangle
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image: Id<Image>,
    pub position: Rect,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Rect(RectLayout),
    Circle(CircleLayout),
    Image(ImageLayout),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out content, drawn in insertion order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_rect(&mut self, rect: RectLayout) {
        self.contents.push(PageContents::Rect(rect));
    }

    pub fn add_circle(&mut self, circle: CircleLayout) {
        self.contents.push(PageContents::Circle(circle));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    /// Every text span on the page, in draw order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Text(span) => Some(span),
            _ => None,
        })
    }

    fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) {
        match colour {
            Colour::RGB { r, g, b } => write!(content, "{} {} {} rg\n", r, g, b).unwrap(),
            Colour::Grey { g } => write!(content, "{} g\n", g).unwrap(),
        }
    }

    /// Emit a content-stream literal string: delimiters and backslashes are
    /// escaped, everything else is written as raw WinAnsi bytes
    fn write_literal_string(content: &mut Vec<u8>, text: &str) {
        content.push(b'(');
        for byte in encode_win_ansi(text) {
            match byte {
                b'(' | b')' | b'\\' => {
                    content.push(b'\\');
                    content.push(byte);
                }
                b'\n' => content.extend_from_slice(b"\\n"),
                b'\r' => content.extend_from_slice(b"\\r"),
                _ => content.push(byte),
            }
        }
        content.push(b')');
    }

    fn render(&self) -> Vec<u8> {
        if self.contents.is_empty() {
            return Vec::default();
        }
        let mut content: Vec<u8> = Vec::default();

        for page_content in self.contents.iter() {
            match page_content {
                PageContents::Text(span) => {
                    write!(&mut content, "q\nBT\n").unwrap();
                    write!(
                        &mut content,
                        "/F{} {} Tf\n",
                        span.font.font.index(),
                        span.font.size
                    )
                    .unwrap();
                    Self::write_fill_colour(&mut content, span.colour);
                    write!(&mut content, "{} {} Td\n", span.coords.0, span.coords.1).unwrap();
                    Self::write_literal_string(&mut content, &span.text);
                    write!(&mut content, " Tj\nET\nQ\n").unwrap();
                }
                PageContents::Rect(rect) => {
                    write!(&mut content, "q\n").unwrap();
                    Self::write_fill_colour(&mut content, rect.colour);
                    write!(
                        &mut content,
                        "{} {} {} {} re\nf\nQ\n",
                        rect.rect.x1,
                        rect.rect.y1,
                        rect.rect.width(),
                        rect.rect.height()
                    )
                    .unwrap();
                }
                PageContents::Circle(circle) => {
                    // circle as four cubic Bézier quadrants
                    const KAPPA: f32 = 0.552_284_8;
                    let (cx, cy) = circle.centre;
                    let r = circle.radius;
                    let k = r * KAPPA;

                    write!(&mut content, "q\n").unwrap();
                    Self::write_fill_colour(&mut content, circle.colour);
                    write!(&mut content, "{} {} m\n", cx + r, cy).unwrap();
                    write!(
                        &mut content,
                        "{} {} {} {} {} {} c\n",
                        cx + r,
                        cy + k,
                        cx + k,
                        cy + r,
                        cx,
                        cy + r
                    )
                    .unwrap();
                    write!(
                        &mut content,
                        "{} {} {} {} {} {} c\n",
                        cx - k,
                        cy + r,
                        cx - r,
                        cy + k,
                        cx - r,
                        cy
                    )
                    .unwrap();
                    write!(
                        &mut content,
                        "{} {} {} {} {} {} c\n",
                        cx - r,
                        cy - k,
                        cx - k,
                        cy - r,
                        cx,
                        cy - r
                    )
                    .unwrap();
                    write!(
                        &mut content,
                        "{} {} {} {} {} {} c\n",
                        cx + k,
                        cy - r,
                        cx + r,
                        cy - k,
                        cx + r,
                        cy
                    )
                    .unwrap();
                    write!(&mut content, "f\nQ\n").unwrap();
                }
                PageContents::Image(image) => {
                    let index = image.image.index();
                    write!(&mut content, "q\n").unwrap();
                    write!(
                        &mut content,
                        "{} 0 0 {} {} {} cm\n",
                        image.position.width(),
                        image.position.height(),
                        image.position.x1,
                        image.position.y1
                    )
                    .unwrap();
                    write!(&mut content, "/I{} Do\nQ\n", index).unwrap();
                }
            }
        }

        content
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) {
        let id = refs.get(RefType::Page(page_index)).unwrap();
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.get(RefType::PageTree).unwrap());

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in BuiltinFont::ALL {
            resource_fonts.pair(
                Name(format!("F{}", font.index()).as_bytes()),
                refs.get(RefType::Font(font.index())).unwrap(),
            );
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (i, _) in images.iter() {
            resource_xobjects.pair(
                Name(format!("I{}", i.index()).as_bytes()),
                refs.get(RefType::Image(i.index())).unwrap(),
            );
        }
        resource_xobjects.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = self.render();
        writer.stream(content_id, rendered.as_slice());
    }
}
