use crate::session::LogEntry;
use pdf_writer::{Content, Name, Pdf, Rect, Ref};

/// Low-level PDF builder for the daily report: header table, zebra-shaded
/// log blocks, disclaimer page, page-number footers. Object ids are managed
/// by hand; fonts are the base-14 Helvetica pair, so the output is a pure
/// function of the drawn content.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

const LABEL_COL_W: f32 = 130.0;
const WRAP_COLUMNS: usize = 84;

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            line_h: 14.0,

            next_id,
            font_id,
            bold_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Create a new page and its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(b"F1"), self.font_id)
            .pair(Name(b"F2"), self.bold_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Write the stream of the current page
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Set the `Pages` node with count and kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_text_styled(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        rgb: (f32, f32, f32),
        bold: bool,
        text: &str,
    ) {
        let font = if bold { b"F2" } else { b"F1" };
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_page_number(&self, content: &mut Content, page: usize) {
        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            9.0,
            &pg,
        );
    }

    fn content_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    /// Full report: title, header table, separator, one two-row block per
    /// log entry with alternating shading, then the disclaimer on its own
    /// trailing page. Every page gets a bottom-right page number.
    pub fn write_report(
        &mut self,
        title: &str,
        header_rows: &[(String, String)],
        entries: &[LogEntry],
        disclaimer: &str,
    ) {
        let width = self.content_width();
        let mut content = self.new_page();
        let mut page_no = 1;

        // Title line with the session date.
        self.draw_text_styled(
            &mut content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            (0.0, 0.0, 0.0),
            true,
            title,
        );

        let mut y = self.page_h - self.margin - 30.0;

        // Header table, fixed row order.
        for (i, (label, value)) in header_rows.iter().enumerate() {
            if i == 0 {
                self.fill_rect(&mut content, self.margin, y, width, self.row_h, 0.85);
            }
            self.draw_text(
                &mut content,
                self.margin + 4.0,
                y + 5.0,
                self.header_font_size,
                label,
            );
            self.draw_text(
                &mut content,
                self.margin + LABEL_COL_W + 4.0,
                y + 5.0,
                self.header_font_size,
                value,
            );
            self.draw_cell_borders(&mut content, self.margin, y, LABEL_COL_W, self.row_h);
            self.draw_cell_borders(
                &mut content,
                self.margin + LABEL_COL_W,
                y,
                width - LABEL_COL_W,
                self.row_h,
            );
            y -= self.row_h;
        }

        // Separator between header and log blocks.
        y -= 10.0;
        content.save_state();
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.move_to(self.margin, y);
        content.line_to(self.page_w - self.margin, y);
        content.stroke();
        content.restore_state();
        y -= 16.0;

        // Log blocks: timestamp row plus wrapped message rows.
        for (i, entry) in entries.iter().enumerate() {
            let lines = textwrap::wrap(&entry.message, WRAP_COLUMNS);
            let block_h = self.row_h + lines.len() as f32 * self.line_h + 4.0;

            if y - block_h < self.margin {
                self.draw_page_number(&mut content, page_no);
                self.finalize_page(content);
                content = self.new_page();
                page_no += 1;
                y = self.page_h - self.margin;
            }

            let shade = if i % 2 == 0 { 0.96 } else { 0.87 };
            self.fill_rect(&mut content, self.margin, y - block_h, width, block_h, shade);
            self.draw_cell_borders(&mut content, self.margin, y - block_h, width, block_h);

            self.draw_text_styled(
                &mut content,
                self.margin + 6.0,
                y - 14.0,
                self.header_font_size,
                (0.0, 0.0, 0.55),
                true,
                &entry.timestamp,
            );

            let mut ty = y - 14.0 - self.line_h;
            for line in &lines {
                self.draw_text(
                    &mut content,
                    self.margin + 14.0,
                    ty,
                    self.header_font_size,
                    line,
                );
                ty -= self.line_h;
            }

            y -= block_h + 6.0;
        }

        self.draw_page_number(&mut content, page_no);
        self.finalize_page(content);

        // Mandatory trailing disclaimer page.
        content = self.new_page();
        page_no += 1;

        let mut ty = self.page_h - self.margin - 40.0;
        for paragraph in disclaimer.split("\n\n") {
            for line in textwrap::wrap(paragraph, 90) {
                self.draw_text_styled(
                    &mut content,
                    self.margin,
                    ty,
                    self.font_size,
                    (0.4, 0.4, 0.4),
                    false,
                    &line,
                );
                ty -= self.line_h;
            }
            ty -= self.line_h;
        }

        self.draw_page_number(&mut content, page_no);
        self.finalize_page(content);
    }

    /// Build Catalog + Pages and return the document bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}
