//! The printed skeleton of the form, used when no blank-form scan is composited.
//!
//! Each block of the official layout is outlined and tagged with a black badge
//! carrying its block number. The payment table of block 47 gets its column
//! captions and row rules so the figures can be read without the scan.

use gtd_layout::FontFamily;
use gtd_layout::metrics::text_width;
use gtd_render_core::{PageCanvas, RenderError};
use gtd_types::{Color, Rect};

/// One numbered block of the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormBlock {
    pub label: &'static str,
    pub rect: Rect,
}

const fn block(label: &'static str, x: f32, y: f32, width: f32, height: f32) -> FormBlock {
    FormBlock {
        label,
        rect: Rect::new(x, y, width, height),
    }
}

pub const OUTER_BORDER: Rect = Rect::new(20.0, 32.0, 555.0, 790.0);

const BORDER_WIDTH: f32 = 1.0;
const RULE_WIDTH: f32 = 0.5;
const BADGE_FONT_SIZE: f32 = 6.0;
const BADGE_HEIGHT: f32 = 8.0;
const CAPTION_FONT_SIZE: f32 = 5.0;
const TITLE_FONT_SIZE: f32 = 9.0;

pub const PRIMARY_BLOCKS: &[FormBlock] = &[
    block("2", 20.0, 772.0, 280.0, 50.0),
    block("1", 300.0, 797.0, 140.0, 25.0),
    block("A", 440.0, 772.0, 135.0, 50.0),
    block("3", 300.0, 772.0, 45.0, 25.0),
    block("4", 345.0, 772.0, 45.0, 25.0),
    block("5", 390.0, 772.0, 50.0, 25.0),
    block("8", 20.0, 722.0, 280.0, 50.0),
    block("6", 300.0, 747.0, 60.0, 25.0),
    block("7", 360.0, 747.0, 215.0, 25.0),
    block("9", 300.0, 722.0, 275.0, 25.0),
    block("14", 20.0, 672.0, 280.0, 50.0),
    block("11", 300.0, 697.0, 50.0, 25.0),
    block("12", 350.0, 697.0, 225.0, 25.0),
    block("15", 300.0, 672.0, 140.0, 25.0),
    block("15a", 440.0, 672.0, 65.0, 25.0),
    block("17a", 505.0, 672.0, 70.0, 25.0),
    block("18", 20.0, 647.0, 230.0, 25.0),
    block("19", 250.0, 647.0, 50.0, 25.0),
    block("16", 300.0, 647.0, 140.0, 25.0),
    block("17", 440.0, 647.0, 135.0, 25.0),
    block("21", 20.0, 622.0, 280.0, 25.0),
    block("20", 300.0, 622.0, 275.0, 25.0),
    block("25", 20.0, 597.0, 50.0, 25.0),
    block("26", 70.0, 597.0, 50.0, 25.0),
    block("29", 120.0, 597.0, 180.0, 25.0),
    block("22", 300.0, 597.0, 160.0, 25.0),
    block("23", 460.0, 597.0, 55.0, 25.0),
    block("24", 515.0, 597.0, 60.0, 25.0),
    block("30", 20.0, 547.0, 280.0, 50.0),
    block("28", 300.0, 547.0, 275.0, 50.0),
    block("31", 20.0, 407.0, 280.0, 140.0),
    block("32", 300.0, 522.0, 50.0, 25.0),
    block("33", 350.0, 522.0, 225.0, 25.0),
    block("34", 300.0, 497.0, 80.0, 25.0),
    block("35", 380.0, 497.0, 100.0, 25.0),
    block("36", 480.0, 497.0, 95.0, 25.0),
    block("37", 300.0, 472.0, 80.0, 25.0),
    block("38", 380.0, 472.0, 100.0, 25.0),
    block("39", 480.0, 472.0, 95.0, 25.0),
    block("40", 300.0, 447.0, 275.0, 25.0),
    block("41", 300.0, 407.0, 100.0, 40.0),
    block("42", 400.0, 407.0, 110.0, 40.0),
    block("43", 510.0, 407.0, 65.0, 40.0),
    block("44", 20.0, 322.0, 400.0, 85.0),
    block("45", 420.0, 372.0, 155.0, 35.0),
    block("46", 420.0, 347.0, 155.0, 25.0),
    block("48", 420.0, 322.0, 155.0, 25.0),
    block("47", 20.0, 212.0, 330.0, 110.0),
    block("B", 350.0, 212.0, 225.0, 110.0),
    block("50", 20.0, 137.0, 330.0, 75.0),
    block("49", 350.0, 187.0, 225.0, 25.0),
    block("52", 350.0, 162.0, 225.0, 25.0),
    block("53", 350.0, 137.0, 225.0, 25.0),
    block("C", 20.0, 32.0, 165.0, 105.0),
    block("D", 185.0, 32.0, 165.0, 105.0),
    block("54", 350.0, 32.0, 225.0, 105.0),
];

pub const CONTINUATION_HEADER_BLOCKS: &[FormBlock] = &[
    block("2", 20.0, 772.0, 200.0, 50.0),
    block("8", 220.0, 772.0, 150.0, 50.0),
    block("1", 370.0, 797.0, 100.0, 25.0),
    block("3", 370.0, 772.0, 100.0, 25.0),
    block("A", 470.0, 772.0, 105.0, 50.0),
];

/// Blocks of the first item slot on a continuation sheet; later slots repeat
/// them shifted down by the item offset.
pub const CONTINUATION_ITEM_BLOCKS: &[FormBlock] = &[
    block("31", 20.0, 622.0, 280.0, 150.0),
    block("32", 300.0, 747.0, 50.0, 25.0),
    block("33", 350.0, 747.0, 225.0, 25.0),
    block("34", 300.0, 722.0, 80.0, 25.0),
    block("35", 380.0, 722.0, 100.0, 25.0),
    block("36", 480.0, 722.0, 95.0, 25.0),
    block("37", 300.0, 697.0, 80.0, 25.0),
    block("38", 380.0, 697.0, 100.0, 25.0),
    block("39", 480.0, 697.0, 95.0, 25.0),
    block("40", 300.0, 672.0, 275.0, 25.0),
    block("41", 300.0, 647.0, 100.0, 25.0),
    block("42", 400.0, 647.0, 110.0, 25.0),
    block("43", 510.0, 647.0, 65.0, 25.0),
    block("45", 300.0, 622.0, 140.0, 25.0),
    block("46", 440.0, 622.0, 135.0, 25.0),
    block("44", 20.0, 527.0, 230.0, 95.0),
    block("47", 250.0, 527.0, 325.0, 95.0),
];

/// Grid of the block 47 payment table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentTable {
    /// Column edges, left to right: type, base, rate, amount, method.
    pub columns: [f32; 6],
    /// Row edges, bottom to top: total, fee, tax, duty, caption.
    pub rows: [f32; 6],
}

pub const PRIMARY_PAYMENTS: PaymentTable = PaymentTable {
    columns: [20.0, 65.0, 160.0, 220.0, 315.0, 350.0],
    rows: [212.0, 234.0, 256.0, 278.0, 300.0, 322.0],
};

pub const CONTINUATION_PAYMENTS: PaymentTable = PaymentTable {
    columns: [250.0, 295.0, 385.0, 440.0, 535.0, 575.0],
    rows: [527.0, 554.0, 571.0, 588.0, 605.0, 622.0],
};

const PAYMENT_CAPTIONS: [&str; 5] = ["Type", "Base", "Rate", "Amount", "Method"];

impl PaymentTable {
    fn shifted_down(self, dy: f32) -> Self {
        Self {
            columns: self.columns,
            rows: self.rows.map(|y| y - dy),
        }
    }

    fn draw<C: PageCanvas + ?Sized>(&self, canvas: &mut C) -> Result<(), RenderError> {
        let [left, .., right] = self.columns;
        let [bottom, total_top, .., caption_bottom, top] = self.rows;

        // Row rules; the top edge belongs to the enclosing block outline.
        for y in &self.rows[1..5] {
            canvas.draw_line((left, *y), (right, *y), RULE_WIDTH, Color::BLACK)?;
        }
        // Column rules stop at the total row, which spans the table.
        for x in &self.columns[1..5] {
            canvas.draw_line((*x, total_top), (*x, top), RULE_WIDTH, Color::BLACK)?;
        }

        let caption_y = caption_bottom + 4.0;
        for (caption, edges) in PAYMENT_CAPTIONS.iter().zip(self.columns.windows(2)) {
            let width = text_width(caption, FontFamily::Helvetica, CAPTION_FONT_SIZE);
            let x = edges[0] + ((edges[1] - edges[0] - width) / 2.0).max(1.0);
            canvas.draw_text(
                x,
                caption_y,
                caption,
                FontFamily::Helvetica,
                CAPTION_FONT_SIZE,
                Color::BLACK,
            )?;
        }
        canvas.draw_text(
            left + 3.0,
            bottom + (total_top - bottom) / 2.0 - 2.0,
            "Total:",
            FontFamily::HelveticaBold,
            CAPTION_FONT_SIZE + 1.0,
            Color::BLACK,
        )?;
        Ok(())
    }
}

fn draw_block<C: PageCanvas + ?Sized>(
    canvas: &mut C,
    block: &FormBlock,
    dy: f32,
) -> Result<(), RenderError> {
    let rect = block.rect.shifted_down(dy);
    canvas.stroke_rect(rect, RULE_WIDTH, Color::BLACK)?;

    let label_width = text_width(block.label, FontFamily::HelveticaBold, BADGE_FONT_SIZE);
    let badge = Rect::new(rect.x, rect.top() - BADGE_HEIGHT, label_width + 4.0, BADGE_HEIGHT);
    canvas.fill_rect(badge, Color::BLACK)?;
    canvas.draw_text(
        badge.x + 2.0,
        badge.y + 2.0,
        block.label,
        FontFamily::HelveticaBold,
        BADGE_FONT_SIZE,
        Color::WHITE,
    )
}

fn draw_frame<C: PageCanvas + ?Sized>(canvas: &mut C, title: &str) -> Result<(), RenderError> {
    canvas.stroke_rect(OUTER_BORDER, BORDER_WIDTH, Color::BLACK)?;
    canvas.draw_text(
        OUTER_BORDER.x,
        OUTER_BORDER.top() + 6.0,
        title,
        FontFamily::HelveticaBold,
        TITLE_FONT_SIZE,
        Color::BLACK,
    )
}

/// Draws the primary sheet skeleton.
pub fn draw_primary<C: PageCanvas + ?Sized>(canvas: &mut C, title: &str) -> Result<(), RenderError> {
    draw_frame(canvas, title)?;
    for block in PRIMARY_BLOCKS {
        draw_block(canvas, block, 0.0)?;
    }
    PRIMARY_PAYMENTS.draw(canvas)
}

/// Draws a continuation sheet skeleton with one item area per offset in `slot_offsets`.
pub fn draw_continuation<C: PageCanvas + ?Sized>(
    canvas: &mut C,
    title: &str,
    slot_offsets: impl IntoIterator<Item = f32>,
) -> Result<(), RenderError> {
    draw_frame(canvas, title)?;
    for block in CONTINUATION_HEADER_BLOCKS {
        draw_block(canvas, block, 0.0)?;
    }
    for dy in slot_offsets {
        for block in CONTINUATION_ITEM_BLOCKS {
            draw_block(canvas, block, dy)?;
        }
        CONTINUATION_PAYMENTS.shifted_down(dy).draw(canvas)?;
    }
    Ok(())
}
