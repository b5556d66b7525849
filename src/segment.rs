//! Projection-profile text line segmentation.
//!
//! Works on a binarized image: ink pixels are counted per row, and text
//! lines show up in the histogram as runs of positive counts separated by
//! blank (zero) rows.

use image::GrayImage;
use serde::Serialize;

/// Pixels below this value count as ink when projecting a binarized image.
const INK_CUTOFF: u8 = 128;

/// Row interval of one text line, in region coordinates.
///
/// `top` is the blank row immediately above the line and `bottom` the first
/// blank row below it, so the rows `top..bottom` cover the line itself plus
/// its upper bounding row. `bottom` is an exclusive crop bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    pub top: u32,
    pub bottom: u32,
}

impl LineSpan {
    /// Extend the span by `padding` rows in both directions, saturating at
    /// the top of the region and clamping at `height`.
    pub fn padded(&self, padding: u32, height: u32) -> (u32, u32) {
        let top = self.top.saturating_sub(padding);
        let bottom = self.bottom.saturating_add(padding).min(height);
        (top, bottom)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Count ink pixels per row of a binarized image.
pub fn row_projection(mask: &GrayImage) -> Vec<u32> {
    let mut rows = vec![0u32; mask.height() as usize];
    for (_, y, pixel) in mask.enumerate_pixels() {
        if pixel.0[0] < INK_CUTOFF {
            rows[y as usize] += 1;
        }
    }
    rows
}

/// Count ink pixels per column of a binarized image.
///
/// Not used for line splitting; exposed for callers that want to subdivide
/// a line horizontally, e.g. into words or cells.
pub fn column_projection(mask: &GrayImage) -> Vec<u32> {
    let mut columns = vec![0u32; mask.width() as usize];
    for (x, _, pixel) in mask.enumerate_pixels() {
        if pixel.0[0] < INK_CUTOFF {
            columns[x as usize] += 1;
        }
    }
    columns
}

/// Scan a projection histogram for runs of positive counts bounded by zeros.
///
/// Adjacent index pairs are inspected once: a zero followed by a positive
/// count opens a candidate span at the zero index, and a positive count
/// followed by a zero closes it. Runs touching either end of the histogram
/// without a bounding zero are not reported.
pub fn find_line_spans(histogram: &[u32]) -> Vec<LineSpan> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for i in 0..histogram.len().saturating_sub(1) {
        if histogram[i] == 0 && histogram[i + 1] > 0 {
            open = Some(i);
        }
        if histogram[i] > 0 && histogram[i + 1] == 0 {
            if let Some(top) = open {
                spans.push(LineSpan {
                    top: top as u32,
                    bottom: (i + 1) as u32,
                });
            }
        }
    }

    spans
}

/// Project a binarized image and return the line spans found in it.
pub fn segment_lines(mask: &GrayImage) -> Vec<LineSpan> {
    find_line_spans(&row_projection(mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_empty_histogram_has_no_spans() {
        assert!(find_line_spans(&[]).is_empty());
        assert!(find_line_spans(&[0, 0, 0, 0]).is_empty());
    }

    #[test]
    fn test_single_bounded_run() {
        let spans = find_line_spans(&[0, 3, 4, 0]);
        assert_eq!(spans, vec![LineSpan { top: 0, bottom: 3 }]);
    }

    #[test]
    fn test_multiple_runs() {
        let spans = find_line_spans(&[0, 2, 0, 0, 7, 1, 0, 5, 0]);
        assert_eq!(
            spans,
            vec![
                LineSpan { top: 0, bottom: 2 },
                LineSpan { top: 3, bottom: 6 },
                LineSpan { top: 6, bottom: 8 },
            ]
        );
    }

    #[test]
    fn test_adjacent_runs_share_bounding_row() {
        let spans = find_line_spans(&[0, 2, 0, 3, 0]);
        assert_eq!(
            spans,
            vec![LineSpan { top: 0, bottom: 2 }, LineSpan { top: 2, bottom: 4 }]
        );
    }

    #[test]
    fn test_run_touching_start_is_skipped() {
        let spans = find_line_spans(&[2, 1, 0, 5, 0]);
        assert_eq!(spans, vec![LineSpan { top: 2, bottom: 4 }]);
    }

    #[test]
    fn test_run_touching_end_is_skipped() {
        let spans = find_line_spans(&[0, 4, 0, 1, 1]);
        assert_eq!(spans, vec![LineSpan { top: 0, bottom: 2 }]);
    }

    #[test]
    fn test_spans_are_ordered_and_disjoint() {
        let spans = find_line_spans(&[0, 1, 0, 1, 0, 1, 0]);
        for pair in spans.windows(2) {
            assert!(pair[0].bottom <= pair[1].top);
        }
    }

    #[test]
    fn test_padded_clamps_at_both_edges() {
        let span = LineSpan { top: 2, bottom: 10 };
        assert_eq!(span.padded(4, 100), (0, 14));
        assert_eq!(span.padded(4, 12), (0, 12));
        assert_eq!(span.padded(0, 100), (2, 10));
    }

    #[test]
    fn test_row_projection_counts_ink() {
        let mut mask = GrayImage::from_pixel(10, 5, Luma([255]));
        for x in 0..10 {
            mask.put_pixel(x, 2, Luma([0]));
        }
        mask.put_pixel(3, 4, Luma([0]));

        assert_eq!(row_projection(&mask), vec![0, 0, 10, 0, 1]);
    }

    #[test]
    fn test_column_projection_counts_ink() {
        let mut mask = GrayImage::from_pixel(4, 6, Luma([255]));
        for y in 0..6 {
            mask.put_pixel(1, y, Luma([0]));
        }

        assert_eq!(column_projection(&mask), vec![0, 6, 0, 0]);
    }

    #[test]
    fn test_segment_lines_finds_dark_bands() {
        let mut mask = GrayImage::from_pixel(20, 30, Luma([255]));
        for y in 5..10 {
            for x in 0..20 {
                mask.put_pixel(x, y, Luma([0]));
            }
        }
        for y in 18..24 {
            for x in 0..20 {
                mask.put_pixel(x, y, Luma([0]));
            }
        }

        let spans = segment_lines(&mask);
        assert_eq!(
            spans,
            vec![
                LineSpan { top: 4, bottom: 10 },
                LineSpan { top: 17, bottom: 24 },
            ]
        );
    }
}
