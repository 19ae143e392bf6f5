//! Turning dead rows into candidate panel row ranges.

use tracing::{debug, warn};

/// Half-open row range `[start, end)` within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: u32,
    pub end: u32,
}

impl Segment {
    pub fn height(&self) -> u32 {
        self.end - self.start
    }
}

/// Build segments from the split points `0, dead_rows..., total_height`.
///
/// Each consecutive pair of split points further apart than `min_gap`
/// yields a segment. Segments shorter than `min_segment_height` are dropped,
/// never merged into a neighbor. Output is ordered and non-overlapping.
pub fn segment_rows(
    dead_rows: &[u32],
    total_height: u32,
    min_gap: u32,
    min_segment_height: u32,
) -> Vec<Segment> {
    let splits: Vec<u32> = std::iter::once(0)
        .chain(dead_rows.iter().copied())
        .chain(std::iter::once(total_height))
        .collect();

    let mut segments = Vec::new();
    for pair in splits.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if cur <= prev || cur - prev <= min_gap {
            continue;
        }

        let segment = Segment {
            start: prev,
            end: cur,
        };
        if segment.height() < min_segment_height {
            warn!(
                start = segment.start,
                height = segment.height(),
                min_segment_height,
                "Skipped segment due to small height"
            );
            continue;
        }
        segments.push(segment);
    }

    debug!(
        total_height,
        dead_rows = dead_rows.len(),
        segments = segments.len(),
        "Segmented page"
    );
    segments
}
