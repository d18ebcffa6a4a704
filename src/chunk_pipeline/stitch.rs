//! Reconciles run boundaries between independently encoded chunks.

use crate::traits::Pixel;
use crate::types::Run;

/// Appends `run` to `output`, topping up the last run first if it has the same
/// value and is not yet full.
///
/// Whatever does not fit becomes a new run of the same value. Fed with the runs of
/// consecutive chunks, this yields exactly the greedy split the sequential encoder
/// produces: every stretch of equal pixels becomes `max_run`-long runs followed by
/// one shorter remainder.
pub(crate) fn absorb_run<T: Pixel>(output: &mut Vec<Run<T>>, run: Run<T>, max_run: u32) {
    if let Some(last) = output.last_mut() {
        if last.value == run.value && last.length < max_run {
            let moved = (max_run - last.length).min(run.length);
            last.length += moved;
            let rest = run.length - moved;
            if rest > 0 {
                output.push(Run::new(rest, run.value));
            }
            return;
        }
    }
    output.push(run);
}

/// Concatenates per-chunk run lists in order, merging across chunk edges.
pub(crate) fn stitch_chunks<T: Pixel>(chunks: Vec<Vec<Run<T>>>, max_run: u32) -> Vec<Run<T>> {
    let capacity = chunks.iter().map(Vec::len).sum();
    let mut output = Vec::with_capacity(capacity);
    for chunk in chunks {
        for run in chunk {
            absorb_run(&mut output, run, max_run);
        }
    }
    output
}
