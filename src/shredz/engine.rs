//! The overwrite engine: N full-extent passes over a [`Target`], each one
//! forced to stable storage before the next begins.

use crate::error::{Result, ShredError};
use crate::pattern::PatternSource;
use crate::report::PassReport;
use crate::target::Target;

/// Upper bound on the fill buffer. Each pass streams the extent through a
/// single buffer of at most this size, so memory use stays flat no matter
/// how large the target is.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Overwrite `size` bytes of `target`, once per pass, with fresh fill data
/// drawn from `source`.
///
/// Passes run in strict order. Within a pass the extent is rewritten from
/// offset zero in chunks, and the durability barrier runs once, after the
/// full extent, so an interruption leaves the target reflecting a
/// completed pass rather than an interleaving of two. `on_pass` fires
/// after each barrier.
///
/// The first failure aborts the remaining passes. A write that accepts
/// fewer bytes than requested is a failure in its own right and is never
/// retried: a retry could mask a file that was only partially destroyed.
pub fn overwrite<T: Target>(
    target: &mut T,
    size: u64,
    source: &mut PatternSource,
    passes: u32,
    mut on_pass: impl FnMut(PassReport),
) -> Result<()> {
    debug_assert!(size > 0, "zero-length targets never reach the engine");
    debug_assert!(passes >= 1, "at least one pass is required");

    let chunk = size.min(CHUNK_SIZE as u64) as usize;
    let mut buffer: Vec<u8> = Vec::new();
    buffer
        .try_reserve_exact(chunk)
        .map_err(|source| ShredError::Allocation {
            bytes: chunk,
            source,
        })?;
    buffer.resize(chunk, 0);

    for pass in 1..=passes {
        target
            .rewind()
            .map_err(|source| ShredError::Seek { pass, source })?;

        let mut remaining = size;
        while remaining > 0 {
            let want = remaining.min(chunk as u64) as usize;
            let slice = &mut buffer[..want];
            source.fill(slice);

            let written = target
                .write(slice)
                .map_err(|source| ShredError::Write { pass, source })?;
            if written != want {
                return Err(ShredError::ShortWrite {
                    pass,
                    expected: want as u64,
                    written: written as u64,
                });
            }
            remaining -= want as u64;
        }

        target
            .sync()
            .map_err(|source| ShredError::Sync { pass, source })?;

        on_pass(PassReport {
            pass,
            total: passes,
            pattern: source.pattern(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::FillPattern;
    use crate::target::memory::MemTarget;

    fn zeros() -> PatternSource {
        PatternSource::new(FillPattern::Zeros)
    }

    #[test]
    fn runs_exactly_the_requested_passes() {
        let mut target = MemTarget::with_contents(vec![0xAB; 300]);
        let mut seen = Vec::new();

        overwrite(&mut target, 300, &mut zeros(), 5, |r| seen.push(r)).unwrap();

        assert_eq!(target.rewind_count(), 5);
        assert_eq!(target.sync_count(), 5);
        assert_eq!(seen.len(), 5);
        assert_eq!(
            seen[0],
            PassReport {
                pass: 1,
                total: 5,
                pattern: FillPattern::Zeros
            }
        );
        assert_eq!(seen[4].pass, 5);
    }

    #[test]
    fn every_pass_leaves_an_all_zero_durable_image() {
        let mut target = MemTarget::with_contents(vec![0xAB; 300]);

        overwrite(&mut target, 300, &mut zeros(), 3, |_| {}).unwrap();

        assert_eq!(target.synced_images().len(), 3);
        for image in target.synced_images() {
            assert_eq!(image.len(), 300);
            assert!(image.iter().all(|&b| b == 0));
        }
    }

    #[test]
    #[should_panic(expected = "at least one pass")]
    fn refuses_to_run_zero_passes() {
        let mut target = MemTarget::with_contents(vec![0xAB; 10]);
        let _ = overwrite(&mut target, 10, &mut zeros(), 0, |_| {});
    }

    #[test]
    fn covers_extents_larger_than_one_chunk() {
        let len = CHUNK_SIZE * 2 + 17;
        let mut target = MemTarget::with_contents(vec![0xAB; len]);

        overwrite(&mut target, len as u64, &mut zeros(), 1, |_| {}).unwrap();

        assert_eq!(target.write_count(), 3);
        assert_eq!(target.contents().len(), len);
        assert!(target.contents().iter().all(|&b| b == 0));
    }

    #[test]
    fn random_images_reproduce_per_seed_and_differ_across_seeds() {
        let len = 512u64;
        let mut first = MemTarget::with_contents(vec![0u8; len as usize]);
        let mut second = MemTarget::with_contents(vec![0u8; len as usize]);
        let mut third = MemTarget::with_contents(vec![0u8; len as usize]);

        let mut source = PatternSource::seeded(FillPattern::Random, 9);
        overwrite(&mut first, len, &mut source, 1, |_| {}).unwrap();
        let mut source = PatternSource::seeded(FillPattern::Random, 9);
        overwrite(&mut second, len, &mut source, 1, |_| {}).unwrap();
        let mut source = PatternSource::seeded(FillPattern::Random, 10);
        overwrite(&mut third, len, &mut source, 1, |_| {}).unwrap();

        assert_eq!(first.contents(), second.contents());
        assert_ne!(first.contents(), third.contents());
        assert!(first.contents().iter().any(|&b| b != 0));
    }

    #[test]
    fn random_fill_regenerates_between_passes() {
        let len = CHUNK_SIZE + 513;
        let mut target = MemTarget::with_contents(vec![0u8; len]);
        let mut source = PatternSource::seeded(FillPattern::Random, 21);

        overwrite(&mut target, len as u64, &mut source, 2, |_| {}).unwrap();

        let images = target.synced_images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].len(), len);
        assert_eq!(images[1].len(), len);
        // Each pass draws fresh bytes; the durable image must change.
        assert_ne!(images[0], images[1]);
        // The ragged tail past the last full chunk is rewritten too.
        assert!(images[0][CHUNK_SIZE..].iter().any(|&b| b != 0));
    }

    #[test]
    fn rewind_failure_prevents_any_write() {
        let mut target = MemTarget::with_contents(vec![0xAB; 100]).fail_rewind_on(1);

        let err = overwrite(&mut target, 100, &mut zeros(), 3, |_| {}).unwrap_err();

        assert!(matches!(err, ShredError::Seek { pass: 1, .. }));
        assert_eq!(target.write_count(), 0);
        assert_eq!(target.contents(), vec![0xAB; 100].as_slice());
    }

    #[test]
    fn write_failure_aborts_before_the_barrier() {
        let mut target = MemTarget::with_contents(vec![0xAB; 100]).fail_write_on(1);

        let err = overwrite(&mut target, 100, &mut zeros(), 3, |_| {}).unwrap_err();

        assert!(matches!(err, ShredError::Write { pass: 1, .. }));
        assert_eq!(target.sync_count(), 0);
    }

    #[test]
    fn short_write_is_a_failure_even_without_an_error() {
        let mut target = MemTarget::with_contents(vec![0xAB; 100]).short_write_on(1, 60);

        let err = overwrite(&mut target, 100, &mut zeros(), 3, |_| {}).unwrap_err();

        match err {
            ShredError::ShortWrite {
                pass,
                expected,
                written,
            } => {
                assert_eq!(pass, 1);
                assert_eq!(expected, 100);
                assert_eq!(written, 60);
            }
            other => panic!("expected a short-write failure, got {other}"),
        }
        assert_eq!(target.sync_count(), 0);
    }

    #[test]
    fn sync_failure_stops_later_passes() {
        let mut target = MemTarget::with_contents(vec![0xAB; 100]).fail_sync_on(2);
        let mut seen = Vec::new();

        let err = overwrite(&mut target, 100, &mut zeros(), 4, |r| seen.push(r)).unwrap_err();

        assert!(matches!(err, ShredError::Sync { pass: 2, .. }));
        assert_eq!(seen.len(), 1);
        assert_eq!(target.synced_images().len(), 1);
    }

    #[test]
    fn failure_in_a_middle_pass_keeps_earlier_images() {
        let mut target = MemTarget::with_contents(vec![0xAB; 100]).fail_write_on(3);
        let mut seen = Vec::new();

        let err = overwrite(&mut target, 100, &mut zeros(), 5, |r| seen.push(r)).unwrap_err();

        assert!(matches!(err, ShredError::Write { pass: 3, .. }));
        assert_eq!(
            seen.iter().map(|r| r.pass).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(target.synced_images().len(), 2);
    }
}
