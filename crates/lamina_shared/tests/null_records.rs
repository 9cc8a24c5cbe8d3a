//! # Null Record Verification Tests
//!
//! End-to-end checks of the null, scratch and guarded-pointer guarantees
//! over the real font records:
//!
//! 1. **Null pool**: zero nulls are all-zero, overrides are exact
//! 2. **Crap pool**: every scratch request starts at the null
//! 3. **Isolation**: racing scratch writers never disturb any null
//! 4. **Manifest**: the built-in manifest matches the compiled-in nulls
//!
//! Run with: cargo test --package lamina_shared --test null_records

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lamina_core::{
    is_null, mutable_view_of, null_bytes_of, null_of, read_only_view_of, scratch_of,
    scratch_or_null_of, Guarded, Mutable, NullError, NullManifest, NullRecord, NullRegistry,
    ReadOnly, POOL_SIZE,
};
use lamina_shared::{
    register_all, AatLookupHeader, BeU16, CoverageHeader, Index, LangSys, Offset16,
    RangeRecord, RecordArray, RecordArrayMut, SubtableHeader, Tag, TableRecord,
    BUILTIN_MANIFEST,
};

// ============================================================================
// NULL POOL
// ============================================================================

#[test]
fn zero_records_have_all_zero_nulls() {
    fn all_zero<T: NullRecord>() -> bool {
        !T::OVERRIDDEN && null_bytes_of::<T>().iter().all(|&b| b == 0)
    }

    assert!(all_zero::<BeU16>());
    assert!(all_zero::<Tag>());
    assert!(all_zero::<Offset16>());
    assert!(all_zero::<CoverageHeader>());
    assert!(all_zero::<TableRecord>());
}

#[test]
fn overrides_are_exact() {
    assert_eq!(null_bytes_of::<Index>(), &[0xFF, 0xFF]);
    assert_eq!(null_bytes_of::<LangSys>(), &[0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00]);
    assert_eq!(null_bytes_of::<RangeRecord>(), &[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(null_bytes_of::<AatLookupHeader>(), &[0xFF, 0xFF]);
}

#[test]
fn tagged_header_uses_override_not_zero() {
    let null = null_of::<SubtableHeader>();
    assert_eq!(bytemuck::bytes_of(null), &[0x01, 0x00, 0x00, 0x04]);
    assert_ne!(null_bytes_of::<SubtableHeader>(), &[0x00; 4]);
    assert_eq!(null.major, 0x01);
    assert_eq!(null.length.get(), 4);
}

#[test]
fn every_record_fits_the_pool() {
    assert!(std::mem::size_of::<TableRecord>() <= POOL_SIZE);
    assert!(std::mem::size_of::<LangSys>() <= POOL_SIZE);
    assert_eq!(std::mem::align_of::<TableRecord>(), 1);
}

// ============================================================================
// CRAP POOL
// ============================================================================

#[test]
fn scratch_resets_to_override_every_call() {
    {
        let mut scratch = scratch_of::<SubtableHeader>();
        assert_eq!(*scratch, *null_of::<SubtableHeader>());
        scratch.major = 0xEE;
        scratch.length = BeU16::new(0xBEEF);
    }
    let again = scratch_of::<SubtableHeader>();
    assert_eq!(*again, *null_of::<SubtableHeader>());
    assert!(is_null(&*again));
}

#[test]
fn capability_views() {
    let read: &LangSys = scratch_or_null_of::<ReadOnly, LangSys>();
    assert!(std::ptr::eq(read, read_only_view_of::<LangSys>()));

    let mut write = scratch_or_null_of::<Mutable, LangSys>();
    write.required_feature = Index::new(2);
    assert!(write.has_required_feature());
    drop(write);

    assert!(!mutable_view_of::<LangSys>().has_required_feature());
    assert!(!null_of::<LangSys>().has_required_feature());
}

// ============================================================================
// ISOLATION UNDER CONCURRENCY
// ============================================================================

#[test]
fn racing_scratch_writers_never_touch_nulls() {
    let stop = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..8u8)
        .map(|seed| {
            std::thread::spawn(move || {
                for i in 0..10_000u16 {
                    let mut header = scratch_of::<SubtableHeader>();
                    header.major = seed;
                    header.length = BeU16::new(i);
                    let mut record = scratch_of::<TableRecord>();
                    record.tag = Tag([seed; 4]);
                    let mut index = scratch_of::<Index>();
                    *index = Index::new(i);
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    assert_eq!(null_bytes_of::<SubtableHeader>(), &[0x01, 0x00, 0x00, 0x04]);
                    assert!(null_bytes_of::<TableRecord>().iter().all(|&b| b == 0));
                    assert!(null_of::<Index>().is_not_found());
                    assert!(!null_of::<RangeRecord>().contains(0));
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().expect("writer panicked");
    }
    stop.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.join().expect("reader panicked");
    }
}

// ============================================================================
// GUARDED POINTERS OVER FONT BYTES
// ============================================================================

#[test]
fn guarded_absent_matches_null_fields() {
    let absent: Guarded<'_, LangSys> = Guarded::absent();
    let null = null_of::<LangSys>();
    assert!(std::ptr::eq(absent.get(), null));
    assert!(absent.get_raw().is_none());
    assert_eq!(absent.required_feature, null.required_feature);
    assert_eq!(absent.feature_count(), null.feature_count());
}

#[test]
fn guarded_present_and_reassigned() {
    let first = RangeRecord::new(1, 5, 0);
    let second = RangeRecord::new(10, 12, 5);
    let mut guarded = Guarded::from(&first);
    assert!(std::ptr::eq(guarded.get(), &first));

    guarded.set(Some(&second));
    assert!(std::ptr::eq(guarded.get(), &second));
    assert!(std::ptr::eq(guarded.get_raw().unwrap(), &second));
    assert_eq!(guarded.coverage_index(11), Some(6));
}

#[test]
fn sparse_coverage_lookup() {
    let bytes: Vec<u8> = [RangeRecord::new(3, 5, 0), RangeRecord::new(9, 9, 3)]
        .iter()
        .flat_map(|r| bytemuck::bytes_of(r).to_vec())
        .collect();
    let ranges = RecordArray::<RangeRecord>::new(&bytes);

    let lookup = |glyph: u16| {
        (0..4)
            .find_map(|i| ranges.get(i).coverage_index(glyph))
    };
    assert_eq!(lookup(4), Some(1));
    assert_eq!(lookup(9), Some(3));
    assert_eq!(lookup(7), None);
}

#[test]
fn discarded_write_leaves_font_bytes_untouched() {
    let mut bytes = bytemuck::bytes_of(&Index::new(4)).to_vec();
    let original = bytes.clone();
    let mut indices = RecordArrayMut::<Index>::new(&mut bytes);
    indices.update(1, |index| *index = Index::new(0));
    assert_eq!(indices.get(1).value(), Index::NOT_FOUND);
    assert_eq!(bytes, original);
}

// ============================================================================
// REGISTRY & MANIFEST
// ============================================================================

#[test]
fn builtin_manifest_verifies() {
    let registry = NullRegistry::new();
    register_all(&registry).unwrap();
    assert!(registry.contains::<SubtableHeader>());

    let manifest = NullManifest::from_toml_str(BUILTIN_MANIFEST).unwrap();
    registry.verify(&manifest).unwrap();
}

#[test]
fn registering_twice_is_rejected() {
    let registry = NullRegistry::new();
    register_all(&registry).unwrap();
    let count = registry.len();

    assert!(matches!(
        register_all(&registry),
        Err(NullError::DuplicateOverride { .. })
    ));
    assert!(matches!(
        registry.register::<Index>(),
        Err(NullError::DuplicateOverride { .. })
    ));
    assert_eq!(registry.len(), count);
}

#[test]
fn manifest_from_file() {
    let path = std::env::temp_dir().join(format!("lamina-nulls-{}.toml", std::process::id()));
    std::fs::write(&path, BUILTIN_MANIFEST).unwrap();
    let manifest = NullManifest::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(manifest.get("SubtableHeader").unwrap().null, vec![0x01, 0x00, 0x00, 0x04]);
}

#[test]
fn exported_manifest_round_trips() {
    let registry = NullRegistry::new();
    register_all(&registry).unwrap();
    let text = registry.to_manifest().to_toml_string().unwrap();
    let manifest = NullManifest::from_toml_str(&text).unwrap();
    registry.verify(&manifest).unwrap();
    assert_eq!(manifest.records.len(), registry.len());
}
