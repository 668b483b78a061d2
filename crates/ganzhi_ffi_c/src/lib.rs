//! C-facing adapter for `ganzhi_base`.
//!
//! Every function takes raw integer indices, validates them at the boundary,
//! and writes its result through an out-pointer. Index conventions are the
//! same as the Rust API: stems 0..10, branches 0..12, trigrams 0..8,
//! elements 0..5, cycle positions 0..60.

use ganzhi_base::{
    Branch, ElementScheme, GanzhiError, MoonPhase, Stem, classify_moon_phase, combine,
    element_of, hour_stem_of, month_stem_of, trigram_index_of,
};

/// ABI version for downstream bindings.
pub const GANZHI_API_VERSION: u32 = 1;

/// C-facing status codes. Values are dense and part of the ABI.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GanzhiStatus {
    Ok = 0,
    OutOfRange = 1,
    InvalidCombination = 2,
    NullPointer = 3,
    Internal = 255,
}

impl From<&GanzhiError> for GanzhiStatus {
    fn from(value: &GanzhiError) -> Self {
        match value {
            GanzhiError::OutOfRange { .. } => Self::OutOfRange,
            GanzhiError::InvalidCombination { .. } => Self::InvalidCombination,
            _ => Self::Internal,
        }
    }
}

/// Element scheme codes accepted by [`ganzhi_element_of`].
pub const GANZHI_SCHEME_TRIAD: i32 = 0;
pub const GANZHI_SCHEME_UNION: i32 = 1;

/// Moon phase codes written by [`ganzhi_moon_phase`].
pub const GANZHI_PHASE_NEW: i32 = 0;
pub const GANZHI_PHASE_QUARTER: i32 = 1;
pub const GANZHI_PHASE_FULL: i32 = 2;
pub const GANZHI_PHASE_DARK: i32 = 3;
pub const GANZHI_PHASE_UNCLASSIFIED: i32 = 4;

fn phase_code(phase: MoonPhase) -> i32 {
    match phase {
        MoonPhase::New => GANZHI_PHASE_NEW,
        MoonPhase::Quarter => GANZHI_PHASE_QUARTER,
        MoonPhase::Full => GANZHI_PHASE_FULL,
        MoonPhase::Dark => GANZHI_PHASE_DARK,
        MoonPhase::Unclassified => GANZHI_PHASE_UNCLASSIFIED,
    }
}

fn scheme_from_code(code: i32) -> Option<ElementScheme> {
    match code {
        GANZHI_SCHEME_TRIAD => Some(ElementScheme::Triad),
        GANZHI_SCHEME_UNION => Some(ElementScheme::Union),
        _ => None,
    }
}

/// Na Jia trigram index for a raw stem index.
pub fn ganzhi_trigram_of_internal(stem: u32) -> Result<u8, GanzhiStatus> {
    let stem = stem_from_u32(stem)?;
    Ok(trigram_index_of(stem))
}

/// Element index for a raw branch index under a scheme code.
pub fn ganzhi_element_of_internal(branch: u32, scheme: i32) -> Result<u8, GanzhiStatus> {
    let branch = branch_from_u32(branch)?;
    let scheme = scheme_from_code(scheme).ok_or(GanzhiStatus::OutOfRange)?;
    Ok(element_of(branch, scheme).index())
}

/// Cycle position for raw stem and branch indices.
pub fn ganzhi_combine_internal(stem: u32, branch: u32) -> Result<u8, GanzhiStatus> {
    let stem = stem_from_u32(stem)?;
    let branch = branch_from_u32(branch)?;
    combine(stem, branch)
        .map(|s| s.index())
        .map_err(|e| GanzhiStatus::from(&e))
}

/// Hour stem index for raw day-stem and hour-branch indices.
pub fn ganzhi_hour_stem_of_internal(day_stem: u32, hour_branch: u32) -> Result<u8, GanzhiStatus> {
    let day_stem = stem_from_u32(day_stem)?;
    let hour_branch = branch_from_u32(hour_branch)?;
    Ok(hour_stem_of(day_stem, hour_branch).index())
}

/// Month stem index for raw year-stem and month-branch indices.
pub fn ganzhi_month_stem_of_internal(
    year_stem: u32,
    month_branch: u32,
) -> Result<u8, GanzhiStatus> {
    let year_stem = stem_from_u32(year_stem)?;
    let month_branch = branch_from_u32(month_branch)?;
    Ok(month_stem_of(year_stem, month_branch).index())
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn ganzhi_api_version() -> u32 {
    GANZHI_API_VERSION
}

/// Na Jia trigram (0..8) of a stem.
///
/// # Safety
/// `out_trigram` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ganzhi_trigram_of(stem: u32, out_trigram: *mut u8) -> GanzhiStatus {
    ffi_boundary(|| {
        if out_trigram.is_null() {
            return GanzhiStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null above; write one value.
        write_result(ganzhi_trigram_of_internal(stem), |v| unsafe { *out_trigram = v })
    })
}

/// Element (0..5) of a branch under `scheme` (0 = triad, 1 = union).
///
/// # Safety
/// `out_element` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ganzhi_element_of(
    branch: u32,
    scheme: i32,
    out_element: *mut u8,
) -> GanzhiStatus {
    ffi_boundary(|| {
        if out_element.is_null() {
            return GanzhiStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null above; write one value.
        write_result(ganzhi_element_of_internal(branch, scheme), |v| unsafe {
            *out_element = v
        })
    })
}

/// Sexagenary position (0..60) of a stem/branch pair.
///
/// Returns `InvalidCombination` when the parities differ.
///
/// # Safety
/// `out_index` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ganzhi_combine(
    stem: u32,
    branch: u32,
    out_index: *mut u8,
) -> GanzhiStatus {
    ffi_boundary(|| {
        if out_index.is_null() {
            return GanzhiStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null above; write one value.
        write_result(ganzhi_combine_internal(stem, branch), |v| unsafe {
            *out_index = v
        })
    })
}

/// Hour stem (0..10) by the Five Rats rule.
///
/// # Safety
/// `out_stem` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ganzhi_hour_stem_of(
    day_stem: u32,
    hour_branch: u32,
    out_stem: *mut u8,
) -> GanzhiStatus {
    ffi_boundary(|| {
        if out_stem.is_null() {
            return GanzhiStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null above; write one value.
        write_result(ganzhi_hour_stem_of_internal(day_stem, hour_branch), |v| unsafe {
            *out_stem = v
        })
    })
}

/// Month stem (0..10) by the Five Tigers rule.
///
/// # Safety
/// `out_stem` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ganzhi_month_stem_of(
    year_stem: u32,
    month_branch: u32,
    out_stem: *mut u8,
) -> GanzhiStatus {
    ffi_boundary(|| {
        if out_stem.is_null() {
            return GanzhiStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null above; write one value.
        write_result(ganzhi_month_stem_of_internal(year_stem, month_branch), |v| unsafe {
            *out_stem = v
        })
    })
}

/// Moon phase code of a lunar day. Total: never fails on a valid pointer.
///
/// # Safety
/// `out_phase` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ganzhi_moon_phase(
    lunar_day: u32,
    is_last_day_of_month: u8,
    out_phase: *mut i32,
) -> GanzhiStatus {
    ffi_boundary(|| {
        if out_phase.is_null() {
            return GanzhiStatus::NullPointer;
        }
        // Days beyond u8 can only fall through to Dark/Unclassified.
        let day = u8::try_from(lunar_day).unwrap_or(u8::MAX);
        let phase = classify_moon_phase(day, is_last_day_of_month != 0);
        // SAFETY: Pointer is checked for null above; write one value.
        unsafe { *out_phase = phase_code(phase) };
        GanzhiStatus::Ok
    })
}

fn ffi_boundary(f: impl FnOnce() -> GanzhiStatus) -> GanzhiStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => GanzhiStatus::Internal,
    }
}

fn write_result(result: Result<u8, GanzhiStatus>, write: impl FnOnce(u8)) -> GanzhiStatus {
    match result {
        Ok(v) => {
            write(v);
            GanzhiStatus::Ok
        }
        Err(status) => status,
    }
}

fn stem_from_u32(value: u32) -> Result<Stem, GanzhiStatus> {
    let index = u8::try_from(value).map_err(|_| GanzhiStatus::OutOfRange)?;
    Stem::from_index(index).map_err(|e| GanzhiStatus::from(&e))
}

fn branch_from_u32(value: u32) -> Result<Branch, GanzhiStatus> {
    let index = u8::try_from(value).map_err(|_| GanzhiStatus::OutOfRange)?;
    Branch::from_index(index).map_err(|e| GanzhiStatus::from(&e))
}
