//! Conversions between Rust values and the `rdctype` layout used by the exported functions.

use std::ffi::{CStr, CString, c_char, c_void};

use renderdog_replay_sys as sys;

use crate::settings::EnvironmentModification;

use super::library::Resolved;

pub(crate) type ArrayFree = Resolved<sys::pRENDERDOC_FreeArrayMem>;

/// C string for `s`, cut at the first interior NUL (the engine would stop reading there too).
pub(crate) fn c_string(s: &str) -> CString {
    let bytes = match s.as_bytes().iter().position(|&b| b == 0) {
        Some(nul) => &s.as_bytes()[..nul],
        None => s.as_bytes(),
    };
    match CString::new(bytes) {
        Ok(c) => c,
        Err(_) => unreachable!("NUL bytes were cut above"),
    }
}

/// Copies an engine-owned, NUL-terminated string. Null reads as empty.
///
/// # Safety
///
/// `ptr` must be null or point at a NUL-terminated string that stays valid for the call.
pub(crate) unsafe fn copy_c_str(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Borrowed `rdctype::str` view over `c`. Valid while `c` is alive; the engine only reads it.
pub(crate) fn borrowed_str(c: &CStr) -> sys::rdctype_str {
    sys::rdctype_str {
        elems: c.as_ptr().cast_mut(),
        count: c.to_bytes().len() as i32,
    }
}

/// Copies the characters of an `rdctype::str` without releasing it.
///
/// # Safety
///
/// `s.elems` must be null or point at `s.count` readable bytes.
pub(crate) unsafe fn copy_str(s: &sys::rdctype_str) -> String {
    if s.elems.is_null() || s.count <= 0 {
        return String::new();
    }
    let bytes = unsafe { std::slice::from_raw_parts(s.elems.cast::<u8>(), s.count as usize) };
    String::from_utf8_lossy(bytes).into_owned()
}

/// Takes ownership of an engine-filled `rdctype::str`: copies it out and frees the buffer.
///
/// # Safety
///
/// `s` must have been filled by the engine (or be empty) and not be used again.
pub(crate) unsafe fn take_str(free: ArrayFree, s: &mut sys::rdctype_str) -> String {
    let out = unsafe { copy_str(s) };
    if !s.elems.is_null() {
        unsafe { free(s.elems.cast::<c_void>()) };
    }
    *s = sys::rdctype_str::empty();
    out
}

/// Takes ownership of an engine-filled `rdctype::array<rdctype::str>`.
///
/// # Safety
///
/// Same as [`take_str`]; every element is released before the outer buffer.
pub(crate) unsafe fn take_str_array(
    free: ArrayFree,
    arr: &mut sys::rdctype_array<sys::rdctype_str>,
) -> Vec<String> {
    if arr.elems.is_null() || arr.count <= 0 {
        *arr = sys::rdctype_array::empty();
        return Vec::new();
    }
    let elems = unsafe { std::slice::from_raw_parts_mut(arr.elems, arr.count as usize) };
    let out = elems
        .iter_mut()
        .map(|s| unsafe { take_str(free, s) })
        .collect();
    unsafe { free(arr.elems.cast::<c_void>()) };
    *arr = sys::rdctype_array::empty();
    out
}

/// Owned C strings plus the `rdctype::array<rdctype::str>` that points into them.
pub(crate) struct StrArray {
    _owned: Vec<CString>,
    views: Vec<sys::rdctype_str>,
}

impl StrArray {
    pub(crate) fn new<S: AsRef<str>>(items: &[S]) -> Self {
        let owned: Vec<CString> = items.iter().map(|s| c_string(s.as_ref())).collect();
        let views = owned.iter().map(|c| borrowed_str(c)).collect();
        Self {
            _owned: owned,
            views,
        }
    }

    /// View valid while `self` is alive.
    pub(crate) fn as_array(&mut self) -> sys::rdctype_array<sys::rdctype_str> {
        sys::rdctype_array {
            elems: self.views.as_mut_ptr(),
            count: self.views.len() as i32,
        }
    }
}

/// `rdctype::array<EnvironmentModification>` built from borrowed strings.
pub(crate) struct EnvArray {
    _owned: Vec<(CString, CString)>,
    raw: Vec<sys::EnvironmentModification>,
}

impl EnvArray {
    pub(crate) fn new(env: &[EnvironmentModification]) -> Self {
        let owned: Vec<(CString, CString)> = env
            .iter()
            .map(|m| (c_string(&m.name), c_string(&m.value)))
            .collect();
        let raw = env
            .iter()
            .zip(&owned)
            .map(|(m, (name, value))| sys::EnvironmentModification {
                mod_: m.modification.into(),
                sep: m.separator.into(),
                name: borrowed_str(name),
                value: borrowed_str(value),
            })
            .collect();
        Self { _owned: owned, raw }
    }

    pub(crate) fn as_array(&mut self) -> sys::rdctype_array<sys::EnvironmentModification> {
        sys::rdctype_array {
            elems: self.raw.as_mut_ptr(),
            count: self.raw.len() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static FREED: Mutex<Vec<usize>> = Mutex::new(Vec::new());

    unsafe extern "C" fn record_free(mem: *const c_void) {
        FREED.lock().unwrap().push(mem as usize);
    }

    #[test]
    fn interior_nul_truncates() {
        assert_eq!(c_string("frame\0.rdc").as_bytes(), b"frame");
        assert_eq!(c_string("plain").as_bytes(), b"plain");
        assert_eq!(c_string("").as_bytes(), b"");
    }

    #[test]
    fn str_arrays_point_into_owned_strings() {
        let mut args = StrArray::new(&["renderdoccmd", "replay"]);
        let arr = args.as_array();
        assert_eq!(arr.count, 2);
        let views = unsafe { std::slice::from_raw_parts(arr.elems, 2) };
        assert_eq!(unsafe { copy_str(&views[0]) }, "renderdoccmd");
        assert_eq!(unsafe { copy_str(&views[1]) }, "replay");
    }

    #[test]
    fn env_array_keeps_names_and_values() {
        let mut env = EnvArray::new(&[EnvironmentModification::set(
            "ENABLE_VULKAN_RENDERDOC_CAPTURE",
            "1",
        )]);
        let arr = env.as_array();
        let raw = unsafe { &*arr.elems };
        assert_eq!(unsafe { copy_str(&raw.name) }, "ENABLE_VULKAN_RENDERDOC_CAPTURE");
        assert_eq!(unsafe { copy_str(&raw.value) }, "1");
        assert_eq!(raw.mod_, sys::EnvMod_Set);
    }

    #[test]
    fn taking_a_string_array_frees_elements_then_buffer() {
        let mut a: Vec<c_char> = b"one".iter().map(|&b| b as c_char).collect();
        let mut b: Vec<c_char> = b"two".iter().map(|&b| b as c_char).collect();
        let mut elems = vec![
            sys::rdctype_str {
                elems: a.as_mut_ptr(),
                count: 3,
            },
            sys::rdctype_str {
                elems: b.as_mut_ptr(),
                count: 3,
            },
        ];
        let outer = elems.as_mut_ptr() as usize;
        let mut arr = sys::rdctype_array {
            elems: elems.as_mut_ptr(),
            count: 2,
        };

        let out = unsafe { take_str_array(record_free, &mut arr) };

        assert_eq!(out, ["one", "two"]);
        assert!(arr.elems.is_null());
        let freed = FREED.lock().unwrap().clone();
        assert_eq!(freed, [a.as_ptr() as usize, b.as_ptr() as usize, outer]);
    }

    #[test]
    fn null_strings_read_as_empty() {
        assert_eq!(unsafe { copy_c_str(std::ptr::null()) }, "");
        assert_eq!(unsafe { copy_str(&sys::rdctype_str::empty()) }, "");
    }
}
