use anyhow::{Context, Result};
use std::ffi::{c_char, c_void, CStr};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture holding a seed file in a temporary directory
#[allow(dead_code)]
pub struct TestSeed {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestSeed {
    /// Write `content` as seed.toml in a fresh temporary directory
    pub fn new(content: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("seed.toml");
        std::fs::write(&path, content).context("Failed to write seed file")?;
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }
}

/// A note as delivered to a search callback
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Delivered {
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
}

#[allow(dead_code)]
unsafe fn owned(ptr: *const c_char) -> String {
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Search callback pushing every match into a `Vec<Delivered>` passed as client data
#[allow(dead_code)]
pub unsafe extern "C" fn collect_notes(
    client_data: *mut c_void,
    title: *const c_char,
    text: *const c_char,
    tags: *const *const c_char,
    nr_tags: i32,
) {
    let sink = &mut *(client_data as *mut Vec<Delivered>);
    let tags = if nr_tags > 0 {
        std::slice::from_raw_parts(tags, nr_tags as usize)
            .iter()
            .map(|tag| owned(*tag))
            .collect()
    } else {
        Vec::new()
    };
    sink.push(Delivered {
        title: owned(title),
        text: owned(text),
        tags,
    });
}

/// Tag callback pushing every tag into a `Vec<String>` passed as client data
#[allow(dead_code)]
pub unsafe extern "C" fn collect_tags(client_data: *mut c_void, tag: *const c_char) {
    let sink = &mut *(client_data as *mut Vec<String>);
    sink.push(owned(tag));
}

#[allow(dead_code)]
pub fn as_client_data<T>(value: &mut T) -> *mut c_void {
    value as *mut T as *mut c_void
}

#[allow(dead_code)]
pub fn c_str(ptr: *const c_char) -> String {
    unsafe { owned(ptr) }
}
