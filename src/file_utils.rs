use anyhow::{Context, Result};
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::track::MergedCue;

// @module: File helpers for the CLI boundary

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a subtitle document into memory
    pub fn read_subtitle_file<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))
    }

    /// Derive a format hint from a file path's extension.
    ///
    /// The reader only inspects the hint for the literal `.srt` / `.vtt`
    /// substrings; unknown extensions produce an empty hint and leave
    /// format selection to content sniffing.
    pub fn extension_hint<P: AsRef<Path>>(path: P) -> String {
        match path.as_ref().extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
            None => String::new(),
        }
    }

    // @generates: Output path for the merged subtitle next to the primary input
    pub fn merged_output_path<P: AsRef<Path>>(primary_input: P) -> PathBuf {
        let primary_input = primary_input.as_ref();
        let stem = primary_input.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push_str(".dual.srt");

        match primary_input.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        }
    }

    /// Write a merged bilingual cue stream to an SRT file
    pub fn write_merged_srt<P: AsRef<Path>>(path: P, cues: &[MergedCue]) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        for (index, cue) in cues.iter().enumerate() {
            writeln!(file, "{}", index + 1)?;
            write!(file, "{}", cue)?;
            writeln!(file)?;
        }

        Ok(())
    }
}
